//! The `quizscore init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizscore.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("quizzes/example.toml"), EXAMPLE_QUIZ)?;
    write_if_missing(Path::new("answers/example.json"), EXAMPLE_ANSWERS)?;

    println!("\nNext steps:");
    println!("  1. Run: quizscore validate --quiz quizzes/example.toml");
    println!("  2. Run: quizscore list");
    println!("  3. Run: quizscore score --quiz quizzes --answers answers/example.json");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("Created {}", path.display());
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizscore configuration

# How to treat several answers for the same question: "last_wins" or "reject"
duplicate_policy = "last_wins"
output_dir = "./quizscore-results"
quiz_dir = "./quizzes"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
id = "example"
title = "Example Quiz"

[[questions]]
id = "capital"
text = "What is the capital of France?"
choices = [
    { id = "paris", text = "Paris", correct = true },
    { id = "lyon", text = "Lyon" },
    { id = "nice", text = "Nice" },
]

[[questions]]
id = "primes"
text = "Which of these numbers are prime?"
choices = [
    { id = "two", text = "2", correct = true },
    { id = "four", text = "4" },
    { id = "seven", text = "7", correct = true },
]
"#;

const EXAMPLE_ANSWERS: &str = r#"{
  "quiz_id": "example",
  "answers": [
    { "question_id": "capital", "choices": ["paris"] },
    { "question_id": "primes", "choices": ["two"] }
  ]
}
"#;
