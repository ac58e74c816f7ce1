//! The `quizscore score` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizscore_core::config::load_config_from;
use quizscore_core::model::{AnswerSet, Quiz};
use quizscore_core::parser::{self, DirectorySource};
use quizscore_core::report::ScoreReport;
use quizscore_core::traits::QuizSource;

pub fn execute(
    quiz_path: PathBuf,
    answers_path: PathBuf,
    format: String,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let answers = parser::parse_answer_set(&answers_path)?;
    let quiz = if quiz_path.is_dir() {
        DirectorySource::new(&quiz_path).load(&answers.quiz_id)?
    } else {
        parser::parse_quiz(&quiz_path)?
    };

    let card = config.scorer().evaluate(&quiz, &answers)?;
    let report = ScoreReport::new(&quiz, card);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => print_text(&quiz, &answers, &report),
    }

    if save {
        let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
        let path = config
            .output_dir
            .join(format!("report-{}-{timestamp}.json", quiz.id));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_text(quiz: &Quiz, answers: &AnswerSet, report: &ScoreReport) {
    println!("Quiz: {}", quiz.title);

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Selected", "Outcome"]);
    for (i, (question, outcome)) in quiz.questions.iter().zip(&report.card.outcomes).enumerate() {
        // Show the answer that was scored: the last one for this question
        let selected = answers
            .answers
            .iter()
            .rev()
            .find(|a| a.question_id == question.id)
            .map(|a| a.choices.iter().cloned().collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&question.text),
            Cell::new(selected),
            Cell::new(outcome.outcome),
        ]);
    }
    println!("{table}");

    if !report.card.ignored.is_empty() {
        println!(
            "Ignored answers for unknown questions: {}",
            report.card.ignored.join(", ")
        );
    }

    println!(
        "Score: {}% ({}/{} correct)",
        report.percent, report.card.correct, report.card.total
    );
}
