//! The `quizscore list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizscore_core::config::load_config_from;
use quizscore_core::parser::DirectorySource;
use quizscore_core::traits::QuizSource;

pub fn execute(quiz_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let dir = quiz_dir.unwrap_or(config.quiz_dir);

    let source = DirectorySource::new(dir);
    let quizzes = source.list()?;

    if quizzes.is_empty() {
        println!("No quizzes found in {}", source.name());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Questions"]);
    for quiz in &quizzes {
        table.add_row(vec![
            Cell::new(&quiz.id),
            Cell::new(&quiz.title),
            Cell::new(quiz.question_count),
        ]);
    }

    println!("{table}");
    Ok(())
}
