//! TOML quiz parser and JSON answer-set loader.
//!
//! Loads quizzes from TOML files and directories, validates them, and exposes
//! a directory of quiz files as a [`QuizSource`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::SourceError;
use crate::model::{AnswerSet, Choice, Question, Quiz, QuizSummary};
use crate::traits::QuizSource;

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    #[serde(default)]
    choices: Vec<TomlChoice>,
}

#[derive(Debug, Deserialize)]
struct TomlChoice {
    id: String,
    text: String,
    #[serde(default)]
    correct: bool,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id,
            text: q.text,
            choices: q
                .choices
                .into_iter()
                .map(|c| Choice {
                    id: c.id,
                    text: c.text,
                    is_correct: c.correct,
                })
                .collect(),
        })
        .collect();

    Ok(Quiz {
        id: parsed.quiz.id,
        title: parsed.quiz.title,
        questions,
    })
}

/// Recursively load all `.toml` quiz files from a directory.
///
/// Files are visited in path order; files that fail to parse are skipped.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();
    for (path, parsed) in scan_quiz_directory(dir)? {
        match parsed {
            Ok(quiz) => quizzes.push(quiz),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }
    Ok(quizzes)
}

/// Parse every `.toml` file under `dir`, sorted by path, keeping failures.
fn scan_quiz_directory(dir: &Path) -> Result<Vec<(PathBuf, Result<Quiz>)>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = Vec::new();
    collect_toml_paths(dir, &mut paths)?;
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let parsed = parse_quiz(&path);
            (path, parsed)
        })
        .collect())
}

fn collect_toml_paths(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            collect_toml_paths(&path, paths)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    Ok(())
}

/// Load a quiz file, or every quiz under a directory.
pub fn load_quizzes(path: &Path) -> Result<Vec<Quiz>> {
    if path.is_dir() {
        load_quiz_directory(path)
    } else {
        Ok(vec![parse_quiz(path)?])
    }
}

/// Parse a JSON answer-set file.
pub fn parse_answer_set(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;

    parse_answer_set_str(&content)
        .with_context(|| format!("failed to parse answers: {}", path.display()))
}

/// Parse a JSON answer-set string.
pub fn parse_answer_set_str(content: &str) -> Result<AnswerSet> {
    serde_json::from_str(content).context("invalid answer set JSON")
}

/// A directory of quiz TOML files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    name: String,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = dir.display().to_string();
        Self { dir, name }
    }
}

impl QuizSource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn list(&self) -> Result<Vec<QuizSummary>> {
        let quizzes = load_quiz_directory(&self.dir)?;
        let mut seen = HashSet::new();
        for quiz in &quizzes {
            if !seen.insert(quiz.id.as_str()) {
                return Err(SourceError::DuplicateQuiz(quiz.id.clone()).into());
            }
        }

        let mut summaries: Vec<QuizSummary> = quizzes.iter().map(Quiz::summary).collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }

    fn load(&self, id: &str) -> Result<Quiz> {
        let mut found = None;
        let mut failures = Vec::new();

        for (path, parsed) in scan_quiz_directory(&self.dir)? {
            match parsed {
                Ok(quiz) if quiz.id == id => {
                    if found.is_some() {
                        return Err(SourceError::DuplicateQuiz(id.to_string()).into());
                    }
                    found = Some(quiz);
                }
                Ok(_) => {}
                Err(e) => failures.push(format!("{}: {:#}", path.display(), e)),
            }
        }

        match found {
            Some(quiz) => Ok(quiz),
            None if failures.is_empty() => Err(SourceError::QuizNotFound(id.to_string()).into()),
            // The quiz may live in one of the files that did not parse
            None => Err(anyhow::Error::from(SourceError::QuizNotFound(id.to_string()))
                .context(format!("unparsable quiz files: {}", failures.join("; ")))),
        }
    }
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for structural issues.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "quiz has no questions and cannot be scored".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for question in &quiz.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }

        if question.choices.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question has no choices".into(),
            });
            continue;
        }

        let mut seen_choices = HashSet::new();
        for choice in &question.choices {
            if !seen_choices.insert(&choice.id) {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!("duplicate choice ID: {}", choice.id),
                });
            }
        }

        if !question.choices.iter().any(|c| c.is_correct) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "no correct choice; only an empty answer scores".into(),
            });
        }
    }

    warnings
}
