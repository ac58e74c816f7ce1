//! Error types for scoring, answer accumulation, and quiz lookup.
//!
//! File and config plumbing uses `anyhow`; these enums cover the conditions
//! callers are expected to match on.

use thiserror::Error;

/// Errors that can occur when scoring an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The quiz has no questions, so the score is undefined.
    #[error("quiz '{quiz_id}' has no questions; score is undefined")]
    EmptyQuiz { quiz_id: String },

    /// Two questions of the quiz share an identifier.
    #[error("quiz '{quiz_id}' has more than one question with id '{question_id}'")]
    DuplicateQuestion {
        quiz_id: String,
        question_id: String,
    },

    /// More than one answer was submitted for the same question.
    #[error("duplicate answer for question '{question_id}'")]
    DuplicateAnswer { question_id: String },
}

/// Errors raised while accumulating answers for an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    /// The question is not part of the quiz being attempted.
    #[error("question '{question_id}' is not part of quiz '{quiz_id}'")]
    UnknownQuestion { quiz_id: String, question_id: String },

    /// A 1-based question number outside `1..=count`.
    #[error("question number {number} is out of range 1..={count}")]
    QuestionOutOfRange { number: usize, count: usize },
}

/// Errors raised by a [`QuizSource`](crate::traits::QuizSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// No quiz with the given identifier exists in the source.
    #[error("quiz not found: {0}")]
    QuizNotFound(String),

    /// More than one quiz in the source declares the same identifier.
    #[error("more than one quiz with id: {0}")]
    DuplicateQuiz(String),
}

impl ScoreError {
    /// Returns `true` when the quiz itself is malformed, whatever the answers.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ScoreError::EmptyQuiz { .. } | ScoreError::DuplicateQuestion { .. }
        )
    }
}
