//! Seam between stored quiz records and the plain value types.
//!
//! Storage backends implement [`QuizSource`] and hand out fully materialized
//! [`Quiz`] values; the scorer never sees backend-specific records.

use anyhow::Result;

use crate::model::{Quiz, QuizSummary};

/// A place quizzes can be listed and loaded from.
pub trait QuizSource: Send + Sync {
    /// Human-readable source name (e.g. a directory path).
    fn name(&self) -> &str;

    /// Summaries of every available quiz, sorted by id.
    fn list(&self) -> Result<Vec<QuizSummary>>;

    /// Load one quiz by id.
    ///
    /// Fails with [`SourceError::QuizNotFound`](crate::error::SourceError) when
    /// the id is unknown.
    fn load(&self, id: &str) -> Result<Quiz>;
}
