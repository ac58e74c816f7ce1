//! Score report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Quiz, QuizSummary};
use crate::scorer::ScoreCard;

/// The persisted result of scoring one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the quiz that was scored.
    pub quiz: QuizSummary,
    /// Percentage with two decimals, e.g. `"66.67"`.
    pub percent: String,
    /// Per-question breakdown.
    pub card: ScoreCard,
}

impl ScoreReport {
    pub fn new(quiz: &Quiz, card: ScoreCard) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz: quiz.summary(),
            percent: card.percent_display(),
            card,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.quiz.title));
        md.push_str(&format!(
            "**Score:** {}% ({} of {} correct)\n\n",
            self.percent, self.card.correct, self.card.total
        ));

        md.push_str("| Question | Outcome |\n");
        md.push_str("|----------|---------|\n");
        for o in &self.card.outcomes {
            md.push_str(&format!("| {} | {} |\n", o.question_id, o.outcome));
        }

        if !self.card.ignored.is_empty() {
            md.push_str(&format!(
                "\nIgnored answers for unknown questions: {}\n",
                self.card.ignored.join(", ")
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, AnswerSet, Choice, Question};
    use crate::scorer::{Outcome, QuizScorer};

    fn make_report() -> ScoreReport {
        let quiz = Quiz::new(
            "capitals",
            "World capitals",
            vec![
                Question::new("fr", "France?", vec![Choice::new("paris", "Paris", true)]),
                Question::new("de", "Germany?", vec![Choice::new("berlin", "Berlin", true)]),
                Question::new("it", "Italy?", vec![Choice::new("rome", "Rome", true)]),
            ],
        );
        let answers = AnswerSet::new("capitals")
            .with_answer(Answer::new("fr", ["paris"]))
            .with_answer(Answer::new("de", ["berlin"]))
            .with_answer(Answer::new("es", ["madrid"]));
        let card = QuizScorer::default().evaluate(&quiz, &answers).unwrap();
        ScoreReport::new(&quiz, card)
    }

    #[test]
    fn percent_rendered_with_two_decimals() {
        let report = make_report();
        assert_eq!(report.percent, "66.67");
        assert_eq!(report.quiz.question_count, 3);
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/report.json");

        report.save_json(&path).unwrap();
        let loaded = ScoreReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.quiz.id, "capitals");
        assert_eq!(loaded.card.correct, 2);
        assert_eq!(loaded.card.outcomes[2].outcome, Outcome::Unanswered);
    }

    #[test]
    fn load_missing_report_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ScoreReport::load_json(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn markdown_output() {
        let md = make_report().to_markdown();
        assert!(md.contains("World capitals"));
        assert!(md.contains("66.67%"));
        assert!(md.contains("| it | unanswered |"));
        assert!(md.contains("unknown questions: es"));
    }
}
