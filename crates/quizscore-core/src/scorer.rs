//! Exact-match quiz scoring.
//!
//! A question counts as correct only when the selected choices equal the set
//! of choices flagged correct: no partial credit for subsets or supersets.
//! The score is the number of correct questions divided by the number of
//! questions in the quiz, so unanswered questions count against the learner.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::model::{Answer, AnswerSet, Quiz};

/// What to do when an answer set holds several answers for one question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The last answer in submission order is the one scored.
    #[default]
    LastWins,
    /// Fail with [`ScoreError::DuplicateAnswer`].
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::LastWins => write!(f, "last_wins"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "last_wins" | "last" => Ok(DuplicatePolicy::LastWins),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(format!("unknown duplicate policy: {other}")),
        }
    }
}

/// How a single question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
    /// No answer was submitted for the question at all.
    Unanswered,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
            Outcome::Unanswered => write!(f, "unanswered"),
        }
    }
}

/// Outcome for one question of the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question_id: String,
    pub outcome: Outcome,
}

/// Breakdown of one scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Quiz that was scored.
    pub quiz_id: String,
    /// One entry per quiz question, in quiz order.
    pub outcomes: Vec<QuestionOutcome>,
    /// Number of questions answered exactly correctly.
    pub correct: usize,
    /// Number of questions in the quiz.
    pub total: usize,
    /// Question ids of answers that matched no question of the quiz.
    #[serde(default)]
    pub ignored: Vec<String>,
    /// `correct / total`, in `[0, 1]`.
    pub fraction: f64,
}

impl ScoreCard {
    /// The score as a percentage in `[0, 100]`.
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }

    /// The percentage rendered with two decimals, e.g. `"50.00"`.
    pub fn percent_display(&self) -> String {
        format!("{:.2}", self.percent())
    }
}

/// Stateless scorer; the only knob is the duplicate-answer policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizScorer {
    duplicates: DuplicatePolicy,
}

impl QuizScorer {
    pub fn new(duplicates: DuplicatePolicy) -> Self {
        Self { duplicates }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Fraction of the quiz's questions answered exactly correctly.
    pub fn score(&self, quiz: &Quiz, answers: &AnswerSet) -> Result<f64, ScoreError> {
        self.evaluate(quiz, answers).map(|card| card.fraction)
    }

    /// Score an answer set and return the per-question breakdown.
    pub fn evaluate(&self, quiz: &Quiz, answers: &AnswerSet) -> Result<ScoreCard, ScoreError> {
        if quiz.questions.is_empty() {
            return Err(ScoreError::EmptyQuiz {
                quiz_id: quiz.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        if let Some(dup) = quiz.questions.iter().find(|q| !seen.insert(q.id.as_str())) {
            return Err(ScoreError::DuplicateQuestion {
                quiz_id: quiz.id.clone(),
                question_id: dup.id.clone(),
            });
        }

        if answers.quiz_id != quiz.id {
            tracing::warn!(
                "answers for quiz '{}' scored against quiz '{}'",
                answers.quiz_id,
                quiz.id
            );
        }

        let correct_sets: HashMap<&str, _> = quiz
            .questions
            .iter()
            .map(|q| (q.id.as_str(), q.correct_choices()))
            .collect();

        // Keep one answer per known question according to the duplicate policy
        let mut submitted: HashMap<&str, &Answer> = HashMap::new();
        let mut ignored = Vec::new();
        for answer in &answers.answers {
            let key = answer.question_id.as_str();
            if !correct_sets.contains_key(key) {
                tracing::trace!("ignoring answer for unknown question '{key}'");
                ignored.push(answer.question_id.clone());
                continue;
            }
            match submitted.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(answer);
                }
                Entry::Occupied(mut slot) => match self.duplicates {
                    DuplicatePolicy::LastWins => {
                        tracing::debug!("duplicate answer for '{key}', keeping the last one");
                        slot.insert(answer);
                    }
                    DuplicatePolicy::Reject => {
                        return Err(ScoreError::DuplicateAnswer {
                            question_id: answer.question_id.clone(),
                        });
                    }
                },
            }
        }

        let outcomes: Vec<QuestionOutcome> = quiz
            .questions
            .iter()
            .map(|q| {
                let outcome = match submitted.get(q.id.as_str()) {
                    None => Outcome::Unanswered,
                    Some(answer) => {
                        let correct = &correct_sets[q.id.as_str()];
                        // Both sets iterate in sorted order, so this is set equality
                        if answer.choices.iter().map(String::as_str).eq(correct.iter().copied()) {
                            Outcome::Correct
                        } else {
                            Outcome::Incorrect
                        }
                    }
                };
                QuestionOutcome {
                    question_id: q.id.clone(),
                    outcome,
                }
            })
            .collect();

        let correct = outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Correct)
            .count();
        let total = quiz.questions.len();
        let fraction = correct as f64 / total as f64;

        tracing::debug!(
            "scored quiz '{}': {correct}/{total} correct, {} ignored",
            quiz.id,
            ignored.len()
        );

        Ok(ScoreCard {
            quiz_id: quiz.id.clone(),
            outcomes,
            correct,
            total,
            ignored,
            fraction,
        })
    }
}

/// Score with the default scorer ([`DuplicatePolicy::LastWins`]).
pub fn score(quiz: &Quiz, answers: &AnswerSet) -> Result<f64, ScoreError> {
    QuizScorer::default().score(quiz, answers)
}
