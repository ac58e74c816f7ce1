//! Core data model types for quizscore.
//!
//! Quizzes are read-only value types loaded once per scoring. Answer sets are
//! built transiently from learner input and discarded after scoring.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One answerable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique within its question.
    pub id: String,
    /// Display text.
    pub text: String,
    /// Whether selecting this choice is part of the correct answer.
    #[serde(default)]
    pub is_correct: bool,
}

impl Choice {
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_correct,
        }
    }
}

/// A single quiz item with its ordered choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its quiz.
    pub id: String,
    /// Display text.
    pub text: String,
    /// Choices in display order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            choices,
        }
    }

    /// Identifiers of the choices flagged correct. May be empty.
    pub fn correct_choices(&self) -> BTreeSet<&str> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| c.id.as_str())
            .collect()
    }
}

/// A named, ordered collection of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique quiz identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Questions in page order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(id: impl Into<String>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            questions,
        }
    }

    /// Look up a question by identifier.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            question_count: self.questions.len(),
        }
    }
}

/// Summary of a quiz (without the question definitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
}

/// A learner's response to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The question this answers. Not checked against any quiz.
    pub question_id: String,
    /// Selected choice identifiers; empty means "no answer".
    #[serde(default)]
    pub choices: BTreeSet<String>,
}

impl Answer {
    pub fn new<I, S>(question_id: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question_id: question_id.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

/// The full submission for one quiz attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    /// The quiz this submission was made for.
    pub quiz_id: String,
    /// Answers in submission order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new(quiz_id: impl Into<String>) -> Self {
        Self {
            quiz_id: quiz_id.into(),
            answers: Vec::new(),
        }
    }

    /// Builder-style append.
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.push(answer);
        self
    }

    pub fn push(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }
}
