//! Answer accumulation for an in-progress quiz attempt.
//!
//! A learner answers one question per page and may revisit earlier pages.
//! [`Attempt`] holds the selections made so far as an explicit value and turns
//! them into an [`AnswerSet`] once the last page is submitted.

use std::collections::{BTreeSet, HashMap};

use crate::error::AttemptError;
use crate::model::{Answer, AnswerSet, Quiz};

/// Selections recorded so far for one quiz.
#[derive(Debug, Clone)]
pub struct Attempt<'q> {
    quiz: &'q Quiz,
    selections: HashMap<String, BTreeSet<String>>,
}

impl<'q> Attempt<'q> {
    pub fn new(quiz: &'q Quiz) -> Self {
        Self {
            quiz,
            selections: HashMap::new(),
        }
    }

    /// Record the selection for a question, replacing any earlier one.
    pub fn record<I, S>(&mut self, question_id: &str, choices: I) -> Result<(), AttemptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.quiz.question(question_id).is_none() {
            return Err(AttemptError::UnknownQuestion {
                quiz_id: self.quiz.id.clone(),
                question_id: question_id.to_string(),
            });
        }
        let choices: BTreeSet<String> = choices.into_iter().map(Into::into).collect();
        if self
            .selections
            .insert(question_id.to_string(), choices)
            .is_some()
        {
            tracing::debug!("replaced earlier selection for question '{question_id}'");
        }
        Ok(())
    }

    /// Previously selected choices for a question; empty if never answered.
    pub fn selected(&self, question_id: &str) -> BTreeSet<String> {
        self.selections
            .get(question_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    /// True once every question of the quiz has a recorded selection.
    pub fn is_complete(&self) -> bool {
        self.quiz
            .questions
            .iter()
            .all(|q| self.selections.contains_key(&q.id))
    }

    /// Build the answer set, ordered as the quiz's questions.
    pub fn into_answer_set(mut self) -> AnswerSet {
        let quiz = self.quiz;
        let answers = quiz
            .questions
            .iter()
            .filter_map(|q| {
                self.selections.remove(&q.id).map(|choices| Answer {
                    question_id: q.id.clone(),
                    choices,
                })
            })
            .collect();
        AnswerSet {
            quiz_id: quiz.id.clone(),
            answers,
        }
    }
}

/// Where a learner goes after submitting a question page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show the question with this 1-based number.
    Next(usize),
    /// The last question was submitted; score the attempt.
    Finished,
}

impl Step {
    /// Step following the submission of question `number` out of `count`.
    pub fn after(number: usize, count: usize) -> Result<Step, AttemptError> {
        check_range(number, count)?;
        if number == count {
            Ok(Step::Finished)
        } else {
            Ok(Step::Next(number + 1))
        }
    }

    /// Question number of the previous page, if any.
    pub fn previous(number: usize, count: usize) -> Result<Option<usize>, AttemptError> {
        check_range(number, count)?;
        Ok((number > 1).then_some(number - 1))
    }
}

fn check_range(number: usize, count: usize) -> Result<(), AttemptError> {
    if number == 0 || number > count {
        return Err(AttemptError::QuestionOutOfRange { number, count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, Question};
    use crate::scorer::score;

    fn quiz() -> Quiz {
        Quiz::new(
            "capitals",
            "Capitals",
            vec![
                Question::new(
                    "fr",
                    "France?",
                    vec![Choice::new("paris", "Paris", true), Choice::new("lyon", "Lyon", false)],
                ),
                Question::new(
                    "de",
                    "Germany?",
                    vec![Choice::new("berlin", "Berlin", true), Choice::new("bonn", "Bonn", false)],
                ),
            ],
        )
    }

    #[test]
    fn record_and_prefill() {
        let quiz = quiz();
        let mut attempt = Attempt::new(&quiz);
        assert!(attempt.selected("fr").is_empty());

        attempt.record("fr", ["lyon"]).unwrap();
        attempt.record("fr", ["paris"]).unwrap();
        assert_eq!(attempt.selected("fr").into_iter().collect::<Vec<_>>(), vec!["paris"]);
        assert_eq!(attempt.answered_count(), 1);
        assert!(!attempt.is_complete());
    }

    #[test]
    fn unknown_question_rejected() {
        let quiz = quiz();
        let mut attempt = Attempt::new(&quiz);
        let err = attempt.record("es", ["madrid"]).unwrap_err();
        assert!(matches!(err, AttemptError::UnknownQuestion { .. }));
        assert_eq!(attempt.answered_count(), 0);
    }

    #[test]
    fn answer_set_follows_quiz_order() {
        let quiz = quiz();
        let mut attempt = Attempt::new(&quiz);
        attempt.record("de", ["berlin"]).unwrap();
        attempt.record("fr", ["paris"]).unwrap();
        assert!(attempt.is_complete());

        let set = attempt.into_answer_set();
        assert_eq!(set.quiz_id, "capitals");
        let ids: Vec<&str> = set.answers.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, vec!["fr", "de"]);
        assert_eq!(score(&quiz, &set).unwrap(), 1.0);
    }

    #[test]
    fn empty_selection_is_recorded() {
        let quiz = quiz();
        let mut attempt = Attempt::new(&quiz);
        attempt.record("fr", Vec::<String>::new()).unwrap();
        let set = attempt.into_answer_set();
        assert_eq!(set.len(), 1);
        assert!(set.answers[0].choices.is_empty());
    }

    #[test]
    fn step_progression() {
        assert_eq!(Step::after(1, 3).unwrap(), Step::Next(2));
        assert_eq!(Step::after(3, 3).unwrap(), Step::Finished);
        assert_eq!(Step::previous(1, 3).unwrap(), None);
        assert_eq!(Step::previous(3, 3).unwrap(), Some(2));
        assert!(matches!(
            Step::previous(4, 3),
            Err(AttemptError::QuestionOutOfRange { number: 4, count: 3 })
        ));
        assert!(Step::after(0, 3).is_err());
        assert!(Step::after(4, 3).is_err());
        assert!(Step::after(1, 0).is_err());
    }
}
