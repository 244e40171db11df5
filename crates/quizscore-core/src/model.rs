//! Core data model types for quizscore.
//!
//! A [`Question`] is a validated, immutable quiz item. A [`QuestionResult`]
//! records one answer to a question and keeps a shared handle to it, so
//! category and text lookups always resolve to the question bank's copy.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::QuizError;

/// Category assigned to questions loaded without one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    choices: Vec<String>,
    correct_choice_index: usize,
    category: String,
}

impl Question {
    /// Build a question, resolving `correct_choice` to its index.
    ///
    /// Fails with [`QuizError::InvalidQuestion`] when the text is empty,
    /// there are fewer than two choices, a choice is empty or repeated, or
    /// `correct_choice` is not one of the choices.
    pub fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        correct_choice: &str,
        category: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuizError::InvalidQuestion("text is empty".into()));
        }
        if choices.len() < 2 {
            return Err(QuizError::InvalidQuestion(format!(
                "{text:?} needs at least two choices, got {}",
                choices.len()
            )));
        }
        let mut seen = HashSet::new();
        for choice in &choices {
            if choice.is_empty() {
                return Err(QuizError::InvalidQuestion(format!(
                    "{text:?} has an empty choice"
                )));
            }
            if !seen.insert(choice.as_str()) {
                return Err(QuizError::InvalidQuestion(format!(
                    "{text:?} has duplicate choice {choice:?}"
                )));
            }
        }
        let correct_choice_index = choices
            .iter()
            .position(|c| c == correct_choice)
            .ok_or_else(|| {
                QuizError::InvalidQuestion(format!(
                    "correct choice {correct_choice:?} is not one of the choices of {text:?}"
                ))
            })?;

        Ok(Self {
            text,
            choices,
            correct_choice_index,
            category: category.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_choice_index(&self) -> usize {
        self.correct_choice_index
    }

    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_choice_index]
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether `choice` is one of this question's choices.
    pub fn has_choice(&self, choice: &str) -> bool {
        self.choices.iter().any(|c| c == choice)
    }

    /// Whether `choice` is the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_choice() == choice
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.text)
    }
}

/// The outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    question: Arc<Question>,
    selected_choice: String,
    was_correct: bool,
}

impl QuestionResult {
    /// Record `selected_choice` as the answer to `question`.
    ///
    /// Fails with [`QuizError::InvalidQuestionChoice`] if the choice is empty
    /// or not one of the question's choices.
    pub fn new(
        question: Arc<Question>,
        selected_choice: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let selected_choice = selected_choice.into();
        if selected_choice.is_empty() || !question.has_choice(&selected_choice) {
            return Err(QuizError::InvalidQuestionChoice(selected_choice));
        }
        let was_correct = question.is_correct(&selected_choice);
        Ok(Self {
            question,
            selected_choice,
            was_correct,
        })
    }

    pub fn question(&self) -> &Arc<Question> {
        &self.question
    }

    pub fn selected_choice(&self) -> &str {
        &self.selected_choice
    }

    pub fn was_correct(&self) -> bool {
        self.was_correct
    }

    /// Category of the answered question.
    pub fn category(&self) -> &str {
        self.question.category()
    }
}
