//! Question sequencing: current position, advance, shuffle, reset.

use std::sync::Arc;

use rand::Rng;

use crate::error::QuizError;
use crate::model::Question;
use crate::traits::QuestionSource;

/// Walks through a working copy of a question source.
///
/// The working set is never empty, so `current_index` always points at a
/// question.
#[derive(Debug)]
pub struct QuestionsManager<S> {
    source: S,
    questions: Vec<Arc<Question>>,
    current_index: usize,
}

impl<S: QuestionSource> QuestionsManager<S> {
    pub fn new(source: S) -> Result<Self, QuizError> {
        if !source.has_questions() {
            return Err(QuizError::EmptyQuestionBank);
        }
        let questions = source.all_questions();
        if questions.is_empty() {
            return Err(QuizError::InvalidQuestionSource);
        }
        Ok(Self {
            source,
            questions,
            current_index: 0,
        })
    }

    /// Whether another question follows the current one.
    pub fn has_more_questions(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    /// The question at the current index.
    pub fn question(&self) -> &Arc<Question> {
        &self.questions[self.current_index]
    }

    /// Move to the next question.
    ///
    /// Callers check [`has_more_questions`](Self::has_more_questions) first;
    /// advancing past the last question is an error, not a no-op.
    pub fn advance_current_index(&mut self) -> Result<(), QuizError> {
        if !self.has_more_questions() {
            return Err(QuizError::IndexOutOfRange);
        }
        self.current_index += 1;
        Ok(())
    }

    /// Shuffle the working set in place using the thread-local RNG.
    pub fn randomize_questions(&mut self) {
        self.randomize_questions_with(&mut rand::rng());
    }

    /// Fisher-Yates shuffle over the whole working set. The current index is
    /// left as is.
    pub fn randomize_questions_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (0..self.questions.len()).rev() {
            let random_index = rng.random_range(0..=i);
            self.questions.swap(i, random_index);
        }
    }

    /// Back to the first question, in source order.
    pub fn reset(&mut self) {
        self.current_index = 0;
        let questions = self.source.all_questions();
        // A source that empties itself after construction keeps the old set.
        if !questions.is_empty() {
            self.questions = questions;
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Arc<Question>] {
        &self.questions
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
