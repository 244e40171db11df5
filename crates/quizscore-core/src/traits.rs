//! Core trait definitions.

use std::sync::Arc;

use crate::model::Question;

/// Anything a quiz can draw its questions from.
///
/// Implementations must return questions in a stable order: the questions
/// manager re-reads the source on reset to undo shuffles.
pub trait QuestionSource {
    /// All questions, in source order.
    fn all_questions(&self) -> Vec<Arc<Question>>;

    /// Whether the source holds at least one question.
    fn has_questions(&self) -> bool;
}

impl<T: QuestionSource + ?Sized> QuestionSource for &T {
    fn all_questions(&self) -> Vec<Arc<Question>> {
        (**self).all_questions()
    }

    fn has_questions(&self) -> bool {
        (**self).has_questions()
    }
}

impl<T: QuestionSource + ?Sized> QuestionSource for Arc<T> {
    fn all_questions(&self) -> Vec<Arc<Question>> {
        (**self).all_questions()
    }

    fn has_questions(&self) -> bool {
        (**self).has_questions()
    }
}
