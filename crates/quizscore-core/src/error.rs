//! Quiz error types.
//!
//! Every failure the core can raise has its own variant so callers can
//! discriminate without string matching. Validation happens before any
//! mutation, so an `Err` always leaves the receiver untouched.

use thiserror::Error;

/// Errors raised by the quiz core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Player names must be non-empty.
    #[error("invalid player name: must be a non-empty string")]
    InvalidPlayerName,

    /// A score update would leave the score unrepresentable.
    #[error("invalid score: {0}")]
    InvalidScore(String),

    /// A question failed construction-time validation.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    /// The selected choice is empty or not one of the question's choices.
    #[error("invalid question choice: {0:?}")]
    InvalidQuestionChoice(String),

    /// A highscore record failed validation.
    #[error("invalid quiz score: {0}")]
    InvalidQuizScore(String),

    /// A questions manager was built from a source without questions.
    #[error("question bank cannot be empty, add some questions to the question bank")]
    EmptyQuestionBank,

    /// The question source claims to have questions but yields none.
    #[error("invalid question source: reports questions but provides none")]
    InvalidQuestionSource,

    /// Tried to advance past the last question.
    #[error("cannot advance index beyond available questions")]
    IndexOutOfRange,

    /// Highscore text is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Highscore JSON parsed, but is not a flat object.
    #[error("unexpected JSON structure: {0}")]
    UnexpectedJsonStructure(String),

    /// The current question was already answered.
    #[error("the current question has already been answered")]
    AlreadyAnswered,
}

impl QuizError {
    /// Returns `true` for construction-time validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidPlayerName
                | QuizError::InvalidScore(_)
                | QuizError::InvalidQuestion(_)
                | QuizError::InvalidQuestionChoice(_)
                | QuizError::InvalidQuizScore(_)
        )
    }

    /// Returns `true` for highscore (de)serialization failures.
    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidJson(_) | QuizError::UnexpectedJsonStructure(_)
        )
    }
}
