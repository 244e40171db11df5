//! Per-attempt result accumulation.

use crate::error::QuizError;
use crate::model::QuestionResult;
use crate::summary::{summarize_categories, QuizResultSummary};

/// Answers and running score of one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    player_name: String,
    score: i64,
    question_results: Vec<QuestionResult>,
}

impl QuizResult {
    /// Any starting score is accepted, negative included.
    pub fn new(player_name: impl Into<String>, score: i64) -> Result<Self, QuizError> {
        let player_name = player_name.into();
        validate_player_name(&player_name)?;
        Ok(Self {
            player_name,
            score,
            question_results: Vec::new(),
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Answers in the order they were given.
    pub fn question_results(&self) -> &[QuestionResult] {
        &self.question_results
    }

    /// Add `amount` to the score. Negative amounts are allowed.
    pub fn increment_score(&mut self, amount: i64) -> Result<(), QuizError> {
        self.score = self.score.checked_add(amount).ok_or_else(|| {
            QuizError::InvalidScore(format!("{} + {amount} overflows", self.score))
        })?;
        Ok(())
    }

    pub fn add_question_result(&mut self, result: QuestionResult) {
        self.question_results.push(result);
    }

    /// Clear score and answers, keeping the player.
    pub fn reset(&mut self) {
        self.score = 0;
        self.question_results.clear();
    }

    /// Summarize the answers so far by category.
    pub fn generate_summary(&self) -> QuizResultSummary {
        let mut summary = QuizResultSummary::new(self.player_name.clone(), self.score);
        for category in summarize_categories(&self.question_results) {
            summary.add_category_summary(category);
        }
        summary
    }
}

pub(crate) fn validate_player_name(name: &str) -> Result<(), QuizError> {
    if name.is_empty() {
        return Err(QuizError::InvalidPlayerName);
    }
    Ok(())
}
