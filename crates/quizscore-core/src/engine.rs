//! Quiz driver.
//!
//! Ties question sequencing, answer recording, scoring and feedback
//! together. Every call returns a [`QuizEvent`] the front end renders.

use std::sync::Arc;

use crate::error::QuizError;
use crate::feedback::FeedbackGenerator;
use crate::highscore::{Highscore, QuizScore};
use crate::manager::QuestionsManager;
use crate::model::{Question, QuestionResult};
use crate::result::QuizResult;
use crate::summary::QuizResultSummary;
use crate::traits::QuestionSource;

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct QuizEngineConfig {
    /// Points added for each correct answer.
    pub points_per_correct: i64,
    /// Shuffle the questions when the quiz starts.
    pub shuffle: bool,
}

impl Default for QuizEngineConfig {
    fn default() -> Self {
        Self {
            points_per_correct: 10,
            shuffle: true,
        }
    }
}

/// What happened after an engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// A question is ready to be answered.
    Question {
        question: Arc<Question>,
        /// 1-based position in the quiz.
        number: usize,
        total: usize,
    },
    /// The last answer was right.
    Correct(AnswerOutcome),
    /// The last answer was wrong.
    Incorrect(AnswerOutcome),
    /// No questions left.
    Done { player_name: String, score: i64 },
}

/// Details of an answered question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub player_name: String,
    pub score: i64,
    pub selected_choice: String,
    pub correct_choice: String,
    pub feedback: String,
}

/// The quiz state machine.
pub struct QuizEngine<S> {
    manager: QuestionsManager<S>,
    result: QuizResult,
    feedback: FeedbackGenerator,
    config: QuizEngineConfig,
    answered: bool,
    done: bool,
}

impl<S: QuestionSource> QuizEngine<S> {
    pub fn new(
        source: S,
        player_name: impl Into<String>,
        config: QuizEngineConfig,
    ) -> Result<Self, QuizError> {
        let result = QuizResult::new(player_name, 0)?;
        let manager = QuestionsManager::new(source)?;
        Ok(Self {
            manager,
            result,
            feedback: FeedbackGenerator::new(),
            config,
            answered: false,
            done: false,
        })
    }

    pub fn with_feedback(mut self, feedback: FeedbackGenerator) -> Self {
        self.feedback = feedback;
        self
    }

    /// Reset score and answers, optionally shuffle, and present the first
    /// question.
    pub fn start(&mut self) -> QuizEvent {
        self.result.reset();
        self.manager.reset();
        if self.config.shuffle {
            self.manager.randomize_questions();
        }
        self.answered = false;
        self.done = false;
        tracing::debug!(
            player = self.result.player_name(),
            questions = self.manager.len(),
            shuffled = self.config.shuffle,
            "quiz started"
        );
        self.current_question_event()
    }

    /// Answer the current question with the text of a choice.
    pub fn answer_question(&mut self, choice: &str) -> Result<QuizEvent, QuizError> {
        if self.answered || self.done {
            return Err(QuizError::AlreadyAnswered);
        }
        let question = Arc::clone(self.manager.question());
        let question_result = QuestionResult::new(Arc::clone(&question), choice)?;
        let correct = question_result.was_correct();
        if correct {
            self.result.increment_score(self.config.points_per_correct)?;
        }
        self.result.add_question_result(question_result);
        self.answered = true;

        tracing::debug!(
            number = self.manager.current_index() + 1,
            correct,
            score = self.result.score(),
            "question answered"
        );

        let outcome = AnswerOutcome {
            player_name: self.result.player_name().to_string(),
            score: self.result.score(),
            selected_choice: choice.to_string(),
            correct_choice: question.correct_choice().to_string(),
            feedback: self.feedback.for_answer(correct).to_string(),
        };
        Ok(if correct {
            QuizEvent::Correct(outcome)
        } else {
            QuizEvent::Incorrect(outcome)
        })
    }

    /// Answer with a 1-based choice number.
    pub fn answer_choice_number(&mut self, number: usize) -> Result<QuizEvent, QuizError> {
        let choice = number
            .checked_sub(1)
            .and_then(|i| self.manager.question().choices().get(i))
            .cloned()
            .ok_or_else(|| QuizError::InvalidQuestionChoice(number.to_string()))?;
        self.answer_question(&choice)
    }

    /// Move on: the next question, or `Done` after the last one.
    ///
    /// An unanswered question is skipped and does not count.
    pub fn continue_quiz(&mut self) -> QuizEvent {
        if !self.done && self.manager.advance_current_index().is_ok() {
            self.answered = false;
            return self.current_question_event();
        }
        self.done = true;
        tracing::debug!(score = self.result.score(), "quiz done");
        QuizEvent::Done {
            player_name: self.result.player_name().to_string(),
            score: self.result.score(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn current_question(&self) -> &Arc<Question> {
        self.manager.question()
    }

    pub fn result(&self) -> &QuizResult {
        &self.result
    }

    pub fn summary(&self) -> QuizResultSummary {
        self.result.generate_summary()
    }

    /// Offer the current score to `highscore`.
    pub fn record_highscore(&self, highscore: &mut Highscore) -> Result<(), QuizError> {
        let score = QuizScore::new(self.result.player_name(), self.result.score())?;
        highscore.add_quiz_score(score);
        Ok(())
    }

    fn current_question_event(&self) -> QuizEvent {
        QuizEvent::Question {
            question: Arc::clone(self.manager.question()),
            number: self.manager.current_index() + 1,
            total: self.manager.len(),
        }
    }
}
