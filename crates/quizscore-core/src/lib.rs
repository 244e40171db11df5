//! quizscore-core — Question sequencing, scoring, summaries and highscores.
//!
//! This crate defines the quiz data model, the per-category aggregation
//! pipeline and the highscore list that the quizscore CLI builds on.

pub mod bank;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod highscore;
pub mod manager;
pub mod model;
pub mod parser;
pub mod recommendations;
pub mod report;
pub mod result;
pub mod summary;
pub mod traits;

pub use error::QuizError;
