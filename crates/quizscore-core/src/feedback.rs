//! Encouraging messages shown after each answer.

use rand::seq::IndexedRandom;
use rand::Rng;

const POSITIVE: &[&str] = &[
    "Excellent work!",
    "You've got it!",
    "Brilliant!",
    "Spot on!",
    "Outstanding!",
    "Superb!",
    "You're a genius!",
    "Keep up the great work!",
    "Right on the mark!",
    "Top-notch!",
];

const NEGATIVE: &[&str] = &[
    "Oops! That was a tricky one.",
    "Hang in there.",
    "It's okay, everyone makes mistakes.",
    "Good try! Let's go for the next one.",
    "That was a tough question.",
    "Keep your chin up!",
    "You'll get it next time.",
    "Don't be discouraged.",
    "Remember, every mistake is a learning opportunity.",
    "Stay focused, and you'll get it.",
];

/// Picks a random message for a correct or incorrect answer.
#[derive(Debug, Clone)]
pub struct FeedbackGenerator {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self {
            positive: POSITIVE.iter().map(|s| s.to_string()).collect(),
            negative: NEGATIVE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FeedbackGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom message lists. Empty lists fall back to the built-in ones.
    pub fn with_messages(positive: Vec<String>, negative: Vec<String>) -> Self {
        let defaults = Self::default();
        Self {
            positive: if positive.is_empty() { defaults.positive } else { positive },
            negative: if negative.is_empty() { defaults.negative } else { negative },
        }
    }

    pub fn positive(&self) -> &str {
        self.positive_with(&mut rand::rng())
    }

    pub fn negative(&self) -> &str {
        self.negative_with(&mut rand::rng())
    }

    pub fn positive_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.positive, rng)
    }

    pub fn negative_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.negative, rng)
    }

    /// Message for an answer that was (or was not) correct.
    pub fn for_answer(&self, correct: bool) -> &str {
        if correct {
            self.positive()
        } else {
            self.negative()
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(messages: &'a [String], rng: &mut R) -> &'a str {
    // Both lists are non-empty by construction.
    messages.choose(rng).map(String::as_str).unwrap_or_default()
}
