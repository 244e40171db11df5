//! Highscore list with replace-if-higher semantics and a flat JSON format.
//!
//! The persisted form is a single JSON object mapping player names to
//! integer scores, e.g. `{"Alice": 40, "Bob": 25}`.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::QuizError;

/// One player's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    player_name: String,
    score: i64,
}

impl QuizScore {
    pub fn new(player_name: impl Into<String>, score: i64) -> Result<Self, QuizError> {
        let player_name = player_name.into();
        if player_name.is_empty() {
            return Err(QuizError::InvalidQuizScore(
                "player name must be a non-empty string".into(),
            ));
        }
        Ok(Self { player_name, score })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Ranked player/score pairs, one per player when filled through
/// [`add_quiz_score`](Highscore::add_quiz_score).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highscore {
    all_quiz_scores: Vec<QuizScore>,
}

impl Highscore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a score, keeping only the better one for a known player.
    ///
    /// Ties and lower scores for an existing player are dropped silently.
    pub fn add_quiz_score(&mut self, new_score: QuizScore) {
        match self
            .all_quiz_scores
            .iter_mut()
            .find(|s| s.player_name == new_score.player_name)
        {
            Some(existing) => {
                if existing.score < new_score.score {
                    *existing = new_score;
                }
            }
            None => self.all_quiz_scores.push(new_score),
        }
    }

    /// Sort by score, highest first. Equal scores keep their relative order.
    pub fn sort_quiz_scores(&mut self) {
        self.all_quiz_scores.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Keep the first `max_amount_of_scores` entries in current order.
    ///
    /// This does not sort; call [`sort_quiz_scores`](Self::sort_quiz_scores)
    /// first, or use [`top_n`](Self::top_n).
    pub fn limit_amount_of_scores(&mut self, max_amount_of_scores: usize) {
        self.all_quiz_scores.truncate(max_amount_of_scores);
    }

    /// Sort, then keep the best `n` scores.
    pub fn top_n(&mut self, n: usize) {
        self.sort_quiz_scores();
        self.limit_amount_of_scores(n);
    }

    /// Append one record per key of a flat `{player: score}` JSON object.
    ///
    /// Records are inserted as they appear, without replacement rules. On
    /// error nothing is inserted.
    pub fn from_json(&mut self, json: &str) -> Result<(), QuizError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| QuizError::InvalidJson(e.to_string()))?;
        let object = match value {
            Value::Object(object) => object,
            Value::Null => {
                return Err(QuizError::UnexpectedJsonStructure(
                    "expected a non-null object structure, got null".into(),
                ))
            }
            Value::Array(_) => {
                return Err(QuizError::UnexpectedJsonStructure(
                    "expected a non-null object structure, got an array".into(),
                ))
            }
            other => {
                return Err(QuizError::UnexpectedJsonStructure(format!(
                    "expected a non-null object structure, got {other}"
                )))
            }
        };

        let scores = object
            .into_iter()
            .map(|(player, score)| {
                let points = integral_score(&score).ok_or_else(|| {
                    QuizError::InvalidQuizScore(format!(
                        "score for {player:?} must be a whole number, got {score}"
                    ))
                })?;
                QuizScore::new(player, points)
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.all_quiz_scores.extend(scores);
        Ok(())
    }

    /// Serialize to the flat `{player: score}` form. For duplicate player
    /// names the later record wins.
    pub fn to_json(&self) -> String {
        let mut object = Map::new();
        for s in &self.all_quiz_scores {
            object.insert(s.player_name.clone(), Value::from(s.score));
        }
        Value::Object(object).to_string()
    }

    /// `"<rank>) <player> : <score>"` lines in current order, ranks from 1.
    pub fn to_array(&self) -> Vec<String> {
        self.all_quiz_scores
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}) {} : {}", i + 1, s.player_name, s.score))
            .collect()
    }

    pub fn quiz_scores(&self) -> &[QuizScore] {
        &self.all_quiz_scores
    }

    pub fn score_of(&self, player_name: &str) -> Option<i64> {
        self.all_quiz_scores
            .iter()
            .find(|s| s.player_name == player_name)
            .map(|s| s.score)
    }

    pub fn len(&self) -> usize {
        self.all_quiz_scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_quiz_scores.is_empty()
    }

    /// Load a highscore file. A missing file yields an empty highscore.
    pub fn load(path: &Path) -> Result<Self> {
        let mut highscore = Self::new();
        if !path.exists() {
            return Ok(highscore);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read highscore from {}", path.display()))?;
        highscore
            .from_json(&content)
            .with_context(|| format!("failed to parse highscore {}", path.display()))?;
        Ok(highscore)
    }

    /// Write the flat JSON form to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json())
            .with_context(|| format!("failed to write highscore to {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = self.len(), "saved highscore");
        Ok(())
    }
}

/// Whole-number JSON scores, whether written as `40`, `40.0` or `4e1`.
/// Fractional and out-of-range values are rejected.
fn integral_score(value: &Value) -> Option<i64> {
    if let Some(points) = value.as_i64() {
        return Some(points);
    }
    let points = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if points.fract() == 0.0 && points >= i64::MIN as f64 && points < i64::MAX as f64 {
        Some(points as i64)
    } else {
        None
    }
}

impl fmt::Display for Highscore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_array().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(name: &str, points: i64) -> QuizScore {
        QuizScore::new(name, points).unwrap()
    }

    fn json_value(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn quiz_score_validates_name() {
        assert!(matches!(QuizScore::new("", 3), Err(QuizError::InvalidQuizScore(_))));
        assert_eq!(score("Ann", -1).score(), -1);
    }

    #[test]
    fn add_replaces_only_when_strictly_higher() {
        let mut hs = Highscore::new();
        hs.add_quiz_score(score("Alice", 20));
        hs.add_quiz_score(score("Alice", 10));
        assert_eq!(hs.score_of("Alice"), Some(20));
        hs.add_quiz_score(score("Alice", 20));
        assert_eq!(hs.score_of("Alice"), Some(20));
        hs.add_quiz_score(score("Alice", 35));
        assert_eq!(hs.score_of("Alice"), Some(35));
        assert_eq!(hs.len(), 1);

        hs.add_quiz_score(score("Bob", 5));
        assert_eq!(hs.len(), 2);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut hs = Highscore::new();
        for (name, points) in [("a", 10), ("b", 30), ("c", 10), ("d", 20)] {
            hs.add_quiz_score(score(name, points));
        }
        hs.sort_quiz_scores();
        let names: Vec<_> = hs.quiz_scores().iter().map(|s| s.player_name()).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn limit_truncates_in_current_order() {
        let mut hs = Highscore::new();
        for (name, points) in [("low", 1), ("high", 100), ("mid", 50)] {
            hs.add_quiz_score(score(name, points));
        }
        let mut unsorted = hs.clone();
        unsorted.limit_amount_of_scores(1);
        assert_eq!(unsorted.to_array(), vec!["1) low : 1"]);

        hs.top_n(2);
        assert_eq!(hs.to_array(), vec!["1) high : 100", "2) mid : 50"]);

        hs.limit_amount_of_scores(10);
        assert_eq!(hs.len(), 2);
    }

    #[test]
    fn json_roundtrip() {
        let mut hs = Highscore::new();
        hs.from_json(r#"{"Alice":40,"Bob":25}"#).unwrap();
        assert_eq!(hs.len(), 2);
        assert_eq!(json_value(&hs.to_json()), json_value(r#"{"Bob":25,"Alice":40}"#));

        let mut fresh = Highscore::new();
        fresh.from_json(&hs.to_json()).unwrap();
        assert_eq!(fresh, hs);
    }

    #[test]
    fn from_json_appends_without_dedup() {
        let mut hs = Highscore::new();
        hs.add_quiz_score(score("Alice", 99));
        hs.from_json(r#"{"Alice":1}"#).unwrap();
        assert_eq!(hs.len(), 2);
        // later record wins on serialization
        assert_eq!(json_value(&hs.to_json()), json_value(r#"{"Alice":1}"#));
    }

    #[test]
    fn from_json_error_kinds() {
        let mut hs = Highscore::new();
        assert!(matches!(hs.from_json("not json"), Err(QuizError::InvalidJson(_))));
        assert!(matches!(
            hs.from_json("[1,2,3]"),
            Err(QuizError::UnexpectedJsonStructure(_))
        ));
        assert!(matches!(hs.from_json("null"), Err(QuizError::UnexpectedJsonStructure(_))));
        assert!(matches!(hs.from_json("42"), Err(QuizError::UnexpectedJsonStructure(_))));
        assert!(matches!(
            hs.from_json(r#"{"Alice":"ten"}"#),
            Err(QuizError::InvalidQuizScore(_))
        ));
        assert!(hs.is_empty());
    }

    #[test]
    fn from_json_accepts_whole_float_scores() {
        let mut hs = Highscore::new();
        hs.from_json(r#"{"Alice":40.0,"Bob":1e2,"Carol":-3.0}"#).unwrap();
        assert_eq!(hs.score_of("Alice"), Some(40));
        assert_eq!(hs.score_of("Bob"), Some(100));
        assert_eq!(hs.score_of("Carol"), Some(-3));
    }

    #[test]
    fn from_json_rejects_fractional_and_huge_scores() {
        let mut hs = Highscore::new();
        assert!(matches!(
            hs.from_json(r#"{"Alice":40,"Bob":12.5}"#),
            Err(QuizError::InvalidQuizScore(_))
        ));
        assert!(matches!(
            hs.from_json(r#"{"Alice":1e30}"#),
            Err(QuizError::InvalidQuizScore(_))
        ));
        assert!(matches!(
            hs.from_json(r#"{"Alice":18446744073709551615}"#),
            Err(QuizError::InvalidQuizScore(_))
        ));
        assert!(hs.is_empty());
    }

    #[test]
    fn from_json_keeps_whitespace_names() {
        let mut hs = Highscore::new();
        hs.from_json(r#"{" ":10,"Bob":5}"#).unwrap();
        assert_eq!(hs.len(), 2);
        assert_eq!(hs.score_of(" "), Some(10));
        assert_eq!(hs.score_of("Bob"), Some(5));
        assert!(matches!(hs.from_json(r#"{"":1}"#), Err(QuizError::InvalidQuizScore(_))));
    }

    #[test]
    fn display_and_array() {
        let mut hs = Highscore::new();
        hs.add_quiz_score(score("Alice", 10));
        hs.add_quiz_score(score("Bob", 8));
        assert_eq!(hs.to_array(), vec!["1) Alice : 10", "2) Bob : 8"]);
        assert_eq!(hs.to_string(), "1) Alice : 10, 2) Bob : 8");
        assert_eq!(Highscore::new().to_string(), "");
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("highscore.json");

        assert!(Highscore::load(&path).unwrap().is_empty());

        let mut hs = Highscore::new();
        hs.add_quiz_score(score("Alice", 40));
        hs.save(&path).unwrap();

        let loaded = Highscore::load(&path).unwrap();
        assert_eq!(loaded.score_of("Alice"), Some(40));
    }

    #[test]
    fn load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        std::fs::write(&path, "[]").unwrap();
        let err = Highscore::load(&path).unwrap_err();
        assert!(err.downcast_ref::<QuizError>().is_some());
    }
}
