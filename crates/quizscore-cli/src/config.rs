//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizscore configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Name recorded in the highscore list.
    #[serde(default = "default_player")]
    pub player_name: String,
    /// Points per correct answer.
    #[serde(default = "default_points")]
    pub points_per_correct: i64,
    /// How many entries the highscore file keeps.
    #[serde(default = "default_max_highscores")]
    pub max_highscores: usize,
    /// Where the highscore JSON lives.
    #[serde(default = "default_highscore_file")]
    pub highscore_file: PathBuf,
    /// Shuffle questions before each quiz.
    #[serde(default = "default_true")]
    pub shuffle: bool,
    /// Directory for attempt reports; none means reports are only written
    /// when `--report` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
}

fn default_player() -> String {
    "Player1".to_string()
}
fn default_points() -> i64 {
    10
}
fn default_max_highscores() -> usize {
    10
}
fn default_highscore_file() -> PathBuf {
    PathBuf::from("highscore.json")
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            player_name: default_player(),
            points_per_correct: default_points(),
            max_highscores: default_max_highscores(),
            highscore_file: default_highscore_file(),
            shuffle: true,
            report_dir: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizscore.toml` in the current directory
/// 2. `~/.config/quizscore/config.toml`
///
/// Environment variable overrides: `QUIZSCORE_PLAYER`,
/// `QUIZSCORE_HIGHSCORE_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizscore.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            parse_config(&path)?
        }
        None => QuizConfig::default(),
    };

    if let Ok(player) = std::env::var("QUIZSCORE_PLAYER") {
        if !player.is_empty() {
            config.player_name = player;
        }
    }
    if let Ok(file) = std::env::var("QUIZSCORE_HIGHSCORE_FILE") {
        if !file.is_empty() {
            config.highscore_file = PathBuf::from(file);
        }
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<QuizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizscore"))
}
