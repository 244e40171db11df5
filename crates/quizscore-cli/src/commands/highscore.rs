//! The `quizscore highscore` command.

use std::path::PathBuf;

use anyhow::{bail, Result};
use comfy_table::{Cell, Table};
use quizscore_core::highscore::Highscore;

use crate::config::load_config_from;

pub fn execute(file: Option<PathBuf>, format: String, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let path = file.unwrap_or(config.highscore_file);

    let mut highscore = Highscore::load(&path)?;
    highscore.sort_quiz_scores();

    match format.as_str() {
        "json" => println!("{}", highscore.to_json()),
        "text" => {
            if highscore.is_empty() {
                println!("No highscores yet.");
            }
            for line in highscore.to_array() {
                println!("{line}");
            }
        }
        "table" => {
            if highscore.is_empty() {
                println!("No highscores yet.");
            } else {
                println!("{}", render_table(&highscore));
            }
        }
        other => bail!("unknown format: {other}. Use: text, table, json"),
    }

    Ok(())
}

/// Ranked highscore table, in the list's current order.
pub fn render_table(highscore: &Highscore) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Rank", "Player", "Score"]);
    for (i, score) in highscore.quiz_scores().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(score.player_name()),
            Cell::new(score.score()),
        ]);
    }
    table
}
