//! The `quizscore init` command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::QuizConfig;

const CONFIG_PATH: &str = "quizscore.toml";
const BANK_PATH: &str = "questions/example.toml";

pub fn execute() -> Result<()> {
    let config = sample_config()?;
    let mut created = 0;

    for (path, contents) in [(CONFIG_PATH, config.as_str()), (BANK_PATH, EXAMPLE_BANK)] {
        if write_if_absent(Path::new(path), contents)? {
            println!("Created {path}");
            created += 1;
        } else {
            println!("Kept existing {path}");
        }
    }

    if created > 0 {
        println!("\nTry it:");
        println!("  quizscore validate --bank {BANK_PATH}");
        println!("  quizscore play --bank {BANK_PATH}");
    }

    Ok(())
}

/// The default configuration, rendered the way `load_config_from` reads it.
fn sample_config() -> Result<String> {
    let body = toml::to_string_pretty(&QuizConfig::default())
        .context("failed to render default config")?;
    Ok(format!(
        "# quizscore configuration\n\n{body}# report_dir = \"reports\"\n"
    ))
}

/// Write `contents` unless `path` exists. Returns whether it wrote.
fn write_if_absent(path: &Path, contents: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

const EXAMPLE_BANK: &str = r#"[bank]
name = "Example"
description = "A small example question bank to get started"

[[chapters]]
number = 1
title = "Basics"
first_page = 1
last_page = 12

[[chapters]]
number = 2
title = "Ownership"
first_page = 13
last_page = 40

[[questions]]
text = "Which keyword declares an immutable binding?"
choices = ["let", "mut", "const fn"]
correct_choice = "let"
category = "Chapter 1"

[[questions]]
text = "Which macro prints a line to stdout?"
choices = ["print!", "println!", "format!"]
correct_choice = "println!"
category = "Chapter 1"

[[questions]]
text = "How many owners can a value have at a time?"
choices = ["One", "Two", "Any number"]
correct_choice = "One"
category = "Chapter 2"

[[questions]]
text = "Can you hold a mutable and an immutable borrow at the same time?"
choices = ["Yes", "No"]
correct_choice = "No"
category = "Chapter 2"
"#;
