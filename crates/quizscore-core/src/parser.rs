//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::bank::{Chapter, Chapters, QuestionBank};
use crate::model::{Question, DEFAULT_CATEGORY};
use crate::summary::chapter_number_of;

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    chapters: Vec<Chapter>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: String,
    choices: Vec<String>,
    correct_choice: String,
    #[serde(default = "default_category")]
    category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut bank = QuestionBank::new(parsed.bank.name);
    bank.description = parsed.bank.description;
    bank.chapters = Chapters::new(parsed.chapters);

    for (i, q) in parsed.questions.into_iter().enumerate() {
        let question = Question::new(q.text, q.choices, &q.correct_choice, q.category)
            .with_context(|| {
                format!("question #{} in {} is invalid", i + 1, source_path.display())
            })?;
        bank.add_question(question);
    }

    tracing::debug!(
        bank = %bank.name,
        questions = bank.len(),
        path = %source_path.display(),
        "parsed question bank"
    );
    Ok(bank)
}

/// Recursively load all `.toml` question banks from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question position (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_question_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "bank has no questions".into(),
        });
    }

    // Duplicate question texts
    let mut seen = HashSet::new();
    for (i, q) in bank.questions().iter().enumerate() {
        if !seen.insert(q.text()) {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: format!("duplicate question text: {:?}", q.text()),
            });
        }
    }

    // Categories should look like "<Label> <number>"
    for (i, q) in bank.questions().iter().enumerate() {
        let number = chapter_number_of(q.category());
        match number {
            None => warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: format!(
                    "category {:?} has no chapter number, page hints will be unavailable",
                    q.category()
                ),
            }),
            Some(n) if !bank.chapters.is_empty()
                && bank.chapters.find_chapter_by_number(n).is_none() =>
            {
                warnings.push(ValidationWarning {
                    question: Some(i + 1),
                    message: format!("category {:?} refers to undeclared chapter {n}", q.category()),
                })
            }
            Some(_) => {}
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::QuestionSource;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
name = "Clean Code"
description = "Questions about the book"

[[chapters]]
number = 2
title = "Meaningful Names"
first_page = 17
last_page = 30

[[questions]]
text = "Should names reveal intent?"
choices = ["Yes", "No"]
correct_choice = "Yes"
category = "Chapter 2"

[[questions]]
text = "How many things should a function do?"
choices = ["One", "Two", "As many as needed"]
correct_choice = "One"
category = "Chapter 3"
"#;

    #[test]
    fn parse_valid_toml() {
        let bank = parse_question_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.name, "Clean Code");
        assert_eq!(bank.len(), 2);
        assert!(bank.has_questions());
        assert_eq!(bank.questions()[1].correct_choice_index(), 0);
        assert_eq!(bank.questions()[1].category(), "Chapter 3");
        assert_eq!(
            bank.chapters.find_chapter_by_number(2).map(|c| c.last_page),
            Some(30)
        );
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[bank]
name = "Minimal"

[[questions]]
text = "Is water wet?"
choices = ["Yes", "No"]
correct_choice = "Yes"
"#;
        let bank = parse_question_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.questions()[0].category(), DEFAULT_CATEGORY);
        assert!(bank.description.is_empty());
        assert!(bank.chapters.is_empty());
    }

    #[test]
    fn invalid_question_names_its_position() {
        let toml = r#"
[bank]
name = "Broken"

[[questions]]
text = "ok"
choices = ["a", "b"]
correct_choice = "a"

[[questions]]
text = "bad"
choices = ["a", "b"]
correct_choice = "c"
"#;
        let err = parse_question_bank_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("question #2"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_question_bank_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_flags_duplicates_and_categories() {
        let toml = r#"
[bank]
name = "Dupes"

[[chapters]]
number = 1
first_page = 1
last_page = 10

[[questions]]
text = "same"
choices = ["a", "b"]
correct_choice = "a"
category = "Chapter 1"

[[questions]]
text = "same"
choices = ["a", "b"]
correct_choice = "b"
category = "Chapter 9"

[[questions]]
text = "other"
choices = ["a", "b"]
correct_choice = "b"
category = "Misc"
"#;
        let bank = parse_question_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_question_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("undeclared chapter 9")));
        assert!(warnings
            .iter()
            .any(|w| w.question == Some(3) && w.message.contains("no chapter number")));
    }

    #[test]
    fn validate_clean_bank() {
        let bank = parse_question_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_question_bank(&bank);
        // Chapter 3 is not declared
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].question, Some(2));
    }

    #[test]
    fn validate_empty_bank() {
        let bank = parse_question_bank_str("[bank]\nname = \"Empty\"\n", &PathBuf::from("e.toml"))
            .unwrap();
        let warnings = validate_question_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("no questions")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bank.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not [toml").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let banks = load_bank_directory(dir.path()).unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].name, "Clean Code");
    }
}
