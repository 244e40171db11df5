//! The `quizscore validate` command.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use quizscore_core::bank::QuestionBank;
use quizscore_core::parser::{
    load_bank_directory, parse_question_bank, validate_question_bank, ValidationWarning,
};

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks = load_banks(&bank_path)?;

    let mut needs_attention = 0;
    for bank in &banks {
        println!("{}", describe(bank));

        let warnings = validate_question_bank(bank);
        for warning in &warnings {
            println!("  {}", warning_line(bank, warning));
        }
        if !warnings.is_empty() {
            needs_attention += 1;
        }
    }

    if needs_attention == 0 {
        println!("{} question bank(s) ready to play.", banks.len());
    } else {
        println!("\n{needs_attention} of {} question bank(s) need attention.", banks.len());
    }

    Ok(())
}

fn load_banks(path: &Path) -> Result<Vec<QuestionBank>> {
    if !path.is_dir() {
        return Ok(vec![parse_question_bank(path)?]);
    }
    let banks = load_bank_directory(path)?;
    if banks.is_empty() {
        bail!("no readable question banks in {}", path.display());
    }
    Ok(banks)
}

/// `"Clean Code: 10 questions in 4 categories, 4 chapters with page ranges"`
fn describe(bank: &QuestionBank) -> String {
    let categories: HashSet<&str> = bank.questions().iter().map(|q| q.category()).collect();
    format!(
        "{}: {} questions in {} categories, {} chapters with page ranges",
        bank.name,
        bank.len(),
        categories.len(),
        bank.chapters.iter().count()
    )
}

fn warning_line(bank: &QuestionBank, warning: &ValidationWarning) -> String {
    let question = warning
        .question
        .and_then(|n| Some((n, bank.questions().get(n.checked_sub(1)?)?)));
    match question {
        Some((n, q)) => format!("question {n} {:?}: {}", q.text(), warning.message),
        None => warning.message.clone(),
    }
}
