//! Quiz attempt reports with JSON persistence and markdown output.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::{Chapters, QuestionBank};
use crate::recommendations::{page_hint, Performance};
use crate::result::QuizResult;
use crate::summary::QuizResultSummary;

/// A finished (or abandoned) quiz attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The bank the questions came from.
    pub bank: BankSummary,
    /// Score and per-category breakdown.
    pub summary: QuizResultSummary,
    /// Every answer, in answer order.
    pub answers: Vec<AnswerRecord>,
}

/// Summary of a question bank (without the questions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub name: String,
    pub question_count: usize,
    #[serde(default)]
    pub chapters: Chapters,
}

/// One answered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub category: String,
    pub selected_choice: String,
    pub correct_choice: String,
    pub was_correct: bool,
}

impl QuizReport {
    pub fn new(bank: &QuestionBank, result: &QuizResult) -> Self {
        let answers = result
            .question_results()
            .iter()
            .map(|r| AnswerRecord {
                question: r.question().text().to_string(),
                category: r.category().to_string(),
                selected_choice: r.selected_choice().to_string(),
                correct_choice: r.question().correct_choice().to_string(),
                was_correct: r.was_correct(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                name: bank.name.clone(),
                question_count: bank.len(),
                chapters: bank.chapters.clone(),
            },
            summary: result.generate_summary(),
            answers,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved quiz report");
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# Quiz summary: {}\n\n", self.bank.name));
        md.push_str(&format!(
            "**Player:** {} | **Score:** {} | **Correct:** {}/{} | {}\n\n",
            self.summary.player_name(),
            self.summary.score(),
            self.summary.amount_of_correct_answers(),
            self.summary.amount_of_questions(),
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if !self.summary.all_category_summaries().is_empty() {
            md.push_str("| Category | Questions | Correct | Percentage | Status |\n");
            md.push_str("|----------|-----------|---------|------------|--------|\n");
            for s in self.summary.all_category_summaries() {
                md.push_str(&format!(
                    "| {} | {} | {} | {:.1}% | {} |\n",
                    s.name_of_category(),
                    s.amount_of_questions(),
                    s.amount_of_correct_answers(),
                    s.percentage_of_correct_answers(),
                    match Performance::of(s) {
                        Performance::Red => "read up",
                        Performance::Yellow => "brush up",
                        Performance::Green => "ok",
                    }
                ));
            }
            md.push('\n');
        }

        let recommendations = self.summary.recommendations();
        if !recommendations.read_up.is_empty() {
            md.push_str("### Read up\n\n");
            for s in &recommendations.read_up {
                md.push_str(&format!("- {}\n", page_hint(s, &self.bank.chapters)));
            }
            md.push('\n');
        }
        if !recommendations.brush_up.is_empty() {
            md.push_str("### Brush up\n\n");
            for s in &recommendations.brush_up {
                md.push_str(&format!("- {}\n", page_hint(s, &self.bank.chapters)));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Chapter;
    use crate::model::QuestionResult;
    use crate::traits::QuestionSource;

    fn bank() -> QuestionBank {
        let mut bank = QuestionBank::new("Clean Code");
        bank.chapters = Chapters::new(vec![Chapter {
            number: 2,
            title: "Meaningful Names".into(),
            first_page: 17,
            last_page: 30,
        }]);
        for (text, category) in [("a", "Chapter 2"), ("b", "Chapter 2"), ("c", "Chapter 3")] {
            bank.create_and_add_question(text, vec!["yes".into(), "no".into()], "yes", category)
                .unwrap();
        }
        bank
    }

    fn result(bank: &QuestionBank) -> QuizResult {
        let mut result = QuizResult::new("Alice", 0).unwrap();
        for (q, choice) in bank.all_questions().into_iter().zip(["no", "no", "yes"]) {
            let r = QuestionResult::new(q, choice).unwrap();
            if r.was_correct() {
                result.increment_score(10).unwrap();
            }
            result.add_question_result(r);
        }
        result
    }

    #[test]
    fn builds_answers_in_order() {
        let bank = bank();
        let report = QuizReport::new(&bank, &result(&bank));
        assert_eq!(report.bank.question_count, 3);
        assert_eq!(report.answers.len(), 3);
        assert!(!report.answers[0].was_correct);
        assert_eq!(report.answers[0].correct_choice, "yes");
        assert_eq!(report.summary.score(), 10);
    }

    #[test]
    fn json_roundtrip() {
        let bank = bank();
        let report = QuizReport::new(&bank, &result(&bank));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("attempt.json");

        report.save_json(&path).unwrap();
        let loaded = QuizReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.summary, report.summary);
        assert_eq!(loaded.bank.chapters, report.bank.chapters);
    }

    #[test]
    fn markdown_output() {
        let bank = bank();
        let md = QuizReport::new(&bank, &result(&bank)).to_markdown();
        assert!(md.contains("# Quiz summary: Clean Code"));
        assert!(md.contains("| Chapter 2 | 2 | 0 | 0.0% | read up |"));
        assert!(md.contains("| Chapter 3 | 1 | 1 | 100.0% | ok |"));
        assert!(md.contains("- Chapter 2: Pages 17-30"));
        assert!(!md.contains("Brush up"));
    }
}
