//! Per-category aggregation of quiz results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::QuestionResult;
use crate::recommendations::Recommendations;

/// How one category went.
///
/// Deserialized summaries go through [`QuizCategorySummary::new`], so the
/// stored percentage is always recomputed from the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategorySummaryRecord")]
pub struct QuizCategorySummary {
    name_of_category: String,
    amount_of_questions: usize,
    amount_of_correct_answers: usize,
    percentage_of_correct_answers: f64,
}

/// Wire form of a category summary, checked before it becomes one.
#[derive(Deserialize)]
struct CategorySummaryRecord {
    name_of_category: String,
    amount_of_questions: usize,
    amount_of_correct_answers: usize,
}

impl TryFrom<CategorySummaryRecord> for QuizCategorySummary {
    type Error = String;

    fn try_from(record: CategorySummaryRecord) -> Result<Self, Self::Error> {
        if record.amount_of_correct_answers > record.amount_of_questions {
            return Err(format!(
                "category {:?} has {} correct answers out of {} questions",
                record.name_of_category,
                record.amount_of_correct_answers,
                record.amount_of_questions
            ));
        }
        Ok(Self::new(
            record.name_of_category,
            record.amount_of_questions,
            record.amount_of_correct_answers,
        ))
    }
}

impl QuizCategorySummary {
    /// Correct answers beyond `amount_of_questions` are clamped, so the
    /// percentage never exceeds 100.
    pub fn new(
        name_of_category: impl Into<String>,
        amount_of_questions: usize,
        amount_of_correct_answers: usize,
    ) -> Self {
        let amount_of_correct_answers = amount_of_correct_answers.min(amount_of_questions);
        Self {
            name_of_category: name_of_category.into(),
            amount_of_questions,
            amount_of_correct_answers,
            percentage_of_correct_answers: percentage(
                amount_of_correct_answers,
                amount_of_questions,
            ),
        }
    }

    pub fn name_of_category(&self) -> &str {
        &self.name_of_category
    }

    pub fn amount_of_questions(&self) -> usize {
        self.amount_of_questions
    }

    pub fn amount_of_correct_answers(&self) -> usize {
        self.amount_of_correct_answers
    }

    pub fn percentage_of_correct_answers(&self) -> f64 {
        self.percentage_of_correct_answers
    }

    /// Chapter number for categories named like `"Chapter 7"`.
    ///
    /// Takes the second whitespace-separated token; `None` when it is
    /// missing or not a number.
    pub fn chapter_number(&self) -> Option<u32> {
        chapter_number_of(&self.name_of_category)
    }
}

/// Second whitespace token of a category name, as a chapter number.
pub fn chapter_number_of(category: &str) -> Option<u32> {
    category.split_whitespace().nth(1)?.parse().ok()
}

fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * correct as f64 / total as f64
    }
}

/// End-of-quiz report: score plus one summary per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResultSummary {
    player_name: String,
    score: i64,
    all_category_summaries: Vec<QuizCategorySummary>,
}

impl QuizResultSummary {
    pub fn new(player_name: impl Into<String>, score: i64) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            all_category_summaries: Vec::new(),
        }
    }

    pub fn add_category_summary(&mut self, summary: QuizCategorySummary) {
        self.all_category_summaries.push(summary);
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Category summaries in the order categories were first answered.
    pub fn all_category_summaries(&self) -> &[QuizCategorySummary] {
        &self.all_category_summaries
    }

    pub fn category(&self, name: &str) -> Option<&QuizCategorySummary> {
        self.all_category_summaries
            .iter()
            .find(|s| s.name_of_category == name)
    }

    /// Total answered questions across categories.
    pub fn amount_of_questions(&self) -> usize {
        self.all_category_summaries
            .iter()
            .map(|s| s.amount_of_questions)
            .sum()
    }

    /// Total correct answers across categories.
    pub fn amount_of_correct_answers(&self) -> usize {
        self.all_category_summaries
            .iter()
            .map(|s| s.amount_of_correct_answers)
            .sum()
    }

    pub fn recommendations(&self) -> Recommendations<'_> {
        Recommendations::from_summaries(&self.all_category_summaries)
    }

    /// One line per category, e.g. `"Chapter 2: 2/3 correct (66.7%)"`.
    pub fn to_lines(&self) -> Vec<String> {
        self.all_category_summaries
            .iter()
            .map(|s| {
                format!(
                    "{}: {}/{} correct ({:.1}%)",
                    s.name_of_category,
                    s.amount_of_correct_answers,
                    s.amount_of_questions,
                    s.percentage_of_correct_answers
                )
            })
            .collect()
    }
}

/// Group results by category, keeping first-seen category order.
pub(crate) fn summarize_categories(results: &[QuestionResult]) -> Vec<QuizCategorySummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for result in results {
        let category = result.category();
        let entry = counts.entry(category).or_insert_with(|| {
            order.push(category);
            (0, 0)
        });
        entry.0 += 1;
        if result.was_correct() {
            entry.1 += 1;
        }
    }

    order
        .into_iter()
        .map(|category| {
            let (total, correct) = counts[category];
            QuizCategorySummary::new(category, total, correct)
        })
        .collect()
}
