//! Reading recommendations derived from category performance.

use serde::Serialize;

use crate::bank::Chapters;
use crate::summary::QuizCategorySummary;

/// Below this percentage a category needs reading up on.
pub const READ_UP_BELOW: f64 = 50.0;
/// Up to and including this percentage a category should be brushed up on.
pub const BRUSH_UP_UP_TO: f64 = 70.0;

/// How well a single category went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    /// Below 50 %.
    Red,
    /// 50 % to 70 % inclusive.
    Yellow,
    /// Above 70 %.
    Green,
}

impl Performance {
    pub fn of(summary: &QuizCategorySummary) -> Self {
        let pct = summary.percentage_of_correct_answers();
        if pct < READ_UP_BELOW {
            Performance::Red
        } else if pct <= BRUSH_UP_UP_TO {
            Performance::Yellow
        } else {
            Performance::Green
        }
    }
}

/// Categories grouped by what the player should do next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations<'a> {
    /// Red categories.
    pub read_up: Vec<&'a QuizCategorySummary>,
    /// Yellow categories.
    pub brush_up: Vec<&'a QuizCategorySummary>,
}

impl<'a> Recommendations<'a> {
    pub fn from_summaries(summaries: &'a [QuizCategorySummary]) -> Self {
        let mut recommendations = Self::default();
        for summary in summaries {
            match Performance::of(summary) {
                Performance::Red => recommendations.read_up.push(summary),
                Performance::Yellow => recommendations.brush_up.push(summary),
                Performance::Green => {}
            }
        }
        recommendations
    }

    /// Nothing to read up on or brush up on.
    pub fn all_good(&self) -> bool {
        self.read_up.is_empty() && self.brush_up.is_empty()
    }

    /// Human-readable recommendation text, one line per entry.
    pub fn to_lines(&self, chapters: &Chapters) -> Vec<String> {
        if self.all_good() {
            return vec![
                "Great job! It seems like you have a good grasp of the chapters!".to_string(),
            ];
        }

        let mut lines = Vec::new();
        if !self.read_up.is_empty() {
            lines.push("You really need to read up on these chapters:".to_string());
            lines.extend(self.read_up.iter().map(|s| page_hint(s, chapters)));
        }
        if !self.brush_up.is_empty() {
            lines.push("You probably should brush up on these chapters:".to_string());
            lines.extend(self.brush_up.iter().map(|s| page_hint(s, chapters)));
        }
        lines
    }
}

/// `"<category>: Pages <first>-<last>"`, or a fallback when the category
/// has no chapter number or the chapter is unknown.
pub fn page_hint(summary: &QuizCategorySummary, chapters: &Chapters) -> String {
    match summary
        .chapter_number()
        .and_then(|n| chapters.find_chapter_by_number(n))
    {
        Some(chapter) => format!(
            "{}: Pages {}-{}",
            summary.name_of_category(),
            chapter.first_page,
            chapter.last_page
        ),
        None => format!(
            "{}: Page information not available.",
            summary.name_of_category()
        ),
    }
}
