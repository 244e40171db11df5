//! In-memory question bank and chapter index.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::Question;
use crate::traits::QuestionSource;

/// A page range in the study material a category refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    #[serde(default)]
    pub title: String,
    pub first_page: u32,
    pub last_page: u32,
}

/// Chapters declared alongside a question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapters(Vec<Chapter>);

impl Chapters {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self(chapters)
    }

    pub fn find_chapter_by_number(&self, number: u32) -> Option<&Chapter> {
        self.0.iter().find(|c| c.number == number)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.0.iter()
    }
}

/// An ordered, named collection of questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    pub name: String,
    pub description: String,
    pub chapters: Chapters,
    questions: Vec<Arc<Question>>,
}

impl QuestionBank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_question(&mut self, question: Question) {
        self.questions.push(Arc::new(question));
    }

    /// Validate and append a question built from its parts.
    pub fn create_and_add_question(
        &mut self,
        text: impl Into<String>,
        choices: Vec<String>,
        correct_choice: &str,
        category: impl Into<String>,
    ) -> Result<(), QuizError> {
        let question = Question::new(text, choices, correct_choice, category)?;
        self.add_question(question);
        Ok(())
    }

    pub fn questions(&self) -> &[Arc<Question>] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionSource for QuestionBank {
    fn all_questions(&self) -> Vec<Arc<Question>> {
        self.questions.clone()
    }

    fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_keeps_insertion_order() {
        let mut bank = QuestionBank::new("Test");
        for (i, text) in ["first", "second", "third"].iter().enumerate() {
            bank.create_and_add_question(
                *text,
                vec!["a".into(), "b".into()],
                "a",
                format!("Chapter {}", i + 1),
            )
            .unwrap();
        }
        assert!(bank.has_questions());
        let texts: Vec<_> = bank.all_questions().iter().map(|q| q.text().to_string()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn bank_rejects_invalid_question_without_mutation() {
        let mut bank = QuestionBank::new("Test");
        let err = bank
            .create_and_add_question("bad", vec!["a".into(), "b".into()], "z", "c")
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion(_)));
        assert!(bank.is_empty());
        assert!(!bank.has_questions());
    }

    #[test]
    fn chapter_lookup() {
        let chapters = Chapters::new(vec![Chapter {
            number: 3,
            title: "Functions".into(),
            first_page: 31,
            last_page: 52,
        }]);
        assert_eq!(chapters.find_chapter_by_number(3).map(|c| c.first_page), Some(31));
        assert!(chapters.find_chapter_by_number(4).is_none());
    }
}
