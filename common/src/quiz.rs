use crate::{Destination, QuizId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`.
    pub correct: usize,
}

impl Quiz {
    pub fn new(id: QuizId, question: &str, options: &[&str], correct: usize) -> Self {
        Self {
            id,
            question: question.to_string(),
            options: options.iter().map(|option| option.to_string()).collect(),
            correct,
        }
    }

    pub fn identifier(&self) -> String {
        Destination::quiz_identifier(self.id)
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.option(self.correct)
    }
}
