use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub type SectionName = String;
pub type QuizId = u32;

pub const LOCATIONS: &str = "locations";
const QUIZ_PREFIX: &str = "quiz";

/// Where an identifier points: a registry section, a quiz, or the map page.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Hash)]
pub enum Destination {
    Section(SectionName),
    Quiz(QuizId),
    Locations,
}

impl Destination {
    /// Extracts `n` from `quiz<n>`. Only all-digit suffixes count, so
    /// `quizzes` is not a quiz identifier. Numbers past `QuizId::MAX`
    /// saturate.
    pub fn quiz_number(identifier: &str) -> Option<QuizId> {
        let digits = identifier.strip_prefix(QUIZ_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(digits.parse().unwrap_or(QuizId::MAX))
    }

    pub fn quiz_identifier(quiz: QuizId) -> String {
        format!("{}{}", QUIZ_PREFIX, quiz)
    }

    pub fn is_locations(&self) -> bool {
        matches!(self, Destination::Locations)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum IdentifierError {
    EmptyIdentifier,
}

impl std::error::Error for IdentifierError {}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "identifier provided is empty")
    }
}

impl FromStr for Destination {
    type Err = IdentifierError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdentifierError::EmptyIdentifier);
        }
        if s == LOCATIONS {
            return Ok(Destination::Locations);
        }
        match Destination::quiz_number(s) {
            Some(quiz) => Ok(Destination::Quiz(quiz)),
            None => Ok(Destination::Section(s.to_string())),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Section(name) => write!(f, "{}", name),
            Destination::Quiz(quiz) => write!(f, "{}{}", QUIZ_PREFIX, quiz),
            Destination::Locations => write!(f, "{}", LOCATIONS),
        }
    }
}
