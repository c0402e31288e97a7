use crate::{Branch, Destination, Location, Quiz, QuizId, Section, SectionName};
use std::collections::HashMap;
use thiserror::Error;

/// Problems found while assembling a catalog from its tables.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CatalogError {
    #[error("section `{0}` is declared twice")]
    DuplicateSection(SectionName),
    #[error("quizzes must be numbered 1..=N without gaps: expected quiz {expected}, found quiz {found}")]
    QuizOutOfSequence { expected: QuizId, found: QuizId },
    #[error("quiz {quiz} marks option {correct} as correct but only has {options} options")]
    CorrectOptionOutOfRange {
        quiz: QuizId,
        correct: usize,
        options: usize,
    },
    #[error("branch `{0}` is declared twice")]
    DuplicateBranch(&'static str),
}

/// Named content sections, kept in declaration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    index: HashMap<SectionName, usize>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self, section: Section) -> Result<usize, CatalogError> {
        if self.index.contains_key(&section.name) {
            return Err(CatalogError::DuplicateSection(section.name));
        }
        let position = self.sections.len();
        self.index.insert(section.name.clone(), position);
        self.sections.push(section);
        Ok(position)
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&position| &self.sections[position])
    }

    pub fn list(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.iter().map(|section| section.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Everything the portal can display: sections, quizzes and branch locations.
/// Built once at startup and never mutated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    sections: SectionRegistry,
    quizzes: Vec<Quiz>,
    locations: Vec<Location>,
}

impl Catalog {
    pub fn new(
        sections: Vec<Section>,
        quizzes: Vec<Quiz>,
        locations: Vec<Location>,
    ) -> Result<Self, CatalogError> {
        let mut registry = SectionRegistry::new();
        for section in sections {
            registry.add_section(section)?;
        }

        for (position, quiz) in quizzes.iter().enumerate() {
            let expected = position as QuizId + 1;
            if quiz.id != expected {
                return Err(CatalogError::QuizOutOfSequence {
                    expected,
                    found: quiz.id,
                });
            }
            if quiz.correct >= quiz.options.len() {
                return Err(CatalogError::CorrectOptionOutOfRange {
                    quiz: quiz.id,
                    correct: quiz.correct,
                    options: quiz.options.len(),
                });
            }
        }

        for (position, location) in locations.iter().enumerate() {
            if locations[..position]
                .iter()
                .any(|other| other.branch == location.branch)
            {
                return Err(CatalogError::DuplicateBranch(location.branch.key()));
            }
        }

        Ok(Self {
            sections: registry,
            quizzes,
            locations,
        })
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn quiz(&self, id: QuizId) -> Option<&Quiz> {
        let position = (id as usize).checked_sub(1)?;
        self.quizzes.get(position)
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn location(&self, branch: Branch) -> Option<&Location> {
        self.locations
            .iter()
            .find(|location| location.branch == branch)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn contains(&self, destination: &Destination) -> bool {
        match destination {
            Destination::Section(name) => self.section(name).is_some(),
            Destination::Quiz(id) => self.quiz(*id).is_some(),
            Destination::Locations => !self.locations.is_empty(),
        }
    }

    /// True when `identifier` names something this catalog can display.
    pub fn resolves(&self, identifier: &str) -> bool {
        identifier
            .parse::<Destination>()
            .map(|destination| self.contains(&destination))
            .unwrap_or(false)
    }

    /// Every displayable identifier: sections in declaration order, then
    /// quizzes, then the locations page.
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.sections.list().map(str::to_string).collect();
        identifiers.extend(self.quizzes.iter().map(Quiz::identifier));
        if !self.locations.is_empty() {
            identifiers.push(Destination::Locations.to_string());
        }
        identifiers
    }
}
