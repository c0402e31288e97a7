use crate::ControlKind;
use std::fmt;
use thiserror::Error;

/// Why a navigator action did nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Section not found: {id}")]
    Unresolved { id: String },
    #[error("No {control} control on this page")]
    NoSuchControl { control: ControlKind },
    #[error("Not on a quiz page")]
    NotOnQuiz,
    #[error("Map tabs are only available on the locations page")]
    NotOnLocations,
    #[error("Option {} is out of range (1-{options})", .index + 1)]
    OptionOutOfRange { index: usize, options: usize },
}

/// A navigation rule whose target the catalog cannot display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDefect {
    pub from: String,
    pub rule: &'static str,
    pub target: String,
}

impl fmt::Display for ConfigurationDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rule from `{}` points at `{}`, which resolves to nothing",
            self.rule, self.from, self.target
        )
    }
}
