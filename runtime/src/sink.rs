use crate::Evaluation;
use onboard_common::{Body, Location, MapScope, QuizId};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Continue,
    Home,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Previous => write!(f, "previous"),
            ControlKind::Continue => write!(f, "continue"),
            ControlKind::Home => write!(f, "home"),
        }
    }
}

/// A navigation button and the identifier it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub target: String,
    /// Quiz continue controls start hidden until an answer is submitted.
    pub hidden: bool,
}

impl Control {
    pub fn to<T: Into<String>>(target: T) -> Self {
        Self {
            target: target.into(),
            hidden: false,
        }
    }

    pub fn hidden<T: Into<String>>(target: T) -> Self {
        Self {
            target: target.into(),
            hidden: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Content(Body),
    Quiz {
        quiz: QuizId,
        options: Vec<String>,
    },
    Map {
        tabs: Vec<MapScope>,
        locations: Vec<Location>,
    },
}

/// Everything the content sink needs to draw one page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub id: String,
    pub title: String,
    pub page: Page,
    pub previous: Option<Control>,
    pub next: Option<Control>,
    pub home: Option<Control>,
    pub submit: bool,
}

/// Result of a quiz submit, for the sink to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub quiz: QuizId,
    pub evaluation: Evaluation,
    /// The continue control once revealed, `None` while it stays hidden.
    pub next: Option<Control>,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        self.evaluation.message()
    }
}

/// Turns navigator instructions into displayed content.
pub trait ContentSink {
    fn render(&mut self, request: RenderRequest);
    fn feedback(&mut self, feedback: Feedback);
    /// Shown in place of the map when the map collaborator fails.
    fn map_fallback(&mut self, message: &str);
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map has not been initialized")]
    NotInitialized,
    #[error("map unavailable: {reason}")]
    Unavailable { reason: String },
}

/// The map widget. Owns its markers and viewport; the navigator only tells
/// it which branches to show.
pub trait MapCollaborator {
    fn initialize(&mut self, scope: MapScope) -> Result<(), MapError>;
    fn update(&mut self, scope: MapScope) -> Result<(), MapError>;
}
