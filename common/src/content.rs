use serde::{Deserialize, Serialize};

/// Structured page content. The navigator hands it to the content sink
/// untouched; only sinks interpret it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum Content {
    Heading(String),
    Paragraph(String),
    Image {
        source: String,
        alt: String,
    },
    Card {
        icon: Option<String>,
        title: String,
        text: String,
    },
    Bullet {
        icon: String,
        title: String,
        text: String,
    },
    Badges {
        title: String,
        items: Vec<String>,
    },
    Video {
        element: String,
        source: String,
        autoplay: bool,
        muted: bool,
    },
    Contact {
        icon: String,
        label: String,
        lines: Vec<String>,
    },
}

pub type Body = Vec<Content>;

impl Content {
    pub fn heading<T: Into<String>>(text: T) -> Self {
        Content::Heading(text.into())
    }

    pub fn paragraph<T: Into<String>>(text: T) -> Self {
        Content::Paragraph(text.into())
    }

    pub fn card<T, U>(icon: Option<&str>, title: T, text: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Content::Card {
            icon: icon.map(str::to_string),
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn bullet(icon: &str, title: &str, text: &str) -> Self {
        Content::Bullet {
            icon: icon.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    pub fn badges(title: &str, items: &[&str]) -> Self {
        Content::Badges {
            title: title.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }

    pub fn contact(icon: &str, label: &str, lines: &[&str]) -> Self {
        Content::Contact {
            icon: icon.to_string(),
            label: label.to_string(),
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}
