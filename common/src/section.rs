use crate::{Body, SectionName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Section {
    pub name: SectionName,
    pub title: String,
    pub body: Body,
}

impl Section {
    pub fn new<A, B>(name: A, title: B, body: Body) -> Self
    where
        A: Into<SectionName>,
        B: Into<String>,
    {
        Self {
            name: name.into(),
            title: title.into(),
            body,
        }
    }
}
