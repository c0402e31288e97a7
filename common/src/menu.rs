use crate::{Catalog, Destination, Quiz, LOCATIONS_TITLE};

/// One row of the sidebar. Groups expand to their items and are not
/// themselves navigable.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MenuEntry {
    Item(String),
    Group { label: String, items: Vec<String> },
}

/// The portal sidebar. The quiz group lists every quiz in `catalog`.
pub fn builtin_menu(catalog: &Catalog) -> Vec<MenuEntry> {
    let item = |id: &str| MenuEntry::Item(id.to_string());
    vec![
        item("welcome"),
        MenuEntry::Group {
            label: "About Dolf Technology".to_string(),
            items: ["team", "vision", "mission", "values"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
        },
        item("internaltools"),
        item("whydolf"),
        item("tutorialvideos"),
        MenuEntry::Group {
            label: "Quizzes".to_string(),
            items: catalog.quizzes().iter().map(Quiz::identifier).collect(),
        },
        item("locations"),
        item("contact"),
    ]
}

/// The label shown for `identifier` in the sidebar.
pub fn menu_label(catalog: &Catalog, identifier: &str) -> Option<String> {
    match identifier.parse::<Destination>().ok()? {
        Destination::Section(name) => catalog.section(&name).map(|s| s.title.clone()),
        Destination::Quiz(id) => catalog.quiz(id).map(|_| format!("Quiz {}", id)),
        Destination::Locations => Some(format!("📍 {}", LOCATIONS_TITLE)),
    }
}
