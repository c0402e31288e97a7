use onboard_common::{menu_label, Catalog, Content, Location, MapConfig, MapScope, MenuEntry};
use onboard_runtime::{
    ContentSink, Control, Feedback, MapCollaborator, MapError, MapView, Page, RenderRequest,
    Viewport,
};

/// Content sink that renders pages as plain text lines.
#[derive(Debug, Default)]
pub struct TextSink {
    lines: Vec<String>,
}

impl TextSink {
    pub fn line<T: Into<String>>(&mut self, line: T) {
        self.lines.push(line.into());
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn control(&mut self, marker: &str, label: &str, control: &Option<Control>) {
        if let Some(control) = control {
            if !control.hidden {
                self.line(format!("{} {}: {}", marker, label, control.target));
            }
        }
    }
}

fn content_line(content: &Content) -> String {
    match content {
        Content::Heading(text) => format!("## {}", text),
        Content::Paragraph(text) => text.clone(),
        Content::Image { alt, .. } => format!("[image: {}]", alt),
        Content::Card {
            icon: Some(icon),
            title,
            text,
        } => format!("* {} {}: {}", icon, title, text),
        Content::Card {
            icon: None,
            title,
            text,
        } => format!("* {}: {}", title, text),
        Content::Bullet { icon, title, text } => format!("- {} {} - {}", icon, title, text),
        Content::Badges { title, items } => format!("{}: {}", title, items.join(", ")),
        Content::Video { source, .. } => format!("[video: {}]", source),
        Content::Contact { icon, label, lines } => {
            format!("{} {}: {}", icon, label, lines.join(", "))
        }
    }
}

fn tab_label(scope: &MapScope, locations: &[Location]) -> String {
    match scope {
        MapScope::All => "All".to_string(),
        MapScope::Branch(branch) => locations
            .iter()
            .find(|location| location.branch == *branch)
            .map(|location| location.label.clone())
            .unwrap_or_else(|| branch.key().to_string()),
    }
}

impl ContentSink for TextSink {
    fn render(&mut self, request: RenderRequest) {
        self.line(format!("# {}", request.title));
        match &request.page {
            Page::Content(body) => {
                for content in body {
                    self.line(content_line(content));
                }
            }
            Page::Quiz { options, .. } => {
                for (index, option) in options.iter().enumerate() {
                    self.line(format!("  {}. {}", index + 1, option));
                }
            }
            Page::Map { tabs, locations } => {
                let labels: Vec<String> = tabs
                    .iter()
                    .map(|scope| tab_label(scope, locations))
                    .collect();
                self.line(format!("tabs: {}", labels.join(" | ")));
            }
        }
        if request.submit {
            self.line("[submit]");
        }
        self.control("<", "previous", &request.previous);
        self.control(">", "continue", &request.next);
        self.control("^", "home", &request.home);
    }

    fn feedback(&mut self, feedback: Feedback) {
        self.line(feedback.message());
        self.control(">", "continue", &feedback.next);
    }

    fn map_fallback(&mut self, message: &str) {
        self.line(format!("map: {}", message));
    }
}

/// Map collaborator that describes each view change as text.
#[derive(Debug)]
pub struct TextMap {
    view: MapView,
    lines: Vec<String>,
}

impl TextMap {
    pub fn new(locations: Vec<Location>, config: MapConfig) -> Self {
        Self {
            view: MapView::new(locations, config),
            lines: Vec::new(),
        }
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn describe(&mut self) {
        self.lines.push(format!("map: {}", self.view.address()));
        for marker in self.view.markers() {
            self.lines.push(format!("pin {} {}", marker.pin, marker.label));
        }
        match self.view.viewport() {
            Some(Viewport::Center { at, zoom }) => {
                self.lines.push(format!("view: center {}, zoom {}", at, zoom));
            }
            Some(Viewport::Fit { padding, .. }) => {
                self.lines.push(format!(
                    "view: fit {} markers, padding {}",
                    self.view.markers().len(),
                    padding
                ));
            }
            None => {}
        }
    }
}

impl MapCollaborator for TextMap {
    fn initialize(&mut self, scope: MapScope) -> Result<(), MapError> {
        self.view.initialize(scope)?;
        self.describe();
        Ok(())
    }

    fn update(&mut self, scope: MapScope) -> Result<(), MapError> {
        self.view.update(scope)?;
        self.describe();
        Ok(())
    }
}

/// The sidebar, one entry per line, with group items indented.
pub fn menu_lines(catalog: &Catalog, menu: &[MenuEntry]) -> Vec<String> {
    let item = |id: &str, indent: &str| {
        let label = menu_label(catalog, id).unwrap_or_else(|| id.to_string());
        format!("{}{} ({})", indent, label, id)
    };

    let mut lines = Vec::new();
    for entry in menu {
        match entry {
            MenuEntry::Item(id) => lines.push(item(id, "")),
            MenuEntry::Group { label, items } => {
                lines.push(format!("{} ▸", label));
                lines.extend(items.iter().map(|id| item(id, "  ")));
            }
        }
    }
    lines
}
