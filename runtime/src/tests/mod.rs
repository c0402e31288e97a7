use crate::*;
use onboard_common::{Branch, Catalog, Destination, MapConfig, MapScope, Section};
use std::io;
use std::sync::{Arc, Mutex};

mod walkthrough;

/// Keeps every instruction the navigator sends.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub renders: Vec<RenderRequest>,
    pub feedback: Vec<Feedback>,
    pub fallbacks: Vec<String>,
}

impl RecordingSink {
    pub fn last_render(&self) -> &RenderRequest {
        self.renders.last().expect("nothing rendered")
    }
}

impl ContentSink for RecordingSink {
    fn render(&mut self, request: RenderRequest) {
        self.renders.push(request);
    }

    fn feedback(&mut self, feedback: Feedback) {
        self.feedback.push(feedback);
    }

    fn map_fallback(&mut self, message: &str) {
        self.fallbacks.push(message.to_string());
    }
}

/// A map whose library never loaded.
#[derive(Debug, Default)]
pub struct UnavailableMap {
    pub attempts: usize,
}

impl MapCollaborator for UnavailableMap {
    fn initialize(&mut self, _scope: MapScope) -> Result<(), MapError> {
        self.attempts += 1;
        Err(MapError::Unavailable {
            reason: "map library not loaded".to_string(),
        })
    }

    fn update(&mut self, _scope: MapScope) -> Result<(), MapError> {
        self.attempts += 1;
        Err(MapError::NotInitialized)
    }
}

pub fn navigator() -> Navigator<RecordingSink, MapView> {
    let catalog = Catalog::builtin().unwrap();
    let map = MapView::new(catalog.locations().to_vec(), MapConfig::default());
    Navigator::new(catalog, RecordingSink::default(), map)
}

pub fn target(control: &Option<Control>) -> Option<&str> {
    control.as_ref().map(|control| control.target.as_str())
}

/// Shared byte buffer a fmt subscriber can write into.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber installed and returns what it logged.
pub fn captured_logs<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
