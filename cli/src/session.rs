use crate::output::{TextMap, TextSink};
use onboard_common::{Catalog, MapScope, PortalConfig};
use onboard_runtime::{NavigationError, Navigator};
use tracing::{debug, error};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flow {
    Continue,
    Quit,
}

/// One visitor browsing the portal from a terminal.
pub struct Session {
    navigator: Navigator<TextSink, TextMap>,
}

impl Session {
    pub fn new(catalog: Catalog, config: &PortalConfig) -> Self {
        let map = TextMap::new(catalog.locations().to_vec(), config.map.clone());
        let navigator = Navigator::new(catalog, TextSink::default(), map);
        for defect in navigator.validate() {
            error!(%defect, "configuration defect");
        }
        Self { navigator }
    }

    /// Identifier on screen, used as the console prompt.
    pub fn current(&self) -> Option<String> {
        self.navigator.state().current_id()
    }

    pub fn open(&mut self, id: &str) {
        let result = self.navigator.go_to(id);
        self.report(result);
    }

    /// Runs one command. Output accumulates until `take_output`.
    pub fn apply(&mut self, input: &str) -> Flow {
        let trimmed = input.trim();
        debug!(command = trimmed, "processing input");

        if trimmed.starts_with("->") {
            self.handle_goto(trimmed);
            return Flow::Continue;
        }
        if let Some(scope) = trimmed.strip_prefix("t ") {
            match scope.parse::<MapScope>() {
                Ok(scope) => {
                    let result = self.navigator.select_branch(scope);
                    self.report(result);
                }
                Err(err) => self.say(format!("ERROR: {}", err)),
            }
            return Flow::Continue;
        }
        if let Ok(choice) = trimmed.parse::<usize>() {
            self.handle_choice(choice);
            return Flow::Continue;
        }

        match trimmed {
            "" => {}
            "n" => {
                let result = self.navigator.continue_on();
                self.report(result);
            }
            "p" => {
                let result = self.navigator.go_back();
                self.report(result);
            }
            "h" => {
                let result = self.navigator.go_home();
                self.report(result);
            }
            "s" => {
                let result = self.navigator.submit().map(|_| ());
                self.report(result);
            }
            "q" => {
                self.say("QUIT");
                return Flow::Quit;
            }
            other => self.say(format!("ERROR: Unknown command: {}", other)),
        }
        Flow::Continue
    }

    /// Everything printed since the last call, page lines before map lines.
    pub fn take_output(&mut self) -> Vec<String> {
        let mut lines = self.navigator.sink_mut().take_lines();
        lines.extend(self.navigator.map_mut().take_lines());
        lines
    }

    fn handle_goto(&mut self, input: &str) {
        let target = input.strip_prefix("-> ").map(str::trim).unwrap_or_default();
        if target.is_empty() {
            self.say("ERROR: Invalid goto command: Expected section name after '->'");
            return;
        }
        self.open(target);
    }

    fn handle_choice(&mut self, choice: usize) {
        let Some(index) = choice.checked_sub(1) else {
            self.say(format!("ERROR: Invalid option: {}", choice));
            return;
        };
        match self.navigator.select_option(index) {
            Ok(option) => self.say(format!("Selected: {}", option)),
            Err(err) => self.say(format!("ERROR: {}", err)),
        }
    }

    fn report(&mut self, result: Result<(), NavigationError>) {
        if let Err(err) = result {
            self.say(format!("ERROR: {}", err));
        }
    }

    fn say<T: Into<String>>(&mut self, line: T) {
        self.navigator.sink_mut().line(line);
    }
}

/// Opens `start` and feeds it the comma-separated `inputs`, stopping at `q`.
pub fn run_script(catalog: Catalog, config: &PortalConfig, start: &str, inputs: &str) -> Vec<String> {
    let mut session = Session::new(catalog, config);
    session.open(start);
    let mut output = session.take_output();

    if !inputs.is_empty() {
        for input in inputs.split(',') {
            let flow = session.apply(input);
            output.extend(session.take_output());
            if flow == Flow::Quit {
                break;
            }
        }
    }
    output
}
