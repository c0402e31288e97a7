use onboard_common::{Catalog, Destination, MapScope, Quiz, LOCATIONS_TITLE};
use tracing::{debug, error, info, warn};

mod error;
pub use error::*;

pub mod sequencer;

mod evaluator;
pub use evaluator::*;

mod sink;
pub use sink::*;

mod map_view;
pub use map_view::*;

#[cfg(test)]
mod tests;

/// Continue targets for pages the forward table never routes through.
pub const CONTINUE_OVERRIDES: [(&str, &str); 2] = [
    ("companytourvideo", "platformdemo"),
    ("platformdemo", "quiz1"),
];

/// "Go to Home" buttons.
pub const HOME_LINKS: [(&str, &str); 1] = [("contact", "welcome")];

pub const MAP_FALLBACK: &str =
    "Map unavailable. If the map doesn't load, please refresh the page";

fn lookup(table: &[(&str, &str)], id: &str) -> Option<String> {
    table
        .iter()
        .find(|(from, _)| *from == id)
        .map(|(_, to)| to.to_string())
}

/// Reports `id` as a configuration defect and builds the matching error.
fn unresolved(id: &str) -> NavigationError {
    error!(id, "identifier resolves to nothing");
    NavigationError::Unresolved { id: id.to_string() }
}

/// The identifier currently on screen. Only the navigator writes it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: Option<Destination>,
}

impl NavigationState {
    pub fn current(&self) -> Option<&Destination> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<String> {
        self.current.as_ref().map(Destination::to_string)
    }
}

/// Radio selection and last submit result of the quiz on screen.
#[derive(Debug, Default, Clone)]
struct QuizProgress {
    selected: Option<usize>,
    evaluation: Option<Evaluation>,
}

impl QuizProgress {
    fn continue_revealed(&self) -> bool {
        self.evaluation
            .is_some_and(|evaluation| evaluation.reveals_continue())
    }
}

/// Resolves identifiers to pages, keeps the navigation state and drives the
/// content sink and the map.
pub struct Navigator<S, M> {
    pub catalog: Catalog,
    sink: S,
    map: M,
    state: NavigationState,
    quiz: QuizProgress,
}

impl<S, M> Navigator<S, M>
where
    S: ContentSink,
    M: MapCollaborator,
{
    pub fn new(catalog: Catalog, sink: S, map: M) -> Self {
        Self {
            catalog,
            sink,
            map,
            state: NavigationState::default(),
            quiz: QuizProgress::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.quiz.selected
    }

    /// Where "Continue" leads from `id`: a per-page target when there is
    /// one, otherwise the sequencer's answer.
    pub fn continue_target(id: &str) -> Option<String> {
        lookup(&CONTINUE_OVERRIDES, id).or_else(|| sequencer::next(id))
    }

    pub fn home_target(id: &str) -> Option<String> {
        lookup(&HOME_LINKS, id)
    }

    /// Displays `id`. Issues exactly one render and, for the locations page,
    /// one map initialization.
    pub fn go_to(&mut self, id: &str) -> Result<(), NavigationError> {
        let destination: Destination = id.parse().map_err(|_| unresolved(id))?;
        let request = self.render_request(&destination)?;

        debug!(
            from = ?self.state.current_id(),
            to = %destination,
            "navigating"
        );
        self.state.current = Some(destination);
        self.quiz = QuizProgress::default();
        self.sink.render(request);

        if self.state.current.as_ref().is_some_and(Destination::is_locations) {
            self.open_map();
        }
        Ok(())
    }

    pub fn continue_on(&mut self) -> Result<(), NavigationError> {
        let no_control = NavigationError::NoSuchControl {
            control: ControlKind::Continue,
        };
        let id = self.state.current_id().ok_or(no_control.clone())?;
        if matches!(self.state.current, Some(Destination::Quiz(_))) && !self.quiz.continue_revealed()
        {
            warn!(id = %id, "continue is hidden until the quiz is submitted");
            return Err(no_control);
        }
        let target = self
            .checked(&id, "continue", Self::continue_target(&id))
            .ok_or(no_control)?;
        self.go_to(&target)
    }

    pub fn go_back(&mut self) -> Result<(), NavigationError> {
        self.follow(ControlKind::Previous, "previous", sequencer::previous)
    }

    pub fn go_home(&mut self) -> Result<(), NavigationError> {
        self.follow(ControlKind::Home, "home", Self::home_target)
    }

    fn follow(
        &mut self,
        control: ControlKind,
        rule: &'static str,
        target_of: fn(&str) -> Option<String>,
    ) -> Result<(), NavigationError> {
        let target = self
            .state
            .current_id()
            .and_then(|id| self.checked(&id, rule, target_of(&id)))
            .ok_or(NavigationError::NoSuchControl { control })?;
        self.go_to(&target)
    }

    /// Records the radio selection on the quiz on screen and returns the
    /// chosen option's text.
    pub fn select_option(&mut self, index: usize) -> Result<String, NavigationError> {
        let quiz = self.current_quiz()?;
        let option = quiz
            .option(index)
            .map(str::to_string)
            .ok_or(NavigationError::OptionOutOfRange {
                index,
                options: quiz.options.len(),
            })?;
        self.quiz.selected = Some(index);
        Ok(option)
    }

    /// Evaluates the current selection and sends one feedback instruction.
    /// An unanswered submit changes nothing besides the prompt.
    pub fn submit(&mut self) -> Result<Evaluation, NavigationError> {
        let quiz = self.current_quiz()?;
        let quiz_id = quiz.id;
        let identifier = quiz.identifier();
        let evaluation = evaluate(quiz, self.quiz.selected);
        info!(quiz = quiz_id, ?evaluation, "quiz submitted");

        let next = if evaluation.reveals_continue() {
            self.quiz.evaluation = Some(evaluation);
            self.checked(&identifier, "continue", Self::continue_target(&identifier))
                .map(Control::to)
        } else {
            None
        };

        self.sink.feedback(Feedback {
            quiz: quiz_id,
            evaluation,
            next,
        });
        Ok(evaluation)
    }

    /// Map tab click on the locations page.
    pub fn select_branch(&mut self, scope: MapScope) -> Result<(), NavigationError> {
        if !matches!(self.state.current, Some(Destination::Locations)) {
            warn!(scope = %scope, "map tab selected away from the locations page");
            return Err(NavigationError::NotOnLocations);
        }
        if let Err(err) = self.map.update(scope) {
            error!(%err, scope = %scope, "map update failed");
            self.sink.map_fallback(MAP_FALLBACK);
        }
        Ok(())
    }

    /// Every navigation rule whose target the catalog cannot display.
    pub fn validate(&self) -> Vec<ConfigurationDefect> {
        let check = |from: &str, rule: &'static str, target: Option<String>| {
            target
                .filter(|target| !self.catalog.resolves(target))
                .map(|target| ConfigurationDefect {
                    from: from.to_string(),
                    rule,
                    target,
                })
        };

        let mut defects = Vec::new();
        for id in self.catalog.identifiers() {
            defects.extend(check(&id, "next", sequencer::next(&id)));
            defects.extend(check(&id, "previous", sequencer::previous(&id)));
        }
        for &(from, to) in CONTINUE_OVERRIDES.iter().chain(HOME_LINKS.iter()) {
            defects.extend(check(from, "page link", Some(from.to_string())));
            defects.extend(check(from, "page link", Some(to.to_string())));
        }
        for (rule, table) in [
            ("forward order", &sequencer::FORWARD_ORDER[..]),
            ("previous order", &sequencer::PREVIOUS_ORDER[..]),
        ] {
            for (position, &entry) in table.iter().enumerate() {
                let expanded = if entry == sequencer::QUIZ_PLACEHOLDER {
                    sequencer::FIRST_QUIZ
                } else {
                    entry
                };
                defects.extend(check(entry, rule, Some(expanded.to_string())));
                if table[..position].contains(&entry) {
                    defects.push(ConfigurationDefect {
                        from: entry.to_string(),
                        rule,
                        target: "duplicate entry".to_string(),
                    });
                }
            }
        }
        defects
    }

    fn current_quiz(&self) -> Result<&Quiz, NavigationError> {
        match self.state.current {
            Some(Destination::Quiz(id)) => self.catalog.quiz(id).ok_or(NavigationError::Unresolved {
                id: Destination::quiz_identifier(id),
            }),
            _ => Err(NavigationError::NotOnQuiz),
        }
    }

    /// Drops targets that resolve to nothing, reporting them as defects.
    fn checked(&self, from: &str, rule: &'static str, target: Option<String>) -> Option<String> {
        let target = target?;
        if self.catalog.resolves(&target) {
            Some(target)
        } else {
            error!(from, rule, target = %target, "navigation rule points at nothing");
            None
        }
    }

    fn render_request(&self, destination: &Destination) -> Result<RenderRequest, NavigationError> {
        let id = destination.to_string();
        let missing = || unresolved(&id);

        let previous = self
            .checked(&id, "previous", sequencer::previous(&id))
            .map(Control::to);
        let next = self.checked(&id, "continue", Self::continue_target(&id));
        let home = self
            .checked(&id, "home", Self::home_target(&id))
            .map(Control::to);

        let request = match destination {
            Destination::Section(name) => {
                let section = self.catalog.section(name).ok_or_else(missing)?;
                RenderRequest {
                    id: id.clone(),
                    title: section.title.clone(),
                    page: Page::Content(section.body.clone()),
                    previous,
                    next: next.map(Control::to),
                    home,
                    submit: false,
                }
            }
            Destination::Quiz(quiz) => {
                let quiz = self.catalog.quiz(*quiz).ok_or_else(missing)?;
                RenderRequest {
                    id: id.clone(),
                    title: quiz.question.clone(),
                    page: Page::Quiz {
                        quiz: quiz.id,
                        options: quiz.options.clone(),
                    },
                    previous,
                    next: next.map(Control::hidden),
                    home,
                    submit: true,
                }
            }
            Destination::Locations => {
                if self.catalog.locations().is_empty() {
                    return Err(missing());
                }
                RenderRequest {
                    id: id.clone(),
                    title: LOCATIONS_TITLE.to_string(),
                    page: Page::Map {
                        tabs: MapScope::TABS.to_vec(),
                        locations: self.catalog.locations().to_vec(),
                    },
                    previous,
                    next: next.map(Control::to),
                    home,
                    submit: false,
                }
            }
        };
        Ok(request)
    }

    fn open_map(&mut self) {
        if let Err(err) = self.map.initialize(MapScope::All) {
            error!(%err, "map initialization failed");
            self.sink.map_fallback(MAP_FALLBACK);
        }
    }
}
