//! Next/previous identifiers for the walkthrough.
//!
//! Two hand-maintained tables drive it. The forward table has no video tour
//! waypoints; the previous table does. `next` layers override rules on top of
//! its table, `previous` is a plain lookup. The two are not inverses of each
//! other and must not be unified.

use onboard_common::{Destination, QuizId};

/// Order followed by "Continue".
pub const FORWARD_ORDER: [&str; 9] = [
    "welcome",
    "team",
    "values",
    "internaltools",
    "whydolf",
    "tutorialvideos",
    "quizzes",
    "locations",
    "contact",
];

/// Order followed by "Previous". Includes the two video tour waypoints.
pub const PREVIOUS_ORDER: [&str; 11] = [
    "welcome",
    "team",
    "values",
    "internaltools",
    "whydolf",
    "companytourvideo",
    "platformdemo",
    "tutorialvideos",
    "quizzes",
    "locations",
    "contact",
];

/// Table entry standing in for the whole quiz run.
pub const QUIZ_PLACEHOLDER: &str = "quizzes";
pub const FIRST_QUIZ: &str = "quiz1";
pub const LAST_QUIZ: QuizId = 4;

const LOCATIONS: &str = "locations";
const CONTACT: &str = "contact";
const WHY_DOLF: &str = "whydolf";
const COMPANY_TOUR: &str = "companytourvideo";

/// Resolves the placeholder to the quiz run's entry point.
fn expand(entry: &str) -> String {
    if entry == QUIZ_PLACEHOLDER {
        FIRST_QUIZ.to_string()
    } else {
        entry.to_string()
    }
}

/// The identifier "Continue" leads to from `current`, or `None` when
/// `current` is terminal going forward.
pub fn next(current: &str) -> Option<String> {
    if let Some(quiz) = Destination::quiz_number(current) {
        return Some(if quiz < LAST_QUIZ {
            Destination::quiz_identifier(quiz + 1)
        } else {
            LOCATIONS.to_string()
        });
    }

    // Matches the table's answer, kept as a rule of its own.
    if current == LOCATIONS {
        return Some(CONTACT.to_string());
    }

    // The tour sections are absent from the forward table.
    if current == WHY_DOLF {
        return Some(COMPANY_TOUR.to_string());
    }

    let position = FORWARD_ORDER.iter().position(|&entry| entry == current)?;
    FORWARD_ORDER.get(position + 1).map(|entry| expand(entry))
}

/// The identifier "Previous" leads to from `current`, or `None` when
/// `current` is terminal going back.
pub fn previous(current: &str) -> Option<String> {
    let position = PREVIOUS_ORDER.iter().position(|&entry| entry == current)?;
    let preceding = position.checked_sub(1)?;
    Some(expand(PREVIOUS_ORDER[preceding]))
}
