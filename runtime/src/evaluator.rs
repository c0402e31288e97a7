use onboard_common::{Catalog, Quiz, QuizId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Unanswered,
    Correct,
    Incorrect,
}

impl Evaluation {
    pub fn message(&self) -> &'static str {
        match self {
            Evaluation::Unanswered => "Please select an answer.",
            Evaluation::Correct => "Correct!",
            Evaluation::Incorrect => "Incorrect!",
        }
    }

    /// Any answer, right or wrong, unlocks the continue control.
    pub fn reveals_continue(&self) -> bool {
        !matches!(self, Evaluation::Unanswered)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Compares a selection against one quiz's answer key.
pub fn evaluate(quiz: &Quiz, selected: Option<usize>) -> Evaluation {
    match selected {
        None => Evaluation::Unanswered,
        Some(index) if index == quiz.correct => Evaluation::Correct,
        Some(_) => Evaluation::Incorrect,
    }
}

/// Answer checking against the catalog's quiz set.
#[derive(Debug, Clone, Copy)]
pub struct QuizEvaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> QuizEvaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// `None` when the catalog has no quiz `quiz`.
    pub fn evaluate(&self, quiz: QuizId, selected: Option<usize>) -> Option<Evaluation> {
        self.catalog.quiz(quiz).map(|quiz| evaluate(quiz, selected))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_builtin_quiz_checks_against_its_key() {
        let catalog = Catalog::builtin().unwrap();
        let evaluator = QuizEvaluator::new(&catalog);

        for quiz in catalog.quizzes() {
            assert_eq!(
                evaluator.evaluate(quiz.id, Some(quiz.correct)),
                Some(Evaluation::Correct)
            );
            for index in (0..quiz.options.len()).filter(|&index| index != quiz.correct) {
                assert_eq!(
                    evaluator.evaluate(quiz.id, Some(index)),
                    Some(Evaluation::Incorrect)
                );
            }
            assert_eq!(
                evaluator.evaluate(quiz.id, None),
                Some(Evaluation::Unanswered)
            );
        }
    }

    #[test]
    fn unknown_quiz_is_not_evaluated() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(QuizEvaluator::new(&catalog).evaluate(5, Some(0)), None);
    }

    #[test]
    fn only_unanswered_keeps_continue_hidden() {
        assert!(!Evaluation::Unanswered.reveals_continue());
        assert!(Evaluation::Correct.reveals_continue());
        assert!(Evaluation::Incorrect.reveals_continue());
    }
}
