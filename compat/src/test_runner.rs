use std::path::PathBuf;
use std::process::Command;

use onboard_common::test_case::TestCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail {
        expected: Option<String>,
        actual: String,
    },
}

/// Runs compatibility tests against a built `onboard` binary.
pub struct TestRunner {
    runtime_path: PathBuf,
}

impl TestRunner {
    pub fn from_path(path: PathBuf) -> Self {
        TestRunner { runtime_path: path }
    }

    pub fn run(&self, test_case: &TestCase) -> TestResult {
        match Command::new(&self.runtime_path)
            .arg("run")
            .arg("--")
            .arg(test_case.input_commands())
            .output()
        {
            Ok(result) => compare(&test_case.result, &String::from_utf8_lossy(&result.stdout)),
            Err(err) => TestResult::Fail {
                expected: None,
                actual: format!("Error running test: {}", err),
            },
        }
    }
}

fn compare(expected: &str, output: &str) -> TestResult {
    let output_trimmed = output.trim_end_matches(&['\r', '\n'][..]);
    let expected_trimmed = expected.trim_end_matches(&['\r', '\n'][..]);

    if expected_trimmed == output_trimmed {
        TestResult::Pass
    } else {
        TestResult::Fail {
            expected: Some(expected.to_string()),
            actual: output.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trailing_newlines_are_ignored() {
        assert_eq!(compare("QUIT", "QUIT\n"), TestResult::Pass);
        assert_eq!(compare("QUIT\r\n", "QUIT"), TestResult::Pass);
    }

    #[test]
    fn differing_output_keeps_both_sides() {
        assert_eq!(
            compare("# Vision", "# Mission\n"),
            TestResult::Fail {
                expected: Some("# Vision".to_string()),
                actual: "# Mission\n".to_string(),
            }
        );
    }

    #[test]
    fn inputs_are_passed_after_a_separator() {
        let runner = TestRunner::from_path(PathBuf::from("echo"));
        let test_case =
            TestCase::from_string("# T\n```input\n-> team\nq\n```\n```result\nrun -- -> team,q\n```", "t.md").unwrap();
        assert_eq!(runner.run(&test_case), TestResult::Pass);
    }

    #[test]
    fn missing_runtime_fails_instead_of_panicking() {
        let runner = TestRunner::from_path(PathBuf::from("/nonexistent/onboard"));
        let test_case = TestCase::from_string("# T\n```input\nq\n```\n```result\nQUIT\n```", "t.md").unwrap();
        assert!(matches!(
            runner.run(&test_case),
            TestResult::Fail { expected: None, .. }
        ));
    }
}
