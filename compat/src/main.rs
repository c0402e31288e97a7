use clap::Parser;
use colored::Colorize;
use glob::glob;
use onboard_common::test_case::TestCase;
use std::path::PathBuf;

mod test_runner;
use test_runner::{TestResult, TestRunner};

/// Runs the markdown compatibility tests against an `onboard` binary
#[derive(Parser, Debug)]
struct Args {
    /// Runtime path
    runtime: PathBuf,

    /// Compatibility Tests glob (e.g., "compatibility-tests/*.md")
    compatibility_tests: String,
}

fn main() {
    let args = Args::parse();

    let paths = match glob(&args.compatibility_tests) {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("Invalid pattern {}: {}", args.compatibility_tests, err);
            std::process::exit(1);
        }
    };

    let runner = TestRunner::from_path(args.runtime);
    let mut failed = 0;
    let mut passed = 0;

    for path in paths {
        let path = match path {
            Ok(path) => path,
            Err(err) => {
                eprintln!("{}", err);
                failed += 1;
                continue;
            }
        };
        let test_case = match std::fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|content| TestCase::from_string(content, &path).map_err(|err| err.to_string()))
        {
            Ok(test_case) => test_case,
            Err(err) => {
                println!("{} {}: {}", "ERROR".red(), path.display(), err);
                failed += 1;
                continue;
            }
        };

        if test_case.disabled {
            println!("{} {}", "SKIP".yellow(), test_case.name);
            continue;
        }

        match runner.run(&test_case) {
            TestResult::Pass => {
                println!("{} {}", "PASS".green(), test_case.name);
                passed += 1;
            }
            TestResult::Fail { expected, actual } => {
                println!("{} {} ({})", "FAIL".red(), test_case.name, path.display());
                if let Some(expected) = expected {
                    println!("{}\n{}", "Expected:".bold(), expected);
                }
                println!("{}\n{}", "Actual:".bold(), actual);
                failed += 1;
            }
        }
    }

    println!("{} passed, {} failed", passed, failed);
    if failed > 0 {
        std::process::exit(1);
    }
}
