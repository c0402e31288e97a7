use clap::{Parser, Subcommand};
use onboard_common::{builtin_menu, Catalog, PortalConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod console;
mod output;
mod session;

use console::Console;

/// Onboard - Walk new hires through the DolfTech onboarding portal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding onboard.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a list of portal commands
    Run {
        /// Comma-separated list of inputs (e.g., "n,n,p,q" or "-> quiz1,2,s")
        #[arg(allow_hyphen_values = true)]
        input_string: String,
        /// Identifier to open first instead of the configured start page
        #[arg(long)]
        start: Option<String>,
    },
    /// Browse the portal from an interactive prompt
    Console {
        /// Identifier to open first instead of the configured start page
        #[arg(long)]
        start: Option<String>,
    },
    /// Print the sidebar menu
    Menu,
}

fn main() {
    let cli = Args::parse();

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Args) -> onboard_common::Result<()> {
    let config = PortalConfig::load(&cli.config_dir)?;
    init_tracing(&config.log_filter);
    let catalog = Catalog::builtin()?;

    match cli.command {
        Commands::Run {
            input_string,
            start,
        } => {
            let start = start.unwrap_or_else(|| config.start.clone());
            for line in session::run_script(catalog, &config, &start, &input_string) {
                println!("{}", line);
            }
        }
        Commands::Console { start } => {
            let start = start.unwrap_or_else(|| config.start.clone());
            Console::start(catalog, &config, &start)?;
        }
        Commands::Menu => {
            for line in output::menu_lines(&catalog, &builtin_menu(&catalog)) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Logs go to stderr so `run` output stays comparable. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_input(argv: &[&str]) -> String {
        match Args::try_parse_from(argv).unwrap().command {
            Commands::Run { input_string, .. } => input_string,
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn run_accepts_inputs_starting_with_a_goto() {
        assert_eq!(
            run_input(&["onboard", "run", "-> tutorialvideos,n"]),
            "-> tutorialvideos,n"
        );
    }

    #[test]
    fn run_accepts_inputs_after_a_separator() {
        assert_eq!(run_input(&["onboard", "run", "--", "-> locations,t egypt,q"]), "-> locations,t egypt,q");
        assert_eq!(
            run_input(&["onboard", "run", "--start", "vision", "--", "->,q"]),
            "->,q"
        );
    }

    #[test]
    fn run_options_still_parse_before_the_input() {
        let args = Args::try_parse_from(["onboard", "--config-dir", "conf", "run", "--start", "quiz1", "s,q"]).unwrap();
        assert_eq!(args.config_dir, PathBuf::from("conf"));
        match args.command {
            Commands::Run { input_string, start } => {
                assert_eq!(input_string, "s,q");
                assert_eq!(start.as_deref(), Some("quiz1"));
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn compatibility_inputs_survive_argument_parsing() {
        for content in [
            include_str!("../../compatibility-tests/00000000001-quiz-walkthrough.md"),
            include_str!("../../compatibility-tests/00000000002-map-tabs.md"),
            include_str!("../../compatibility-tests/00000000003-terminal-controls.md"),
            include_str!("../../compatibility-tests/00000000004-video-tour-links.md"),
        ] {
            let test_case =
                onboard_common::test_case::TestCase::from_string(content, "compatibility-test.md").unwrap();
            let inputs = test_case.input_commands();
            assert_eq!(run_input(&["onboard", "run", &inputs]), inputs);
            assert_eq!(run_input(&["onboard", "run", "--", &inputs]), inputs);
        }
    }
}
