use crate::session::{Flow, Session};
use colored::{ColoredString, Colorize};
use onboard_common::{Catalog, PortalConfig};
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{DefaultEditor, Editor};

const HISTORY_FILE: &str = "history.txt";

#[derive(Debug)]
pub struct Console {}

impl Console {
    fn prompt(rl: &mut Editor<(), FileHistory>, current: Option<String>) -> Result<String, ReadlineError> {
        let mut prompt_str = String::from("\n");
        if let Some(current) = current {
            prompt_str.push_str(&current);
        }
        prompt_str.push_str(" > ");

        rl.readline(&prompt_str)
    }

    pub fn start(catalog: Catalog, config: &PortalConfig, start: &str) -> Result<(), ReadlineError> {
        let mut session = Session::new(catalog, config);
        session.open(start);
        print_output(session.take_output());

        let mut rl = DefaultEditor::new()?;
        rl.load_history(HISTORY_FILE).unwrap_or_default();

        loop {
            match Self::prompt(&mut rl, session.current()) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    let flow = session.apply(&line);
                    print_output(session.take_output());
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => break,
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("{:?}", err);
                    break;
                }
            }
        }

        rl.save_history(HISTORY_FILE)
    }
}

fn paint(line: &str) -> ColoredString {
    if line.starts_with("# ") {
        line.bold()
    } else if line == "Correct!" {
        line.green()
    } else if line == "Incorrect!" || line.starts_with("ERROR:") {
        line.red()
    } else if line == "Please select an answer." {
        line.yellow()
    } else if ["< ", "> ", "^ "].iter().any(|marker| line.starts_with(marker)) {
        line.cyan()
    } else {
        line.normal()
    }
}

fn print_output(lines: Vec<String>) {
    for line in lines {
        println!("{}", paint(&line));
    }
}
