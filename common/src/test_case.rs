use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TestCaseError {
    #[error("test case has no `# Title` line")]
    MissingName,
    #[error("test case has no ```{0} block")]
    MissingBlock(&'static str),
}

/// A walkthrough compatibility test: commands fed to the CLI and the exact
/// stdout expected back.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub result: String,
    pub path: PathBuf,
    pub disabled: bool,
}

fn parse_name(content: &str) -> Option<String> {
    content
        .lines()
        .next()?
        .strip_prefix("# ")
        .map(|name| name.trim().to_string())
}

fn parse_markdown_block(content: &str, language: &'static str) -> Result<String, TestCaseError> {
    let opening = format!("```{}\n", language);
    let (_, rest) = content
        .split_once(&opening)
        .ok_or(TestCaseError::MissingBlock(language))?;
    let (block, _) = rest
        .split_once("```")
        .ok_or(TestCaseError::MissingBlock(language))?;
    Ok(block.trim().to_string())
}

impl TestCase {
    pub fn from_string<A, B>(content: A, path: B) -> Result<Self, TestCaseError>
    where
        A: AsRef<str>,
        B: AsRef<Path>,
    {
        let content = content.as_ref();
        let name = parse_name(content).ok_or(TestCaseError::MissingName)?;
        let input = parse_markdown_block(content, "input")?;
        let result = parse_markdown_block(content, "result")?;
        let disabled = content.trim().ends_with("!!! disabled");

        Ok(TestCase {
            name,
            input,
            result,
            path: path.as_ref().into(),
            disabled,
        })
    }

    /// The input block as the comma-separated string the CLI expects.
    pub fn input_commands(&self) -> String {
        self.input.lines().collect::<Vec<&str>>().join(",")
    }
}
