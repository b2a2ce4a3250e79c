//! Test suite execution
//!
//! Spawns the instrumented test run and captures its combined output.

use std::process::{Command, Stdio};

use crate::error::ExecutionError;

/// Arguments for the full instrumented suite.
const GO_TEST_ARGS: &[&str] = &["test", "./...", "--cover"];

/// The collaborator that produces the raw coverage report.
///
/// The gate is tested against stub implementations of this trait.
pub trait SuiteRunner {
    /// Run the suite once and return the combined stdout/stderr text.
    fn run(&self) -> Result<String, ExecutionError>;
}

/// Runs `go test ./... --cover` in the current directory.
#[derive(Debug, Default)]
pub struct GoTestRunner;

impl GoTestRunner {
    pub fn new() -> Self {
        Self
    }
}

impl SuiteRunner for GoTestRunner {
    fn run(&self) -> Result<String, ExecutionError> {
        let output = Command::new("go")
            .args(GO_TEST_ARGS)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ExecutionError::Spawn {
                command: command_line(),
                source,
            })?;

        // The parser only ever sees the report as one blob, stdout first.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ExecutionError::Failed {
                command: command_line(),
                status: output.status,
                output: text,
            });
        }

        Ok(text)
    }
}

fn command_line() -> String {
    format!("go {}", GO_TEST_ARGS.join(" "))
}
