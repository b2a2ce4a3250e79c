//! Error taxonomy for the gate pipeline
//!
//! Every failure mode is typed so callers can tell an execution failure
//! from a parse failure from a policy violation without string matching.
//! All of them terminate the run; there is no recovery path.

use std::process::ExitStatus;

use thiserror::Error;

use crate::coverage::Violation;

/// The test command could not produce a usable report.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The subprocess could not be spawned at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The subprocess ran but exited non-zero (failing tests, build errors).
    #[error("`{command}` exited with {status}")]
    Failed {
        command: String,
        status: ExitStatus,
        /// Combined stdout/stderr captured before the failure.
        output: String,
    },
}

/// The report text could not be converted into coverage records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A report line did not have the expected status and package columns.
    #[error("malformed report line: {line:?}")]
    MalformedLine { line: String },

    /// The token after the coverage marker was not a number.
    #[error("invalid coverage percentage {token:?}: {source}")]
    InvalidPercentage {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Aggregate of every policy violation found in one run.
#[derive(Debug, Error)]
#[error("the following packages are not compliant: [{}]", list(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Any failure that terminates the gate.
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
