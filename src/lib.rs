//! Covergate - CI coverage gate
//!
//! A build-pipeline gate that:
//! - Runs the full test suite with coverage instrumentation
//! - Parses the per-package coverage report
//! - Fails the build when any package is missing tests or falls below
//!   the minimum coverage

pub mod coverage;
pub mod error;
pub mod gate;
pub mod report;
pub mod runner;

pub use coverage::{parse_report, validate, CoverageRecord, Policy, Violation, MIN_COVERAGE};
pub use error::{ExecutionError, GateError, ParseError, ValidationError};
pub use gate::enforce;
pub use runner::{GoTestRunner, SuiteRunner};
