//! The gate pipeline: run, parse, validate

use crate::coverage::{parse_report, validate, Policy};
use crate::error::{ExecutionError, GateError};
use crate::runner::SuiteRunner;

/// Run the full gate once.
///
/// The suite output is captured in full before parsing begins; any failure
/// short-circuits the rest of the pipeline. When the suite itself fails,
/// the captured report is printed so the CI log shows which tests broke.
pub fn enforce(runner: &dyn SuiteRunner, policy: &Policy) -> Result<(), GateError> {
    let report = match runner.run() {
        Ok(report) => report,
        Err(err) => {
            if let ExecutionError::Failed { output, .. } = &err {
                println!("{output}");
            }
            return Err(err.into());
        }
    };

    let records = parse_report(&report, policy)?;
    validate(&records, &report, policy)?;

    Ok(())
}
