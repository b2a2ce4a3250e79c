//! Coverage report parser
//!
//! Converts the raw `go test ./... --cover` output into ordered
//! per-package records.

use crate::error::ParseError;

use super::{CoverageRecord, Policy};

/// Marker preceding the percentage on a covered-package line.
const COVERAGE_MARKER: &str = "coverage: ";

/// Module-download progress lines carry no package result.
const DOWNLOAD_NOISE: &str = "go: downloading";

/// Parse the full report into records, one per non-excluded package line.
///
/// Record order matches input line order. A single malformed percentage
/// aborts the whole parse.
pub fn parse_report(raw: &str, policy: &Policy) -> Result<Vec<CoverageRecord>, ParseError> {
    let mut records = Vec::new();

    for line in raw.lines() {
        if line.contains(DOWNLOAD_NOISE) {
            continue;
        }

        // First column is the tool's status marker ("ok", "?", "FAIL"),
        // second is the package path.
        let package = match line.split_whitespace().nth(1) {
            Some(package) => package,
            None => {
                return Err(ParseError::MalformedLine {
                    line: line.to_string(),
                })
            }
        };

        if policy.is_excluded(package) {
            continue;
        }

        let coverage = match line.find(COVERAGE_MARKER) {
            Some(at) => Some(parse_percentage(&line[at..])?),
            None => None,
        };

        records.push(CoverageRecord {
            package: package.to_string(),
            reportable: true,
            coverage,
        });
    }

    Ok(records)
}

/// Extract the percentage from `"coverage: 38.5% of statements"`.
fn parse_percentage(rest: &str) -> Result<f64, ParseError> {
    let token = rest
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ParseError::MalformedLine {
            line: rest.to_string(),
        })?;

    let number = token.strip_suffix('%').unwrap_or(token);
    number
        .parse::<f64>()
        .map_err(|source| ParseError::InvalidPercentage {
            token: number.to_string(),
            source,
        })
}
