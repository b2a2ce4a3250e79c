//! Coverage model and policy
//!
//! Provides:
//! - The per-package coverage record
//! - The gate policy (minimum threshold + excluded packages)
//! - Report parsing and validation

mod parse;
mod validate;

pub use parse::parse_report;
pub use validate::{validate, Violation};

use std::collections::HashSet;

/// Minimum per-package statement coverage accepted by the gate.
pub const MIN_COVERAGE: f64 = 80.0;

/// Packages that never carry their own tests: binary entry points,
/// test tooling, and shared helpers with no testable logic.
const EXCLUDED_PACKAGES: &[&str] = &[
    "orderflow",
    "orderflow/cmd/orderflow",
    "orderflow/cmd/migrate",
    "orderflow/internal/testutil",
    "orderflow/pkg/common",
];

/// One package line from the coverage report.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRecord {
    pub package: String,
    /// Whether this line counts toward the gate verdict.
    pub reportable: bool,
    /// Statement coverage, `None` when the package has no test files.
    pub coverage: Option<f64>,
}

/// Policy applied to every parsed record.
///
/// Built from the compile-time constants by `Policy::default()` and passed
/// into the parser and validator explicitly.
#[derive(Debug, Clone)]
pub struct Policy {
    pub min_coverage: f64,
    pub excluded: HashSet<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_coverage: MIN_COVERAGE,
            excluded: EXCLUDED_PACKAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Policy {
    pub fn is_excluded(&self, package: &str) -> bool {
        self.excluded.contains(package)
    }
}
