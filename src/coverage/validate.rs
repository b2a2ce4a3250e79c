//! Coverage policy validation

use thiserror::Error;

use crate::error::ValidationError;
use crate::report;

use super::{CoverageRecord, Policy};

/// One package that fails the coverage policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// The package printed no coverage line, so it has no test files.
    #[error("pkg={package} is missing tests")]
    MissingTests { package: String },

    /// The package is tested but its coverage is below the minimum.
    #[error("pkg={package} cov={coverage:.1} under the {minimum:.1}% minimum line coverage")]
    BelowMinimum {
        package: String,
        coverage: f64,
        minimum: f64,
    },
}

/// Check every record against the policy.
///
/// All violations are collected before failing so a single run surfaces
/// every offending package. On failure the raw report and the violation
/// listing are printed for the CI log; the returned error carries the
/// violations themselves.
pub fn validate(
    records: &[CoverageRecord],
    raw_output: &str,
    policy: &Policy,
) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    for record in records {
        if !record.reportable {
            continue;
        }

        match record.coverage {
            None => violations.push(Violation::MissingTests {
                package: record.package.clone(),
            }),
            Some(coverage) if coverage < policy.min_coverage => {
                violations.push(Violation::BelowMinimum {
                    package: record.package.clone(),
                    coverage,
                    minimum: policy.min_coverage,
                });
            }
            Some(_) => {}
        }
    }

    if violations.is_empty() {
        return Ok(());
    }

    report::print_failure(raw_output, &violations);
    Err(ValidationError { violations })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> Policy {
        Policy {
            min_coverage: 80.0,
            excluded: Default::default(),
        }
    }

    fn covered(package: &str, coverage: f64) -> CoverageRecord {
        CoverageRecord {
            package: package.to_string(),
            reportable: true,
            coverage: Some(coverage),
        }
    }

    fn untested(package: &str) -> CoverageRecord {
        CoverageRecord {
            package: package.to_string(),
            reportable: true,
            coverage: None,
        }
    }

    #[test]
    fn coverage_at_the_minimum_passes() {
        let records = [covered("orderflow/internal/cart", 80.0)];
        assert!(validate(&records, "", &policy()).is_ok());
    }

    #[test]
    fn coverage_below_the_minimum_fails_with_both_values_in_the_message() {
        let records = [covered("orderflow/internal/cart", 38.5)];

        let err = validate(&records, "", &policy()).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::BelowMinimum {
                package: "orderflow/internal/cart".to_string(),
                coverage: 38.5,
                minimum: 80.0,
            }]
        );

        let message = err.to_string();
        assert!(message.contains("orderflow/internal/cart"));
        assert!(message.contains("38.5"));
        assert!(message.contains("80.0"));
    }

    #[test]
    fn coverage_just_below_the_minimum_fails() {
        let records = [covered("orderflow/internal/cart", 79.9)];
        assert!(validate(&records, "", &policy()).is_err());
    }

    #[test]
    fn missing_tests_names_the_package() {
        let records = [untested("orderflow/internal/pricing")];

        let err = validate(&records, "", &policy()).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::MissingTests {
                package: "orderflow/internal/pricing".to_string(),
            }]
        );
        assert!(err
            .to_string()
            .contains("pkg=orderflow/internal/pricing is missing tests"));
    }

    #[test]
    fn non_reportable_records_never_produce_violations() {
        let records = [CoverageRecord {
            package: "orderflow/pkg/common".to_string(),
            reportable: false,
            coverage: None,
        }];

        assert!(validate(&records, "", &policy()).is_ok());
    }

    #[test]
    fn all_violations_are_collected_in_input_order() {
        let records = [
            untested("b/pkg"),
            covered("a/pkg", 99.0),
            covered("c/pkg", 12.0),
        ];

        let err = validate(&records, "", &policy()).unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(matches!(
            &err.violations[0],
            Violation::MissingTests { package } if package == "b/pkg"
        ));
        assert!(matches!(
            &err.violations[1],
            Violation::BelowMinimum { package, .. } if package == "c/pkg"
        ));
    }

    #[test]
    fn no_records_means_success() {
        assert!(validate(&[], "", &policy()).is_ok());
    }
}
