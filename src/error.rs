//! Error types for annuity calculations.
//!
//! Every solving function returns [`AnnuityResult`]. Arithmetic failures of the
//! numeric backend (a zero divisor, the logarithm of a non-positive number, a
//! power that leaves the representable range) surface as typed variants so a
//! caller can tell them apart without parsing text.
//!
//! ```
//! use rsannuity::prelude::*;
//!
//! // 0.05 * 3500 / 100 >= 1, so the loan is never paid off
//! let result = periods().interest_rate(0.05).payment(100.0).principal(3500.0).call();
//! assert!(matches!(result, Err(AnnuityError::Domain { .. })));
//! ```

use thiserror::Error;

/// Package result type.
pub type AnnuityResult<T> = Result<T, AnnuityError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnuityError {
    /// Logarithm of zero or a negative value.
    #[error("Numeric domain error: logarithm of a non-positive value in {context}")]
    Domain { context: &'static str },

    /// A divisor evaluated to zero.
    #[error("Division by zero in {context}")]
    DivisionByZero { context: &'static str },

    /// A power or quotient left the range of the numeric backend.
    #[error("Non-finite result in {context}")]
    NonFinite { context: &'static str },

    /// A caller-supplied string could not be parsed into the numeric backend.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Solver configuration failed validation.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

impl From<garde::Report> for AnnuityError {
    fn from(report: garde::Report) -> Self {
        AnnuityError::InvalidConfig(report.to_string())
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_context() {
        let err = AnnuityError::DivisionByZero {
            context: "payment",
        };
        assert_eq!(err.to_string(), "Division by zero in payment");

        let err = AnnuityError::Domain { context: "periods" };
        assert!(err.to_string().contains("periods"));
    }

    #[test]
    fn test_garde_report_converts_to_invalid_config() {
        let mut report = garde::Report::new();
        report.append(
            garde::Path::new("max_decimals"),
            garde::Error::new("greater than 28"),
        );
        let err: AnnuityError = report.into();
        match err {
            AnnuityError::InvalidConfig(msg) => assert!(msg.contains("max_decimals")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
