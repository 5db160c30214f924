use crate::numeric::AnnuityNum;
use bon::Builder;
use garde::Validate;

/// Most decimal places the decimal backend can represent. Rounding a
/// `Decimal` to more places leaves it unchanged.
pub const MAX_DECIMALS: u32 = 28;

/// Decimal places kept after each solver step unless overridden.
pub const DEFAULT_MAX_DECIMALS: u32 = 8;

/// Solver step cap unless overridden.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

// =======================================
// RATE SOLVER CONFIGURATION STRUCT
// =======================================

/// Convergence policy for the interest-rate solver.
///
/// Every combination of fields has defined behavior, so the solver does not
/// check them unless asked. [`SolverConfig::validate_all`] is an opt-in check
/// that a policy behaves the same on every backend and can actually converge.
///
/// # Example
/// ```rust
/// # use rsannuity::prelude::*;
/// let config = SolverConfig::<f64>::builder()
///     .max_decimals(10)
///     .max_iterations(4)
///     .build();
/// config.validate_all()?;
/// assert_eq!(config.initial_guess, 0.1);
/// # AnnuityResult::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct SolverConfig<T: AnnuityNum> {
    // Starting point of the Newton-Raphson iteration
    #[builder(default = T::DEFAULT_INITIAL_GUESS)]
    pub initial_guess: T,

    // Iteration stops once a rounded step is strictly smaller than this
    #[builder(default = T::DEFAULT_PRECISION)]
    pub precision: T,

    // Every new guess is rounded to this many places before comparison
    #[garde(range(max = MAX_DECIMALS))]
    #[builder(default = DEFAULT_MAX_DECIMALS)]
    pub max_decimals: u32,

    // 0 returns the initial guess untouched
    #[builder(default = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

impl<T: AnnuityNum> Default for SolverConfig<T> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<T: AnnuityNum> SolverConfig<T> {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        // First run garde's built-in validations
        self.validate()?;

        // Then the constraints garde can't express on a generic field
        self.validate_custom_constraints()
    }

    fn validate_custom_constraints(&self) -> Result<(), garde::Report> {
        let mut report = garde::Report::new();

        if self.precision < T::zero() {
            report.append(
                garde::Path::new("precision"),
                garde::Error::new(format!(
                    "precision {} cannot be negative",
                    self.precision
                )),
            );
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(report)
        }
    }
}
