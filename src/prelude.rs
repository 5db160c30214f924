//! # RSAnnuity Prelude
//!
//! Conveniently re-exports the most common types and functions for annuity calculations.
//! Import this module to access all primary RSAnnuity features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use rsannuity::prelude::*;
//! let principal: Decimal = parse_num("11200")?;
//! let solution = interest_rate_detailed()
//!     .payment(dec!(291))
//!     .periods(dec!(48))
//!     .principal(principal)
//!     .call()?;
//! println!("Rate: {} (converged: {})", solution.rate, solution.converged);
//! # AnnuityResult::Ok(())
//! ```

// Package Result and error types
pub use crate::error::{AnnuityError, AnnuityResult};

// Numeric backends
pub use crate::numeric::{AnnuityNum, parse_num};

// Solver configuration
pub use crate::params::SolverConfig;

// Closed-form annuity functions
pub use crate::annuities_certain::*;

// Interest rate solver
pub use crate::rate_solver::*;

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Decimal backend
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
