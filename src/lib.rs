//! # RSAnnuity
//!
//! A small, type-safe Rust library for the four basic properties of a fixed-rate, fixed-term annuity-immediate:
//! level payment, principal, number of periods and periodic interest rate.
//!
//! ## Features
//! - **Closed forms**: payment, principal and (fractional) number of periods
//! - **Rate solver**: bounded Newton-Raphson with per-step decimal rounding for the periodic interest rate
//! - **Interchangeable arithmetic**: every function is generic over [`AnnuityNum`](numeric::AnnuityNum),
//!   implemented for `f64`, `f32` and 28-digit [`Decimal`](rust_decimal::Decimal)
//! - **Typed failures**: zero divisors and logarithm domain errors surface as [`AnnuityError`](error::AnnuityError)
//! - **Builder Pattern**: named arguments with defaults for every solving function
//!
//! ## Quick Start
//!
//! ```rust
//! use rsannuity::prelude::*;
//!
//! // 30-year mortgage, 0.65% per month
//! let pmt = payment()
//!     .interest_rate(0.0065)
//!     .periods(360.0)
//!     .principal(225_000.0)
//!     .call()?;
//!
//! // Same loan in exact decimal arithmetic
//! let pmt_dec = payment()
//!     .interest_rate(dec!(0.0065))
//!     .periods(dec!(360))
//!     .principal(dec!(225000))
//!     .call()?;
//!
//! // Back out the monthly rate of a $11,200 loan repaid with 48 payments of $291
//! let rate = interest_rate()
//!     .payment(dec!(291))
//!     .periods(dec!(48))
//!     .principal(dec!(11200))
//!     .call()?;
//!
//! // Nominal 10% compounded monthly
//! let eff = effective_interest_rate(0.1, 12.0)?;
//!
//! println!("Payment: {pmt:.6}");
//! println!("Payment (decimal): {}", pmt_dec.round_dp(2));
//! println!("Monthly rate: {rate}");
//! println!("Effective annual rate: {eff:.6}");
//! # AnnuityResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Closed forms**: `payment`, `principal`, `periods`
//! - **Rate solver**: `interest_rate`, `interest_rate_detailed`, `improve_interest_rate`, `solve`
//! - **Interest Rate Conversions**: `effective_interest_rate`, `nominal_interest_rate`
//!
//! ## Notes
//! - Annuities are immediate: each payment falls at the end of its period, after interest accrues
//! - Rates are periodic decimals (0.0065 for 0.65% per period), not annual percentages
//! - The solver rounds half away from zero on every backend
//! - Running out of solver iterations is not an error; use `interest_rate_detailed` to see whether the precision was met
//! - Nothing is logged above `debug`; solver steps are traced through the `log` facade

pub mod annuities_certain;
pub mod error;
pub mod int_rate_convert;
pub mod numeric;
pub mod params;
pub mod prelude;
pub mod rate_solver;

pub use error::{AnnuityError, AnnuityResult};
