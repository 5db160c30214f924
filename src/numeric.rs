//! Numeric backend abstraction.
//!
//! Every calculation in the crate is generic over [`AnnuityNum`], so the same
//! algorithm runs on binary floats (`f64`, `f32`) and on 28-digit base-10
//! [`Decimal`]. One call uses one type throughout; conversion from caller
//! representations happens once, at the boundary, through [`parse_num`] or
//! [`num_traits::FromPrimitive`].
//!
//! # Rounding
//! [`AnnuityNum::round_half_away`] rounds half away from zero on every backend
//! (`0.125 -> 0.13`, `-2.5 -> -3`). Note that `Decimal::round_dp` itself rounds
//! half to even; the trait method does not.

use core::fmt::{Debug, Display};
use core::str::FromStr;

use num_traits::{FromPrimitive, Num, Signed};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::{AnnuityError, AnnuityResult};

/// Arithmetic needed by the annuity formulas and the rate solver.
///
/// Negation, `abs` and comparison come from the supertraits. Every formula
/// goes through the fallible operations below, which report failures as typed
/// [`AnnuityError`]s tagged with the calling operation instead of panicking on
/// decimal overflow or producing NaN/inf on floats.
pub trait AnnuityNum:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Num
    + Signed
    + FromPrimitive
    + FromStr
{
    /// Starting rate for the solver (0.1).
    const DEFAULT_INITIAL_GUESS: Self;
    /// Convergence threshold for the solver (0.0001).
    const DEFAULT_PRECISION: Self;

    /// `self + rhs`; overflow is [`AnnuityError::NonFinite`].
    fn try_add(self, rhs: Self, context: &'static str) -> AnnuityResult<Self>;

    /// `self - rhs`; overflow is [`AnnuityError::NonFinite`].
    fn try_sub(self, rhs: Self, context: &'static str) -> AnnuityResult<Self>;

    /// `self * rhs`; overflow is [`AnnuityError::NonFinite`].
    fn try_mul(self, rhs: Self, context: &'static str) -> AnnuityResult<Self>;

    /// `self / rhs`; a zero divisor is [`AnnuityError::DivisionByZero`].
    fn try_div(self, rhs: Self, context: &'static str) -> AnnuityResult<Self>;

    /// `self` raised to a real power.
    fn try_pow(self, exp: Self, context: &'static str) -> AnnuityResult<Self>;

    /// Natural logarithm; a non-positive argument is [`AnnuityError::Domain`].
    fn try_ln(self, context: &'static str) -> AnnuityResult<Self>;

    /// Round to `decimals` places, half away from zero.
    fn round_half_away(self, decimals: u32) -> Self;
}

macro_rules! impl_float_annuity_num {
    ($t:ty) => {
        impl AnnuityNum for $t {
            const DEFAULT_INITIAL_GUESS: Self = 0.1;
            const DEFAULT_PRECISION: Self = 0.0001;

            fn try_add(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
                finite(self + rhs, context)
            }

            fn try_sub(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
                finite(self - rhs, context)
            }

            fn try_mul(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
                finite(self * rhs, context)
            }

            fn try_div(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
                if rhs == 0.0 {
                    return Err(AnnuityError::DivisionByZero { context });
                }
                finite(self / rhs, context)
            }

            fn try_pow(self, exp: Self, context: &'static str) -> AnnuityResult<Self> {
                if self == 0.0 && exp < 0.0 {
                    return Err(AnnuityError::DivisionByZero { context });
                }
                finite(self.powf(exp), context)
            }

            fn try_ln(self, context: &'static str) -> AnnuityResult<Self> {
                if self.is_nan() || self <= 0.0 {
                    return Err(AnnuityError::Domain { context });
                }
                finite(self.ln(), context)
            }

            fn round_half_away(self, decimals: u32) -> Self {
                let factor = (10.0 as $t).powi(decimals as i32);
                let scaled = self * factor;
                if !scaled.is_finite() {
                    return self;
                }
                // f32/f64 `round` already breaks ties away from zero
                scaled.round() / factor
            }
        }
    };
}

impl_float_annuity_num!(f64);
impl_float_annuity_num!(f32);

impl AnnuityNum for Decimal {
    const DEFAULT_INITIAL_GUESS: Self = dec!(0.1);
    const DEFAULT_PRECISION: Self = dec!(0.0001);

    fn try_add(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
        self.checked_add(rhs)
            .ok_or(AnnuityError::NonFinite { context })
    }

    fn try_sub(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
        self.checked_sub(rhs)
            .ok_or(AnnuityError::NonFinite { context })
    }

    fn try_mul(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
        self.checked_mul(rhs)
            .ok_or(AnnuityError::NonFinite { context })
    }

    fn try_div(self, rhs: Self, context: &'static str) -> AnnuityResult<Self> {
        if rhs.is_zero() {
            return Err(AnnuityError::DivisionByZero { context });
        }
        self.checked_div(rhs)
            .ok_or(AnnuityError::NonFinite { context })
    }

    fn try_pow(self, exp: Self, context: &'static str) -> AnnuityResult<Self> {
        if self.is_zero() && exp.is_sign_negative() {
            return Err(AnnuityError::DivisionByZero { context });
        }
        self.checked_powd(exp)
            .ok_or(AnnuityError::NonFinite { context })
    }

    fn try_ln(self, context: &'static str) -> AnnuityResult<Self> {
        if self <= Decimal::ZERO {
            return Err(AnnuityError::Domain { context });
        }
        self.checked_ln().ok_or(AnnuityError::NonFinite { context })
    }

    fn round_half_away(self, decimals: u32) -> Self {
        self.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Parse a caller-supplied string into the chosen backend.
///
/// # Example
/// ```rust
/// # use rsannuity::prelude::*;
/// let principal: Decimal = parse_num("225000.00")?;
/// let rate: f64 = parse_num("0.0065")?;
/// # AnnuityResult::Ok(())
/// ```
pub fn parse_num<T: AnnuityNum>(value: &str) -> AnnuityResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| AnnuityError::InvalidNumber(value.to_string()))
}

fn finite<F: num_traits::Float>(value: F, context: &'static str) -> AnnuityResult<F> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnnuityError::NonFinite { context })
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_float_rounds_half_away_from_zero() {
        assert_abs_diff_eq!(AnnuityNum::round_half_away(0.125_f64, 2), 0.13, epsilon = 1e-12);
        assert_abs_diff_eq!(AnnuityNum::round_half_away(2.5_f64, 0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(AnnuityNum::round_half_away(-2.5_f64, 0), -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(AnnuityNum::round_half_away(0.5_f32, 0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            AnnuityNum::round_half_away(0.009429524154490856_f64, 8),
            0.00942952,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_decimal_rounds_half_away_from_zero() {
        assert_eq!(AnnuityNum::round_half_away(dec!(2.5), 0), dec!(3));
        assert_eq!(AnnuityNum::round_half_away(dec!(-2.5), 0), dec!(-3));
        assert_eq!(AnnuityNum::round_half_away(dec!(0.125), 2), dec!(0.13));
        assert_eq!(AnnuityNum::round_half_away(dec!(0.00940074), 4), dec!(0.0094));
        // Decimal's own round_dp is banker's rounding
        assert_eq!(dec!(2.5).round_dp(0), dec!(2));
    }

    #[test]
    fn test_try_ln_rejects_non_positive() {
        assert_eq!(
            0.0_f64.try_ln("test"),
            Err(AnnuityError::Domain { context: "test" })
        );
        assert_eq!(
            (-0.75_f64).try_ln("test"),
            Err(AnnuityError::Domain { context: "test" })
        );
        assert_eq!(
            dec!(-0.75).try_ln("test"),
            Err(AnnuityError::Domain { context: "test" })
        );
        assert_eq!(
            Decimal::ZERO.try_ln("test"),
            Err(AnnuityError::Domain { context: "test" })
        );
    }

    #[test]
    fn test_try_div_by_zero() {
        assert_eq!(
            1.0_f64.try_div(0.0, "test"),
            Err(AnnuityError::DivisionByZero { context: "test" })
        );
        assert_eq!(
            dec!(1).try_div(Decimal::ZERO, "test"),
            Err(AnnuityError::DivisionByZero { context: "test" })
        );
        assert_eq!(dec!(1).try_div(dec!(4), "test"), Ok(dec!(0.25)));
    }

    #[test]
    fn test_try_pow_zero_base_negative_exponent() {
        assert_eq!(
            0.0_f64.try_pow(-2.0, "test"),
            Err(AnnuityError::DivisionByZero { context: "test" })
        );
        assert_eq!(
            Decimal::ZERO.try_pow(dec!(-2), "test"),
            Err(AnnuityError::DivisionByZero { context: "test" })
        );
    }

    #[test]
    fn test_try_pow_overflow_is_non_finite() {
        assert_eq!(
            10.0_f64.try_pow(400.0, "test"),
            Err(AnnuityError::NonFinite { context: "test" })
        );
    }

    #[test]
    fn test_checked_arithmetic_overflow_is_non_finite() {
        assert_eq!(
            Decimal::MAX.try_mul(dec!(2), "test"),
            Err(AnnuityError::NonFinite { context: "test" })
        );
        assert_eq!(
            Decimal::MAX.try_add(Decimal::ONE, "test"),
            Err(AnnuityError::NonFinite { context: "test" })
        );
        assert_eq!(
            Decimal::MIN.try_sub(Decimal::ONE, "test"),
            Err(AnnuityError::NonFinite { context: "test" })
        );
        assert_eq!(
            f64::MAX.try_mul(2.0, "test"),
            Err(AnnuityError::NonFinite { context: "test" })
        );
        assert_eq!(
            f64::MAX.try_add(f64::MAX, "test"),
            Err(AnnuityError::NonFinite { context: "test" })
        );
        assert_eq!(dec!(1.5).try_mul(dec!(2), "test"), Ok(dec!(3.0)));
        assert_eq!(dec!(1).try_sub(dec!(0.25), "test"), Ok(dec!(0.75)));
    }

    #[test]
    fn test_try_pow_integer_exponent() {
        assert_eq!(dec!(1.01).try_pow(dec!(-1), "test").unwrap().round_dp(10), dec!(0.9900990099));
        assert_abs_diff_eq!(
            1.01_f64.try_pow(-48.0, "test").unwrap(),
            0.620260405,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_parse_num() {
        let value: Decimal = parse_num(" 225000.00 ").unwrap();
        assert_eq!(value, dec!(225000));
        let value: f64 = parse_num("0.0065").unwrap();
        assert_abs_diff_eq!(value, 0.0065, epsilon = 1e-15);
        assert_eq!(
            parse_num::<Decimal>("twelve"),
            Err(AnnuityError::InvalidNumber("twelve".to_string()))
        );
    }

    #[test]
    fn test_default_constants_agree_across_backends() {
        assert_eq!(Decimal::DEFAULT_INITIAL_GUESS, dec!(0.1));
        assert_eq!(Decimal::DEFAULT_PRECISION, dec!(0.0001));
        assert_abs_diff_eq!(f64::DEFAULT_INITIAL_GUESS, 0.1);
        assert_abs_diff_eq!(f64::DEFAULT_PRECISION, 0.0001);
    }
}
