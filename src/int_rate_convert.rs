use crate::error::AnnuityResult;
use crate::numeric::AnnuityNum;

/// Convert nominal annual interest rate to effective annual interest rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
/// where:
/// - `nominal_annual_interest_rate` is the stated rate i⁽ᵐ⁾
/// - `compounding_periods_per_year` is m (may be fractional)
///
/// # Example
/// ```rust
/// # use rsannuity::prelude::*;
/// let eff = effective_interest_rate(0.1_f64, 12.0)?; // 10% compounded monthly
/// assert!((eff - 0.10471).abs() < 1e-5);
/// # AnnuityResult::Ok(())
/// ```
pub fn effective_interest_rate<T: AnnuityNum>(
    nominal_annual_interest_rate: T,
    compounding_periods_per_year: T,
) -> AnnuityResult<T> {
    let m = compounding_periods_per_year;
    let per_period = nominal_annual_interest_rate.try_div(m, "effective_interest_rate")?;
    per_period
        .try_add(T::one(), "effective_interest_rate")?
        .try_pow(m, "effective_interest_rate")?
        .try_sub(T::one(), "effective_interest_rate")
}

/// Convert effective annual interest rate to nominal annual interest rate.
///
/// # Formula
/// ```text
/// i⁽ᵐ⁾ = m[(1 + i)¹⁄ᵐ - 1]
/// ```
///
/// # Example
/// ```rust
/// # use rsannuity::prelude::*;
/// let nom = nominal_interest_rate(0.1047130674_f64, 12.0)?;
/// assert!((nom - 0.1).abs() < 1e-9);
/// # AnnuityResult::Ok(())
/// ```
pub fn nominal_interest_rate<T: AnnuityNum>(
    effective_annual_interest_rate: T,
    compounding_periods_per_year: T,
) -> AnnuityResult<T> {
    let m = compounding_periods_per_year;
    let exponent = T::one().try_div(m, "nominal_interest_rate")?;
    let growth = effective_annual_interest_rate
        .try_add(T::one(), "nominal_interest_rate")?
        .try_pow(exponent, "nominal_interest_rate")?;
    m.try_mul(growth.try_sub(T::one(), "nominal_interest_rate")?, "nominal_interest_rate")
}
