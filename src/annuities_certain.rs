use crate::error::AnnuityResult;
use crate::numeric::AnnuityNum;
use bon::builder;

/// Level payment of an annuity-certain immediate (in arrears).
///
/// # Formula
/// ```text
/// PMT = i · PV / (1 - (1 + i)⁻ⁿ)
/// ```
/// where:
/// - `i` is the periodic interest rate
/// - `n` is the number of payment periods (may be fractional)
/// - `PV` is the principal
///
/// A zero rate makes the denominator vanish and is reported as
/// [`AnnuityError::DivisionByZero`](crate::error::AnnuityError::DivisionByZero).
///
/// # Examples
/// ```rust
/// # use rsannuity::prelude::*;
/// // 30-year mortgage at 0.65% per month
/// let pmt = payment().interest_rate(0.0065_f64).periods(360.0).principal(225_000.0).call()?;
/// assert!((pmt - 1619.708627).abs() < 1e-6);
/// # AnnuityResult::Ok(())
/// ```
#[builder]
pub fn payment<T: AnnuityNum>(interest_rate: T, periods: T, principal: T) -> AnnuityResult<T> {
    // PMT = i · PV / (1 - vⁿ)
    let vn = interest_rate
        .try_add(T::one(), "payment")?
        .try_pow(-periods, "payment")?;
    interest_rate
        .try_mul(principal, "payment")?
        .try_div(T::one().try_sub(vn, "payment")?, "payment")
}

/// Principal (present value) of an annuity-certain immediate.
///
/// # Formula
/// ```text
/// PV = (PMT / i) · (1 - (1 + i)⁻ⁿ)
/// ```
///
/// # Examples
/// ```rust
/// # use rsannuity::prelude::*;
/// let pv = principal().interest_rate(0.014083_f64).payment(60.0).periods(36.0).call()?;
/// assert!((pv - 1685.26).abs() < 0.01);
/// # AnnuityResult::Ok(())
/// ```
#[builder]
pub fn principal<T: AnnuityNum>(interest_rate: T, payment: T, periods: T) -> AnnuityResult<T> {
    let vn = interest_rate
        .try_add(T::one(), "principal")?
        .try_pow(-periods, "principal")?;
    payment
        .try_div(interest_rate, "principal")?
        .try_mul(T::one().try_sub(vn, "principal")?, "principal")
}

/// Number of payment periods needed to pay off a principal.
///
/// # Formula
/// ```text
/// n = -ln(1 - i · PV / PMT) / ln(1 + i)
/// ```
/// The result is generally fractional. When `i · PV / PMT >= 1` the payment
/// never covers the interest and the call fails with
/// [`AnnuityError::Domain`](crate::error::AnnuityError::Domain).
///
/// # Examples
/// ```rust
/// # use rsannuity::prelude::*;
/// let n = periods().interest_rate(0.005_f64).payment(100.0).principal(3500.0).call()?;
/// assert!((n - 38.57).abs() < 0.01);
/// # AnnuityResult::Ok(())
/// ```
#[builder]
pub fn periods<T: AnnuityNum>(interest_rate: T, payment: T, principal: T) -> AnnuityResult<T> {
    let ratio = interest_rate
        .try_mul(principal, "periods")?
        .try_div(payment, "periods")?;
    let top = T::one().try_sub(ratio, "periods")?.try_ln("periods")?;
    let bottom = interest_rate.try_add(T::one(), "periods")?.try_ln("periods")?;
    (-top).try_div(bottom, "periods")
}
