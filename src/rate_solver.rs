//! # Interest Rate Solver
//!
//! The periodic rate of an annuity-immediate cannot be isolated from
//! `PMT = i · PV / (1 - (1 + i)⁻ⁿ)`, so it is approximated with Newton-Raphson.
//!
//! Each new guess is rounded to `max_decimals` places *before* it is compared
//! with the previous one. Iteration stops as soon as the rounded step is
//! strictly smaller than `precision`, or after `max_iterations` steps,
//! whichever comes first. Running out of iterations is not an error: the last
//! guess is returned and [`RateSolution::converged`] reports whether the
//! threshold was met.

#![allow(clippy::too_many_arguments)]

use crate::error::AnnuityResult;
use crate::numeric::AnnuityNum;
use crate::params::{DEFAULT_MAX_DECIMALS, DEFAULT_MAX_ITERATIONS, SolverConfig};
use bon::builder;
use log::{debug, trace};

/// Outcome of a bounded rate search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSolution<T> {
    /// Last rounded guess.
    pub rate: T,
    /// Newton-Raphson steps taken.
    pub iterations: u32,
    /// Size of the last rounded step; `None` when no step was taken.
    pub last_difference: Option<T>,
    /// Whether the last step was strictly smaller than the precision.
    pub converged: bool,
}

/// One Newton-Raphson step towards the periodic interest rate.
///
/// # Formula
/// ```text
/// top    = PMT - PMT · (g + 1)⁻ⁿ - PV · g
/// bottom = n · PMT · (g + 1)⁻ⁿ⁻¹ - PV
/// g'     = g - top / bottom
/// ```
/// `top` is `g · f(g)` for `f(i) = PV - PMT · (1 - (1 + i)⁻ⁿ) / i`, which avoids
/// dividing by the guess itself. A vanishing `bottom` is reported as
/// [`AnnuityError::DivisionByZero`](crate::error::AnnuityError::DivisionByZero).
///
/// # Examples
/// ```rust
/// # use rsannuity::prelude::*;
/// let next = improve_interest_rate()
///     .payment(291.0_f64)
///     .periods(48.0)
///     .principal(11200.0)
///     .guess(0.01)
///     .call()?;
/// assert!((next - 0.0094295242).abs() < 1e-8);
/// # AnnuityResult::Ok(())
/// ```
#[builder]
pub fn improve_interest_rate<T: AnnuityNum>(
    payment: T,
    periods: T,
    principal: T,
    guess: T,
) -> AnnuityResult<T> {
    newton_step(payment, periods, principal, guess)
}

/// Approximate the periodic interest rate of an annuity-immediate.
///
/// # Parameters
/// - `payment`: Level payment per period
/// - `periods`: Number of payment periods
/// - `principal`: Present value
/// - `initial_guess`: Starting rate (default 0.1)
/// - `precision`: Stop once a rounded step is smaller than this (default 0.0001)
/// - `max_decimals`: Places kept after every step (default 8)
/// - `max_iterations`: Step cap (default 10)
/// - `validate`: Reject configurations that are not portable across backends
///   first (default false; a negative precision simply never stops early)
///
/// # Examples
/// ```rust
/// # use rsannuity::prelude::*;
/// // $11,200 repaid with 48 monthly payments of $291
/// let rate = interest_rate().payment(291.0_f64).periods(48.0).principal(11200.0).call()?;
/// assert!((rate - 0.0094).abs() < 1e-4);
///
/// let rate = interest_rate()
///     .payment(dec!(291))
///     .periods(dec!(48))
///     .principal(dec!(11200))
///     .initial_guess(dec!(0.01))
///     .precision(Decimal::ZERO)
///     .max_decimals(10)
///     .max_iterations(4)
///     .call()?;
/// assert_eq!(rate, dec!(0.0094007411));
/// # AnnuityResult::Ok(())
/// ```
#[builder]
pub fn interest_rate<T: AnnuityNum>(
    payment: T,
    periods: T,
    principal: T,
    #[builder(default = T::DEFAULT_INITIAL_GUESS)] initial_guess: T,
    #[builder(default = T::DEFAULT_PRECISION)] precision: T,
    #[builder(default = DEFAULT_MAX_DECIMALS)] max_decimals: u32,
    #[builder(default = DEFAULT_MAX_ITERATIONS)] max_iterations: u32,
    #[builder(default = false)] validate: bool,
) -> AnnuityResult<T> {
    let solution = interest_rate_detailed()
        .payment(payment)
        .periods(periods)
        .principal(principal)
        .initial_guess(initial_guess)
        .precision(precision)
        .max_decimals(max_decimals)
        .max_iterations(max_iterations)
        .validate(validate)
        .call()?;
    Ok(solution.rate)
}

/// Same as [`interest_rate`] but also reports how the search ended.
///
/// # Examples
/// ```rust
/// # use rsannuity::prelude::*;
/// let solution = interest_rate_detailed()
///     .payment(291.0)
///     .periods(48.0)
///     .principal(11200.0)
///     .max_iterations(2)
///     .call()?;
/// assert_eq!(solution.iterations, 2);
/// assert!(!solution.converged);
/// # AnnuityResult::Ok(())
/// ```
#[builder]
pub fn interest_rate_detailed<T: AnnuityNum>(
    payment: T,
    periods: T,
    principal: T,
    #[builder(default = T::DEFAULT_INITIAL_GUESS)] initial_guess: T,
    #[builder(default = T::DEFAULT_PRECISION)] precision: T,
    #[builder(default = DEFAULT_MAX_DECIMALS)] max_decimals: u32,
    #[builder(default = DEFAULT_MAX_ITERATIONS)] max_iterations: u32,
    #[builder(default = false)] validate: bool,
) -> AnnuityResult<RateSolution<T>> {
    let config = SolverConfig::builder()
        .initial_guess(initial_guess)
        .precision(precision)
        .max_decimals(max_decimals)
        .max_iterations(max_iterations)
        .build();

    if validate {
        config.validate_all()?;
    }

    solve(payment, periods, principal, &config)
}

/// Run the bounded Newton-Raphson search under an explicit configuration.
///
/// The configuration is used as given; call [`SolverConfig::validate_all`]
/// first when it comes from outside.
pub fn solve<T: AnnuityNum>(
    payment: T,
    periods: T,
    principal: T,
    config: &SolverConfig<T>,
) -> AnnuityResult<RateSolution<T>> {
    let mut guess = config.initial_guess;
    let mut last_difference = None;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let new_guess =
            newton_step(payment, periods, principal, guess)?.round_half_away(config.max_decimals);
        let difference = guess.try_sub(new_guess, "interest_rate")?.abs();
        guess = new_guess;
        iterations += 1;
        last_difference = Some(difference);

        trace!("rate iteration {iterations}: guess {guess}, step {difference}");

        if difference < config.precision {
            converged = true;
            break;
        }
    }

    if converged {
        debug!("rate converged to {guess} after {iterations} iterations");
    } else {
        debug!(
            "rate search stopped at {guess} after {iterations} iterations without reaching precision {}",
            config.precision
        );
    }

    Ok(RateSolution {
        rate: guess,
        iterations,
        last_difference,
        converged,
    })
}

fn newton_step<T: AnnuityNum>(payment: T, periods: T, principal: T, guess: T) -> AnnuityResult<T> {
    const CONTEXT: &str = "improve_interest_rate";

    let base = guess.try_add(T::one(), CONTEXT)?;
    let vn = base.try_pow(-periods, CONTEXT)?;
    let top = payment
        .try_sub(payment.try_mul(vn, CONTEXT)?, CONTEXT)?
        .try_sub(principal.try_mul(guess, CONTEXT)?, CONTEXT)?;

    let vn_1 = base.try_pow((-periods).try_sub(T::one(), CONTEXT)?, CONTEXT)?;
    let bottom = periods
        .try_mul(payment, CONTEXT)?
        .try_mul(vn_1, CONTEXT)?
        .try_sub(principal, CONTEXT)?;

    guess.try_sub(top.try_div(bottom, CONTEXT)?, CONTEXT)
}
