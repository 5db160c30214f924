//! # RSAnnuity Basic Usage Example
//!
//! This example demonstrates the basic usage of the rsannuity crate
//! for loan calculations using the builder pattern API, over both the
//! binary float and the decimal backend.
//!
//! Run with `RUST_LOG=trace` to watch the rate solver iterate.

use rsannuity::prelude::*;

fn main() -> AnnuityResult<()> {
    env_logger::init();

    println!("RSAnnuity Basic Usage Example");
    println!("=============================");
    println!();

    // Closed forms in f64
    println!("=== Closed forms (f64) ===");
    let pmt = payment()
        .interest_rate(0.0065)
        .periods(360.0)
        .principal(225_000.0)
        .call()?;
    let pv = principal()
        .interest_rate(0.014083)
        .payment(60.0)
        .periods(36.0)
        .call()?;
    let n = periods()
        .interest_rate(0.005)
        .payment(100.0)
        .principal(3500.0)
        .call()?;

    println!("  Monthly payment on 225,000 over 360 months at 0.65%: {pmt:.6}");
    println!("  Principal repaid by 36 payments of 60 at 1.4083%:    {pv:.2}");
    println!("  Periods to repay 3,500 with 100/month at 0.5%:       {n:.2}");

    // Same figures with exact base-10 arithmetic, inputs parsed at the boundary
    println!("\n=== Closed forms (Decimal) ===");
    let rate: Decimal = parse_num("0.0065")?;
    let term: Decimal = parse_num("360")?;
    let amount: Decimal = parse_num("225000.00")?;
    let pmt_dec = payment()
        .interest_rate(rate)
        .periods(term)
        .principal(amount)
        .call()?;
    println!("  Monthly payment: {}", pmt_dec.round_dp(6));

    // Interest rate solver
    println!("\n=== Interest rate solver ===");
    let solution = interest_rate_detailed()
        .payment(dec!(291))
        .periods(dec!(48))
        .principal(dec!(11200))
        .call()?;
    println!(
        "  Default policy:  rate {} after {} iterations (converged: {})",
        solution.rate, solution.iterations, solution.converged
    );

    let fine = interest_rate()
        .payment(dec!(291))
        .periods(dec!(48))
        .principal(dec!(11200))
        .initial_guess(dec!(0.01))
        .precision(Decimal::ZERO)
        .max_decimals(10)
        .max_iterations(4)
        .call()?;
    println!("  10 places, 4 iterations: rate {fine}");

    // Rate conversion
    println!("\n=== Rate conversion ===");
    let eff = effective_interest_rate(0.1, 12.0)?;
    let nom = nominal_interest_rate(eff, 12.0)?;
    println!("  10% nominal compounded monthly -> {eff:.6} effective");
    println!("  and back -> {nom:.6} nominal");

    // Typed failures
    println!("\n=== Failures ===");
    match periods().interest_rate(0.05).payment(100.0).principal(3500.0).call() {
        Ok(n) => println!("  unexpected term {n}"),
        Err(e) => println!("  100/month never repays 3,500 at 5%: {e}"),
    }

    println!("\n✓ All calculations completed successfully!");

    Ok(())
}
