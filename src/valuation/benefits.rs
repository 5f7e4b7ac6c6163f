//! Whole-life insurance valuation: discounted expected death claims.

use super::COHORT_FLOOR;
use crate::discount::present_value_factor;
use crate::mort_table::{LIMITING_AGE, MortalityTable};
use bon::builder;

/// Actuarial present value of a whole-life death benefit.
///
/// Simulates a radix cohort from issue age `x` upward: at each age the
/// expected claims `dx = lx · qx` are assumed paid at mid policy year and
/// discounted accordingly, then the cohort is decremented by the deaths.
///
/// # Formula
/// ```text
/// Aₓ = Σₖ (d_{x+k} / radix) · v(i, k + ½)
/// ```
/// where the sum runs from `x` to `max_age` (exclusive) and stops early once
/// `lx` falls below [`COHORT_FLOOR`]. Claims are timed at the middle of the
/// policy year, the standard approximation for a discrete model.
///
/// The unit value is scaled by `benefit` before returning. Negative ages,
/// benefit amounts and interest rates are accepted and flow through the
/// arithmetic unchecked; validating them is the caller's job.
///
/// # Examples
/// ```rust
/// # use lifeval::prelude::*;
/// # let table = MortalityTable::builder()
/// #     .entries(vec![MortalityEntry { age: 40, rate: 0.001139 }])
/// #     .build()?;
/// let value = whole_life_value()
///     .mt(&table)
///     .x(40)
///     .benefit(100_000.0)
///     .i(0.06)
///     .call();
/// assert!(value > 0.0 && value < 100_000.0);
/// # LifevalResult::Ok(())
/// ```
#[builder]
pub fn whole_life_value(
    mt: &MortalityTable,
    x: i32,
    #[builder(default = 1.0)] benefit: f64,
    i: f64,
    #[builder(default = LIMITING_AGE)] max_age: i32,
) -> f64 {
    let radix = f64::from(mt.radix);
    let mut value = 0.0;
    let mut lx = radix;

    for age in x..max_age {
        let dx = lx * mt.rate(age);
        // Mid-year claim timing
        let t = (age - x) as f64 + 0.5;
        value += dx / radix * present_value_factor(i, t);
        lx -= dx;

        if lx < COHORT_FLOOR {
            break;
        }
    }

    value * benefit
}
