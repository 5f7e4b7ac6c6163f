//! Life-annuity valuation: discounted expected survival-contingent payments.

use super::COHORT_FLOOR;
use crate::discount::present_value_factor;
use crate::mort_table::{LIMITING_AGE, MortalityTable};
use bon::builder;

/// Actuarial present value of a whole-life annuity-due.
///
/// Same cohort simulation as the insurance valuator, but the valued event is
/// survival: each year the surviving fraction of the cohort collects a
/// payment due at the start of the year (no mid-year offset), then the
/// cohort is decremented.
///
/// # Formula
/// ```text
/// äₓ = Σₖ (l_{x+k} / radix) · v(i, k)
/// ```
/// with the same `max_age` bound and [`COHORT_FLOOR`] early exit as
/// [`whole_life_value`](crate::valuation::benefits::whole_life_value).
///
/// The unit value is scaled by `payment` before returning. Inputs are not
/// validated; extreme values flow through the arithmetic.
///
/// # Examples
/// ```rust
/// # use lifeval::prelude::*;
/// # let table = MortalityTable::builder()
/// #     .entries(vec![MortalityEntry { age: 65, rate: 0.007523 }])
/// #     .build()?;
/// let value = life_annuity_value()
///     .mt(&table)
///     .x(65)
///     .payment(12_000.0)
///     .i(0.06)
///     .call();
/// assert!(value > 12_000.0);
/// # LifevalResult::Ok(())
/// ```
#[builder]
pub fn life_annuity_value(
    mt: &MortalityTable,
    x: i32,
    #[builder(default = 1.0)] payment: f64,
    i: f64,
    #[builder(default = LIMITING_AGE)] max_age: i32,
) -> f64 {
    let radix = f64::from(mt.radix);
    let mut value = 0.0;
    let mut lx = radix;

    for age in x..max_age {
        value += lx / radix * present_value_factor(i, (age - x) as f64);
        lx *= mt.survival(age);

        if lx < COHORT_FLOOR {
            break;
        }
    }

    value * payment
}

/// Actuarial present value of a temporary annuity-due over `n` years.
///
/// The whole-life annuity with its horizon bound to `min(x + n, max_age)`,
/// the form the pricing layer uses to value premium payments over a finite
/// paying period.
#[builder]
pub fn temporary_annuity_value(
    mt: &MortalityTable,
    x: i32,
    #[builder(default = 1.0)] payment: f64,
    i: f64,
    n: u32,
    #[builder(default = LIMITING_AGE)] max_age: i32,
) -> f64 {
    let bound = i32::min(x.saturating_add(n as i32), max_age);
    life_annuity_value()
        .mt(mt)
        .x(x)
        .payment(payment)
        .i(i)
        .max_age(bound)
        .call()
}
