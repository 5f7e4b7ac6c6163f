//! Policy pricing and reserving: level premiums via the equivalence
//! principle, prospective technical reserves, and the bundled valuation
//! consumed by reporting layers.

use super::annuities::life_annuity_value;
use super::benefits::whole_life_value;
use crate::mort_table::{LIMITING_AGE, MortalityTable};
use bon::builder;

/// Result of a full policy valuation.
///
/// Produced once per call and handed to the caller whole; the engine keeps
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyValuation {
    /// Death benefit the premium was computed for.
    pub face_amount: f64,
    /// Level annual premium over the payment period.
    pub annual_premium: f64,
    /// Actuarial present value of the death benefit at issue.
    pub present_value_of_benefits: f64,
    /// Prospective reserve one year after issue.
    pub technical_reserve: f64,
}

/// Level annual premium for a whole-life policy, by the equivalence principle.
///
/// The expected present value of premiums in equals the expected present
/// value of benefits out:
///
/// # Formula
/// ```text
/// P = (Aₓ · F) / äₓ:n̄
/// ```
/// where `äₓ:n̄` is the temporary annuity-due over the premium-paying period,
/// its horizon bounded to `min(x + n, max_age)`.
///
/// No input validation: a zero payment period divides by zero and returns an
/// infinity, which the caller is expected to have screened out.
///
/// # Examples
/// ```rust
/// # use lifeval::prelude::*;
/// # let table = MortalityTable::builder()
/// #     .entries(vec![MortalityEntry { age: 35, rate: 0.000923 }])
/// #     .build()?;
/// let premium = level_premium()
///     .mt(&table)
///     .x(35)
///     .face_amount(100_000.0)
///     .i(0.06)
///     .payment_years(20)
///     .call();
/// assert!(premium > 0.0);
/// # LifevalResult::Ok(())
/// ```
#[builder]
pub fn level_premium(
    mt: &MortalityTable,
    x: i32,
    face_amount: f64,
    i: f64,
    payment_years: u32,
    #[builder(default = LIMITING_AGE)] max_age: i32,
) -> f64 {
    let benefits = whole_life_value().mt(mt).x(x).i(i).max_age(max_age).call();

    let bound = i32::min(x.saturating_add(payment_years as i32), max_age);
    let premium_annuity = life_annuity_value().mt(mt).x(x).i(i).max_age(bound).call();

    benefits * face_amount / premium_annuity
}

/// Prospective technical reserve at `current_age` for a policy issued at
/// `issue_age`.
///
/// # Formula
/// ```text
/// V = A_current · F - P · ä_current:remaining
/// ```
/// Once the premium period has elapsed (`current_age ≥ issue_age + n`) there
/// is no future premium income to offset future claims and the reserve is the
/// full whole-life value at `current_age`.
///
/// The sign is not clamped: a negative reserve (premium income exceeding the
/// actuarial need) is a meaningful result, not an error.
#[builder]
pub fn technical_reserve(
    mt: &MortalityTable,
    current_age: i32,
    issue_age: i32,
    face_amount: f64,
    annual_premium: f64,
    i: f64,
    payment_years: u32,
    #[builder(default = LIMITING_AGE)] max_age: i32,
) -> f64 {
    let future_benefits = whole_life_value()
        .mt(mt)
        .x(current_age)
        .benefit(face_amount)
        .i(i)
        .max_age(max_age)
        .call();

    let paid_up_age = issue_age.saturating_add(payment_years as i32);
    if current_age >= paid_up_age {
        return future_benefits;
    }

    let bound = i32::min(paid_up_age, max_age);
    let future_premiums = life_annuity_value()
        .mt(mt)
        .x(current_age)
        .payment(annual_premium)
        .i(i)
        .max_age(bound)
        .call();

    future_benefits - future_premiums
}

/// Price a policy end to end: level premium, present value of benefits at
/// issue, and the technical reserve one year after issue.
///
/// Performs no validation beyond what the underlying valuators tolerate;
/// screening implausible inputs is a presentation-layer concern.
#[builder]
pub fn full_policy_valuation(
    mt: &MortalityTable,
    x: i32,
    face_amount: f64,
    i: f64,
    payment_years: u32,
    #[builder(default = LIMITING_AGE)] max_age: i32,
) -> PolicyValuation {
    let annual_premium = level_premium()
        .mt(mt)
        .x(x)
        .face_amount(face_amount)
        .i(i)
        .payment_years(payment_years)
        .max_age(max_age)
        .call();

    let present_value_of_benefits = whole_life_value()
        .mt(mt)
        .x(x)
        .benefit(face_amount)
        .i(i)
        .max_age(max_age)
        .call();

    let technical_reserve = technical_reserve()
        .mt(mt)
        .current_age(x + 1)
        .issue_age(x)
        .face_amount(face_amount)
        .annual_premium(annual_premium)
        .i(i)
        .payment_years(payment_years)
        .max_age(max_age)
        .call();

    PolicyValuation {
        face_amount,
        annual_premium,
        present_value_of_benefits,
        technical_reserve,
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::mort_table::MortalityEntry;
    use crate::valuation::annuities::temporary_annuity_value;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn test_table() -> MortalityTable {
        MortalityTable::builder()
            .entries(vec![
                MortalityEntry { age: 30, rate: 0.000814 },
                MortalityEntry { age: 35, rate: 0.000923 },
                MortalityEntry { age: 40, rate: 0.001139 },
                MortalityEntry { age: 45, rate: 0.001530 },
                MortalityEntry { age: 50, rate: 0.002187 },
                MortalityEntry { age: 60, rate: 0.004892 },
                MortalityEntry { age: 70, rate: 0.011732 },
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn test_premium_increases_with_issue_age() {
        let table = test_table();
        let at = |x: i32| {
            level_premium()
                .mt(&table)
                .x(x)
                .face_amount(100_000.0)
                .i(0.06)
                .payment_years(20)
                .call()
        };

        let p30 = at(30);
        let p40 = at(40);
        let p50 = at(50);
        assert!(p30 < p40);
        assert!(p40 < p50);
    }

    #[test]
    fn test_actuarial_equivalence() {
        // At the computed premium, PV(premiums) matches PV(benefits)
        let table = test_table();
        let premium = level_premium()
            .mt(&table)
            .x(40)
            .face_amount(100_000.0)
            .i(0.06)
            .payment_years(15)
            .call();

        let benefits = whole_life_value()
            .mt(&table)
            .x(40)
            .benefit(100_000.0)
            .i(0.06)
            .call();
        let premiums = temporary_annuity_value()
            .mt(&table)
            .x(40)
            .payment(premium)
            .i(0.06)
            .n(15)
            .call();

        assert_relative_eq!(premiums, benefits, max_relative = 0.05);
    }

    #[test]
    fn test_reserve_grows_with_duration() {
        let table = test_table();
        let premium = level_premium()
            .mt(&table)
            .x(35)
            .face_amount(100_000.0)
            .i(0.06)
            .payment_years(20)
            .call();

        let reserve_at = |age: i32| {
            technical_reserve()
                .mt(&table)
                .current_age(age)
                .issue_age(35)
                .face_amount(100_000.0)
                .annual_premium(premium)
                .i(0.06)
                .payment_years(20)
                .call()
        };

        let v40 = reserve_at(40);
        let v45 = reserve_at(45);
        let v50 = reserve_at(50);
        assert!(v40 <= v45);
        assert!(v45 <= v50);
    }

    #[test]
    fn test_fully_paid_reserve_is_whole_life_value() {
        let table = test_table();
        let reserve = technical_reserve()
            .mt(&table)
            .current_age(60)
            .issue_age(35)
            .face_amount(100_000.0)
            .annual_premium(1_500.0)
            .i(0.06)
            .payment_years(20)
            .call();

        let benefits = whole_life_value()
            .mt(&table)
            .x(60)
            .benefit(100_000.0)
            .i(0.06)
            .call();
        assert_abs_diff_eq!(reserve, benefits, epsilon = 1e-9);
    }

    #[test]
    fn test_overpriced_premium_gives_negative_reserve() {
        // Premium far above actuarial need: the prospective reserve goes
        // negative, which is a valid output
        let table = test_table();
        let reserve = technical_reserve()
            .mt(&table)
            .current_age(36)
            .issue_age(35)
            .face_amount(100_000.0)
            .annual_premium(50_000.0)
            .i(0.06)
            .payment_years(20)
            .call();
        assert!(reserve < 0.0);
    }

    #[test]
    fn test_full_valuation_consistency() {
        let table = test_table();
        let valuation = full_policy_valuation()
            .mt(&table)
            .x(35)
            .face_amount(100_000.0)
            .i(0.06)
            .payment_years(20)
            .call();

        assert_eq!(valuation.face_amount, 100_000.0);

        let premium = level_premium()
            .mt(&table)
            .x(35)
            .face_amount(100_000.0)
            .i(0.06)
            .payment_years(20)
            .call();
        assert_abs_diff_eq!(valuation.annual_premium, premium, epsilon = 1e-9);

        let benefits = whole_life_value()
            .mt(&table)
            .x(35)
            .benefit(100_000.0)
            .i(0.06)
            .call();
        assert_abs_diff_eq!(valuation.present_value_of_benefits, benefits, epsilon = 1e-9);

        let reserve = technical_reserve()
            .mt(&table)
            .current_age(36)
            .issue_age(35)
            .face_amount(100_000.0)
            .annual_premium(premium)
            .i(0.06)
            .payment_years(20)
            .call();
        assert_abs_diff_eq!(valuation.technical_reserve, reserve, epsilon = 1e-9);
    }

    #[test]
    fn test_extreme_inputs_do_not_panic() {
        let table = test_table();

        let negative_age = level_premium()
            .mt(&table)
            .x(-5)
            .face_amount(100_000.0)
            .i(0.06)
            .payment_years(10)
            .call();
        assert!(negative_age.is_finite());

        let negative_capital = level_premium()
            .mt(&table)
            .x(40)
            .face_amount(-100_000.0)
            .i(0.06)
            .payment_years(10)
            .call();
        assert!(negative_capital < 0.0);

        let deflation = full_policy_valuation()
            .mt(&table)
            .x(40)
            .face_amount(100_000.0)
            .i(-0.01)
            .payment_years(10)
            .call();
        assert!(deflation.annual_premium.is_finite());
    }
}
