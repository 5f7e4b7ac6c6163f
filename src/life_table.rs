//! # Life-Table Builder
//!
//! Derive full projected cohort statistics (survivors `lx`, deaths `dx`,
//! life expectancy `ex`) from a [`MortalityTable`](crate::mort_table::MortalityTable)
//! over an age range.
//!
//! ## Quick Start
//! ```rust
//! # use lifeval::prelude::*;
//! let table = MortalityTable::builder()
//!     .entries(vec![
//!         MortalityEntry { age: 35, rate: 0.000923 },
//!         MortalityEntry { age: 40, rate: 0.001139 },
//!     ])
//!     .build()?;
//!
//! let rows = build_life_table().mt(&table).start_age(35).end_age(45).call();
//! assert_eq!(rows.len(), 11);
//! # LifevalResult::Ok(())
//! ```

use crate::mort_table::{LIMITING_AGE, MortalityTable};
use bon::builder;
use polars::prelude::*;

/// One row of a projected life table.
///
/// `lx` and `dx` are kept at full floating-point precision; rounding to whole
/// lives is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeTableRow {
    /// Exact age in whole years.
    pub age: i32,
    /// One-year probability of death at this age.
    pub qx: f64,
    /// One-year probability of survival, `1 - qx`.
    pub px: f64,
    /// Projected survivors at this age out of the radix cohort.
    pub lx: f64,
    /// Projected deaths between this age and the next, `lx · qx`.
    pub dx: f64,
    /// Life expectancy at this age (truncated survivorship-ratio series).
    pub ex: f64,
}

/// Build a life table over `[start_age, end_age]`, inclusive of both ends.
///
/// The cohort starts at the table radix and is decremented by the expected
/// deaths `dx` at each age. `ex` sums the survivorship-ratio series from the
/// current age to the limiting age 120, a truncated whole-year approximation
/// (the series opens with its ratio-1 leading term and carries no continuity
/// correction).
///
/// Invariants preserved: `lx` is non-increasing across rows, and `px` is the
/// exact floating-point complement of `qx`. Rates are propagated from the
/// store as-is; range validation happened at load time.
///
/// Returns an empty vector when `end_age < start_age`.
#[builder]
pub fn build_life_table(mt: &MortalityTable, start_age: i32, end_age: i32) -> Vec<LifeTableRow> {
    if end_age < start_age {
        return Vec::new();
    }

    let mut rows = Vec::with_capacity((end_age - start_age + 1) as usize);
    let mut lx = f64::from(mt.radix);

    for age in start_age..=end_age {
        let qx = mt.rate(age);
        let px = 1.0 - qx;
        let dx = lx * qx;
        let ex = expectation_series(mt, age);

        rows.push(LifeTableRow { age, qx, px, lx, dx, ex });

        lx -= dx;
    }

    rows
}

/// Life expectancy at age `x`.
///
/// # Formula
/// ```text
/// eₓ = Σₜ₌₀^{ω-x-1} ₜpₓ,  ω = 120
/// ```
///
/// # Examples
/// ```rust
/// # use lifeval::prelude::*;
/// # let table = MortalityTable::builder().build()?;
/// let ex = life_expectancy().mt(&table).x(65).call();
/// assert!(ex > 0.0 && ex <= 55.0);
/// # LifevalResult::Ok(())
/// ```
#[builder]
pub fn life_expectancy(mt: &MortalityTable, x: i32) -> f64 {
    expectation_series(mt, x)
}

/// Probability of surviving `t` whole years from age `x`.
///
/// # Formula
/// ```text
/// ₜpₓ = ∏ₖ₌₀^{t-1} (1 - qₓ₊ₖ)
/// ```
#[builder]
pub fn survival_probability(mt: &MortalityTable, x: i32, #[builder(default = 1)] t: u32) -> f64 {
    let mut prob = 1.0;
    for k in 0..t as i32 {
        prob *= mt.survival(x + k);
    }
    prob
}

/// Export life-table rows as a polars `DataFrame` with one column per field.
pub fn life_table_df(rows: &[LifeTableRow]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Series::new("age".into(), rows.iter().map(|r| r.age).collect::<Vec<_>>()).into_column(),
        Series::new("qx".into(), rows.iter().map(|r| r.qx).collect::<Vec<_>>()).into_column(),
        Series::new("px".into(), rows.iter().map(|r| r.px).collect::<Vec<_>>()).into_column(),
        Series::new("lx".into(), rows.iter().map(|r| r.lx).collect::<Vec<_>>()).into_column(),
        Series::new("dx".into(), rows.iter().map(|r| r.dx).collect::<Vec<_>>()).into_column(),
        Series::new("ex".into(), rows.iter().map(|r| r.ex).collect::<Vec<_>>()).into_column(),
    ])
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

/// Truncated survivorship-ratio series from `x` to the limiting age.
fn expectation_series(mt: &MortalityTable, x: i32) -> f64 {
    let mut ex = 0.0;
    let mut surviving = 1.0;
    for age in x..LIMITING_AGE {
        ex += surviving;
        surviving *= mt.survival(age);
    }
    ex
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::mort_table::MortalityEntry;
    use approx::assert_abs_diff_eq;

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
    fn test_row_count_inclusive() {
        let table = test_table();
        let rows = build_life_table().mt(&table).start_age(35).end_age(45).call();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].age, 35);
        assert_eq!(rows[10].age, 45);
    }

    #[test]
    fn test_lx_non_increasing_from_radix() {
        let table = test_table();
        let rows = build_life_table().mt(&table).start_age(35).end_age(45).call();

        assert_abs_diff_eq!(rows[0].lx, 100_000.0, epsilon = 1e-9);
        for pair in rows.windows(2) {
            assert!(pair[1].lx <= pair[0].lx);
        }
    }

    #[test]
    fn test_rate_bounds_and_complement() {
        let table = test_table();
        let rows = build_life_table().mt(&table).start_age(35).end_age(45).call();

        for row in &rows {
            assert!((0.0..=1.0).contains(&row.qx));
            assert_abs_diff_eq!(row.px, 1.0 - row.qx, epsilon = 1e-15);
            assert_abs_diff_eq!(row.dx, row.lx * row.qx, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mapped_rates_flow_through() {
        let table = test_table();
        let rows = build_life_table().mt(&table).start_age(35).end_age(40).call();
        assert_eq!(rows[0].qx, 0.000923);
        assert_eq!(rows[5].qx, 0.001139);
        // Gap ages use the fallback rate
        assert_eq!(rows[1].qx, table.default_rate);
    }

    #[test]
    fn test_expectancy_decreases_with_age() {
        let table = test_table();
        let e35 = life_expectancy().mt(&table).x(35).call();
        let e50 = life_expectancy().mt(&table).x(50).call();
        let e65 = life_expectancy().mt(&table).x(65).call();

        assert!(e35 > e50);
        assert!(e50 > e65);
        // Bounded by the remaining whole years to the limiting age
        assert!(e35 <= (LIMITING_AGE - 35) as f64);
    }

    #[test]
    fn test_expectancy_at_limiting_age_is_zero() {
        let table = test_table();
        assert_eq!(life_expectancy().mt(&table).x(LIMITING_AGE).call(), 0.0);
        assert_eq!(life_expectancy().mt(&table).x(LIMITING_AGE + 5).call(), 0.0);
    }

    #[test]
    fn test_survival_probability_products() {
        let table = test_table();
        let one_year = survival_probability().mt(&table).x(35).call();
        assert_abs_diff_eq!(one_year, 1.0 - 0.000923, epsilon = 1e-12);

        let five_years = survival_probability().mt(&table).x(35).t(5).call();
        let expected: f64 = (0..5).map(|k| table.survival(35 + k)).product();
        assert_abs_diff_eq!(five_years, expected, epsilon = 1e-12);
        assert!(five_years < one_year);
    }

    #[test]
    fn test_empty_range() {
        let table = test_table();
        let rows = build_life_table().mt(&table).start_age(45).end_age(35).call();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_dataframe_export() {
        let table = test_table();
        let rows = build_life_table().mt(&table).start_age(35).end_age(45).call();
        let df = life_table_df(&rows).unwrap();

        assert_eq!(df.height(), 11);
        assert_eq!(
            df.get_column_names(),
            vec!["age", "qx", "px", "lx", "dx", "ex"]
        );
    }
}
