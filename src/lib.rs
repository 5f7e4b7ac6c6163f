//! # Lifeval
//!
//! A mortality-table-driven actuarial valuation engine: whole-life insurance,
//! life annuities, level premiums and technical reserves, plus full
//! life-table statistics derived from raw age-indexed mortality rates.
//!
//! ## Features
//! - **Lenient lookups**: unmapped ages fall back to an injectable default
//!   rate, so partial tables stay usable during exploratory work
//! - **Stable discounting**: present-value factors computed in 28-digit
//!   decimal arithmetic to suppress compounding drift over long horizons
//! - **Permissive inputs**: negative ages, amounts and interest rates produce
//!   numeric results rather than errors; input screening is the caller's job
//! - **Flexible data**: load from `{age, rate}` entries, a polars DataFrame,
//!   or the [`mort_df!`] literal macro
//! - **Builder Pattern**: parameterized computations use builders with
//!   documented defaults (radix 100,000, limiting age 120)
//!
//! ## Quick Start
//!
//! ```rust
//! use lifeval::prelude::*;
//!
//! let table = MortalityTable::builder()
//!     .entries(vec![
//!         MortalityEntry { age: 35, rate: 0.000923 },
//!         MortalityEntry { age: 40, rate: 0.001139 },
//!         MortalityEntry { age: 45, rate: 0.001530 },
//!     ])
//!     .build()?;
//!
//! // Actuarial present value of a 100,000 death benefit at 6%
//! let ax = whole_life_value()
//!     .mt(&table)
//!     .x(35)
//!     .benefit(100_000.0)
//!     .i(0.06)
//!     .call();
//!
//! // Level annual premium over a 20-year paying period
//! let premium = level_premium()
//!     .mt(&table)
//!     .x(35)
//!     .face_amount(100_000.0)
//!     .i(0.06)
//!     .payment_years(20)
//!     .call();
//!
//! println!("Ax: {ax:.2}");
//! println!("Premium: {premium:.2}");
//! # LifevalResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Life Insurance**: [`whole_life_value`](valuation::benefits::whole_life_value)
//! - **Life Annuities**: [`life_annuity_value`](valuation::annuities::life_annuity_value),
//!   [`temporary_annuity_value`](valuation::annuities::temporary_annuity_value)
//! - **Pricing & Reserving**: [`level_premium`](valuation::policy::level_premium),
//!   [`technical_reserve`](valuation::policy::technical_reserve),
//!   [`full_policy_valuation`](valuation::policy::full_policy_valuation)
//! - **Life Table**: [`build_life_table`](life_table::build_life_table),
//!   [`life_expectancy`](life_table::life_expectancy),
//!   [`survival_probability`](life_table::survival_probability)
//! - **Discounting**: [`present_value_factor`](discount::present_value_factor)
//!   and interest-rate conversions
//! - **Annuities Certain**: [`an`](annuities_certain::an),
//!   [`aan`](annuities_certain::aan), [`sn`](annuities_certain::sn)
//!
//! ## Notes
//! - Interest rates are effective annual rates in decimal form (0.06 for 6%)
//! - Every computation is a pure function of its inputs and the immutable
//!   table; reads may run concurrently, reloads require exclusive access

pub type LifevalResult<T> = Result<T, Box<dyn std::error::Error>>;
pub mod annuities_certain;
pub mod discount;
pub mod life_table;
pub mod macros;
pub mod mort_table;
pub mod prelude;
pub mod valuation;
