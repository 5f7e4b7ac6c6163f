//! # Lifeval Prelude
//!
//! Conveniently re-exports the most common types and functions for actuarial
//! valuation. Import this module to access all primary features with a single
//! `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use lifeval::prelude::*;
//! let table = mort_df! {
//!     "age" => [40u32, 41, 42],
//!     "qx" => [0.001139f64, 0.001222, 0.001318],
//! }?;
//! let value = whole_life_value()
//!     .mt(&table)
//!     .x(40)
//!     .benefit(100_000.0)
//!     .i(0.06)
//!     .call();
//! println!("Whole life: {value:.2}");
//! # LifevalResult::Ok(())
//! ```

// Package Result type for Lifeval functions
pub use crate::LifevalResult;

// Discounting primitive and interest rate conversions
pub use crate::discount::*;

// Certain annuities
pub use crate::annuities_certain::*;

// Life table statistics
pub use crate::life_table::*;

// Valuation functions
pub use crate::valuation::COHORT_FLOOR;
pub use crate::valuation::annuities::*;
pub use crate::valuation::benefits::*;
pub use crate::valuation::policy::*;

// Core mortality table types and constants
pub use crate::mort_table::{
    DEFAULT_UNMAPPED_RATE, LIMITING_AGE, MortalityEntry, MortalityTable,
};

// Table-from-literals macro
pub use crate::mort_df;

// Most commonly used Polars types for working with mortality tables
pub use polars::prelude::{DataFrame, LazyFrame, PolarsError, PolarsResult, Series};
