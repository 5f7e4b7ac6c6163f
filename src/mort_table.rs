//! # Mortality Table Store (MortalityTable)
//!
//! Load, query and configure age-indexed mortality tables.
//!
//! This module provides the [`MortalityTable`] store used by every downstream
//! computation in the crate:
//! - Construction from `{age, rate}` entries or from a polars `DataFrame`
//! - Point lookups with an injectable fallback rate for unmapped ages
//! - Configurable population radix for cohort projections
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
//! assert_eq!(table.rate(35), 0.000923);
//! // Unmapped ages fall back to the configured default rate
//! assert_eq!(table.rate(36), DEFAULT_UNMAPPED_RATE);
//! # LifevalResult::Ok(())
//! ```
//!
//! ## Configuration Options
//! - **entries**: the `{age, rate}` pairs; duplicate ages overwrite (last wins)
//! - **radix**: initial cohort size for projections (e.g., 100,000)
//! - **default_rate**: rate returned for ages absent from the table
//!
//! ## See Also
//! - [`crate::life_table`] for projected cohort statistics
//! - [`crate::valuation`] for insurance and annuity pricing

use crate::LifevalResult;
use bon::bon;
use garde::Validate;
use polars::prelude::*;
use std::collections::BTreeMap;

/// Fallback one-year mortality rate for ages absent from the table.
///
/// Used as the builder default for [`MortalityTable::default_rate`]; pass a
/// different value at construction time to override it per table.
pub const DEFAULT_UNMAPPED_RATE: f64 = 0.01;

/// Limiting age ω of every projection: cohort loops never run past this age.
pub const LIMITING_AGE: i32 = 120;

// ===============================================
// TABLE ENTRY
// ===============================================

/// A single `{age, rate}` observation: the one-year probability of death at
/// exact age `age`.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
#[garde(allow_unvalidated)]
pub struct MortalityEntry {
    /// Exact age in whole years.
    pub age: u32,

    /// One-year probability of death qₓ, must lie in `[0, 1]`.
    #[garde(range(min = 0.0, max = 1.0))]
    pub rate: f64,
}

// ===============================================
// TABLE STORE
// ===============================================

/// Age-ordered mortality table with a fallback policy for unmapped ages.
///
/// The table is immutable once loaded; reads take `&self` and a reload takes
/// `&mut self`, so the single-writer/many-readers discipline is enforced by
/// the borrow checker. Callers that reload under concurrency should swap a
/// freshly built table instead of mutating a shared one.
#[derive(Debug, Clone, Validate)]
#[garde(allow_unvalidated)]
pub struct MortalityTable {
    #[garde(skip)]
    rates: BTreeMap<u32, f64>,

    /// Initial cohort size (radix). Common values: 100,000 (standard), 1,000,000 (precise).
    #[garde(range(min = 1))]
    pub radix: u32,

    /// Rate returned by [`MortalityTable::rate`] for ages absent from the table.
    #[garde(range(min = 0.0, max = 1.0))]
    pub default_rate: f64,
}

#[bon]
impl MortalityTable {
    /// Build a table from `{age, rate}` entries.
    ///
    /// Duplicate ages overwrite (last wins). Every rate must lie in `[0, 1]`;
    /// an out-of-range rate rejects the whole batch.
    ///
    /// # Examples
    /// ```rust
    /// # use lifeval::prelude::*;
    /// let table = MortalityTable::builder()
    ///     .entries(vec![MortalityEntry { age: 40, rate: 0.001139 }])
    ///     .radix(100_000)
    ///     .default_rate(0.01)
    ///     .build()?;
    /// # LifevalResult::Ok(())
    /// ```
    #[builder]
    pub fn new(
        #[builder(default)] entries: Vec<MortalityEntry>,
        #[builder(default = 100_000)] radix: u32,
        #[builder(default = DEFAULT_UNMAPPED_RATE)] default_rate: f64,
    ) -> LifevalResult<Self> {
        let mut table = MortalityTable {
            rates: BTreeMap::new(),
            radix,
            default_rate,
        };

        // Validate the configuration fields before accepting any data
        table
            .validate()
            .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

        table.load(&entries)?;
        Ok(table)
    }

    /// Build a table from a polars `DataFrame` with `age` and `qx` columns.
    ///
    /// The `age` column must be castable to `u32` and `qx` to `f64`; rows with
    /// nulls are rejected. Validation is identical to [`MortalityTable::new`].
    ///
    /// # Examples
    /// ```rust
    /// # use lifeval::prelude::*;
    /// use polars::prelude::*;
    /// let df = df! {
    ///     "age" => [30u32, 31, 32],
    ///     "qx" => [0.000814f64, 0.000831, 0.000849],
    /// }?;
    /// let table = MortalityTable::from_df().df(df).call()?;
    /// assert_eq!(table.len(), 3);
    /// # LifevalResult::Ok(())
    /// ```
    #[builder]
    pub fn from_df(
        df: DataFrame,
        #[builder(default = 100_000)] radix: u32,
        #[builder(default = DEFAULT_UNMAPPED_RATE)] default_rate: f64,
    ) -> LifevalResult<Self> {
        let age_column = df.column("age")?.cast(&DataType::UInt32)?;
        let rate_column = df.column("qx")?.cast(&DataType::Float64)?;

        let ages = age_column.u32()?;
        let rates = rate_column.f64()?;

        let mut entries = Vec::with_capacity(df.height());
        for (age, rate) in ages.into_iter().zip(rates) {
            match (age, rate) {
                (Some(age), Some(rate)) => entries.push(MortalityEntry { age, rate }),
                _ => return Err("mortality table rows must not contain nulls".into()),
            }
        }

        MortalityTable::builder()
            .entries(entries)
            .radix(radix)
            .default_rate(default_rate)
            .build()
    }

    /// Replace the table contents with `entries` (clear-then-insert, not additive).
    ///
    /// The whole batch is validated before the table is touched, so a rejected
    /// batch leaves the previous contents intact.
    pub fn load(&mut self, entries: &[MortalityEntry]) -> LifevalResult<()> {
        for entry in entries {
            entry
                .validate()
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;
        }

        self.rates.clear();
        for entry in entries {
            self.rates.insert(entry.age, entry.rate);
        }
        Ok(())
    }

    /// One-year mortality rate qₓ at `age`.
    ///
    /// Returns the stored rate, or [`MortalityTable::default_rate`] when the
    /// age is unmapped (including negative ages). Never fails: the engine
    /// stays usable with partial tables during exploratory work.
    pub fn rate(&self, age: i32) -> f64 {
        u32::try_from(age)
            .ok()
            .and_then(|a| self.rates.get(&a).copied())
            .unwrap_or(self.default_rate)
    }

    /// One-year survival rate pₓ = 1 - qₓ at `age`.
    pub fn survival(&self, age: i32) -> f64 {
        1.0 - self.rate(age)
    }

    /// Lowest mapped age, or `None` for an empty table.
    pub fn min_age(&self) -> Option<u32> {
        self.rates.keys().next().copied()
    }

    /// Highest mapped age, or `None` for an empty table.
    pub fn max_age(&self) -> Option<u32> {
        self.rates.keys().next_back().copied()
    }

    /// Number of mapped ages.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table has no mapped ages.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Mapped ages in ascending order.
    pub fn ages(&self) -> impl Iterator<Item = u32> + '_ {
        self.rates.keys().copied()
    }
}
