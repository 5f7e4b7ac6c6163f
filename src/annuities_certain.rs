//! # Annuities-Certain
//!
//! Compound-interest annuities with no mortality contingency: fixed payment
//! streams valued purely by discounting. These are the financial-math
//! counterparts of the life annuities in [`crate::valuation::annuities`].

use crate::discount::{eff_i_to_nom_d, eff_i_to_nom_i};
use bon::builder;

/// Annuity-certain due (in advance).
///
/// Present value of $1 per year for `n` years, first payment at time 0.
///
/// # Formula
/// ```text
/// än = (1 - vⁿ) / d
/// ```
/// where `v = 1/(1+i)` and `d = i/(1+i)`.
///
/// Returns `n` when `i == 0` (the zero-interest limit) and `0` when `n == 0`.
///
/// # Examples
/// ```rust
/// # use lifeval::prelude::*;
/// let due = aan().i(0.03).n(10).call();
/// println!("Annuity-certain due: {due:.6}");
/// ```
#[builder]
pub fn aan(i: f64, n: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if i == 0.0 {
        return n as f64;
    }

    let v = 1.0 / (1.0 + i);
    let nom_d = eff_i_to_nom_d(i, 1);
    (1.0 - v.powf(n as f64)) / nom_d
}

/// Annuity-certain immediate (in arrears).
///
/// Present value of $1 per year for `n` years, payments at the end of each
/// year.
///
/// # Formula
/// ```text
/// an = (1 - vⁿ) / i
/// ```
///
/// # Examples
/// ```rust
/// # use lifeval::prelude::*;
/// let immediate = an().i(0.03).n(10).call();
/// println!("Annuity-certain immediate: {immediate:.6}");
/// ```
#[builder]
pub fn an(i: f64, n: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if i == 0.0 {
        return n as f64;
    }

    let nom_i = eff_i_to_nom_i(i, 1);
    let nom_d = eff_i_to_nom_d(i, 1);
    aan().i(i).n(n).call() * nom_d / nom_i
}

/// Accumulated value of an annuity-certain immediate.
///
/// Future value at time `n` of $1 per year paid at the end of each year.
///
/// # Formula
/// ```text
/// sn = ((1+i)ⁿ - 1) / i
/// ```
#[builder]
pub fn sn(i: f64, n: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if i == 0.0 {
        return n as f64;
    }

    ((1.0 + i).powf(n as f64) - 1.0) / i
}
