//! # Discounting Primitive
//!
//! Present-value factors and interest-rate conversions.
//!
//! The one numerically sensitive operation in the crate is compounding a
//! discount factor over multi-decade horizons. [`present_value_factor`]
//! therefore works in 28-digit decimal arithmetic internally and narrows to
//! `f64` at the boundary; everything else in the engine stays in native
//! floating point. This module is that precision boundary.

use rust_decimal::MathematicalOps;
use rust_decimal::prelude::*;

/// Present-value (discount) factor v(i, t) = (1 + i)⁻ᵗ.
///
/// # Formula
/// ```text
/// v(i, t) = (1 + i)⁻ᵗ
/// ```
///
/// Edge cases, fixed by contract:
/// - `time == 0` → `1` regardless of `rate`
/// - `rate == 0` → `1` regardless of `time`
///
/// The power is evaluated in decimal arithmetic (28+ significant digits) to
/// suppress compounding drift over long projection horizons, then narrowed to
/// `f64`. Negative rates (deflationary stress) and negative or fractional
/// times are accepted. Correctness is only promised for `rate > -1`; outside
/// that domain the computation falls back to native floating point and may
/// return infinite or NaN values, but it never panics.
///
/// # Examples
/// ```rust
/// # use lifeval::prelude::*;
/// let v = present_value_factor(0.06, 5.0);
/// assert!((v - 0.74725817).abs() < 1e-8);
/// assert_eq!(present_value_factor(0.06, 0.0), 1.0);
/// assert_eq!(present_value_factor(0.0, 30.0), 1.0);
/// ```
pub fn present_value_factor(rate: f64, time: f64) -> f64 {
    if time == 0.0 || rate == 0.0 {
        return 1.0;
    }

    let base = 1.0 + rate;
    if base <= 0.0 || !base.is_finite() {
        // Outside the documented domain (rate <= -1): unbounded results allowed
        return base.powf(-time);
    }

    match (Decimal::from_f64(base), Decimal::from_f64(-time)) {
        (Some(b), Some(exp)) => b
            .checked_powd(exp)
            .and_then(|v| v.to_f64())
            .unwrap_or_else(|| base.powf(-time)),
        _ => base.powf(-time),
    }
}

/// Convert effective annual interest rate to the equivalent periodic rate.
///
/// # Formula
/// ```text
/// i⁽ᵖ⁾ = (1 + i)¹⁄ᵐ - 1
/// ```
pub fn eff_i_to_periodic(eff_i: f64, m: u32) -> f64 {
    (1.0 + eff_i).powf(1.0 / m as f64) - 1.0
}

/// Convert effective interest rate to nominal interest rate (m-payable).
///
/// # Formula
/// ```text
/// i⁽ᵐ⁾ = m[(1 + i)¹⁄ᵐ - 1]
/// ```
pub fn eff_i_to_nom_i(eff_i: f64, m: u32) -> f64 {
    let m_f64 = m as f64;
    m_f64 * ((1.0 + eff_i).powf(1.0 / m_f64) - 1.0)
}

/// Convert effective interest rate to effective discount rate.
///
/// # Formula
/// ```text
/// d = i / (1 + i)
/// ```
pub fn eff_i_to_eff_d(eff_i: f64) -> f64 {
    eff_i / (1.0 + eff_i)
}

/// Convert effective interest rate to nominal discount rate (m-payable).
///
/// # Formula
/// ```text
/// d⁽ᵐ⁾ = m[1 - (1 - d)¹⁄ᵐ], where d = i/(1+i)
/// ```
pub fn eff_i_to_nom_d(eff_i: f64, m: u32) -> f64 {
    let m_f64 = m as f64;
    let eff_d = eff_i_to_eff_d(eff_i);
    m_f64 * (1.0 - (1.0 - eff_d).powf(1.0 / m_f64))
}
