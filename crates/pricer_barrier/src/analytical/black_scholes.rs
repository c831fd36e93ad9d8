//! Black-Scholes European option price (no dividends).

use super::distributions::norm_cdf;
use crate::path_dependent::OptionKind;

/// Black-Scholes price of a European call or put.
///
/// Degenerate inputs (`vol <= 0` or `maturity <= 0`) return the discounted
/// intrinsic value of the forward.
///
/// # Examples
/// ```
/// use pricer_barrier::analytical::black_scholes_price;
/// use pricer_barrier::path_dependent::OptionKind;
///
/// let call = black_scholes_price(100.0, 100.0, 0.05, 0.2, 1.0, OptionKind::Call);
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_price(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    maturity: f64,
    kind: OptionKind,
) -> f64 {
    let discount = (-rate * maturity).exp();

    if vol <= 0.0 || maturity <= 0.0 {
        let forward = spot * (rate * maturity.max(0.0)).exp();
        let intrinsic = match kind {
            OptionKind::Call => (forward - strike).max(0.0),
            OptionKind::Put => (strike - forward).max(0.0),
        };
        return discount * intrinsic;
    }

    let vol_sqrt_t = vol * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * maturity) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    match kind {
        OptionKind::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        OptionKind::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}
