//! Continuously monitored barrier option prices.
//!
//! Closed forms from Reiner and Rubinstein (1991) for the two cases where
//! the knock-in price reduces to a single reflected term. Knock-out prices
//! follow from in/out parity with [`black_scholes_price`].
//!
//! [`black_scholes_price`]: super::black_scholes_price

use super::distributions::norm_cdf;
use crate::path_dependent::BarrierDirection;

/// Broadie-Glasserman-Kou constant `-ζ(1/2)/√(2π)`.
pub const BROADIE_GLASSERMAN_BETA: f64 = 0.5826;

struct Reflection {
    h_s_2l: f64,
    h_s_2l_m2: f64,
    y: f64,
    vol_sqrt_t: f64,
    discount: f64,
}

fn reflection(spot: f64, strike: f64, barrier: f64, rate: f64, vol: f64, maturity: f64) -> Reflection {
    let vol_sq = vol * vol;
    let vol_sqrt_t = vol * maturity.sqrt();
    let lambda = (rate + 0.5 * vol_sq) / vol_sq;
    let ratio = barrier / spot;

    Reflection {
        h_s_2l: ratio.powf(2.0 * lambda),
        h_s_2l_m2: ratio.powf(2.0 * lambda - 2.0),
        y: (barrier * barrier / (spot * strike)).ln() / vol_sqrt_t + lambda * vol_sqrt_t,
        vol_sqrt_t,
        discount: (-rate * maturity).exp(),
    }
}

/// Down-and-in call, valid for `strike >= barrier` and `spot > barrier`.
///
/// # Examples
/// ```
/// use pricer_barrier::analytical::down_in_call;
///
/// let price = down_in_call(100.0, 100.0, 90.0, 0.05, 0.2, 1.0);
/// assert!((price - 1.7851).abs() < 1e-3);
/// ```
pub fn down_in_call(spot: f64, strike: f64, barrier: f64, rate: f64, vol: f64, maturity: f64) -> f64 {
    debug_assert!(strike >= barrier && spot > barrier);
    let r = reflection(spot, strike, barrier, rate, vol, maturity);

    let t1 = spot * r.h_s_2l * norm_cdf(r.y);
    let t2 = strike * r.discount * r.h_s_2l_m2 * norm_cdf(r.y - r.vol_sqrt_t);
    (t1 - t2).max(0.0)
}

/// Up-and-in put, valid for `strike <= barrier` and `spot < barrier`.
///
/// # Examples
/// ```
/// use pricer_barrier::analytical::up_in_put;
///
/// let price = up_in_put(100.0, 100.0, 110.0, 0.05, 0.2, 1.0);
/// assert!((price - 1.3753).abs() < 1e-3);
/// ```
pub fn up_in_put(spot: f64, strike: f64, barrier: f64, rate: f64, vol: f64, maturity: f64) -> f64 {
    debug_assert!(strike <= barrier && spot < barrier);
    let r = reflection(spot, strike, barrier, rate, vol, maturity);

    let t1 = strike * r.discount * r.h_s_2l_m2 * norm_cdf(-r.y + r.vol_sqrt_t);
    let t2 = spot * r.h_s_2l * norm_cdf(-r.y);
    (t1 - t2).max(0.0)
}

/// Shifts a barrier so the continuous formula approximates monitoring
/// every `dt`: `B · exp(±β σ √dt)`, away from the spot.
///
/// # Examples
/// ```
/// use pricer_barrier::analytical::discrete_barrier_shift;
/// use pricer_barrier::path_dependent::BarrierDirection;
///
/// let shifted = discrete_barrier_shift(110.0, 0.2, 1.0 / 252.0, BarrierDirection::Up);
/// assert!(shifted > 110.0);
/// ```
pub fn discrete_barrier_shift(barrier: f64, vol: f64, dt: f64, direction: BarrierDirection) -> f64 {
    let shift = BROADIE_GLASSERMAN_BETA * vol * dt.sqrt();
    match direction {
        BarrierDirection::Up => barrier * shift.exp(),
        BarrierDirection::Down => barrier * (-shift).exp(),
    }
}
