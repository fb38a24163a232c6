//! Glosten–Milgrom belief and quote arithmetic.
//!
//! `p` is the market maker's probability that the fundamental value is
//! high. `alpha` is the fraction of order flow that is informed; the
//! remaining flow buys or sells with probability one half each way.
//! Quotes are conditional expectations of the value given the next
//! trade's direction, which is what makes the spread carry the adverse
//! selection cost.

/// Ask quote: expected value conditional on the next trade being a buy.
pub fn ask_quote(p: f64, alpha: f64, v_high: f64, v_low: f64) -> f64 {
    let informed_buy = alpha + 0.5 * (1.0 - alpha);
    let noise_buy = 0.5 * (1.0 - alpha);
    let numerator = informed_buy * p * v_high + noise_buy * (1.0 - p) * v_low;
    let denominator = informed_buy * p + noise_buy * (1.0 - p);
    if denominator <= 0.0 {
        return v_high;
    }
    numerator / denominator
}

/// Bid quote: expected value conditional on the next trade being a sell.
pub fn bid_quote(p: f64, alpha: f64, v_high: f64, v_low: f64) -> f64 {
    let noise_sell = 0.5 * (1.0 - alpha);
    let informed_sell = alpha + 0.5 * (1.0 - alpha);
    let numerator = noise_sell * p * v_high + informed_sell * (1.0 - p) * v_low;
    let denominator = noise_sell * p + informed_sell * (1.0 - p);
    if denominator <= 0.0 {
        return v_low;
    }
    numerator / denominator
}

/// Bayesian posterior after observing a buy or a sell.
pub fn update_after_trade(was_buy: bool, p: f64, alpha: f64) -> f64 {
    let informed = alpha + 0.5 * (1.0 - alpha);
    let noise = 0.5 * (1.0 - alpha);
    let (numerator, denominator) = if was_buy {
        let n = informed * p;
        (n, n + noise * (1.0 - p))
    } else {
        let n = noise * p;
        (n, n + informed * (1.0 - p))
    };
    if denominator == 0.0 {
        return p;
    }
    numerator / denominator
}

/// Drift the belief toward its long-run mean over one step.
pub fn mean_revert(p: f64, long_run_mean: f64, rate: f64, dt: f64) -> f64 {
    p + rate * (long_run_mean - p) * dt
}

/// Clamp the belief away from the degenerate endpoints.
pub fn clamp(p: f64, floor: f64, ceiling: f64) -> f64 {
    p.clamp(floor, ceiling)
}
