//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Full parameter set for one simulated session.
///
/// Probabilities are plain `f64`: the belief is a probability, not
/// money, so it never touches the engine's decimal types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Session length in simulated time units.
    pub horizon: f64,
    /// Step size; one potential arrival per step.
    pub dt: f64,
    /// Poisson arrival intensity.
    pub arrival_rate: f64,
    /// Probability an arriving trader is informed.
    pub p_informed: f64,
    /// Probability a noise trader buys rather than sells.
    pub p_buy_noise: f64,
    /// Fundamental value in the high state.
    pub v_high: f64,
    /// Fundamental value in the low state.
    pub v_low: f64,
    /// Transition rate from the high to the low state.
    pub high_to_low_rate: f64,
    /// Transition rate from the low to the high state.
    pub low_to_high_rate: f64,
    /// Signal accuracy of the informed trader, as seen by the maker.
    pub alpha: f64,
    /// Mean of the noise trader's exponential quantity draw.
    pub mean_quantity: f64,
    /// Cap on the noise trader's quantity.
    pub max_quantity: f64,
    /// Probability a noise trader places a limit rather than a market order.
    pub p_limit_order: f64,
    /// Proportional fee estimate used in the informed trader's
    /// profitability check and in the per-step fee column.
    pub fee_rate: f64,
    /// Whether the informed trader uses aggressive limit orders
    /// instead of market orders.
    pub informed_limit_orders: bool,
    /// Distance inside the true value at which the informed trader
    /// prices its limit orders.
    pub informed_aggression: f64,
    /// Long-run mean the belief reverts toward between trades.
    pub long_run_mean: f64,
    /// Mean-reversion rate of the belief.
    pub mean_reversion_rate: f64,
    /// Lower clamp on the belief.
    pub belief_floor: f64,
    /// Upper clamp on the belief.
    pub belief_ceiling: f64,
    /// Size of each market-maker quote.
    pub quote_size: f64,
    /// RNG seed; the same seed reproduces the run exactly.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon: 100.0,
            dt: 0.01,
            arrival_rate: 100.0,
            p_informed: 0.3,
            p_buy_noise: 0.5,
            v_high: 110.0,
            v_low: 90.0,
            high_to_low_rate: 0.02,
            low_to_high_rate: 0.02,
            alpha: 0.9,
            mean_quantity: 10.0,
            max_quantity: 100.0,
            p_limit_order: 0.6,
            fee_rate: 0.002,
            informed_limit_orders: true,
            informed_aggression: 0.2,
            long_run_mean: 0.5,
            mean_reversion_rate: 0.05,
            belief_floor: 0.01,
            belief_ceiling: 0.99,
            quote_size: 1_000_000.0,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Number of steps in the session.
    pub fn steps(&self) -> usize {
        (self.horizon / self.dt) as usize
    }

    /// Per-step probability that an order arrives.
    pub fn arrival_probability(&self) -> f64 {
        1.0 - (-self.arrival_rate * self.dt).exp()
    }
}
