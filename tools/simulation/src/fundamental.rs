//! Two-state Markov fundamental value.
//!
//! The true value sits at `v_high` or `v_low` and flips with
//! per-step probability `rate * dt`, the same discretization the
//! arrival clock uses.

use rand::Rng;

use crate::config::SimulationConfig;

/// The hidden fundamental the informed trader observes.
#[derive(Debug, Clone)]
pub struct Fundamental {
    is_high: bool,
    v_high: f64,
    v_low: f64,
    high_to_low: f64,
    low_to_high: f64,
}

impl Fundamental {
    pub fn new(cfg: &SimulationConfig, start_high: bool) -> Self {
        Self {
            is_high: start_high,
            v_high: cfg.v_high,
            v_low: cfg.v_low,
            high_to_low: cfg.high_to_low_rate,
            low_to_high: cfg.low_to_high_rate,
        }
    }

    /// Advance one step, possibly flipping the state.
    pub fn step<R: Rng>(&mut self, rng: &mut R, dt: f64) {
        let flip_probability = if self.is_high {
            self.high_to_low * dt
        } else {
            self.low_to_high * dt
        };
        if rng.gen_bool(flip_probability.clamp(0.0, 1.0)) {
            self.is_high = !self.is_high;
        }
    }

    pub fn value(&self) -> f64 {
        if self.is_high {
            self.v_high
        } else {
            self.v_low
        }
    }

    pub fn is_high(&self) -> bool {
        self.is_high
    }
}
