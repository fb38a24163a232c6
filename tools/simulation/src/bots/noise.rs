//! Noise trader.
//!
//! Trades for reasons outside the model: random side, exponential
//! quantity, and either a market order or a limit order scattered
//! around the current mid price.

use exchange::{Exchange, Trader};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Exp1, StandardNormal};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use types::order::Side;

use crate::bots::{ArrivalReport, SubmittedKind};
use crate::config::SimulationConfig;

/// Price floor for scattered limit orders.
const MIN_LIMIT_PRICE: f64 = 0.01;

#[derive(Debug)]
pub struct NoiseTrader {
    gateway: Trader,
    rng: ChaCha8Rng,
    p_buy: f64,
    p_limit: f64,
    mean_quantity: f64,
    max_quantity: f64,
}

impl NoiseTrader {
    pub fn new(gateway: Trader, cfg: &SimulationConfig, seed: u64) -> Self {
        Self {
            gateway,
            rng: ChaCha8Rng::seed_from_u64(seed),
            p_buy: cfg.p_buy_noise,
            p_limit: cfg.p_limit_order,
            mean_quantity: cfg.mean_quantity,
            max_quantity: cfg.max_quantity,
        }
    }

    /// Submit one random order. `fallback_bid`/`fallback_ask` stand in
    /// for the book's best quotes when a side is empty, so the mid is
    /// always defined.
    pub fn act(
        &mut self,
        exchange: &mut Exchange,
        fallback_bid: f64,
        fallback_ask: f64,
    ) -> ArrivalReport {
        let is_buy = self.rng.gen_bool(self.p_buy);
        let place_limit = self.rng.gen_bool(self.p_limit);

        let draw: f64 = self.rng.sample(Exp1);
        let quantity = (draw * self.mean_quantity).clamp(1.0, self.max_quantity);
        let side = if is_buy { Side::Buy } else { Side::Sell };
        let Some(qty) = Decimal::from_f64(quantity).map(|q| q.round_dp(4)) else {
            return ArrivalReport::skipped(is_buy);
        };

        if place_limit {
            let book = exchange.order_book();
            let best_bid = book
                .best_bid()
                .and_then(|o| o.limit_price())
                .and_then(|p| p.as_decimal().to_f64())
                .unwrap_or(fallback_bid);
            let best_ask = book
                .best_ask()
                .and_then(|o| o.limit_price())
                .and_then(|p| p.as_decimal().to_f64())
                .unwrap_or(fallback_ask);
            let mid = 0.5 * (best_bid + best_ask);

            let offset: f64 = self.rng.sample(StandardNormal);
            let limit_price = (mid + offset).max(MIN_LIMIT_PRICE);
            let Some(price) = Decimal::from_f64(limit_price).map(|p| p.round_dp(4)) else {
                return ArrivalReport::skipped(is_buy);
            };

            match self.gateway.create_limit(price, qty, side) {
                Ok(order) => ArrivalReport {
                    kind: SubmittedKind::Limit,
                    is_buy,
                    quantity,
                    trades: exchange.submit(order),
                },
                Err(_) => ArrivalReport::skipped(is_buy),
            }
        } else {
            match self.gateway.create_market(qty, side) {
                Ok(order) => ArrivalReport {
                    kind: SubmittedKind::Market,
                    is_buy,
                    quantity,
                    trades: exchange.submit(order),
                },
                Err(_) => ArrivalReport::skipped(is_buy),
            }
        }
    }
}
