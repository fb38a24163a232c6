//! Glosten–Milgrom market maker.
//!
//! Quotes a bid and an ask derived from its belief about the
//! fundamental, updates the belief from the direction of incoming
//! trade flow, and replaces both quotes after every update. Between
//! trades the belief drifts back toward its long-run mean.

use exchange::{Exchange, Trader};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use types::ids::OrderId;
use types::order::Side;

use crate::belief;
use crate::config::SimulationConfig;

/// The quoting agent. Holds the only resting quotes at session start.
#[derive(Debug)]
pub struct MarketMaker {
    gateway: Trader,
    alpha: f64,
    v_high: f64,
    v_low: f64,
    belief: f64,
    floor: f64,
    ceiling: f64,
    long_run_mean: f64,
    reversion_rate: f64,
    quote_size: Decimal,
    bid_id: Option<OrderId>,
    ask_id: Option<OrderId>,
    bid_price: f64,
    ask_price: f64,
}

impl MarketMaker {
    pub fn new(gateway: Trader, cfg: &SimulationConfig) -> Self {
        let belief = 0.5;
        Self {
            gateway,
            alpha: cfg.alpha,
            v_high: cfg.v_high,
            v_low: cfg.v_low,
            belief,
            floor: cfg.belief_floor,
            ceiling: cfg.belief_ceiling,
            long_run_mean: cfg.long_run_mean,
            reversion_rate: cfg.mean_reversion_rate,
            quote_size: Decimal::from_f64(cfg.quote_size).unwrap_or(Decimal::ONE),
            bid_id: None,
            ask_id: None,
            bid_price: belief::bid_quote(belief, cfg.alpha, cfg.v_high, cfg.v_low),
            ask_price: belief::ask_quote(belief, cfg.alpha, cfg.v_high, cfg.v_low),
        }
    }

    /// Compute fresh quotes from the current belief and rest them.
    pub fn place_quotes(&mut self, exchange: &mut Exchange) {
        self.bid_price = belief::bid_quote(self.belief, self.alpha, self.v_high, self.v_low);
        self.ask_price = belief::ask_quote(self.belief, self.alpha, self.v_high, self.v_low);

        self.bid_id = self.submit_quote(exchange, self.bid_price, Side::Buy);
        self.ask_id = self.submit_quote(exchange, self.ask_price, Side::Sell);
    }

    fn submit_quote(
        &self,
        exchange: &mut Exchange,
        price: f64,
        side: Side,
    ) -> Option<OrderId> {
        let price = Decimal::from_f64(price)?.round_dp(4);
        let order = self.gateway.create_limit(price, self.quote_size, side).ok()?;
        let id = order.id().clone();
        exchange.submit(order);
        Some(id)
    }

    /// Observe the direction of an executed arrival, update the belief,
    /// and replace both quotes.
    pub fn on_trade_flow(&mut self, exchange: &mut Exchange, aggressor_was_buy: bool) {
        self.belief = belief::clamp(
            belief::update_after_trade(aggressor_was_buy, self.belief, self.alpha),
            self.floor,
            self.ceiling,
        );
        self.requote(exchange);
    }

    /// Pull both quotes and rest new ones at the current belief.
    pub fn requote(&mut self, exchange: &mut Exchange) {
        if let Some(id) = self.bid_id.take() {
            exchange.cancel(&id);
        }
        if let Some(id) = self.ask_id.take() {
            exchange.cancel(&id);
        }
        self.place_quotes(exchange);
    }

    /// Per-step belief drift toward the long-run mean.
    pub fn relax(&mut self, dt: f64) {
        self.belief = belief::clamp(
            belief::mean_revert(self.belief, self.long_run_mean, self.reversion_rate, dt),
            self.floor,
            self.ceiling,
        );
    }

    pub fn bid(&self) -> f64 {
        self.bid_price
    }

    pub fn ask(&self) -> f64 {
        self.ask_price
    }

    pub fn belief(&self) -> f64 {
        self.belief
    }

    pub fn trader_id(&self) -> &types::ids::TraderId {
        self.gateway.id()
    }
}
