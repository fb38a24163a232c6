//! Informed trader.
//!
//! Sees the true fundamental value. Buys when the value is high and
//! sells when it is low, but only if the trade clears the quoted price
//! plus the fee estimate. Depending on configuration it submits either
//! a market order or a limit order priced just inside the true value.

use exchange::{Exchange, Trader};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use types::order::Side;

use crate::bots::{ArrivalReport, SubmittedKind};
use crate::config::SimulationConfig;

#[derive(Debug)]
pub struct InformedTrader {
    gateway: Trader,
    fee_rate: f64,
    aggression: f64,
    use_limit_orders: bool,
}

impl InformedTrader {
    pub fn new(gateway: Trader, cfg: &SimulationConfig) -> Self {
        Self {
            gateway,
            fee_rate: cfg.fee_rate,
            aggression: cfg.informed_aggression,
            use_limit_orders: cfg.informed_limit_orders,
        }
    }

    /// Decide and (maybe) trade against the current quotes.
    ///
    /// `quoted_bid`/`quoted_ask` are the market maker's standing quotes;
    /// the profitability check uses those rather than the book, since
    /// that is the price an immediate execution would get.
    pub fn act(
        &self,
        exchange: &mut Exchange,
        value_is_high: bool,
        true_value: f64,
        quoted_bid: f64,
        quoted_ask: f64,
    ) -> ArrivalReport {
        let is_buy = value_is_high;
        let quantity = 1.0;

        let execution_price = if is_buy { quoted_ask } else { quoted_bid };
        let fee_estimate = execution_price * quantity * self.fee_rate;
        let net_benefit = if is_buy {
            true_value - (execution_price + fee_estimate)
        } else {
            (execution_price - fee_estimate) - true_value
        };
        if net_benefit <= 0.0 {
            return ArrivalReport::skipped(is_buy);
        }

        let side = if is_buy { Side::Buy } else { Side::Sell };
        let Some(qty) = Decimal::from_f64(quantity) else {
            return ArrivalReport::skipped(is_buy);
        };

        if self.use_limit_orders {
            // Price just inside the true value leaves room for the
            // fee while still crossing the stale quote.
            let limit_price = if is_buy {
                true_value - self.aggression
            } else {
                true_value + self.aggression
            };
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
