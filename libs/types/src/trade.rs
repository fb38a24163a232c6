//! The trade record.
//!
//! A trade is created once by the matching engine and never mutated.
//! `sequence` is the engine-scoped execution number; within one
//! submission it increases in matching order, and across submissions in
//! submission order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{OrderId, TraderId};
use crate::numeric::{Price, Quantity};

/// An atomic exchange of quantity between a buy and a sell order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub sequence: u64,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub buy_trader_id: TraderId,
    pub sell_trader_id: TraderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    pub fn new(
        sequence: u64,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        buy_trader_id: TraderId,
        sell_trader_id: TraderId,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            sequence,
            buy_order_id,
            sell_order_id,
            buy_trader_id,
            sell_trader_id,
            price,
            quantity,
        }
    }

    /// Traded value (price × quantity).
    pub fn notional(&self) -> Decimal {
        self.quantity * self.price
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trade executed: #{} {} @ {} | buyer {} ({}) | seller {} ({})",
            self.sequence,
            self.quantity,
            self.price,
            self.buy_trader_id,
            self.buy_order_id,
            self.sell_trader_id,
            self.sell_order_id,
        )
    }
}
