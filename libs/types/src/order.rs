//! The order model.
//!
//! An [`Order`] is a header (id, trader, side, quantity) plus a tagged
//! [`OrderKind`]: limit orders carry a price, market orders do not and
//! never rest in a book. Constructors validate their raw decimal
//! inputs, so a constructed order always has positive quantity and, for
//! limits, a positive price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::OrderError;
use crate::ids::{OrderId, TraderId};
use crate::numeric::{Price, Quantity};

/// Order side (buyer or seller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order flavor. Limit orders carry their price bound here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum OrderKind {
    Limit { price: Price },
    Market,
}

/// A resting or incoming order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    trader_id: TraderId,
    side: Side,
    kind: OrderKind,
    quantity: Quantity,
}

impl Order {
    /// Build a limit order. Fails if price or quantity is not positive.
    pub fn limit(
        id: OrderId,
        trader_id: TraderId,
        price: Decimal,
        quantity: Decimal,
        side: Side,
    ) -> Result<Self, OrderError> {
        let price =
            Price::try_new(price).ok_or_else(|| OrderError::InvalidPrice(price.to_string()))?;
        let quantity = Quantity::try_new(quantity)
            .ok_or_else(|| OrderError::InvalidQuantity(quantity.to_string()))?;
        Ok(Self {
            id,
            trader_id,
            side,
            kind: OrderKind::Limit { price },
            quantity,
        })
    }

    /// Build a market order. Fails if quantity is not positive.
    pub fn market(
        id: OrderId,
        trader_id: TraderId,
        quantity: Decimal,
        side: Side,
    ) -> Result<Self, OrderError> {
        let quantity = Quantity::try_new(quantity)
            .ok_or_else(|| OrderError::InvalidQuantity(quantity.to_string()))?;
        Ok(Self {
            id,
            trader_id,
            side,
            kind: OrderKind::Market,
            quantity,
        })
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn trader_id(&self) -> &TraderId {
        &self.trader_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The price bound, or `None` for a market order.
    pub fn limit_price(&self) -> Option<Price> {
        match self.kind {
            OrderKind::Limit { price } => Some(price),
            OrderKind::Market => None,
        }
    }

    pub fn is_limit(&self) -> bool {
        matches!(self.kind, OrderKind::Limit { .. })
    }

    pub fn is_market(&self) -> bool {
        matches!(self.kind, OrderKind::Market)
    }

    /// Replace the remaining quantity. Positivity is carried by the
    /// `Quantity` type; a fully consumed order is removed, never zeroed.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Replace the price bound of a limit order.
    pub fn set_price(&mut self, price: Price) -> Result<(), OrderError> {
        match self.kind {
            OrderKind::Limit { .. } => {
                self.kind = OrderKind::Limit { price };
                Ok(())
            }
            OrderKind::Market => Err(OrderError::WrongKind),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OrderKind::Limit { price } => {
                write!(f, "{} {} @ {}", self.side, self.quantity, price)
            }
            OrderKind::Market => write!(f, "{} {} @ MARKET", self.side, self.quantity),
        }
    }
}
