//! Trader gateway.
//!
//! A registered identity that mints orders carrying its trader id.
//! The gateway holds no reference back to the engine; lifecycle calls
//! take `&mut Exchange` explicitly, which keeps ownership simple and
//! rules out a dangling engine handle.

use rust_decimal::Decimal;
use types::errors::OrderError;
use types::ids::{IdAllocator, OrderId, TraderId};
use types::order::{Order, Side};

use crate::engine::Exchange;

/// A bound trader identity.
#[derive(Debug, Clone)]
pub struct Trader {
    id: TraderId,
    ids: IdAllocator,
}

impl Trader {
    pub(crate) fn new(id: TraderId, ids: IdAllocator) -> Self {
        Self { id, ids }
    }

    pub fn id(&self) -> &TraderId {
        &self.id
    }

    /// Mint a limit order. The caller submits it explicitly, so the
    /// order id can be retained before the order enters the book.
    pub fn create_limit(
        &self,
        price: Decimal,
        quantity: Decimal,
        side: Side,
    ) -> Result<Order, OrderError> {
        Order::limit(self.ids.next_order_id(), self.id.clone(), price, quantity, side)
    }

    /// Mint a market order.
    pub fn create_market(&self, quantity: Decimal, side: Side) -> Result<Order, OrderError> {
        Order::market(self.ids.next_order_id(), self.id.clone(), quantity, side)
    }

    pub fn cancel(&self, exchange: &mut Exchange, id: &OrderId) -> bool {
        exchange.cancel(id)
    }

    pub fn modify(
        &self,
        exchange: &mut Exchange,
        id: &OrderId,
        new_price: Decimal,
        new_quantity: Decimal,
    ) -> bool {
        exchange.modify(id, new_price, new_quantity)
    }
}
