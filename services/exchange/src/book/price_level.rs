//! A single price level with a FIFO order queue.
//!
//! The level owns the canonical copies of its resting orders; holders
//! elsewhere keep at most the order id. FIFO insertion order is what
//! enforces time priority during matching.

use rust_decimal::Decimal;
use std::collections::VecDeque;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Order;

/// All resting orders at one price on one side, in arrival order.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    orders: VecDeque<Order>,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Append at the tail. The caller guarantees a limit order whose
    /// price equals the level price.
    pub fn push(&mut self, order: Order) {
        debug_assert_eq!(order.limit_price(), Some(self.price));
        self.orders.push_back(order);
    }

    /// Remove the order with the given id, returning it if present.
    pub fn remove(&mut self, id: &OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.id() == id)?;
        self.orders.remove(position)
    }

    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id() == id)
    }

    /// The time-priority-winning order for this level.
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn total_quantity(&self) -> Decimal {
        self.orders.iter().map(|o| o.quantity().as_decimal()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use types::ids::TraderId;
    use types::order::Side;

    fn limit(id: &str, price: u64, qty: u64) -> Order {
        Order::limit(
            OrderId::new(id),
            TraderId::new("TRD-1"),
            Decimal::from(price),
            Decimal::from(qty),
            Side::Sell,
        )
        .unwrap()
    }

    #[test]
    fn push_preserves_arrival_order() {
        let mut level = PriceLevel::new(Price::from_u64(100));
        level.push(limit("ORD-1", 100, 5));
        level.push(limit("ORD-2", 100, 7));
        level.push(limit("ORD-3", 100, 9));

        assert_eq!(level.front().unwrap().id().as_str(), "ORD-1");
        assert_eq!(level.len(), 3);
        assert_eq!(level.total_quantity(), Decimal::from(21));
    }

    #[test]
    fn remove_returns_the_order_and_keeps_the_rest() {
        let mut level = PriceLevel::new(Price::from_u64(100));
        level.push(limit("ORD-1", 100, 5));
        level.push(limit("ORD-2", 100, 7));

        let removed = level.remove(&OrderId::new("ORD-1")).unwrap();
        assert_eq!(removed.id().as_str(), "ORD-1");
        assert_eq!(level.front().unwrap().id().as_str(), "ORD-2");

        assert!(level.remove(&OrderId::new("ORD-1")).is_none());
    }

    #[test]
    fn find_scans_by_id() {
        let mut level = PriceLevel::new(Price::from_u64(100));
        level.push(limit("ORD-1", 100, 5));

        assert!(level.find(&OrderId::new("ORD-1")).is_some());
        assert!(level.find(&OrderId::new("ORD-9")).is_none());
    }

    #[test]
    fn empty_level_reports_empty() {
        let level = PriceLevel::new(Price::from_u64(100));
        assert!(level.is_empty());
        assert!(level.front().is_none());
        assert_eq!(level.total_quantity(), Decimal::ZERO);
    }
}
