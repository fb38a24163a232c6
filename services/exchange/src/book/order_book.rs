//! The composite order book.
//!
//! Two price-ordered sides plus a locator index from order id to
//! `(side, price)`, so cancel and lookup never scan the whole book.
//! After every public call: every indexed id resolves to exactly one
//! resting order, no level is empty, and the two sides are disjoint.

use std::collections::HashMap;
use std::fmt;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use super::ask_book::AskBook;
use super::bid_book::BidBook;
use super::price_level::PriceLevel;

#[derive(Debug, Clone, Copy)]
struct Locator {
    side: Side,
    price: Price,
}

/// Price-time priority book for one instrument.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
    index: HashMap<OrderId, Locator>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            index: HashMap::new(),
        }
    }

    /// Rest a limit order. Market orders never rest and are silently
    /// ignored.
    pub fn add(&mut self, order: Order) {
        let Some(price) = order.limit_price() else {
            return;
        };
        debug_assert!(!self.index.contains_key(order.id()));
        self.index.insert(
            order.id().clone(),
            Locator {
                side: order.side(),
                price,
            },
        );
        match order.side() {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.asks.insert(order),
        }
    }

    /// Remove a resting order. Returns whether anything was removed.
    pub fn remove(&mut self, id: &OrderId) -> bool {
        self.take(id).is_some()
    }

    /// Remove a resting order and hand it back (used by modify).
    pub(crate) fn take(&mut self, id: &OrderId) -> Option<Order> {
        let locator = self.index.remove(id)?;
        match locator.side {
            Side::Buy => self.bids.remove(id, locator.price),
            Side::Sell => self.asks.remove(id, locator.price),
        }
    }

    /// Shrink a resting order after a partial fill. The price does not
    /// change, so the locator stays valid.
    pub(crate) fn reduce(&mut self, id: &OrderId, quantity: Quantity) -> bool {
        let Some(locator) = self.index.get(id) else {
            return false;
        };
        let level = match locator.side {
            Side::Buy => self.bids.level_mut(locator.price),
            Side::Sell => self.asks.level_mut(locator.price),
        };
        match level.and_then(|l| l.find_mut(id)) {
            Some(order) => {
                order.set_quantity(quantity);
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        let locator = self.index.get(id)?;
        let level = match locator.side {
            Side::Buy => self.bids.level(locator.price),
            Side::Sell => self.asks.level(locator.price),
        };
        level?.find(id)
    }

    /// Highest-priority resting buy order, if any.
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.best()
    }

    /// Highest-priority resting sell order, if any.
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.best()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// Human-readable snapshot: asks descending above the separator,
    /// bids descending below, per-order quantities in time order.
    pub fn render(&self) -> String {
        let mut out = String::from("ORDER BOOK\n==========\nASKS:\n");
        let asks: Vec<&PriceLevel> = self.asks.levels().collect();
        for level in asks.into_iter().rev() {
            out.push_str(&render_level(level));
        }
        out.push_str("----------\nBIDS:\n");
        for level in self.bids.levels() {
            out.push_str(&render_level(level));
        }
        out
    }
}

fn render_level(level: &PriceLevel) -> String {
    let quantities: Vec<String> = level.iter().map(|o| o.quantity().to_string()).collect();
    format!("{:.2}: {}\n", level.price().as_decimal(), quantities.join(" "))
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use types::ids::TraderId;

    fn limit(id: &str, side: Side, price: u64, qty: u64) -> Order {
        Order::limit(
            OrderId::new(id),
            TraderId::new("TRD-1"),
            Decimal::from(price),
            Decimal::from(qty),
            side,
        )
        .unwrap()
    }

    #[test]
    fn add_then_find_round_trips() {
        let mut book = OrderBook::new();
        book.add(limit("ORD-1", Side::Buy, 100, 10));

        let found = book.find(&OrderId::new("ORD-1")).unwrap();
        assert_eq!(found.side(), Side::Buy);
        assert_eq!(found.quantity(), Quantity::from_u64(10));
        assert!(book.find(&OrderId::new("ORD-9")).is_none());
    }

    #[test]
    fn market_orders_are_ignored() {
        let mut book = OrderBook::new();
        let market = Order::market(
            OrderId::new("ORD-1"),
            TraderId::new("TRD-1"),
            Decimal::from(5),
            Side::Buy,
        )
        .unwrap();

        book.add(market);
        assert!(book.is_empty());
        assert!(book.find(&OrderId::new("ORD-1")).is_none());
    }

    #[test]
    fn best_quotes_track_both_sides() {
        let mut book = OrderBook::new();
        book.add(limit("ORD-1", Side::Buy, 99, 20));
        book.add(limit("ORD-2", Side::Buy, 98, 10));
        book.add(limit("ORD-3", Side::Sell, 101, 15));
        book.add(limit("ORD-4", Side::Sell, 102, 25));

        assert_eq!(book.best_bid().unwrap().id().as_str(), "ORD-1");
        assert_eq!(book.best_ask().unwrap().id().as_str(), "ORD-3");
        assert_eq!(book.order_count(), 4);
    }

    #[test]
    fn remove_is_idempotent_and_prunes() {
        let mut book = OrderBook::new();
        book.add(limit("ORD-1", Side::Sell, 101, 15));

        assert!(book.remove(&OrderId::new("ORD-1")));
        assert!(book.is_empty());
        assert!(!book.remove(&OrderId::new("ORD-1")));
        assert!(book.find(&OrderId::new("ORD-1")).is_none());
    }

    #[test]
    fn reduce_shrinks_in_place() {
        let mut book = OrderBook::new();
        book.add(limit("ORD-1", Side::Sell, 101, 15));

        assert!(book.reduce(&OrderId::new("ORD-1"), Quantity::from_u64(6)));
        assert_eq!(
            book.find(&OrderId::new("ORD-1")).unwrap().quantity(),
            Quantity::from_u64(6)
        );
        assert!(!book.reduce(&OrderId::new("ORD-9"), Quantity::from_u64(1)));
    }

    #[test]
    fn render_matches_snapshot_shape() {
        let mut book = OrderBook::new();
        book.add(limit("ORD-1", Side::Buy, 99, 20));
        book.add(limit("ORD-2", Side::Buy, 98, 10));
        book.add(limit("ORD-3", Side::Sell, 101, 15));
        book.add(limit("ORD-4", Side::Sell, 102, 25));

        let expected = "ORDER BOOK\n\
                        ==========\n\
                        ASKS:\n\
                        102.00: 25\n\
                        101.00: 15\n\
                        ----------\n\
                        BIDS:\n\
                        99.00: 20\n\
                        98.00: 10\n";
        assert_eq!(book.render(), expected);
    }

    #[test]
    fn render_lists_level_quantities_in_time_order() {
        let mut book = OrderBook::new();
        book.add(limit("ORD-1", Side::Buy, 100, 10));
        book.add(limit("ORD-2", Side::Buy, 100, 5));

        assert!(book.render().contains("100.00: 10 5"));
    }
}
