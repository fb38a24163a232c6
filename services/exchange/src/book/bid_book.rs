//! Bid (buy-side) half of the book.
//!
//! Price levels are kept in a `BTreeMap`, so iteration is deterministic
//! and the best bid is the last key.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Order;

use super::price_level::PriceLevel;

/// Buy orders grouped by price, best (highest) price first.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a limit order, creating its level on first use. Orders
    /// without a price are ignored; they have no place in a book.
    pub fn insert(&mut self, order: Order) {
        let Some(price) = order.limit_price() else {
            return;
        };
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push(order);
    }

    /// Remove an order from the level at `price`, pruning the level if
    /// that left it empty.
    pub fn remove(&mut self, id: &OrderId, price: Price) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let removed = level.remove(id)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(removed)
    }

    pub fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub(crate) fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Time-priority winner of the highest-price level.
    pub fn best(&self) -> Option<&Order> {
        self.levels.values().next_back().and_then(|l| l.front())
    }

    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Levels in priority order (highest price first).
    pub fn levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn order_count(&self) -> usize {
        self.levels.values().map(|l| l.len()).sum()
    }
}
