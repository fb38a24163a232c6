//! Ask (sell-side) half of the book.
//!
//! Mirror image of the bid side: the best ask is the lowest price, so
//! natural `BTreeMap` order is already priority order.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Order;

use super::price_level::PriceLevel;

/// Sell orders grouped by price, best (lowest) price first.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a limit order, creating its level on first use. Orders
    /// without a price are ignored.
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

    /// Time-priority winner of the lowest-price level.
    pub fn best(&self) -> Option<&Order> {
        self.levels.values().next().and_then(|l| l.front())
    }

    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Levels in priority order (lowest price first).
    pub fn levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn order_count(&self) -> usize {
        self.levels.values().map(|l| l.len()).sum()
    }
}
