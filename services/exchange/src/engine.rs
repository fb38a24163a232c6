//! The exchange engine.
//!
//! Owns the book, the trade log, and the trader registry. All entry
//! points take `&mut self`, so a submission is atomic from the outside:
//! the book may be transiently crossed inside the matching loop, but
//! no other call can observe it.

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::ids::{IdAllocator, OrderId, TraderId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::OrderBook;
use crate::matching::{crossing, MatchExecutor};
use crate::trader::Trader;

/// Single-instrument continuous matching engine.
#[derive(Debug, Default)]
pub struct Exchange {
    book: OrderBook,
    trades: Vec<Trade>,
    traders: HashMap<TraderId, Trader>,
    ids: IdAllocator,
    executor: MatchExecutor,
}

impl Exchange {
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
            trades: Vec::new(),
            traders: HashMap::new(),
            ids: IdAllocator::new(),
            executor: MatchExecutor::new(),
        }
    }

    /// Mint a fresh trader identity bound to this engine's id source.
    pub fn register_trader(&mut self) -> Trader {
        let trader = Trader::new(self.ids.next_trader_id(), self.ids.clone());
        self.traders.insert(trader.id().clone(), trader.clone());
        trader
    }

    pub fn trader(&self, id: &TraderId) -> Option<&Trader> {
        self.traders.get(id)
    }

    /// Match an incoming order against the book, rest any residual
    /// limit quantity, and return the trades in execution order.
    ///
    /// Market orders that exhaust the opposite side are reported by the
    /// (possibly empty) trade list and never rest.
    pub fn submit(&mut self, mut order: Order) -> Vec<Trade> {
        let mut remaining = order.quantity().as_decimal();
        let trades = self.match_incoming(&order, &mut remaining);

        if order.is_limit() {
            if let Some(quantity) = Quantity::try_new(remaining) {
                order.set_quantity(quantity);
                self.book.add(order);
            }
        }

        self.trades.extend(trades.iter().cloned());
        trades
    }

    /// The matching protocol: walk the best of the opposite side,
    /// trading at the resting price, until the incoming order is spent,
    /// the opposite side is empty, or the crossing gate stops a limit
    /// order. Any book inconsistency aborts the loop instead of
    /// panicking.
    fn match_incoming(&mut self, incoming: &Order, remaining: &mut Decimal) -> Vec<Trade> {
        let mut trades = Vec::new();

        while *remaining > Decimal::ZERO {
            let resting = match incoming.side() {
                Side::Buy => self.book.best_ask(),
                Side::Sell => self.book.best_bid(),
            };
            let Some(resting) = resting else {
                break;
            };
            let Some(resting_price) = resting.limit_price() else {
                break;
            };
            if !crossing::crosses(incoming, resting_price) {
                break;
            }

            let resting_id = resting.id().clone();
            let resting_trader = resting.trader_id().clone();
            let resting_qty = resting.quantity().as_decimal();

            let fill = (*remaining).min(resting_qty);
            let Some(fill_qty) = Quantity::try_new(fill) else {
                break;
            };
            trades.push(self.executor.execute(
                incoming,
                resting_id.clone(),
                resting_trader,
                resting_price,
                fill_qty,
            ));
            *remaining -= fill;

            if fill < resting_qty {
                let Some(new_qty) = Quantity::try_new(resting_qty - fill) else {
                    break;
                };
                if !self.book.reduce(&resting_id, new_qty) {
                    break;
                }
            } else if !self.book.remove(&resting_id) {
                break;
            }
        }

        trades
    }

    /// Remove a resting order. Unknown or already-consumed ids return
    /// false.
    pub fn cancel(&mut self, id: &OrderId) -> bool {
        self.book.remove(id)
    }

    /// Cancel-and-resubmit with new price and quantity. The modified
    /// order goes back through `submit`, so it may trade immediately
    /// and it loses its original time priority.
    ///
    /// Returns false for an unknown id, a non-limit order, or
    /// non-positive arguments; the book is left unchanged in all three
    /// cases.
    pub fn modify(&mut self, id: &OrderId, new_price: Decimal, new_quantity: Decimal) -> bool {
        let Some(price) = Price::try_new(new_price) else {
            return false;
        };
        let Some(quantity) = Quantity::try_new(new_quantity) else {
            return false;
        };
        match self.book.find(id) {
            Some(order) if order.is_limit() => {}
            _ => return false,
        }
        let Some(mut order) = self.book.take(id) else {
            return false;
        };
        if order.set_price(price).is_err() {
            self.book.add(order);
            return false;
        }
        order.set_quantity(quantity);
        self.submit(order);
        true
    }

    pub fn order_book(&self) -> &OrderBook {
        &self.book
    }

    /// All trades since construction, in execution order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }
}
