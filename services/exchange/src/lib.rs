//! Single-venue, single-instrument continuous limit-order-book
//! matching engine.
//!
//! The [`Exchange`] owns a price-time priority [`book::OrderBook`], an
//! append-only trade log, and a registry of [`Trader`] gateways. The
//! engine is synchronous and single-threaded: one `&mut Exchange` at a
//! time, no suspension points, no I/O. A driving harness registers
//! traders, mints orders through their gateways, and submits them.
//!
//! ```
//! use exchange::Exchange;
//! use rust_decimal::Decimal;
//! use types::order::Side;
//!
//! let mut exchange = Exchange::new();
//! let maker = exchange.register_trader();
//! let taker = exchange.register_trader();
//!
//! let ask = maker
//!     .create_limit(Decimal::from(105), Decimal::from(10), Side::Sell)
//!     .unwrap();
//! exchange.submit(ask);
//!
//! let bid = taker
//!     .create_limit(Decimal::from(105), Decimal::from(10), Side::Buy)
//!     .unwrap();
//! let trades = exchange.submit(bid);
//!
//! assert_eq!(trades.len(), 1);
//! assert!(exchange.order_book().is_empty());
//! ```

pub mod book;
pub mod engine;
pub mod matching;
pub mod trader;

pub use book::OrderBook;
pub use engine::Exchange;
pub use trader::Trader;

#[cfg(test)]
mod scenario_tests {
    use super::*;
    use rust_decimal::Decimal;
    use types::numeric::{Price, Quantity};
    use types::order::Side;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn no_match_rest() {
        let mut exchange = Exchange::new();
        let t1 = exchange.register_trader();

        let order = t1.create_limit(dec(100), dec(10), Side::Buy).unwrap();
        let id = order.id().clone();
        let trades = exchange.submit(order);

        assert!(trades.is_empty());
        let best_bid = exchange.order_book().best_bid().unwrap();
        assert_eq!(best_bid.id(), &id);
        assert_eq!(best_bid.limit_price(), Some(Price::from_u64(100)));
        assert_eq!(best_bid.quantity(), Quantity::from_u64(10));
        assert!(exchange.order_book().best_ask().is_none());
    }

    #[test]
    fn full_fill() {
        let mut exchange = Exchange::new();
        let t1 = exchange.register_trader();
        let t2 = exchange.register_trader();

        let sell = t2.create_limit(dec(105), dec(10), Side::Sell).unwrap();
        let sell_id = sell.id().clone();
        exchange.submit(sell);

        let buy = t1.create_limit(dec(105), dec(10), Side::Buy).unwrap();
        let buy_id = buy.id().clone();
        let trades = exchange.submit(buy);

        assert_eq!(trades.len(), 1);
        let trade = &trades[0];
        assert_eq!(trade.price, Price::from_u64(105));
        assert_eq!(trade.quantity, Quantity::from_u64(10));
        assert_eq!(&trade.buy_order_id, &buy_id);
        assert_eq!(&trade.sell_order_id, &sell_id);
        assert_eq!(&trade.buy_trader_id, t1.id());
        assert_eq!(&trade.sell_trader_id, t2.id());

        assert!(exchange.order_book().is_empty());
        assert_eq!(exchange.trades().len(), 1);
    }

    #[test]
    fn partial_fill_leaves_residual_ask() {
        let mut exchange = Exchange::new();
        let t1 = exchange.register_trader();
        let t2 = exchange.register_trader();

        let sell = t2.create_limit(dec(101), dec(20), Side::Sell).unwrap();
        exchange.submit(sell);

        let buy = t1.create_limit(dec(101), dec(10), Side::Buy).unwrap();
        let trades = exchange.submit(buy);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Price::from_u64(101));
        assert_eq!(trades[0].quantity, Quantity::from_u64(10));

        let residual = exchange.order_book().best_ask().unwrap();
        assert_eq!(residual.quantity(), Quantity::from_u64(10));
        assert_eq!(residual.limit_price(), Some(Price::from_u64(101)));
        assert!(exchange.order_book().best_bid().is_none());
    }

    #[test]
    fn market_sweep_across_levels() {
        let mut exchange = Exchange::new();
        let t1 = exchange.register_trader();
        let t2 = exchange.register_trader();

        let deep = t2.create_limit(dec(100), dec(15), Side::Sell).unwrap();
        let deep_id = deep.id().clone();
        exchange.submit(deep);
        let near = t2.create_limit(dec(99), dec(10), Side::Sell).unwrap();
        let near_id = near.id().clone();
        exchange.submit(near);

        let sweep = t1.create_market(dec(20), Side::Buy).unwrap();
        let trades = exchange.submit(sweep);

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].price, Price::from_u64(99));
        assert_eq!(trades[0].quantity, Quantity::from_u64(10));
        assert_eq!(&trades[0].sell_order_id, &near_id);
        assert_eq!(trades[1].price, Price::from_u64(100));
        assert_eq!(trades[1].quantity, Quantity::from_u64(10));
        assert_eq!(&trades[1].sell_order_id, &deep_id);

        assert!(exchange.order_book().find(&near_id).is_none());
        let rest = exchange.order_book().find(&deep_id).unwrap();
        assert_eq!(rest.quantity(), Quantity::from_u64(5));
        assert!(exchange.order_book().best_bid().is_none());
    }

    #[test]
    fn modify_triggers_immediate_match() {
        let mut exchange = Exchange::new();
        let t1 = exchange.register_trader();
        let t2 = exchange.register_trader();

        let sell = t2.create_limit(dec(105), dec(10), Side::Sell).unwrap();
        let sell_id = sell.id().clone();
        exchange.submit(sell);

        let buy = t1.create_limit(dec(100), dec(10), Side::Buy).unwrap();
        let buy_id = buy.id().clone();
        assert!(exchange.submit(buy).is_empty());
        assert!(exchange.trades().is_empty());

        assert!(exchange.modify(&buy_id, dec(105), dec(10)));

        assert_eq!(exchange.trades().len(), 1);
        let trade = exchange.trades().last().unwrap();
        assert_eq!(&trade.buy_order_id, &buy_id);
        assert_eq!(&trade.sell_order_id, &sell_id);
        assert_eq!(trade.price, Price::from_u64(105));
        assert_eq!(trade.quantity, Quantity::from_u64(10));
        assert!(exchange.order_book().is_empty());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut exchange = Exchange::new();
        let t1 = exchange.register_trader();

        let order = t1.create_limit(dec(100), dec(10), Side::Buy).unwrap();
        let id = order.id().clone();
        exchange.submit(order);

        assert!(exchange.cancel(&id));
        assert!(!exchange.cancel(&id));
        assert!(exchange.order_book().find(&id).is_none());
        assert!(exchange.order_book().is_empty());
    }
}
