//! Trade construction.
//!
//! Assigns the engine-scoped execution sequence and orients the trade:
//! buyer and seller are derived from the aggressor's side, and the
//! execution price is always the resting order's price, so the
//! aggressor gets any price improvement.

use types::ids::{OrderId, TraderId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

/// Builds trades with a monotonically increasing sequence number.
#[derive(Debug, Default)]
pub struct MatchExecutor {
    sequence: u64,
}

impl MatchExecutor {
    pub fn new() -> Self {
        Self { sequence: 0 }
    }

    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Record a fill of `quantity` at `price` between the incoming
    /// aggressor and a resting order.
    pub fn execute(
        &mut self,
        incoming: &Order,
        resting_order_id: OrderId,
        resting_trader_id: TraderId,
        price: Price,
        quantity: Quantity,
    ) -> Trade {
        let sequence = self.next_sequence();
        match incoming.side() {
            Side::Buy => Trade::new(
                sequence,
                incoming.id().clone(),
                resting_order_id,
                incoming.trader_id().clone(),
                resting_trader_id,
                price,
                quantity,
            ),
            Side::Sell => Trade::new(
                sequence,
                resting_order_id,
                incoming.id().clone(),
                resting_trader_id,
                incoming.trader_id().clone(),
                price,
                quantity,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn incoming(side: Side) -> Order {
        Order::limit(
            OrderId::new("ORD-2"),
            TraderId::new("TRD-1"),
            Decimal::from(105),
            Decimal::from(10),
            side,
        )
        .unwrap()
    }

    #[test]
    fn buy_aggressor_is_the_buyer() {
        let mut executor = MatchExecutor::new();
        let trade = executor.execute(
            &incoming(Side::Buy),
            OrderId::new("ORD-1"),
            TraderId::new("TRD-2"),
            Price::from_u64(105),
            Quantity::from_u64(10),
        );

        assert_eq!(trade.buy_order_id.as_str(), "ORD-2");
        assert_eq!(trade.sell_order_id.as_str(), "ORD-1");
        assert_eq!(trade.buy_trader_id.as_str(), "TRD-1");
        assert_eq!(trade.sell_trader_id.as_str(), "TRD-2");
    }

    #[test]
    fn sell_aggressor_is_the_seller() {
        let mut executor = MatchExecutor::new();
        let trade = executor.execute(
            &incoming(Side::Sell),
            OrderId::new("ORD-1"),
            TraderId::new("TRD-2"),
            Price::from_u64(105),
            Quantity::from_u64(10),
        );

        assert_eq!(trade.sell_order_id.as_str(), "ORD-2");
        assert_eq!(trade.buy_order_id.as_str(), "ORD-1");
    }

    #[test]
    fn sequence_increases_per_trade() {
        let mut executor = MatchExecutor::new();
        let order = incoming(Side::Buy);
        let first = executor.execute(
            &order,
            OrderId::new("ORD-1"),
            TraderId::new("TRD-2"),
            Price::from_u64(105),
            Quantity::from_u64(5),
        );
        let second = executor.execute(
            &order,
            OrderId::new("ORD-3"),
            TraderId::new("TRD-2"),
            Price::from_u64(105),
            Quantity::from_u64(5),
        );

        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
    }
}
