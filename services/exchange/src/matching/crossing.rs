//! Crossing gate.
//!
//! Decides whether an incoming order may trade against a resting order
//! at the given price. Market orders have no price bound and always
//! cross; limit orders cross only when their bound reaches the resting
//! price.

use types::numeric::Price;
use types::order::{Order, Side};

/// True if `incoming` may trade at `resting_price`.
pub fn crosses(incoming: &Order, resting_price: Price) -> bool {
    match incoming.limit_price() {
        None => true,
        Some(limit) => match incoming.side() {
            Side::Buy => limit >= resting_price,
            Side::Sell => limit <= resting_price,
        },
    }
}
