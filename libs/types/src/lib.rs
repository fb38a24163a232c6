//! Shared value objects for the exchange.
//!
//! This crate defines the vocabulary the matching engine and the
//! simulation harness speak: identifier newtypes, fixed-point price and
//! quantity wrappers, the order model, the trade record, and the error
//! taxonomy. It contains no matching logic and performs no I/O.

pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

pub use errors::OrderError;
pub use ids::{IdAllocator, OrderId, TraderId};
pub use numeric::{Price, Quantity};
pub use order::{Order, OrderKind, Side};
pub use trade::Trade;
