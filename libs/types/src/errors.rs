//! Error taxonomy for order construction and mutation.
//!
//! Only argument validation surfaces as an error type. Lookup failures
//! (unknown order id) are reported as `false`/`None` by the book and
//! the engine, and the matching loop never raises at all.

use thiserror::Error;

/// Rejection reasons for constructing or mutating an order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("invalid price: {0} (must be positive)")]
    InvalidPrice(String),

    #[error("invalid quantity: {0} (must be positive)")]
    InvalidQuantity(String),

    #[error("operation requires a limit order")]
    WrongKind,
}
