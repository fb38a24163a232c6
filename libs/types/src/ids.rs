//! Identifier types for exchange entities.
//!
//! Orders and traders carry short human-readable string ids
//! (`ORD-17`, `TRD-2`) minted by an [`IdAllocator`]. The allocator is
//! scoped to one engine instance rather than the whole process, so two
//! engines built in the same test both number their ids from 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a registered trader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraderId(String);

impl TraderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source shared between an engine and its trader
/// gateways.
///
/// Cloning yields a handle onto the same counters, so a gateway mints
/// order ids that stay unique across everything the owning engine ever
/// sees. Counters start at 1.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_order: Arc<AtomicU64>,
    next_trader: Arc<AtomicU64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next_order: Arc::new(AtomicU64::new(1)),
            next_trader: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn next_order_id(&self) -> OrderId {
        let n = self.next_order.fetch_add(1, Ordering::Relaxed);
        OrderId::new(format!("ORD-{n}"))
    }

    pub fn next_trader_id(&self) -> TraderId {
        let n = self.next_trader.fetch_add(1, Ordering::Relaxed);
        TraderId::new(format!("TRD-{n}"))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_are_sequential() {
        let ids = IdAllocator::new();
        assert_eq!(ids.next_order_id().as_str(), "ORD-1");
        assert_eq!(ids.next_order_id().as_str(), "ORD-2");
        assert_eq!(ids.next_trader_id().as_str(), "TRD-1");
    }

    #[test]
    fn clones_share_counters() {
        let ids = IdAllocator::new();
        let handle = ids.clone();
        assert_eq!(ids.next_order_id().as_str(), "ORD-1");
        assert_eq!(handle.next_order_id().as_str(), "ORD-2");
        assert_eq!(ids.next_order_id().as_str(), "ORD-3");
    }

    #[test]
    fn separate_allocators_restart_from_one() {
        let a = IdAllocator::new();
        let b = IdAllocator::new();
        a.next_order_id();
        assert_eq!(b.next_order_id().as_str(), "ORD-1");
    }

    #[test]
    fn id_serialization_is_transparent() {
        let id = OrderId::new("ORD-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ORD-7\"");

        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
