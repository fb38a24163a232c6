//! Matching protocol pieces: the crossing gate and the trade builder.

pub mod crossing;
pub mod executor;

pub use crossing::crosses;
pub use executor::MatchExecutor;
