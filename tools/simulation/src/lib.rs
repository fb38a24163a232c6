//! Glosten–Milgrom market microstructure simulation.
//!
//! Drives the `exchange` engine with three agents: a market maker that
//! quotes from a Bayesian belief over a two-state fundamental value, an
//! informed trader that sees the true value, and a noise trader. Order
//! arrivals follow a Poisson-approximation clock; every step is
//! recorded for CSV export and downstream analysis.
//!
//! # Modules
//! - `config` — simulation parameters and defaults
//! - `belief` — Glosten–Milgrom quote and belief-update math
//! - `fundamental` — two-state Markov fundamental value
//! - `bots` — market maker, informed, and noise traders
//! - `run` — the deterministic step loop
//! - `export` — per-step records and CSV output

pub mod belief;
pub mod bots;
pub mod config;
pub mod export;
pub mod fundamental;
pub mod run;
