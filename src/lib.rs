//! Pairing Algo - roster pairing engine
//!
//! Splits a team roster into disjoint pairs (plus at most one odd person)
//! using deferred-acceptance stable matching over attribute-based
//! preferences, retrying when the outcome repeats earlier pairs.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{PairingConfig, PairingEngine, PairingError, PreferenceRanker, SeededShuffler, Shuffler};
pub use crate::models::{AttributeSource, Identity, MatchResult, MatchedPair, PairingStrategy, PastMatch, PersonAttributes};
