// Core algorithm exports
pub mod engine;
pub mod error;
pub mod person;
pub mod random;
pub mod ranking;
pub mod shuffle;
pub mod stable;

pub use engine::{PairingConfig, PairingEngine, MIN_STABLE_MATCHING_SIZE};
pub use error::PairingError;
pub use person::{Person, PersonArena};
pub use random::RandomPairer;
pub use ranking::{calculate_pair_score, PreferenceRanker};
pub use shuffle::{SeededShuffler, Shuffler};
pub use stable::StableMatcher;
