// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    eq_ignore_case, previously_matched, AttributeSource, Identity, MatchResult, MatchedPair, PairingStrategy,
    PastMatch, PersonAttributes,
};
pub use requests::{CreatePairsRequest, RosterEntry};
pub use responses::{CreatePairsResponse, ErrorResponse, HealthResponse, PairResponse};
