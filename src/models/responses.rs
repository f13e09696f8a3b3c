use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, MatchedPair, PairingStrategy};

/// One pair as seen by result consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResponse {
    #[serde(rename = "idA")]
    pub id_a: String,
    #[serde(rename = "idB")]
    pub id_b: String,
    #[serde(rename = "previouslyMatched")]
    pub previously_matched: bool,
}

impl From<&MatchedPair> for PairResponse {
    fn from(pair: &MatchedPair) -> Self {
        Self {
            id_a: pair.first.id.clone(),
            id_b: pair.second.id.clone(),
            previously_matched: pair.previously_matched,
        }
    }
}

/// Response for the create pairs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePairsResponse {
    #[serde(rename = "runId")]
    pub run_id: String,
    pub pairs: Vec<PairResponse>,
    #[serde(rename = "oddPersonId")]
    pub odd_person_id: Option<String>,
    pub strategy: PairingStrategy,
    pub attempts: u32,
}

impl CreatePairsResponse {
    pub fn from_result(run_id: String, result: &MatchResult) -> Self {
        Self {
            run_id,
            pairs: result.pairs.iter().map(PairResponse::from).collect(),
            odd_person_id: result.odd_person.as_ref().map(|p| p.id.clone()),
            strategy: result.strategy,
            attempts: result.attempts,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
