use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;
use crate::models::domain::{Identity, PersonAttributes};

/// Roster entry as supplied by the roster provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RosterEntry {
    #[validate(length(min = 1))]
    #[serde(alias = "identity_id", rename = "identityId")]
    pub identity_id: String,
    #[serde(alias = "display_name", rename = "displayName", default)]
    pub display_name: String,
}

impl From<RosterEntry> for Identity {
    fn from(entry: RosterEntry) -> Self {
        Identity {
            id: entry.identity_id,
            display_name: entry.display_name,
        }
    }
}

/// Request to pair one roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePairsRequest {
    #[validate(nested)]
    pub roster: Vec<RosterEntry>,
    /// Attribute records keyed by identity id; absent entries are valid
    #[serde(default)]
    pub attributes: HashMap<String, PersonAttributes>,
    #[serde(alias = "max_retries", rename = "maxRetries", default)]
    pub max_retries: Option<u32>,
    #[serde(alias = "random_seed", rename = "randomSeed", default)]
    pub random_seed: Option<u64>,
}

impl CreatePairsRequest {
    /// First identity id that appears more than once in the roster
    pub fn duplicate_identity(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::with_capacity(self.roster.len());
        self.roster
            .iter()
            .map(|entry| entry.identity_id.as_str())
            .find(|id| !seen.insert(*id))
    }
}
