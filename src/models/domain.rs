use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A participant as supplied by the roster.
///
/// The engine only compares identities by `id` and uses `display_name`
/// for low-preference lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "identityId")]
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A match from an earlier pairing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastMatch {
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    #[serde(rename = "matchedAtUtc")]
    pub matched_at_utc: DateTime<Utc>,
}

/// Static profile record used for scoring candidates.
///
/// Every field defaults to empty, so a partial (or absent) record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAttributes {
    /// Most recent first
    #[serde(rename = "pastMatches", default)]
    pub past_matches: Vec<PastMatch>,
    #[serde(default)]
    pub discipline: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub seniority: String,
    #[serde(rename = "subTeams", default)]
    pub sub_teams: Vec<String>,
    #[serde(rename = "lowPreferenceNames", default)]
    pub low_preference_names: Vec<String>,
}

static EMPTY_ATTRIBUTES: PersonAttributes = PersonAttributes {
    past_matches: Vec::new(),
    discipline: String::new(),
    gender: String::new(),
    seniority: String::new(),
    sub_teams: Vec::new(),
    low_preference_names: Vec::new(),
};

impl PersonAttributes {
    /// Shared all-empty record used when a lookup has no entry
    pub fn empty() -> &'static PersonAttributes {
        &EMPTY_ATTRIBUTES
    }

    /// Most recent match timestamp with the given partner, if any
    pub fn last_matched_with(&self, partner_id: &str) -> Option<DateTime<Utc>> {
        self.past_matches
            .iter()
            .filter(|m| m.partner_id == partner_id)
            .map(|m| m.matched_at_utc)
            .max()
    }

    pub fn has_matched_with(&self, partner_id: &str) -> bool {
        self.past_matches.iter().any(|m| m.partner_id == partner_id)
    }

    /// Case-insensitive check against the low preference list
    pub fn is_low_preference(&self, display_name: &str) -> bool {
        self.low_preference_names
            .iter()
            .any(|n| eq_ignore_case(n, display_name))
    }
}

/// Unicode lowercase comparison that folds char by char instead of allocating
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Read-only attribute lookup keyed by identity id
pub trait AttributeSource {
    fn attributes(&self, identity_id: &str) -> Option<&PersonAttributes>;

    /// Lookup that falls back to the empty record
    fn attributes_or_empty(&self, identity_id: &str) -> &PersonAttributes {
        self.attributes(identity_id)
            .unwrap_or(PersonAttributes::empty())
    }
}

impl AttributeSource for HashMap<String, PersonAttributes> {
    fn attributes(&self, identity_id: &str) -> Option<&PersonAttributes> {
        self.get(identity_id)
    }
}

/// True when either side has a match record with the other
pub fn previously_matched<A: AttributeSource + ?Sized>(
    attributes: &A,
    first: &Identity,
    second: &Identity,
) -> bool {
    attributes
        .attributes_or_empty(&first.id)
        .has_matched_with(&second.id)
        || attributes
            .attributes_or_empty(&second.id)
            .has_matched_with(&first.id)
}

/// Algorithm used to produce a [`MatchResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// Zero or one person, nothing to pair
    Trivial,
    /// Shuffle and pair neighbours
    Random,
    /// Split into halves and run deferred acceptance
    StableMatching,
}

/// A single pair produced by a pairing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub first: Identity,
    pub second: Identity,
    pub previously_matched: bool,
}

/// Output of one pairing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub pairs: Vec<MatchedPair>,
    pub odd_person: Option<Identity>,
    pub strategy: PairingStrategy,
    /// Initial attempt plus retries
    pub attempts: u32,
}

impl MatchResult {
    pub fn empty() -> Self {
        Self {
            pairs: Vec::new(),
            odd_person: None,
            strategy: PairingStrategy::Trivial,
            attempts: 1,
        }
    }

    pub fn repeat_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.previously_matched).count()
    }

    pub fn has_repeats(&self) -> bool {
        self.pairs.iter().any(|p| p.previously_matched)
    }

    /// Every identity in the result, pairs first then the odd person
    pub fn participants(&self) -> impl Iterator<Item = &Identity> {
        self.pairs
            .iter()
            .flat_map(|p| [&p.first, &p.second])
            .chain(self.odd_person.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn past(partner: &str, year: i32) -> PastMatch {
        PastMatch {
            partner_id: partner.to_string(),
            matched_at_utc: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_last_matched_with_picks_most_recent() {
        let attrs = PersonAttributes {
            past_matches: vec![past("b", 2020), past("c", 2023), past("b", 2022)],
            ..Default::default()
        };

        let last = attrs.last_matched_with("b").unwrap();
        assert_eq!(last, Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap());
        assert!(attrs.last_matched_with("z").is_none());
    }

    #[test]
    fn test_low_preference_is_case_insensitive() {
        let attrs = PersonAttributes {
            low_preference_names: vec!["Dana Scully".to_string()],
            ..Default::default()
        };

        assert!(attrs.is_low_preference("dana scully"));
        assert!(attrs.is_low_preference("DANA SCULLY"));
        assert!(!attrs.is_low_preference("Fox Mulder"));
    }

    #[test]
    fn test_eq_ignore_case_folds_unicode() {
        assert!(eq_ignore_case("Engineering", "ENGINEERING"));
        assert!(eq_ignore_case("Équipe", "éQUIPE"));
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("design", "designer"));
        assert!(!eq_ignore_case("", "x"));
    }

    #[test]
    fn test_missing_attributes_default_to_empty() {
        let lookup: HashMap<String, PersonAttributes> = HashMap::new();
        let attrs = lookup.attributes_or_empty("nobody");

        assert!(attrs.past_matches.is_empty());
        assert!(attrs.discipline.is_empty());
    }

    #[test]
    fn test_previously_matched_checks_both_sides() {
        let mut lookup = HashMap::new();
        lookup.insert(
            "a".to_string(),
            PersonAttributes {
                past_matches: vec![past("b", 2021)],
                ..Default::default()
            },
        );
        let a = Identity::new("a", "A");
        let b = Identity::new("b", "B");
        let c = Identity::new("c", "C");

        assert!(previously_matched(&lookup, &a, &b));
        assert!(previously_matched(&lookup, &b, &a));
        assert!(!previously_matched(&lookup, &b, &c));
    }

    #[test]
    fn test_attributes_deserialize_with_defaults() {
        let json = r#"{"discipline": "Engineering", "pastMatches": [
            {"partnerId": "x", "matchedAtUtc": "2024-03-01T09:00:00Z"}
        ]}"#;
        let attrs: PersonAttributes = serde_json::from_str(json).unwrap();

        assert_eq!(attrs.discipline, "Engineering");
        assert_eq!(attrs.past_matches.len(), 1);
        assert!(attrs.sub_teams.is_empty());
        assert!(attrs.gender.is_empty());
    }
}
