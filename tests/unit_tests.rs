// Unit tests for preference ranking

use chrono::{TimeZone, Utc};
use pairing_algo::core::ranking::{calculate_pair_score, ticks, PreferenceRanker, LOW_PREFERENCE_SCORE};
use pairing_algo::models::{Identity, PastMatch, PersonAttributes};
use std::collections::HashMap;

fn past_match(partner: &str, year: i32, month: u32) -> PastMatch {
    PastMatch {
        partner_id: partner.to_string(),
        matched_at_utc: Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn test_never_matched_ranks_above_past_match() {
    let mut lookup = HashMap::new();
    lookup.insert(
        "s".to_string(),
        PersonAttributes {
            past_matches: vec![past_match("x", 2024, 3)],
            ..Default::default()
        },
    );

    let subject = Identity::new("s", "Subject");
    let x = Identity::new("x", "Xavier");
    let y = Identity::new("y", "Yara");

    let ranked = PreferenceRanker::new().rank(&subject, &[&x, &y], &lookup);
    assert_eq!(ranked, vec![&y, &x]);
}

#[test]
fn test_low_preference_ranks_below_past_matches() {
    let mut lookup = HashMap::new();
    lookup.insert(
        "s".to_string(),
        PersonAttributes {
            past_matches: vec![past_match("x", 2024, 3), past_match("w", 2022, 7)],
            low_preference_names: vec!["ZOE".to_string()],
            ..Default::default()
        },
    );

    let subject = Identity::new("s", "Subject");
    let z = Identity::new("z", "Zoe");
    let x = Identity::new("x", "Xavier");
    let w = Identity::new("w", "Wren");
    let y = Identity::new("y", "Yara");

    let ranked = PreferenceRanker::new().rank(&subject, &[&z, &x, &w, &y], &lookup);
    // Fresh first, then older match, then recent match, then low preference
    assert_eq!(ranked, vec![&y, &w, &x, &z]);
}

#[test]
fn test_most_recent_of_repeated_matches_is_used() {
    let subject = PersonAttributes {
        past_matches: vec![past_match("x", 2021, 1), past_match("x", 2024, 1)],
        ..Default::default()
    };
    let empty = PersonAttributes::default();
    let x = Identity::new("x", "Xavier");

    let expected = -ticks(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(calculate_pair_score(&subject, &x, &empty), expected);
}

#[test]
fn test_other_factors_can_outweigh_sub_team() {
    let mut lookup = HashMap::new();
    lookup.insert(
        "s".to_string(),
        PersonAttributes {
            discipline: "Engineering".to_string(),
            gender: "F".to_string(),
            seniority: "Senior".to_string(),
            sub_teams: vec!["payments".to_string()],
            ..Default::default()
        },
    );
    // Different seniority, same discipline and gender: 10 + 6 + 2
    lookup.insert(
        "a".to_string(),
        PersonAttributes {
            discipline: "engineering".to_string(),
            gender: "f".to_string(),
            seniority: "Junior".to_string(),
            ..Default::default()
        },
    );
    // Shared sub-team only, same seniority: 16, still below 18
    lookup.insert(
        "b".to_string(),
        PersonAttributes {
            discipline: "Sales".to_string(),
            gender: "M".to_string(),
            seniority: "senior".to_string(),
            sub_teams: vec!["payments".to_string()],
            ..Default::default()
        },
    );

    let subject = Identity::new("s", "Subject");
    let a = Identity::new("a", "Avery");
    let b = Identity::new("b", "Blake");

    let ranked = PreferenceRanker::new().rank(&subject, &[&a, &b], &lookup);
    assert_eq!(ranked, vec![&a, &b]);
}

#[test]
fn test_scores_are_directional() {
    let subject = PersonAttributes {
        low_preference_names: vec!["Other".to_string()],
        ..Default::default()
    };
    let other = PersonAttributes::default();

    let forward = calculate_pair_score(&subject, &Identity::new("o", "Other"), &other);
    let backward = calculate_pair_score(&other, &Identity::new("s", "Subject"), &subject);

    assert_eq!(forward, LOW_PREFERENCE_SCORE);
    assert!(backward >= 0);
}
