use chrono::{DateTime, Utc};
use crate::models::{eq_ignore_case, AttributeSource, Identity, PersonAttributes};

/// Bonus when subject and candidate share any sub-team
pub const SUB_TEAM_WEIGHT: i64 = 16;
/// Bonus when seniority differs
pub const SENIORITY_WEIGHT: i64 = 10;
/// Bonus when discipline matches
pub const DISCIPLINE_WEIGHT: i64 = 6;
/// Bonus when gender matches
pub const GENDER_WEIGHT: i64 = 2;

/// Score given to a candidate on the subject's low preference list
pub const LOW_PREFERENCE_SCORE: i64 = i64::MIN;

// Seconds between 0001-01-01T00:00:00Z and the Unix epoch
const EPOCH_OFFSET_SECS: i64 = 62_135_596_800;
const TICKS_PER_SECOND: i64 = 10_000_000;

/// 100-nanosecond intervals since 0001-01-01T00:00:00Z
pub fn ticks(timestamp: DateTime<Utc>) -> i64 {
    timestamp
        .timestamp()
        .saturating_add(EPOCH_OFFSET_SECS)
        .saturating_mul(TICKS_PER_SECOND)
        .saturating_add(i64::from(timestamp.timestamp_subsec_nanos() / 100))
}

/// Calculate how much `subject` wants to be paired with `candidate`
///
/// Scoring rules, first match wins:
/// 1. candidate on the low preference list  -> `i64::MIN`
/// 2. past match with candidate             -> `-ticks(most recent match)`
/// 3. otherwise the sum of
///    sub-team overlap  +16
///    seniority differs +10
///    discipline match   +6
///    gender match       +2
///
/// The score is directional: `score(a, b)` need not equal `score(b, a)`.
pub fn calculate_pair_score(
    subject: &PersonAttributes,
    candidate: &Identity,
    candidate_attrs: &PersonAttributes,
) -> i64 {
    if subject.is_low_preference(&candidate.display_name) {
        return LOW_PREFERENCE_SCORE;
    }

    if let Some(matched_at) = subject.last_matched_with(&candidate.id) {
        // Any past match stays strictly below a fresh candidate's zero floor,
        // and above the low preference sentinel.
        return -ticks(matched_at).clamp(1, i64::MAX);
    }

    let mut score = 0;

    if subject
        .sub_teams
        .iter()
        .any(|team| candidate_attrs.sub_teams.contains(team))
    {
        score += SUB_TEAM_WEIGHT;
    }

    if !eq_ignore_case(&subject.seniority, &candidate_attrs.seniority) {
        score += SENIORITY_WEIGHT;
    }

    if eq_ignore_case(&subject.discipline, &candidate_attrs.discipline) {
        score += DISCIPLINE_WEIGHT;
    }

    if eq_ignore_case(&subject.gender, &candidate_attrs.gender) {
        score += GENDER_WEIGHT;
    }

    score
}

/// Orders a candidate group for one subject, best first
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceRanker;

impl PreferenceRanker {
    pub fn new() -> Self {
        Self
    }

    /// Positions into `candidates`, best first.
    ///
    /// Ties keep input order.
    pub fn rank_positions<A: AttributeSource + ?Sized>(
        &self,
        subject: &Identity,
        candidates: &[&Identity],
        attributes: &A,
    ) -> Vec<usize> {
        let subject_attrs = attributes.attributes_or_empty(&subject.id);

        let scores: Vec<i64> = candidates
            .iter()
            .map(|candidate| {
                calculate_pair_score(
                    subject_attrs,
                    candidate,
                    attributes.attributes_or_empty(&candidate.id),
                )
            })
            .collect();

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        // Vec::sort_by is stable
        order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
        order
    }

    /// The candidates themselves, best first
    pub fn rank<'a, A: AttributeSource + ?Sized>(
        &self,
        subject: &Identity,
        candidates: &[&'a Identity],
        attributes: &A,
    ) -> Vec<&'a Identity> {
        self.rank_positions(subject, candidates, attributes)
            .into_iter()
            .map(|position| candidates[position])
            .collect()
    }
}
