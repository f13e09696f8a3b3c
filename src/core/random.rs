use crate::core::shuffle::Shuffler;
use crate::models::{Identity, MatchResult, MatchedPair, PairingStrategy};

/// Fallback for groups too small for stable matching.
///
/// Shuffles the roster and pairs neighbours `(0,1), (2,3), ...`. Attributes
/// are never consulted, so no pair is reported as previously matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPairer;

impl RandomPairer {
    pub fn new() -> Self {
        Self
    }

    pub fn create_pairs<S: Shuffler>(&self, identities: &[Identity], shuffler: &mut S) -> MatchResult {
        let mut order: Vec<&Identity> = identities.iter().collect();
        shuffler.shuffle(&mut order);

        let mut chunks = order.chunks_exact(2);
        let pairs = chunks
            .by_ref()
            .map(|pair| MatchedPair {
                first: pair[0].clone(),
                second: pair[1].clone(),
                previously_matched: false,
            })
            .collect();
        let odd_person = chunks.remainder().first().map(|&p| p.clone());

        MatchResult {
            pairs,
            odd_person,
            strategy: PairingStrategy::Random,
            attempts: 1,
        }
    }
}
