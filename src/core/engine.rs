use crate::core::error::PairingError;
use crate::core::person::PersonArena;
use crate::core::random::RandomPairer;
use crate::core::ranking::PreferenceRanker;
use crate::core::shuffle::{SeededShuffler, Shuffler};
use crate::core::stable::StableMatcher;
use crate::models::{previously_matched, AttributeSource, Identity, MatchResult, MatchedPair, PairingStrategy};

/// Smallest roster that goes through stable matching
pub const MIN_STABLE_MATCHING_SIZE: usize = 4;

impl PairingStrategy {
    /// Algorithm used for a roster of `n` people
    pub fn for_roster_size(n: usize) -> Self {
        match n {
            0 | 1 => PairingStrategy::Trivial,
            n if n < MIN_STABLE_MATCHING_SIZE => PairingStrategy::Random,
            _ => PairingStrategy::StableMatching,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairingConfig {
    /// Extra attempts made while the result still contains a repeat pair
    pub max_retries: u32,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

/// Pairing orchestrator
///
/// # Pipeline
/// 1. Pick a strategy from the roster size
/// 2. Shuffle and split the roster into two halves (odd person set aside)
/// 3. Rank each half against the other
/// 4. Run deferred acceptance with the first half proposing
/// 5. Flag repeat pairs, retrying with a fresh shuffle if configured
#[derive(Debug, Clone, Default)]
pub struct PairingEngine {
    config: PairingConfig,
    ranker: PreferenceRanker,
    matcher: StableMatcher,
    fallback: RandomPairer,
}

impl PairingEngine {
    pub fn new(config: PairingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Pair a roster using the configured seed (OS entropy when unset)
    pub fn create_pairs<A: AttributeSource + ?Sized>(
        &self,
        identities: &[Identity],
        attributes: &A,
    ) -> Result<MatchResult, PairingError> {
        let mut shuffler = SeededShuffler::from_seed(self.config.seed);
        self.create_pairs_with(identities, attributes, &mut shuffler)
    }

    /// Pair a roster drawing every shuffle from `shuffler`
    pub fn create_pairs_with<A, S>(
        &self,
        identities: &[Identity],
        attributes: &A,
        shuffler: &mut S,
    ) -> Result<MatchResult, PairingError>
    where
        A: AttributeSource + ?Sized,
        S: Shuffler,
    {
        let strategy = PairingStrategy::for_roster_size(identities.len());

        let result = match strategy {
            PairingStrategy::Trivial => MatchResult {
                odd_person: identities.first().cloned(),
                ..MatchResult::empty()
            },
            PairingStrategy::Random => self.fallback.create_pairs(identities, shuffler),
            PairingStrategy::StableMatching => {
                self.stable_with_retries(identities, attributes, shuffler)?
            }
        };

        tracing::debug!(
            "Paired {} people with {:?}: {} pairs, {} repeats, {} attempts",
            identities.len(),
            result.strategy,
            result.pairs.len(),
            result.repeat_count(),
            result.attempts
        );

        Ok(result)
    }

    // Keeps the last attempt even when an earlier one had fewer repeats.
    fn stable_with_retries<A, S>(
        &self,
        identities: &[Identity],
        attributes: &A,
        shuffler: &mut S,
    ) -> Result<MatchResult, PairingError>
    where
        A: AttributeSource + ?Sized,
        S: Shuffler,
    {
        let total_attempts = self.config.max_retries.saturating_add(1);
        let mut attempt = 1;

        loop {
            let mut result = self.stable_attempt(identities, attributes, shuffler)?;
            result.attempts = attempt;

            if !result.has_repeats() || attempt >= total_attempts {
                return Ok(result);
            }

            tracing::debug!(
                "Attempt {}/{} produced {} repeat pairs, reshuffling",
                attempt,
                total_attempts,
                result.repeat_count()
            );
            attempt += 1;
        }
    }

    fn stable_attempt<A, S>(
        &self,
        identities: &[Identity],
        attributes: &A,
        shuffler: &mut S,
    ) -> Result<MatchResult, PairingError>
    where
        A: AttributeSource + ?Sized,
        S: Shuffler,
    {
        let mut order: Vec<usize> = (0..identities.len()).collect();
        shuffler.shuffle(&mut order);

        let odd_person = if order.len() % 2 == 1 {
            order.pop().map(|i| identities[i].clone())
        } else {
            None
        };

        // Arena index == position in the shuffled order
        let half = order.len() / 2;
        let mut arena = PersonArena::new(order.iter().copied());
        let proposers: Vec<usize> = (0..half).collect();
        let receivers: Vec<usize> = (half..order.len()).collect();

        self.assign_preferences(&mut arena, &proposers, &receivers, identities, attributes);
        self.assign_preferences(&mut arena, &receivers, &proposers, identities, attributes);

        self.matcher.run(&mut arena, &proposers)?;

        // A successful run leaves every proposer engaged
        let mut pairs = Vec::with_capacity(half);
        for &p in &proposers {
            let partner = arena
                .fiance(p)
                .expect("stable matching returned with a free proposer");
            let first = &identities[arena.get(p).identity];
            let second = &identities[arena.get(partner).identity];

            pairs.push(MatchedPair {
                first: first.clone(),
                second: second.clone(),
                previously_matched: previously_matched(attributes, first, second),
            });
        }

        Ok(MatchResult {
            pairs,
            odd_person,
            strategy: PairingStrategy::StableMatching,
            attempts: 1,
        })
    }

    fn assign_preferences<A: AttributeSource + ?Sized>(
        &self,
        arena: &mut PersonArena,
        group: &[usize],
        others: &[usize],
        identities: &[Identity],
        attributes: &A,
    ) {
        let candidates: Vec<&Identity> = others
            .iter()
            .map(|&o| &identities[arena.get(o).identity])
            .collect();

        for &person in group {
            let subject = &identities[arena.get(person).identity];
            let preferences = self
                .ranker
                .rank_positions(subject, &candidates, attributes)
                .into_iter()
                .map(|position| others[position])
                .collect();
            arena.set_preferences(person, preferences);
        }
    }
}
