use std::collections::VecDeque;
use crate::core::error::PairingError;
use crate::core::person::PersonArena;

/// Gale–Shapley deferred acceptance over two equal-size groups
///
/// Every proposer must hold a complete preference list over the receivers and
/// every receiver a complete list over the proposers. Engagements are written
/// into the arena; on success every proposer and every receiver is engaged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableMatcher;

impl StableMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Run deferred acceptance with `proposers` proposing.
    ///
    /// Total work is bounded by proposers × receivers since each proposal
    /// advances a cursor that never moves back.
    pub fn run(&self, arena: &mut PersonArena, proposers: &[usize]) -> Result<(), PairingError> {
        let mut free: VecDeque<usize> = proposers
            .iter()
            .copied()
            .filter(|&p| arena.fiance(p).is_none())
            .collect();

        while let Some(proposer) = free.pop_front() {
            loop {
                let Some(receiver) = arena.next_candidate(proposer) else {
                    return Err(PairingError::ProposerExhausted {
                        proposer,
                        candidates: arena.get(proposer).preferences.len(),
                    });
                };

                match arena.fiance(receiver) {
                    None => {
                        arena.engage(proposer, receiver);
                        break;
                    }
                    Some(current) if arena.prefers(receiver, proposer, current) => {
                        arena.break_engagement(receiver);
                        arena.engage(proposer, receiver);
                        free.push_back(current);
                        break;
                    }
                    Some(_) => {
                        // Rejected, try the next candidate
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Proposers 0..n, receivers n..2n
    fn arena_with(proposer_prefs: &[&[usize]], receiver_prefs: &[&[usize]]) -> PersonArena {
        let n = proposer_prefs.len();
        let mut arena = PersonArena::new(0..n * 2);
        for (p, prefs) in proposer_prefs.iter().enumerate() {
            arena.set_preferences(p, prefs.to_vec());
        }
        for (r, prefs) in receiver_prefs.iter().enumerate() {
            arena.set_preferences(n + r, prefs.to_vec());
        }
        arena
    }

    #[test]
    fn test_everyone_gets_first_choice() {
        let mut arena = arena_with(&[&[2, 3], &[3, 2]], &[&[0, 1], &[1, 0]]);
        StableMatcher::new().run(&mut arena, &[0, 1]).unwrap();

        assert_eq!(arena.fiance(0), Some(2));
        assert_eq!(arena.fiance(1), Some(3));
    }

    #[test]
    fn test_receiver_trades_up() {
        // Both proposers want receiver 2, who prefers proposer 1
        let mut arena = arena_with(&[&[2, 3], &[2, 3]], &[&[1, 0], &[0, 1]]);
        StableMatcher::new().run(&mut arena, &[0, 1]).unwrap();

        assert_eq!(arena.fiance(1), Some(2));
        assert_eq!(arena.fiance(0), Some(3));
        assert_eq!(arena.fiance(3), Some(0));
    }

    #[test]
    fn test_classic_three_by_three() {
        let mut arena = arena_with(
            &[&[3, 4, 5], &[4, 3, 5], &[3, 4, 5]],
            &[&[1, 0, 2], &[0, 1, 2], &[0, 1, 2]],
        );
        StableMatcher::new().run(&mut arena, &[0, 1, 2]).unwrap();

        assert_eq!(arena.fiance(0), Some(3));
        assert_eq!(arena.fiance(1), Some(4));
        assert_eq!(arena.fiance(2), Some(5));
    }

    #[test]
    fn test_displaced_proposers_end_up_engaged() {
        // Everyone wants receiver 3 first, so proposers 0 and 1 get bumped
        let mut arena = arena_with(
            &[&[3, 4, 5], &[3, 5, 4], &[3, 4, 5]],
            &[&[2, 1, 0], &[0, 1, 2], &[1, 0, 2]],
        );
        StableMatcher::new().run(&mut arena, &[0, 1, 2]).unwrap();

        for p in 0..3 {
            let partner = arena.fiance(p).expect("proposer left free");
            assert_eq!(arena.fiance(partner), Some(p));
        }
        assert_eq!(arena.fiance(2), Some(3));
        assert_eq!(arena.fiance(0), Some(4));
        assert_eq!(arena.fiance(1), Some(5));
    }

    #[test]
    fn test_incomplete_preferences_are_a_defect() {
        let mut arena = arena_with(&[&[2], &[2]], &[&[0, 1], &[0, 1]]);
        let err = StableMatcher::new().run(&mut arena, &[0, 1]).unwrap_err();

        assert_eq!(
            err,
            PairingError::ProposerExhausted {
                proposer: 1,
                candidates: 1
            }
        );
    }
}
