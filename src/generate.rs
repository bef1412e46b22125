// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Randomized draw generation by rejection sampling.
//!
//! Shuffle the roster uniformly (Fisher-Yates, every permutation equally
//! likely), pair position `i`'s giver with the shuffled receiver at `i`, and
//! accept iff the validator accepts. Discard and resample otherwise.
//!
//! At the sizes draws actually have - a handful to a few dozen people - and
//! for exclusion sets that leave the draw feasible, rejection is rare enough
//! that this terminates quickly and stays exactly uniform over the valid
//! derangements, which constructive algorithms have a hard time matching.
//!
//! Retries are bounded. Hitting the bound yields [`GenerationError::RetryExhausted`],
//! which deliberately does NOT mean "impossible": it means "not found within
//! budget". Run [`crate::check_feasible`] to tell a pathological exclusion set
//! apart from unlucky sampling. Conflating the two behind one generic failure
//! is the trap this split exists to avoid.
//!
//! Each call is a pure function of its inputs plus an entropy source: no
//! shared state, nothing retained, safe to run for concurrent draws as long
//! as every call brings its own RNG.

use crate::contracts;
use crate::exclusions::ExclusionSet;
use crate::feasibility::{first_duplicate, MIN_PARTICIPANTS};
use crate::types::{Assignment, ParticipantId};
use crate::validate::validate_assignments;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Retry ceiling used by [`generate_assignments`] callers that have no reason
/// to pick their own.
pub const DEFAULT_RETRY_LIMIT: u32 = 100;

/// Why a generation call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The roster is below [`MIN_PARTICIPANTS`].
    InsufficientParticipants { found: usize, required: usize },
    /// The same id appears more than once on the roster.
    DuplicateParticipant { id: ParticipantId },
    /// No valid draw found within the retry budget. A solution may still
    /// exist; feasibility analysis settles it.
    RetryExhausted { attempts: u32 },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InsufficientParticipants { found, required } => {
                write!(
                    f,
                    "a draw needs at least {} participants, found {}",
                    required, found
                )
            }
            GenerationError::DuplicateParticipant { id } => {
                write!(f, "participant '{}' appears more than once on the roster", id)
            }
            GenerationError::RetryExhausted { attempts } => {
                write!(
                    f,
                    "no valid draw found after {} attempts; run a feasibility check to see \
                     whether the exclusions make this draw impossible, or raise the retry limit",
                    attempts
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Generate one valid draw using thread-local entropy.
///
/// See [`generate_assignments_with`] for the RNG-explicit form this delegates
/// to (and which tests and `--seed` use).
pub fn generate_assignments(
    participants: &[ParticipantId],
    exclusions: &ExclusionSet,
    retry_limit: u32,
) -> Result<Vec<Assignment>, GenerationError> {
    generate_assignments_with(&mut rand::thread_rng(), participants, exclusions, retry_limit)
}

/// Generate one valid draw, sampling from the given RNG.
///
/// The result is drawn approximately uniformly from the valid derangements of
/// `participants` under `exclusions`. The RNG is the only entropy source, so
/// a seeded RNG makes the whole draw reproducible.
pub fn generate_assignments_with<R: Rng + ?Sized>(
    rng: &mut R,
    participants: &[ParticipantId],
    exclusions: &ExclusionSet,
    retry_limit: u32,
) -> Result<Vec<Assignment>, GenerationError> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(GenerationError::InsufficientParticipants {
            found: participants.len(),
            required: MIN_PARTICIPANTS,
        });
    }
    if let Some(dup) = first_duplicate(participants) {
        return Err(GenerationError::DuplicateParticipant { id: dup.clone() });
    }

    let mut receivers: Vec<ParticipantId> = participants.to_vec();

    for _ in 0..retry_limit {
        receivers.shuffle(rng);

        let candidate: Vec<Assignment> = participants
            .iter()
            .zip(receivers.iter())
            .map(|(giver, receiver)| Assignment::new(giver.clone(), receiver.clone()))
            .collect();

        if validate_assignments(&candidate, participants, exclusions) {
            contracts::check_derangement(&candidate, participants);
            contracts::check_respects_exclusions(&candidate, exclusions);
            return Ok(candidate);
        }
    }

    Err(GenerationError::RetryExhausted {
        attempts: retry_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{exclusions, id, ids};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn two_participants_are_insufficient() {
        let roster = ids(&["ana", "bruno"]);
        assert_eq!(
            generate_assignments(&roster, &ExclusionSet::new(), DEFAULT_RETRY_LIMIT),
            Err(GenerationError::InsufficientParticipants {
                found: 2,
                required: MIN_PARTICIPANTS,
            })
        );
    }

    #[test]
    fn duplicate_roster_ids_are_rejected() {
        let roster = ids(&["ana", "bruno", "ana"]);
        assert_eq!(
            generate_assignments(&roster, &ExclusionSet::new(), DEFAULT_RETRY_LIMIT),
            Err(GenerationError::DuplicateParticipant { id: id("ana") })
        );
    }

    #[test]
    fn three_participants_always_draw_a_cycle() {
        // With three people the only derangements are the two 3-cycles, so
        // whatever comes back, following giver → receiver twice must not
        // return to the start in one hop.
        let roster = ids(&["ana", "bruno", "carla"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let draw =
                generate_assignments_with(&mut rng, &roster, &ExclusionSet::new(), 1000).unwrap();
            for a in &draw {
                assert_ne!(a.giver, a.receiver);
                let next = draw.iter().find(|b| b.giver == a.receiver).unwrap();
                assert_ne!(next.receiver, a.giver, "two-cycle in a 3-person draw");
            }
        }
    }

    #[test]
    fn exclusions_are_respected() {
        let roster = ids(&["ana", "bruno", "carla", "diego"]);
        let excl = exclusions(&[("ana", "bruno")]);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let draw = generate_assignments_with(&mut rng, &roster, &excl, 1000).unwrap();
            for a in &draw {
                assert!(
                    !(a.giver == id("ana") && a.receiver == id("bruno")),
                    "excluded edge ana → bruno appeared"
                );
                assert!(
                    !(a.giver == id("bruno") && a.receiver == id("ana")),
                    "excluded edge bruno → ana appeared"
                );
            }
        }
    }

    #[test]
    fn infeasible_exclusions_exhaust_the_budget() {
        let roster = ids(&["ana", "bruno", "carla"]);
        let excl = exclusions(&[("ana", "bruno"), ("ana", "carla")]);
        assert_eq!(
            generate_assignments(&roster, &excl, 25),
            Err(GenerationError::RetryExhausted { attempts: 25 })
        );
    }

    #[test]
    fn same_seed_same_draw() {
        let roster = ids(&["ana", "bruno", "carla", "diego", "elena"]);
        let excl = exclusions(&[("ana", "bruno")]);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let draw_a = generate_assignments_with(&mut rng_a, &roster, &excl, 100).unwrap();
        let draw_b = generate_assignments_with(&mut rng_b, &roster, &excl, 100).unwrap();
        assert_eq!(draw_a, draw_b);
    }

    #[test]
    fn zero_retry_budget_always_exhausts() {
        let roster = ids(&["ana", "bruno", "carla"]);
        assert_eq!(
            generate_assignments(&roster, &ExclusionSet::new(), 0),
            Err(GenerationError::RetryExhausted { attempts: 0 })
        );
    }
}
