// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural and exclusion checks over a candidate assignment set.
//!
//! This is the acceptance oracle: the generator proposes, this module
//! disposes. It is also the authority whenever a stored draw is re-audited,
//! so the rules live here once and nowhere else.
//!
//! Checks run in a fixed order and stop at the first failure, which keeps the
//! detailed report pointed at one actionable problem:
//!
//! 1. assignment count matches the roster
//! 2. every giver is a known, unrepeated roster member
//! 3. every receiver is a known, unrepeated roster member
//!    (1-3 together prove the set encodes a permutation)
//! 4. nobody draws themselves
//! 5. no giver → receiver edge crosses an exclusion, in either direction
//!
//! No randomness, no state, no I/O. Calling it twice on the same inputs gives
//! the same answer.

use crate::exclusions::ExclusionSet;
use crate::types::{Assignment, ParticipantId};
use std::collections::HashSet;
use std::fmt;

/// The first rule a candidate assignment set broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// The set does not have one assignment per roster member.
    CountMismatch { expected: usize, found: usize },
    /// A participant appears as giver more than once.
    DuplicateGiver { id: ParticipantId },
    /// A giver that is not on the roster.
    UnknownGiver { id: ParticipantId },
    /// A participant appears as receiver more than once.
    DuplicateReceiver { id: ParticipantId },
    /// A receiver that is not on the roster.
    UnknownReceiver { id: ParticipantId },
    /// A participant drew themselves.
    SelfAssignment { id: ParticipantId },
    /// A giver → receiver edge that crosses an exclusion.
    ExcludedPair {
        giver: ParticipantId,
        receiver: ParticipantId,
    },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::CountMismatch { expected, found } => {
                write!(f, "expected {} assignments, found {}", expected, found)
            }
            ConstraintViolation::DuplicateGiver { id } => {
                write!(f, "participant '{}' gives more than once", id)
            }
            ConstraintViolation::UnknownGiver { id } => {
                write!(f, "giver '{}' is not on the roster", id)
            }
            ConstraintViolation::DuplicateReceiver { id } => {
                write!(f, "participant '{}' receives more than once", id)
            }
            ConstraintViolation::UnknownReceiver { id } => {
                write!(f, "receiver '{}' is not on the roster", id)
            }
            ConstraintViolation::SelfAssignment { id } => {
                write!(f, "participant '{}' drew themselves", id)
            }
            ConstraintViolation::ExcludedPair { giver, receiver } => {
                write!(f, "'{}' → '{}' crosses an exclusion", giver, receiver)
            }
        }
    }
}

impl std::error::Error for ConstraintViolation {}

/// Check a candidate assignment set, reporting the first violated rule.
pub fn check_assignments(
    assignments: &[Assignment],
    participants: &[ParticipantId],
    exclusions: &ExclusionSet,
) -> Result<(), ConstraintViolation> {
    if assignments.len() != participants.len() {
        return Err(ConstraintViolation::CountMismatch {
            expected: participants.len(),
            found: assignments.len(),
        });
    }

    let roster: HashSet<&ParticipantId> = participants.iter().collect();

    let mut givers: HashSet<&ParticipantId> = HashSet::with_capacity(assignments.len());
    for a in assignments {
        if !roster.contains(&a.giver) {
            return Err(ConstraintViolation::UnknownGiver { id: a.giver.clone() });
        }
        if !givers.insert(&a.giver) {
            return Err(ConstraintViolation::DuplicateGiver { id: a.giver.clone() });
        }
    }

    let mut receivers: HashSet<&ParticipantId> = HashSet::with_capacity(assignments.len());
    for a in assignments {
        if !roster.contains(&a.receiver) {
            return Err(ConstraintViolation::UnknownReceiver {
                id: a.receiver.clone(),
            });
        }
        if !receivers.insert(&a.receiver) {
            return Err(ConstraintViolation::DuplicateReceiver {
                id: a.receiver.clone(),
            });
        }
    }

    for a in assignments {
        if a.giver == a.receiver {
            return Err(ConstraintViolation::SelfAssignment { id: a.giver.clone() });
        }
    }

    for a in assignments {
        if exclusions.excludes(&a.giver, &a.receiver) {
            return Err(ConstraintViolation::ExcludedPair {
                giver: a.giver.clone(),
                receiver: a.receiver.clone(),
            });
        }
    }

    Ok(())
}

/// Boolean form of [`check_assignments`]. This is what the generator calls.
pub fn validate_assignments(
    assignments: &[Assignment],
    participants: &[ParticipantId],
    exclusions: &ExclusionSet,
) -> bool {
    check_assignments(assignments, participants, exclusions).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assignments, id, ids};

    fn roster() -> Vec<ParticipantId> {
        ids(&["ana", "bruno", "carla"])
    }

    #[test]
    fn accepts_a_valid_three_cycle() {
        let draw = assignments(&[("ana", "bruno"), ("bruno", "carla"), ("carla", "ana")]);
        assert_eq!(
            check_assignments(&draw, &roster(), &ExclusionSet::new()),
            Ok(())
        );
    }

    #[test]
    fn rejects_wrong_count_first() {
        let draw = assignments(&[("ana", "bruno")]);
        assert_eq!(
            check_assignments(&draw, &roster(), &ExclusionSet::new()),
            Err(ConstraintViolation::CountMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_duplicate_giver() {
        let draw = assignments(&[("ana", "bruno"), ("ana", "carla"), ("carla", "ana")]);
        assert_eq!(
            check_assignments(&draw, &roster(), &ExclusionSet::new()),
            Err(ConstraintViolation::DuplicateGiver { id: id("ana") })
        );
    }

    #[test]
    fn rejects_unknown_giver() {
        let draw = assignments(&[("diego", "bruno"), ("bruno", "carla"), ("carla", "ana")]);
        assert_eq!(
            check_assignments(&draw, &roster(), &ExclusionSet::new()),
            Err(ConstraintViolation::UnknownGiver { id: id("diego") })
        );
    }

    #[test]
    fn rejects_duplicate_receiver() {
        let draw = assignments(&[("ana", "bruno"), ("bruno", "bruno"), ("carla", "ana")]);
        assert_eq!(
            check_assignments(&draw, &roster(), &ExclusionSet::new()),
            Err(ConstraintViolation::DuplicateReceiver { id: id("bruno") })
        );
    }

    #[test]
    fn rejects_self_assignment() {
        // Still a permutation (ana/bruno swap, carla fixed), so the
        // self-pair rule is the one that fires.
        let draw = assignments(&[("ana", "bruno"), ("bruno", "ana"), ("carla", "carla")]);
        assert_eq!(
            check_assignments(&draw, &roster(), &ExclusionSet::new()),
            Err(ConstraintViolation::SelfAssignment { id: id("carla") })
        );
    }

    #[test]
    fn rejects_excluded_pair_in_both_directions() {
        let exclusions = ExclusionSet::from_pairs([("bruno", "ana")]).unwrap();
        let draw = assignments(&[("ana", "bruno"), ("bruno", "carla"), ("carla", "ana")]);
        assert_eq!(
            check_assignments(&draw, &roster(), &exclusions),
            Err(ConstraintViolation::ExcludedPair {
                giver: id("ana"),
                receiver: id("bruno"),
            })
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let draw = assignments(&[("ana", "bruno"), ("bruno", "carla"), ("carla", "ana")]);
        let roster = roster();
        let exclusions = ExclusionSet::new();
        let first = validate_assignments(&draw, &roster, &exclusions);
        let second = validate_assignments(&draw, &roster, &exclusions);
        assert_eq!(first, second);
        assert!(first);
    }
}
