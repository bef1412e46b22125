// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode contracts for accepted draws.
//!
//! The validator is the acceptance oracle; these checks re-state its core
//! guarantees as `debug_assert!`s at the point where a draw leaves the
//! generator. They are:
//!
//! 1. **Zero-cost in release builds** (compiled out)
//! 2. **Early failure detection** during development - a bug in the shuffle
//!    or the validator trips here, next to the code that caused it
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! - **PERMUTATION**: givers and receivers are each exactly the roster
//! - **DERANGEMENT**: no participant draws themselves
//! - **EXCLUSION_FREE**: no edge crosses the exclusion set, either direction

use crate::exclusions::ExclusionSet;
use crate::types::{Assignment, ParticipantId};

/// Check that an accepted draw is a derangement of the roster.
#[inline]
pub fn check_derangement(assignments: &[Assignment], participants: &[ParticipantId]) {
    debug_assert_eq!(
        assignments.len(),
        participants.len(),
        "Contract violation: PERMUTATION - {} assignments for {} participants",
        assignments.len(),
        participants.len()
    );

    #[cfg(debug_assertions)]
    {
        let mut givers: Vec<&ParticipantId> = assignments.iter().map(|a| &a.giver).collect();
        let mut receivers: Vec<&ParticipantId> = assignments.iter().map(|a| &a.receiver).collect();
        let mut roster: Vec<&ParticipantId> = participants.iter().collect();
        givers.sort();
        receivers.sort();
        roster.sort();
        debug_assert_eq!(givers, roster, "Contract violation: PERMUTATION - givers ≠ roster");
        debug_assert_eq!(
            receivers, roster,
            "Contract violation: PERMUTATION - receivers ≠ roster"
        );
    }

    for a in assignments {
        debug_assert_ne!(
            a.giver, a.receiver,
            "Contract violation: DERANGEMENT - '{}' drew themselves",
            a.giver
        );
    }
}

/// Check that an accepted draw crosses no exclusion edge.
#[inline]
pub fn check_respects_exclusions(assignments: &[Assignment], exclusions: &ExclusionSet) {
    for a in assignments {
        debug_assert!(
            !exclusions.excludes(&a.giver, &a.receiver),
            "Contract violation: EXCLUSION_FREE - '{}' → '{}' is forbidden",
            a.giver,
            a.receiver
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assignments, ids};

    #[test]
    fn valid_draw_passes_contracts() {
        let roster = ids(&["ana", "bruno", "carla"]);
        let draw = assignments(&[("ana", "bruno"), ("bruno", "carla"), ("carla", "ana")]);
        check_derangement(&draw, &roster);
        check_respects_exclusions(&draw, &ExclusionSet::new());
    }

    #[test]
    #[should_panic(expected = "DERANGEMENT")]
    #[cfg(debug_assertions)]
    fn self_assignment_trips_the_contract() {
        let roster = ids(&["ana", "bruno", "carla"]);
        let draw = assignments(&[("ana", "ana"), ("bruno", "carla"), ("carla", "bruno")]);
        check_derangement(&draw, &roster);
    }
}
