// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Draw feasibility analysis via bipartite matching.
//!
//! Per-participant degree checks ("someone is excluded from everyone else")
//! only catch the trivial dead end. They miss deadlocks that are global: a
//! triangle of mutual exclusions whose members all still have partners left,
//! or a subgroup whose allowed receivers collapse onto the same few people.
//!
//! The reliable test: build the bipartite graph with givers on one side and
//! receivers on the other, drop every `(p, p)` edge and every edge crossing an
//! exclusion, and ask for a perfect matching. One exists iff some valid draw
//! exists. Which draw gets picked is the generator's business, not ours.
//!
//! Matching is found with augmenting paths (Kuhn's algorithm), O(V·E). Cheap
//! enough to run on every exclusion edit, long before anyone spends retry
//! budget on a roster that can never work.

use crate::exclusions::ExclusionSet;
use crate::types::ParticipantId;
use std::collections::HashSet;
use std::fmt;

/// Minimum roster size for a meaningful draw.
///
/// Two participants would be forced to draw each other - a valid derangement,
/// but with zero surprise. Whether to allow that is a product decision, and
/// the engine takes the conservative side; this constant is the single place
/// that policy lives.
pub const MIN_PARTICIPANTS: usize = 3;

/// Outcome of analyzing a roster and its exclusions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feasibility {
    /// At least one valid draw exists.
    Feasible,
    /// No valid draw can exist, with proof.
    Infeasible(InfeasibleReason),
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible)
    }
}

/// Why no valid draw can exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// The roster is below [`MIN_PARTICIPANTS`].
    TooFewParticipants { found: usize, required: usize },
    /// The same id appears more than once on the roster.
    DuplicateParticipant { id: ParticipantId },
    /// No perfect matching: `blocked` is an over-constrained subgroup with
    /// fewer distinct allowed receivers than members. Removing an exclusion
    /// involving one of them is the way out.
    NoPerfectMatching { blocked: Vec<ParticipantId> },
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfeasibleReason::TooFewParticipants { found, required } => {
                write!(
                    f,
                    "a draw needs at least {} participants, found {}",
                    required, found
                )
            }
            InfeasibleReason::DuplicateParticipant { id } => {
                write!(f, "participant '{}' appears more than once on the roster", id)
            }
            InfeasibleReason::NoPerfectMatching { blocked } => {
                let names: Vec<&str> = blocked.iter().map(ParticipantId::as_str).collect();
                write!(
                    f,
                    "no valid draw exists: {} have fewer allowed receivers than members; \
                     remove an exclusion involving one of them",
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for InfeasibleReason {}

/// Decide whether any valid draw exists for this roster and exclusion set.
///
/// Polynomial in the roster size, no randomness, no state. Safe to call on
/// every exclusion edit, not just right before generation.
pub fn check_feasible(participants: &[ParticipantId], exclusions: &ExclusionSet) -> Feasibility {
    if participants.len() < MIN_PARTICIPANTS {
        return Feasibility::Infeasible(InfeasibleReason::TooFewParticipants {
            found: participants.len(),
            required: MIN_PARTICIPANTS,
        });
    }
    if let Some(dup) = first_duplicate(participants) {
        return Feasibility::Infeasible(InfeasibleReason::DuplicateParticipant {
            id: dup.clone(),
        });
    }

    let adjacency = allowed_receivers(participants, exclusions);
    match perfect_matching(&adjacency) {
        Ok(()) => Feasibility::Feasible,
        Err(blocked) => {
            let mut blocked: Vec<ParticipantId> = blocked
                .into_iter()
                .map(|i| participants[i].clone())
                .collect();
            blocked.sort();
            Feasibility::Infeasible(InfeasibleReason::NoPerfectMatching { blocked })
        }
    }
}

/// First id that appears twice on the roster, in roster order.
pub(crate) fn first_duplicate(participants: &[ParticipantId]) -> Option<&ParticipantId> {
    let mut seen: HashSet<&ParticipantId> = HashSet::with_capacity(participants.len());
    participants.iter().find(|&p| !seen.insert(p))
}

/// Adjacency by index: `adjacency[i]` lists the receivers giver `i` may draw.
fn allowed_receivers(participants: &[ParticipantId], exclusions: &ExclusionSet) -> Vec<Vec<usize>> {
    participants
        .iter()
        .map(|giver| {
            participants
                .iter()
                .enumerate()
                .filter(|&(_, receiver)| receiver != giver && !exclusions.excludes(giver, receiver))
                .map(|(j, _)| j)
                .collect()
        })
        .collect()
}

/// Find a perfect matching over the giver → receiver graph, or return a
/// witness of impossibility.
///
/// The witness is a Hall violator: when no augmenting path exists for giver
/// `u`, then `u` together with the givers currently matched into the
/// receivers reachable from `u` forms a set with fewer distinct allowed
/// receivers than members.
fn perfect_matching(adjacency: &[Vec<usize>]) -> Result<(), Vec<usize>> {
    let n = adjacency.len();
    // matched_giver[r] = giver currently matched to receiver r
    let mut matched_giver: Vec<Option<usize>> = vec![None; n];

    for giver in 0..n {
        let mut visited = vec![false; n];
        if !augment(giver, adjacency, &mut visited, &mut matched_giver) {
            let mut blocked: Vec<usize> = vec![giver];
            for (receiver, seen) in visited.iter().enumerate() {
                // Every visited receiver is matched: an unmatched one would
                // have ended the search with an augmenting path.
                if *seen {
                    if let Some(owner) = matched_giver[receiver] {
                        blocked.push(owner);
                    }
                }
            }
            blocked.sort_unstable();
            blocked.dedup();
            return Err(blocked);
        }
    }
    Ok(())
}

/// Try to match `giver`, displacing earlier matches along an augmenting path.
fn augment(
    giver: usize,
    adjacency: &[Vec<usize>],
    visited: &mut [bool],
    matched_giver: &mut [Option<usize>],
) -> bool {
    for &receiver in &adjacency[giver] {
        if visited[receiver] {
            continue;
        }
        visited[receiver] = true;
        let displaced = matched_giver[receiver];
        let claimed = match displaced {
            None => true,
            Some(owner) => augment(owner, adjacency, visited, matched_giver),
        };
        if claimed {
            matched_giver[receiver] = Some(giver);
            return true;
        }
    }
    false
}
