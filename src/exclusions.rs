// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The working set of forbidden pairings for one draw.
//!
//! An exclusion is an unordered fact: "these two must not draw each other, in
//! either direction". `{a, b}` and `{b, a}` are the same fact, so insertion
//! normalizes and duplicates collapse silently. The set is the only mutable
//! structure in the engine and is meant to be owned by a single draw request -
//! concurrent draws each build their own.

use crate::types::ParticipantId;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Error raised when an exclusion cannot be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionError {
    /// An exclusion must name two distinct participants.
    SelfExclusion { id: ParticipantId },
}

impl fmt::Display for ExclusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionError::SelfExclusion { id } => {
                write!(f, "participant '{}' cannot be excluded from themselves", id)
            }
        }
    }
}

impl std::error::Error for ExclusionError {}

/// Unordered forbidden pairs with O(1) membership and degree queries.
///
/// Internally a symmetric adjacency map: each participant maps to the set of
/// partners they are excluded from. Both directions are stored so `excludes`
/// and `degree` are single lookups.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    partners: HashMap<ParticipantId, HashSet<ParticipantId>>,
    len: usize,
}

impl ExclusionSet {
    /// An empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list of pairs, collapsing duplicates.
    ///
    /// This is the bridge from the list-shaped caller interface: storage
    /// layers hand over `(a, b)` rows, order and multiplicity irrelevant.
    /// Fails on the first self-pair encountered.
    pub fn from_pairs<I, A, B>(pairs: I) -> Result<Self, ExclusionError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<ParticipantId>,
        B: Into<ParticipantId>,
    {
        let mut set = Self::new();
        for (a, b) in pairs {
            set.add(a.into(), b.into())?;
        }
        Ok(set)
    }

    /// Record that `a` and `b` must not draw each other.
    ///
    /// Re-adding an existing pair (in either order) is a no-op, not an error.
    pub fn add(&mut self, a: ParticipantId, b: ParticipantId) -> Result<(), ExclusionError> {
        if a == b {
            return Err(ExclusionError::SelfExclusion { id: a });
        }
        let inserted = self.partners.entry(a.clone()).or_default().insert(b.clone());
        if inserted {
            self.partners.entry(b).or_default().insert(a);
            self.len += 1;
        }
        Ok(())
    }

    /// Remove the exclusion between `a` and `b`. No-op if absent.
    pub fn remove(&mut self, a: &ParticipantId, b: &ParticipantId) {
        let removed = match self.partners.get_mut(a) {
            Some(set) => set.remove(b),
            None => false,
        };
        if removed {
            if let Some(set) = self.partners.get_mut(b) {
                set.remove(a);
            }
            self.len -= 1;
        }
    }

    /// Are `a` and `b` forbidden from drawing each other? Symmetric.
    pub fn excludes(&self, a: &ParticipantId, b: &ParticipantId) -> bool {
        self.partners.get(a).is_some_and(|set| set.contains(b))
    }

    /// Number of distinct partners `p` is excluded from.
    pub fn degree(&self, p: &ParticipantId) -> usize {
        self.partners.get(p).map_or(0, HashSet::len)
    }

    /// Number of distinct exclusion pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the stored pairs, one entry per unordered fact.
    ///
    /// Pair orientation follows id order; overall iteration order is
    /// unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &ParticipantId)> {
        self.partners
            .iter()
            .flat_map(|(a, set)| set.iter().map(move |b| (a, b)))
            .filter(|(a, b)| a < b)
    }
}
