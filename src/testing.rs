//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical constructors so tests don't each reinvent rosters.

#![doc(hidden)]

use crate::exclusions::ExclusionSet;
use crate::types::{Assignment, ParticipantId};

/// Create a participant id.
pub fn id(name: &str) -> ParticipantId {
    ParticipantId::new(name)
}

/// Create a roster from plain names.
pub fn ids(names: &[&str]) -> Vec<ParticipantId> {
    names.iter().map(|name| ParticipantId::new(*name)).collect()
}

/// Create an exclusion set from name pairs.
///
/// Panics on self-pairs; tests that exercise `SelfExclusion` build the set
/// by hand.
pub fn exclusions(pairs: &[(&str, &str)]) -> ExclusionSet {
    ExclusionSet::from_pairs(pairs.iter().copied()).expect("test exclusions must be well-formed")
}

/// Create an assignment list from name pairs.
pub fn assignments(pairs: &[(&str, &str)]) -> Vec<Assignment> {
    pairs
        .iter()
        .map(|(giver, receiver)| Assignment::new(*giver, *receiver))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_what_they_say() {
        let roster = ids(&["ana", "bruno"]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], id("ana"));

        let excl = exclusions(&[("ana", "bruno")]);
        assert!(excl.excludes(&id("ana"), &id("bruno")));

        let draw = assignments(&[("ana", "bruno")]);
        assert_eq!(draw[0].giver, id("ana"));
    }
}
