// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core identity and assignment types.
//!
//! The engine works on opaque participant identities. Display names, email
//! addresses, wishlists - all of that belongs to the caller; the only thing an
//! id has to do here is be unique within one draw and cheap to compare.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Assignment set**: a full draw is a `Vec<Assignment>` forming a
//!   derangement of the roster - every participant gives exactly once,
//!   receives exactly once, and never draws themselves. `validate` is the
//!   authority on this; nothing else re-derives it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identity of a draw participant.
///
/// Compared, hashed, and ordered by its underlying string. `Ord` exists so
/// diagnostic output (e.g. a blocked subgroup) can be reported in a
/// deterministic order regardless of hash-map iteration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One directed giver → receiver edge of a finished draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
}

impl Assignment {
    pub fn new(giver: impl Into<ParticipantId>, receiver: impl Into<ParticipantId>) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.giver, self.receiver)
    }
}
