//! Constrained Secret Santa draws: feasibility analysis and fair generation.
//!
//! This crate is the combinatorial core of a gift-exchange system: given a
//! roster of participants and a set of forbidden pairings (couples, last
//! year's matches), it decides whether a valid draw can exist at all, and
//! produces one uniformly at random when it can. Everything around it -
//! persistence, HTTP forms, email - is the caller's plumbing.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌─────────────────┐     ┌───────────────┐
//! │ exclusions.rs │────▶│ feasibility.rs  │     │  generate.rs  │
//! │ (ExclusionSet │     │ (check_feasible:│     │  (rejection   │
//! │   registry)   │     │  matching proof)│     │   sampling)   │
//! └───────────────┘     └─────────────────┘     └───────┬───────┘
//!         │                                             │
//!         └──────────────────┬──────────────────────────┘
//!                            ▼
//!                   ┌─────────────────┐
//!                   │   validate.rs   │
//!                   │   (acceptance   │
//!                   │     oracle)     │
//!                   └─────────────────┘
//! ```
//!
//! A valid draw is a derangement of the roster - every participant gives
//! once, receives once, nobody draws themselves - that additionally crosses
//! no exclusion in either direction. The three public operations:
//!
//! | Operation                | Answers                                  |
//! |--------------------------|------------------------------------------|
//! | [`check_feasible`]       | "can any valid draw exist?" (with proof) |
//! | [`generate_assignments`] | "give me one valid draw, fairly chosen"  |
//! | [`validate_assignments`] | "is this stored draw still valid?"       |
//!
//! Failure modes stay distinct on purpose: [`GenerationError::RetryExhausted`]
//! means "not found within budget", while a [`Feasibility::Infeasible`]
//! verdict is a graph-theoretic proof of impossibility naming the blocked
//! subgroup. A retry-exhausted caller should run the feasibility check before
//! deciding anything.
//!
//! # Usage
//!
//! ```ignore
//! use sorteo::{check_feasible, generate_assignments, ExclusionSet, ParticipantId};
//!
//! let roster: Vec<ParticipantId> =
//!     ["ana", "bruno", "carla", "diego"].into_iter().map(Into::into).collect();
//! let exclusions = ExclusionSet::from_pairs([("ana", "bruno")])?;
//!
//! assert!(check_feasible(&roster, &exclusions).is_feasible());
//! let draw = generate_assignments(&roster, &exclusions, 100)?;
//! ```

// Module declarations
pub mod contracts;
mod exclusions;
mod feasibility;
mod generate;
pub mod testing;
mod types;
mod validate;

// Re-exports for public API
pub use exclusions::{ExclusionError, ExclusionSet};
pub use feasibility::{check_feasible, Feasibility, InfeasibleReason, MIN_PARTICIPANTS};
pub use generate::{
    generate_assignments, generate_assignments_with, GenerationError, DEFAULT_RETRY_LIMIT,
};
pub use types::{Assignment, ParticipantId};
pub use validate::{check_assignments, validate_assignments, ConstraintViolation};
