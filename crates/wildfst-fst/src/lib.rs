//! Mutable weighted finite-state transducer.
//!
//! This crate provides the in-memory network the wildcard rewrite passes
//! operate on, together with the few generic primitives those passes need.
//!
//! # Architecture
//!
//! - [`arc`] -- Arc layout (labels, weight, destination)
//! - [`vector`] -- `VectorFst`: dense states, per-state arc vectors
//! - [`connect`] -- Reachability trim and sink-and-trim pruning
//! - [`matcher`] -- On-demand per-state input-label index
//! - [`stage`] -- Deferred arc insertion for scan-then-apply passes

pub mod arc;
pub mod connect;
pub mod matcher;
pub mod stage;
pub mod vector;

pub use arc::Arc;
pub use matcher::InputMatcher;
pub use stage::{ArcStage, StagedArc};
pub use vector::VectorFst;

/// Dense state identifier.
pub type StateId = u32;

/// Error type for network construction and staged mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FstError {
    #[error("state {state} out of range: network has {num_states} states")]
    StateOutOfRange { state: StateId, num_states: usize },
    #[error("failed to reserve room for {requested} staged arcs")]
    AllocationFailed { requested: usize },
}
