//! Wildcard-symbol rewrite passes.
//!
//! Two wildcard labels let a rule network talk about "any symbol not
//! otherwise mentioned": OTHER_ID (output equals input) and OTHER_NONID
//! (output unconstrained). Generic network operations know nothing about
//! that distinction, so these passes run around them to keep it intact.
//!
//! - [`compose`] -- demote OTHER_ID before composition, repair after it
//! - [`expand`] -- spell wildcard arcs out over an explicit alphabet
//! - [`strip`] -- delete every wildcard arc (sink and trim)
//! - [`project`] -- restore acceptor symmetry after a projection
//! - [`epsilon`] -- wildcard-aware replacement of one side by epsilon
//! - [`altrule`] -- flatten compiled alternation rules into direct arcs
//! - [`inspect`] -- invariant audit and acceptor tests
//!
//! Every pass mutates a [`VectorFst`](wildfst_fst::VectorFst) in place and
//! takes the wildcard ids as an explicit [`WildcardLabels`] argument.

pub mod altrule;
pub mod compose;
pub mod epsilon;
pub mod expand;
pub mod inspect;
pub mod project;
pub mod strip;

pub use altrule::synchronize_alt_rule;
pub use compose::{demote_input_other, demote_output_other, restore_after_compose};
pub use epsilon::{change_input_to_epsilon, change_output_to_epsilon};
pub use expand::expand_other_arcs;
pub use inspect::{ArcLocation, contains_wildcard, disallowed_pairs, is_semantic_acceptor};
pub use project::{
    ProjectionSide, normalize_input_projection, normalize_output_projection, normalize_projection,
};
pub use strip::{close_alphabet, delete_other_arcs};

pub use wildfst_core::{Alphabet, RuleLabels, WildcardLabels};
pub use wildfst_fst::FstError;

#[cfg(test)]
mod test_support;
