// Wildcard removal.

use hashbrown::HashSet;
use wildfst_core::{Alphabet, Label, WildcardLabels};
use wildfst_fst::{FstError, VectorFst};

use crate::expand::expand_other_arcs;

/// Delete every arc carrying a wildcard on either side, then trim states
/// that no longer lie on a successful path.
///
/// Afterwards the network denotes exactly its concrete-symbol relation. A
/// network whose every successful path used a wildcard ends up with zero
/// states.
pub fn delete_other_arcs(fst: &mut VectorFst, labels: &WildcardLabels) {
    let removed = fst.prune_arcs(|arc| labels.is_wildcard(arc.ilabel) || labels.is_wildcard(arc.olabel));
    tracing::debug!(removed, states = fst.num_states(), "deleted wildcard arcs");
}

/// Close the network over `alphabet`: expand every wildcard arc for its
/// symbols, then delete the wildcard arcs.
///
/// Returns the symbols of `alphabet`, as [`expand_other_arcs`] does.
pub fn close_alphabet(
    fst: &mut VectorFst,
    alphabet: &Alphabet,
    labels: &WildcardLabels,
) -> Result<HashSet<Label>, FstError> {
    let symbols = expand_other_arcs(fst, alphabet, labels)?;
    delete_other_arcs(fst, labels);
    Ok(symbols)
}
