// Read-only checks on wildcard usage.

use wildfst_core::{Label, WildcardLabels};
use wildfst_fst::{StateId, VectorFst};

/// Where an offending arc sits: source state and index in its arc list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcLocation {
    pub state: StateId,
    pub position: usize,
    pub ilabel: Label,
    pub olabel: Label,
}

/// Every arc pairing OTHER_ID with anything other than OTHER_ID.
///
/// Finished networks must yield an empty list.
pub fn disallowed_pairs(fst: &VectorFst, labels: &WildcardLabels) -> Vec<ArcLocation> {
    let mut found = Vec::new();
    for state in fst.states() {
        for (position, arc) in fst.arcs(state).iter().enumerate() {
            if labels.is_disallowed_pair(arc.ilabel, arc.olabel) {
                found.push(ArcLocation {
                    state,
                    position,
                    ilabel: arc.ilabel,
                    olabel: arc.olabel,
                });
            }
        }
    }
    found
}

/// Whether any arc carries a wildcard on either side.
pub fn contains_wildcard(fst: &VectorFst, labels: &WildcardLabels) -> bool {
    fst.states().any(|s| {
        fst.arcs(s)
            .iter()
            .any(|a| labels.is_wildcard(a.ilabel) || labels.is_wildcard(a.olabel))
    })
}

/// An acceptor in the wildcard sense: every arc maps a label to itself, and
/// none is OTHER_NONID:OTHER_NONID (which would map a symbol to a different
/// one).
pub fn is_semantic_acceptor(fst: &VectorFst, labels: &WildcardLabels) -> bool {
    fst.is_acceptor()
        && fst.states().all(|s| {
            fst.arcs(s)
                .iter()
                .all(|a| a.ilabel != labels.other_nonid)
        })
}
