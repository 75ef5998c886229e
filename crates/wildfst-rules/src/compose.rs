// Wildcard handling around composition.
//
// Composing A with B matches B's input labels against A's output labels by
// plain equality. OTHER_ID is a binding ("this symbol, passed through"), not
// a constant, so two OTHER_IDs meeting at the seam must not be fused. Before
// composing, OTHER_ID is demoted to OTHER_NONID on the seam side of each
// operand; afterwards the result is repaired so that the invariant on
// OTHER_ID holds again.

use wildfst_core::{Label, WildcardLabels};
use wildfst_fst::{ArcStage, FstError, StagedArc, VectorFst};

/// Demote OTHER_ID to OTHER_NONID on the input side.
///
/// Applied to the right-hand operand of a composition.
pub fn demote_input_other(fst: &mut VectorFst, labels: &WildcardLabels) {
    let mut demoted = 0usize;
    for s in fst.states() {
        for arc in fst.arcs_mut(s) {
            if arc.ilabel == labels.other_id {
                arc.ilabel = labels.other_nonid;
                demoted += 1;
            }
        }
    }
    tracing::debug!(demoted, "demoted input-side OTHER_ID");
}

/// Demote OTHER_ID to OTHER_NONID on the output side.
///
/// Applied to the left-hand operand of a composition.
pub fn demote_output_other(fst: &mut VectorFst, labels: &WildcardLabels) {
    let mut demoted = 0usize;
    for s in fst.states() {
        for arc in fst.arcs_mut(s) {
            if arc.olabel == labels.other_id {
                arc.olabel = labels.other_nonid;
                demoted += 1;
            }
        }
    }
    tracing::debug!(demoted, "demoted output-side OTHER_ID");
}

/// What the post-composition repair does with one label pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeamRepair {
    Keep,
    Relabel { ilabel: Label, olabel: Label },
    /// Keep the arc and add a parallel `OTHER_ID:OTHER_ID` twin.
    AddIdentityTwin,
}

/// The repair table, first match wins:
///
/// 1. `OTHER_ID:o`, o != OTHER_ID -> `OTHER_NONID:o`
/// 2. `OTHER_NONID:OTHER_ID` -> `OTHER_NONID:OTHER_NONID`
/// 3. `OTHER_NONID:OTHER_NONID` -> kept, plus an `OTHER_ID:OTHER_ID` twin
/// 4. `c:OTHER_ID`, c not a wildcard -> `c:OTHER_NONID`
fn seam_repair(ilabel: Label, olabel: Label, labels: &WildcardLabels) -> SeamRepair {
    let WildcardLabels {
        other_id,
        other_nonid,
    } = *labels;

    if ilabel == other_id {
        // The olabel test must stay nested: OTHER_ID:OTHER_ID is left alone
        // and must not fall through to rule 4.
        if olabel != other_id {
            return SeamRepair::Relabel {
                ilabel: other_nonid,
                olabel,
            };
        }
        SeamRepair::Keep
    } else if ilabel == other_nonid {
        if olabel == other_id {
            SeamRepair::Relabel {
                ilabel,
                olabel: other_nonid,
            }
        } else if olabel == other_nonid {
            // Composition cannot tell two independent non-identity
            // wildcards that happened to match from one identity wildcard
            // passed through, so both readings are kept.
            SeamRepair::AddIdentityTwin
        } else {
            SeamRepair::Keep
        }
    } else if olabel == other_id {
        SeamRepair::Relabel {
            ilabel,
            olabel: other_nonid,
        }
    } else {
        SeamRepair::Keep
    }
}

/// Restore the identity/non-identity distinction in a composition result.
///
/// Relabelings happen in place during the scan; identity twins are staged
/// and inserted once the scan is over.
pub fn restore_after_compose(fst: &mut VectorFst, labels: &WildcardLabels) -> Result<(), FstError> {
    let twins = fst
        .states()
        .flat_map(|s| fst.arcs(s))
        .filter(|a| a.ilabel == labels.other_nonid && a.olabel == labels.other_nonid)
        .count();

    let mut stage = ArcStage::new();
    stage.reserve(twins)?;

    let mut relabeled = 0usize;
    for src in fst.states() {
        for arc in fst.arcs_mut(src) {
            match seam_repair(arc.ilabel, arc.olabel, labels) {
                SeamRepair::Keep => {}
                SeamRepair::Relabel { ilabel, olabel } => {
                    arc.ilabel = ilabel;
                    arc.olabel = olabel;
                    relabeled += 1;
                }
                SeamRepair::AddIdentityTwin => stage.stage(StagedArc {
                    src,
                    ilabel: labels.other_id,
                    olabel: labels.other_id,
                    weight: arc.weight,
                    dest: arc.nextstate,
                })?,
            }
        }
    }

    let added = stage.apply(fst)?;
    tracing::debug!(relabeled, added, "restored wildcards after composition");
    Ok(())
}
