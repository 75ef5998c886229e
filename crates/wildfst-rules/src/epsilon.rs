// Wildcard-aware replacement of one arc side by epsilon.

use wildfst_core::{EPSILON, WildcardLabels};
use wildfst_fst::VectorFst;

/// Replace every input label with epsilon.
///
/// An OTHER_ID output is demoted to OTHER_NONID first: with the input gone
/// there is nothing left for it to be identical to.
pub fn change_input_to_epsilon(fst: &mut VectorFst, labels: &WildcardLabels) {
    let mut demoted = 0usize;
    for s in fst.states() {
        for arc in fst.arcs_mut(s) {
            if arc.olabel == labels.other_id {
                arc.olabel = labels.other_nonid;
                demoted += 1;
            }
            arc.ilabel = EPSILON;
        }
    }
    tracing::debug!(demoted, "replaced input side with epsilon");
}

/// Replace every output label with epsilon, demoting an OTHER_ID input to
/// OTHER_NONID.
pub fn change_output_to_epsilon(fst: &mut VectorFst, labels: &WildcardLabels) {
    let mut demoted = 0usize;
    for s in fst.states() {
        for arc in fst.arcs_mut(s) {
            if arc.ilabel == labels.other_id {
                arc.ilabel = labels.other_nonid;
                demoted += 1;
            }
            arc.olabel = EPSILON;
        }
    }
    tracing::debug!(demoted, "replaced output side with epsilon");
}
