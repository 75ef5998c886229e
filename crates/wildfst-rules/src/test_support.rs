// Small network builders shared by the unit tests.

use wildfst_core::{Label, TropicalWeight, WildcardLabels};
use wildfst_fst::{Arc, StateId, VectorFst};

pub const LABELS: WildcardLabels = WildcardLabels::new_unchecked(100, 101);
pub const ID: Label = 100;
pub const NONID: Label = 101;

/// Build a network with `states` states, start 0 (if any), the given final states
/// (weight 0.0) and arcs `(src, ilabel, olabel, weight, dest)`.
pub fn net(states: usize, finals: &[StateId], arcs: &[(StateId, Label, Label, f32, StateId)]) -> VectorFst {
    let mut fst = VectorFst::new();
    fst.add_states(states);
    if states > 0 {
        fst.set_start(0).unwrap();
    }
    for &f in finals {
        fst.set_final(f, TropicalWeight::ONE).unwrap();
    }
    for &(src, i, o, w, dest) in arcs {
        fst.add_arc(src, Arc::new(i, o, TropicalWeight::new(w), dest)).unwrap();
    }
    fst
}

/// `(ilabel, olabel, weight, nextstate)` of every arc leaving `state`.
pub fn arcs_of(fst: &VectorFst, state: StateId) -> Vec<(Label, Label, f32, StateId)> {
    fst.arcs(state)
        .iter()
        .map(|a| (a.ilabel, a.olabel, a.weight.value(), a.nextstate))
        .collect()
}
