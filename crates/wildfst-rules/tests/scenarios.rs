//! End-to-end pass scenarios on small hand-built networks.
//!
//! Run: cargo test -p wildfst-rules --test scenarios

use wildfst_core::{Alphabet, Label, RuleLabels, TropicalWeight, WildcardLabels};
use wildfst_fst::{Arc, StateId, VectorFst};
use wildfst_rules::{
    close_alphabet, delete_other_arcs, demote_input_other, demote_output_other,
    disallowed_pairs, expand_other_arcs, is_semantic_acceptor, normalize_input_projection,
    restore_after_compose, synchronize_alt_rule,
};

const OTHER_ID: Label = 100;
const OTHER_NONID: Label = 101;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn labels() -> WildcardLabels {
    WildcardLabels::new(OTHER_ID, OTHER_NONID).unwrap()
}

fn chain(arcs: &[(Label, Label, f32)]) -> VectorFst {
    let mut fst = VectorFst::new();
    fst.add_states(arcs.len() + 1);
    fst.set_start(0).unwrap();
    fst.set_final(arcs.len() as StateId, TropicalWeight::ONE).unwrap();
    for (s, &(i, o, w)) in arcs.iter().enumerate() {
        let s = s as StateId;
        fst.add_arc(s, Arc::new(i, o, TropicalWeight::new(w), s + 1)).unwrap();
    }
    fst
}

fn pairs(fst: &VectorFst, state: StateId) -> Vec<(Label, Label)> {
    let mut v: Vec<_> = fst.arcs(state).iter().map(|a| (a.ilabel, a.olabel)).collect();
    v.sort();
    v
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn nonid_pair_expansion_over_two_symbols() {
    let mut fst = chain(&[(OTHER_NONID, OTHER_NONID, 0.0)]);
    let sigma = Alphabet::new([1, 2], &labels()).unwrap();
    let symbols = expand_other_arcs(&mut fst, &sigma, &labels()).unwrap();

    assert_eq!(
        pairs(&fst, 0),
        vec![
            (1, 2),
            (1, OTHER_NONID),
            (2, 1),
            (2, OTHER_NONID),
            (OTHER_NONID, 1),
            (OTHER_NONID, 2),
            (OTHER_NONID, OTHER_NONID),
        ]
    );
    assert!(fst.arcs(0).iter().all(|a| a.nextstate == 1));
    assert_eq!(symbols.len(), 2);
}

#[test]
fn identity_to_nonid_is_repaired() {
    let mut fst = chain(&[(OTHER_ID, OTHER_NONID, 0.0)]);
    restore_after_compose(&mut fst, &labels()).unwrap();
    assert_eq!(pairs(&fst, 0), vec![(OTHER_NONID, OTHER_NONID)]);
}

#[test]
fn nonid_pair_gets_identity_reading() {
    let mut fst = chain(&[(OTHER_NONID, OTHER_NONID, 0.5)]);
    restore_after_compose(&mut fst, &labels()).unwrap();
    let arcs = fst.arcs(0);
    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs[1], Arc::new(OTHER_ID, OTHER_ID, TropicalWeight::new(0.5), 1));
}

#[test]
fn stripping_wildcard_only_path_leaves_nothing() {
    let mut fst = chain(&[(1, 1, 0.0), (OTHER_ID, OTHER_ID, 0.0), (2, 2, 0.0)]);
    delete_other_arcs(&mut fst, &labels());
    assert_eq!(fst.num_states(), 0);
    assert_eq!(fst.start(), None);
}

// ---------------------------------------------------------------------------
// Pass pipelines
// ---------------------------------------------------------------------------

/// Demote both operands, glue them at the seam as a composition would have
/// for a pass-through symbol, then repair.
#[test]
fn compose_round_trip_keeps_identity_reading() {
    let mut left = chain(&[(OTHER_ID, OTHER_ID, 0.0)]);
    let mut right = chain(&[(OTHER_ID, OTHER_ID, 0.0)]);
    demote_output_other(&mut left, &labels());
    demote_input_other(&mut right, &labels());
    assert_eq!(pairs(&left, 0), vec![(OTHER_ID, OTHER_NONID)]);
    assert_eq!(pairs(&right, 0), vec![(OTHER_NONID, OTHER_ID)]);

    // left.i : right.o
    let mut composed = chain(&[(OTHER_ID, OTHER_ID, 0.0)]);
    composed.arcs_mut(0)[0].ilabel = left.arcs(0)[0].ilabel;
    composed.arcs_mut(0)[0].olabel = right.arcs(0)[0].olabel;
    restore_after_compose(&mut composed, &labels()).unwrap();
    assert_eq!(pairs(&composed, 0), vec![(OTHER_ID, OTHER_ID)]);
    assert!(disallowed_pairs(&composed, &labels()).is_empty());
}

#[test]
fn projection_then_close_yields_plain_acceptor() {
    let mut fst = chain(&[(OTHER_NONID, 1, 0.0), (2, OTHER_NONID, 0.0)]);
    normalize_input_projection(&mut fst, &labels());
    assert!(is_semantic_acceptor(&fst, &labels()));

    let sigma = Alphabet::new([3], &labels()).unwrap();
    close_alphabet(&mut fst, &sigma, &labels()).unwrap();
    assert_eq!(pairs(&fst, 0), vec![(3, 3)]);
    assert_eq!(pairs(&fst, 1), vec![(2, 2)]);
}

#[test]
fn alternation_rule_is_flattened() {
    let rule = RuleLabels::new(200, 201, &labels()).unwrap();
    let mut fst = chain(&[(5, 0, 0.0), (200, 200, 0.0), (0, 6, 0.0)]);
    synchronize_alt_rule(&mut fst, &rule, &labels()).unwrap();

    assert_eq!(fst.num_states(), 2);
    assert_eq!(pairs(&fst, 0), vec![(5, 6)]);
    assert!(
        fst.states()
            .all(|s| fst.arcs(s).iter().all(|a| a.ilabel != rule.separator))
    );
    assert!(disallowed_pairs(&fst, &labels()).is_empty());
}
