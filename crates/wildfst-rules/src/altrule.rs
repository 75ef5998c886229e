// Alternation-rule flattening.
//
// A compiled alternation rule spells each `x -> y` alternative as a
// three-hop path
//
//     src --x:eps--> int1 --sep:sep--> int2 --eps:y--> dest
//
// with the hard-epsilon label standing in for eps so that epsilon removal
// cannot collapse the body. This pass links every such path up into a
// single `x:y` arc and then deletes the separator arcs.

use wildfst_core::{EPSILON, Label, RuleLabels, TropicalWeight, WildcardLabels};
use wildfst_fst::{ArcStage, FstError, InputMatcher, StagedArc, VectorFst};

/// Resolve a linked-up pair so that OTHER_ID is only ever paired with
/// itself: a lone OTHER_ID on either side becomes OTHER_NONID.
fn unbind_identity(x: Label, y: Label, labels: &WildcardLabels) -> (Label, Label) {
    if x == labels.other_id && y != labels.other_id {
        (labels.other_nonid, y)
    } else if y == labels.other_id && x != labels.other_id {
        (x, labels.other_nonid)
    } else {
        (x, y)
    }
}

/// Flatten every `x:eps sep:sep eps:y` body into a direct `x:y` arc with
/// weight 0.0, then remove the separator arcs and whatever only they kept
/// alive.
///
/// The link-up is a full cross product: every qualifying first arc out of
/// `src` is combined with every separator arc out of its target and every
/// arc out of that separator arc's target.
pub fn synchronize_alt_rule(
    fst: &mut VectorFst,
    rule: &RuleLabels,
    labels: &WildcardLabels,
) -> Result<(), FstError> {
    fst.arc_sort_by_input();

    let mut stage = ArcStage::new();
    {
        let view: &VectorFst = fst;
        let mut matcher = InputMatcher::new(view);
        for src in view.states() {
            for first in view.arcs(src) {
                if !first.is_identity() && rule.soften(first.olabel) != EPSILON {
                    continue;
                }
                let x = rule.soften(first.ilabel);
                let bridges: Vec<_> = matcher.find(first.nextstate, rule.separator).collect();
                for bridge in bridges {
                    for last in view.arcs(bridge.nextstate) {
                        let y = rule.soften(last.olabel);
                        let (ilabel, olabel) = unbind_identity(x, y, labels);
                        stage.stage(StagedArc {
                            src,
                            ilabel,
                            olabel,
                            weight: TropicalWeight::ONE,
                            dest: last.nextstate,
                        })?;
                    }
                }
            }
        }
        tracing::trace!(
            indexed = matcher.indexed_states(),
            "alternation rule link-up scanned"
        );
    }

    let linked = stage.apply(fst)?;
    let separators = fst.prune_arcs(|arc| arc.ilabel == rule.separator);
    tracing::debug!(
        linked,
        separators,
        states = fst.num_states(),
        "synchronized alternation rule"
    );
    Ok(())
}
