// Wildcard repair after projection.
//
// Projection copies one side of every arc onto the other. A plain copy of
// OTHER_NONID yields OTHER_NONID:OTHER_NONID, which reads as "any symbol to
// any other symbol", while the projected language only ever pairs a symbol
// with itself. These passes rewrite the result into a proper acceptor.

use wildfst_core::WildcardLabels;
use wildfst_fst::VectorFst;

/// Which side of the arcs a projection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionSide {
    Input,
    Output,
}

/// Turn every arc into an acceptor arc over the kept side.
///
/// If the kept label is OTHER_NONID, both sides become OTHER_ID; otherwise
/// the other side is overwritten with the kept label. Idempotent.
pub fn normalize_projection(fst: &mut VectorFst, side: ProjectionSide, labels: &WildcardLabels) {
    let mut widened = 0usize;
    for s in fst.states() {
        for arc in fst.arcs_mut(s) {
            let kept = match side {
                ProjectionSide::Input => arc.ilabel,
                ProjectionSide::Output => arc.olabel,
            };
            let kept = if kept == labels.other_nonid {
                widened += 1;
                labels.other_id
            } else {
                kept
            };
            arc.ilabel = kept;
            arc.olabel = kept;
        }
    }
    tracing::debug!(?side, widened, "normalized projection");
}

/// [`normalize_projection`] keeping the input side.
pub fn normalize_input_projection(fst: &mut VectorFst, labels: &WildcardLabels) {
    normalize_projection(fst, ProjectionSide::Input, labels);
}

/// [`normalize_projection`] keeping the output side.
pub fn normalize_output_projection(fst: &mut VectorFst, labels: &WildcardLabels) {
    normalize_projection(fst, ProjectionSide::Output, labels);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ID, LABELS, NONID, arcs_of, net};

    fn sample() -> VectorFst {
        net(
            2,
            &[1],
            &[
                (0, NONID, 5, 0.0, 1),
                (0, 5, NONID, 0.0, 1),
                (0, NONID, NONID, 0.0, 1),
                (0, ID, ID, 0.0, 1),
                (0, 3, 4, 1.5, 1),
            ],
        )
    }

    #[test]
    fn input_projection() {
        let mut fst = sample();
        normalize_input_projection(&mut fst, &LABELS);
        assert_eq!(
            arcs_of(&fst, 0),
            vec![
                (ID, ID, 0.0, 1),
                (5, 5, 0.0, 1),
                (ID, ID, 0.0, 1),
                (ID, ID, 0.0, 1),
                (3, 3, 1.5, 1),
            ]
        );
        assert!(fst.is_acceptor());
    }

    #[test]
    fn output_projection() {
        let mut fst = sample();
        normalize_output_projection(&mut fst, &LABELS);
        assert_eq!(
            arcs_of(&fst, 0),
            vec![
                (5, 5, 0.0, 1),
                (ID, ID, 0.0, 1),
                (ID, ID, 0.0, 1),
                (ID, ID, 0.0, 1),
                (4, 4, 1.5, 1),
            ]
        );
    }

    #[test]
    fn idempotent() {
        for side in [ProjectionSide::Input, ProjectionSide::Output] {
            let mut once = sample();
            normalize_projection(&mut once, side, &LABELS);
            let mut twice = once.clone();
            normalize_projection(&mut twice, side, &LABELS);
            assert_eq!(once, twice);
        }
    }
}
