// Wildcard expansion over an explicit alphabet.
//
// When a network meets new symbols (another operand's sigma), every
// wildcard arc must be spelled out for each of them: the wildcard no
// longer covers those symbols once they are "mentioned". The wildcard
// arcs themselves stay; they go on standing for the symbols still unseen.

use hashbrown::HashSet;
use wildfst_core::{Alphabet, Label, TropicalWeight, WildcardLabels};
use wildfst_fst::{ArcStage, FstError, StagedArc, StateId, VectorFst};

/// Add the concrete counterparts of every wildcard arc for each symbol of
/// `alphabet`.
///
/// For an arc `i:o` (weight `w`, destination `d`), by first matching rule:
///
/// - `OTHER_NONID:o`, o not OTHER_NONID: add `c:o` for every c
/// - `OTHER_NONID:OTHER_NONID`: add `c:OTHER_NONID` and `OTHER_NONID:c` for
///   every c, and `c:d'`, `d':c` for every pair of distinct c, d'
/// - `i:OTHER_NONID`: add `i:c` for every c
/// - `OTHER_ID:OTHER_ID`: add `c:c` for every c
///
/// Added arcs copy `w` and `d`. Arcs are staged per state and inserted once
/// that state's scan is over, so they are never re-expanded.
///
/// Returns the symbols of `alphabet` as a set, for the caller's symbol
/// table. No label outside `alphabet` is ever introduced, and the set is
/// the same whether or not any arc needed expanding.
pub fn expand_other_arcs(
    fst: &mut VectorFst,
    alphabet: &Alphabet,
    labels: &WildcardLabels,
) -> Result<HashSet<Label>, FstError> {
    if alphabet.is_empty() {
        return Ok(HashSet::new());
    }
    let mut stage = ArcStage::new();
    let mut added = 0usize;
    for src in fst.states() {
        for arc in fst.arcs(src) {
            let mut out = Expansion {
                stage: &mut stage,
                src,
                weight: arc.weight,
                dest: arc.nextstate,
            };
            out.expand(arc.ilabel, arc.olabel, alphabet, labels)?;
        }
        if !stage.is_empty() {
            fst.reserve_arcs(src, stage.len())?;
            added += stage.apply(fst)?;
        }
    }

    tracing::debug!(symbols = alphabet.len(), added, "expanded wildcard arcs");
    Ok(alphabet.iter().collect())
}

/// Stages arcs sharing one source, weight and destination.
struct Expansion<'s> {
    stage: &'s mut ArcStage,
    src: StateId,
    weight: TropicalWeight,
    dest: StateId,
}

impl Expansion<'_> {
    fn push(&mut self, ilabel: Label, olabel: Label) -> Result<(), FstError> {
        self.stage.stage(StagedArc {
            src: self.src,
            ilabel,
            olabel,
            weight: self.weight,
            dest: self.dest,
        })
    }

    fn expand(
        &mut self,
        ilabel: Label,
        olabel: Label,
        alphabet: &Alphabet,
        labels: &WildcardLabels,
    ) -> Result<(), FstError> {
        let n = alphabet.len();
        if ilabel == labels.other_nonid {
            if olabel != labels.other_nonid {
                self.stage.reserve(n)?;
                for c in alphabet.iter() {
                    self.push(c, olabel)?;
                }
            } else {
                // 2n one-sided arcs plus n(n-1) pairs
                let wanted = n
                    .checked_mul(n + 1)
                    .ok_or(FstError::AllocationFailed { requested: usize::MAX })?;
                self.stage.reserve(wanted)?;
                for c in alphabet.iter() {
                    self.push(c, labels.other_nonid)?;
                    self.push(labels.other_nonid, c)?;
                }
                let symbols = alphabet.symbols();
                for (k, &c) in symbols.iter().enumerate() {
                    for &d in &symbols[k + 1..] {
                        self.push(c, d)?;
                        self.push(d, c)?;
                    }
                }
            }
        } else if olabel == labels.other_nonid {
            self.stage.reserve(n)?;
            for c in alphabet.iter() {
                self.push(ilabel, c)?;
            }
        } else if ilabel == labels.other_id {
            self.stage.reserve(n)?;
            for c in alphabet.iter() {
                self.push(c, c)?;
            }
        }
        Ok(())
    }
}
