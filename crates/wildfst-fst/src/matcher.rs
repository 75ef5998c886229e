// Input-label matcher: per-state label index built on first use.

use hashbrown::HashMap;
use wildfst_core::Label;

use crate::arc::Arc;
use crate::vector::VectorFst;
use crate::StateId;

/// Looks up the arcs leaving a state with a given input label.
///
/// The index for a state is built the first time that state is queried and
/// reused afterwards, so repeated lookups cost one hash lookup. The matcher
/// borrows the network immutably; arcs found through it stay valid for the
/// matcher's lifetime. Order among arcs with the same label is storage order.
pub struct InputMatcher<'f> {
    fst: &'f VectorFst,
    index: HashMap<StateId, HashMap<Label, Vec<usize>>>,
}

impl<'f> InputMatcher<'f> {
    pub fn new(fst: &'f VectorFst) -> Self {
        Self {
            fst,
            index: HashMap::new(),
        }
    }

    /// Arcs leaving `state` whose input label is `label`.
    pub fn find(&mut self, state: StateId, label: Label) -> impl Iterator<Item = &'f Arc> + '_ {
        let fst = self.fst;
        let by_label = self
            .index
            .entry(state)
            .or_insert_with(|| index_state(fst, state));
        let arcs = fst.arcs(state);
        by_label
            .get(&label)
            .into_iter()
            .flatten()
            .map(move |&pos| &arcs[pos])
    }

    /// Number of states indexed so far.
    pub fn indexed_states(&self) -> usize {
        self.index.len()
    }
}

fn index_state(fst: &VectorFst, state: StateId) -> HashMap<Label, Vec<usize>> {
    let mut by_label: HashMap<Label, Vec<usize>> = HashMap::new();
    for (pos, arc) in fst.arcs(state).iter().enumerate() {
        by_label.entry(arc.ilabel).or_default().push(pos);
    }
    by_label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan_out() -> VectorFst {
        let mut fst = VectorFst::new();
        fst.add_states(4);
        fst.set_start(0).unwrap();
        fst.add_arc(0, Arc::unweighted(7, 1, 1)).unwrap();
        fst.add_arc(0, Arc::unweighted(8, 8, 2)).unwrap();
        fst.add_arc(0, Arc::unweighted(7, 2, 3)).unwrap();
        fst
    }

    #[test]
    fn find_all_arcs_with_label() {
        let fst = fan_out();
        let mut matcher = InputMatcher::new(&fst);
        let found: Vec<_> = matcher.find(0, 7).map(|a| (a.olabel, a.nextstate)).collect();
        assert_eq!(found, vec![(1, 1), (2, 3)]);
    }

    #[test]
    fn find_missing_label() {
        let fst = fan_out();
        let mut matcher = InputMatcher::new(&fst);
        assert_eq!(matcher.find(0, 9).count(), 0);
        assert_eq!(matcher.find(3, 7).count(), 0);
    }

    #[test]
    fn index_built_on_demand() {
        let fst = fan_out();
        let mut matcher = InputMatcher::new(&fst);
        assert_eq!(matcher.indexed_states(), 0);
        matcher.find(0, 8).for_each(drop);
        matcher.find(0, 7).for_each(drop);
        assert_eq!(matcher.indexed_states(), 1);
        matcher.find(2, 7).for_each(drop);
        assert_eq!(matcher.indexed_states(), 2);
    }
}
