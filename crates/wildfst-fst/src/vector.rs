// VectorFst: dense states, each owning its outgoing arcs.

use std::ops::Range;

use wildfst_core::TropicalWeight;

use crate::arc::Arc;
use crate::{FstError, StateId};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VectorState {
    pub(crate) final_weight: TropicalWeight,
    pub(crate) arcs: Vec<Arc>,
}

impl VectorState {
    fn new() -> Self {
        Self {
            final_weight: TropicalWeight::ZERO,
            arcs: Vec::new(),
        }
    }
}

/// Mutable weighted transducer.
///
/// States are numbered densely from 0. A network without a start state
/// accepts the empty language. Arcs are kept in insertion order unless
/// [`arc_sort_by_input`](Self::arc_sort_by_input) is called.
#[derive(Clone, Default, PartialEq)]
pub struct VectorFst {
    pub(crate) states: Vec<VectorState>,
    pub(crate) start: Option<StateId>,
}

impl std::fmt::Debug for VectorFst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorFst")
            .field("start", &self.start)
            .field("state_count", &self.states.len())
            .field("arc_count", &self.num_arcs())
            .finish()
    }
}

impl VectorFst {
    /// Create an empty network (no states, no start).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-final state without arcs and return its id.
    pub fn add_state(&mut self) -> StateId {
        self.states.push(VectorState::new());
        (self.states.len() - 1) as StateId
    }

    /// Add `count` states and return the id range.
    pub fn add_states(&mut self, count: usize) -> Range<StateId> {
        let first = self.states.len() as StateId;
        self.states
            .extend(std::iter::repeat_with(VectorState::new).take(count));
        first..self.states.len() as StateId
    }

    /// Reserve room for `additional` more states without aborting on
    /// exhaustion.
    pub fn reserve_states(&mut self, additional: usize) -> Result<(), FstError> {
        self.states
            .try_reserve(additional)
            .map_err(|_| FstError::AllocationFailed {
                requested: additional,
            })
    }

    #[inline]
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Total number of arcs over all states.
    pub fn num_arcs(&self) -> usize {
        self.states.iter().map(|s| s.arcs.len()).sum()
    }

    /// Iterate over all state ids.
    #[inline]
    pub fn states(&self) -> Range<StateId> {
        0..self.states.len() as StateId
    }

    #[inline]
    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    pub fn set_start(&mut self, state: StateId) -> Result<(), FstError> {
        self.check_state(state)?;
        self.start = Some(state);
        Ok(())
    }

    /// Final weight of `state`; `TropicalWeight::ZERO` when non-final.
    ///
    /// Panics if `state` is out of range.
    #[inline]
    pub fn final_weight(&self, state: StateId) -> TropicalWeight {
        self.states[state as usize].final_weight
    }

    #[inline]
    pub fn is_final(&self, state: StateId) -> bool {
        !self.final_weight(state).is_zero()
    }

    pub fn set_final(&mut self, state: StateId, weight: TropicalWeight) -> Result<(), FstError> {
        self.check_state(state)?;
        self.states[state as usize].final_weight = weight;
        Ok(())
    }

    /// Append an arc leaving `state`. Both endpoints must exist.
    pub fn add_arc(&mut self, state: StateId, arc: Arc) -> Result<(), FstError> {
        self.check_state(state)?;
        self.check_state(arc.nextstate)?;
        self.states[state as usize].arcs.push(arc);
        Ok(())
    }

    /// Arcs leaving `state`, in storage order.
    ///
    /// Panics if `state` is out of range.
    #[inline]
    pub fn arcs(&self, state: StateId) -> &[Arc] {
        &self.states[state as usize].arcs
    }

    /// Mutable view of the arcs leaving `state`.
    ///
    /// Fields can be overwritten in place; the arc count cannot change
    /// through this view, so it is safe to hold while scanning.
    ///
    /// Panics if `state` is out of range.
    #[inline]
    pub fn arcs_mut(&mut self, state: StateId) -> &mut [Arc] {
        &mut self.states[state as usize].arcs
    }

    /// Reserve room for `additional` more arcs on `state`.
    pub fn reserve_arcs(&mut self, state: StateId, additional: usize) -> Result<(), FstError> {
        self.check_state(state)?;
        self.states[state as usize]
            .arcs
            .try_reserve(additional)
            .map_err(|_| FstError::AllocationFailed {
                requested: additional,
            })
    }

    /// Stable sort of every state's arcs by input label, then output label.
    pub fn arc_sort_by_input(&mut self) {
        for state in &mut self.states {
            state.arcs.sort_by_key(|a| (a.ilabel, a.olabel));
        }
    }

    /// Whether every arc has equal input and output labels.
    pub fn is_acceptor(&self) -> bool {
        self.states
            .iter()
            .all(|s| s.arcs.iter().all(Arc::is_identity))
    }

    /// Remove all states and the start designation.
    pub fn clear(&mut self) {
        self.states.clear();
        self.start = None;
    }

    #[inline]
    fn check_state(&self, state: StateId) -> Result<(), FstError> {
        if (state as usize) < self.states.len() {
            Ok(())
        } else {
            Err(FstError::StateOutOfRange {
                state,
                num_states: self.states.len(),
            })
        }
    }
}
