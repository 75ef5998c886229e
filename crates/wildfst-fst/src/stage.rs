// Deferred arc insertion.
//
// Passes that add arcs scan the network first and only insert afterwards:
// the scan holds borrows of the arc vectors it walks, and arcs added during
// the scan must never be seen by that same scan.

use wildfst_core::{Label, TropicalWeight};

use crate::arc::Arc;
use crate::vector::VectorFst;
use crate::{FstError, StateId};

/// An arc waiting to be inserted once the current scan is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagedArc {
    pub src: StateId,
    pub ilabel: Label,
    pub olabel: Label,
    pub weight: TropicalWeight,
    pub dest: StateId,
}

/// Growable buffer of [`StagedArc`]s.
///
/// Staging is fallible: buffer growth goes through `try_reserve`, so an
/// oversized expansion surfaces as [`FstError::AllocationFailed`].
#[derive(Debug, Default)]
pub struct ArcStage {
    pending: Vec<StagedArc>,
}

impl ArcStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make room for `additional` arcs up front.
    pub fn reserve(&mut self, additional: usize) -> Result<(), FstError> {
        self.pending
            .try_reserve(additional)
            .map_err(|_| FstError::AllocationFailed {
                requested: additional,
            })
    }

    /// Queue one arc.
    pub fn stage(&mut self, arc: StagedArc) -> Result<(), FstError> {
        if self.pending.len() == self.pending.capacity() {
            self.reserve(1)?;
        }
        self.pending.push(arc);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Insert every queued arc into `fst` in staging order, leaving the
    /// buffer empty. Returns the number of arcs inserted.
    pub fn apply(&mut self, fst: &mut VectorFst) -> Result<usize, FstError> {
        let count = self.pending.len();
        for staged in self.pending.drain(..) {
            fst.add_arc(
                staged.src,
                Arc::new(staged.ilabel, staged.olabel, staged.weight, staged.dest),
            )?;
        }
        Ok(count)
    }
}
