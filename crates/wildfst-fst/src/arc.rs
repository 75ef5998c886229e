// Arc layout.

use wildfst_core::{Label, TropicalWeight};

use crate::StateId;

/// A weighted labeled arc, stored under its source state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub ilabel: Label,
    pub olabel: Label,
    pub weight: TropicalWeight,
    pub nextstate: StateId,
}

impl Arc {
    #[inline]
    pub fn new(ilabel: Label, olabel: Label, weight: TropicalWeight, nextstate: StateId) -> Self {
        Self {
            ilabel,
            olabel,
            weight,
            nextstate,
        }
    }

    /// An arc with the neutral weight.
    #[inline]
    pub fn unweighted(ilabel: Label, olabel: Label, nextstate: StateId) -> Self {
        Self::new(ilabel, olabel, TropicalWeight::ONE, nextstate)
    }

    /// Whether input and output labels are equal.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.ilabel == self.olabel
    }
}
