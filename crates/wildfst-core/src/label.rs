// Label ids and the wildcard pair.

use serde::{Deserialize, Serialize};

use crate::LabelError;

/// Integer symbol id carried on one side of an arc.
pub type Label = u32;

/// The reserved epsilon label ("no symbol consumed or produced").
pub const EPSILON: Label = 0;

/// The two wildcard label ids chosen by the caller.
///
/// - `other_id` matches any symbol outside the known alphabet and outputs it
///   unchanged (identity wildcard).
/// - `other_nonid` matches any symbol outside the known alphabet with an
///   output that is not bound to the input (non-identity wildcard).
///
/// Finished networks never carry `(other_id, c)` or `(c, other_id)` for any
/// `c != other_id`; see [`is_disallowed_pair`](Self::is_disallowed_pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WildcardLabels {
    pub other_id: Label,
    pub other_nonid: Label,
}

impl WildcardLabels {
    /// Create a validated wildcard pair.
    ///
    /// Both ids must be non-epsilon and distinct.
    pub fn new(other_id: Label, other_nonid: Label) -> Result<Self, LabelError> {
        let labels = Self {
            other_id,
            other_nonid,
        };
        labels.validate()?;
        Ok(labels)
    }

    /// Create a wildcard pair without validation.
    ///
    /// Passing an inconsistent pair to the rewrite passes gives an incorrect
    /// (but non-panicking) result.
    pub const fn new_unchecked(other_id: Label, other_nonid: Label) -> Self {
        Self {
            other_id,
            other_nonid,
        }
    }

    /// Check that both ids are non-epsilon and distinct.
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.other_id == EPSILON {
            return Err(LabelError::EpsilonReserved { role: "OTHER_ID" });
        }
        if self.other_nonid == EPSILON {
            return Err(LabelError::EpsilonReserved {
                role: "OTHER_NONID",
            });
        }
        if self.other_id == self.other_nonid {
            return Err(LabelError::IdenticalWildcards(self.other_id));
        }
        Ok(())
    }

    /// Whether `label` is either wildcard.
    #[inline]
    pub fn is_wildcard(&self, label: Label) -> bool {
        label == self.other_id || label == self.other_nonid
    }

    /// Whether `label` is a concrete symbol (neither epsilon nor a wildcard).
    #[inline]
    pub fn is_concrete(&self, label: Label) -> bool {
        label != EPSILON && !self.is_wildcard(label)
    }

    /// Whether the pair `ilabel:olabel` breaks the identity-wildcard invariant.
    ///
    /// OTHER_ID may only ever be paired with itself. This covers
    /// `OTHER_ID:c`, `c:OTHER_ID`, `OTHER_ID:OTHER_NONID` and
    /// `OTHER_NONID:OTHER_ID`.
    #[inline]
    pub fn is_disallowed_pair(&self, ilabel: Label, olabel: Label) -> bool {
        (ilabel == self.other_id) != (olabel == self.other_id)
    }
}
