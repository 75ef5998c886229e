// Tropical semiring weight.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tropical-semiring cost.
///
/// Weights along a path add up and alternatives take the minimum. The
/// identity is `0.0` and the absorbing zero is `+inf`, which also marks a
/// state as non-final. The passes only copy weights from arc to arc.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TropicalWeight(f32);

impl TropicalWeight {
    /// Multiplicative identity (free transition, final with no cost).
    pub const ONE: Self = Self(0.0);

    /// Absorbing element; a final weight of `ZERO` means non-final.
    pub const ZERO: Self = Self(f32::INFINITY);

    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == f32::INFINITY
    }

    #[inline]
    pub fn is_one(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for TropicalWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("Infinity")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
