//! Shared vocabulary for the wildfst crates.
//!
//! - [`label`] -- label ids, epsilon and the two wildcard labels
//! - [`weight`] -- tropical semiring weight
//! - [`alphabet`] -- caller-supplied expansion alphabet
//! - [`config`] -- rule-marker labels and the serializable pass configuration

pub mod alphabet;
pub mod config;
pub mod label;
pub mod weight;

pub use alphabet::Alphabet;
pub use config::{PassConfig, RuleLabels};
pub use label::{EPSILON, Label, WildcardLabels};
pub use weight::TropicalWeight;

/// Error type for inconsistent label configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("{role} label must not be epsilon")]
    EpsilonReserved { role: &'static str },
    #[error("OTHER_ID and OTHER_NONID share the label {0}")]
    IdenticalWildcards(Label),
    #[error("{role} label {label} collides with a wildcard label")]
    WildcardCollision { role: &'static str, label: Label },
    #[error("rule separator and hard epsilon share the label {0}")]
    IdenticalRuleLabels(Label),
    #[error("alphabet symbol {0} is epsilon or a wildcard label")]
    ReservedInAlphabet(Label),
    #[error("alphabet symbol {0} appears more than once")]
    DuplicateInAlphabet(Label),
}
