// Rule-marker labels and the serializable pass configuration.

use serde::{Deserialize, Serialize};

use crate::LabelError;
use crate::alphabet::Alphabet;
use crate::label::{EPSILON, Label, WildcardLabels};

/// Reserved labels used by compiled alternation rules.
///
/// `separator` delimits the two halves of a rule body (`x sep y`);
/// `hard_epsilon` stands in for epsilon inside the body so that unrelated
/// epsilon removal does not collapse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleLabels {
    pub separator: Label,
    pub hard_epsilon: Label,
}

impl RuleLabels {
    /// Create validated rule labels.
    ///
    /// Neither label may be epsilon, a wildcard, or equal to the other.
    pub fn new(
        separator: Label,
        hard_epsilon: Label,
        wildcards: &WildcardLabels,
    ) -> Result<Self, LabelError> {
        let labels = Self {
            separator,
            hard_epsilon,
        };
        labels.validate(wildcards)?;
        Ok(labels)
    }

    pub const fn new_unchecked(separator: Label, hard_epsilon: Label) -> Self {
        Self {
            separator,
            hard_epsilon,
        }
    }

    pub fn validate(&self, wildcards: &WildcardLabels) -> Result<(), LabelError> {
        for (role, label) in [
            ("rule separator", self.separator),
            ("hard epsilon", self.hard_epsilon),
        ] {
            if label == EPSILON {
                return Err(LabelError::EpsilonReserved { role });
            }
            if wildcards.is_wildcard(label) {
                return Err(LabelError::WildcardCollision { role, label });
            }
        }
        if self.separator == self.hard_epsilon {
            return Err(LabelError::IdenticalRuleLabels(self.separator));
        }
        Ok(())
    }

    /// Map the hard-epsilon stand-in back to true epsilon.
    #[inline]
    pub fn soften(&self, label: Label) -> Label {
        if label == self.hard_epsilon {
            EPSILON
        } else {
            label
        }
    }
}

/// Label configuration for a run of rewrite passes.
///
/// Typically deserialized from JSON:
///
/// ```json
/// { "wildcards": { "other_id": 100, "other_nonid": 101 },
///   "rule": { "separator": 200, "hard_epsilon": 201 },
///   "alphabet": [1, 2, 3] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassConfig {
    pub wildcards: WildcardLabels,
    #[serde(default)]
    pub rule: Option<RuleLabels>,
    #[serde(default)]
    pub alphabet: Vec<Label>,
}

impl PassConfig {
    pub fn new(wildcards: WildcardLabels) -> Self {
        Self {
            wildcards,
            rule: None,
            alphabet: Vec::new(),
        }
    }

    /// Validate every label in the configuration against the others.
    pub fn validate(&self) -> Result<(), LabelError> {
        self.wildcards.validate()?;
        if let Some(rule) = &self.rule {
            rule.validate(&self.wildcards)?;
        }
        self.expansion_alphabet().map(|_| ())
    }

    /// The configured alphabet, checked against the wildcard labels.
    pub fn expansion_alphabet(&self) -> Result<Alphabet, LabelError> {
        Alphabet::new(self.alphabet.iter().copied(), &self.wildcards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WILDCARDS: WildcardLabels = WildcardLabels::new_unchecked(100, 101);

    #[test]
    fn rule_labels_validation() {
        assert!(RuleLabels::new(200, 201, &WILDCARDS).is_ok());
        assert_eq!(
            RuleLabels::new(0, 201, &WILDCARDS).unwrap_err(),
            LabelError::EpsilonReserved {
                role: "rule separator"
            }
        );
        assert_eq!(
            RuleLabels::new(200, 101, &WILDCARDS).unwrap_err(),
            LabelError::WildcardCollision {
                role: "hard epsilon",
                label: 101
            }
        );
        assert_eq!(
            RuleLabels::new(200, 200, &WILDCARDS).unwrap_err(),
            LabelError::IdenticalRuleLabels(200)
        );
    }

    #[test]
    fn soften_hard_epsilon() {
        let rule = RuleLabels::new_unchecked(200, 201);
        assert_eq!(rule.soften(201), EPSILON);
        assert_eq!(rule.soften(5), 5);
        assert_eq!(rule.soften(200), 200);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "wildcards": { "other_id": 100, "other_nonid": 101 },
            "rule": { "separator": 200, "hard_epsilon": 201 },
            "alphabet": [1, 2, 3]
        }"#;
        let config: PassConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.wildcards, WILDCARDS);
        assert_eq!(config.rule, Some(RuleLabels::new_unchecked(200, 201)));
        assert_eq!(config.alphabet, vec![1, 2, 3]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_minimal_config() {
        let json = r#"{ "wildcards": { "other_id": 100, "other_nonid": 101 } }"#;
        let config: PassConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, PassConfig::new(WILDCARDS));
        assert!(config.expansion_alphabet().unwrap().is_empty());
    }

    #[test]
    fn reject_alphabet_with_wildcard() {
        let mut config = PassConfig::new(WILDCARDS);
        config.alphabet = vec![1, 100];
        assert_eq!(
            config.validate().unwrap_err(),
            LabelError::ReservedInAlphabet(100)
        );
    }
}
