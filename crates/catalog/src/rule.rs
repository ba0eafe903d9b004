//! Condition-matching rules used to drive follow-up questioning.

use serde::{Deserialize, Serialize};

/// A confirming symptom entry within a [`ConditionRule`].
///
/// Confirming symptoms refine a condition's score once the rule has
/// activated; they never gate activation. The display name is carried here
/// so question text can be phrased without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfirmingSymptom {
    /// Symptom code being probed
    pub id: String,
    /// Display name used in question phrasing
    pub name: String,
    /// Score contribution when the answer is yes, in (0, 1)
    pub weight: f64,
}

/// One candidate condition family: the primary symptoms whose presence
/// activates it, and the ordered confirming symptoms worth asking about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionRule {
    /// Condition identifier, e.g. `"common_cold"`
    pub id: String,
    /// Primary symptom codes; the activation check counts these
    pub primary: Vec<String>,
    /// Confirming symptoms in descending clinical relevance
    pub confirming: Vec<ConfirmingSymptom>,
}

impl ConditionRule {
    /// Returns true when enough of this rule's primary symptoms are present
    /// for the rule to activate: the present fraction must reach 0.6.
    pub fn activates(&self, present: &dyn Fn(&str) -> bool) -> bool {
        let matched = self.primary.iter().filter(|id| present(id.as_str())).count();
        matched as f64 >= self.primary.len() as f64 * 0.6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_of_four() -> ConditionRule {
        ConditionRule {
            id: "test".into(),
            primary: vec!["s_1".into(), "s_2".into(), "s_3".into(), "s_4".into()],
            confirming: vec![],
        }
    }

    #[test]
    fn activation_requires_sixty_percent_of_primaries() {
        let rule = rule_of_four();
        // 2 of 4 is below the 0.6 fraction, 3 of 4 is above it.
        let two = |id: &str| id == "s_1" || id == "s_2";
        assert!(!rule.activates(&two));
        let three = |id: &str| id != "s_4";
        assert!(rule.activates(&three));
    }

    #[test]
    fn activation_of_a_three_primary_rule_needs_two() {
        let rule = ConditionRule {
            id: "test".into(),
            primary: vec!["s_1".into(), "s_2".into(), "s_3".into()],
            confirming: vec![],
        };
        let one = |id: &str| id == "s_1";
        assert!(!rule.activates(&one));
        let two = |id: &str| id == "s_1" || id == "s_2";
        assert!(rule.activates(&two));
    }
}
