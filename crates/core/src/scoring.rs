//! Per-condition scoring rules.
//!
//! Each candidate condition is one [`ScoringRule`] record and a single
//! generic scorer evaluates them all, so the scoring parameters live in one
//! table rather than being duplicated through control flow. The numbers are
//! the clinically reviewed heuristics; scores are weighted sums capped at
//! fixed ceilings, not calibrated probabilities.

use crate::assess::Condition;
use prescreen_catalog::ids;
use prescreen_types::Urgency;
use tracing::debug;

/// Scoring parameters for one candidate condition.
pub(crate) struct ScoringRule {
    pub id: &'static str,
    pub name: &'static str,
    pub common_name: &'static str,
    pub icd10: &'static str,
    /// Symptoms counted towards the activation gate
    pub primary: &'static [&'static str],
    /// Minimum number of primary symptoms present for the rule to fire
    pub min_primary: usize,
    /// Starting score once fired
    pub base: f64,
    /// Score added per present primary symptom
    pub per_primary: f64,
    /// Additive bonus per present confirming symptom
    pub bonuses: &'static [(&'static str, f64)],
    /// Score ceiling
    pub cap: f64,
    pub urgency: Option<Urgency>,
    /// Symptoms counted in the reported `matched` figure. Usually primary
    /// plus bonus symptoms, but kept explicit because coronary disease also
    /// counts dizziness.
    pub relevant: &'static [&'static str],
}

pub(crate) const SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        id: "c_430",
        name: "Upper respiratory tract infection",
        common_name: "Common cold",
        icd10: "J06.9",
        primary: &[ids::FEVER, ids::FATIGUE, ids::SORE_THROAT, ids::RUNNY_NOSE],
        min_primary: 2,
        base: 0.55,
        per_primary: 0.08,
        bonuses: &[
            (ids::COUGH, 0.15),
            (ids::NASAL_CONGESTION, 0.10),
            (ids::SNEEZING, 0.08),
        ],
        cap: 0.95,
        urgency: None,
        relevant: &[
            ids::FEVER,
            ids::FATIGUE,
            ids::SORE_THROAT,
            ids::RUNNY_NOSE,
            ids::COUGH,
            ids::NASAL_CONGESTION,
            ids::SNEEZING,
        ],
    },
    ScoringRule {
        id: "c_782",
        name: "Influenza",
        common_name: "Flu",
        icd10: "J11.1",
        primary: &[ids::HEADACHE, ids::FEVER, ids::FATIGUE, ids::MUSCLE_PAIN],
        min_primary: 2,
        base: 0.50,
        per_primary: 0.08,
        bonuses: &[
            (ids::COUGH, 0.12),
            (ids::CHILLS, 0.15),
            (ids::SORE_THROAT, 0.08),
        ],
        cap: 0.95,
        urgency: None,
        relevant: &[
            ids::HEADACHE,
            ids::FEVER,
            ids::FATIGUE,
            ids::MUSCLE_PAIN,
            ids::COUGH,
            ids::CHILLS,
            ids::SORE_THROAT,
        ],
    },
    ScoringRule {
        id: "c_531",
        name: "Gastroenteritis",
        common_name: "Stomach flu",
        icd10: "A09",
        primary: &[ids::ABDOMINAL_PAIN, ids::DIARRHEA],
        min_primary: 1,
        base: 0.60,
        per_primary: 0.0,
        bonuses: &[
            (ids::VOMITING, 0.15),
            (ids::NAUSEA, 0.10),
            (ids::FEVER, 0.08),
        ],
        cap: 0.95,
        urgency: None,
        relevant: &[
            ids::ABDOMINAL_PAIN,
            ids::DIARRHEA,
            ids::VOMITING,
            ids::NAUSEA,
            ids::FEVER,
        ],
    },
    ScoringRule {
        id: "c_49",
        name: "Coronary artery disease",
        common_name: "Heart disease",
        icd10: "I25.1",
        primary: &[ids::CHEST_PAIN],
        min_primary: 1,
        base: 0.40,
        per_primary: 0.0,
        bonuses: &[(ids::SHORTNESS_OF_BREATH, 0.20)],
        cap: 0.85,
        urgency: Some(Urgency::High),
        relevant: &[ids::CHEST_PAIN, ids::SHORTNESS_OF_BREATH, ids::DIZZINESS],
    },
];

/// Fallback condition when no scoring rule fires.
pub(crate) fn fallback_condition(effective_count: usize) -> Condition {
    Condition {
        id: "c_generic".into(),
        name: "Non-specific symptoms".into(),
        common_name: "General malaise".into(),
        probability: 0.50,
        icd10: "R53.81".into(),
        urgency: None,
        matched: effective_count,
    }
}

impl ScoringRule {
    /// Evaluates this rule against the effective symptom set. Returns a
    /// condition record when the rule fires, `None` otherwise.
    pub(crate) fn evaluate(&self, has: &dyn Fn(&str) -> bool) -> Option<Condition> {
        let primary_count = self.primary.iter().copied().filter(|&id| has(id)).count();
        if primary_count < self.min_primary {
            return None;
        }

        let mut probability = self.base + self.per_primary * primary_count as f64;
        for (id, weight) in self.bonuses.iter().copied() {
            if has(id) {
                probability += weight;
            }
        }
        let probability = probability.min(self.cap);
        let matched = self.relevant.iter().copied().filter(|&id| has(id)).count();
        debug!(rule = self.id, probability, matched, "scoring rule fired");

        Some(Condition {
            id: self.id.into(),
            name: self.name.into(),
            common_name: self.common_name.into(),
            probability,
            icd10: self.icd10.into(),
            urgency: self.urgency,
            matched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<'a>(members: &'a [&'static str]) -> impl Fn(&str) -> bool + 'a {
        move |id: &str| members.contains(&id)
    }

    #[test]
    fn cold_rule_needs_two_primary_symptoms() {
        let rule = &SCORING_RULES[0];
        assert!(rule.evaluate(&set(&[ids::FEVER])).is_none());
        let condition = rule
            .evaluate(&set(&[ids::FEVER, ids::FATIGUE]))
            .expect("fires at two");
        assert!((condition.probability - 0.71).abs() < 1e-9);
    }

    #[test]
    fn cold_score_is_capped_at_ninety_five_percent() {
        // All four primaries plus all three bonuses would be 1.20 uncapped.
        let condition = SCORING_RULES[0]
            .evaluate(&set(&[
                ids::FEVER,
                ids::FATIGUE,
                ids::SORE_THROAT,
                ids::RUNNY_NOSE,
                ids::COUGH,
                ids::NASAL_CONGESTION,
                ids::SNEEZING,
            ]))
            .expect("fires");
        assert_eq!(condition.probability, 0.95);
        assert_eq!(condition.matched, 7);
    }

    #[test]
    fn gastroenteritis_fires_on_either_gate_symptom() {
        let rule = &SCORING_RULES[2];
        let condition = rule.evaluate(&set(&[ids::DIARRHEA])).expect("fires");
        assert!((condition.probability - 0.60).abs() < 1e-9);
        assert!(rule.evaluate(&set(&[ids::NAUSEA])).is_none());
    }

    #[test]
    fn coronary_rule_carries_high_urgency_and_its_own_cap() {
        let rule = &SCORING_RULES[3];
        let condition = rule
            .evaluate(&set(&[ids::CHEST_PAIN, ids::SHORTNESS_OF_BREATH]))
            .expect("fires");
        assert!((condition.probability - 0.60).abs() < 1e-9);
        assert_eq!(condition.urgency, Some(Urgency::High));
        assert_eq!(rule.cap, 0.85);
    }

    #[test]
    fn coronary_matched_count_includes_dizziness() {
        let condition = SCORING_RULES[3]
            .evaluate(&set(&[ids::CHEST_PAIN, ids::DIZZINESS]))
            .expect("fires");
        assert_eq!(condition.matched, 2);
    }
}
