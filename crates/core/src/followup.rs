//! Follow-up question generation.
//!
//! When a symptom selection gets close to a condition rule's primary
//! pattern, the engine proposes questions about that rule's confirming
//! symptoms. Questions are ephemeral: recomputed fresh for each call and
//! discarded once answered.

use prescreen_catalog::Catalog;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// The most questions one assessment session will ask.
const MAX_QUESTIONS: usize = 5;

/// A single follow-up prompt for the calling layer to put to the patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowUpQuestion {
    /// Symptom code being probed
    pub symptom_id: String,
    /// Ready-to-display question text
    pub question: String,
    /// Score contribution if answered yes
    pub weight: f64,
    /// Identifier of the condition rule that proposed the question
    pub condition: String,
}

/// Generates follow-up questions for the given symptom selection.
///
/// Condition rules are scanned in catalog declaration order; a rule
/// contributes a candidate question for each of its confirming symptoms not
/// already selected once at least 60% of its primary symptoms are present.
/// Candidates are then deduplicated by symptom (the first rule to probe a
/// symptom decides the phrasing and attribution), sorted by weight
/// descending with a stable sort so ties keep scan order, and truncated to
/// five.
///
/// Pure function of the selection and the catalog; returns an empty vector
/// when no rule comes close enough to ask anything.
pub fn generate_follow_up_questions(
    catalog: &Catalog,
    selected: &[String],
) -> Vec<FollowUpQuestion> {
    let chosen: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let present = |id: &str| chosen.contains(id);

    let mut questions = Vec::new();
    for rule in catalog.condition_rules() {
        if !rule.activates(&present) {
            continue;
        }
        debug!(rule = rule.id.as_str(), "condition rule close to pattern");
        for confirm in &rule.confirming {
            if !chosen.contains(confirm.id.as_str()) {
                questions.push(FollowUpQuestion {
                    symptom_id: confirm.id.clone(),
                    question: format!("Do you also have {}?", confirm.name.to_lowercase()),
                    weight: confirm.weight,
                    condition: rule.id.clone(),
                });
            }
        }
    }

    let mut seen = HashSet::new();
    questions.retain(|q| seen.insert(q.symptom_id.clone()));
    questions.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    questions.truncate(MAX_QUESTIONS);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use prescreen_catalog::ids;

    fn codes(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn too_few_primary_symptoms_ask_nothing() {
        let catalog = Catalog::builtin();
        // 2 of 4 cold primaries is below the 60% activation fraction.
        let questions =
            generate_follow_up_questions(&catalog, &codes(&[ids::FEVER, ids::FATIGUE]));
        assert!(questions.is_empty());
    }

    #[test]
    fn three_cold_primaries_probe_the_cold_confirmers() {
        let catalog = Catalog::builtin();
        let questions = generate_follow_up_questions(
            &catalog,
            &codes(&[ids::FEVER, ids::FATIGUE, ids::SORE_THROAT]),
        );
        let probed: Vec<&str> = questions.iter().map(|q| q.symptom_id.as_str()).collect();
        assert_eq!(probed, vec![ids::COUGH, ids::NASAL_CONGESTION, ids::SNEEZING]);
        assert!(questions.iter().all(|q| q.condition == "common_cold"));
        assert_eq!(questions[0].question, "Do you also have cough?");
    }

    #[test]
    fn already_selected_symptoms_are_never_probed() {
        let catalog = Catalog::builtin();
        let selected = codes(&[ids::FEVER, ids::FATIGUE, ids::SORE_THROAT, ids::COUGH]);
        let questions = generate_follow_up_questions(&catalog, &selected);
        assert!(questions.iter().all(|q| !selected.contains(&q.symptom_id)));
    }

    #[test]
    fn shared_confirming_symptom_keeps_the_first_rule_phrasing() {
        let catalog = Catalog::builtin();
        // Activates both the cold rule and the flu rule; cough confirms
        // both but the cold rule is scanned first.
        let questions = generate_follow_up_questions(
            &catalog,
            &codes(&[
                ids::FEVER,
                ids::FATIGUE,
                ids::SORE_THROAT,
                ids::HEADACHE,
                ids::MUSCLE_PAIN,
            ]),
        );
        let coughs: Vec<&FollowUpQuestion> = questions
            .iter()
            .filter(|q| q.symptom_id == ids::COUGH)
            .collect();
        assert_eq!(coughs.len(), 1);
        assert_eq!(coughs[0].condition, "common_cold");
        assert!((coughs[0].weight - 0.15).abs() < 1e-9);
    }

    #[test]
    fn questions_are_capped_at_five_and_weight_sorted() {
        let catalog = Catalog::builtin();
        // Activates all three rules with no confirming symptom selected:
        // six unique candidates compete for five slots.
        let questions = generate_follow_up_questions(
            &catalog,
            &codes(&[
                ids::FEVER,
                ids::FATIGUE,
                ids::RUNNY_NOSE,
                ids::HEADACHE,
                ids::MUSCLE_PAIN,
                ids::ABDOMINAL_PAIN,
                ids::NAUSEA,
            ]),
        );
        assert_eq!(questions.len(), 5);
        for pair in questions.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
        // The three 0.15-weight ties keep rule scan order.
        let probed: Vec<&str> = questions.iter().map(|q| q.symptom_id.as_str()).collect();
        assert_eq!(
            probed,
            vec![
                ids::COUGH,
                ids::CHILLS,
                ids::VOMITING,
                ids::NASAL_CONGESTION,
                ids::SNEEZING,
            ]
        );
    }

    #[test]
    fn no_duplicate_symptom_ids_in_the_output() {
        let catalog = Catalog::builtin();
        let questions = generate_follow_up_questions(
            &catalog,
            &codes(&[
                ids::FEVER,
                ids::FATIGUE,
                ids::SORE_THROAT,
                ids::RUNNY_NOSE,
                ids::HEADACHE,
                ids::MUSCLE_PAIN,
            ]),
        );
        let mut seen = HashSet::new();
        assert!(questions.iter().all(|q| seen.insert(q.symptom_id.clone())));
    }
}
