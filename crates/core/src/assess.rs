//! Condition assessment: merge, score, rank, and triage.

use crate::scoring::{fallback_condition, SCORING_RULES};
use prescreen_catalog::ids;
use prescreen_types::{FollowUpAnswer, PainSeverity, SymptomDuration, TriageTier, Urgency};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Pain severity at or above which a 24-hour consultation is recommended.
const PROMPT_CONSULTATION_PAIN: u8 = 8;

/// How many conditions the final report keeps.
const MAX_REPORTED_CONDITIONS: usize = 3;

/// One assessed candidate condition.
///
/// Created fresh each assessment and never mutated afterwards. The
/// `urgency` key is serialised only when present, which the calling layer
/// relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub common_name: String,
    /// Heuristic score in [0, cap]; not a calibrated probability
    pub probability: f64,
    pub icd10: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    /// How many of the rule's relevant symptoms were present
    pub matched: usize,
}

/// Everything the engine needs for one assessment, as collected by the
/// calling layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Symptom codes the patient selected
    pub symptoms: Vec<String>,
    /// Follow-up answers keyed by probed symptom code
    #[serde(default)]
    pub answers: BTreeMap<String, FollowUpAnswer>,
    pub pain_severity: PainSeverity,
    #[serde(default)]
    pub duration: SymptomDuration,
    /// Patient's emergency self-report
    #[serde(default)]
    pub emergency: bool,
}

impl AssessmentInput {
    /// Runs the assessment over this input.
    pub fn assess(&self) -> AssessmentResult {
        assess_conditions(
            &self.symptoms,
            &self.answers,
            self.pain_severity,
            self.duration,
            self.emergency,
        )
    }
}

/// The final triage report for one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    /// Up to three conditions, ranked by probability descending
    pub conditions: Vec<Condition>,
    pub triage: TriageTier,
    pub triage_description: String,
    /// The effective symptom set: initial selections plus yes-answered
    /// follow-ups, in that order
    pub all_symptoms: Vec<String>,
}

/// Assesses possible conditions for the given symptoms and patient context.
///
/// The effective symptom set is the selected symptoms plus every follow-up
/// symptom answered exactly `yes` (`no` and `unknown` answers change
/// nothing). Each scoring rule is evaluated against that set; if none fires
/// a single non-specific fallback condition is reported. Conditions are
/// ranked by probability (stable, so ties keep rule-evaluation order) and
/// the report keeps the top three.
///
/// The triage tier is decided in strict priority order:
/// 1. emergency self-report, or chest pain present → `emergency`
/// 2. pain severity ≥ 8, or any fired condition tagged high-urgency →
///    `consultation_24` (checked against the full fired list, before the
///    top-three truncation)
/// 3. duration of more than a week → `consultation`
/// 4. otherwise → `self_care`
///
/// Total over its input domain: out-of-range severities were clamped by
/// [`PainSeverity`] and unrecognised duration labels behave as "not more
/// than a week".
pub fn assess_conditions(
    selected: &[String],
    answers: &BTreeMap<String, FollowUpAnswer>,
    pain_severity: PainSeverity,
    duration: SymptomDuration,
    emergency: bool,
) -> AssessmentResult {
    let mut all_symptoms: Vec<String> = selected.to_vec();
    for (symptom_id, answer) in answers {
        if *answer == FollowUpAnswer::Yes && !all_symptoms.iter().any(|s| s == symptom_id) {
            all_symptoms.push(symptom_id.clone());
        }
    }

    let effective: HashSet<&str> = all_symptoms.iter().map(String::as_str).collect();
    let has = |id: &str| effective.contains(id);

    let mut conditions: Vec<Condition> = SCORING_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(&has))
        .collect();
    if conditions.is_empty() {
        conditions.push(fallback_condition(all_symptoms.len()));
    }

    conditions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Urgency is judged against every fired condition, including any that
    // fall outside the reported top three.
    let triage = decide_triage(
        emergency,
        has(ids::CHEST_PAIN),
        pain_severity,
        duration,
        &conditions,
    );
    debug!(
        triage = triage.code(),
        fired = conditions.len(),
        symptoms = all_symptoms.len(),
        "assessment complete"
    );
    conditions.truncate(MAX_REPORTED_CONDITIONS);

    AssessmentResult {
        conditions,
        triage,
        triage_description: triage.description().to_owned(),
        all_symptoms,
    }
}

pub(crate) fn decide_triage(
    emergency: bool,
    chest_pain: bool,
    pain_severity: PainSeverity,
    duration: SymptomDuration,
    fired: &[Condition],
) -> TriageTier {
    if emergency || chest_pain {
        return TriageTier::Emergency;
    }
    if pain_severity.as_u8() >= PROMPT_CONSULTATION_PAIN
        || fired.iter().any(|c| c.urgency == Some(Urgency::High))
    {
        return TriageTier::Consultation24;
    }
    if duration == SymptomDuration::MoreThanAWeek {
        return TriageTier::Consultation;
    }
    TriageTier::SelfCare
}
