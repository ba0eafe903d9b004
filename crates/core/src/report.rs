//! Plain-text report rendering.
//!
//! Builds the pre-screening report the calling layer hands to its delivery
//! channel (on-screen display, email, print). Pure string construction; the
//! timestamp is supplied by the caller so rendering stays deterministic.

use crate::assess::AssessmentResult;
use chrono::{DateTime, Utc};
use prescreen_catalog::Catalog;
use prescreen_types::{PainSeverity, SymptomDuration};

const SEPARATOR: &str = "=======================================";

const DISCLAIMER: &str = "This is NOT a medical diagnosis and does NOT replace professional \
medical advice.\nAlways consult a licensed healthcare provider for actual diagnosis and \
treatment.";

/// Patient context included in the rendered report.
#[derive(Debug, Clone)]
pub struct PatientDetails {
    pub age: u32,
    pub sex: String,
    pub pain_severity: PainSeverity,
    pub duration: SymptomDuration,
}

/// Renders the assessment as a plain-text pre-screening report.
///
/// Symptom codes are resolved to display names through the catalog; a code
/// the catalog does not know is printed as-is rather than dropped.
pub fn render_text_report(
    result: &AssessmentResult,
    patient: &PatientDetails,
    catalog: &Catalog,
    generated_at: DateTime<Utc>,
) -> String {
    let symptom_names: Vec<&str> = result
        .all_symptoms
        .iter()
        .map(|id| {
            catalog
                .symptom(id)
                .map(|s| s.name.as_str())
                .unwrap_or(id.as_str())
        })
        .collect();

    let mut out = String::new();
    out.push_str("MEDICAL PRE-SCREENING REPORT\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format("%B %d, %Y at %I:%M %p")
    ));

    out.push_str("IMPORTANT DISCLAIMER\n");
    out.push_str(DISCLAIMER);
    out.push_str(&format!("\n\n{SEPARATOR}\n\n"));

    out.push_str("TRIAGE RECOMMENDATION:\n");
    out.push_str(&result.triage_description.to_uppercase());
    out.push_str(&format!("\n\n{SEPARATOR}\n\n"));

    out.push_str("PATIENT INFORMATION:\n");
    out.push_str(&format!("  Age: {} years\n", patient.age));
    out.push_str(&format!("  Sex: {}\n", capitalise(&patient.sex)));
    out.push_str(&format!(
        "  Pain Severity: {}/10\n",
        patient.pain_severity.as_u8()
    ));
    out.push_str(&format!("  Symptom Duration: {}\n", patient.duration));
    out.push_str(&format!("\n{SEPARATOR}\n\n"));

    out.push_str("REPORTED SYMPTOMS:\n");
    out.push_str(&symptom_names.join(", "));
    out.push_str(&format!("\n\n{SEPARATOR}\n\n"));

    out.push_str("POSSIBLE ASSOCIATED CONDITIONS:\n");
    out.push_str("(For informational purposes only - NOT a diagnosis)\n\n");
    for (idx, condition) in result.conditions.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} ({})\n",
            idx + 1,
            condition.name,
            condition.common_name
        ));
        out.push_str(&format!(
            "     Match: {}%\n",
            (condition.probability * 100.0) as i32
        ));
        out.push_str(&format!("     ICD-10: {}\n", condition.icd10));
    }
    out.push_str(&format!("\n{SEPARATOR}\n\n"));

    out.push_str("This assessment uses clinical decision support methodology.\n");
    out.push_str("All conditions are coded using ICD-10 standards.\n");
    out
}

/// First letter upper-case, rest lower-case, however the form collected it.
fn capitalise(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
