//! # Prescreen Catalog
//!
//! Static reference data for the symptom triage evaluator: symptom
//! definitions, condition-matching rules, and confirming-symptom weights.
//!
//! The catalog is read-only. Adding a symptom or a condition rule is a data
//! change only — the assessment engine iterates whatever the catalog
//! contains and hardcodes no symptom identifiers in its question-generation
//! control flow (the per-condition scoring tables live in `prescreen-core`
//! and reference symptoms through [`ids`]).
//!
//! Besides the built-in reference data, a catalog can be loaded from a YAML
//! file with a strict wire model, so deployments can ship their own rule
//! sets without a code change.

mod catalog;
mod rule;
mod symptom;

pub use catalog::Catalog;
pub use rule::{ConditionRule, ConfirmingSymptom};
pub use symptom::{BodyRegion, Category, Symptom};

/// Symptom identifier constants for the built-in catalog.
///
/// Scoring tables and tests reference symptoms through these constants so a
/// code renamed here is renamed everywhere it is used.
pub mod ids {
    pub const HEADACHE: &str = "s_21";
    pub const DIZZINESS: &str = "s_15";
    pub const SORE_THROAT: &str = "s_1986";
    pub const RUNNY_NOSE: &str = "s_1995";
    pub const NASAL_CONGESTION: &str = "s_305";
    pub const SNEEZING: &str = "s_1993";
    pub const WATERY_EYES: &str = "s_602";
    pub const CHEST_PAIN: &str = "s_102";
    pub const COUGH: &str = "s_1989";
    pub const SHORTNESS_OF_BREATH: &str = "s_1988";
    pub const PALPITATIONS: &str = "s_488";
    pub const ABDOMINAL_PAIN: &str = "s_1967";
    pub const NAUSEA: &str = "s_1968";
    pub const VOMITING: &str = "s_1969";
    pub const DIARRHEA: &str = "s_1970";
    pub const MUSCLE_PAIN: &str = "s_1998";
    pub const JOINT_PAIN: &str = "s_2018";
    pub const SKIN_RASH: &str = "s_1999";
    pub const FEVER: &str = "s_98";
    pub const FATIGUE: &str = "s_107";
    pub const LOSS_OF_APPETITE: &str = "s_13";
    pub const CHILLS: &str = "s_2001";
    pub const WEIGHT_LOSS: &str = "s_1962";
}

/// Errors that can occur when loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error while reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The same symptom identifier was declared twice
    #[error("duplicate symptom identifier: {0}")]
    DuplicateSymptom(String),

    /// A condition rule references a symptom the catalog does not declare
    #[error("condition rule '{rule}' references unknown symptom '{symptom}'")]
    UnknownSymptomReference { rule: String, symptom: String },

    /// A confirming-symptom weight lies outside the open interval (0, 1)
    #[error("condition rule '{rule}' has invalid weight {weight} for symptom '{symptom}' (must be in (0, 1))")]
    InvalidWeight {
        rule: String,
        symptom: String,
        weight: f64,
    },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
