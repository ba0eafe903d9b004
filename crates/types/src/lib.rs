//! Shared vocabulary types for the pre-screening triage engine.
//!
//! These types carry the invariants the engine relies on so that callers can
//! hand over plain data and the engine stays total: constructors clamp or
//! degrade rather than fail. Anything fallible (missing fields, malformed
//! requests) is a presentation-layer concern and is validated there.

use serde::{Deserialize, Serialize};

/// Patient-reported pain severity on a 0–10 scale.
///
/// This type wraps a `u8` and guarantees the value lies in `0..=10`.
/// Construction clamps out-of-range input rather than failing, so the
/// assessment engine remains total over whatever the calling layer collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PainSeverity(u8);

impl PainSeverity {
    /// Maximum representable severity.
    pub const MAX: u8 = 10;

    /// Creates a new `PainSeverity`, clamping the input into `0..=10`.
    ///
    /// Negative values clamp to 0 and values above 10 clamp to 10.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    /// Returns the severity as a plain integer in `0..=10`.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PainSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for PainSeverity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PainSeverity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(PainSeverity::new(value))
    }
}

/// How long the patient reports having had their symptoms.
///
/// The four labelled buckets are the literal values the intake form emits.
/// Any other label degrades to [`SymptomDuration::Unspecified`], which the
/// triage rules treat the same as "not more than a week".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymptomDuration {
    LessThan24Hours,
    OneToThreeDays,
    FourToSevenDays,
    MoreThanAWeek,
    #[default]
    Unspecified,
}

impl SymptomDuration {
    /// Parses a duration label. Unrecognised labels map to `Unspecified`;
    /// this never fails.
    pub fn parse(label: &str) -> Self {
        match label {
            "Less than 24 hours" => Self::LessThan24Hours,
            "1-3 days" => Self::OneToThreeDays,
            "4-7 days" => Self::FourToSevenDays,
            "More than a week" => Self::MoreThanAWeek,
            _ => Self::Unspecified,
        }
    }

    /// Returns the form label for this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LessThan24Hours => "Less than 24 hours",
            Self::OneToThreeDays => "1-3 days",
            Self::FourToSevenDays => "4-7 days",
            Self::MoreThanAWeek => "More than a week",
            Self::Unspecified => "Unspecified",
        }
    }
}

impl std::fmt::Display for SymptomDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl serde::Serialize for SymptomDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for SymptomDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(SymptomDuration::parse(&label))
    }
}

/// A patient's answer to a follow-up question.
///
/// Only `Yes` ever adds the probed symptom to the effective symptom set;
/// `No` and `Unknown` leave scoring untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpAnswer {
    Yes,
    No,
    Unknown,
}

/// Urgency tag carried by a high-priority condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
}

/// Discrete urgency classification guiding the recommended timeframe for
/// seeking care.
///
/// The wire codes and description strings are a documented contract with the
/// presentation layer and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriageTier {
    #[serde(rename = "emergency")]
    Emergency,
    #[serde(rename = "consultation_24")]
    Consultation24,
    #[serde(rename = "consultation")]
    Consultation,
    #[serde(rename = "self_care")]
    SelfCare,
}

impl TriageTier {
    /// Returns the wire code for this tier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Consultation24 => "consultation_24",
            Self::Consultation => "consultation",
            Self::SelfCare => "self_care",
        }
    }

    /// Returns the human-readable recommendation for this tier.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Emergency => "Seek immediate medical attention",
            Self::Consultation24 => "Consult a healthcare provider within 24 hours",
            Self::Consultation => "Schedule an appointment with your healthcare provider",
            Self::SelfCare => "Consider monitoring symptoms and rest",
        }
    }
}

impl std::fmt::Display for TriageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
