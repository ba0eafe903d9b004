//! # Prescreen Core
//!
//! The assessment engine for the symptom pre-screening system: follow-up
//! question generation, condition scoring, and triage recommendation.
//!
//! Everything here is a pure function of its inputs and the static rule
//! data. There is no I/O, no mutable global state, and no async: every call
//! is independently computable, so concurrent assessments need no locking.
//!
//! **No presentation concerns**: form handling, session state, email
//! delivery, and clinic lookup belong to the calling layer. It hands this
//! crate plain data and renders what comes back.

pub mod assess;
pub mod followup;
pub mod report;
mod scoring;

pub use assess::{assess_conditions, AssessmentInput, AssessmentResult, Condition};
pub use followup::{generate_follow_up_questions, FollowUpQuestion};
pub use report::{render_text_report, PatientDetails};

pub use prescreen_types::{FollowUpAnswer, PainSeverity, SymptomDuration, TriageTier, Urgency};
