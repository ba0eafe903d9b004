//! Symptom reference data: categories, body regions, and symptom records.

use serde::{Deserialize, Serialize};

/// Clinical category a symptom is grouped under on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    General,
    Respiratory,
    Cardiovascular,
    Digestive,
    Neurological,
    Musculoskeletal,
    Dermatological,
}

impl Category {
    /// All categories in display order. Grouped symptom enumeration follows
    /// this order.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Respiratory,
        Category::Cardiovascular,
        Category::Digestive,
        Category::Neurological,
        Category::Musculoskeletal,
        Category::Dermatological,
    ];

    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Respiratory => "Respiratory",
            Self::Cardiovascular => "Cardiovascular",
            Self::Digestive => "Digestive",
            Self::Neurological => "Neurological",
            Self::Musculoskeletal => "Musculoskeletal",
            Self::Dermatological => "Dermatological",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse body region a symptom maps to on the body-map selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRegion {
    Head,
    Chest,
    Abdomen,
    Body,
    General,
}

impl BodyRegion {
    /// Returns the display name for this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Head => "Head/Face",
            Self::Chest => "Chest/Lungs",
            Self::Abdomen => "Abdomen/Stomach",
            Self::Body => "Arms/Legs/Back",
            Self::General => "General/Whole Body",
        }
    }
}

impl std::fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single symptom definition.
///
/// Immutable reference data. The identifier is the stable code the engine,
/// the condition rules, and the calling layer all use; the name is only for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Symptom {
    /// Unique symptom code, e.g. `"s_98"`
    pub id: String,
    /// Display name, e.g. `"Fever"`
    pub name: String,
    /// Clinical category for form grouping
    pub category: Category,
    /// Body region for the body-map filter, when one applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<BodyRegion>,
}
