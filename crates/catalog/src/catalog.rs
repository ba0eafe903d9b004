//! The catalog itself: built-in reference data, lookups, and YAML loading.

use crate::rule::{ConditionRule, ConfirmingSymptom};
use crate::symptom::{BodyRegion, Category, Symptom};
use crate::{ids, CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Read-only collection of symptom definitions and condition rules.
///
/// Condition rules are kept in declaration order, and that order is load
/// bearing: the follow-up generator iterates rules in this order, and when
/// two rules probe the same confirming symptom the first rule's phrasing
/// wins. The built-in order is common cold, influenza, gastroenteritis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    symptoms: Vec<Symptom>,
    condition_rules: Vec<ConditionRule>,
}

impl Catalog {
    /// Creates a catalog from parts, validating cross-references and
    /// weights.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if a symptom identifier is duplicated, a
    /// rule references an undeclared symptom, or a confirming weight lies
    /// outside (0, 1).
    pub fn new(
        symptoms: Vec<Symptom>,
        condition_rules: Vec<ConditionRule>,
    ) -> CatalogResult<Self> {
        let catalog = Self {
            symptoms,
            condition_rules,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in reference catalog: 23 symptoms across seven categories
    /// and three condition rules.
    pub fn builtin() -> Self {
        Self {
            symptoms: builtin_symptoms(),
            condition_rules: builtin_condition_rules(),
        }
    }

    /// Loads and validates a catalog from a YAML string.
    ///
    /// The wire model is strict: unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if parsing or validation fails.
    pub fn from_yaml_str(input: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_yaml::from_str(input)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads and validates a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the file cannot be read or the content
    /// fails parsing or validation.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&input)
    }

    /// Looks up a symptom by identifier.
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    /// All symptoms in declaration order.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Symptoms grouped by category, in [`Category::ALL`] order. Categories
    /// with no symptoms are omitted.
    pub fn symptoms_by_category(&self) -> Vec<(Category, Vec<&Symptom>)> {
        Category::ALL
            .iter()
            .filter_map(|category| {
                let group: Vec<&Symptom> = self
                    .symptoms
                    .iter()
                    .filter(|s| s.category == *category)
                    .collect();
                if group.is_empty() {
                    None
                } else {
                    Some((*category, group))
                }
            })
            .collect()
    }

    /// Symptoms whose body region is one of the given regions. An empty
    /// region list means no filter and returns every symptom.
    pub fn symptoms_in_regions(&self, regions: &[BodyRegion]) -> Vec<&Symptom> {
        if regions.is_empty() {
            return self.symptoms.iter().collect();
        }
        self.symptoms
            .iter()
            .filter(|s| s.region.is_some_and(|r| regions.contains(&r)))
            .collect()
    }

    /// All condition rules, in declaration order.
    pub fn condition_rules(&self) -> &[ConditionRule] {
        &self.condition_rules
    }

    fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for symptom in &self.symptoms {
            if !seen.insert(symptom.id.as_str()) {
                return Err(CatalogError::DuplicateSymptom(symptom.id.clone()));
            }
        }

        for rule in &self.condition_rules {
            for id in &rule.primary {
                if !seen.contains(id.as_str()) {
                    return Err(CatalogError::UnknownSymptomReference {
                        rule: rule.id.clone(),
                        symptom: id.clone(),
                    });
                }
            }
            for confirm in &rule.confirming {
                if !seen.contains(confirm.id.as_str()) {
                    return Err(CatalogError::UnknownSymptomReference {
                        rule: rule.id.clone(),
                        symptom: confirm.id.clone(),
                    });
                }
                if !(confirm.weight > 0.0 && confirm.weight < 1.0) {
                    return Err(CatalogError::InvalidWeight {
                        rule: rule.id.clone(),
                        symptom: confirm.id.clone(),
                        weight: confirm.weight,
                    });
                }
            }
        }
        Ok(())
    }
}

fn symptom(id: &str, name: &str, category: Category, region: BodyRegion) -> Symptom {
    Symptom {
        id: id.into(),
        name: name.into(),
        category,
        region: Some(region),
    }
}

fn confirming(id: &str, name: &str, weight: f64) -> ConfirmingSymptom {
    ConfirmingSymptom {
        id: id.into(),
        name: name.into(),
        weight,
    }
}

fn builtin_symptoms() -> Vec<Symptom> {
    use Category::*;
    let head = BodyRegion::Head;
    let chest = BodyRegion::Chest;
    let abdomen = BodyRegion::Abdomen;
    let body = BodyRegion::Body;
    let whole = BodyRegion::General;
    vec![
        // Head/Face
        symptom(ids::HEADACHE, "Headache", General, head),
        symptom(ids::DIZZINESS, "Dizziness", Neurological, head),
        symptom(ids::SORE_THROAT, "Sore throat", Respiratory, head),
        symptom(ids::RUNNY_NOSE, "Runny nose", Respiratory, head),
        symptom(ids::NASAL_CONGESTION, "Nasal congestion", Respiratory, head),
        symptom(ids::SNEEZING, "Sneezing", Respiratory, head),
        symptom(ids::WATERY_EYES, "Watery eyes", General, head),
        // Chest/Respiratory
        symptom(ids::CHEST_PAIN, "Chest pain", Cardiovascular, chest),
        symptom(ids::COUGH, "Cough", Respiratory, chest),
        symptom(
            ids::SHORTNESS_OF_BREATH,
            "Shortness of breath",
            Respiratory,
            chest,
        ),
        symptom(ids::PALPITATIONS, "Palpitations", Cardiovascular, chest),
        // Abdomen
        symptom(ids::ABDOMINAL_PAIN, "Abdominal pain", Digestive, abdomen),
        symptom(ids::NAUSEA, "Nausea", Digestive, abdomen),
        symptom(ids::VOMITING, "Vomiting", Digestive, abdomen),
        symptom(ids::DIARRHEA, "Diarrhea", Digestive, abdomen),
        // Musculoskeletal
        symptom(ids::MUSCLE_PAIN, "Muscle pain", Musculoskeletal, body),
        symptom(ids::JOINT_PAIN, "Joint pain", Musculoskeletal, body),
        // Skin
        symptom(ids::SKIN_RASH, "Skin rash", Dermatological, body),
        // General
        symptom(ids::FEVER, "Fever", General, whole),
        symptom(ids::FATIGUE, "Fatigue", General, whole),
        symptom(ids::LOSS_OF_APPETITE, "Loss of appetite", General, whole),
        symptom(ids::CHILLS, "Chills", General, whole),
        symptom(ids::WEIGHT_LOSS, "Weight loss", General, whole),
    ]
}

fn builtin_condition_rules() -> Vec<ConditionRule> {
    vec![
        ConditionRule {
            id: "common_cold".into(),
            primary: vec![
                ids::FEVER.into(),
                ids::FATIGUE.into(),
                ids::SORE_THROAT.into(),
                ids::RUNNY_NOSE.into(),
            ],
            confirming: vec![
                confirming(ids::COUGH, "Cough", 0.15),
                confirming(ids::NASAL_CONGESTION, "Nasal congestion", 0.10),
                confirming(ids::SNEEZING, "Sneezing", 0.08),
            ],
        },
        ConditionRule {
            id: "influenza".into(),
            primary: vec![
                ids::HEADACHE.into(),
                ids::FEVER.into(),
                ids::FATIGUE.into(),
                ids::MUSCLE_PAIN.into(),
            ],
            confirming: vec![
                confirming(ids::COUGH, "Cough", 0.12),
                confirming(ids::CHILLS, "Chills", 0.15),
                confirming(ids::SORE_THROAT, "Sore throat", 0.08),
            ],
        },
        ConditionRule {
            id: "gastroenteritis".into(),
            primary: vec![
                ids::ABDOMINAL_PAIN.into(),
                ids::NAUSEA.into(),
                ids::DIARRHEA.into(),
            ],
            confirming: vec![
                confirming(ids::VOMITING, "Vomiting", 0.15),
                confirming(ids::FEVER, "Fever", 0.08),
            ],
        },
    ]
}
