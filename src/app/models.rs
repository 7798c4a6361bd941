//! Core data models for the additive dataset
//!
//! Defines the fixed-shape additive record, the derived risk tier
//! enumeration, and the lookup index artifact structure. JSON field names
//! are pinned to the published dataset schema via serde renames.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived health-risk severity tier.
///
/// Computed exactly once per record from its final health-risk text,
/// never hand-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
    #[default]
    Unknown,
}

/// Descriptive field keys of an additive record, in the fixed order used
/// by section headers and the text export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Description,
    Function,
    Origin,
    HealthRisks,
    Usage,
    Adi,
    OtherDetails,
}

impl FieldKey {
    /// All descriptive fields in export order
    pub const ALL: [FieldKey; 8] = [
        FieldKey::Name,
        FieldKey::Description,
        FieldKey::Function,
        FieldKey::Origin,
        FieldKey::HealthRisks,
        FieldKey::Usage,
        FieldKey::Adi,
        FieldKey::OtherDetails,
    ];

    /// Human-readable section label used in the source grammar and export
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Description => "Description",
            FieldKey::Function => "Function",
            FieldKey::Origin => "Origin",
            FieldKey::HealthRisks => "Health risks",
            FieldKey::Usage => "Usage in foods",
            FieldKey::Adi => "Acceptable daily intake (ADI)",
            FieldKey::OtherDetails => "Other details",
        }
    }

    /// Map a lower-cased section label to its field key
    pub fn from_label(label: &str) -> Option<FieldKey> {
        match label {
            "name" => Some(FieldKey::Name),
            "description" => Some(FieldKey::Description),
            "function" => Some(FieldKey::Function),
            "origin" => Some(FieldKey::Origin),
            "health risks" => Some(FieldKey::HealthRisks),
            "usage in foods" => Some(FieldKey::Usage),
            "acceptable daily intake (adi)" => Some(FieldKey::Adi),
            "other details" => Some(FieldKey::OtherDetails),
            _ => None,
        }
    }
}

/// One food-additive record, keyed by its E-number code.
///
/// All descriptive fields are free text and may be empty. `risk_level`
/// is derived during finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Additive {
    pub code: String,
    pub name: String,
    pub description: String,
    pub function: String,
    pub origin: String,
    #[serde(rename = "healthRisks")]
    pub health_risks: String,
    pub usage: String,
    pub adi: String,
    #[serde(rename = "otherDetails")]
    pub other_details: String,
    #[serde(rename = "riskLevel", default)]
    pub risk_level: RiskLevel,
}

impl Additive {
    /// Create an empty record for the given code
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            description: String::new(),
            function: String::new(),
            origin: String::new(),
            health_risks: String::new(),
            usage: String::new(),
            adi: String::new(),
            other_details: String::new(),
            risk_level: RiskLevel::Unknown,
        }
    }

    /// Immutable access to a descriptive field
    pub fn field(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Description => &self.description,
            FieldKey::Function => &self.function,
            FieldKey::Origin => &self.origin,
            FieldKey::HealthRisks => &self.health_risks,
            FieldKey::Usage => &self.usage,
            FieldKey::Adi => &self.adi,
            FieldKey::OtherDetails => &self.other_details,
        }
    }

    /// Mutable access to a descriptive field
    pub fn field_mut(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Description => &mut self.description,
            FieldKey::Function => &mut self.function,
            FieldKey::Origin => &mut self.origin,
            FieldKey::HealthRisks => &mut self.health_risks,
            FieldKey::Usage => &mut self.usage,
            FieldKey::Adi => &mut self.adi,
            FieldKey::OtherDetails => &mut self.other_details,
        }
    }

    /// Append text to a field with a separating space
    pub fn append_field(&mut self, key: FieldKey, text: &str) {
        let field = self.field_mut(key);
        if field.is_empty() {
            *field = text.trim().to_string();
        } else {
            field.push(' ');
            field.push_str(text.trim());
        }
    }

    /// Count of non-empty descriptive fields, used to pick a winner among
    /// duplicate codes
    pub fn richness_score(&self) -> usize {
        FieldKey::ALL
            .iter()
            .filter(|key| !self.field(**key).is_empty())
            .count()
    }

    /// Leading integer value of the code ("E270a" -> 270)
    pub fn numeric_code(&self) -> u32 {
        numeric_code_value(&self.code)
    }

    /// Dataset sort key: numeric value ascending, full code string as the
    /// stable tie-break for suffixed variants
    pub fn sort_key(&self) -> (u32, String) {
        (self.numeric_code(), self.code.clone())
    }
}

/// Extract the leading integer embedded in an additive code.
/// Codes without digits sort first with value 0.
pub fn numeric_code_value(code: &str) -> u32 {
    let digits: String = code
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Code-to-position lookup index derived from the canonical ordering.
///
/// `by_code[code]` is the zero-based position of that code in the
/// canonical sequence; `codes` lists the codes in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetIndex {
    pub count: usize,
    pub codes: Vec<String>,
    #[serde(rename = "byCode")]
    pub by_code: BTreeMap<String, usize>,
}

impl DatasetIndex {
    /// Build the index from a finalized, ordered record sequence
    pub fn from_records(records: &[Additive]) -> Self {
        let codes: Vec<String> = records.iter().map(|a| a.code.clone()).collect();
        let by_code = codes
            .iter()
            .enumerate()
            .map(|(position, code)| (code.clone(), position))
            .collect();
        Self {
            count: records.len(),
            codes,
            by_code,
        }
    }
}
