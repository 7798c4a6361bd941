//! Line classification for the additive text grammar
//!
//! Every trimmed, non-empty input line is exactly one of:
//! - Code-header: an E-number token, optionally followed by a dash and
//!   trailing text ("E102" or "E102 - Tartrazine")
//! - Section-header: `<Label>: <value>` with a label from the fixed set
//! - Continuation: anything else, appended to the most recently opened section

use crate::app::models::FieldKey;
use crate::constants::{is_empty_marker, marker_key, INSUFFICIENT_CONTENT_MARKER};
use crate::Result;
use regex::Regex;

/// Immutable parsing rules, compiled once at startup and passed by
/// reference into the classifier and builder
#[derive(Debug)]
pub struct ParserRules {
    code_line: Regex,
    section_line: Regex,
    name_prefix: Regex,
}

impl ParserRules {
    /// Compile the rule set
    pub fn new() -> Result<Self> {
        Ok(Self {
            code_line: Regex::new(r"^(E\d+[a-zA-Z]?)(\s*-\s*.*)?$")?,
            section_line: Regex::new(
                r"(?i)^(Name|Description|Function|Origin|Health risks|Usage in foods|Acceptable daily intake \(ADI\)|Other details):\s*(.*)$",
            )?,
            name_prefix: Regex::new(r"(?i)^E\d+[a-zA-Z]?\s*-\s*")?,
        })
    }

    /// Classify one trimmed, non-empty line
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(captures) = self.code_line.captures(line) {
            // Inline trailing text after the dash is ignored; section
            // headers own field population.
            if let Some(code) = captures.get(1) {
                return LineKind::CodeHeader {
                    code: code.as_str(),
                };
            }
        }

        if let Some(captures) = self.section_line.captures(line) {
            let label = captures
                .get(1)
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_default();
            if let Some(key) = FieldKey::from_label(&label) {
                let raw = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
                return LineKind::SectionHeader {
                    key,
                    value: self.normalize_value(key, raw.trim()),
                };
            }
        }

        LineKind::Continuation(line)
    }

    /// Apply the edge policy to a raw section value: blank placeholder
    /// phrases, preserve the "insufficient relevant content" marker for
    /// traceability, and strip any embedded code prefix from names.
    pub fn normalize_value(&self, key: FieldKey, raw: &str) -> SectionValue {
        let mut value = raw.trim().to_string();
        let mut preserved_marker = None;

        if is_empty_marker(&value) {
            if key != FieldKey::OtherDetails
                && marker_key(&value).starts_with(INSUFFICIENT_CONTENT_MARKER)
            {
                preserved_marker = Some(value.clone());
            }
            value.clear();
        }

        if key == FieldKey::Name {
            value = self.name_prefix.replace(&value, "").trim().to_string();
        }

        SectionValue {
            value,
            preserved_marker,
        }
    }
}

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens a new record for `code`
    CodeHeader { code: &'a str },
    /// Opens section `key` on the current record with a normalized value
    SectionHeader { key: FieldKey, value: SectionValue },
    /// Appended to the most recently opened section, if any
    Continuation(&'a str),
}

/// A section value after edge-policy normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionValue {
    /// The cleaned value, possibly blanked to empty
    pub value: String,
    /// Original placeholder phrase to append to `otherDetails`, if the
    /// value was blanked by the traceability marker
    pub preserved_marker: Option<String>,
}
