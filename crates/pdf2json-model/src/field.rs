//! Form field and boxset records.
//!
//! Field shapes follow the serialized contract consumed downstream: `id`,
//! `style`, `TI`, `AM`, `TU`, geometry, and a `T` block naming the semantic
//! type. Checkboxes and radio buttons are grouped into [`Boxset`]s.

use std::collections::BTreeMap;

use serde::Serialize;

/// Identifier block for a field or boxset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldId {
    /// Full field name.
    #[serde(rename = "Id")]
    pub id: String,
    /// Enumeration ordinal within the identifier's scope.
    #[serde(rename = "EN")]
    pub en: u32,
}

/// Semantic type block (`T`) of a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldKind {
    /// Semantic type name: `alpha`, `radio`, `box`, `link`, `signature`,
    /// `date`, `number`, `percent`, `zip`, `phone`, `ssn`, `mask`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Reserved extension map; empty today.
    #[serde(rename = "TypeInfo")]
    pub type_info: BTreeMap<String, String>,
}

impl FieldKind {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_info: BTreeMap::new(),
        }
    }
}

/// Dropdown option lists: parallel export values (`V`) and display
/// labels (`D`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionList {
    #[serde(rename = "V")]
    pub values: Vec<String>,
    #[serde(rename = "D")]
    pub display: Vec<String>,
}

/// Signature metadata copied from a signature dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SigBlock {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Signing date, ISO-8601.
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Reason", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(rename = "ContactInfo", skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

/// Attribute bit set on `AM` for read-only widgets.
pub const AM_READ_ONLY: u32 = 0x0000_0400;

/// A single interactive form field, in form-grid units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id: FieldId,
    /// Style table row used to render the field's content.
    pub style: i32,
    /// Tab index: monotonically increasing across the whole parse, never
    /// reused.
    #[serde(rename = "TI")]
    pub tab_index: u32,
    /// Attribute bitmask.
    #[serde(rename = "AM")]
    pub attr_mask: u32,
    /// Alternative (tooltip) text.
    #[serde(rename = "TU", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Keystroke mask value for masked text fields.
    #[serde(rename = "MV", skip_serializing_if = "Option::is_none")]
    pub mask_value: Option<String>,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "T")]
    pub kind: FieldKind,
    /// Current value.
    #[serde(rename = "V", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Option lists for dropdown/select fields.
    #[serde(rename = "PL", skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionList>,
    /// Set on checkbox/radio boxes that are on by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Signature metadata for signature fields.
    #[serde(rename = "Sig", skip_serializing_if = "Option::is_none")]
    pub sig: Option<SigBlock>,
}

/// A grouping record for checkbox/radio widgets sharing one logical field.
///
/// A lone checkbox yields one boxset with exactly one box; a radio group
/// yields one boxset per unique full field name, one box per option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boxset {
    pub boxes: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<FieldId>,
}
