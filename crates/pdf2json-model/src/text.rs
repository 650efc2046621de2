//! Text records and runs.
//!
//! A [`Text`] is one positioned block of text on a page. It is created with a
//! single [`TextRun`]; the merge pass may later concatenate an adjacent
//! same-style block into it. Run text is stored percent-encoded, matching the
//! serialized form consumed downstream.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::colors::ColorRef;
use crate::style::StyleTuple;

/// Characters left unescaped, per the `encodeURIComponent` contract:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const RUN_TEXT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode run text for storage in [`TextRun::text`].
pub fn encode_run_text(text: &str) -> String {
    utf8_percent_encode(text, RUN_TEXT_SET).to_string()
}

/// One styled run of text within a [`Text`] block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// Percent-encoded text content.
    #[serde(rename = "T")]
    pub text: String,
    /// Style table row index, or `-1` when no row matches.
    #[serde(rename = "S")]
    pub style: i32,
    /// Raw `(faceIdx, size, bold, italic)` tuple, always present so callers
    /// can recover the style when `style == -1`.
    #[serde(rename = "TS")]
    pub ts: StyleTuple,
    /// Rotation in degrees, present only for rotated text.
    #[serde(rename = "RA", skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// A positioned text block on a page, in form-grid units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    /// Total advance width of the block.
    pub w: f64,
    /// Space-glyph width for the block's font, used by the merge threshold.
    pub sw: f64,
    /// Alignment; always `"left"`.
    #[serde(rename = "A")]
    pub align: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clr: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oc: Option<String>,
    #[serde(rename = "R")]
    pub runs: Vec<TextRun>,
    /// Set once another block has been merged into this one; a merged block
    /// never merges again, not even on a later pass. Not serialized.
    #[serde(skip)]
    pub merged: bool,
}

impl Text {
    /// Create a text block with a single run.
    pub fn new(x: f64, y: f64, w: f64, sw: f64, color: ColorRef, run: TextRun) -> Self {
        let (clr, oc) = color.split();
        Self {
            x,
            y,
            w,
            sw,
            align: "left",
            clr,
            oc,
            runs: vec![run],
            merged: false,
        }
    }
}
