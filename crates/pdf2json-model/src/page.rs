//! Page records: lines, fills, and the page container.

use serde::Serialize;

use crate::colors::ColorRef;
use crate::field::{Boxset, Field};
use crate::text::Text;

/// A horizontal or vertical line segment, in form-grid units.
///
/// `l` is the length along the line's axis; `w` is the stroke width.
/// Which axis `l` runs along is determined by the list the line is stored
/// in (`HLines` vs `VLines`) — the two sets are disjoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub x: f64,
    pub y: f64,
    /// Stroke width (viewport units, as set on the drawing surface).
    pub w: f64,
    /// Length along the line's axis.
    pub l: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clr: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oc: Option<String>,
    /// Present (`1`) only for dashed lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsh: Option<u8>,
}

impl Line {
    pub fn new(x: f64, y: f64, w: f64, l: f64, color: ColorRef, dashed: bool) -> Self {
        let (clr, oc) = color.split();
        Self {
            x,
            y,
            w,
            l,
            clr,
            oc,
            dsh: dashed.then_some(1),
        }
    }
}

/// A filled rectangle, in form-grid units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clr: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oc: Option<String>,
}

impl Fill {
    pub fn new(x: f64, y: f64, w: f64, h: f64, color: ColorRef) -> Self {
        let (clr, oc) = color.split();
        Self { x, y, w, h, clr, oc }
    }
}

/// One page of the document model.
///
/// Created once per engine page and owned exclusively by the parse until it
/// is appended to the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    #[serde(rename = "Width")]
    pub width: f64,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "HLines")]
    pub h_lines: Vec<Line>,
    #[serde(rename = "VLines")]
    pub v_lines: Vec<Line>,
    #[serde(rename = "Fills")]
    pub fills: Vec<Fill>,
    #[serde(rename = "Texts")]
    pub texts: Vec<Text>,
    #[serde(rename = "Fields")]
    pub fields: Vec<Field>,
    #[serde(rename = "Boxsets")]
    pub boxsets: Vec<Boxset>,
}

impl Page {
    /// Create an empty page with the given dimensions in form-grid units.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
