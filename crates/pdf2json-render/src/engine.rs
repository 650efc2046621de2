//! Document engine trait.
//!
//! Defines the [`PageEngine`] trait that abstracts the external PDF document
//! engine (object resolution, content-stream interpretation, font decoding).
//! This crate consumes the engine's output through two contracts: rendering
//! calls replayed onto a [`DrawingSurface`], and form-annotation dictionaries
//! flattened into [`WidgetAnnot`] records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canvas::DrawingSurface;
use crate::error::EngineError;

/// One option of a dropdown/select widget, `(export value, display label)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub display: String,
}

/// Signature dictionary metadata, copied verbatim from the annotation.
///
/// The `date` field is the raw PDF date string (`D:YYYYMMDD...`); the widget
/// extractor converts it to ISO-8601 on output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SigInfo {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub reason: Option<String>,
    pub contact_info: Option<String>,
}

/// A flattened form-widget annotation as reported by the engine.
///
/// Field-level entries inherited through the field tree (full name, flags,
/// values) are resolved by the engine; this struct is the already-merged
/// view of one widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetAnnot {
    /// Fully qualified field name (ancestor names joined with `.`).
    pub full_name: String,
    /// `/FT` entry: `Btn`, `Tx`, `Ch`, or `Sig`. `None` when absent.
    pub field_type: Option<String>,
    /// `/Ff` field flags.
    pub field_flags: u32,
    /// Widget rectangle in viewport units, corner order not normalized.
    pub rect: [f64; 4],
    /// `/TU` alternate (accessibility) text.
    pub alt_text: Option<String>,
    /// True when the read-only field flag (bit 1) is set.
    pub read_only: bool,
    /// Current field value (`/V`), stringified.
    pub value: Option<String>,
    /// Parent field's default/current value, used to pick the checked box
    /// of a radio group.
    pub parent_value: Option<String>,
    /// This widget's on-state name (`/AS` or the `/AP` on-state key).
    pub export_value: Option<String>,
    /// JavaScript format-function name from the additional-actions
    /// dictionary (`AFNumber_Format`, `AFDate_FormatEx`, ...).
    pub format_func: Option<String>,
    /// First numeric argument of the format function, when present.
    pub format_arg: Option<i32>,
    /// First string argument of the format function (the keystroke mask of
    /// `AFSpecial_KeystrokeEx`).
    pub format_mask: Option<String>,
    /// `/Opt` entries for choice fields.
    pub options: Vec<SelectOption>,
    /// Signature dictionary contents, for `Sig` fields.
    pub sig: Option<SigInfo>,
}

/// Trait abstracting the external document engine.
///
/// An engine opens a document from bytes, reports page geometry and
/// metadata, replays each page's rendering instructions onto a
/// [`DrawingSurface`], and lists each page's form widgets.
///
/// # Associated Types
///
/// - `Doc`: the engine's parsed document handle.
/// - `Error`: engine-specific error type, convertible to [`EngineError`].
///
/// # Usage
///
/// ```ignore
/// let doc = MyEngine::open(bytes, None)?;
/// for index in 0..MyEngine::page_count(&doc) {
///     let (w, h) = MyEngine::page_size(&doc, index)?;
///     let mut canvas = PageCanvas::new(w, h);
///     MyEngine::render_page(&doc, index, &mut canvas)?;
/// }
/// ```
pub trait PageEngine {
    /// The engine's parsed document handle.
    type Doc;

    /// Engine-specific error type, convertible to [`EngineError`].
    type Error: std::error::Error + Into<EngineError>;

    /// Parse document bytes, decrypting with `password` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid document or the
    /// password is missing or wrong.
    fn open(bytes: &[u8], password: Option<&str>) -> Result<Self::Doc, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Doc) -> usize;

    /// Document metadata (Info dictionary and friends) as a JSON map.
    ///
    /// Passed through to the output document untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata dictionary is malformed.
    fn metadata(doc: &Self::Doc) -> Result<Map<String, Value>, Self::Error>;

    /// Page viewport size `(width, height)` in viewport units.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    fn page_size(doc: &Self::Doc, index: usize) -> Result<(f64, f64), Self::Error>;

    /// Replay the page's rendering instructions onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns an error if content interpretation fails mid-page; the
    /// surface may hold partial output in that case and must be discarded.
    fn render_page(
        doc: &Self::Doc,
        index: usize,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), Self::Error>;

    /// List the page's form widgets, field-tree entries already resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the annotation array itself cannot be read.
    /// Individually malformed widgets are the extractor's concern, not
    /// the engine's.
    fn page_widgets(doc: &Self::Doc, index: usize) -> Result<Vec<WidgetAnnot>, Self::Error>;

    /// The page's plain text content, for raw-text mode.
    ///
    /// # Errors
    ///
    /// Returns an error if text extraction fails.
    fn page_raw_text(doc: &Self::Doc, index: usize) -> Result<String, Self::Error>;
}
