//! pdf2json-model: Engine-independent document model and pure algorithms.
//!
//! This crate provides the JSON document model (Document, Page, Line, Fill,
//! Text, Field, Boxset), the unit/color converters, the fixed style table,
//! and the text merge pass used by pdf2json-rs. It knows nothing about PDF
//! parsing or rendering — all inputs arrive as plain values.

pub mod colors;
pub mod dates;
pub mod document;
pub mod field;
pub mod geometry;
pub mod merge;
pub mod page;
pub mod style;
pub mod text;
pub mod units;

pub use colors::{ColorRef, PALETTE, find_color_index};
pub use dates::parse_pdf_date;
pub use document::{Document, TRANSCODER_ID};
pub use field::{AM_READ_ONLY, Boxset, Field, FieldId, FieldKind, OptionList, SigBlock};
pub use geometry::{Matrix, Point, Rect};
pub use merge::{MERGE_Y_EPSILON, merge_text_blocks};
pub use page::{Fill, Line, Page};
pub use style::{DEFAULT_FIELD_STYLE, FONT_FACES, FONT_STYLES, StyleTuple, style_index};
pub use text::{Text, TextRun, encode_run_text};
pub use units::{round3, to_form_point, to_form_x, to_form_y};
