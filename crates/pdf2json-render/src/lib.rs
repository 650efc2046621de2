//! pdf2json-render: the rendering-to-semantic bridge.
//!
//! This crate sits between an external document engine and the document
//! model. It defines the [`PageEngine`] trait the engine implements, the
//! [`DrawingSurface`] contract the engine renders against, and the pieces
//! that turn rendering calls into model records: path building, font style
//! resolution, symbolic glyph remapping, and form widget extraction.

pub mod canvas;
pub mod engine;
pub mod error;
pub mod font;
pub mod path;
pub mod widget;

pub use canvas::{DrawingSurface, PageCanvas};
pub use engine::{PageEngine, SelectOption, SigInfo, WidgetAnnot};
pub use error::EngineError;
pub use font::{FontSpec, ResolvedStyle, remap_symbol, resolve_style};
pub use path::{PathBuilder, PathSegment};
pub use widget::WidgetExtractor;
