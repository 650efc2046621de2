//! pdf2json: Convert PDF form pages into a compact JSON document model.
//!
//! This is the public API facade crate. It re-exports the document model
//! from pdf2json-model and the engine/rendering contracts from
//! pdf2json-render, and adds the parse orchestration on top.
//!
//! # Architecture
//!
//! - **pdf2json-model**: Engine-independent document model and pure
//!   algorithms (units, colors, styles, text merge)
//! - **pdf2json-render**: Engine trait, drawing-surface emulator, font
//!   resolution, widget extraction
//! - **pdf2json** (this crate): Parser orchestration, events, streams, and
//!   the buffer cache
//!
//! # Example
//!
//! ```ignore
//! let cache = BufferCache::default();
//! let mut parser: PdfParser<MyEngine> = PdfParser::new(cache);
//! let document = parser.load_pdf("form.pdf")?;
//! println!("{}", serde_json::to_string(&document)?);
//! ```

pub use pdf2json_model;
pub use pdf2json_render;

pub mod cache;
pub mod error;
pub mod events;
pub mod parser;
pub mod stream;

pub use cache::{BufferCache, DEFAULT_MAX_ENTRIES};
pub use error::ParseError;
pub use events::{EventKind, NullSink, ParserEventSink};
pub use parser::{PageState, PageWalker, ParseOptions, PdfParser};
pub use stream::{JsonObjectWriter, StreamParser};
