//! Parse event surface.
//!
//! Downstream consumers observe a parse through the [`ParserEventSink`]
//! callback trait. Event names on the wire are fixed; [`EventKind`] exposes
//! the exact strings for adapters bridging to string-keyed event systems.

use serde_json::{Map, Value};

use pdf2json_model::{Document, Page};

use crate::error::ParseError;

/// The four parse events, with their exact wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Document opened; metadata is available.
    Readable,
    /// One parsed page, or the end-of-pages sentinel.
    Data,
    /// The fully assembled document.
    DataReady,
    /// A terminal parse error.
    DataError,
}

impl EventKind {
    /// The event's wire name. These strings are a compatibility contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Readable => "readable",
            EventKind::Data => "data",
            EventKind::DataReady => "pdfParser_dataReady",
            EventKind::DataError => "pdfParser_dataError",
        }
    }
}

/// Callbacks observing a parse in progress.
///
/// All methods default to no-ops so sinks implement only what they need.
/// Ordering guarantees: `on_readable` fires once before any page;
/// `on_data(Some(..))` fires once per page in ascending index order;
/// `on_data(None)` fires exactly once after all pages; `on_data_ready`
/// follows the sentinel. `on_data_error` terminates the sequence instead.
pub trait ParserEventSink {
    /// Document metadata, before any page is parsed.
    fn on_readable(&mut self, meta: &Map<String, Value>) {
        let _ = meta;
    }

    /// A parsed page, or `None` once all pages have been emitted.
    fn on_data(&mut self, page: Option<&Page>) {
        let _ = page;
    }

    /// The complete aggregated document.
    fn on_data_ready(&mut self, document: &Document) {
        let _ = document;
    }

    /// Terminal error; no further events follow.
    fn on_data_error(&mut self, error: &ParseError) {
        let _ = error;
    }
}

/// Sink that ignores every event, for callers who only want the returned
/// document.
#[derive(Debug, Default)]
pub struct NullSink;

impl ParserEventSink for NullSink {}
