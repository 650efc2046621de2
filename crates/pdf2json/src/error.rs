//! Error taxonomy for the parse facade.

use thiserror::Error;

use pdf2json_render::EngineError;

/// Error terminating a parse invocation.
///
/// All variants are terminal: resuming requires a fresh parse, there is no
/// checkpoint. Individually malformed widgets never produce a `ParseError`;
/// they are logged and skipped during extraction.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The engine rejected the document (corrupt structure, wrong
    /// password). Emitted once; the parse is aborted without retry.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// The input path could not be read. Raised before any parse state is
    /// created.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering a page failed. Pages completed before this one are
    /// discarded; the document is only valid once fully assembled.
    #[error("rendering page {page} failed: {message}")]
    PageRender { page: usize, message: String },

    /// Serializing output to JSON failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
