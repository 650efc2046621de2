//! Error types for the rendering bridge.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`EngineError`] is the
//! normalized form every engine's error type must convert into; the parse
//! facade wraps it further.

use thiserror::Error;

/// Normalized error raised by a document engine.
///
/// Engine implementations declare their own error type on
/// [`PageEngine::Error`](crate::engine::PageEngine::Error) and provide an
/// `Into<EngineError>` conversion so callers see one taxonomy.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The document structure is corrupt or not a PDF at all.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The document is encrypted and the password is missing or wrong.
    #[error("password required or incorrect")]
    Password,

    /// A page index beyond the document's page count was requested.
    #[error("page index {0} out of range")]
    PageOutOfRange(usize),

    /// Rendering a page's content failed.
    #[error("render failed: {0}")]
    Render(String),
}
