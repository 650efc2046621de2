//! Stream adapters.
//!
//! [`StreamParser`] is the input side: an [`io::Write`] that buffers raw
//! document bytes and parses the accumulated buffer on [`finish`]
//! (end-of-input). [`JsonObjectWriter`] is the output side: each pushed
//! value is serialized to one JSON text chunk on the wrapped writer.

use std::io;

use serde::Serialize;

use pdf2json_model::Document;
use pdf2json_render::PageEngine;

use crate::error::ParseError;
use crate::events::ParserEventSink;
use crate::parser::PdfParser;

/// Buffers written chunks and parses them as one document at end-of-input.
pub struct StreamParser<E: PageEngine> {
    parser: PdfParser<E>,
    buffer: Vec<u8>,
}

impl<E: PageEngine> StreamParser<E> {
    pub fn new(parser: PdfParser<E>) -> Self {
        Self {
            parser,
            buffer: Vec::new(),
        }
    }

    /// Bytes buffered so far.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// End of input: parse everything written and return the document
    /// along with the parser.
    ///
    /// # Errors
    ///
    /// As [`PdfParser::parse_buffer`].
    pub fn finish(mut self) -> Result<(Document, PdfParser<E>), ParseError> {
        let document = self.parser.parse_buffer(&self.buffer)?;
        Ok((document, self.parser))
    }

    /// [`finish`](StreamParser::finish) with an event sink.
    pub fn finish_with_sink(
        mut self,
        sink: &mut dyn ParserEventSink,
    ) -> Result<(Document, PdfParser<E>), ParseError> {
        let document = self.parser.parse_with_sink(&self.buffer, sink)?;
        Ok((document, self.parser))
    }
}

impl<E: PageEngine> io::Write for StreamParser<E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Serializes pushed objects as JSON text chunks on an inner writer.
pub struct JsonObjectWriter<W: io::Write> {
    inner: W,
}

impl<W: io::Write> JsonObjectWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Serialize `value` and write it as a single chunk.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Serialize`] on serialization failure and
    /// [`ParseError::Io`] if the inner writer rejects the chunk.
    pub fn push<T: Serialize>(&mut self, value: &T) -> Result<(), ParseError> {
        let chunk = serde_json::to_string(value)?;
        self.inner.write_all(chunk.as_bytes())?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
