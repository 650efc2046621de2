//! Parse orchestrator.
//!
//! [`PdfParser`] drives a [`PageEngine`] over a document: open, metadata,
//! then a strictly sequential page loop expressed as the [`PageWalker`]
//! iterator. Each page is rendered onto a [`PageCanvas`], its widgets are
//! extracted, and its text blocks are merged before the page is emitted.

use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use pdf2json_model::{Document, Page, merge_text_blocks};
use pdf2json_render::{PageCanvas, PageEngine, WidgetExtractor};

use crate::cache::BufferCache;
use crate::error::ParseError;
use crate::events::{NullSink, ParserEventSink};

/// Per-page separator written into raw text content.
const PAGE_BREAK_PREFIX: &str = "----------------Page (";
const PAGE_BREAK_SUFFIX: &str = ") Break----------------";

/// Parse configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Password for encrypted documents.
    pub password: Option<String>,
    /// When set, each page's plain text is collected alongside the model,
    /// retrievable via [`PdfParser::raw_text_content`].
    pub need_raw_text: bool,
    /// Skip the text merge/dedup pass when `false`. On by default.
    pub merge_texts: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self {
            password: None,
            need_raw_text: false,
            merge_texts: true,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of the page loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No page started yet.
    Initial,
    /// Pages are being produced.
    Running,
    /// Every page emitted.
    Finished,
    /// A page failed; the loop will produce nothing further.
    Failed,
}

/// Sequential iterator over a document's pages.
///
/// Each `next()` call renders one page, extracts its widgets, and runs the
/// merge pass. A page error moves the walker to [`PageState::Failed`] and
/// ends iteration; pages are never produced out of order or in parallel.
pub struct PageWalker<'a, E: PageEngine> {
    doc: &'a E::Doc,
    extractor: WidgetExtractor,
    current: usize,
    count: usize,
    state: PageState,
    merge_texts: bool,
}

impl<'a, E: PageEngine> PageWalker<'a, E> {
    pub fn new(doc: &'a E::Doc, merge_texts: bool) -> Self {
        Self {
            doc,
            extractor: WidgetExtractor::new(),
            current: 0,
            count: E::page_count(doc),
            state: PageState::Initial,
            merge_texts,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    fn parse_page(&mut self, index: usize) -> Result<Page, ParseError> {
        let (width, height) = E::page_size(self.doc, index).map_err(|e| page_error(index, e))?;
        let mut canvas = PageCanvas::new(width, height);
        E::render_page(self.doc, index, &mut canvas).map_err(|e| page_error(index, e))?;
        let mut page = canvas.into_page();

        let widgets = E::page_widgets(self.doc, index).map_err(|e| page_error(index, e))?;
        self.extractor.extract_page(&widgets, &mut page);

        if self.merge_texts {
            page.texts = merge_text_blocks(std::mem::take(&mut page.texts));
        }

        debug!(
            page = index,
            h_lines = page.h_lines.len(),
            v_lines = page.v_lines.len(),
            fills = page.fills.len(),
            texts = page.texts.len(),
            fields = page.fields.len(),
            boxsets = page.boxsets.len(),
            "page parsed"
        );
        Ok(page)
    }
}

impl<E: PageEngine> Iterator for PageWalker<'_, E> {
    type Item = Result<Page, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == PageState::Failed || self.current >= self.count {
            self.state = match self.state {
                PageState::Failed => PageState::Failed,
                _ => PageState::Finished,
            };
            return None;
        }
        self.state = PageState::Running;
        let index = self.current;
        match self.parse_page(index) {
            Ok(page) => {
                self.current += 1;
                if self.current == self.count {
                    self.state = PageState::Finished;
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.state = PageState::Failed;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state == PageState::Failed {
            return (0, Some(0));
        }
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

fn page_error<E: Into<pdf2json_render::EngineError>>(page: usize, err: E) -> ParseError {
    ParseError::PageRender {
        page,
        message: err.into().to_string(),
    }
}

/// Orchestrates one engine over documents, producing [`Document`] values.
///
/// A parser is constructed against a shared [`BufferCache`] handle, from
/// which it draws its instance id. It holds the engine document handle of
/// the last successful parse until [`destroy`](PdfParser::destroy) or drop.
pub struct PdfParser<E: PageEngine> {
    cache: BufferCache,
    parser_id: usize,
    options: ParseOptions,
    doc: Option<E::Doc>,
    raw_text: Vec<String>,
    _engine: PhantomData<E>,
}

impl<E: PageEngine> PdfParser<E> {
    /// Create a parser sharing `cache` and using default options.
    pub fn new(cache: BufferCache) -> Self {
        Self::with_options(cache, ParseOptions::new())
    }

    pub fn with_options(cache: BufferCache, options: ParseOptions) -> Self {
        let parser_id = cache.allocate_parser_id();
        Self {
            cache,
            parser_id,
            options,
            doc: None,
            raw_text: Vec::new(),
            _engine: PhantomData,
        }
    }

    /// This parser's instance id, allocated by the cache handle.
    pub fn parser_id(&self) -> usize {
        self.parser_id
    }

    /// Parse the file at `path`, reading through the buffer cache.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the path is unreadable; otherwise as
    /// [`PdfParser::parse_buffer`].
    pub fn load_pdf(&mut self, path: impl AsRef<Path>) -> Result<Document, ParseError> {
        self.load_pdf_with_sink(path, &mut NullSink)
    }

    /// [`load_pdf`](PdfParser::load_pdf) with an event sink.
    pub fn load_pdf_with_sink(
        &mut self,
        path: impl AsRef<Path>,
        sink: &mut dyn ParserEventSink,
    ) -> Result<Document, ParseError> {
        let bytes: Arc<[u8]> = self.cache.get_or_load(self.parser_id, path.as_ref())?;
        self.parse_with_sink(&bytes, sink)
    }

    /// Parse an in-memory document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Engine`] if the engine rejects the document
    /// and [`ParseError::PageRender`] if a page fails mid-loop. In both
    /// cases no partial document is returned.
    pub fn parse_buffer(&mut self, bytes: &[u8]) -> Result<Document, ParseError> {
        self.parse_with_sink(bytes, &mut NullSink)
    }

    /// Parse an in-memory document, forwarding progress to `sink`.
    ///
    /// Event order on success: `on_readable`, one `on_data(Some(..))` per
    /// page ascending, `on_data(None)`, `on_data_ready`. On failure the
    /// sequence ends with a single `on_data_error`.
    pub fn parse_with_sink(
        &mut self,
        bytes: &[u8],
        sink: &mut dyn ParserEventSink,
    ) -> Result<Document, ParseError> {
        self.raw_text.clear();
        match self.run_parse(bytes, sink) {
            Ok(document) => {
                sink.on_data_ready(&document);
                Ok(document)
            }
            Err(e) => {
                self.doc = None;
                sink.on_data_error(&e);
                Err(e)
            }
        }
    }

    fn run_parse(
        &mut self,
        bytes: &[u8],
        sink: &mut dyn ParserEventSink,
    ) -> Result<Document, ParseError> {
        let doc = E::open(bytes, self.options.password.as_deref())
            .map_err(|e| ParseError::Engine(e.into()))?;
        let meta = E::metadata(&doc).map_err(|e| ParseError::Engine(e.into()))?;
        sink.on_readable(&meta);

        let mut document = Document::new(meta);
        let walker = PageWalker::<E>::new(&doc, self.options.merge_texts);
        for result in walker {
            let page = result?;
            sink.on_data(Some(&page));
            document.push_page(page);
        }
        sink.on_data(None);

        if self.options.need_raw_text {
            for index in 0..E::page_count(&doc) {
                let text = E::page_raw_text(&doc, index).map_err(|e| page_error(index, e))?;
                self.raw_text.push(text);
            }
        }

        info!(pages = document.pages.len(), "document parsed");
        self.doc = Some(doc);
        Ok(document)
    }

    /// Plain text of the last parse, one block per page, each followed by a
    /// page-break marker line. Empty unless `need_raw_text` was set.
    pub fn raw_text_content(&self) -> String {
        let mut out = String::new();
        for (index, text) in self.raw_text.iter().enumerate() {
            out.push_str(text);
            out.push_str("\r\n");
            out.push_str(PAGE_BREAK_PREFIX);
            out.push_str(&index.to_string());
            out.push_str(PAGE_BREAK_SUFFIX);
            out.push_str("\r\n");
        }
        out
    }

    /// Release the engine document handle and instance-local state.
    ///
    /// Teardown is coarse: there is no mid-page cancellation, so this is
    /// called between parses, never during one.
    pub fn destroy(&mut self) {
        self.doc = None;
        self.raw_text.clear();
    }
}
