//! Top-level document container.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::page::Page;

/// Identifier of this transcoder, recorded on every emitted document.
pub const TRANSCODER_ID: &str = "pdf2json-rs@0.3.0";

/// The complete document model: transcoder tag, engine metadata, and pages.
///
/// Built incrementally during a parse; a page is immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(rename = "Transcoder")]
    pub transcoder: String,
    /// Engine-supplied document metadata, passed through untouched.
    #[serde(rename = "Meta")]
    pub meta: Map<String, Value>,
    #[serde(rename = "Pages")]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create an empty document carrying the given metadata.
    pub fn new(meta: Map<String, Value>) -> Self {
        Self {
            transcoder: TRANSCODER_ID.to_string(),
            meta,
            pages: Vec::new(),
        }
    }

    /// Append a completed page. Pages arrive in ascending index order.
    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_is_empty() {
        let doc = Document::new(Map::new());
        assert_eq!(doc.transcoder, TRANSCODER_ID);
        assert!(doc.pages.is_empty());
    }

    #[test]
    fn meta_passes_through() {
        let mut meta = Map::new();
        meta.insert("Title".to_string(), Value::String("W-9".to_string()));
        let doc = Document::new(meta);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["Meta"]["Title"], "W-9");
    }

    #[test]
    fn serializes_capitalized_top_level_names() {
        let mut doc = Document::new(Map::new());
        doc.push_page(Page::new(34.0, 44.0));
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("Transcoder").is_some());
        assert!(json.get("Meta").is_some());
        assert_eq!(json["Pages"].as_array().unwrap().len(), 1);
    }
}
