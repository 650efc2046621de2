//! Font style resolution and symbolic glyph remapping.
//!
//! Maps an engine font descriptor plus a requested size onto the fixed
//! style table, and rewrites the private character codes symbolic fonts use
//! into real Unicode glyphs.

use serde::{Deserialize, Serialize};
use tracing::trace;

use pdf2json_model::style::{StyleTuple, style_index};

/// Font descriptor handed over by the engine with each text-drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family name as reported by the engine (e.g. "ArialNarrow").
    pub family: String,
    pub serif: bool,
    pub monospace: bool,
    /// Uses a private character-code-to-glyph mapping.
    pub symbolic: bool,
    /// CID-keyed symbolic font; changes the glyph chosen for code 99.
    pub cid: bool,
    pub bold: bool,
    pub italic: bool,
    /// Requested size in points.
    pub size: f64,
    /// Space-glyph advance width in viewport units.
    pub space_width: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: String::new(),
            serif: false,
            monospace: false,
            symbolic: false,
            cid: false,
            bold: false,
            italic: false,
            size: 12.0,
            space_width: 6.0,
        }
    }
}

/// A descriptor resolved against the face list and style table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub face_idx: i32,
    /// Size after the bold legibility bump, rounded to whole points.
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
    /// Style table row, or `-1` when no exact row matches — the caller must
    /// then carry the raw tuple.
    pub style_index: i32,
}

impl ResolvedStyle {
    /// The raw `(faceIdx, size, bold, italic)` tuple for this style.
    pub fn tuple(&self) -> StyleTuple {
        (
            self.face_idx,
            self.size,
            i32::from(self.bold),
            i32::from(self.italic),
        )
    }
}

/// Derive the face index from descriptor flags and family-name tests.
///
/// Checks are ordered: serif wins first, then the symbolic pi family, then
/// the fixed-pitch faces by exact family match. A "narrow" family always
/// lands on face 1 regardless of the earlier outcome.
fn face_index(spec: &FontSpec) -> i32 {
    let family = spec.family.to_ascii_lowercase();
    let face = if spec.serif {
        1
    } else if spec.symbolic && family.contains("pi") {
        2
    } else if spec.monospace {
        if family == "ocr-a" {
            4
        } else if family.starts_with("ocr b") {
            5
        } else {
            3
        }
    } else {
        0
    };
    if family.contains("narrow") { 1 } else { face }
}

/// Resolve a font descriptor and requested size to a style-table entry.
pub fn resolve_style(spec: &FontSpec) -> ResolvedStyle {
    let face_idx = face_index(spec);
    let mut size = spec.size.round() as i32;
    // Legibility bump: bold above 12pt gains one point.
    if spec.bold && size > 12 {
        size += 1;
    }
    ResolvedStyle {
        face_idx,
        size,
        bold: spec.bold,
        italic: spec.italic,
        style_index: style_index(face_idx, size, spec.bold, spec.italic),
    }
}

/// Remap a single symbolic-font character code to its Unicode glyph.
///
/// Returns `None` for codes outside the fixed table; those pass through
/// unchanged. The rows are empirical, collected from symbolic check-mark
/// and bullet fonts seen in government form layouts.
pub fn remap_symbol(code: u32, cid: bool) -> Option<&'static str> {
    Some(match code {
        20 => "\u{2713}",  // check mark
        70 => "\u{25a0}",  // filled square
        71 => "\u{25b6}",  // right triangle
        97 => "\u{25b6}",  // right triangle
        99 => {
            if cid {
                "\u{25b2}" // up triangle
            } else {
                "\u{2022}" // bullet
            }
        }
        100 => "\u{25b2}", // up triangle
        103 => "\u{27a8}", // arrowhead
        106 => "",         // zero-width filler, dropped
        114 => "\u{2022}", // bullet
        115 => "\u{25b2}", // up triangle
        116 => "\u{2022}", // bullet
        118 => "\u{2022}", // bullet
        _ => return None,
    })
}

/// Rewrite a symbolic-font string code point by code point.
pub fn remap_symbolic_text(text: &str, cid: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match remap_symbol(ch as u32, cid) {
            Some(glyph) => out.push_str(glyph),
            None => {
                trace!(code = ch as u32, "symbolic font code not in remap table");
                out.push(ch);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(family: &str) -> FontSpec {
        FontSpec {
            family: family.to_string(),
            ..FontSpec::default()
        }
    }

    #[test]
    fn sans_family_is_face_zero() {
        assert_eq!(face_index(&spec("Helvetica")), 0);
    }

    #[test]
    fn serif_flag_wins_first() {
        let mut s = spec("Times New Roman");
        s.serif = true;
        assert_eq!(face_index(&s), 1);
    }

    #[test]
    fn symbolic_pi_family_is_face_two() {
        let mut s = spec("UniversalPi");
        s.symbolic = true;
        assert_eq!(face_index(&s), 2);
    }

    #[test]
    fn symbolic_without_pi_name_stays_sans() {
        let mut s = spec("Wingdings");
        s.symbolic = true;
        assert_eq!(face_index(&s), 0);
    }

    #[test]
    fn monospace_faces_by_exact_family() {
        let mut mono = spec("Courier New");
        mono.monospace = true;
        assert_eq!(face_index(&mono), 3);

        let mut ocr_a = spec("OCR-A");
        ocr_a.monospace = true;
        assert_eq!(face_index(&ocr_a), 4);

        let mut ocr_b = spec("OCR B MT");
        ocr_b.monospace = true;
        assert_eq!(face_index(&ocr_b), 5);
    }

    #[test]
    fn narrow_overrides_to_face_one() {
        let mut s = spec("Arial Narrow");
        s.monospace = true;
        assert_eq!(face_index(&s), 1);
    }

    #[test]
    fn bold_bump_only_above_12pt() {
        let mut s = spec("Arial");
        s.bold = true;
        s.size = 14.0;
        // 14 + 1 = 15: not a table row, so the index is -1 but the tuple
        // carries the bumped size.
        let r = resolve_style(&s);
        assert_eq!(r.size, 15);
        assert_eq!(r.style_index, -1);
        assert_eq!(r.tuple(), (0, 15, 1, 0));

        s.size = 12.0;
        let r = resolve_style(&s);
        assert_eq!(r.size, 12);
        assert_eq!(r.style_index, 9); // (0, 12, 1, 0)
    }

    #[test]
    fn exact_row_resolves_to_index() {
        let mut s = spec("Helvetica");
        s.size = 10.0;
        let r = resolve_style(&s);
        assert_eq!(r.style_index, 2); // (0, 10, 0, 0)
    }

    #[test]
    fn unmatched_size_resolves_to_minus_one() {
        let mut s = spec("Helvetica");
        s.size = 11.0;
        let r = resolve_style(&s);
        assert_eq!(r.style_index, -1);
        assert_eq!(r.tuple(), (0, 11, 0, 0));
    }

    #[test]
    fn remap_check_mark() {
        assert_eq!(remap_symbol(20, false), Some("\u{2713}"));
    }

    #[test]
    fn remap_99_depends_on_cid_flag() {
        assert_eq!(remap_symbol(99, false), Some("\u{2022}"));
        assert_eq!(remap_symbol(99, true), Some("\u{25b2}"));
    }

    #[test]
    fn remap_unknown_code_passes_through() {
        assert_eq!(remap_symbol(65, false), None);
        assert_eq!(remap_symbolic_text("A", false), "A");
    }

    #[test]
    fn remap_text_mixes_mapped_and_unmapped() {
        let input = "\u{14}A"; // code 20 followed by 'A'
        assert_eq!(remap_symbolic_text(input, false), "\u{2713}A");
    }
}
