//! Fixed font-face list and style table.
//!
//! The style table maps a `(faceIdx, size, bold, italic)` tuple to a stable
//! row index. Row positions are the public contract (`S` in text runs and
//! `style` on form fields); the table is append-only and never reordered.

/// Typeface stacks addressable by `faceIdx`.
///
/// Face 1 doubles as the bucket for serif and narrow faces; faces 3–5 are
/// the fixed-pitch family (generic mono, OCR-A, OCR-B).
pub const FONT_FACES: [&str; 6] = [
    "Helvetica,Arial,sans-serif",         // 0 - sans-serif
    "Times New Roman,Georgia,serif",      // 1 - serif / narrow
    "Symbol,ZapfDingbats",                // 2 - symbolic pi
    "Courier New,Courier,monospace",      // 3 - fixed pitch
    "OCR-A,Courier New,monospace",        // 4 - OCR-A
    "OCR B MT,Courier New,monospace",     // 5 - OCR-B
];

/// A style table row: `(faceIdx, size, bold, italic)`.
pub type StyleTuple = (i32, i32, i32, i32);

/// The fixed 61-row style table. Row index is the `S` / `style` value.
pub const FONT_STYLES: [StyleTuple; 61] = [
    // face size bold italic       row
    (0, 6, 0, 0),  // 0
    (0, 8, 0, 0),  // 1
    (0, 10, 0, 0), // 2
    (0, 12, 0, 0), // 3
    (0, 14, 0, 0), // 4
    (0, 18, 0, 0), // 5
    (0, 6, 1, 0),  // 6
    (0, 8, 1, 0),  // 7
    (0, 10, 1, 0), // 8
    (0, 12, 1, 0), // 9
    (0, 14, 1, 0), // 10
    (0, 18, 1, 0), // 11
    (0, 6, 0, 1),  // 12
    (0, 8, 0, 1),  // 13
    (0, 10, 0, 1), // 14
    (0, 12, 0, 1), // 15
    (0, 14, 0, 1), // 16
    (0, 18, 0, 1), // 17
    (0, 6, 1, 1),  // 18
    (0, 8, 1, 1),  // 19
    (0, 10, 1, 1), // 20
    (0, 12, 1, 1), // 21
    (0, 14, 1, 1), // 22
    (0, 18, 1, 1), // 23
    (1, 6, 0, 0),  // 24
    (1, 8, 0, 0),  // 25
    (1, 10, 0, 0), // 26
    (1, 12, 0, 0), // 27
    (1, 14, 0, 0), // 28
    (1, 18, 0, 0), // 29
    (1, 6, 1, 0),  // 30
    (1, 8, 1, 0),  // 31
    (1, 10, 1, 0), // 32
    (1, 12, 1, 0), // 33
    (1, 14, 1, 0), // 34
    (1, 18, 1, 0), // 35
    (1, 6, 0, 1),  // 36
    (1, 8, 0, 1),  // 37
    (1, 10, 0, 1), // 38
    (1, 12, 0, 1), // 39
    (1, 14, 0, 1), // 40
    (1, 18, 0, 1), // 41
    (1, 6, 1, 1),  // 42
    (1, 8, 1, 1),  // 43
    (1, 10, 1, 1), // 44
    (1, 12, 1, 1), // 45
    (1, 14, 1, 1), // 46
    (1, 18, 1, 1), // 47
    (2, 8, 0, 0),  // 48
    (2, 10, 0, 0), // 49
    (2, 12, 0, 0), // 50
    (2, 14, 0, 0), // 51
    (2, 18, 0, 0), // 52
    (3, 8, 0, 0),  // 53
    (3, 10, 0, 0), // 54
    (3, 12, 0, 0), // 55
    (3, 14, 0, 0), // 56
    (4, 10, 0, 0), // 57
    (4, 12, 0, 0), // 58
    (5, 10, 0, 0), // 59
    (5, 12, 0, 0), // 60
];

/// Default `style` on form fields (face 2, 8pt regular).
pub const DEFAULT_FIELD_STYLE: i32 = 48;

/// Look up a style tuple in the table, returning the row index or `-1`.
///
/// Matching is exact; callers receiving `-1` must carry the raw tuple
/// instead of an index.
pub fn style_index(face_idx: i32, size: i32, bold: bool, italic: bool) -> i32 {
    let want: StyleTuple = (face_idx, size, i32::from(bold), i32::from(italic));
    FONT_STYLES
        .iter()
        .position(|row| *row == want)
        .map_or(-1, |i| i as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_61_rows() {
        assert_eq!(FONT_STYLES.len(), 61);
    }

    #[test]
    fn table_rows_are_unique() {
        for (i, a) in FONT_STYLES.iter().enumerate() {
            for b in FONT_STYLES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn style_index_exact_rows() {
        assert_eq!(style_index(0, 6, false, false), 0);
        assert_eq!(style_index(0, 12, true, false), 9);
        assert_eq!(style_index(1, 12, false, false), 27);
        assert_eq!(style_index(2, 8, false, false), DEFAULT_FIELD_STYLE);
        assert_eq!(style_index(5, 12, false, false), 60);
    }

    #[test]
    fn style_index_no_match_returns_minus_one() {
        assert_eq!(style_index(0, 11, false, false), -1);
        assert_eq!(style_index(3, 12, true, false), -1);
        assert_eq!(style_index(9, 12, false, false), -1);
    }

    #[test]
    fn round_trips_through_table() {
        for (i, (face, size, bold, italic)) in FONT_STYLES.iter().enumerate() {
            assert_eq!(style_index(*face, *size, *bold == 1, *italic == 1), i as i32);
        }
    }
}
