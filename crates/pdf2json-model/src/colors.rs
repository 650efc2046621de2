//! Fixed color palette and palette-index lookup.
//!
//! Colors in the document model are stored either as a palette index (`clr`)
//! or, when the color is not in the palette, as a raw hex string (`oc`).
//! Index positions are the public contract — the palette is append-only and
//! never reordered.

/// The fixed color palette. The index of an entry is its `clr` value.
pub const PALETTE: [&str; 38] = [
    "#000000", // 0
    "#ffffff", // 1
    "#4c4c4c", // 2
    "#808080", // 3
    "#999999", // 4
    "#c0c0c0", // 5
    "#cccccc", // 6
    "#e5e5e5", // 7
    "#f2f2f2", // 8
    "#008000", // 9
    "#00ff00", // 10
    "#bfffa0", // 11
    "#ffd629", // 12
    "#ff99cc", // 13
    "#004080", // 14
    "#9fc0e1", // 15
    "#5580ff", // 16
    "#a9c9fa", // 17
    "#ff0080", // 18
    "#800080", // 19
    "#ffbfff", // 20
    "#e45b21", // 21
    "#ffbfaa", // 22
    "#008080", // 23
    "#ff0000", // 24
    "#fdc59f", // 25
    "#808000", // 26
    "#bfbf00", // 27
    "#824100", // 28
    "#007256", // 29
    "#008000", // 30
    "#000080", // 31
    "#008080", // 32
    "#800080", // 33
    "#ff0000", // 34
    "#0000ff", // 35
    "#008000", // 36
    "#000000", // 37
];

/// Expand a 4-character shorthand color (`#abc`) to 6 hex digits.
///
/// Shorthand is expanded by appending `"000"`, not by doubling digits —
/// this matches the historical transcoder behavior and is part of the
/// lookup contract.
fn expand_shorthand(color: &str) -> String {
    if color.len() == 4 && color.starts_with('#') {
        format!("{color}000")
    } else {
        color.to_string()
    }
}

/// Find the palette index of a color string, or `-1` if absent.
///
/// Matching is exact and case-sensitive; there is no nearest-color search.
/// Callers receiving `-1` must carry the raw color string instead.
pub fn find_color_index(color: &str) -> i32 {
    let expanded = expand_shorthand(color);
    PALETTE
        .iter()
        .position(|c| *c == expanded)
        .map_or(-1, |i| i as i32)
}

/// A color resolved against the palette: either an index or a raw string.
///
/// A record carries exactly one of `clr`/`oc`; this type makes the split
/// explicit at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRef {
    /// Palette position (`clr`).
    Index(i32),
    /// Raw color string not present in the palette (`oc`).
    Raw(String),
}

impl ColorRef {
    /// Resolve a color string against the palette.
    pub fn resolve(color: &str) -> Self {
        match find_color_index(color) {
            -1 => ColorRef::Raw(color.to_string()),
            idx => ColorRef::Index(idx),
        }
    }

    /// Split into the `(clr, oc)` field pair. Exactly one side is `Some`.
    pub fn split(&self) -> (Option<i32>, Option<String>) {
        match self {
            ColorRef::Index(i) => (Some(*i), None),
            ColorRef::Raw(s) => (None, Some(s.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_38_entries() {
        assert_eq!(PALETTE.len(), 38);
    }

    #[test]
    fn find_color_index_exact_match() {
        assert_eq!(find_color_index("#000000"), 0);
        assert_eq!(find_color_index("#ffffff"), 1);
        assert_eq!(find_color_index("#0000ff"), 35);
    }

    #[test]
    fn find_color_index_first_position_wins_for_duplicates() {
        // "#008000" appears at 9, 30, and 36; lookup returns the first.
        assert_eq!(find_color_index("#008000"), 9);
        assert_eq!(find_color_index("#ff0000"), 24);
    }

    #[test]
    fn find_color_index_unknown_returns_minus_one() {
        assert_eq!(find_color_index("#123456"), -1);
    }

    #[test]
    fn find_color_index_is_case_sensitive() {
        assert_eq!(find_color_index("#FFFFFF"), -1);
        assert_eq!(find_color_index("#ffffff"), 1);
    }

    #[test]
    fn shorthand_expanded_by_appending_zeros() {
        // "#000" expands to "#000000", not "#000000" by digit doubling —
        // same result here, but "#fff" expands to "#fff000" (no match).
        assert_eq!(find_color_index("#000"), 0);
        assert_eq!(find_color_index("#fff"), -1);
    }

    #[test]
    fn color_ref_resolve_known() {
        assert_eq!(ColorRef::resolve("#ffffff"), ColorRef::Index(1));
    }

    #[test]
    fn color_ref_resolve_unknown_keeps_raw() {
        assert_eq!(
            ColorRef::resolve("#123456"),
            ColorRef::Raw("#123456".to_string())
        );
    }

    #[test]
    fn color_ref_split_exactly_one_side() {
        let (clr, oc) = ColorRef::resolve("#ffffff").split();
        assert_eq!(clr, Some(1));
        assert_eq!(oc, None);

        let (clr, oc) = ColorRef::resolve("#123456").split();
        assert_eq!(clr, None);
        assert_eq!(oc.as_deref(), Some("#123456"));
    }
}
