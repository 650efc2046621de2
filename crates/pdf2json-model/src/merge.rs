//! Text block merge/dedup pass.
//!
//! Post-processes a page's text records: sorts them into reading order,
//! drops exact duplicates, then stitches adjacent same-style runs on the
//! same line into single blocks. The pass is pairwise: a merged record is
//! marked and never merges again, which makes re-running the pass on its
//! own output a no-op.

use crate::text::Text;
use crate::units::round3;

/// Position tolerance in grid units for same-line and duplicate checks.
pub const MERGE_Y_EPSILON: f64 = 0.1;

/// Reference font size for the horizontal gap threshold: the threshold is
/// `(fontSize / 12) * spaceWidth` of the left-hand block.
pub const MERGE_BASE_FONT_SIZE: f64 = 12.0;

/// Quantize a coordinate to an ε-sized bucket. Sorting by bucket keeps the
/// comparator a total order; the merge checks below still use the exact
/// coordinates.
fn bucket(v: f64) -> i64 {
    (v / MERGE_Y_EPSILON).round() as i64
}

/// Sort texts by `(y, x)` with tolerance, y primary.
fn sort_texts(texts: &mut [Text]) {
    texts.sort_by_key(|t| (bucket(t.y), bucket(t.x)));
}

/// Whether two records are exact duplicates: same position, same first-run
/// text, same style vector.
fn is_duplicate(a: &Text, b: &Text) -> bool {
    let (Some(ra), Some(rb)) = (a.runs.first(), b.runs.first()) else {
        return false;
    };
    (a.x - b.x).abs() <= MERGE_Y_EPSILON
        && (a.y - b.y).abs() <= MERGE_Y_EPSILON
        && ra.text == rb.text
        && ra.style == rb.style
        && ra.ts == rb.ts
}

/// Whether `b` can be merged into `a` (left-to-right adjacency on one line).
fn can_merge(a: &Text, b: &Text) -> bool {
    if a.merged || b.merged {
        return false;
    }
    let (Some(ra), Some(rb)) = (a.runs.first(), b.runs.first()) else {
        return false;
    };
    if ra.rotation.is_some() || rb.rotation.is_some() {
        return false;
    }
    // Identical style index, or identical raw tuple when unindexed.
    if ra.style != rb.style {
        return false;
    }
    if ra.style == -1 && ra.ts != rb.ts {
        return false;
    }
    if (a.y - b.y).abs() > MERGE_Y_EPSILON {
        return false;
    }
    let gap = b.x - a.x - a.w;
    let font_size = f64::from(ra.ts.1);
    let threshold = (font_size / MERGE_BASE_FONT_SIZE) * a.sw;
    gap < threshold
}

/// Run the merge/dedup pass over a page's text records.
///
/// Returns the processed list; the input order is not preserved (records
/// come back sorted into reading order). Running the pass on its own output
/// is a no-op.
pub fn merge_text_blocks(texts: Vec<Text>) -> Vec<Text> {
    let mut sorted = texts;
    sort_texts(&mut sorted);

    let mut deduped: Vec<Text> = Vec::with_capacity(sorted.len());
    for t in sorted {
        if !deduped.iter().any(|kept| is_duplicate(kept, &t)) {
            deduped.push(t);
        }
    }

    let mut out: Vec<Text> = Vec::with_capacity(deduped.len());
    let mut i = 0;
    while i < deduped.len() {
        let mut cur = deduped[i].clone();
        if i + 1 < deduped.len() && can_merge(&cur, &deduped[i + 1]) {
            let next = &deduped[i + 1];
            cur.runs[0].text.push_str(&next.runs[0].text);
            cur.w = round3(cur.w + next.w);
            // A merged record stays ineligible, on this pass and any later one.
            cur.merged = true;
            i += 2;
        } else {
            i += 1;
        }
        out.push(cur);
    }
    out
}
