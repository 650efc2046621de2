//! The drawing-surface emulator.
//!
//! [`PageCanvas`] implements the subset of a 2D graphics context the
//! document engine drives while rendering a page, and reduces the calls to
//! semantic geometry and text records. Strokes become axis-aligned lines,
//! fills become rectangles, `fill_text` becomes styled text runs; everything
//! else the engine draws is deliberately dropped.

use tracing::trace;

use pdf2json_model::{
    ColorRef, Fill, Line, Matrix, Page, Point, Text, TextRun, encode_run_text, to_form_x,
    to_form_y,
};

use crate::font::{FontSpec, remap_symbolic_text, resolve_style};
use crate::path::PathBuilder;

/// Stroked segments thinner than this multiple of the line width are
/// rendering noise (decorative hairlines behind checkboxes) and dropped.
/// Applies only to strokes with `lineWidth < 4`.
pub const THIN_LINE_RATIO: f64 = 4.0;

/// Near-square rectangles are suppressed when the side delta is below this
/// and the width is under [`TINY_RECT_MAX_SIDE`] viewport units.
pub const TINY_RECT_SIDE_DELTA: f64 = 1.0;

/// See [`TINY_RECT_SIDE_DELTA`].
pub const TINY_RECT_MAX_SIDE: f64 = 13.0;

/// Fills with both dimensions under this many grid units are dropped.
pub const MIN_FILL_GRID_UNITS: f64 = 2.0;

/// The fixed method contract the document engine renders against.
///
/// Mirrors the 2D-context surface the engine expects: a matrix stack, path
/// building, painting, and text. Implementations record semantics; nothing
/// here rasterizes.
pub trait DrawingSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, tx: f64, ty: f64);
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_dashed(&mut self, dashed: bool);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn close_path(&mut self);

    fn stroke(&mut self);
    fn fill(&mut self);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Draw a run of text. `width` is the total advance in viewport units,
    /// supplied by the engine from its font metrics.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, width: f64, font: &FontSpec);
}

/// Records one page's drawing calls as document-model geometry and text.
#[derive(Debug)]
pub struct PageCanvas {
    page: Page,
    matrix: Matrix,
    matrix_stack: Vec<Matrix>,
    path: PathBuilder,
    line_width: f64,
    stroke_color: String,
    fill_color: String,
    dashed: bool,
}

impl PageCanvas {
    /// Create a canvas for a page of the given viewport dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            page: Page::new(to_form_x(width), to_form_y(height)),
            matrix: Matrix::identity(),
            matrix_stack: Vec::new(),
            path: PathBuilder::new(Matrix::identity()),
            line_width: 1.0,
            stroke_color: "#000000".to_string(),
            fill_color: "#000000".to_string(),
            dashed: false,
        }
    }

    /// Finish the page and hand it to the caller.
    pub fn into_page(self) -> Page {
        self.page
    }

    fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
        self.path.set_matrix(matrix);
    }

    /// Classify one stroked segment as an HLine, a VLine, or noise.
    fn record_segment(&mut self, p0: Point, p1: Point) {
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        let lw = self.line_width;
        let min_delta = lw;

        if dy < lw && dx > min_delta {
            if lw < THIN_LINE_RATIO && dx / lw < THIN_LINE_RATIO {
                trace!(dx, lw, "dropping thin horizontal stroke");
                return;
            }
            let line = Line::new(
                to_form_x(p0.x.min(p1.x)),
                to_form_y(p0.y),
                lw,
                to_form_x(dx),
                ColorRef::resolve(&self.stroke_color),
                self.dashed,
            );
            self.page.h_lines.push(line);
        } else if dx < lw && dy > min_delta {
            if lw < THIN_LINE_RATIO && dy / lw < THIN_LINE_RATIO {
                trace!(dy, lw, "dropping thin vertical stroke");
                return;
            }
            let line = Line::new(
                to_form_x(p0.x),
                to_form_y(p0.y.min(p1.y)),
                lw,
                to_form_y(dy),
                ColorRef::resolve(&self.stroke_color),
                self.dashed,
            );
            self.page.v_lines.push(line);
        } else {
            // Diagonal or near-zero-length: not representable.
            trace!(dx, dy, "dropping non-axis-aligned stroke segment");
        }
    }

    /// Near-square artifacts behind form widgets are suppressed wholesale.
    fn is_tiny_rect(w: f64, h: f64) -> bool {
        // Engines with a flipped axis pass negative heights.
        (w - h.abs()).abs() < TINY_RECT_SIDE_DELTA && w < TINY_RECT_MAX_SIDE
    }
}

impl DrawingSurface for PageCanvas {
    fn save(&mut self) {
        self.matrix_stack.push(self.matrix);
    }

    fn restore(&mut self) {
        if let Some(m) = self.matrix_stack.pop() {
            self.set_matrix(m);
        }
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.set_matrix(self.matrix.translated(tx, ty));
    }

    fn rotate(&mut self, radians: f64) {
        self.set_matrix(self.matrix.rotated(radians));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.set_matrix(self.matrix.scaled(sx, sy));
    }

    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        let m = self.matrix.multiply(&Matrix::new(a, b, c, d, e, f));
        self.set_matrix(m);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.stroke_color = color.to_string();
    }

    fn set_fill_color(&mut self, color: &str) {
        self.fill_color = color.to_string();
    }

    fn set_dashed(&mut self, dashed: bool) {
        self.dashed = dashed;
    }

    fn begin_path(&mut self) {
        self.path.take();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(x, y);
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.path.bezier_to(x1, y1, x2, y2, x3, y3);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.path.quadratic_to(cx, cy, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.path.arc(x, y, radius, start_angle, end_angle);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if Self::is_tiny_rect(w, h) {
            trace!(w, h, "suppressing near-square rect");
            return;
        }
        self.path.rect(x, y, w, h);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        let segments = self.path.take();
        for (p0, p1) in PathBuilder::line_pairs(&segments) {
            self.record_segment(p0, p1);
        }
    }

    fn fill(&mut self) {
        let segments = self.path.take();
        let Some(bbox) = PathBuilder::bounding_box(&segments) else {
            return;
        };
        let w = to_form_x(bbox.width());
        let h = to_form_y(bbox.height());
        if w < MIN_FILL_GRID_UNITS && h < MIN_FILL_GRID_UNITS {
            trace!(w, h, "dropping degenerate fill");
            return;
        }
        let fill = Fill::new(
            to_form_x(bbox.x0),
            to_form_y(bbox.y0),
            w,
            h,
            ColorRef::resolve(&self.fill_color),
        );
        self.page.fills.push(fill);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.rect(x, y, w, h);
        self.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.rect(x, y, w, h);
        self.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, width: f64, font: &FontSpec) {
        if text.is_empty() {
            return;
        }
        let content = if font.symbolic {
            remap_symbolic_text(text, font.cid)
        } else {
            text.to_string()
        };
        if content.is_empty() {
            return;
        }

        let style = resolve_style(font);
        let p = self.matrix.transform_point(Point::new(x, y));
        let rotation = self.matrix.rotation_degrees();
        let run = TextRun {
            text: encode_run_text(&content),
            style: style.style_index,
            ts: style.tuple(),
            rotation: (rotation != 0.0).then_some(rotation),
        };
        let record = Text::new(
            to_form_x(p.x),
            to_form_y(p.y),
            to_form_x(width),
            to_form_x(font.space_width),
            ColorRef::resolve(&self.fill_color),
            run,
        );
        self.page.texts.push(record);
    }
}
