//! Path construction for the drawing surface.
//!
//! Paths are built from the surface's path operators with every coordinate
//! already transformed through the current matrix, so painting never needs
//! to revisit the transform stack.

use pdf2json_model::{Matrix, Point, Rect};

/// A segment of a constructed path, recorded in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Start a new subpath at a point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic Bezier curve. Quadratic curves are promoted to this variant.
    Bezier {
        cp1: Point,
        cp2: Point,
        end: Point,
    },
    /// Circular arc around a center point, angles in radians.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// Close the current subpath.
    Close,
}

/// Builder collecting path segments under a current transform.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
    current_point: Option<Point>,
    subpath_start: Option<Point>,
    matrix: Matrix,
}

impl PathBuilder {
    pub fn new(matrix: Matrix) -> Self {
        Self {
            segments: Vec::new(),
            current_point: None,
            subpath_start: None,
            matrix,
        }
    }

    /// Update the transform applied to subsequently added coordinates.
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = self.matrix.transform_point(Point::new(x, y));
        self.segments.push(PathSegment::MoveTo(p));
        self.current_point = Some(p);
        self.subpath_start = Some(p);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let p = self.matrix.transform_point(Point::new(x, y));
        self.segments.push(PathSegment::LineTo(p));
        self.current_point = Some(p);
    }

    pub fn bezier_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        let cp1 = self.matrix.transform_point(Point::new(x1, y1));
        let cp2 = self.matrix.transform_point(Point::new(x2, y2));
        let end = self.matrix.transform_point(Point::new(x3, y3));
        self.segments.push(PathSegment::Bezier { cp1, cp2, end });
        self.current_point = Some(end);
    }

    /// Quadratic curve, promoted to the cubic variant with both control
    /// points at the quadratic control point.
    pub fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.bezier_to(cx, cy, cx, cy, x, y);
    }

    pub fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let center = self.matrix.transform_point(Point::new(x, y));
        self.segments.push(PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self.current_point = Some(center);
    }

    /// Append a rectangle as moveto + 3 lineto + close.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close();
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
        if let Some(start) = self.subpath_start {
            self.current_point = Some(start);
        }
    }

    /// Take the collected segments, resetting the builder for the next path.
    pub fn take(&mut self) -> Vec<PathSegment> {
        self.current_point = None;
        self.subpath_start = None;
        std::mem::take(&mut self.segments)
    }

    /// Consecutive straight-line point pairs for stroke classification.
    ///
    /// Only `MoveTo`/`LineTo` sequences produce pairs; curves and arcs break
    /// the chain (they have no straight-line representation downstream).
    pub fn line_pairs(segments: &[PathSegment]) -> Vec<(Point, Point)> {
        let mut pairs = Vec::new();
        let mut current: Option<Point> = None;
        for seg in segments {
            match seg {
                PathSegment::MoveTo(p) => current = Some(*p),
                PathSegment::LineTo(p) => {
                    if let Some(prev) = current {
                        pairs.push((prev, *p));
                    }
                    current = Some(*p);
                }
                PathSegment::Bezier { end, .. } => current = Some(*end),
                PathSegment::Arc { .. } | PathSegment::Close => current = None,
            }
        }
        pairs
    }

    /// Bounding box over all recorded segment points, or `None` for an
    /// empty path.
    pub fn bounding_box(segments: &[PathSegment]) -> Option<Rect> {
        let mut bbox: Option<Rect> = None;
        let mut add = |p: Point| match bbox.as_mut() {
            Some(r) => r.expand_to(p),
            None => bbox = Some(Rect::at(p)),
        };
        for seg in segments {
            match seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => add(*p),
                PathSegment::Bezier { cp1, cp2, end } => {
                    add(*cp1);
                    add(*cp2);
                    add(*end);
                }
                PathSegment::Arc { center, radius, .. } => {
                    add(Point::new(center.x - radius, center.y - radius));
                    add(Point::new(center.x + radius, center.y + radius));
                }
                PathSegment::Close => {}
            }
        }
        bbox
    }
}
