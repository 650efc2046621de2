//! Geometry primitives: points, rectangles, and the affine transform matrix.

/// A 2D point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Build a rectangle from two arbitrary corners, normalizing so that
    /// `x0 < x1` and `y0 < y1`.
    pub fn normalized(xa: f64, ya: f64, xb: f64, yb: f64) -> Self {
        Self {
            x0: xa.min(xb),
            y0: ya.min(yb),
            x1: xa.max(xb),
            y1: ya.max(yb),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Grow the rectangle to include a point.
    pub fn expand_to(&mut self, p: Point) {
        self.x0 = self.x0.min(p.x);
        self.y0 = self.y0.min(p.y);
        self.x1 = self.x1.max(p.x);
        self.y1 = self.y1.max(p.y);
    }

    /// A degenerate rectangle at a single point, used as a bbox seed.
    pub fn at(p: Point) -> Self {
        Self {
            x0: p.x,
            y0: p.y,
            x1: p.x,
            y1: p.y,
        }
    }
}

/// A 2D affine transform, the 3×3 matrix
/// `[a c e; b d f; 0 0 1]` stored in its six significant entries.
///
/// This is a plain value type: the drawing surface keeps a stack of these,
/// and every recorded coordinate passes through the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Apply the transform to a point.
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// `self × other`: the resulting transform applies `other` first,
    /// then `self`.
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn translated(&self, tx: f64, ty: f64) -> Matrix {
        self.multiply(&Matrix::new(1.0, 0.0, 0.0, 1.0, tx, ty))
    }

    pub fn scaled(&self, sx: f64, sy: f64) -> Matrix {
        self.multiply(&Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0))
    }

    /// Rotation by `theta` radians, counter-clockwise.
    pub fn rotated(&self, theta: f64) -> Matrix {
        let (sin, cos) = theta.sin_cos();
        self.multiply(&Matrix::new(cos, sin, -sin, cos, 0.0, 0.0))
    }

    /// Extract the rotation this matrix encodes, in degrees.
    ///
    /// Returns a non-zero angle only when the off-diagonal entries agree on
    /// a clean rotation; a general skew reports 0.
    pub fn rotation_degrees(&self) -> f64 {
        if self.b == 0.0 && self.c == 0.0 {
            return 0.0;
        }
        let from_ab = self.b.atan2(self.a);
        let from_cd = (-self.c).atan2(self.d);
        if (from_ab - from_cd).abs() < 1e-6 {
            from_ab.to_degrees()
        } else {
            0.0
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}
