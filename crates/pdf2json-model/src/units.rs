//! Unit conversion between engine viewport pixels and form-grid units.
//!
//! The document model positions everything on a quarter-inch form grid.
//! At the fixed rendering resolution of 96 dpi, one grid unit spans
//! `96 / 4 = 24` viewport pixels on each axis. All emitted coordinates are
//! rounded to 3 decimal places; that rounding is part of the output contract.

/// Rendering resolution the engine viewport is assumed to use.
pub const DPI: f64 = 96.0;

/// Horizontal grid cells per inch.
pub const GRID_X_PER_INCH: f64 = 4.0;

/// Vertical grid cells per inch.
pub const GRID_Y_PER_INCH: f64 = 4.0;

/// Viewport pixels per horizontal grid unit.
pub const PIXELS_PER_GRID_X: f64 = DPI / GRID_X_PER_INCH;

/// Viewport pixels per vertical grid unit.
pub const PIXELS_PER_GRID_Y: f64 = DPI / GRID_Y_PER_INCH;

/// Round a value to 3 decimal places.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Convert a viewport x coordinate (or width) to form-grid units.
pub fn to_form_x(v: f64) -> f64 {
    round3(v / PIXELS_PER_GRID_X)
}

/// Convert a viewport y coordinate (or height) to form-grid units.
pub fn to_form_y(v: f64) -> f64 {
    round3(v / PIXELS_PER_GRID_Y)
}

/// Convert a viewport point to form-grid units.
pub fn to_form_point(x: f64, y: f64) -> (f64, f64) {
    (to_form_x(x), to_form_y(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_constants() {
        assert_eq!(PIXELS_PER_GRID_X, 24.0);
        assert_eq!(PIXELS_PER_GRID_Y, 24.0);
    }

    #[test]
    fn round3_truncates_to_three_decimals() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(1.2344), 1.234);
        assert_eq!(round3(-0.0005), -0.001);
        assert_eq!(round3(2.0), 2.0);
    }

    #[test]
    fn to_form_x_matches_contract() {
        // toFormX(v) == round(v / (96 / gridX), 3)
        assert_eq!(to_form_x(50.0), round3(50.0 / (96.0 / GRID_X_PER_INCH)));
        assert_eq!(to_form_x(24.0), 1.0);
        assert_eq!(to_form_x(36.0), 1.5);
    }

    #[test]
    fn to_form_y_symmetric_with_x() {
        assert_eq!(to_form_y(48.0), 2.0);
        assert_eq!(to_form_y(13.0), to_form_x(13.0));
    }

    #[test]
    fn to_form_x_is_deterministic() {
        let v = 123.4567;
        assert_eq!(to_form_x(v), to_form_x(v));
    }

    #[test]
    fn to_form_point_converts_both_axes() {
        let (x, y) = to_form_point(24.0, 48.0);
        assert_eq!(x, 1.0);
        assert_eq!(y, 2.0);
    }
}
