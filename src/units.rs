//! Unit conversion and number formatting shared by both pipelines.

use crate::constants::POINT_TO_MM;

/// Converts design-tool points to millimeters.
///
/// This is a plain multiplication by [`POINT_TO_MM`], not a ratio derived
/// from inches.
///
/// # Examples
///
/// ```
/// use panelforge::constants::POINT_TO_MM;
/// use panelforge::units::point_to_mm;
///
/// assert_eq!(point_to_mm(2.0), 2.0 * POINT_TO_MM);
/// ```
#[must_use]
pub fn point_to_mm(points: f64) -> f64 {
    points * POINT_TO_MM
}

/// Formats a number in its shortest round-trip decimal form.
///
/// Integral values print without a fraction (`5`, not `5.0`) and negative
/// zero prints as `0`, which is what the C++ and SVG consumers expect.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
