//! Center-point derivation for component shapes.
//!
//! The design tool stores an oval as a four-node path whose anchors sit on the
//! ellipse's extreme points. The widget center is the midpoint of their
//! bounding box, converted from points to millimeters.

use crate::models::{Element, GeometryError, Point, ShapeDescription};
use crate::units::point_to_mm;

/// Number of anchor nodes a circle drawn with the oval tool carries.
const CIRCLE_NODE_COUNT: usize = 4;

/// Derives the center of an element in millimeters.
///
/// # Returns
///
/// - `Ok(Some(point))` for an oval with exactly four anchors
/// - `Ok(None)` for any non-oval element (no coordinates, not an error)
/// - `Err(GeometryError)` for an oval whose center cannot be derived
///
/// The error is soft: callers keep the component without coordinates.
pub fn component_center(element: &Element) -> Result<Option<Point>, GeometryError> {
    match element.element_description {
        ShapeDescription::Oval => {
            let anchors: Vec<[f64; 2]> = element
                .anchor_points()
                .ok_or(GeometryError::MissingPath)?
                .collect();
            circle_center(&anchors).map(Some)
        }
        ShapeDescription::Other(_) => Ok(None),
    }
}

/// Center of the bounding box of exactly four anchors, in millimeters.
///
/// The scan starts min at `f64::MAX` and max at `0.0`. Max comparisons use
/// `>=` so the later of two equal points wins.
pub fn circle_center(anchors: &[[f64; 2]]) -> Result<Point, GeometryError> {
    if anchors.len() != CIRCLE_NODE_COUNT {
        return Err(GeometryError::NotACircle {
            nodes: anchors.len(),
        });
    }

    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = 0.0;
    let mut max_y = 0.0;

    for &[x, y] in anchors {
        if x < min_x {
            min_x = x;
        }
        if x >= max_x {
            max_x = x;
        }
        if y < min_y {
            min_y = y;
        }
        if y >= max_y {
            max_y = y;
        }
    }

    Ok(Point::new(
        point_to_mm(((max_x - min_x) / 2.0) + min_x),
        point_to_mm(((max_y - min_y) / 2.0) + min_y),
    ))
}
