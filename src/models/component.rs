//! Classified panel components extracted from a drawing.

use crate::constants::{COLOR_CUSTOM, COLOR_INPUT, COLOR_LIGHT, COLOR_OUTPUT, COLOR_PARAM};
use crate::models::HsbaColor;
use serde::Serialize;
use std::fmt;

/// Widget type inferred from a shape's fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Knob (`#FF0000FF`)
    Param,
    /// Input jack (`#00FF00FF`)
    Input,
    /// Output jack (`#0000FFFF`)
    Output,
    /// Light (`#FF00FFFF`)
    Light,
    /// Custom widget (`#FFFF00FF`)
    Custom,
    /// Any other fill color
    Unknown,
}

impl ComponentKind {
    /// Classifies an 8-bit RGBA hex string ("#RRGGBBAA", uppercase).
    ///
    /// Only exact matches count. A color that is off by one in any channel is
    /// `Unknown`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        match hex {
            COLOR_PARAM => Self::Param,
            COLOR_INPUT => Self::Input,
            COLOR_OUTPUT => Self::Output,
            COLOR_LIGHT => Self::Light,
            COLOR_CUSTOM => Self::Custom,
            _ => Self::Unknown,
        }
    }

    /// Classifies a fill color.
    #[must_use]
    pub fn classify(fill: &HsbaColor) -> Self {
        Self::from_hex(&fill.to_hex())
    }

    /// Token stripped from component names of this kind, and the uppercase
    /// suffix appended to the enum identifier.
    ///
    /// Returns `None` for kinds the scaffold does not render.
    #[must_use]
    pub const fn name_suffix(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Param => Some(("_param", "_PARAM")),
            Self::Input => Some(("_input", "_INPUT")),
            Self::Output => Some(("_output", "_OUTPUT")),
            Self::Light | Self::Custom | Self::Unknown => None,
        }
    }

    /// Lowercase name used in reports and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Param => "param",
            Self::Input => "input",
            Self::Output => "output",
            Self::Light => "light",
            Self::Custom => "custom",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in panel millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal offset from the panel's left edge
    pub x: f64,
    /// Vertical offset from the panel's top edge
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Why a center point could not be derived for an oval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GeometryError {
    /// The oval's path does not have exactly four anchor nodes.
    NotACircle {
        /// Number of anchors found
        nodes: usize,
    },
    /// The oval carries no path data at all.
    MissingPath,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotACircle { nodes } => write!(
                f,
                "not a perfect circle ({nodes} anchor nodes, expected 4), can't derive center point"
            ),
            Self::MissingPath => write!(f, "oval has no path data, can't derive center point"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// One shape from the components layer after classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Raw label from the drawing, unmodified
    pub name: String,
    /// Kind inferred from the fill color
    pub kind: ComponentKind,
    /// Center in millimeters, when it could be derived
    pub center: Option<Point>,
    /// Soft failure from center derivation, if any
    pub geometry_error: Option<GeometryError>,
}

impl Component {
    /// Creates a component without coordinates.
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            center: None,
            geometry_error: None,
        }
    }

    /// Sets the center point.
    #[must_use]
    pub const fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_colors() {
        assert_eq!(ComponentKind::from_hex("#FF0000FF"), ComponentKind::Param);
        assert_eq!(ComponentKind::from_hex("#00FF00FF"), ComponentKind::Input);
        assert_eq!(ComponentKind::from_hex("#0000FFFF"), ComponentKind::Output);
        assert_eq!(ComponentKind::from_hex("#FF00FFFF"), ComponentKind::Light);
        assert_eq!(ComponentKind::from_hex("#FFFF00FF"), ComponentKind::Custom);
    }

    #[test]
    fn test_near_miss_is_unknown() {
        assert_eq!(ComponentKind::from_hex("#FE0000FF"), ComponentKind::Unknown);
        assert_eq!(ComponentKind::from_hex("#FF0000FE"), ComponentKind::Unknown);
        assert_eq!(ComponentKind::from_hex("#ff0000ff"), ComponentKind::Unknown);
        assert_eq!(ComponentKind::from_hex(""), ComponentKind::Unknown);
    }

    #[test]
    fn test_classify_fill() {
        let blue = HsbaColor::new(2.0 / 3.0, 1.0, 1.0, 1.0);
        assert_eq!(ComponentKind::classify(&blue), ComponentKind::Output);

        let half_transparent_red = HsbaColor::new(0.0, 1.0, 1.0, 0.5);
        assert_eq!(
            ComponentKind::classify(&half_transparent_red),
            ComponentKind::Unknown
        );
    }

    #[test]
    fn test_only_widget_kinds_have_suffixes() {
        assert_eq!(ComponentKind::Param.name_suffix(), Some(("_param", "_PARAM")));
        assert_eq!(ComponentKind::Output.name_suffix(), Some(("_output", "_OUTPUT")));
        assert_eq!(ComponentKind::Light.name_suffix(), None);
        assert_eq!(ComponentKind::Custom.name_suffix(), None);
        assert_eq!(ComponentKind::Unknown.name_suffix(), None);
    }

    #[test]
    fn test_geometry_error_message() {
        let err = GeometryError::NotACircle { nodes: 5 };
        assert!(err.to_string().contains("5 anchor nodes"));
    }
}
