//! Application-wide constants.
//!
//! Unit conversion factor, the panel height convention and the fill colors
//! that mark widget types in a drawing.

/// The display name of the application.
pub const APP_NAME: &str = "PanelForge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "panelforge";

/// Millimeters per design-tool point (1/72 inch).
pub const POINT_TO_MM: f64 = 0.352_777_777_8;

/// Physical height written to every patched panel SVG (3U Eurorack).
pub const PANEL_HEIGHT: &str = "128.5mm";

/// Name of the manifest file at the root of a project bundle.
pub const MANIFEST_FILE: &str = "Manifest.json";

/// Bundle directory extension stripped when deriving a module name.
pub const BUNDLE_EXTENSION: &str = ".vectornator";

/// Fill color of knobs.
pub const COLOR_PARAM: &str = "#FF0000FF";
/// Fill color of input jacks.
pub const COLOR_INPUT: &str = "#00FF00FF";
/// Fill color of output jacks.
pub const COLOR_OUTPUT: &str = "#0000FFFF";
/// Fill color of lights.
pub const COLOR_LIGHT: &str = "#FF00FFFF";
/// Fill color of custom widgets.
pub const COLOR_CUSTOM: &str = "#FFFF00FF";
