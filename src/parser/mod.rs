//! Readers for the design tool's project bundles and exported SVG panels.

pub mod bundle;
pub mod svg;

// Re-export commonly used functions
pub use bundle::ProjectBundle;
pub use svg::{patch_svg_file, patch_svg_str};
