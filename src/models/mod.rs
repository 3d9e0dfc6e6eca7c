//! Data models for project bundles and classified panel components.
//!
//! Models are independent of I/O and code generation.

pub mod bundle;
pub mod color;
pub mod component;

// Re-export all model types
pub use bundle::{Artboard, Document, Element, Layer, LayerRole, Manifest, ShapeDescription};
pub use color::{HsbaColor, RgbaColor};
pub use component::{Component, ComponentKind, GeometryError, Point};
