//! Service layer between the parsed bundle and the generator.

pub mod extract;
pub mod geometry;

pub use extract::extract_components;
pub use geometry::{circle_center, component_center};
