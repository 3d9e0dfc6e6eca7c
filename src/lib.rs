//! PanelForge Library
//!
//! Turns Vectornator panel drawings into VCV Rack module scaffolds: loads the
//! project bundle, classifies components on the `components` layer by fill
//! color, derives their centers in millimeters and emits C++ source. Also
//! patches exported panel SVGs with their physical size.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod models;
pub mod parser;
pub mod services;
pub mod units;
