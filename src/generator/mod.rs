//! C++ scaffold generation for VCV Rack modules.

pub mod identifier;
pub mod scaffold;
pub mod validator;

pub use identifier::{enum_identifier, normalize_identifier};
pub use scaffold::ScaffoldGenerator;
pub use validator::{IssueKind, PanelValidator, ValidationIssue, ValidationReport};
