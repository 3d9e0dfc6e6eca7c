//! Panel validation before scaffold generation.
//!
//! The scaffold generator itself never rejects input: duplicate identifiers
//! and unplaced components are emitted as they are. This module reports those
//! problems so `validate` and `generate --strict` can act on them.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

use crate::generator::identifier::enum_identifier;
use crate::models::{Component, ComponentKind};

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Problems that make the generated scaffold fail to compile
    pub errors: Vec<ValidationIssue>,
    /// Problems that produce an incomplete scaffold
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("❌ {} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&format!("⚠️  {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// A single finding about one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Type of issue
    pub kind: IssueKind,
    /// Position of the component in the components layer
    pub index: usize,
    /// Raw component name
    pub component: String,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[#{} '{}'] {}: {}",
            self.index, self.component, self.kind, self.message
        )
    }
}

/// Types of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Two components of one kind normalize to the same enum identifier
    DuplicateIdentifier,
    /// The name is nothing but the suffix token
    EmptyIdentifier,
    /// A rendered component has no center point
    MissingCoordinates,
    /// The fill color matched no reference color
    UnknownColor,
    /// Light or custom component, which the scaffold does not render
    NotRendered,
}

impl IssueKind {
    /// True for findings that break the generated code.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::DuplicateIdentifier | Self::EmptyIdentifier)
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifier => write!(f, "Duplicate Identifier"),
            Self::EmptyIdentifier => write!(f, "Empty Identifier"),
            Self::MissingCoordinates => write!(f, "Missing Coordinates"),
            Self::UnknownColor => write!(f, "Unknown Color"),
            Self::NotRendered => write!(f, "Not Rendered"),
        }
    }
}

/// Panel validator.
pub struct PanelValidator<'a> {
    components: &'a [Component],
}

impl<'a> PanelValidator<'a> {
    /// Creates a new panel validator.
    #[must_use]
    pub const fn new(components: &'a [Component]) -> Self {
        Self { components }
    }

    /// Validates the extracted components.
    ///
    /// Checks:
    /// - Enum identifiers are unique and non-empty
    /// - Rendered components have a center point
    /// - Every component has a recognized color
    /// - Light/custom components are flagged as not rendered
    pub fn validate(&self) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for (index, component) in self.components.iter().enumerate() {
            let mut push = |kind: IssueKind, message: String| {
                let issue = ValidationIssue {
                    kind,
                    index,
                    component: component.name.clone(),
                    message,
                };
                if kind.is_error() {
                    report.errors.push(issue);
                } else {
                    report.warnings.push(issue);
                }
            };

            match component.kind {
                ComponentKind::Param | ComponentKind::Input | ComponentKind::Output => {
                    if let Some(id) = enum_identifier(component)? {
                        let (_, suffix) = component.kind.name_suffix().unwrap_or_default();
                        if id == suffix {
                            push(
                                IssueKind::EmptyIdentifier,
                                format!("name normalizes to an empty identifier ({id})"),
                            );
                        }
                        if let Some(&first) = first_seen.get(&id) {
                            push(
                                IssueKind::DuplicateIdentifier,
                                format!("{id} is already used by component #{first}"),
                            );
                        } else {
                            first_seen.insert(id, index);
                        }
                    }

                    if component.center.is_none() {
                        let reason = component
                            .geometry_error
                            .map_or_else(|| "shape is not an oval".to_string(), |e| e.to_string());
                        push(
                            IssueKind::MissingCoordinates,
                            format!("{} has no center point: {reason}", component.kind),
                        );
                    }
                }
                ComponentKind::Light | ComponentKind::Custom => push(
                    IssueKind::NotRendered,
                    format!("{} components are not rendered by the scaffold", component.kind),
                ),
                ComponentKind::Unknown => push(
                    IssueKind::UnknownColor,
                    "fill color matches no reference color".to_string(),
                ),
            }
        }

        Ok(report)
    }
}
