//! Symbolic identifiers for generated enums and construction calls.

use anyhow::{Context, Result};
use regex::RegexBuilder;

use crate::models::{Component, ComponentKind};

/// Removes every case-insensitive occurrence of `token` from `name`, then
/// uppercases the result.
///
/// The token is removed wherever it appears, not only at the end.
///
/// # Examples
///
/// ```
/// use panelforge::generator::identifier::normalize_identifier;
///
/// assert_eq!(normalize_identifier("Filter_Freq_param", "_param")?, "FILTER_FREQ");
/// assert_eq!(normalize_identifier("cv_INPUT_left_input", "_input")?, "CV_LEFT");
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if no matcher can be built for `token`.
pub fn normalize_identifier(name: &str, token: &str) -> Result<String> {
    if token.is_empty() {
        return Ok(name.to_uppercase());
    }

    let pattern = RegexBuilder::new(&regex::escape(token))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Invalid suffix token '{token}'"))?;
    Ok(pattern.replace_all(name, "").to_uppercase())
}

/// Enum identifier for a component, e.g. `CUTOFF_PARAM`.
///
/// Returns `None` for kinds the scaffold does not render.
pub fn enum_identifier(component: &Component) -> Result<Option<String>> {
    component
        .kind
        .name_suffix()
        .map(|(token, suffix)| {
            normalize_identifier(&component.name, token).map(|base| format!("{base}{suffix}"))
        })
        .transpose()
}

/// Groups a kind's components with their enum identifiers, in input order.
pub fn identifiers_of_kind(
    components: &[Component],
    kind: ComponentKind,
) -> Result<Vec<(&Component, String)>> {
    components
        .iter()
        .filter(|c| c.kind == kind)
        .filter_map(|c| enum_identifier(c).transpose().map(|id| id.map(|id| (c, id))))
        .collect()
}
