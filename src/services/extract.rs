//! Component extraction from an artboard.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::{Artboard, Component, ComponentKind, LayerRole};
use crate::services::geometry::component_center;

/// Classifies every element of the artboard's components layer.
///
/// Output order matches document order. Nothing is filtered: unknown kinds
/// and components without coordinates are kept for the caller to judge.
///
/// # Errors
///
/// Returns an error if the artboard has no layer named `components`
/// (compared case-insensitively).
pub fn extract_components(artboard: &Artboard) -> Result<Vec<Component>> {
    let layer = artboard
        .layer(&LayerRole::Components)
        .context("Artboard has no 'components' layer")?;

    let components = layer
        .elements
        .iter()
        .map(|element| {
            let kind = ComponentKind::classify(&element.styleable.fill_color);
            let mut component = Component::new(element.name.clone(), kind);

            match component_center(element) {
                Ok(center) => component.center = center,
                Err(e) => {
                    warn!(component = %element.name, "{e}");
                    component.geometry_error = Some(e);
                }
            }

            debug!(
                component = %component.name,
                kind = %component.kind,
                fill = %element.styleable.fill_color.to_hex(),
                "classified component"
            );
            component
        })
        .collect();

    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeometryError, Point};
    use crate::units::point_to_mm;
    use serde_json::{json, Value};

    fn element(name: &str, description: &str, hue: f64, anchors: &[[f64; 2]]) -> Value {
        let nodes: Vec<_> = anchors
            .iter()
            .map(|a| json!({ "anchorPoint": [a[0], a[1]] }))
            .collect();
        json!({
            "name": name,
            "elementDescription": description,
            "styleable": {
                "fillColor": { "h": hue, "s": 1.0, "b": 1.0, "a": 1.0 },
                "abstractPath": { "pathData": { "nodes": nodes } }
            }
        })
    }

    const SQUARE: [[f64; 2]; 4] = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];

    #[test]
    fn test_extracts_in_document_order() {
        let artboard: Artboard = serde_json::from_value(json!({
            "layers": [
                { "name": "background", "elements": [element("bg", "(Rectangle)", 0.5, &SQUARE)] },
                { "name": "Components", "elements": [
                    element("freq_param", "(Oval)", 0.0, &SQUARE),
                    element("in_input", "(Oval)", 1.0 / 3.0, &SQUARE),
                    element("out_output", "(oval)", 2.0 / 3.0, &SQUARE),
                    element("led", "(Oval)", 300.0 / 360.0, &SQUARE),
                    element("logo", "(Path)", 1.0 / 6.0, &SQUARE),
                    element("stray", "(Oval)", 0.5, &SQUARE),
                ]}
            ]
        }))
        .unwrap();

        let components = extract_components(&artboard).unwrap();
        let summary: Vec<_> = components
            .iter()
            .map(|c| (c.name.as_str(), c.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("freq_param", ComponentKind::Param),
                ("in_input", ComponentKind::Input),
                ("out_output", ComponentKind::Output),
                ("led", ComponentKind::Light),
                ("logo", ComponentKind::Custom),
                ("stray", ComponentKind::Unknown),
            ]
        );

        let mid = point_to_mm(5.0);
        assert_eq!(components[0].center, Some(Point::new(mid, mid)));
        assert_eq!(components[4].center, None);
        assert_eq!(components[4].geometry_error, None);
    }

    #[test]
    fn test_bad_oval_is_kept_without_coordinates() {
        let artboard: Artboard = serde_json::from_value(json!({
            "layers": [{ "name": "components", "elements": [
                element("wobbly_param", "(Oval)", 0.0, &SQUARE[..3]),
            ]}]
        }))
        .unwrap();

        let components = extract_components(&artboard).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].kind, ComponentKind::Param);
        assert_eq!(components[0].center, None);
        assert_eq!(
            components[0].geometry_error,
            Some(GeometryError::NotACircle { nodes: 3 })
        );
    }

    #[test]
    fn test_missing_components_layer() {
        let artboard: Artboard = serde_json::from_value(json!({
            "layers": [{ "name": "background", "elements": [] }]
        }))
        .unwrap();

        let err = extract_components(&artboard).unwrap_err();
        assert!(err.to_string().contains("components"));
    }

    #[test]
    fn test_empty_components_layer() {
        let artboard: Artboard = serde_json::from_value(json!({
            "layers": [{ "name": "components", "elements": [] }]
        }))
        .unwrap();

        assert!(extract_components(&artboard).unwrap().is_empty());
    }
}
