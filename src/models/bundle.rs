//! Typed view of a Vectornator project bundle.
//!
//! Only the fields the generator reads are modeled. Unknown JSON fields are
//! ignored; missing required fields fail deserialization.

use crate::models::HsbaColor;
use serde::{Deserialize, Serialize};

/// `Manifest.json` at the bundle root.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// File name of the document JSON, relative to the bundle root
    #[serde(rename = "documentJSONFilename")]
    pub document_json_filename: String,
}

/// Document JSON named by the manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Document {
    /// Drawing section listing the artboards
    pub drawing: Drawing,
}

/// Drawing section of the document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    /// Artboard files, relative to the bundle root, in document order
    pub artboard_paths: Vec<String>,
}

/// A single canvas.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artboard {
    /// Artboard title, when present
    #[serde(default)]
    pub title: Option<String>,
    /// Layers, bottom to top
    pub layers: Vec<Layer>,
}

impl Artboard {
    /// Returns the first layer with the given role.
    #[must_use]
    pub fn layer(&self, role: &LayerRole) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == *role)
    }
}

/// Named group of elements.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Layer {
    /// Layer name, decoded into its role
    pub name: LayerRole,
    /// Shapes in document order
    pub elements: Vec<Element>,
}

/// What a layer is used for, decided from its name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum LayerRole {
    /// `components` in any case: shapes that become widgets
    Components,
    /// Anything else, with the raw name kept
    Other(String),
}

impl From<String> for LayerRole {
    fn from(name: String) -> Self {
        if name.to_lowercase() == "components" {
            Self::Components
        } else {
            Self::Other(name)
        }
    }
}

impl From<LayerRole> for String {
    fn from(role: LayerRole) -> Self {
        match role {
            LayerRole::Components => "components".to_string(),
            LayerRole::Other(name) => name,
        }
    }
}

/// A shape element.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Display label
    pub name: String,
    /// Type description, e.g. "(Oval)"
    pub element_description: ShapeDescription,
    /// Fill and path
    pub styleable: Styleable,
}

impl Element {
    /// Anchor points of the element's path, or `None` without path data.
    pub fn anchor_points(&self) -> Option<impl Iterator<Item = [f64; 2]> + '_> {
        self.styleable
            .abstract_path
            .as_ref()
            .map(|path| path.path_data.nodes.iter().map(|node| node.anchor_point))
    }
}

/// Shape type decoded from the element description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeDescription {
    /// "(Oval)" in any case
    Oval,
    /// Any other description, kept verbatim
    Other(String),
}

impl From<String> for ShapeDescription {
    fn from(description: String) -> Self {
        if description.to_lowercase() == "(oval)" {
            Self::Oval
        } else {
            Self::Other(description)
        }
    }
}

impl From<ShapeDescription> for String {
    fn from(description: ShapeDescription) -> Self {
        match description {
            ShapeDescription::Oval => "(Oval)".to_string(),
            ShapeDescription::Other(raw) => raw,
        }
    }
}

/// Visual style of an element.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Styleable {
    /// Fill color
    pub fill_color: HsbaColor,
    /// Outline path, absent for some element types
    #[serde(default)]
    pub abstract_path: Option<AbstractPath>,
}

/// Path wrapper.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractPath {
    /// Path data
    pub path_data: PathData,
}

/// Path data holding the anchor nodes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathData {
    /// Nodes in drawing order
    pub nodes: Vec<PathNode>,
}

/// One node of a path.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathNode {
    /// Anchor point `[x, y]` in design-tool points
    pub anchor_point: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_role_is_case_insensitive() {
        assert_eq!(
            LayerRole::from("Components".to_string()),
            LayerRole::Components
        );
        assert_eq!(
            LayerRole::from("COMPONENTS".to_string()),
            LayerRole::Components
        );
        assert_eq!(
            LayerRole::from("components ".to_string()),
            LayerRole::Other("components ".to_string())
        );
    }

    #[test]
    fn test_shape_description_decoding() {
        assert_eq!(
            ShapeDescription::from("(Oval)".to_string()),
            ShapeDescription::Oval
        );
        assert_eq!(
            ShapeDescription::from("(OVAL)".to_string()),
            ShapeDescription::Oval
        );
        assert_eq!(
            ShapeDescription::from("(Rectangle)".to_string()),
            ShapeDescription::Other("(Rectangle)".to_string())
        );
    }

    #[test]
    fn test_element_deserialize() {
        let json = r#"{
            "name": "cutoff_param",
            "elementDescription": "(Oval)",
            "localTransform": {"rotation": 0},
            "styleable": {
                "fillColor": {"h": 0, "s": 1, "b": 1, "a": 1},
                "abstractPath": {"pathData": {"nodes": [
                    {"anchorPoint": [0, 5]},
                    {"anchorPoint": [5, 0]}
                ]}}
            }
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.element_description, ShapeDescription::Oval);
        let anchors: Vec<_> = element.anchor_points().unwrap().collect();
        assert_eq!(anchors, vec![[0.0, 5.0], [5.0, 0.0]]);
    }

    #[test]
    fn test_element_missing_fill_fails() {
        let json = r#"{"name": "x", "elementDescription": "(Oval)", "styleable": {}}"#;
        let err = serde_json::from_str::<Element>(json).unwrap_err();
        assert!(err.to_string().contains("fillColor"));
    }

    #[test]
    fn test_element_without_path() {
        let json = r#"{
            "name": "label",
            "elementDescription": "(Text)",
            "styleable": {"fillColor": {"h": 0, "s": 0, "b": 0, "a": 1}}
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert!(element.anchor_points().is_none());
    }
}
