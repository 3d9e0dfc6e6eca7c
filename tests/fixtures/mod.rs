//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Hue (0..1) producing each reference color at full saturation/brightness.
pub const HUE_PARAM: f64 = 0.0;
pub const HUE_INPUT: f64 = 1.0 / 3.0;
pub const HUE_OUTPUT: f64 = 2.0 / 3.0;
pub const HUE_LIGHT: f64 = 300.0 / 360.0;
pub const HUE_CUSTOM: f64 = 1.0 / 6.0;
/// Cyan matches no reference color.
pub const HUE_UNKNOWN: f64 = 0.5;

/// Path to the panelforge binary
pub fn panelforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_panelforge")
}

/// Runs panelforge with an empty, isolated config directory.
pub fn run_panelforge(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp config dir");
    run_with_config_dir(args, config_dir.path())
}

/// Runs panelforge with `PANELFORGE_CONFIG_DIR` pointing at `config_dir`.
pub fn run_with_config_dir(args: &[&str], config_dir: &Path) -> Output {
    Command::new(panelforge_bin())
        .env("PANELFORGE_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Anchor points of an axis-aligned square centered on `(cx, cy)` with
/// half-size `r`, in points.
pub fn square_anchors(cx: f64, cy: f64, r: f64) -> Vec<[f64; 2]> {
    vec![
        [cx - r, cy - r],
        [cx + r, cy - r],
        [cx + r, cy + r],
        [cx - r, cy + r],
    ]
}

/// A shape element as stored in an artboard JSON file.
pub fn element(name: &str, description: &str, hue: f64, anchors: &[[f64; 2]]) -> Value {
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

/// An oval centered on `(cx, cy)` points.
pub fn oval(name: &str, hue: f64, cx: f64, cy: f64) -> Value {
    element(name, "(Oval)", hue, &square_anchors(cx, cy, 10.0))
}

/// An artboard with a background layer and a `components` layer.
pub fn artboard(title: &str, components: Vec<Value>) -> Value {
    json!({
        "title": title,
        "layers": [
            { "name": "Background", "elements": [] },
            { "name": "components", "elements": components }
        ]
    })
}

/// A bundle directory `<name>.vectornator` inside a temp dir.
pub struct BundleFixture {
    /// Keeps the directory alive
    pub dir: TempDir,
    /// Path to the bundle directory
    pub path: PathBuf,
}

impl BundleFixture {
    /// Bundle path as a CLI argument.
    pub fn arg(&self) -> &str {
        self.path.to_str().expect("Temp path is not UTF-8")
    }
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).expect("Failed to write JSON");
}

/// Creates a bundle with one artboard per entry of `artboards`.
pub fn bundle_with_artboards(name: &str, artboards: &[Value]) -> BundleFixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(format!("{name}.vectornator"));
    fs::create_dir_all(&path).unwrap();

    let artboard_paths: Vec<String> = (0..artboards.len())
        .map(|i| format!("Artboard{i}.json"))
        .collect();
    write_json(
        &path.join("Manifest.json"),
        &json!({ "documentJSONFilename": "Document.json", "version": 1 }),
    );
    write_json(
        &path.join("Document.json"),
        &json!({ "drawing": { "artboardPaths": artboard_paths } }),
    );
    for (file, board) in artboard_paths.iter().zip(artboards) {
        write_json(&path.join(file), board);
    }

    BundleFixture { dir, path }
}

/// Creates a single-artboard bundle with the given components.
pub fn bundle(name: &str, components: Vec<Value>) -> BundleFixture {
    bundle_with_artboards(name, &[artboard("Panel", components)])
}

/// A small filter panel: two knobs, one input, one output.
pub fn filter_bundle() -> BundleFixture {
    bundle(
        "Filter",
        vec![
            oval("cutoff_param", HUE_PARAM, 50.0, 100.0),
            oval("Res_Param", HUE_PARAM, 50.0, 200.0),
            oval("audio_input", HUE_INPUT, 30.0, 300.0),
            oval("audio_output", HUE_OUTPUT, 70.0, 300.0),
        ],
    )
}

/// Writes `content` to `panel.svg` in a new temp dir.
pub fn svg_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("panel.svg");
    fs::write(&path, content).expect("Failed to write SVG");
    (dir, path)
}
