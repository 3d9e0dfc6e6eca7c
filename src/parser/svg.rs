//! Physical size patching for exported panel SVGs.
//!
//! Design tools export panels with a pixel `viewBox` and no (or wrong)
//! physical size. The patcher derives `width` in millimeters from the
//! viewBox width and pins `height` to the 3U panel height.
//!
//! Only the root start tag is rebuilt. Its attributes keep their order and
//! raw values, but are rewritten on one line separated by single spaces and
//! always double-quoted, so a literal `"` inside a single-quoted value becomes
//! `&quot;`. The prolog, a leading UTF-8 byte order mark and everything after
//! the root start tag pass through unchanged.

use anyhow::{Context, Result};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::PANEL_HEIGHT;
use crate::units::{format_number, point_to_mm};

/// Physical dimensions written to the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSize {
    /// Value for the `width` attribute, e.g. "105.83333334mm"
    pub width: String,
    /// Value for the `height` attribute, always [`PANEL_HEIGHT`]
    pub height: String,
}

impl PanelSize {
    /// Computes the size from a `viewBox` value ("min-x min-y width height").
    ///
    /// The width field is read as a leading integer, so `"300.7"` counts as
    /// 300. The viewBox height is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelforge::parser::svg::PanelSize;
    ///
    /// let size = PanelSize::from_view_box("0 0 300 400").unwrap();
    /// assert_eq!(size.height, "128.5mm");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if there is no third field or it has no leading
    /// digits.
    pub fn from_view_box(view_box: &str) -> Result<Self> {
        let width_field = view_box.split_whitespace().nth(2).with_context(|| {
            format!("viewBox '{view_box}' must have four fields: min-x min-y width height")
        })?;
        let pixels = parse_leading_int(width_field)
            .with_context(|| format!("viewBox width '{width_field}' is not a number"))?;

        #[allow(clippy::cast_precision_loss)]
        let width = format!("{}mm", format_number(point_to_mm(pixels as f64)));

        Ok(Self {
            width,
            height: PANEL_HEIGHT.to_string(),
        })
    }
}

/// Parses an optional sign and the digits that follow, ignoring the rest.
fn parse_leading_int(field: &str) -> Result<i64> {
    let pattern = Regex::new(r"^\s*([+-]?\d+)").context("Invalid leading integer pattern")?;
    let captures = pattern.captures(field).context("No leading digits found")?;
    captures[1]
        .parse::<i64>()
        .context("Leading digits do not fit in an integer")
}

const UTF8_BOM: &str = "\u{feff}";

/// Patches an SVG document held in memory.
///
/// # Errors
///
/// Returns an error if the document is not well-formed XML, the root element
/// is not `svg`, or its `viewBox` is missing or malformed.
pub fn patch_svg_str(content: &str) -> Result<String> {
    let stripped = content.strip_prefix(UTF8_BOM);
    let mut reader = Reader::from_str(stripped.unwrap_or(content));
    let mut writer = Writer::new(Vec::with_capacity(content.len() + 64));
    if stripped.is_some() {
        writer.get_mut().extend_from_slice(UTF8_BOM.as_bytes());
    }
    let mut patched = false;

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("Malformed SVG at byte {}", reader.buffer_position()))?;

        match event {
            Event::Eof => break,
            Event::Start(root) if !patched => {
                writer.write_event(Event::Start(patch_root(&root)?))?;
                patched = true;
            }
            Event::Empty(root) if !patched => {
                writer.write_event(Event::Empty(patch_root(&root)?))?;
                patched = true;
            }
            other => writer.write_event(other)?,
        }
    }

    if !patched {
        anyhow::bail!("SVG has no root element");
    }

    String::from_utf8(writer.into_inner()).context("Patched SVG is not valid UTF-8")
}

/// Rebuilds the root element with the physical size set.
///
/// Existing `width`/`height` keep their position; missing ones are appended.
fn patch_root(root: &BytesStart<'_>) -> Result<BytesStart<'static>> {
    if root.local_name().as_ref() != b"svg" {
        anyhow::bail!(
            "Root element is <{}>, expected <svg>",
            String::from_utf8_lossy(root.name().as_ref())
        );
    }

    let view_box = root
        .try_get_attribute("viewBox")?
        .context("SVG root has no viewBox attribute")?
        .unescape_value()?
        .into_owned();
    let size = PanelSize::from_view_box(&view_box)?;
    debug!(view_box = %view_box, width = %size.width, height = %size.height, "computed panel size");

    let mut patched = root.to_owned();
    patched.clear_attributes();

    let mut has_width = false;
    let mut has_height = false;
    for attr in root.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"width" => {
                patched.push_attribute(("width", size.width.as_str()));
                has_width = true;
            }
            b"height" => {
                patched.push_attribute(("height", size.height.as_str()));
                has_height = true;
            }
            _ => patched.push_attribute(Attribute {
                key: attr.key,
                value: requote(&attr.value),
            }),
        }
    }
    if !has_width {
        patched.push_attribute(("width", size.width.as_str()));
    }
    if !has_height {
        patched.push_attribute(("height", size.height.as_str()));
    }

    Ok(patched)
}

/// Escapes the `"` a single-quoted raw value may contain, leaving entity
/// references as written.
fn requote(raw: &[u8]) -> Cow<'_, [u8]> {
    if !raw.contains(&b'"') {
        return Cow::Borrowed(raw);
    }

    let mut quoted = Vec::with_capacity(raw.len() + 8);
    for &byte in raw {
        if byte == b'"' {
            quoted.extend_from_slice(b"&quot;");
        } else {
            quoted.push(byte);
        }
    }
    Cow::Owned(quoted)
}

/// Patches an SVG file in place. No backup is kept.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if
/// [`patch_svg_str`] fails.
pub fn patch_svg_file(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read SVG: {}", path.display()))?;
    let patched = patch_svg_str(&content)
        .context(format!("Failed to patch SVG: {}", path.display()))?;
    fs::write(path, &patched).context(format!("Failed to write SVG: {}", path.display()))?;
    info!(file = %path.display(), "patched panel size");
    Ok(patched)
}
