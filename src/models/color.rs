//! HSBA fill colors and their 8-bit RGBA hex form.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};

/// Fill color as stored by the design tool.
///
/// Every channel is a fraction in `0.0..=1.0`. HSBA is numerically the same
/// model as HSV plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsbaColor {
    /// Hue (0.0-1.0, a full turn)
    pub h: f64,
    /// Saturation (0.0-1.0)
    pub s: f64,
    /// Brightness/value (0.0-1.0)
    pub b: f64,
    /// Alpha (0.0-1.0)
    pub a: f64,
}

impl HsbaColor {
    /// Creates a new `HsbaColor` from individual channel values.
    #[must_use]
    pub const fn new(h: f64, s: f64, b: f64, a: f64) -> Self {
        Self { h, s, b, a }
    }

    /// Converts to 8-bit RGBA using the six-sector HSV formula.
    ///
    /// Channels are truncated, not rounded, so a color that is a hair below
    /// a sector boundary lands one step short of the "pure" value.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelforge::models::{HsbaColor, RgbaColor};
    ///
    /// let red = HsbaColor::new(0.0, 1.0, 1.0, 1.0).to_rgba();
    /// assert_eq!(red, RgbaColor::new(255, 0, 0, 255));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard HSV color model uses single-char names
    pub fn to_rgba(&self) -> RgbaColor {
        let h = self.h.clamp(0.0, 1.0);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.b.clamp(0.0, 1.0);
        let a = self.a.clamp(0.0, 1.0);

        // A full turn is the same hue as zero
        let degrees = (h * 360.0) % 360.0;

        let c = v * s;
        let x = c * (1.0 - (((degrees / 60.0) % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if degrees < 60.0 {
            (c, x, 0.0)
        } else if degrees < 120.0 {
            (x, c, 0.0)
        } else if degrees < 180.0 {
            (0.0, c, x)
        } else if degrees < 240.0 {
            (0.0, x, c)
        } else if degrees < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        RgbaColor {
            r: to_channel(r + m),
            g: to_channel(g + m),
            b: to_channel(b + m),
            a: to_channel(a),
        }
    }

    /// Shorthand for `self.to_rgba().to_hex()`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgba().to_hex()
    }
}

fn to_channel(fraction: f64) -> u8 {
    (fraction * 255.0).trunc().clamp(0.0, 255.0) as u8
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255)
    pub a: u8,
}

impl RgbaColor {
    /// Creates a new `RgbaColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Formats as "#RRGGBBAA" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use panelforge::models::RgbaColor;
    ///
    /// assert_eq!(RgbaColor::new(0, 128, 255, 255).to_hex(), "#0080FFFF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}
