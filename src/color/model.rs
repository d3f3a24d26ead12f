//! RGB and HSL color value types
//!
//! `RgbColor` is the 8-bit sRGB triple read from images and stored in the
//! reference tables. `HslColor` is its cylindrical form, used for hue
//! rotation when deriving analogous colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Create a color from individual channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wider integer channels
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any channel is outside [0, 255].
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self::new(
            checked_channel("red", r)?,
            checked_channel("green", g)?,
            checked_channel("blue", b)?,
        ))
    }

    /// Parse a `#RRGGBB` or `RRGGBB` string (either case)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AnalysisError::invalid_input("hex", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AnalysisError::invalid_input("hex", hex))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parse a hex literal at compile time.
    ///
    /// Intended for constant tables; a malformed literal fails const evaluation.
    pub const fn from_hex_const(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        let start = if !bytes.is_empty() && bytes[0] == b'#' { 1 } else { 0 };
        if bytes.len() - start != 6 {
            panic!("hex color literal must have exactly six digits");
        }
        Self::new(
            hex_pair(bytes[start], bytes[start + 1]),
            hex_pair(bytes[start + 2], bytes[start + 3]),
            hex_pair(bytes[start + 4], bytes[start + 5]),
        )
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel inversion `(255 - r, 255 - g, 255 - b)`
    pub const fn inverted(&self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Channels as an array
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Check whether all three channels are equal (no hue)
    pub const fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

fn checked_channel(name: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| AnalysisError::invalid_input(name, value))
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in color literal"),
    }
}

const fn hex_pair(high: u8, low: u8) -> u8 {
    hex_digit(high) * 16 + hex_digit(low)
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslColor {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl HslColor {
    /// Create a validated HSL color. Finite hues are wrapped into [0, 360).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite components or saturation or
    /// lightness outside [0, 1].
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        if !hue.is_finite() {
            return Err(AnalysisError::invalid_input("hue", hue));
        }
        if !(0.0..=1.0).contains(&saturation) {
            return Err(AnalysisError::invalid_input("saturation", saturation));
        }
        if !(0.0..=1.0).contains(&lightness) {
            return Err(AnalysisError::invalid_input("lightness", lightness));
        }
        Ok(Self {
            hue: normalize_hue(hue),
            saturation,
            lightness,
        })
    }

    /// Build from components produced by a conversion; clamps float drift.
    pub(crate) fn from_converted(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: if hue.is_finite() { normalize_hue(hue) } else { 0.0 },
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }

    /// Hue in degrees, [0, 360)
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation, [0, 1]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Lightness, [0, 1]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Same saturation and lightness with the hue rotated by `degrees`
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self {
            hue: normalize_hue(self.hue + degrees),
            ..*self
        }
    }
}

/// Wrap a finite angle into [0, 360)
fn normalize_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds up to 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
