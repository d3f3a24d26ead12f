//! Analogous and complementary color derivation
//!
//! The two analogous colors rotate the hue by +30° and +60° while keeping
//! saturation and lightness. The "complement" is the per-channel inversion
//! `255 - c`, not a 180° hue rotation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{hsl_to_rgb, rgb_to_hsl, RgbColor};
use crate::constants::harmony::{FIRST_ANALOGOUS_OFFSET, NEUTRAL_SWATCHES, SECOND_ANALOGOUS_OFFSET};

/// Colors derived from a base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonySet {
    /// Hue rotated by +30°
    pub analogous_near: RgbColor,
    /// Hue rotated by +60°
    pub analogous_far: RgbColor,
    /// Channel-inverted color
    pub inverse: RgbColor,
}

impl HarmonySet {
    /// `[analogous_near, analogous_far, inverse]`
    pub fn to_array(&self) -> [RgbColor; 3] {
        [self.analogous_near, self.analogous_far, self.inverse]
    }

    /// Lowercase hex strings in `to_array` order
    pub fn to_hex(&self) -> [String; 3] {
        self.to_array().map(|color| color.to_hex())
    }
}

/// Derive the two analogous colors and the inverted complement
pub fn complementary_colors(color: RgbColor) -> HarmonySet {
    let hsl = rgb_to_hsl(color);

    HarmonySet {
        analogous_near: hsl_to_rgb(hsl.rotate_hue(FIRST_ANALOGOUS_OFFSET)),
        analogous_far: hsl_to_rgb(hsl.rotate_hue(SECOND_ANALOGOUS_OFFSET)),
        inverse: color.inverted(),
    }
}

/// Hex-in, hex-out variant that never fails
///
/// Missing, empty or malformed input yields the neutral gray swatches.
pub fn complementary_hex(hex: Option<&str>) -> [String; 3] {
    let neutral = || NEUTRAL_SWATCHES.map(str::to_string);

    let Some(hex) = hex.map(str::trim).filter(|hex| !hex.is_empty()) else {
        return neutral();
    };

    match RgbColor::from_hex(hex) {
        Ok(color) => complementary_colors(color).to_hex(),
        Err(err) => {
            warn!(%err, "cannot derive complementary colors, using neutral swatches");
            neutral()
        }
    }
}
