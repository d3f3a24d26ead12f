//! Nearest named color lookup
//!
//! Classifies an arbitrary RGB color against a small named palette using
//! Euclidean distance in RGB space. Ties keep the entry that appears first
//! in the palette, so results are reproducible for a given table order.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::RgbColor;
use crate::constants::palette::NAMED_COLORS;
use crate::{AnalysisError, Result};

/// Palette entry: a reference color and its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: Cow<'static, str>,
    pub color: RgbColor,
}

/// Nearest-name classifier over a non-empty palette
#[derive(Debug, Clone)]
pub struct ColorNamer {
    // Never empty: every constructor checks it
    entries: Vec<NamedColor>,
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self {
            entries: NAMED_COLORS
                .iter()
                .map(|&(color, name)| NamedColor {
                    name: Cow::Borrowed(name),
                    color,
                })
                .collect(),
        }
    }
}

impl ColorNamer {
    /// Build a palette from `(hex, name)` pairs, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the table is empty, a name is blank or a
    /// hex value does not parse.
    pub fn from_hex_entries<H, N>(entries: &[(H, N)]) -> Result<Self>
    where
        H: AsRef<str>,
        N: AsRef<str>,
    {
        if entries.is_empty() {
            return Err(AnalysisError::invalid_input("palette", "empty"));
        }

        let entries = entries
            .iter()
            .map(|(hex, name)| {
                let name = name.as_ref().trim();
                if name.is_empty() {
                    return Err(AnalysisError::invalid_input("palette_name", hex.as_ref()));
                }
                Ok(NamedColor {
                    name: Cow::Owned(name.to_string()),
                    color: RgbColor::from_hex(hex.as_ref())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Palette entries in lookup order
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Closest palette entry to `color`
    pub fn nearest(&self, color: RgbColor) -> &NamedColor {
        let index = nearest_index(color, self.entries.iter().map(|entry| entry.color));
        &self.entries[index]
    }

    /// Name of the closest palette entry to `color`
    pub fn nearest_name(&self, color: RgbColor) -> &str {
        &self.nearest(color).name
    }

    /// Reference color for a palette name (ASCII case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `UnknownLookupKey` if no entry carries that name.
    pub fn color_for_name(&self, name: &str) -> Result<RgbColor> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
            .map(|entry| entry.color)
            .ok_or_else(|| AnalysisError::unknown_key("color name", name))
    }
}

/// Name of the closest color in the built-in 11-color palette
pub fn nearest_color_name(color: RgbColor) -> &'static str {
    let index = nearest_index(color, NAMED_COLORS.iter().map(|&(reference, _)| reference));
    NAMED_COLORS[index].1
}

/// Euclidean distance between two colors in RGB space
pub fn rgb_distance(a: RgbColor, b: RgbColor) -> f64 {
    f64::from(distance_squared(a, b)).sqrt()
}

fn distance_squared(a: RgbColor, b: RgbColor) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

/// Index of the first minimum-distance reference; 0 for an empty iterator
fn nearest_index(color: RgbColor, references: impl Iterator<Item = RgbColor>) -> usize {
    let mut best_index = 0;
    let mut best_distance = u32::MAX;

    for (index, reference) in references.enumerate() {
        let distance = distance_squared(color, reference);
        // Strict comparison keeps the earlier entry on ties
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
            if distance == 0 {
                break;
            }
        }
    }

    best_index
}
