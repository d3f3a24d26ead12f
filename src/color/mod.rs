//! Color sampling, naming and conversion module
//!
//! This module handles reading a representative color from pixel data,
//! RGB/HSL conversion, nearest-name classification against the named
//! palette, and derivation of analogous and complementary colors.

pub mod model;
pub mod conversion;
pub mod naming;
pub mod harmony;
pub mod sampling;

pub use model::{HslColor, RgbColor};
pub use conversion::{hsl_to_rgb, rgb_to_hsl};
pub use naming::{nearest_color_name, rgb_distance, ColorNamer, NamedColor};
pub use harmony::{complementary_colors, complementary_hex, HarmonySet};
pub use sampling::{sample_average_color, ColorSampler, PixelSource, SamplingConfig};
