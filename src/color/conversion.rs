//! RGB ↔ HSL conversion
//!
//! Both directions go through the `palette` crate's non-linear sRGB and HSL
//! types. Achromatic inputs (r = g = b) map to hue 0, saturation 0.

use palette::{encoding, FromColor, Hsl, RgbHue, Srgb};

use super::{HslColor, RgbColor};

type SrgbHsl = Hsl<encoding::Srgb, f64>;

/// Convert an 8-bit RGB color to HSL
pub fn rgb_to_hsl(color: RgbColor) -> HslColor {
    if color.is_achromatic() {
        return HslColor::from_converted(0.0, 0.0, f64::from(color.r) / 255.0);
    }

    let srgb = Srgb::new(
        f64::from(color.r) / 255.0,
        f64::from(color.g) / 255.0,
        f64::from(color.b) / 255.0,
    );
    let hsl = SrgbHsl::from_color(srgb);

    HslColor::from_converted(
        hsl.hue.into_positive_degrees(),
        hsl.saturation,
        hsl.lightness,
    )
}

/// Convert HSL to 8-bit RGB, rounding each channel to nearest
pub fn hsl_to_rgb(color: HslColor) -> RgbColor {
    let hsl = SrgbHsl::new(
        RgbHue::from_degrees(color.hue()),
        color.saturation(),
        color.lightness(),
    );
    let srgb = Srgb::<f64>::from_color(hsl);

    RgbColor::new(
        to_channel(srgb.red),
        to_channel(srgb.green),
        to_channel(srgb.blue),
    )
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
