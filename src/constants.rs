//! Reference values for color sampling, naming and style analysis
//!
//! Compile-time tables and defaults shared by the analysis pipeline.

/// Named color reference table
pub mod palette {
    use crate::color::RgbColor;

    /// Default named colors, in lookup order.
    ///
    /// Order matters: the nearest-name search keeps the first entry on ties.
    pub const NAMED_COLORS: [(RgbColor, &str); 11] = [
        (RgbColor::from_hex_const("#FF0000"), "Red"),
        (RgbColor::from_hex_const("#00FF00"), "Green"),
        (RgbColor::from_hex_const("#0000FF"), "Blue"),
        (RgbColor::from_hex_const("#FFFF00"), "Yellow"),
        (RgbColor::from_hex_const("#FFA500"), "Orange"),
        (RgbColor::from_hex_const("#800080"), "Purple"),
        (RgbColor::from_hex_const("#FFC0CB"), "Pink"),
        (RgbColor::from_hex_const("#000000"), "Black"),
        (RgbColor::from_hex_const("#FFFFFF"), "White"),
        (RgbColor::from_hex_const("#808080"), "Gray"),
        (RgbColor::from_hex_const("#A52A2A"), "Brown"),
    ];

    /// Label shown when no color name is available
    pub const NEUTRAL_NAME: &str = "Neutral";
}

/// Sample grid used to read a representative color
pub mod sampling {
    /// Grid edge length (5x5 samples)
    pub const GRID_SIZE: u32 = 5;

    /// Pixel distance between neighbouring samples
    pub const GRID_SPACING: u32 = 10;

    /// Color reported when no sample can be read (`#ccc`)
    pub const FALLBACK_COLOR_HEX: &str = "#cccccc";
}

/// Color harmony parameters
pub mod harmony {
    /// Hue rotation of the first analogous color, in degrees
    pub const FIRST_ANALOGOUS_OFFSET: f64 = 30.0;

    /// Hue rotation of the second analogous color, in degrees
    pub const SECOND_ANALOGOUS_OFFSET: f64 = 60.0;

    /// Swatches shown when there is no detected color
    pub const NEUTRAL_SWATCHES: [&str; 3] = ["#f0f0f0", "#e0e0e0", "#d0d0d0"];
}

/// Style analysis parameters
pub mod analysis {
    /// Lower bound of the reported match confidence
    pub const MIN_CONFIDENCE: f64 = 0.85;

    /// Upper bound (exclusive) of the reported match confidence
    pub const MAX_CONFIDENCE: f64 = 1.0;

    /// Largest accepted upload (5 MiB)
    pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
}
