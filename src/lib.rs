//! # Style Scan
//!
//! A Rust crate for reading the dominant color of a clothing photo and
//! turning it into a style profile.
//!
//! This library provides:
//! - Grid sampling of a representative color around the image center
//! - Nearest-name classification against a fixed 11-color palette
//! - RGB/HSL conversion with analogous and inverted complementary colors
//! - A randomized color-to-style lookup with outfit recommendations
//!
//! ## Example
//!
//! ```rust,no_run
//! use style_scan::{analyze_image, StyleAnalysis};
//! use std::path::Path;
//!
//! let result = analyze_image(Path::new("outfit.jpg"))?;
//! println!("{} ({}): {}", result.detected_color, result.display_color_name(), result.style);
//! # Ok::<(), style_scan::AnalysisError>(())
//! ```

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod style;
pub mod image_loader;

pub use error::{AnalysisError, Result};
pub use config::AnalysisConfig;
pub use color::{HarmonySet, HslColor, PixelSource, RgbColor};
pub use style::{Recommendation, StyleCategory};

use color::{complementary_colors, ColorNamer, ColorSampler};
use constants::palette::NEUTRAL_NAME;
use style::{determine_style_from_color, draw_confidence, generate_recommendations, StyleTable};

/// Complete style analysis result, serializable for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleAnalysis {
    /// Sampled (or fallback) color as lowercase hex
    pub detected_color: String,
    /// Nearest palette name; `None` when the fallback color was used
    pub color_name: Option<String>,
    /// Detected style category
    pub style: StyleCategory,
    /// Match confidence (0.0 = low, 1.0 = high)
    pub confidence: f64,
    /// Top, bottom and accessory suggestions
    pub recommendations: Vec<Recommendation>,
    /// Occasions suited to the style
    pub occasions: Vec<String>,
    /// Items that pair with the style
    pub matching_items: Vec<String>,
    /// Analogous and inverted colors of the detected color
    pub harmony: HarmonySet,
}

impl StyleAnalysis {
    /// Color name for display, `"Neutral"` when none was detected
    pub fn display_color_name(&self) -> &str {
        self.color_name.as_deref().unwrap_or(NEUTRAL_NAME)
    }

    /// Serialize to a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AnalysisError::config("cannot serialize analysis", e))
    }

    /// Restore a result saved with `to_json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON does not describe an analysis.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AnalysisError::config("cannot parse analysis", e))
    }
}

/// End-to-end analyzer: sampling, naming, style pick and recommendations
///
/// The random source is owned by the analyzer so results can be pinned with
/// a seeded generator.
#[derive(Debug, Clone)]
pub struct StyleAnalyzer<R = StdRng> {
    config: AnalysisConfig,
    sampler: ColorSampler,
    namer: ColorNamer,
    styles: StyleTable,
    fallback: RgbColor,
    rng: R,
}

impl StyleAnalyzer<StdRng> {
    /// Create an analyzer seeded from OS entropy
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configuration is invalid.
    pub fn from_entropy(config: AnalysisConfig) -> Result<Self> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> StyleAnalyzer<R> {
    /// Create an analyzer with the built-in palette and style table
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configuration is invalid.
    pub fn new(config: AnalysisConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sampler: ColorSampler::new(config.sampling)?,
            fallback: config.fallback_rgb()?,
            namer: ColorNamer::default(),
            styles: StyleTable::default(),
            config,
            rng,
        })
    }

    /// Replace the named color palette
    pub fn with_palette(mut self, namer: ColorNamer) -> Self {
        self.namer = namer;
        self
    }

    /// Replace the color-to-style table
    pub fn with_style_table(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze an already-sampled color
    pub fn analyze_color(&mut self, color: RgbColor) -> StyleAnalysis {
        let name = self.namer.nearest_name(color).to_string();
        self.build_analysis(color, Some(name))
    }

    /// Sample the center of `source` and analyze the result
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no sample point can be read.
    pub fn analyze_pixels<S>(&mut self, source: &S) -> Result<StyleAnalysis>
    where
        S: PixelSource + ?Sized,
    {
        let color = self.sampler.sample_center(source)?;
        Ok(self.analyze_color(color))
    }

    /// Like `analyze_pixels`, but reports the fallback color on failure
    pub fn analyze_pixels_or_default<S>(&mut self, source: &S) -> StyleAnalysis
    where
        S: PixelSource + ?Sized,
    {
        match self.sampler.sample_center(source) {
            Ok(color) => self.analyze_color(color),
            Err(err) => {
                warn!(%err, fallback = %self.fallback, "sampling failed, using fallback color");
                self.build_analysis(self.fallback, None)
            }
        }
    }

    /// Load an image file and analyze it
    ///
    /// # Errors
    ///
    /// Returns upload validation and decoding errors from `image_loader`,
    /// or `InvalidInput` if no sample point can be read.
    pub fn analyze_image(&mut self, path: &Path) -> Result<StyleAnalysis> {
        let image = image_loader::load_image(path, self.config.max_upload_bytes)?;
        self.analyze_pixels(&image)
    }

    fn build_analysis(&mut self, color: RgbColor, color_name: Option<String>) -> StyleAnalysis {
        let style = determine_style_from_color(color_name.as_deref(), &self.styles, &mut self.rng);
        let recommendations = generate_recommendations(style, color_name.as_deref(), &mut self.rng);
        let confidence = draw_confidence(self.config.confidence, &mut self.rng);
        let profile = style.profile();

        debug!(
            color = %color,
            name = color_name.as_deref().unwrap_or(NEUTRAL_NAME),
            %style,
            confidence,
            "analysis complete"
        );

        StyleAnalysis {
            detected_color: color.to_hex(),
            color_name,
            style,
            confidence,
            recommendations,
            occasions: profile.occasions.iter().map(|s| s.to_string()).collect(),
            matching_items: profile.matching_items.iter().map(|s| s.to_string()).collect(),
            harmony: complementary_colors(color),
        }
    }
}

/// Analyze an image file with the default configuration
///
/// This is the main entry point for one-off analysis. Style selection uses
/// an entropy-seeded generator; use `StyleAnalyzer` to control randomness.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The file is not an accepted image upload (type or size)
/// - The image cannot be opened or decoded
/// - No pixel around the image center can be read
pub fn analyze_image(image_path: &Path) -> Result<StyleAnalysis> {
    StyleAnalyzer::from_entropy(AnalysisConfig::default())?.analyze_image(image_path)
}
