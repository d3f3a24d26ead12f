//! Representative color sampling
//!
//! Reads a small grid of pixels around a focal point and averages them
//! channel by channel. Individual reads may fail (out of bounds, tainted
//! source); those samples are skipped, and only a grid with no successful
//! read is an error.

use image::{Pixel, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::RgbColor;
use crate::constants::sampling::{GRID_SIZE, GRID_SPACING};
use crate::{AnalysisError, Result};

/// Pixel access for sampling
///
/// Implementations return `None` for any read that cannot be served.
pub trait PixelSource {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Color at `(x, y)`, or `None` if the pixel cannot be read
    fn read_pixel(&self, x: i64, y: i64) -> Option<RgbColor>;
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn read_pixel(&self, x: i64, y: i64) -> Option<RgbColor> {
        let pixel = self.get_pixel_checked(u32::try_from(x).ok()?, u32::try_from(y).ok()?)?;
        Some(RgbColor::from(pixel.0))
    }
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn read_pixel(&self, x: i64, y: i64) -> Option<RgbColor> {
        let pixel = self.get_pixel_checked(u32::try_from(x).ok()?, u32::try_from(y).ok()?)?;
        // Alpha is ignored
        Some(RgbColor::from(pixel.to_rgb().0))
    }
}

/// Sample grid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Samples per grid edge; odd so the focal point is sampled
    pub grid_size: u32,
    /// Pixel distance between neighbouring samples
    pub spacing: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            spacing: GRID_SPACING,
        }
    }
}

impl SamplingConfig {
    /// Check grid parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an even or zero grid size or a zero spacing.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.grid_size % 2 == 0 {
            return Err(AnalysisError::invalid_input("grid_size", self.grid_size));
        }
        if self.spacing == 0 {
            return Err(AnalysisError::invalid_input("spacing", self.spacing));
        }
        Ok(())
    }

    /// Offsets from the focal point, x-major order
    pub fn offsets(&self) -> Vec<(i64, i64)> {
        let half = i64::from(self.grid_size / 2);
        let spacing = i64::from(self.spacing);

        (-half..=half)
            .flat_map(|i| (-half..=half).map(move |j| (i * spacing, j * spacing)))
            .collect()
    }
}

/// Mean color of a set of samples, each channel truncated to an integer
///
/// # Errors
///
/// Returns `InvalidInput` if `samples` is empty.
pub fn sample_average_color(samples: &[RgbColor]) -> Result<RgbColor> {
    if samples.is_empty() {
        return Err(AnalysisError::invalid_input("samples", "empty"));
    }

    let (r, g, b) = samples.iter().fold((0u64, 0u64, 0u64), |(r, g, b), color| {
        (r + u64::from(color.r), g + u64::from(color.g), b + u64::from(color.b))
    });
    let count = samples.len() as u64;

    // Each mean is at most 255, so the narrowing casts cannot truncate
    Ok(RgbColor::new(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
    ))
}

/// Grid sampler over any `PixelSource`
#[derive(Debug, Clone, Default)]
pub struct ColorSampler {
    config: SamplingConfig,
}

impl ColorSampler {
    /// Create a sampler with a validated grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the grid configuration is invalid.
    pub fn new(config: SamplingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Grid configuration
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Average color of the grid centered on `center`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no grid point can be read.
    pub fn sample_region<S>(&self, source: &S, center: (i64, i64)) -> Result<RgbColor>
    where
        S: PixelSource + ?Sized,
    {
        let (cx, cy) = center;
        let samples: Vec<RgbColor> = self
            .config
            .offsets()
            .into_iter()
            .filter_map(|(dx, dy)| {
                let (x, y) = (cx + dx, cy + dy);
                let sample = source.read_pixel(x, y);
                if sample.is_none() {
                    trace!(x, y, "skipping unreadable sample");
                }
                sample
            })
            .collect();

        let average = sample_average_color(&samples)?;
        debug!(
            samples = samples.len(),
            color = %average,
            "sampled region around ({cx}, {cy})"
        );
        Ok(average)
    }

    /// Average color of the grid centered on the middle of the source
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no grid point can be read.
    pub fn sample_center<S>(&self, source: &S) -> Result<RgbColor>
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = source.dimensions();
        self.sample_region(source, (i64::from(width / 2), i64::from(height / 2)))
    }

    /// Single-pixel read, as used by the live preview
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the pixel cannot be read.
    pub fn sample_point<S>(&self, source: &S, point: (i64, i64)) -> Result<RgbColor>
    where
        S: PixelSource + ?Sized,
    {
        source
            .read_pixel(point.0, point.1)
            .ok_or_else(|| AnalysisError::invalid_input("pixel", format!("({}, {})", point.0, point.1)))
    }
}
