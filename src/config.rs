//! Configuration for the style analysis pipeline.
//!
//! Groups the tunable parameters of sampling, fallback behavior and result
//! scoring. Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use style_scan::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), style_scan::AnalysisError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{RgbColor, SamplingConfig};
use crate::constants::{analysis::MAX_UPLOAD_BYTES, sampling::FALLBACK_COLOR_HEX};
use crate::style::ConfidenceRange;
use crate::{AnalysisError, Result};

/// Complete configuration for an analysis run.
///
/// Every field has a default, so partial JSON files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sample grid around the image center
    pub sampling: SamplingConfig,

    /// Hex color reported when no pixel can be sampled
    pub fallback_color: String,

    /// Bounds of the reported match confidence
    pub confidence: ConfidenceRange,

    /// Largest accepted image file, in bytes
    pub max_upload_bytes: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            fallback_color: FALLBACK_COLOR_HEX.to_string(),
            confidence: ConfidenceRange::default(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl AnalysisConfig {
    /// Check all sections
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        self.sampling.validate()?;
        self.fallback_rgb()?;
        self.confidence.validate()?;
        if self.max_upload_bytes == 0 {
            return Err(AnalysisError::invalid_input("max_upload_bytes", 0));
        }
        Ok(())
    }

    /// Parsed fallback color
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `fallback_color` is not a hex color.
    pub fn fallback_rgb(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.fallback_color)
    }

    /// Load and validate configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, and
    /// `InvalidInput` if a value fails validation.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config(format!("cannot read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AnalysisError::config(format!("cannot parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or the write fails.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::config(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }
}
