use row_reduce::{Palette, Rgb, RowPipeline, Threshold};
use serde::Deserialize;

use crate::error::ConvertError;

/// Conversion settings, usually loaded from a YAML file.
///
/// ```yaml
/// white: 50
/// colors:
///   - [255, 0, 0]
///   - [0, 0, 255]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConvertConfig {
    /// White point in percent, (0, 100]
    #[serde(default = "default_white")]
    pub white: f64,

    /// Palette colors in addition to white and black
    #[serde(default)]
    pub colors: Vec<[u8; 3]>,

    /// Replacement color for palette index 0
    #[serde(default)]
    pub white_slot: Option<[u8; 3]>,

    /// Replacement color for palette index 1
    #[serde(default)]
    pub black_slot: Option<[u8; 3]>,
}

fn default_white() -> f64 {
    Threshold::DEFAULT_PERCENT
}

impl ConvertConfig {
    /// Parse configuration from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self, ConvertError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))?;
        tracing::debug!(
            white = config.white,
            colors = config.colors.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML, falling back to defaults on error
    pub fn load_or_default(content: &str) -> Self {
        if content.trim().is_empty() {
            return Self::default();
        }
        match Self::from_yaml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Build the palette: white/black slots first, then `colors` in order.
    ///
    /// Colors already present are folded into their existing slot.
    pub fn palette(&self) -> Result<Palette, ConvertError> {
        let mut palette = match (self.white_slot, self.black_slot) {
            (None, None) => Palette::new(),
            (white, black) => Palette::with_base(
                white.map(Rgb::from).unwrap_or(Rgb::WHITE),
                black.map(Rgb::from).unwrap_or(Rgb::BLACK),
            )?,
        };

        for &color in &self.colors {
            let before = palette.len();
            let index = palette.add_color(Rgb::from(color))?;
            if palette.len() == before {
                tracing::debug!(?color, index, "Duplicate palette color folded");
            }
        }

        Ok(palette)
    }

    /// Luminance threshold for the configured white point
    pub fn threshold(&self) -> Result<Threshold, ConvertError> {
        Ok(Threshold::from_percent(self.white)?)
    }

    /// Validated pipeline for this configuration
    pub fn pipeline(&self) -> Result<RowPipeline, ConvertError> {
        let threshold = self.threshold()?;
        let palette = self.palette()?;
        Ok(RowPipeline::new(palette).threshold(threshold))
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            white: Threshold::DEFAULT_PERCENT,
            colors: Vec::new(),
            white_slot: None,
            black_slot: None,
        }
    }
}
