//! Parameters of the generated image
//!
//! Defaults reproduce the stock icon: 1024x1024 dark gray canvas with bands
//! of frequencies `6, 5, 4, 3, 2` painted in that order.
use crate::{Band, Quantize, RGB, Scalar};
use std::{fmt, ops::Range};

/// Inclusive range of band frequencies, painted from `start` down to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandRange {
    pub start: u32,
    pub end: u32,
}

impl BandRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Bands in painting order (descending frequency)
    pub fn iter(&self) -> impl Iterator<Item = Band> {
        (self.end..=self.start).rev().map(Band::new)
    }

    /// Number of bands, zero if the range is not descending
    pub fn len(&self) -> usize {
        if self.start < self.end {
            0
        } else {
            (self.start - self.end) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BandRange {
    fn default() -> Self {
        Self { start: 6, end: 2 }
    }
}

/// Horizontal neighborhood `[left, right)` painted around each sampled column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brush {
    pub left: i32,
    pub right: i32,
}

impl Brush {
    pub fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Column offsets covered by the brush
    pub fn offsets(&self) -> Range<isize> {
        self.left as isize..self.right as isize
    }

    /// Columns skipped on each side of the image so the brush never leaves it
    ///
    /// At least one column is skipped on the left, since each sample also
    /// looks at the previous column.
    pub fn margin(&self) -> usize {
        self.left.unsigned_abs().max(self.right.unsigned_abs()).max(1) as usize
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self { left: -2, right: 2 }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GradientConfig {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Band frequencies
    pub bands: BandRange,
    /// Color of the pixels not covered by any band
    pub background: RGB,
    /// Sine amplitude relative to the half of the height
    pub amplitude: Scalar,
    /// Horizontal neighborhood painted for each column
    pub brush: Brush,
    /// Band level is `base_level - level_step * frequency`
    pub base_level: i32,
    pub level_step: i32,
    /// Conversion of a row position to a row index
    pub quantize: Quantize,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            bands: BandRange::default(),
            background: RGB::gray(21),
            amplitude: 0.95,
            brush: Brush::default(),
            base_level: 255,
            level_step: 30,
            quantize: Quantize::Trunc,
        }
    }
}

impl GradientConfig {
    /// Columns sampled by each band
    pub fn columns(&self) -> Range<usize> {
        let margin = self.brush.margin();
        margin..self.width.saturating_sub(margin)
    }

    /// Brightness of the band with specified frequency
    pub fn level(&self, frequency: u32) -> Result<u8, ConfigError> {
        i64::from(frequency)
            .checked_mul(i64::from(self.level_step))
            .and_then(|step| i64::from(self.base_level).checked_sub(step))
            .and_then(|level| u8::try_from(level).ok())
            .ok_or(ConfigError::InvalidLevel(frequency))
    }

    /// Check that painting with this configuration stays inside of the image
    /// and every band level fits into a color channel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        let Brush { left, right } = self.brush;
        if left >= right || left > 0 || right < 1 {
            return Err(ConfigError::InvalidBrush(self.brush));
        }
        if self.columns().is_empty() {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.amplitude.is_finite() || !(0.0..=1.0).contains(&self.amplitude) {
            return Err(ConfigError::InvalidAmplitude(self.amplitude));
        }
        if self.bands.is_empty() {
            return Err(ConfigError::InvalidBands(self.bands));
        }
        for band in self.bands.iter() {
            self.level(band.frequency())?;
        }
        Ok(())
    }

    /// Load configuration from JSON, missing fields are set to their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Configuration that can not be rendered
#[derive(Debug)]
pub enum ConfigError {
    /// Image is empty or too narrow for the brush
    InvalidSize { width: usize, height: usize },
    /// Brush does not cover `[0, 1)` or is empty
    InvalidBrush(Brush),
    /// Amplitude is outside of `[0, 1]`
    InvalidAmplitude(Scalar),
    /// Band frequencies are not descending
    InvalidBands(BandRange),
    /// Band level does not fit into `u8`
    InvalidLevel(u32),
    /// JSON error
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GradientConfig::{:?}", self)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = GradientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns(), 2..1022);
        let frequencies: Vec<_> = config.bands.iter().map(|band| band.frequency()).collect();
        assert_eq!(frequencies, vec![6, 5, 4, 3, 2]);
        assert_eq!(config.bands.len(), 5);
        assert_eq!(config.brush.offsets(), -2..2);
        assert_eq!(config.background, RGB::gray(21));
    }

    #[test]
    fn test_level() -> Result<(), ConfigError> {
        let config = GradientConfig::default();
        assert_eq!(config.level(6)?, 75);
        assert_eq!(config.level(2)?, 195);
        assert_eq!(config.level(0)?, 255);
        assert_eq!(config.level(8)?, 15);
        assert!(matches!(config.level(9), Err(ConfigError::InvalidLevel(9))));
        assert!(matches!(
            config.level(u32::MAX),
            Err(ConfigError::InvalidLevel(_))
        ));
        Ok(())
    }

    #[test]
    fn test_validate() {
        let invalid = [
            GradientConfig {
                width: 0,
                ..Default::default()
            },
            GradientConfig {
                width: 4,
                ..Default::default()
            },
            GradientConfig {
                brush: Brush::new(0, 0),
                ..Default::default()
            },
            GradientConfig {
                brush: Brush::new(1, 3),
                ..Default::default()
            },
            GradientConfig {
                amplitude: 1.5,
                ..Default::default()
            },
            GradientConfig {
                amplitude: Scalar::NAN,
                ..Default::default()
            },
            GradientConfig {
                bands: BandRange::new(2, 6),
                ..Default::default()
            },
            GradientConfig {
                bands: BandRange::new(10, 2),
                ..Default::default()
            },
        ];
        for config in invalid {
            assert!(config.validate().is_err(), "{:?}", config);
        }

        let narrow = GradientConfig {
            width: 5,
            height: 3,
            ..Default::default()
        };
        assert!(narrow.validate().is_ok());
        assert_eq!(narrow.columns(), 2..3);

        let thin_brush = GradientConfig {
            brush: Brush::new(0, 1),
            ..Default::default()
        };
        assert!(thin_brush.validate().is_ok());
        assert_eq!(thin_brush.columns(), 1..1023);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() -> Result<(), ConfigError> {
        let config = GradientConfig::from_json(
            r##"{"width": 64, "height": 32, "background": "#000000", "quantize": "round"}"##,
        )?;
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.background, RGB::gray(0));
        assert_eq!(config.quantize, Quantize::Round);
        assert_eq!(config.bands, BandRange::default());
        assert_eq!(config.brush, Brush::default());

        let json = config.to_json()?;
        assert!(json.contains("\"background\": \"#000000\""));
        assert_eq!(GradientConfig::from_json(&json)?, config);

        assert!(matches!(
            GradientConfig::from_json(r#"{"background": "black"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GradientConfig::from_json(r#"{"amplitude": 2.0}"#),
            Err(ConfigError::InvalidAmplitude(_))
        ));
        Ok(())
    }
}
