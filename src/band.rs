use crate::{ConfigError, GradientConfig, ImageMut, RGB, Scalar, sine_row};
use std::ops::Range;

/// Half-open range of rows `[low, high)` covered by a band at a single column
///
/// Invariant: `low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowSpan {
    low: usize,
    high: usize,
}

impl RowSpan {
    /// Construct span between two row positions given in any order
    pub fn new(y0: usize, y1: usize) -> Self {
        Self {
            low: y0.min(y1),
            high: y0.max(y1),
        }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    pub fn len(&self) -> usize {
        self.high - self.low
    }

    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }

    pub fn contains(&self, row: usize) -> bool {
        self.low <= row && row < self.high
    }

    /// Restrict span to the rows of an image with specified height
    pub fn clamp(self, height: usize) -> Self {
        Self {
            low: self.low.min(height),
            high: self.high.min(height),
        }
    }

    pub fn rows(&self) -> Range<usize> {
        self.low..self.high
    }
}

/// Single pass of the painter, one sinusoidal stripe of a given frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Band {
    frequency: u32,
}

impl Band {
    pub fn new(frequency: u32) -> Self {
        Self { frequency }
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Brightness of the band
    pub fn level(&self, config: &GradientConfig) -> Result<u8, ConfigError> {
        config.level(self.frequency)
    }

    /// Gray color used to paint the band
    pub fn color(&self, config: &GradientConfig) -> Result<RGB, ConfigError> {
        Ok(RGB::gray(self.level(config)?))
    }

    /// Row position of the band at the (possibly fractional) column
    pub fn boundary(&self, config: &GradientConfig, column: Scalar) -> Scalar {
        sine_row(
            self.frequency as Scalar,
            column,
            config.width as Scalar,
            config.height as Scalar,
            config.amplitude,
        )
    }

    /// Rows covered by the band between `column - 1` and `column`
    pub fn row_span(&self, config: &GradientConfig, column: usize) -> RowSpan {
        let column = column as Scalar;
        let y1 = config.quantize.apply(self.boundary(config, column));
        let y0 = config.quantize.apply(self.boundary(config, column - 1.0));
        RowSpan::new(y0, y1)
    }

    /// Paint the band on top of the image
    ///
    /// Every sampled column paints its row span across the brush neighborhood,
    /// overwriting whatever was there. Pixels outside of the image are skipped.
    /// Returns number of pixels written.
    pub fn paint(
        &self,
        config: &GradientConfig,
        mut img: impl ImageMut<Pixel = RGB>,
    ) -> Result<usize, ConfigError> {
        let _span = tracing::debug_span!("[band]", frequency = self.frequency).entered();
        let color = self.color(config)?;
        let shape = img.shape();
        let offsets = config.brush.offsets();
        let mut painted = 0;
        for column in config.columns() {
            let span = self.row_span(config, column).clamp(shape.height);
            for row in span.rows() {
                for offset in offsets.clone() {
                    let Some(col) = column.checked_add_signed(offset) else {
                        continue;
                    };
                    if let Some(pixel) = img.get_mut(row, col) {
                        *pixel = color;
                        painted += 1;
                    }
                }
            }
        }
        tracing::debug!("[band:painted] {}", painted);
        Ok(painted)
    }
}
