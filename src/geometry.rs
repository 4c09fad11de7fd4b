pub type Scalar = f64;
pub const EPSILON: f64 = f64::EPSILON;
pub const PI: f64 = std::f64::consts::PI;

/// Vertical position of a sine wave sampled at `column`.
///
/// The wave is centered vertically and `amplitude` is relative to the half of
/// the `height`, so for `amplitude` in `[0, 1]` the result is in `[0, height]`.
/// `y = (1 - amplitude * sin(2 * PI * frequency * column / width)) / 2 * height`
#[inline]
pub fn sine_row(
    frequency: Scalar,
    column: Scalar,
    width: Scalar,
    height: Scalar,
    amplitude: Scalar,
) -> Scalar {
    let phase = 2.0 * PI * frequency * column / width;
    (1.0 - amplitude * phase.sin()) / 2.0 * height
}

/// Conversion of a fractional row position into a row index
///
/// `Trunc` is the default and reproduces the shipped icon, which drops the
/// fraction with an integer cast. `Round` follows the boundary formula when it
/// is written with `round(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quantize {
    /// Drop the fractional part
    #[default]
    Trunc,
    /// Round half away from zero
    Round,
}

impl Quantize {
    /// Convert row position to an index, negative positions map to zero.
    #[inline]
    pub fn apply(self, value: Scalar) -> usize {
        let value = match self {
            Quantize::Trunc => value.trunc(),
            Quantize::Round => value.round(),
        };
        // `as` saturates, NaN becomes zero
        value.max(0.0) as usize
    }
}
