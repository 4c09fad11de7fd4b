//! Procedural icon generator that paints stacked sine-wave bands.
//!
//! Main features:
//!  - Banded sinusoidal gradient painted with the painter's algorithm
//!  - Configurable size, bands, brush and levels (JSON with `serde` feature)
//!  - 8-bit RGB PNG output
//!
#![deny(warnings)]

mod band;
mod color;
mod config;
mod geometry;
mod image;
mod render;

pub use band::{Band, RowSpan};
pub use color::{Color, ColorError, RGB};
pub use config::{BandRange, Brush, ConfigError, GradientConfig};
pub use geometry::{EPSILON, PI, Quantize, Scalar, sine_row};
pub use image::{Image, ImageIter, ImageMut, ImageOwned, ImageWriteError, Shape};
pub use render::{render, render_bands};

/// Name of the file written by `make-icon`
pub const OUTPUT_FILE: &str = "gradient.png";
