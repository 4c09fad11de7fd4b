use crate::{Band, ConfigError, GradientConfig, ImageMut, ImageOwned, RGB};

/// Render the whole gradient image
///
/// Allocates image filled with background color and paints every band of
/// the configuration in descending frequency order, later bands overwrite
/// earlier ones where they overlap.
pub fn render(config: &GradientConfig) -> Result<ImageOwned<RGB>, ConfigError> {
    config.validate()?;
    let _span =
        tracing::debug_span!("[render]", width = config.width, height = config.height).entered();
    let mut image = ImageOwned::new_fill(config.height, config.width, config.background);
    let painted = render_bands(config, config.bands.iter(), &mut image)?;
    tracing::debug!("[render:painted] {}", painted);
    Ok(image)
}

/// Paint provided bands on top of the image in iteration order
///
/// Returns total number of pixel writes, pixels covered by several bands
/// are counted multiple times.
pub fn render_bands(
    config: &GradientConfig,
    bands: impl IntoIterator<Item = Band>,
    mut img: impl ImageMut<Pixel = RGB>,
) -> Result<usize, ConfigError> {
    let mut painted = 0;
    for band in bands {
        painted += band.paint(config, &mut img)?;
    }
    Ok(painted)
}
