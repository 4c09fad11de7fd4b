use crate::{Color, RGB};
use std::{
    borrow::Cow,
    fmt,
    fs::File,
    io::{BufWriter, Write},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Width of the image
    pub width: usize,
    /// Height of the image
    pub height: usize,
    /// How many elements we need to skip to get to the next row.
    pub row_stride: usize,
    /// How many elements we need to skip to get to the next column.
    pub col_stride: usize,
}

impl Shape {
    /// Shape of a densely packed row-major image
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            row_stride: width,
            col_stride: 1,
        }
    }

    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.row_stride + col * self.col_stride
    }

    #[inline]
    pub fn nth(&self, n: usize) -> Option<(usize, usize)> {
        if self.width == 0 {
            return None;
        }
        let row = n / self.width;
        let col = n - row * self.width;
        (row < self.height).then(move || (row, col))
    }

    /// Check that position is inside of the image
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }
}

pub trait Image {
    type Pixel;

    fn data(&self) -> &[Self::Pixel];

    fn shape(&self) -> Shape;

    fn width(&self) -> usize {
        self.shape().width
    }

    fn height(&self) -> usize {
        self.shape().height
    }

    /// Get pixel at the specified position, `None` if it is outside of the image
    fn get(&self, row: usize, col: usize) -> Option<&Self::Pixel> {
        let shape = self.shape();
        if !shape.contains(row, col) {
            return None;
        }
        self.data().get(shape.offset(row, col))
    }

    fn iter(&self) -> ImageIter<'_, Self::Pixel> {
        ImageIter {
            index: 0,
            shape: self.shape(),
            data: self.data(),
        }
    }

    /// Interleaved `r, g, b` bytes, rows top to bottom
    ///
    /// Returns `None` if pixel data is shorter than the shape claims.
    fn to_rgb_bytes(&self) -> Option<Cow<'_, [u8]>>
    where
        Self::Pixel: Color,
    {
        let shape = self.shape();
        let size = shape.width * shape.height;
        if shape.row_stride == shape.width && shape.col_stride == 1 {
            let pixels = self.data().get(..size)?;
            if let Some(bytes) = Self::Pixel::as_rgb_bytes(pixels) {
                return Some(Cow::Borrowed(bytes));
            }
        }
        let mut data = Vec::with_capacity(size * 3);
        for row in 0..shape.height {
            for col in 0..shape.width {
                data.extend_from_slice(&self.get(row, col)?.to_rgb());
            }
        }
        Some(Cow::Owned(data))
    }

    /// Encode image as 8-bit RGB non-interlaced PNG
    fn write_png(&self, out: impl Write) -> Result<(), ImageWriteError>
    where
        Self::Pixel: Color,
    {
        let shape = self.shape();
        let (width, height) = match (u32::try_from(shape.width), u32::try_from(shape.height)) {
            (Ok(width), Ok(height)) if width > 0 && height > 0 => (width, height),
            _ => return Err(ImageWriteError::InvalidShape(shape)),
        };
        let mut encoder = png::Encoder::new(out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let data = self.to_rgb_bytes().ok_or(ImageWriteError::InvalidShape(shape))?;
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        Ok(())
    }

    /// Create or truncate file at `path` and write PNG encoded image into it
    fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), ImageWriteError>
    where
        Self::Pixel: Color,
    {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_png(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

pub struct ImageIter<'a, P> {
    index: usize,
    shape: Shape,
    data: &'a [P],
}

impl<'a, P> Iterator for ImageIter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        self.nth(0)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index += n + 1;
        let (row, col) = self.shape.nth(self.index - 1)?;
        self.data.get(self.shape.offset(row, col))
    }
}

pub trait ImageMut: Image {
    fn data_mut(&mut self) -> &mut [Self::Pixel];

    /// Get mutable pixel at the specified position, `None` if it is outside of the image
    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Self::Pixel> {
        let shape = self.shape();
        if !shape.contains(row, col) {
            return None;
        }
        self.data_mut().get_mut(shape.offset(row, col))
    }
}

#[derive(Clone)]
pub struct ImageOwned<P> {
    shape: Shape,
    data: Vec<P>,
}

impl<P> ImageOwned<P> {
    pub fn new(shape: Shape, data: Vec<P>) -> Self {
        Self { shape, data }
    }

    /// Image with all pixels set to the same value
    pub fn new_fill(height: usize, width: usize, pixel: P) -> Self
    where
        P: Clone,
    {
        Self {
            shape: Shape::new(height, width),
            data: vec![pixel; height * width],
        }
    }

    pub fn new_with<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> P,
    {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col))
            }
        }
        Self {
            shape: Shape::new(height, width),
            data,
        }
    }
}

impl ImageOwned<RGB> {
    /// Pixel buffer as interleaved `r, g, b` bytes, rows top to bottom
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl<P> Image for ImageOwned<P> {
    type Pixel = P;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn data(&self) -> &[Self::Pixel] {
        &self.data
    }
}

impl<P> ImageMut for ImageOwned<P> {
    fn data_mut(&mut self) -> &mut [Self::Pixel] {
        &mut self.data
    }
}

impl<I> Image for &mut I
where
    I: Image + ?Sized,
{
    type Pixel = I::Pixel;

    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn data(&self) -> &[Self::Pixel] {
        (**self).data()
    }
}

impl<I> ImageMut for &mut I
where
    I: ImageMut + ?Sized,
{
    fn data_mut(&mut self) -> &mut [Self::Pixel] {
        (**self).data_mut()
    }
}

/// Error produced while encoding or saving an image
#[derive(Debug)]
pub enum ImageWriteError {
    /// Image is empty or its dimensions do not fit PNG header
    InvalidShape(Shape),
    /// PNG encoder failure
    Png(png::EncodingError),
    /// IO error propagated while writing output stream
    IoError(std::io::Error),
}

impl fmt::Display for ImageWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageWriteError::InvalidShape(shape) => write!(
                f,
                "ImageWriteError::InvalidShape({}x{})",
                shape.width, shape.height
            ),
            ImageWriteError::Png(error) => write!(f, "ImageWriteError::Png({})", error),
            ImageWriteError::IoError(error) => write!(f, "ImageWriteError::IoError({})", error),
        }
    }
}

impl From<std::io::Error> for ImageWriteError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<png::EncodingError> for ImageWriteError {
    fn from(error: png::EncodingError) -> Self {
        match error {
            png::EncodingError::IoError(error) => Self::IoError(error),
            error => Self::Png(error),
        }
    }
}

impl From<ImageWriteError> for std::io::Error {
    fn from(error: ImageWriteError) -> Self {
        match error {
            ImageWriteError::IoError(error) => error,
            _ => Self::new(std::io::ErrorKind::InvalidData, error),
        }
    }
}

impl std::error::Error for ImageWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageWriteError::InvalidShape(_) => None,
            ImageWriteError::Png(error) => Some(error),
            ImageWriteError::IoError(error) => Some(error),
        }
    }
}
