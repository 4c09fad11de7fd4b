use std::{fmt, str::FromStr};

/// Common interface to all pixel representations that can be encoded
pub trait Color: Copy {
    /// Convert color to sRGB list
    fn to_rgb(self) -> [u8; 3];

    /// View of the pixels as interleaved `r, g, b` bytes, if their layout allows it
    fn as_rgb_bytes(pixels: &[Self]) -> Option<&[u8]> {
        let _ = pixels;
        None
    }
}

/// 8-bit per channel sRGB color without alpha
///
/// Laid out as three consecutive bytes, so a slice of `RGB` can be viewed
/// as interleaved `r, g, b` bytes with `bytemuck::cast_slice`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct RGB([u8; 3]);

impl RGB {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Gray color with the same value in all channels
    pub const fn gray(level: u8) -> Self {
        Self([level, level, level])
    }
}

impl Color for RGB {
    #[inline(always)]
    fn to_rgb(self) -> [u8; 3] {
        self.0
    }

    fn as_rgb_bytes(pixels: &[Self]) -> Option<&[u8]> {
        Some(bytemuck::cast_slice(pixels))
    }
}

impl fmt::Display for RGB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl FromStr for RGB {
    type Err = ColorError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        if color.starts_with('#') && color.len() == 7 {
            // #RRGGBB
            let bytes: &[u8] = color[1..].as_ref();
            let digit = |byte| match byte {
                b'A'..=b'F' => Ok(byte - b'A' + 10),
                b'a'..=b'f' => Ok(byte - b'a' + 10),
                b'0'..=b'9' => Ok(byte - b'0'),
                _ => Err(ColorError::HexExpected),
            };
            let mut hex = bytes
                .chunks(2)
                .map(|pair| Ok(digit(pair[0])? << 4 | digit(pair[1])?));
            Ok(RGB::new(
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(0))?,
            ))
        } else {
            Err(ColorError::HexExpected)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RGB {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RGB {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let color = std::borrow::Cow::<'de, str>::deserialize(deserializer)?;
        color.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub enum ColorError {
    HexExpected,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "Color expected to be #RRGGBB in hexidemical format")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb() {
        let c = RGB::new(1, 2, 3);
        assert_eq!([1, 2, 3], c.to_rgb());
        assert_eq!([21, 21, 21], RGB::gray(21).to_rgb());
    }

    #[test]
    fn test_rgb_bytes() {
        let pixels = [RGB::new(1, 2, 3), RGB::gray(21)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 21, 21, 21]);
        assert_eq!(RGB::as_rgb_bytes(&pixels), Some(bytes));
    }

    #[test]
    fn test_display_parse() -> Result<(), ColorError> {
        let c: RGB = "#151515".parse()?;
        assert_eq!(c, RGB::gray(21));
        assert_eq!(c.to_string(), "#151515");

        let c: RGB = "#AAbbCC".parse()?;
        assert_eq!(c, RGB::new(170, 187, 204));
        assert_eq!(c.to_string(), "#aabbcc");

        assert!("#1515".parse::<RGB>().is_err());
        assert!("151515".parse::<RGB>().is_err());
        assert!("#15151g".parse::<RGB>().is_err());
        Ok(())
    }
}
