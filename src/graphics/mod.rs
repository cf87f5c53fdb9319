//! # Graphics Module
//!
//! Software surfaces and the operations performed on them.
//!
//! - Pixel formats and colors
//! - Rectangles for clip regions and destination areas
//! - Owned surfaces with an optional color key
//! - The image loader that produces display-format surfaces
//! - The blitter that copies (clipped) regions between surfaces

pub mod blit;
pub mod loader;
pub mod rect;
pub mod surface;

pub use blit::*;
pub use loader::*;
pub use rect::*;
pub use surface::*;

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
///
/// # Examples
///
/// ```
/// use clipblit::Rgb;
///
/// let key = Rgb::new(200, 0, 200);
/// assert_eq!(key, Rgb::MAGENTA_KEY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Transparent color of the sprite sheet
    pub const MAGENTA_KEY: Rgb = Rgb::new(200, 0, 200);

    /// Creates a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Memory layout of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Three bytes per pixel: R, G, B
    Rgb888,
    /// Four bytes per pixel: R, G, B, A
    Rgba8888,
}

impl PixelFormat {
    /// The format used by the display surface.
    pub const DISPLAY: PixelFormat = PixelFormat::Rgba8888;

    /// Number of bytes one pixel occupies.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb888 => 3,
            PixelFormat::Rgba8888 => 4,
        }
    }

    /// Number of bits one pixel occupies.
    pub fn bits_per_pixel(self) -> u32 {
        self.bytes_per_pixel() as u32 * 8
    }

    /// Whether the format stores an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba8888)
    }

    /// Picks the format with the given depth, if one exists.
    pub fn from_bits_per_pixel(bpp: u32) -> Option<PixelFormat> {
        match bpp {
            24 => Some(PixelFormat::Rgb888),
            32 => Some(PixelFormat::Rgba8888),
            _ => None,
        }
    }

    /// Reads the color stored at the start of `bytes`.
    pub(crate) fn decode(self, bytes: &[u8]) -> Rgb {
        Rgb::new(bytes[0], bytes[1], bytes[2])
    }

    /// Writes `color` to the start of `bytes`. Alpha, when present, is opaque.
    pub(crate) fn encode(self, color: Rgb, bytes: &mut [u8]) {
        bytes[0] = color.r;
        bytes[1] = color.g;
        bytes[2] = color.b;
        if self.has_alpha() {
            bytes[3] = 0xFF;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format_is_32_bit() {
        assert_eq!(PixelFormat::DISPLAY.bits_per_pixel(), crate::config::SCREEN_BPP);
        assert_eq!(PixelFormat::from_bits_per_pixel(32), Some(PixelFormat::DISPLAY));
        assert_eq!(PixelFormat::from_bits_per_pixel(16), None);
    }

    #[test]
    fn test_encode_sets_opaque_alpha() {
        let mut bytes = [0u8; 4];
        PixelFormat::Rgba8888.encode(Rgb::new(1, 2, 3), &mut bytes);
        assert_eq!(bytes, [1, 2, 3, 0xFF]);
        assert_eq!(PixelFormat::Rgba8888.decode(&bytes), Rgb::new(1, 2, 3));
    }
}
