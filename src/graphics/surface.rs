//! # Surfaces
//!
//! Owned in-memory pixel buffers.

use super::{PixelFormat, Rect, Rgb};
use crate::config::MAX_SURFACE_DIMENSION;
use crate::{BlitError, BlitResult};

/// An owned pixel buffer with an optional transparent color key.
///
/// Pixels are stored row-major with no padding between rows.
///
/// # Examples
///
/// ```
/// use clipblit::{PixelFormat, Rgb, Surface};
///
/// let mut screen = Surface::new(640, 480, PixelFormat::DISPLAY).unwrap();
/// screen.fill_rect(None, Rgb::WHITE);
/// assert_eq!(screen.pixel(639, 479), Some(Rgb::WHITE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
    color_key: Option<Rgb>,
}

impl Surface {
    /// Creates a black surface.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> BlitResult<Self> {
        let len = Self::buffer_len(width, height, format)?;
        let mut surface = Self {
            width,
            height,
            format,
            pixels: vec![0; len],
            color_key: None,
        };
        surface.fill_rect(None, Rgb::BLACK);
        Ok(surface)
    }

    /// Wraps an existing buffer. The buffer length must match the dimensions.
    pub fn from_pixels(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> BlitResult<Self> {
        let len = Self::buffer_len(width, height, format)?;
        if pixels.len() != len {
            return Err(BlitError::InvalidSurface(format!(
                "{}x{} {:?} needs {} bytes, got {}",
                width,
                height,
                format,
                len,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            format,
            pixels,
            color_key: None,
        })
    }

    fn buffer_len(width: u32, height: u32, format: PixelFormat) -> BlitResult<usize> {
        if width == 0 || height == 0 {
            return Err(BlitError::InvalidSurface(format!(
                "empty surface {}x{}",
                width, height
            )));
        }
        if width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
            return Err(BlitError::InvalidSurface(format!(
                "{}x{} exceeds the {} pixel limit",
                width, height, MAX_SURFACE_DIMENSION
            )));
        }
        Ok(width as usize * height as usize * format.bytes_per_pixel())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The rectangle covering the whole surface.
    pub fn bounds(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }

    /// Raw pixel bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// The transparent color, if one is set.
    pub fn color_key(&self) -> Option<Rgb> {
        self.color_key
    }

    /// Sets or clears the transparent color used when this surface is a blit source.
    pub fn set_color_key(&mut self, key: Option<Rgb>) {
        self.color_key = key;
    }

    pub(crate) fn offset_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.pitch() + x as usize * self.format.bytes_per_pixel()
    }

    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.pitch();
        &self.pixels[start..start + self.pitch()]
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let pitch = self.pitch();
        let start = y as usize * pitch;
        &mut self.pixels[start..start + pitch]
    }

    /// Reads one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset_of(x, y);
        Some(self.format.decode(&self.pixels[offset..]))
    }

    /// Writes one pixel. Writes outside the surface are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset_of(x, y);
        let format = self.format;
        format.encode(color, &mut self.pixels[offset..]);
    }

    /// Fills `rect` (or the whole surface) with `color`, clipped to the surface.
    /// Returns the area actually filled.
    pub fn fill_rect(&mut self, rect: Option<Rect>, color: Rgb) -> Rect {
        let area = rect.map_or(self.bounds(), |r| self.bounds().intersection(r));
        if area.is_empty() {
            return area;
        }

        let bpp = self.format.bytes_per_pixel();
        let mut pattern = vec![0u8; bpp];
        self.format.encode(color, &mut pattern);

        let (x0, x1) = (area.x as usize * bpp, area.right() as usize * bpp);
        for y in area.y as u32..area.bottom() as u32 {
            let row = self.row_mut(y);
            for px in row[x0..x1].chunks_exact_mut(bpp) {
                px.copy_from_slice(&pattern);
            }
        }
        area
    }

    /// Produces a copy of this surface in `format`. Alpha is not carried over:
    /// every converted pixel is opaque. The color key is preserved.
    pub fn convert(&self, format: PixelFormat) -> BlitResult<Surface> {
        let src_bpp = self.format.bytes_per_pixel();
        let dst_bpp = format.bytes_per_pixel();

        let mut pixels = vec![0u8; Self::buffer_len(self.width, self.height, format)?];
        for (src, dst) in self
            .pixels
            .chunks_exact(src_bpp)
            .zip(pixels.chunks_exact_mut(dst_bpp))
        {
            format.encode(self.format.decode(src), dst);
        }

        let mut converted = Surface::from_pixels(self.width, self.height, format, pixels)?;
        converted.color_key = self.color_key;
        Ok(converted)
    }
}
