//! # Image Loader
//!
//! Decodes image files into surfaces in the display's pixel format.

use super::{PixelFormat, Rgb, Surface};
use crate::{BlitError, BlitResult};
use image::DynamicImage;
use std::path::Path;

/// Loads images and converts them for fast blitting onto the display.
///
/// # Examples
///
/// ```no_run
/// use clipblit::{ImageLoader, PixelFormat, Rgb};
///
/// let loader = ImageLoader::new(PixelFormat::DISPLAY).with_color_key(Rgb::MAGENTA_KEY);
/// let sheet = loader.load("clay_man.png").unwrap();
/// assert_eq!(sheet.color_key(), Some(Rgb::MAGENTA_KEY));
/// ```
#[derive(Debug, Clone)]
pub struct ImageLoader {
    display_format: PixelFormat,
    color_key: Option<Rgb>,
}

impl ImageLoader {
    /// Creates a loader producing surfaces in `display_format`.
    pub fn new(display_format: PixelFormat) -> Self {
        Self {
            display_format,
            color_key: None,
        }
    }

    /// Marks `key` as transparent on every loaded surface.
    pub fn with_color_key(mut self, key: Rgb) -> Self {
        self.color_key = Some(key);
        self
    }

    /// Sets or clears the color key applied to loaded surfaces.
    pub fn set_color_key(&mut self, key: Option<Rgb>) {
        self.color_key = key;
    }

    pub fn display_format(&self) -> PixelFormat {
        self.display_format
    }

    /// Decodes `path` and converts it to the display format.
    ///
    /// Returns [`BlitError::Decode`] when the file is missing or not a
    /// supported image, and [`BlitError::Conversion`] when the decoded image
    /// cannot be turned into a display surface.
    pub fn load(&self, path: impl AsRef<Path>) -> BlitResult<Surface> {
        let path = path.as_ref();

        let decoded = image::open(path).map_err(|source| BlitError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let converted = {
            // The raw surface only lives for the duration of the conversion.
            let raw = raw_surface(decoded);
            raw.and_then(|raw| {
                log::debug!(
                    "Decoded {} as {}x{} {:?}",
                    path.display(),
                    raw.width(),
                    raw.height(),
                    raw.format()
                );
                raw.convert(self.display_format)
            })
        };

        let mut surface = converted.map_err(|e| BlitError::Conversion {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let Some(key) = self.color_key {
            surface.set_color_key(Some(key));
        }

        log::debug!(
            "Loaded {} into {:?} (color key: {:?})",
            path.display(),
            surface.format(),
            surface.color_key()
        );
        Ok(surface)
    }
}

/// Wraps decoder output in a surface, keeping an alpha channel if it had one.
fn raw_surface(decoded: DynamicImage) -> BlitResult<Surface> {
    let (width, height) = (decoded.width(), decoded.height());
    if decoded.color().has_alpha() {
        let pixels = decoded.into_rgba8().into_raw();
        Surface::from_pixels(width, height, PixelFormat::Rgba8888, pixels)
    } else {
        let pixels = decoded.into_rgb8().into_raw();
        Surface::from_pixels(width, height, PixelFormat::Rgb888, pixels)
    }
}
