//! # Window Backend
//!
//! Shows the display surface in a macroquad window.

use super::{Event, Platform, WindowSettings};
use crate::graphics::{PixelFormat, Surface};
use crate::{BlitError, BlitResult};
use macroquad::prelude::*;
use macroquad::window::Conf;

/// Builds the macroquad window configuration for `settings`.
pub fn window_conf(settings: &WindowSettings) -> Conf {
    Conf {
        window_title: settings.title.clone(),
        window_width: settings.width as i32,
        window_height: settings.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Platform backed by the macroquad window.
///
/// The presented frame is uploaded once into a texture and drawn again on
/// every frame while waiting for events, so the image stays on screen
/// without re-rendering the surface.
#[derive(Default)]
pub struct MacroquadPlatform {
    frame: Option<Texture2D>,
    window: Option<WindowSettings>,
    released: bool,
}

impl MacroquadPlatform {
    /// Creates the backend. The window itself is opened by `#[macroquad::main]`.
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_frame(&self) {
        clear_background(BLACK);
        if let Some(texture) = &self.frame {
            draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(screen_width(), screen_height())),
                    ..Default::default()
                },
            );
        }
    }
}

impl Platform for MacroquadPlatform {
    fn create_screen(&mut self, window: &WindowSettings) -> BlitResult<Surface> {
        let format = PixelFormat::from_bits_per_pixel(window.bits_per_pixel)
            .filter(|f| *f == PixelFormat::DISPLAY)
            .ok_or_else(|| {
                BlitError::Init(format!(
                    "unsupported display depth: {} bits per pixel",
                    window.bits_per_pixel
                ))
            })?;

        if window.width > u16::MAX as u32 || window.height > u16::MAX as u32 {
            return Err(BlitError::Init(format!(
                "window {}x{} is too large",
                window.width, window.height
            )));
        }

        let screen = Surface::new(window.width, window.height, format)
            .map_err(|e| BlitError::Init(e.to_string()))?;

        request_new_screen_size(window.width as f32, window.height as f32);
        // Close requests are reported as events instead of ending the loop.
        prevent_quit();

        log::info!(
            "Opened \"{}\" at {}x{} ({} bpp)",
            window.title,
            window.width,
            window.height,
            window.bits_per_pixel
        );
        self.window = Some(window.clone());
        Ok(screen)
    }

    fn present(&mut self, screen: &Surface) -> BlitResult<()> {
        let window = self
            .window
            .as_ref()
            .ok_or_else(|| BlitError::Present("no window has been opened".to_string()))?;

        if screen.width() != window.width || screen.height() != window.height {
            return Err(BlitError::Present(format!(
                "frame is {}x{} but the window is {}x{}",
                screen.width(),
                screen.height(),
                window.width,
                window.height
            )));
        }
        if screen.format() != PixelFormat::Rgba8888 {
            return Err(BlitError::Present(format!(
                "cannot upload {:?} frames",
                screen.format()
            )));
        }

        let texture = Texture2D::from_rgba8(
            screen.width() as u16,
            screen.height() as u16,
            screen.as_bytes(),
        );
        texture.set_filter(FilterMode::Nearest);
        self.frame = Some(texture);
        self.draw_frame();
        Ok(())
    }

    async fn next_events(&mut self) -> Vec<Event> {
        next_frame().await;

        // macroquad only exposes the set of keys pressed this frame, so their
        // relative order is lost.
        let mut events: Vec<Event> = get_keys_pressed().into_iter().map(Event::KeyDown).collect();
        if is_quit_requested() {
            events.push(Event::Quit);
        }

        // Queue the same frame again for the next swap.
        self.draw_frame();
        events
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.frame = None;
        self.released = true;
        log::debug!("Released macroquad resources");
    }
}
