//! # Platform Module
//!
//! The seam between the driver and whatever shows pixels on screen.
//!
//! The driver only needs four things from a platform: a display surface, a
//! way to present it, a stream of input events and a final release. The
//! macroquad backend opens a real window; the headless backend replays a
//! script and keeps frames in memory.

pub mod headless;
pub mod window;

pub use headless::*;
pub use window::*;

use crate::config::{SCREEN_BPP, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::graphics::Surface;
use crate::BlitResult;
use macroquad::input::KeyCode;

/// Window settings requested by a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    /// Window caption
    pub title: String,
    /// Client width in pixels
    pub width: u32,
    /// Client height in pixels
    pub height: u32,
    /// Requested depth of the display surface
    pub bits_per_pixel: u32,
}

impl WindowSettings {
    /// A 640x480, 32-bit window with the given caption.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            bits_per_pixel: SCREEN_BPP,
        }
    }
}

/// Notification from the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked to close the window
    Quit,
    /// A key went down
    KeyDown(KeyCode),
}

/// Backend that owns the window and event queue.
#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Opens the window and creates the matching display surface.
    fn create_screen(&mut self, window: &WindowSettings) -> BlitResult<Surface>;

    /// Shows `screen` in the window.
    fn present(&mut self, screen: &Surface) -> BlitResult<()>;

    /// Waits for the next frame and returns the events that arrived, in order.
    /// Backends that only report a set of keys per frame may return those
    /// `KeyDown` events in any order; a `Quit` always comes last in its batch.
    async fn next_events(&mut self) -> Vec<Event>;

    /// Releases backend resources. Called at most once by the driver.
    fn release(&mut self);
}
