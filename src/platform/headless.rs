//! # Headless Backend
//!
//! An in-memory platform that replays scripted events. Used by tests and for
//! running the lessons without a window.

use super::{Event, Platform, WindowSettings};
use crate::graphics::{PixelFormat, Surface};
use crate::{BlitError, BlitResult};
use std::collections::VecDeque;

/// Platform that keeps presented frames in memory.
///
/// Event batches are handed out in script order. Once the script runs out
/// every poll returns `[Event::Quit]`, so a driver always terminates.
///
/// # Examples
///
/// ```
/// use clipblit::{Event, HeadlessPlatform};
///
/// let platform = HeadlessPlatform::new().with_batches(vec![vec![], vec![Event::Quit]]);
/// assert_eq!(platform.pending_batches(), 2);
/// ```
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    script: VecDeque<Vec<Event>>,
    window: Option<WindowSettings>,
    last_frame: Option<Surface>,
    fail_screen: Option<String>,
    fail_present: Option<String>,
    polls: usize,
    presents: usize,
    releases: usize,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues event batches to be returned by successive polls.
    pub fn with_batches(mut self, batches: Vec<Vec<Event>>) -> Self {
        self.script.extend(batches);
        self
    }

    /// Makes screen creation fail with `reason`.
    pub fn failing_screen(mut self, reason: impl Into<String>) -> Self {
        self.fail_screen = Some(reason.into());
        self
    }

    /// Makes presentation fail with `reason`.
    pub fn failing_present(mut self, reason: impl Into<String>) -> Self {
        self.fail_present = Some(reason.into());
        self
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&Surface> {
        self.last_frame.as_ref()
    }

    /// Settings of the opened window, if any.
    pub fn window(&self) -> Option<&WindowSettings> {
        self.window.as_ref()
    }

    /// Number of scripted batches not yet handed out.
    pub fn pending_batches(&self) -> usize {
        self.script.len()
    }

    /// Number of times events were polled.
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Number of successful presentations.
    pub fn presents(&self) -> usize {
        self.presents
    }

    /// Number of times `release` was called.
    pub fn releases(&self) -> usize {
        self.releases
    }
}

impl Platform for HeadlessPlatform {
    fn create_screen(&mut self, window: &WindowSettings) -> BlitResult<Surface> {
        if let Some(reason) = &self.fail_screen {
            return Err(BlitError::Init(reason.clone()));
        }

        let format = PixelFormat::from_bits_per_pixel(window.bits_per_pixel).ok_or_else(|| {
            BlitError::Init(format!(
                "unsupported display depth: {} bits per pixel",
                window.bits_per_pixel
            ))
        })?;
        let screen = Surface::new(window.width, window.height, format)
            .map_err(|e| BlitError::Init(e.to_string()))?;

        self.window = Some(window.clone());
        Ok(screen)
    }

    fn present(&mut self, screen: &Surface) -> BlitResult<()> {
        if let Some(reason) = &self.fail_present {
            return Err(BlitError::Present(reason.clone()));
        }
        self.last_frame = Some(screen.clone());
        self.presents += 1;
        Ok(())
    }

    async fn next_events(&mut self) -> Vec<Event> {
        self.polls += 1;
        self.script.pop_front().unwrap_or_else(|| vec![Event::Quit])
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}
