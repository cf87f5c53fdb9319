//! # Frame/Event Driver
//!
//! Runs a lesson through setup, a single render, the event loop and teardown.
//! All state lives in the driver; the loader, blitter and platform only see
//! what is passed to them.

use crate::graphics::{ImageLoader, Surface};
use crate::lessons::{Lesson, SceneConfig};
use crate::platform::{Event, Platform};
use crate::{BlitError, BlitResult};

/// Lifecycle of a driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Nothing acquired yet
    Uninitialized,
    /// Display surface created
    Initialized,
    /// Asset loaded
    Loaded,
    /// Frame drawn and presented
    Rendered,
    /// Waiting for a quit request
    Running,
    /// Quit received or torn down
    Terminated,
}

/// What a single [`Driver::teardown`] call released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    /// Loaded surfaces dropped by this call
    pub surfaces_released: usize,
    /// Whether this call released the platform
    pub platform_released: bool,
}

/// Owns the platform, the display surface and the loaded assets for one run.
pub struct Driver<P: Platform> {
    lesson: Lesson,
    scene: SceneConfig,
    platform: P,
    state: DriverState,
    screen: Option<Surface>,
    assets: Vec<Surface>,
    platform_released: bool,
}

impl<P: Platform> Driver<P> {
    /// Creates a driver in the `Uninitialized` state.
    pub fn new(lesson: Lesson, scene: SceneConfig, platform: P) -> Self {
        Self {
            lesson,
            scene,
            platform,
            state: DriverState::Uninitialized,
            screen: None,
            assets: Vec::new(),
            platform_released: false,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn lesson(&self) -> Lesson {
        self.lesson
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The display surface, once initialized.
    pub fn screen(&self) -> Option<&Surface> {
        self.screen.as_ref()
    }

    /// Surfaces loaded so far and not yet released.
    pub fn assets(&self) -> &[Surface] {
        &self.assets
    }

    fn expect_state(&self, expected: DriverState, step: &str) -> BlitResult<()> {
        if self.state != expected {
            return Err(BlitError::InvalidState(format!(
                "cannot {} while {:?} (expected {:?})",
                step, self.state, expected
            )));
        }
        Ok(())
    }

    /// Creates the display surface.
    pub fn initialize(&mut self) -> BlitResult<()> {
        self.expect_state(DriverState::Uninitialized, "initialize")?;

        let window = self.lesson.window_settings();
        let screen = self.platform.create_screen(&window)?;
        log::debug!(
            "Display surface {}x{} {:?}",
            screen.width(),
            screen.height(),
            screen.format()
        );

        self.screen = Some(screen);
        self.state = DriverState::Initialized;
        Ok(())
    }

    /// Loads the lesson's asset in the display format.
    pub fn load(&mut self) -> BlitResult<()> {
        self.expect_state(DriverState::Initialized, "load")?;

        #[cfg(feature = "dev-tools")]
        let _span = tracing::debug_span!("load", asset = %self.scene.asset.display()).entered();

        let format = self
            .screen
            .as_ref()
            .map(Surface::format)
            .ok_or_else(|| BlitError::InvalidState("no display surface".to_string()))?;

        let mut loader = ImageLoader::new(format);
        loader.set_color_key(self.scene.color_key);
        let image = loader.load(&self.scene.asset)?;

        log::info!(
            "Loaded {} ({}x{})",
            self.scene.asset.display(),
            image.width(),
            image.height()
        );
        self.assets.push(image);
        self.state = DriverState::Loaded;
        Ok(())
    }

    /// Draws the lesson's frame and presents it.
    pub fn render(&mut self) -> BlitResult<()> {
        self.expect_state(DriverState::Loaded, "render")?;

        let (Some(screen), Some(image)) = (self.screen.as_mut(), self.assets.first()) else {
            return Err(BlitError::InvalidState(
                "render needs a display surface and a loaded image".to_string(),
            ));
        };

        self.lesson.render(screen, image, &self.scene);
        self.platform.present(screen)?;

        self.state = DriverState::Rendered;
        Ok(())
    }

    /// Drains event batches until a quit request, returning the number of
    /// poll cycles. The frame is not redrawn while running.
    pub async fn run(&mut self) -> BlitResult<usize> {
        self.expect_state(DriverState::Rendered, "run")?;
        self.state = DriverState::Running;

        let mut cycles = 0;
        while self.state == DriverState::Running {
            let events = self.platform.next_events().await;
            cycles += 1;

            let mut quit = false;
            for event in events {
                match event {
                    Event::Quit => quit = true,
                    Event::KeyDown(key) => log::trace!("Ignoring key {:?}", key),
                }
            }

            if quit {
                log::info!("Quit requested after {} poll cycles", cycles);
                self.state = DriverState::Terminated;
            }
        }

        Ok(cycles)
    }

    /// Releases loaded surfaces, then the platform. Safe to call repeatedly;
    /// later calls release nothing.
    pub fn teardown(&mut self) -> Teardown {
        let surfaces_released = self.assets.len();
        self.assets.clear();
        self.screen = None;

        let platform_released = !self.platform_released;
        if platform_released {
            self.platform.release();
            self.platform_released = true;
        }

        self.state = DriverState::Terminated;
        let report = Teardown {
            surfaces_released,
            platform_released,
        };
        log::debug!("Teardown: {:?}", report);
        report
    }

    /// Runs every step in order and tears down afterwards, also on failure.
    pub async fn execute(&mut self) -> BlitResult<usize> {
        let result = self.execute_steps().await;
        self.teardown();
        result
    }

    async fn execute_steps(&mut self) -> BlitResult<usize> {
        self.initialize()?;
        self.load()?;
        self.render()?;
        self.run().await
    }
}

impl<P: Platform> Drop for Driver<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
