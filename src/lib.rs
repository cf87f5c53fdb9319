//! # Clipblit
//!
//! Image loading, color keying and clip blitting onto a fixed-size window.
//!
//! ## Architecture Overview
//!
//! All pixel work happens in software on owned [`Surface`] buffers, so the
//! interesting parts can be exercised without a window:
//!
//! - **Graphics**: surfaces, pixel formats, the image loader and the blitter
//! - **Sprites**: the clip table that splits a sprite sheet into quadrants
//! - **Lessons**: the two demo programs and their one-time render step
//! - **Driver**: the setup/render/poll/teardown state machine
//! - **Platform**: the seam between the driver and a real window (macroquad)
//!   or a scripted headless backend

pub mod app;
pub mod driver;
pub mod graphics;
pub mod lessons;
pub mod platform;
pub mod sprites;

pub use driver::*;
pub use graphics::*;
pub use lessons::*;
pub use platform::*;
pub use sprites::*;

use std::path::PathBuf;

/// Broad category of a [`BlitError`], used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Graphics subsystem or display surface could not be created
    Init,
    /// Asset could not be decoded or converted
    Load,
    /// The rendered frame could not be presented
    Present,
    /// Configuration file could not be read or parsed
    Config,
    /// A driver step was invoked out of order
    State,
}

/// Core error type for clipblit.
#[derive(thiserror::Error, Debug)]
pub enum BlitError {
    /// Display setup failed
    #[error("Initialization failed: {0}")]
    Init(String),

    /// Image file could not be read or decoded
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Decoded image could not be converted to the display format
    #[error("Failed to convert {} to the display format: {reason}", .path.display())]
    Conversion { path: PathBuf, reason: String },

    /// Frame presentation failed
    #[error("Presentation failed: {0}")]
    Present(String),

    /// Surface dimensions or buffer are invalid
    #[error("Invalid surface: {0}")]
    InvalidSurface(String),

    /// Driver step called in the wrong state
    #[error("Invalid driver state: {0}")]
    InvalidState(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl BlitError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlitError::Init(_) => ErrorKind::Init,
            BlitError::Decode { .. } | BlitError::Conversion { .. } => ErrorKind::Load,
            BlitError::InvalidSurface(_) => ErrorKind::Load,
            BlitError::Present(_) => ErrorKind::Present,
            BlitError::InvalidState(_) => ErrorKind::State,
            BlitError::Io(_) | BlitError::Serde(_) => ErrorKind::Config,
        }
    }

    /// Process exit status for this error. Every failure is terminal.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type used throughout the clipblit codebase.
pub type BlitResult<T> = Result<T, BlitError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display and asset constants.
pub mod config {
    /// Screen width in pixels
    pub const SCREEN_WIDTH: u32 = 640;

    /// Screen height in pixels
    pub const SCREEN_HEIGHT: u32 = 480;

    /// Screen depth in bits per pixel
    pub const SCREEN_BPP: u32 = 32;

    /// Edge length of one sprite in the sheet
    pub const SPRITE_SIZE: u32 = 75;

    /// Largest width or height a surface may have
    pub const MAX_SURFACE_DIMENSION: u32 = 16384;
}
