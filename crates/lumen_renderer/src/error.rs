//! Render errors.

use thiserror::Error;

/// Errors that stop a render before any pixel is produced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("At least one sample per pixel is required")]
    NoSamples,

    #[error("At least one worker thread is required")]
    NoThreads,

    #[error("Failed to start worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("A worker thread panicked")]
    WorkerPanicked,
}
