//! Errors reported by the renderer before any work is dispatched.

use thiserror::Error;

/// Errors that can occur while configuring or starting a render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}: both dimensions must be positive")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    InvalidSampleCount,

    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Scene error: {0}")]
    Scene(#[from] speed_core::SceneError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
