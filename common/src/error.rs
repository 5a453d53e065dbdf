//! Fatal startup errors

use thiserror::Error;

/// Failures while acquiring the window or the GPU renderer.
///
/// Both are fatal: the binaries log them and exit.
#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("creating window: {0}")]
    WindowCreation(Box<dyn std::error::Error>),

    #[error("creating renderer: {0}")]
    RendererCreation(Box<dyn std::error::Error>),
}

impl GraphicsError {
    pub fn window(cause: impl Into<Box<dyn std::error::Error>>) -> Self {
        Self::WindowCreation(cause.into())
    }

    pub fn renderer(cause: impl Into<Box<dyn std::error::Error>>) -> Self {
        Self::RendererCreation(cause.into())
    }
}
