//! Common utilities for the ball simulations
//!
//! This crate provides the shared graphics setup, a pixel-space camera, an
//! instanced shape renderer and frame pacing used by both the cell boop and
//! the elastic ball demos.

pub mod camera;
pub mod color;
pub mod error;
pub mod frame;
pub mod graphics;
pub mod shapes;

pub use camera::*;
pub use color::*;
pub use error::*;
pub use frame::*;
pub use graphics::*;
pub use shapes::*;

/// Window constants shared by both demos
pub mod window {
    /// Window width in pixels
    pub const WIDTH: u32 = 800;

    /// Window height in pixels
    pub const HEIGHT: u32 = 800;

    /// Window title
    pub const TITLE: &str = "balls";
}
