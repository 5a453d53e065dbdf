//! Fixed simulation constants

use common::{window, Rgba8};

/// Color of cells owned by the left side
pub const LEFT_COLOR: Rgba8 = Rgba8::new(0x17, 0xcf, 0xff, 0x80);

/// Color of cells owned by the right side
pub const RIGHT_COLOR: Rgba8 = Rgba8::new(0xff, 0x89, 0x17, 0x80);

/// Geometry and launch speed of the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct BoopConfig {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    /// Scale applied to the random launch velocities
    pub speed_scale: f64,
}

impl BoopConfig {
    /// Number of whole cells across the window
    pub fn columns(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    /// Number of whole cells down the window
    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }
}

impl Default for BoopConfig {
    fn default() -> Self {
        Self {
            width: window::WIDTH as f64,
            height: window::HEIGHT as f64,
            cell_size: 40.0,
            speed_scale: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_twenty_by_twenty() {
        let config = BoopConfig::default();
        assert_eq!(config.columns(), 20);
        assert_eq!(config.rows(), 20);
    }
}
