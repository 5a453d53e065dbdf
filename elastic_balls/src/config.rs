//! Fixed simulation constants

use common::window;

/// How the collision normal is used when two balls touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalMode {
    /// Use the raw centre difference `n` with `v - n * (2 (v.n) / |n|^2)`
    #[default]
    Raw,
    /// Normalize `n` first and use [`Vector::reflect`](crate::Vector::reflect)
    Unit,
}

impl NormalMode {
    pub fn toggled(self) -> Self {
        match self {
            NormalMode::Raw => NormalMode::Unit,
            NormalMode::Unit => NormalMode::Raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElasticConfig {
    pub width: f64,
    pub height: f64,
    pub ball_count: usize,
    /// Rendered radius per unit of mass
    pub mass_scale: f64,
    /// Masses are drawn from `[0, max_mass)`
    pub max_mass: f64,
    /// Velocity components are drawn from `(-max_speed / 2, max_speed / 2]`
    pub max_speed: f64,
    pub normal_mode: NormalMode,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            width: window::WIDTH as f64,
            height: window::HEIGHT as f64,
            ball_count: 100,
            mass_scale: 1.0,
            max_mass: 10.0,
            max_speed: 10.0,
            normal_mode: NormalMode::Raw,
        }
    }
}
