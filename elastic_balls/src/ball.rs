//! Wrapping balls with mass-derived radii

use common::{Rgba8, ShapeInstance};
use rand::Rng;

use crate::config::{ElasticConfig, NormalMode};
use crate::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: f64,
    pub color: Rgba8,
}

impl Ball {
    pub fn new(position: Vector, velocity: Vector, mass: f64, color: Rgba8) -> Self {
        Self {
            position,
            velocity,
            mass,
            color,
        }
    }

    /// A ball anywhere in the window with a random drift, mass and color
    pub fn random<R: Rng>(config: &ElasticConfig, rng: &mut R) -> Self {
        let position = Vector::new(
            rng.gen::<f64>() * config.width,
            rng.gen::<f64>() * config.height,
        );
        let velocity = Vector::new(
            config.max_speed * (0.5 - rng.gen::<f64>()),
            config.max_speed * (0.5 - rng.gen::<f64>()),
        );
        let mass = rng.gen::<f64>() * config.max_mass;
        let color = Rgba8::new(
            rng.gen_range(0..0xff),
            rng.gen_range(0..0xff),
            rng.gen_range(0..0xff),
            0xa0,
        );

        Self::new(position, velocity, mass, color)
    }

    pub fn radius(&self, mass_scale: f64) -> f64 {
        self.mass * mass_scale
    }

    /// Move one frame, teleporting to the far edge when leaving the window
    pub fn advance(&mut self, width: f64, height: f64) {
        self.position = self.position + self.velocity;
        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
    }

    /// Whether the two circles overlap or touch
    pub fn touches(&self, other: &Ball, mass_scale: f64) -> bool {
        let d = self.position.sub(other.position).length();
        d <= mass_scale * (self.mass + other.mass)
    }

    /// Mirror the velocity about the collision normal `n`.
    ///
    /// A zero-length normal leaves the velocity alone.
    pub fn bounce(&mut self, n: Vector, mode: NormalMode) {
        self.velocity = match mode {
            NormalMode::Raw => {
                let len_sq = n.length_squared();
                if len_sq == 0.0 {
                    return;
                }
                self.velocity
                    .sub(n.multiply(2.0 * self.velocity.dot_product(n) / len_sq))
            }
            NormalMode::Unit => self.velocity.reflect(n.normalize()),
        };
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Filled circle plus outline, both in the ball's color
    pub fn shapes(&self, mass_scale: f64) -> [ShapeInstance; 2] {
        let (x, y) = (self.position.x as f32, self.position.y as f32);
        let r = self.radius(mass_scale) as f32;
        [
            ShapeInstance::disc(x, y, r, self.color),
            ShapeInstance::ring(x, y, r, self.color),
        ]
    }
}

fn wrap(coordinate: f64, size: f64) -> f64 {
    if coordinate > size {
        0.0
    } else if coordinate < 0.0 {
        size
    } else {
        coordinate
    }
}
