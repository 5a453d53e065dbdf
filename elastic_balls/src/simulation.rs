//! Elastic ball simulation state

use common::ShapeInstance;
use rand::Rng;

use crate::ball::Ball;
use crate::config::{ElasticConfig, NormalMode};

pub struct Simulation {
    pub config: ElasticConfig,
    pub balls: Vec<Ball>,
}

impl Simulation {
    /// Populate the window with `config.ball_count` random balls
    pub fn new<R: Rng>(config: ElasticConfig, rng: &mut R) -> Self {
        let balls = (0..config.ball_count)
            .map(|_| Ball::random(&config, rng))
            .collect();
        Self { config, balls }
    }

    pub fn with_balls(config: ElasticConfig, balls: Vec<Ball>) -> Self {
        Self { config, balls }
    }

    /// Advance one frame: move and wrap every ball, then resolve every
    /// touching pair. Returns the number of pairs that bounced.
    pub fn step(&mut self) -> usize {
        let (width, height) = (self.config.width, self.config.height);
        for ball in &mut self.balls {
            ball.advance(width, height);
        }
        self.resolve_collisions()
    }

    /// Bounce every touching pair `i < j` off the normal `p_i - p_j`
    pub fn resolve_collisions(&mut self) -> usize {
        let scale = self.config.mass_scale;
        let mode = self.config.normal_mode;
        let mut collisions = 0;

        for i in 0..self.balls.len() {
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if a.touches(b, scale) {
                    let normal = a.position - b.position;
                    a.bounce(normal, mode);
                    b.bounce(normal, mode);
                    collisions += 1;
                }
            }
        }

        if collisions > 0 {
            log::debug!("{collisions} colliding pairs");
        }
        collisions
    }

    /// Index pairs `(i, j)`, `i < j`, whose circles currently overlap
    pub fn touching_pairs(&self) -> Vec<(usize, usize)> {
        let scale = self.config.mass_scale;
        let mut pairs = Vec::new();
        for (i, a) in self.balls.iter().enumerate() {
            for (j, b) in self.balls.iter().enumerate().skip(i + 1) {
                if a.touches(b, scale) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    pub fn toggle_normal_mode(&mut self) -> NormalMode {
        self.config.normal_mode = self.config.normal_mode.toggled();
        self.config.normal_mode
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    pub fn shapes(&self) -> Vec<ShapeInstance> {
        let scale = self.config.mass_scale;
        self.balls.iter().flat_map(|b| b.shapes(scale)).collect()
    }

    /// Shape count for a population of this configuration
    pub fn max_shapes(config: &ElasticConfig) -> usize {
        config.ball_count * 2
    }
}
