//! Elastic ball simulation
//!
//! A fixed population of balls drifts across a wrapping window. Balls whose
//! circles overlap have their velocities mirrored about the line joining
//! their centres.

pub mod ball;
pub mod config;
pub mod simulation;
pub mod vector;

pub use ball::Ball;
pub use config::{ElasticConfig, NormalMode};
pub use simulation::Simulation;
pub use vector::Vector;
