//! Cell boop simulation
//!
//! Two balls, one per side, bounce around a window tiled with cells. Each
//! cell is owned by one side. When a ball runs into a neighbouring cell owned
//! by the other side it claims ("boops") that cell and bounces off it.

pub mod ball;
pub mod config;
pub mod grid;
pub mod simulation;

pub use ball::{Ball, Contact, Direction};
pub use config::BoopConfig;
pub use grid::{CellGrid, Side};
pub use simulation::Simulation;
