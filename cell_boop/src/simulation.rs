//! Cell boop simulation state

use common::ShapeInstance;
use rand::Rng;

use crate::ball::{Ball, Contact};
use crate::config::BoopConfig;
use crate::grid::CellGrid;

/// The grid plus the two balls fighting over it
pub struct Simulation {
    pub config: BoopConfig,
    pub grid: CellGrid,
    pub balls: [Ball; 2],
}

impl Simulation {
    pub fn new<R: Rng>(config: BoopConfig, rng: &mut R) -> Self {
        let balls = Ball::launch_pair(&config, rng);
        Self::with_balls(config, balls)
    }

    /// Start from a freshly split grid with the given balls
    pub fn with_balls(config: BoopConfig, balls: [Ball; 2]) -> Self {
        let grid = CellGrid::new(&config);
        Self {
            config,
            grid,
            balls,
        }
    }

    /// Advance one frame. Each ball moves and collides before the next one,
    /// so the second ball already sees cells claimed by the first.
    pub fn step(&mut self) -> [Contact; 2] {
        let mut contacts = [Contact::None; 2];
        for (ball, contact) in self.balls.iter_mut().zip(contacts.iter_mut()) {
            ball.advance();
            *contact = ball.collide(&mut self.grid, &self.config);
            match *contact {
                Contact::None => {}
                Contact::WallX => log::debug!("{:?} ball hit an x wall", ball.side),
                Contact::WallY => log::debug!("{:?} ball hit a y wall", ball.side),
                Contact::Boop {
                    direction,
                    column,
                    row,
                } => log::debug!(
                    "{:?} ball booped cell {:?} at row {} column {}",
                    ball.side,
                    direction,
                    row,
                    column
                ),
            }
        }
        contacts
    }

    /// Everything to draw this frame: all cells first, then the balls
    pub fn shapes(&self) -> Vec<ShapeInstance> {
        let size = self.grid.cell_size() as f32;
        let mut shapes = Vec::with_capacity(Self::max_shapes(&self.config));
        shapes.extend(self.grid.iter().map(|(column, row, owner)| {
            ShapeInstance::quad(column as f32 * size, row as f32 * size, size, size, owner.color())
        }));
        shapes.extend(self.balls.iter().map(Ball::shape));
        shapes
    }

    /// Shape count for a grid of this configuration, used to size GPU buffers
    pub fn max_shapes(config: &BoopConfig) -> usize {
        config.columns() * config.rows() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Side;
    use common::ShapeKind;

    #[test]
    fn shapes_draw_cells_before_balls() {
        let config = BoopConfig::default();
        let balls = [
            Ball::new(Side::Left, 200.0, 400.0, 0.0, 0.0, 20.0),
            Ball::new(Side::Right, 600.0, 400.0, 0.0, 0.0, 20.0),
        ];
        let sim = Simulation::with_balls(config.clone(), balls);
        let shapes = sim.shapes();

        assert_eq!(shapes.len(), Simulation::max_shapes(&config));
        assert!(shapes[..400].iter().all(|s| s.kind == ShapeKind::Quad as u32));
        assert!(shapes[400..].iter().all(|s| s.kind == ShapeKind::Disc as u32));
        assert_eq!(shapes[400].center, [200.0, 400.0]);
        assert_eq!(shapes[0].color, Side::Left.color().to_linear());
        assert_eq!(shapes[400].color, Side::Right.color().with_alpha(0xff).to_linear());
    }

    #[test]
    fn second_ball_sees_first_balls_claim() {
        let config = BoopConfig::default();
        // The left ball takes (10, 10); the right ball, one cell further
        // right, would ignore that cell if it were still its own
        let balls = [
            Ball::new(Side::Left, 375.0, 420.0, 5.0, 0.0, 20.0),
            Ball::new(Side::Right, 465.0, 420.0, -5.0, 0.0, 20.0),
        ];
        let mut sim = Simulation::with_balls(config, balls);
        let contacts = sim.step();

        assert!(matches!(contacts[0], Contact::Boop { column: 10, row: 10, .. }));
        assert!(matches!(contacts[1], Contact::Boop { column: 10, row: 10, .. }));
        assert_eq!(sim.grid.get(10, 10), Some(Side::Right));
        assert_eq!((sim.balls[0].vx, sim.balls[1].vx), (-5.0, 5.0));
    }
}
