//! Balls bouncing off the window edges and off the other side's cells

use common::{Rgba8, ShapeInstance};
use rand::Rng;

use crate::config::BoopConfig;
use crate::grid::{CellGrid, Side};

/// Direction of a neighbouring cell relative to the ball's own cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

/// What a ball hit during one collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    WallX,
    WallY,
    /// The ball claimed the cell at `(column, row)`
    Boop {
        direction: Direction,
        column: usize,
        row: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub side: Side,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Ball {
    pub fn new(side: Side, x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Self {
        Self {
            side,
            x,
            y,
            vx,
            vy,
            radius,
        }
    }

    /// Launch the two balls from the middle of their halves
    pub fn launch_pair<R: Rng>(config: &BoopConfig, rng: &mut R) -> [Ball; 2] {
        let radius = config.cell_size / 2.0;
        let speed = config.speed_scale;
        [
            // The left ball always starts heading down
            Ball::new(
                Side::Left,
                config.width / 4.0,
                config.height / 2.0,
                speed * (rng.gen::<f64>() - 0.5),
                speed * (rng.gen::<f64>() * 0.5),
                radius,
            ),
            Ball::new(
                Side::Right,
                3.0 * config.width / 4.0,
                config.height / 2.0,
                speed * (rng.gen::<f64>() - 0.5),
                speed * (rng.gen::<f64>() - 0.5),
                radius,
            ),
        ]
    }

    /// Move one frame along the current velocity
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Bounce off at most one thing: a window edge, or else a neighbouring
    /// cell owned by the other side, which is claimed for this ball's side.
    ///
    /// Checks run in a fixed order (x edges, y edges, then the cell to the
    /// right, left, below and above) and stop at the first hit. Position is
    /// never changed here.
    pub fn collide(&mut self, grid: &mut CellGrid, config: &BoopConfig) -> Contact {
        let r = self.radius;

        if self.x - r < 0.0 || self.x + r > config.width {
            self.vx = -self.vx;
            return Contact::WallX;
        }
        if self.y - r < 0.0 || self.y + r > config.height {
            self.vy = -self.vy;
            return Contact::WallY;
        }

        let Some((cx, cy)) = grid.cell_at(self.x, self.y) else {
            return Contact::None;
        };
        let size = grid.cell_size();

        // Neighbours within two cells of the left/top edge are never checked
        if self.vx > 0.0
            && cx + 2 <= grid.columns()
            && self.boops(grid, cx + 1, cy)
            && self.x + r >= (cx + 1) as f64 * size
        {
            return self.claim(grid, Direction::Right, cx + 1, cy);
        }
        if self.vx < 0.0
            && cx >= 2
            && self.boops(grid, cx - 1, cy)
            && self.x - r <= cx as f64 * size
        {
            return self.claim(grid, Direction::Left, cx - 1, cy);
        }
        if self.vy > 0.0
            && cy + 2 <= grid.rows()
            && self.boops(grid, cx, cy + 1)
            && self.y + r >= (cy + 1) as f64 * size
        {
            return self.claim(grid, Direction::Down, cx, cy + 1);
        }
        if self.vy < 0.0
            && cy >= 2
            && self.boops(grid, cx, cy - 1)
            && self.y - r <= cy as f64 * size
        {
            return self.claim(grid, Direction::Up, cx, cy - 1);
        }

        Contact::None
    }

    fn boops(&self, grid: &CellGrid, column: usize, row: usize) -> bool {
        grid.get(column, row).is_some_and(|owner| owner != self.side)
    }

    fn claim(
        &mut self,
        grid: &mut CellGrid,
        direction: Direction,
        column: usize,
        row: usize,
    ) -> Contact {
        grid.claim(column, row, self.side);
        match direction {
            Direction::Right | Direction::Left => self.vx = -self.vx,
            Direction::Down | Direction::Up => self.vy = -self.vy,
        }
        Contact::Boop {
            direction,
            column,
            row,
        }
    }

    /// Balls are painted in the other side's color so they stand out
    pub fn color(&self) -> Rgba8 {
        self.side.opposite().color().with_alpha(0xff)
    }

    pub fn shape(&self) -> ShapeInstance {
        ShapeInstance::disc(self.x as f32, self.y as f32, self.radius as f32, self.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn setup() -> (CellGrid, BoopConfig) {
        let config = BoopConfig::default();
        (CellGrid::new(&config), config)
    }

    #[test]
    fn wall_bounce_inverts_velocity_without_moving() {
        let (mut grid, config) = setup();
        let mut ball = Ball::new(Side::Left, 15.0, 400.0, -3.0, 2.0, 20.0);

        assert_eq!(ball.collide(&mut grid, &config), Contact::WallX);
        assert_eq!((ball.x, ball.y), (15.0, 400.0));
        assert_eq!((ball.vx, ball.vy), (3.0, 2.0));

        let mut ball = Ball::new(Side::Right, 600.0, 790.0, 1.0, 4.0, 20.0);
        assert_eq!(ball.collide(&mut grid, &config), Contact::WallY);
        assert_eq!((ball.x, ball.y), (600.0, 790.0));
        assert_eq!((ball.vx, ball.vy), (1.0, -4.0));
    }

    #[test]
    fn x_wall_wins_over_y_wall_in_a_corner() {
        let (mut grid, config) = setup();
        let mut ball = Ball::new(Side::Left, 10.0, 10.0, -1.0, -1.0, 20.0);
        assert_eq!(ball.collide(&mut grid, &config), Contact::WallX);
        assert_eq!((ball.vx, ball.vy), (1.0, -1.0));
    }

    #[test]
    fn wall_bounce_blocks_a_boop_in_the_same_frame() {
        let (mut grid, config) = setup();
        let before = grid.clone();
        // Touching the bottom wall and the right-owned cell (10, 19) at once
        let mut ball = Ball::new(Side::Left, 380.0, 790.0, 5.0, 3.0, 20.0);

        assert_eq!(ball.collide(&mut grid, &config), Contact::WallY);
        assert_eq!((ball.vx, ball.vy), (5.0, -3.0));
        assert_eq!(grid, before);
        assert_eq!(grid.get(10, 19), Some(Side::Right));
    }

    #[test]
    fn boops_foreign_cell_to_the_right() {
        let (mut grid, config) = setup();
        // Cell (9, 10) is the last left column, (10, 10) belongs to the right
        let mut ball = Ball::new(Side::Left, 380.0, 420.0, 5.0, 0.0, 20.0);

        let contact = ball.collide(&mut grid, &config);
        assert_eq!(
            contact,
            Contact::Boop {
                direction: Direction::Right,
                column: 10,
                row: 10
            }
        );
        assert_eq!(grid.get(10, 10), Some(Side::Left));
        assert_eq!(ball.vx, -5.0);
    }

    #[test]
    fn never_claims_own_cells() {
        let (mut grid, config) = setup();
        let before = grid.clone();
        // Deep inside its own half, touching the next cell's edge
        let mut ball = Ball::new(Side::Left, 100.0, 420.0, 5.0, 0.0, 20.0);
        assert_eq!(ball.collide(&mut grid, &config), Contact::None);
        assert_eq!(grid, before);
        assert_eq!(ball.vx, 5.0);
    }

    #[test]
    fn boops_left_up_and_down() {
        let (mut grid, config) = setup();

        let mut ball = Ball::new(Side::Right, 420.0, 420.0, -2.0, 0.0, 20.0);
        assert!(matches!(
            ball.collide(&mut grid, &config),
            Contact::Boop { direction: Direction::Left, column: 9, row: 10 }
        ));
        assert_eq!(grid.get(9, 10), Some(Side::Right));

        // Now (9, 11) below is still left-owned
        let mut ball = Ball::new(Side::Right, 380.0, 420.0, 0.0, 2.0, 20.0);
        assert!(matches!(
            ball.collide(&mut grid, &config),
            Contact::Boop { direction: Direction::Down, column: 9, row: 11 }
        ));
        assert_eq!(ball.vy, -2.0);

        let mut ball = Ball::new(Side::Right, 380.0, 420.0, 0.0, -2.0, 20.0);
        assert!(matches!(
            ball.collide(&mut grid, &config),
            Contact::Boop { direction: Direction::Up, column: 9, row: 9 }
        ));
    }

    #[test]
    fn horizontal_boop_takes_priority() {
        let (mut grid, config) = setup();
        // Right ball in (10, 10) moving left and down: both (9, 10) and
        // (10, 11) would qualify, only the left cell flips
        grid.claim(10, 11, Side::Left);
        let mut ball = Ball::new(Side::Right, 420.0, 420.0, -2.0, 2.0, 20.0);

        assert!(matches!(
            ball.collide(&mut grid, &config),
            Contact::Boop { direction: Direction::Left, .. }
        ));
        assert_eq!(grid.get(10, 11), Some(Side::Left));
        assert_eq!((ball.vx, ball.vy), (2.0, 2.0));
    }

    #[test]
    fn edge_margins_skip_outer_neighbours() {
        let (mut grid, config) = setup();
        grid.claim(0, 5, Side::Right);
        // In column 1 moving left towards a foreign column 0
        let mut ball = Ball::new(Side::Left, 60.0, 220.0, -1.0, 0.0, 20.0);
        assert_eq!(ball.collide(&mut grid, &config), Contact::None);
        assert_eq!(grid.get(0, 5), Some(Side::Right));
    }

    #[test]
    fn launch_pair_starts_at_quarters() {
        let config = BoopConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let [left, right] = Ball::launch_pair(&config, &mut rng);

        assert_eq!((left.side, left.x, left.y), (Side::Left, 200.0, 400.0));
        assert_eq!((right.side, right.x, right.y), (Side::Right, 600.0, 400.0));
        assert_eq!(left.radius, 20.0);
        assert!(left.vy >= 0.0 && left.vy < 15.0);
        assert!(right.vx.abs() <= 15.0 && right.vy.abs() <= 15.0);
    }

    #[test]
    fn ball_wears_the_opposite_color() {
        let ball = Ball::new(Side::Left, 0.0, 0.0, 0.0, 0.0, 20.0);
        assert_eq!(ball.color(), Side::Right.color().with_alpha(0xff));
    }
}
