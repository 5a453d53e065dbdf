//! Grid of cells, each owned by one side

use common::Rgba8;

use crate::config::{BoopConfig, LEFT_COLOR, RIGHT_COLOR};

/// The two sides competing for cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Color of cells owned by this side
    pub fn color(self) -> Rgba8 {
        match self {
            Side::Left => LEFT_COLOR,
            Side::Right => RIGHT_COLOR,
        }
    }
}

/// Fixed-size grid of cell owners, indexed by `(column, row)`
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    columns: usize,
    rows: usize,
    cell_size: f64,
    cells: Vec<Side>,
}

impl CellGrid {
    /// Build a grid covering the configured window, split down the middle:
    /// the left half of the columns belongs to [`Side::Left`].
    pub fn new(config: &BoopConfig) -> Self {
        let columns = config.columns();
        let rows = config.rows();
        let mut cells = Vec::with_capacity(columns * rows);
        for column in 0..columns {
            let owner = if column < columns / 2 {
                Side::Left
            } else {
                Side::Right
            };
            cells.extend(std::iter::repeat(owner).take(rows));
        }

        Self {
            columns,
            rows,
            cell_size: config.cell_size,
            cells,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| column * self.rows + row)
    }

    /// Owner of a cell, `None` outside the grid
    pub fn get(&self, column: usize, row: usize) -> Option<Side> {
        self.index(column, row).map(|i| self.cells[i])
    }

    /// Hand a cell to `side`. Returns false if the cell is outside the grid
    /// or already owned by `side`.
    pub fn claim(&mut self, column: usize, row: usize, side: Side) -> bool {
        match self.index(column, row) {
            Some(i) if self.cells[i] != side => {
                self.cells[i] = side;
                true
            }
            _ => false,
        }
    }

    /// Cell containing a pixel position, `None` outside the grid
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let column = (x / self.cell_size).floor() as usize;
        let row = (y / self.cell_size).floor() as usize;
        self.index(column, row).map(|_| (column, row))
    }

    /// Number of cells owned by `side`
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&owner| owner == side).count()
    }

    /// Every cell with its position and owner, column by column
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Side)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &owner)| (i / self.rows, i % self.rows, owner))
    }
}
