use rand::Rng;

use super::state::Cell;

/// Fixed-size toroidal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    /// Fold a cell back onto the grid, each axis independently.
    ///
    /// A cell that steps off one edge reappears on the opposite one.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.rem_euclid(self.width),
            cell.y.rem_euclid(self.height),
        )
    }

    /// Centre of the board, where the snake starts
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Uniformly random cell
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}
