use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::state::{Cell, Snake};

/// Where food may land relative to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPolicy {
    /// Redraw until the cell is free of the snake
    #[default]
    AvoidSnake,
    /// Take the first draw, even on top of the snake
    AllowOverlap,
}

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Place food somewhere on the board according to `policy`
    pub fn spawn<R: Rng>(
        board: &Board,
        snake: &Snake,
        policy: FoodPolicy,
        rng: &mut R,
    ) -> Self {
        Self::new(randomize_position(board, snake, policy, rng))
    }

    pub fn relocate<R: Rng>(
        &mut self,
        board: &Board,
        snake: &Snake,
        policy: FoodPolicy,
        rng: &mut R,
    ) {
        self.position = randomize_position(board, snake, policy, rng);
    }
}

/// Draw a uniformly random cell for the food.
///
/// With [`FoodPolicy::AvoidSnake`] cells under the snake are redrawn. When the
/// snake covers the whole board no free cell exists and the draw is kept.
pub fn randomize_position<R: Rng>(
    board: &Board,
    snake: &Snake,
    policy: FoodPolicy,
    rng: &mut R,
) -> Cell {
    let board_full = snake.segment_count() >= board.cell_count();

    loop {
        let cell = board.random_cell(rng);

        match policy {
            FoodPolicy::AllowOverlap => return cell,
            FoodPolicy::AvoidSnake if board_full || !snake.occupies(cell) => return cell,
            FoodPolicy::AvoidSnake => {}
        }
    }
}
