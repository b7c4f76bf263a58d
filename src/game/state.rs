use std::collections::VecDeque;

use super::action::Direction;
use super::board::Board;
use super::food::Food;

/// A cell on the game grid, addressed by (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: VecDeque<Cell>,
    /// Committed heading
    pub direction: Direction,
    /// Heading requested by input, consumed by the next move
    pub pending_direction: Option<Direction>,
    /// Target length; the body grows toward it by keeping its tail
    pub length: usize,
    /// Highest length reached before any reset
    pub best_length: usize,
    /// Tail cell dropped by the most recent move
    pub last_shed: Option<Cell>,
    start: Cell,
}

impl Snake {
    /// Create a one-segment snake at `start`
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            pending_direction: None,
            length: 1,
            best_length: 1,
            last_shed: None,
            start,
        }
    }

    /// Create a snake with an explicit body; `length` matches the body.
    ///
    /// `start` is still the cell the snake returns to on reset.
    pub fn with_body(start: Cell, body: Vec<Cell>, direction: Direction) -> Self {
        let mut snake = Self::new(start, direction);
        if !body.is_empty() {
            snake.length = body.len();
            snake.body = body.into();
        }
        snake
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Body segments, excluding the head
    pub fn body_segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().skip(1)
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Cell) -> bool {
        self.body_segments().any(|segment| *segment == pos)
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Cell) -> bool {
        self.body.contains(&pos)
    }

    /// Buffer a heading for the next move; a later request replaces it
    pub fn request_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Move one cell in the committed heading, wrapping around the board.
    ///
    /// A pending heading is applied first unless it would reverse a snake
    /// that has more than one segment.
    pub fn advance(&mut self, board: &Board) {
        if let Some(next) = self.pending_direction.take() {
            if self.body.len() == 1 || !self.direction.is_opposite(next) {
                self.direction = next;
            }
        }

        let new_head = board.wrap(self.head().moved_in_direction(self.direction));
        self.body.push_front(new_head);

        self.last_shed = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Grow by one segment; the body catches up on the next move
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Shrink back to a single segment at the start cell.
    ///
    /// Returns true when the length before the reset set a new record.
    pub fn reset(&mut self) -> bool {
        let new_record = self.length > self.best_length;
        self.best_length = self.best_length.max(self.length);

        self.length = 1;
        self.body.clear();
        self.body.push_back(self.start);
        self.last_shed = None;
        self.pending_direction = None;

        new_record
    }

    /// Segments currently on the board; may trail `length` while growing
    pub fn segment_count(&self) -> usize {
        self.body.len()
    }
}

/// Whether the loop keeps ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Exited,
}

/// What the core hands to the renderer after a tick
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub body: &'a VecDeque<Cell>,
    pub last_shed: Option<Cell>,
    pub food: Cell,
    /// The snake was reset this tick; stale tiles must go
    pub reset: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub board: Board,
    pub ticks: u64,
    pub loop_state: LoopState,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, board: Board) -> Self {
        Self {
            snake,
            food,
            board,
            ticks: 0,
            loop_state: LoopState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    pub fn render_view(&self, reset: bool) -> RenderView<'_> {
        RenderView {
            body: &self.snake.body,
            last_shed: self.snake.last_shed,
            food: self.food.position,
            reset,
        }
    }
}
