/// Heading the snake can move in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// The heading pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// What the input side delivers to the engine once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPoll {
    /// Stop the loop after this tick
    Quit,
    /// Request a new heading for the next move
    Heading(Direction),
    /// Keep going in the current heading
    #[default]
    None,
}

impl From<Direction> for InputPoll {
    fn from(direction: Direction) -> Self {
        InputPoll::Heading(direction)
    }
}
