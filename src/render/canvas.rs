use crate::game::{Board, Cell, RenderView};

/// What occupies a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Body,
    Head,
    Food,
}

/// Tile buffer that is patched after every tick instead of rebuilt.
///
/// The shed tail cell is erased and the snake and food are painted on top;
/// the whole buffer is wiped only when the snake was reset.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    food: Option<Cell>,
}

impl Canvas {
    pub fn new(board: Board) -> Self {
        Self {
            width: board.width,
            height: board.height,
            tiles: vec![Tile::Empty; board.cell_count()],
            food: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, cell: Cell) -> Tile {
        self.index(cell)
            .map(|i| self.tiles[i])
            .unwrap_or(Tile::Empty)
    }

    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Empty);
        self.food = None;
    }

    /// Patch the buffer with the state handed over after a tick
    pub fn apply(&mut self, view: &RenderView<'_>) {
        if view.reset {
            self.clear();
        }

        if let Some(shed) = view.last_shed {
            self.set(shed, Tile::Empty);
        }

        if let Some(old_food) = self.food.filter(|old| *old != view.food) {
            self.set(old_food, Tile::Empty);
        }

        for (i, segment) in view.body.iter().enumerate() {
            let tile = if i == 0 { Tile::Head } else { Tile::Body };
            self.set(*segment, tile);
        }

        self.set(view.food, Tile::Food);
        self.food = Some(view.food);
    }

    /// Tiles of one row, left to right
    pub fn row(&self, y: i32) -> impl Iterator<Item = Tile> + '_ {
        (0..self.width).map(move |x| self.get(Cell::new(x, y)))
    }

    fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = tile;
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let in_bounds = (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y);
        in_bounds.then(|| (cell.y * self.width + cell.x) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn view(
        body: &VecDeque<Cell>,
        last_shed: Option<Cell>,
        food: Cell,
        reset: bool,
    ) -> RenderView<'_> {
        RenderView {
            body,
            last_shed,
            food,
            reset,
        }
    }

    #[test]
    fn test_paints_snake_and_food() {
        let mut canvas = Canvas::new(Board::new(8, 8));
        let body = VecDeque::from([Cell::new(3, 3), Cell::new(2, 3)]);
        canvas.apply(&view(&body, None, Cell::new(6, 6), false));

        assert_eq!(canvas.get(Cell::new(3, 3)), Tile::Head);
        assert_eq!(canvas.get(Cell::new(2, 3)), Tile::Body);
        assert_eq!(canvas.get(Cell::new(6, 6)), Tile::Food);
        assert_eq!(canvas.get(Cell::new(0, 0)), Tile::Empty);
    }

    #[test]
    fn test_shed_cell_erased() {
        let mut canvas = Canvas::new(Board::new(8, 8));
        let body = VecDeque::from([Cell::new(3, 3), Cell::new(2, 3)]);
        canvas.apply(&view(&body, None, Cell::new(6, 6), false));

        let body = VecDeque::from([Cell::new(4, 3), Cell::new(3, 3)]);
        canvas.apply(&view(&body, Some(Cell::new(2, 3)), Cell::new(6, 6), false));

        assert_eq!(canvas.get(Cell::new(2, 3)), Tile::Empty);
        assert_eq!(canvas.get(Cell::new(3, 3)), Tile::Body);
        assert_eq!(canvas.get(Cell::new(4, 3)), Tile::Head);
    }

    #[test]
    fn test_head_on_shed_cell_survives() {
        let mut canvas = Canvas::new(Board::new(8, 8));
        let body = VecDeque::from([Cell::new(1, 1)]);
        canvas.apply(&view(&body, Some(Cell::new(1, 1)), Cell::new(6, 6), false));

        assert_eq!(canvas.get(Cell::new(1, 1)), Tile::Head);
    }

    #[test]
    fn test_reset_clears_stale_body() {
        let mut canvas = Canvas::new(Board::new(8, 8));
        let body = VecDeque::from([Cell::new(5, 5), Cell::new(5, 4), Cell::new(5, 3)]);
        canvas.apply(&view(&body, None, Cell::new(0, 7), false));

        let body = VecDeque::from([Cell::new(4, 4)]);
        canvas.apply(&view(&body, None, Cell::new(1, 1), true));

        assert_eq!(canvas.get(Cell::new(5, 4)), Tile::Empty);
        assert_eq!(canvas.get(Cell::new(0, 7)), Tile::Empty);
        assert_eq!(canvas.get(Cell::new(4, 4)), Tile::Head);
        assert_eq!(canvas.get(Cell::new(1, 1)), Tile::Food);
    }

    #[test]
    fn test_moved_food_erased() {
        let mut canvas = Canvas::new(Board::new(8, 8));
        let body = VecDeque::from([Cell::new(0, 0)]);
        canvas.apply(&view(&body, None, Cell::new(3, 3), false));
        canvas.apply(&view(&body, None, Cell::new(4, 4), false));

        assert_eq!(canvas.get(Cell::new(3, 3)), Tile::Empty);
        assert_eq!(canvas.get(Cell::new(4, 4)), Tile::Food);
        assert_eq!(canvas.row(4).filter(|t| *t == Tile::Food).count(), 1);
    }
}
