use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::{Canvas, Tile};
use crate::game::{GameConfig, GameState, Palette, Rgb};
use crate::metrics::SessionMetrics;

/// Caption text carrying the best length
pub fn caption(best_length: usize) -> String {
    format!("Snake | Best: {best_length}")
}

fn rgb(color: Rgb) -> Color {
    let [r, g, b] = color;
    Color::Rgb(r, g, b)
}

/// Draws the canvas as rows of colored squares
pub struct Renderer {
    palette: Palette,
    cell_size: u16,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            palette: config.palette,
            cell_size: config.cell_size,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        canvas: &Canvas,
        state: &GameState,
        metrics: &SessionMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let grid_width = (canvas.width() as u16)
            .saturating_mul(self.cell_size)
            .saturating_add(2);
        let grid_height = (canvas.height() as u16).saturating_add(2);
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(grid_width)])
            .flex(Flex::Center)
            .split(chunks[1])[0];
        let game_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(grid_height)])
            .flex(Flex::Center)
            .split(game_area)[0];

        frame.render_widget(self.render_grid(canvas, state.snake.best_length), game_area);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn tile_style(&self, tile: Tile) -> Style {
        let color = match tile {
            Tile::Empty => self.palette.background,
            Tile::Body => self.palette.snake,
            Tile::Head => self.palette.snake_head,
            Tile::Food => self.palette.food,
        };
        Style::default().bg(rgb(color))
    }

    fn render_grid(&self, canvas: &Canvas, best_length: usize) -> Paragraph<'_> {
        let square = " ".repeat(self.cell_size as usize);

        let lines: Vec<Line> = (0..canvas.height())
            .map(|y| {
                let spans: Vec<Span> = canvas
                    .row(y)
                    .map(|tile| Span::styled(square.clone(), self.tile_style(tile)))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(rgb(self.palette.border)))
                .title(format!(" {} ", caption(best_length))),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &SessionMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                state.snake.length.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(state.snake.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Food: ", label),
            Span::styled(metrics.food_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(metrics.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
