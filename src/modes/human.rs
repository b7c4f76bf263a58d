use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use crate::game::{GameConfig, GameEngine, GameState, InputPoll, LoopState, StepResult};
use crate::input::{InputHandler, InputQueue};
use crate::metrics::SessionMetrics;
use crate::render::{Canvas, Renderer, caption};

/// Keyboard-driven game in the terminal
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    canvas: Canvas,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    input: InputQueue,
    tick_interval: Duration,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_interval = Duration::from_secs(1) / config.tick_rate.max(1);
        let renderer = Renderer::new(&config);
        let mut engine = GameEngine::new(config);
        let state = engine.new_game();

        let mut canvas = Canvas::new(state.board);
        canvas.apply(&state.render_view(false));

        Self {
            engine,
            state,
            canvas,
            metrics: SessionMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            input: InputQueue::new(),
            tick_interval,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(
            stderr,
            EnterAlternateScreen,
            SetTitle(caption(self.state.snake.best_length))
        )
        .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        debug!("terminal ready");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;
        debug!("terminal restored");

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut stream_done = false;

        loop {
            tokio::select! {
                // Collect input until the next tick
                maybe_event = event_stream.next(), if !stream_done => {
                    stream_done = self.handle_stream_item(maybe_event)?;
                }

                // One game tick, then hand the frame to the renderer
                _ = tick_timer.tick() => {
                    let result = self.tick();
                    if result.loop_state == LoopState::Exited {
                        break;
                    }

                    if result.new_record {
                        execute!(
                            terminal.backend_mut(),
                            SetTitle(caption(self.state.snake.best_length))
                        )
                        .context("Failed to set terminal title")?;
                    }

                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.canvas, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.input.push(InputPoll::Quit);
                }
            }
        }

        Ok(())
    }

    /// Returns true once the event stream has ended; that counts as a quit
    fn handle_stream_item(&mut self, item: Option<io::Result<Event>>) -> Result<bool> {
        match item {
            Some(Ok(event)) => self.handle_event(event),
            Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
            None => {
                self.input.push(InputPoll::Quit);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.input.push(self.input_handler.handle_key_event(key));
        }
    }

    /// Run one tick on the input collected since the previous one
    fn tick(&mut self) -> StepResult {
        let poll = self.input.poll();
        let result = self.engine.step(&mut self.state, poll);

        self.metrics.on_step(&result);
        self.metrics.update();

        if result.loop_state == LoopState::Running {
            self.canvas.apply(&self.state.render_view(result.is_reset()));
        }

        result
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
