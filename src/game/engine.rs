use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    action::{Direction, InputPoll},
    board::Board,
    config::GameConfig,
    food::Food,
    state::{GameState, LoopState, Snake},
};

/// What a tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Plain move
    Moved,
    /// Head landed on the food
    AteFood,
    /// Head ran into the body; `length` is the length before the reset
    SelfCollision { length: usize },
    /// Input asked to stop; nothing moved
    Quit,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub event: StepEvent,
    /// The best length went up this tick
    pub new_record: bool,
    pub loop_state: LoopState,
}

impl StepResult {
    /// The snake was put back at the start cell this tick
    pub fn is_reset(&self) -> bool {
        matches!(self.event, StepEvent::SelfCollision { .. })
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Build the initial state: one-segment snake at the centre heading right
    pub fn new_game(&mut self) -> GameState {
        let board = Board::new(self.config.grid_width, self.config.grid_height);
        let snake = Snake::new(board.center(), Direction::Right);
        let food = Food::spawn(&board, &snake, self.config.food_policy, &mut self.rng);

        GameState::new(snake, food, board)
    }

    /// Execute one tick: input, movement, then collisions
    pub fn step(&mut self, state: &mut GameState, poll: InputPoll) -> StepResult {
        if !state.is_running() {
            return StepResult {
                event: StepEvent::Quit,
                new_record: false,
                loop_state: LoopState::Exited,
            };
        }

        match poll {
            InputPoll::Quit => {
                info!(ticks = state.ticks, "quit requested");
                state.loop_state = LoopState::Exited;
                return StepResult {
                    event: StepEvent::Quit,
                    new_record: false,
                    loop_state: LoopState::Exited,
                };
            }
            InputPoll::Heading(direction) => state.snake.request_direction(direction),
            InputPoll::None => {}
        }

        state.snake.advance(&state.board);
        state.ticks += 1;

        let (event, new_record) = self.check_collisions(state);

        StepResult {
            event,
            new_record,
            loop_state: state.loop_state,
        }
    }

    /// Resolve food and self collisions for the current head.
    ///
    /// Returns the event and whether a new best length was recorded.
    pub fn check_collisions(&mut self, state: &mut GameState) -> (StepEvent, bool) {
        let head = state.snake.head();
        let policy = self.config.food_policy;

        if head == state.food.position {
            state.snake.grow();
            state
                .food
                .relocate(&state.board, &state.snake, policy, &mut self.rng);
            debug!(
                length = state.snake.length,
                food_x = state.food.position.x,
                food_y = state.food.position.y,
                "ate food"
            );
            return (StepEvent::AteFood, false);
        }

        if state.snake.collides_with_body(head) {
            let length = state.snake.length;
            let new_record = state.snake.reset();
            state
                .food
                .relocate(&state.board, &state.snake, policy, &mut self.rng);

            info!(
                length,
                best_length = state.snake.best_length,
                "snake hit itself, resetting"
            );
            if new_record {
                info!(best_length = state.snake.best_length, "new best length");
            }
            return (StepEvent::SelfCollision { length }, new_record);
        }

        (StepEvent::Moved, false)
    }
}
