//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end in `modes` drives it one tick at a time.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, InputPoll};
pub use board::Board;
pub use config::{GameConfig, Palette, Rgb};
pub use engine::{GameEngine, StepEvent, StepResult};
pub use food::{Food, FoodPolicy, randomize_position};
pub use state::{Cell, GameState, LoopState, RenderView, Snake};
