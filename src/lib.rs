//! Grid Snake - classic Snake on a wraparound grid
//!
//! This library provides:
//! - Core game logic (game module), free of I/O
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session counters (metrics module)
//! - The terminal play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
