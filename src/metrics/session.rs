use std::time::{Duration, Instant};

use crate::game::{StepEvent, StepResult};

/// Counters for the current process run, shown in the header
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub food_eaten: u32,
    pub resets: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
            resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_step(&mut self, result: &StepResult) {
        match result.event {
            StepEvent::Moved => {}
            StepEvent::AteFood => self.food_eaten += 1,
            StepEvent::SelfCollision { .. } => self.resets += 1,
            StepEvent::Quit => return,
        }
        self.ticks += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
