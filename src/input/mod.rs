pub mod handler;
pub mod queue;

pub use handler::InputHandler;
pub use queue::InputQueue;
