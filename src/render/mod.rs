pub mod canvas;
pub mod renderer;

pub use canvas::{Canvas, Tile};
pub use renderer::{Renderer, caption};
