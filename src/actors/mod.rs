//! Diagram actors

mod fps;
mod line;

pub use fps::Fps;
pub use line::Line;
