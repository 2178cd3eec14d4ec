pub mod time;
pub mod vector;

pub use time::FrameClock;
pub use vector::Vector2;
