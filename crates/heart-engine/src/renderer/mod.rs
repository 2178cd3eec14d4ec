pub mod canvas;
pub mod pixel;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types for convenient access
pub use canvas::PixelCanvas;
pub use pixel::Rgba8;
pub use traits::{FrameScheduler, SpriteImage, Surface};
