pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::HeartConfig;
pub use api::driver::AnimationDriver;
pub use core::time::FrameClock;
pub use core::vector::Vector2;
pub use error::{HeartError, Result};
pub use renderer::canvas::PixelCanvas;
pub use renderer::pixel::Rgba8;
pub use renderer::traits::{FrameScheduler, SpriteImage, Surface};
pub use systems::heart::{contour, point_on_heart, spawn_parameter};
pub use systems::particles::{Particle, ParticlePool, RandomSource, Rng};
pub use systems::sprite::{Sprite, SpriteBuilder};
