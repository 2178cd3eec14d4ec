//! Particle lifecycle: individual particles, the ring-buffer pool that owns
//! them, and the random source used to place new ones.

mod particle;
mod pool;
mod rng;

pub use particle::Particle;
pub use pool::ParticlePool;
pub use rng::{RandomSource, Rng};
