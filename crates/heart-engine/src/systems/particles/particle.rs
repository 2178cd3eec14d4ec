//! A single emitted particle.

use crate::core::vector::Vector2;
use crate::extensions::easing::{ease_out_cubic, fade_out};
use crate::renderer::traits::{SpriteImage, Surface};

/// Position, velocity, constant acceleration and age of one particle slot.
///
/// Slots live inside a [`ParticlePool`](super::pool::ParticlePool) for the
/// whole run; [`initialize`](Self::initialize) recycles one in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    /// Seconds since the particle was (re)initialized.
    pub age: f64,
}

impl Particle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recreate the particle at `(x, y)` moving with `(dx, dy)`.
    ///
    /// Acceleration is the velocity scaled by `effect`; a negative coefficient
    /// decelerates the particle and curls it back along its path.
    pub fn initialize(&mut self, x: f64, y: f64, dx: f64, dy: f64, effect: f64) {
        self.position = Vector2::new(x, y);
        self.velocity = Vector2::new(dx, dy);
        self.acceleration = Vector2::new(dx * effect, dy * effect);
        self.age = 0.0;
    }

    /// Advance by `dt` seconds (semi-implicit Euler).
    ///
    /// Position moves with the velocity from before this step; velocity then
    /// picks up the acceleration.
    pub fn update(&mut self, dt: f64) {
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        self.velocity.x += self.acceleration.x * dt;
        self.velocity.y += self.acceleration.y * dt;
        self.age += dt;
    }

    /// Fraction of the lifetime already used.
    #[inline]
    pub fn life_ratio(&self, duration: f64) -> f64 {
        self.age / duration
    }

    /// Opacity: 1 when born, 0 at the end of life.
    pub fn opacity(&self, duration: f64) -> f64 {
        fade_out(self.life_ratio(duration))
    }

    /// Size multiplier: grows from 0 towards 1 with a cubic ease-out.
    pub fn size_factor(&self, duration: f64) -> f64 {
        ease_out_cubic(self.life_ratio(duration))
    }

    pub fn is_expired(&self, duration: f64) -> bool {
        self.age >= duration
    }

    /// Blit `image` centred on the particle, scaled and faded by age.
    pub fn draw<S: Surface>(&self, surface: &mut S, image: &S::Image, duration: f64) {
        let size = image.width() * self.size_factor(duration);
        surface.set_global_alpha(self.opacity(duration));
        surface.draw_image(
            image,
            self.position.x - size / 2.0,
            self.position.y - size / 2.0,
            size,
            size,
        );
    }
}
