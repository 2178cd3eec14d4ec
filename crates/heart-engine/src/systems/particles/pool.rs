//! Fixed-capacity ring buffer of particle slots.

use super::particle::Particle;
use crate::error::{HeartError, Result};
use crate::renderer::traits::Surface;

/// Lossy FIFO ring of particles.
///
/// Slots are allocated once in [`new`](Self::new) and recycled forever. Live
/// particles occupy `[first_active, first_free)` modulo capacity, oldest
/// first. Because every particle shares the same lifetime, they expire in
/// spawn order and only ever retire from the front.
///
/// When the ring is full, [`add`](Self::add) overwrites the oldest live
/// particle. The spawn rate is normally tuned so this barely happens, but the
/// eviction is part of the contract.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: Vec<Particle>,
    first_active: usize,
    first_free: usize,
    /// Number of live particles. Disambiguates empty from full when the two
    /// indices coincide.
    len: usize,
    duration: f64,
    effect: f64,
}

impl ParticlePool {
    /// Allocate `capacity` slots. `duration` is the particle lifetime in
    /// seconds, `effect` the acceleration coefficient handed to every particle.
    pub fn new(capacity: usize, duration: f64, effect: f64) -> Result<Self> {
        if capacity == 0 {
            return Err(HeartError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![Particle::new(); capacity],
            first_active: 0,
            first_free: 0,
            len: 0,
            duration,
            effect,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live particle count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Slot index of the oldest live particle.
    pub fn first_active(&self) -> usize {
        self.first_active
    }

    /// Slot index the next [`add`](Self::add) writes to.
    pub fn first_free(&self) -> usize {
        self.first_free
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    fn wrap(&self, index: usize) -> usize {
        if index >= self.slots.len() {
            index - self.slots.len()
        } else {
            index
        }
    }

    /// Slot ranges covering the active range: the run from `first_active`
    /// towards the end, then the wrapped run from slot 0.
    fn active_ranges(&self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let cap = self.slots.len();
        let end = self.first_active + self.len;
        if end <= cap {
            (self.first_active..end, 0..0)
        } else {
            (self.first_active..cap, 0..end - cap)
        }
    }

    /// Spawn a particle at `(x, y)` with velocity `(dx, dy)`.
    pub fn add(&mut self, x: f64, y: f64, dx: f64, dy: f64) {
        let effect = self.effect;
        self.slots[self.first_free].initialize(x, y, dx, dy, effect);

        self.first_free = self.wrap(self.first_free + 1);
        if self.len == self.slots.len() {
            // full: the slot just written held the oldest particle
            self.first_active = self.wrap(self.first_active + 1);
        } else {
            self.len += 1;
        }
    }

    /// Age every live particle by `dt`, then retire expired ones from the front.
    pub fn update(&mut self, dt: f64) {
        let (head, tail) = self.active_ranges();
        for particle in &mut self.slots[head] {
            particle.update(dt);
        }
        for particle in &mut self.slots[tail] {
            particle.update(dt);
        }

        while self.len > 0 && self.slots[self.first_active].is_expired(self.duration) {
            self.first_active = self.wrap(self.first_active + 1);
            self.len -= 1;
        }
    }

    /// Draw live particles oldest first, so newer ones paint on top.
    pub fn draw<S: Surface>(&self, surface: &mut S, image: &S::Image) {
        for particle in self.iter() {
            particle.draw(surface, image, self.duration);
        }
    }

    /// Live particles in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        let (head, tail) = self.active_ranges();
        self.slots[head].iter().chain(self.slots[tail].iter())
    }

    /// Drop every live particle. Slots stay allocated.
    pub fn clear(&mut self) {
        self.first_active = 0;
        self.first_free = 0;
        self.len = 0;
    }
}
