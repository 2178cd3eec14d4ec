use crate::api::config::HeartConfig;
use crate::core::time::FrameClock;
use crate::error::{HeartError, Result};
use crate::renderer::traits::{FrameScheduler, SpriteImage, Surface};
use crate::systems::heart::{point_on_heart, spawn_parameter};
use crate::systems::particles::{ParticlePool, RandomSource};

/// Frame loop for the particle heart.
///
/// Owns the drawing surface, the sprite image, the particle pool, the random
/// source and the frame scheduler. The host calls [`frame`](Self::frame)
/// whenever a requested frame fires; each frame ends by requesting the next
/// one until [`stop`](Self::stop) cancels it.
pub struct AnimationDriver<S: Surface, F: FrameScheduler, R: RandomSource> {
    surface: S,
    sprite: S::Image,
    pool: ParticlePool,
    scheduler: F,
    random: R,
    clock: FrameClock,
    config: HeartConfig,
    /// Particles spawned per second.
    particle_rate: f64,
    pending: Option<F::Handle>,
    running: bool,
}

impl<S: Surface, F: FrameScheduler, R: RandomSource> AnimationDriver<S, F, R> {
    /// Validate the config and collaborators and allocate the pool.
    ///
    /// An empty surface or sprite is rejected here so the frame loop itself
    /// never has to fail.
    pub fn new(config: HeartConfig, surface: S, sprite: S::Image, scheduler: F, random: R) -> Result<Self> {
        config.validate()?;
        let (width, height) = (surface.width(), surface.height());
        if !(width > 0.0 && height > 0.0) {
            return Err(HeartError::EmptySurface { width, height });
        }
        if !(sprite.width() > 0.0) {
            return Err(HeartError::EmptySprite);
        }

        let pool = ParticlePool::new(config.capacity, config.duration, config.effect)?;
        let particle_rate = config.particle_rate();
        log::debug!(
            "driver: {}x{} surface, capacity {}, {:.1} particles/s",
            width,
            height,
            config.capacity,
            particle_rate
        );

        Ok(Self {
            surface,
            sprite,
            pool,
            scheduler,
            random,
            clock: FrameClock::new(),
            config,
            particle_rate,
            pending: None,
            running: false,
        })
    }

    /// Request the first frame. No-op while already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.clock.reset();
        log::info!("heart animation started");
        self.schedule_next();
    }

    /// Cancel the pending frame request. The pool keeps its particles, so a
    /// later [`start`](Self::start) resumes where the animation left off.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        log::info!("heart animation stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle one display refresh at `timestamp_ms`, then schedule the next.
    ///
    /// Ignored when the driver is stopped, e.g. for a callback that was already
    /// in flight when `stop` ran.
    pub fn frame(&mut self, timestamp_ms: f64) {
        // the request that brought us here has fired
        self.pending = None;
        if !self.running {
            return;
        }
        let dt = self.clock.tick(timestamp_ms);
        self.step(dt);
        self.schedule_next();
    }

    /// Advance the simulation by `dt` seconds and redraw, without touching
    /// the scheduler.
    pub fn step(&mut self, dt: f64) {
        self.surface.clear_all();

        let count = self.spawn_count(dt);
        self.spawn(count);

        self.pool.update(dt);
        self.pool.draw(&mut self.surface, &self.sprite);
    }

    /// Whole particles to spawn for a frame of `dt` seconds. The fractional
    /// remainder is dropped, not carried to the next frame.
    pub fn spawn_count(&self, dt: f64) -> usize {
        (self.particle_rate * dt) as usize
    }

    /// Anything beyond one pool's worth would be evicted before its first
    /// update, so a long stall (e.g. a backgrounded tab) spawns at most
    /// `capacity` particles.
    fn spawn(&mut self, count: usize) {
        let cx = self.surface.width() / 2.0;
        let cy = self.surface.height() / 2.0;
        for _ in 0..count.min(self.pool.capacity()) {
            let pos = point_on_heart(spawn_parameter(self.random.uniform()));
            let dir = pos.with_length(self.config.velocity);
            // curve space is y-up, the surface is y-down
            self.pool.add(cx + pos.x, cy - pos.y, dir.x, -dir.y);
        }
    }

    fn schedule_next(&mut self) {
        match self.scheduler.request_frame() {
            Some(handle) => self.pending = Some(handle),
            None => {
                log::warn!("frame scheduler unavailable, stopping heart animation");
                self.running = false;
            }
        }
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    pub fn particle_rate(&self) -> f64 {
        self.particle_rate
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for out-of-band changes such as a resize.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
