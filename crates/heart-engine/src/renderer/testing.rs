//! Test doubles for the collaborator traits.

use super::traits::{FrameScheduler, SpriteImage, Surface};

/// Image stand-in that only knows its width.
#[derive(Debug, Clone, Copy)]
pub struct TestImage(pub f64);

impl SpriteImage for TestImage {
    fn width(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub alpha: f64,
}

/// Surface that records draw calls and clears instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub alpha: f64,
    pub clears: usize,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            alpha: 1.0,
            ..Default::default()
        }
    }
}

impl Surface for RecordingSurface {
    type Image = TestImage;

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
        self.clears += 1;
        self.calls.clear();
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    fn draw_image(&mut self, _image: &TestImage, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(DrawCall { x, y, w, h, alpha: self.alpha });
    }
}

/// Scheduler that hands out sequential handles and remembers what is pending.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: u32,
    pub pending: Vec<u32>,
    pub cancelled: Vec<u32>,
    /// When set, `request_frame` refuses.
    pub exhausted: bool,
}

impl ManualScheduler {
    /// Simulate the display refresh consuming the oldest pending request.
    pub fn fire(&mut self) -> Option<u32> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.exhausted {
            return None;
        }
        self.next += 1;
        self.pending.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.pending.retain(|&h| h != handle);
        self.cancelled.push(handle);
    }
}
