//! CPU-side RGBA surface.
//!
//! Software fallback with Canvas2D semantics on top of a `tiny_skia::Pixmap`:
//! source-over blending, a global alpha, and scaled image draws. Nearest
//! sampling is enough for sprites this small.

use tiny_skia::{BlendMode, Color, FilterQuality, Paint, Pixmap, PixmapPaint, Rect, Transform};

use super::pixel::Rgba8;
use super::traits::Surface;
use crate::error::{HeartError, Result};
use crate::systems::sprite::Sprite;

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    pixmap: Pixmap,
    global_alpha: f64,
}

impl PixelCanvas {
    /// A transparent canvas. Zero-sized canvases are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            pixmap: Self::blank(width, height)?,
            global_alpha: 1.0,
        })
    }

    fn blank(width: u32, height: u32) -> Result<Pixmap> {
        Pixmap::new(width, height).ok_or(HeartError::EmptySurface {
            width: width as f64,
            height: height as f64,
        })
    }

    /// Change dimensions. Content is discarded, as with a canvas element.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.pixmap = Self::blank(width, height)?;
        Ok(())
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.pixmap.pixels().iter().copied().map(Rgba8::from)
    }

    /// Straight-alpha RGBA bytes, as `getImageData` would return them.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let pixels: Vec<Rgba8> = self.pixels().collect();
        bytemuck::cast_slice(&pixels).to_vec()
    }

    /// Straight-alpha pixel at `(x, y)`; transparent outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        self.pixmap.pixel(x, y).map(Rgba8::from).unwrap_or_default()
    }

    pub fn global_alpha(&self) -> f64 {
        self.global_alpha
    }
}

impl Surface for PixelCanvas {
    type Image = Sprite;

    fn width(&self) -> f64 {
        self.pixmap.width() as f64
    }

    fn height(&self) -> f64 {
        self.pixmap.height() as f64
    }

    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) else {
            return;
        };
        let paint = Paint {
            blend_mode: BlendMode::Clear,
            anti_alias: false,
            ..Paint::default()
        };
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn clear_all(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        // Canvas2D ignores out-of-range values; clamping is close enough here.
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn draw_image(&mut self, image: &Sprite, x: f64, y: f64, w: f64, h: f64) {
        if w <= 0.0 || h <= 0.0 || self.global_alpha <= 0.0 {
            return;
        }
        let sx = w / image.width_px() as f64;
        let sy = h / image.height_px() as f64;
        let transform = Transform::from_row(sx as f32, 0.0, 0.0, sy as f32, x as f32, y as f32);
        let paint = PixmapPaint {
            opacity: self.global_alpha as f32,
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(0, 0, image.pixmap().as_ref(), &paint, transform, None);
    }
}
