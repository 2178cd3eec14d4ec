//! Heart-shaped particle sprite.
//!
//! Built once at startup: the heart outline is traced into a path and filled
//! into a small anti-aliased pixmap. The result is immutable and shared by
//! every particle draw.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::core::vector::Vector2;
use crate::error::{HeartError, Result};
use crate::renderer::pixel::Rgba8;
use crate::renderer::traits::SpriteImage;
use crate::systems::heart;

/// Curve units per sprite pixel, scaled by sprite size: `size / 550`.
const CURVE_SCALE_DIVISOR: f64 = 550.0;

/// Immutable sprite image, stored premultiplied.
#[derive(Debug, Clone)]
pub struct Sprite {
    pixmap: Pixmap,
}

impl Sprite {
    /// Wrap straight-alpha pixels. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(HeartError::InvalidConfig(format!(
                "sprite has {} pixels, expected {}x{}",
                pixels.len(),
                width,
                height
            )));
        }
        let mut pixmap = Pixmap::new(width, height).ok_or(HeartError::EmptySprite)?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(pixels) {
            *dst = src.premultiply();
        }
        Ok(Self { pixmap })
    }

    pub fn width_px(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height_px(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha pixels in row-major order.
    pub fn pixels(&self) -> Vec<Rgba8> {
        self.pixmap.pixels().iter().copied().map(Rgba8::from).collect()
    }

    /// Straight-alpha RGBA bytes, ready for `ImageData`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.pixels()).to_vec()
    }

    /// Straight-alpha pixel at `(x, y)`; transparent outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        self.pixmap.pixel(x, y).map(Rgba8::from).unwrap_or_default()
    }

    /// Number of pixels with any coverage.
    pub fn covered_pixels(&self) -> usize {
        self.pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }
}

impl SpriteImage for Sprite {
    fn width(&self) -> f64 {
        self.pixmap.width() as f64
    }
}

/// Rasterizes the heart outline into a square [`Sprite`].
#[derive(Debug, Clone)]
pub struct SpriteBuilder {
    size: u32,
    color: Rgba8,
    anti_alias: bool,
}

impl SpriteBuilder {
    pub fn new(size: u32, color: Rgba8) -> Self {
        Self {
            size,
            color,
            anti_alias: true,
        }
    }

    /// Hard-edged fill: every pixel is either the full colour or transparent.
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    /// Heart outline in sprite pixel space (y down).
    ///
    /// The curve origin lands at `(size / 3, size / 3)`, which leaves the heart
    /// off-centre within its square the same way the canvas-drawn sprite is.
    pub fn outline(&self) -> Vec<Vector2> {
        let size = self.size as f64;
        let offset = size / 3.0;
        let scale = size / CURVE_SCALE_DIVISOR;
        heart::contour()
            .map(|p| Vector2::new(offset + p.x * scale, offset - p.y * scale))
            .collect()
    }

    /// Fill the outline. Fails on a zero size.
    pub fn build(&self) -> Result<Sprite> {
        if self.size == 0 {
            return Err(HeartError::InvalidConfig("sprite size must be at least 1".into()));
        }

        let outline = self.outline();
        let mut pb = PathBuilder::new();
        pb.move_to(outline[0].x as f32, outline[0].y as f32);
        for p in &outline[1..] {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        let path = pb
            .finish()
            .ok_or_else(|| HeartError::Rasterize("heart outline has no area".into()))?;

        let mut pixmap = Pixmap::new(self.size, self.size)
            .ok_or_else(|| HeartError::Rasterize("failed to create pixmap".into()))?;
        let mut paint = Paint::default();
        let Rgba8 { r, g, b, a } = self.color;
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.anti_alias;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        let sprite = Sprite { pixmap };
        log::info!(
            "heart sprite: {}x{} px, {} outline points, {} covered pixels",
            self.size,
            self.size,
            outline.len(),
            sprite.covered_pixels()
        );
        Ok(sprite)
    }
}
