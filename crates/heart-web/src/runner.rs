use heart_engine::{FrameScheduler, RandomSource, Sprite, SpriteImage, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData, Window};

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))
}

/// [`Surface`] backed by an on-page `<canvas>` and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Match the drawing buffer to the element's laid-out size.
    pub fn fit_to_client(&mut self) {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        if width != self.canvas.width() || height != self.canvas.height() {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            log::debug!("canvas resized to {}x{}", width, height);
        }
    }
}

impl Surface for CanvasSurface {
    type Image = CanvasSprite;

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn draw_image(&mut self, image: &CanvasSprite, x: f64, y: f64, w: f64, h: f64) {
        // Only throws for unusable sources, which upload() already rules out.
        let _ = self
            .ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(&image.canvas, x, y, w, h);
    }
}

/// A rasterized [`Sprite`] uploaded once to an offscreen canvas.
pub struct CanvasSprite {
    canvas: HtmlCanvasElement,
    width: u32,
}

impl CanvasSprite {
    pub fn upload(document: &Document, sprite: &Sprite) -> Result<Self, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
        canvas.set_width(sprite.width_px());
        canvas.set_height(sprite.height_px());

        // ImageData wants straight alpha; the sprite pixmap is premultiplied
        let bytes = sprite.to_rgba_bytes();
        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&bytes[..]),
            sprite.width_px(),
            sprite.height_px(),
        )?;
        context_2d(&canvas)?.put_image_data(&data, 0.0, 0.0)?;

        Ok(Self {
            canvas,
            width: sprite.width_px(),
        })
    }
}

impl SpriteImage for CanvasSprite {
    fn width(&self) -> f64 {
        self.width as f64
    }
}

/// [`FrameScheduler`] over `requestAnimationFrame`.
///
/// Owns the JS callback; every request re-registers the same closure.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
        }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle, err);
        }
    }
}

/// `Math.random()` as a [`RandomSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn uniform(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
