//! Contracts for the host-side collaborators the animation loop talks to.
//!
//! The engine never touches a canvas or a timer directly. A web host implements
//! these on top of `CanvasRenderingContext2d` and `requestAnimationFrame`
//! (see the `heart-web` crate); [`PixelCanvas`](super::canvas::PixelCanvas) is
//! a CPU implementation used for headless rendering and tests.

/// An image that can be blitted onto a [`Surface`].
pub trait SpriteImage {
    /// Native width in pixels.
    fn width(&self) -> f64;
}

/// A 2D drawing surface with Canvas2D-like semantics.
pub trait Surface {
    /// Image handle type this surface can draw.
    type Image: SpriteImage;

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Reset the given region to fully transparent.
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Opacity applied to subsequent draws, in `[0, 1]`.
    fn set_global_alpha(&mut self, alpha: f64);

    /// Draw `image` scaled into the rectangle at `(x, y)` of size `w` x `h`.
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, w: f64, h: f64);

    /// Clear the whole surface.
    fn clear_all(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear(0.0, 0.0, w, h);
    }
}

/// Display-refresh scheduling primitive.
///
/// The host owns the callback; whenever a requested frame fires it calls
/// [`AnimationDriver::frame`](crate::api::driver::AnimationDriver::frame)
/// with the frame timestamp in milliseconds.
pub trait FrameScheduler {
    /// Identifies a pending request so it can be cancelled.
    type Handle;

    /// Ask for one callback on the next display refresh. Returns `None` when
    /// the host cannot schedule frames any more.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Cancel a request made with [`request_frame`](Self::request_frame).
    fn cancel_frame(&mut self, handle: Self::Handle);
}
