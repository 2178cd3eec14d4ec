pub mod runner;

pub use runner::{CanvasSprite, CanvasSurface, JsRandom, RafScheduler};

use std::cell::RefCell;

use heart_engine::{AnimationDriver, HeartConfig, HeartError, SpriteBuilder};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

type WebDriver = AnimationDriver<CanvasSurface, RafScheduler, JsRandom>;

thread_local! {
    static DRIVER: RefCell<Option<WebDriver>> = const { RefCell::new(None) };
    static ON_RESIZE: RefCell<Option<Closure<dyn FnMut()>>> = const { RefCell::new(None) };
}

fn with_driver<R>(f: impl FnOnce(&mut WebDriver) -> R) -> Option<R> {
    DRIVER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn js_error(err: HeartError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Start the heart on the `<canvas>` with id `canvas_id`.
///
/// `config_json` optionally overrides the default tunables. Any earlier
/// animation is stopped and replaced.
#[wasm_bindgen]
pub fn heart_start(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => HeartConfig::from_json(&json).map_err(js_error)?,
        None => HeartConfig::default(),
    };
    config.validate().map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id:?}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;

    let mut surface = CanvasSurface::new(canvas)?;
    surface.fit_to_client();

    let sprite = SpriteBuilder::new(config.sprite_size, config.color)
        .build()
        .map_err(js_error)?;
    let sprite = CanvasSprite::upload(&document, &sprite)?;

    let scheduler = RafScheduler::new(window.clone(), |timestamp: f64| {
        with_driver(|d| d.frame(timestamp));
    });

    let driver = AnimationDriver::new(config, surface, sprite, scheduler, JsRandom)
        .map_err(js_error)?;

    heart_stop();
    DRIVER.with(|cell| *cell.borrow_mut() = Some(driver));

    ON_RESIZE.with(|cell| {
        let on_resize = Closure::wrap(Box::new(heart_resize) as Box<dyn FnMut()>);
        window.set_onresize(Some(on_resize.as_ref().unchecked_ref()));
        *cell.borrow_mut() = Some(on_resize);
    });

    with_driver(|d| d.start());
    log::info!("heart-web: started on #{}", canvas_id);
    Ok(())
}

/// Stop the animation. The next scheduled frame is cancelled.
#[wasm_bindgen]
pub fn heart_stop() {
    with_driver(|d| d.stop());
}

/// Resume after [`heart_stop`].
#[wasm_bindgen]
pub fn heart_resume() {
    with_driver(|d| d.start());
}

/// Resize the drawing buffer to the canvas element's current layout size.
#[wasm_bindgen]
pub fn heart_resize() {
    with_driver(|d| d.surface_mut().fit_to_client());
}

/// Number of live particles.
#[wasm_bindgen]
pub fn heart_particle_count() -> u32 {
    with_driver(|d| d.pool().len() as u32).unwrap_or(0)
}
