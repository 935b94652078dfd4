//! Decorative animated-gradient backdrop consumed as an opaque renderer.
//!
//! The renderer itself is a page-level JS global (a `NeatGradient`-style
//! constructor taking a config object plus a canvas reference and exposing
//! `destroy()`). This module only owns the `start(config)`/`stop()` lifecycle;
//! a missing global or canvas degrades to a plain background, never an error.

use std::rc::Rc;

use serde::Serialize;

/// DOM id of the canvas the backdrop renderer draws into.
pub const BACKDROP_CANVAS_ID: &str = "site-backdrop-canvas";

/// One gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackdropColor {
    /// CSS hex color.
    pub color: &'static str,
    /// Whether the stop participates in blending.
    pub enabled: bool,
}

/// Configuration passed verbatim to the backdrop renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackdropConfig {
    pub colors: Vec<BackdropColor>,
    pub speed: f32,
    pub horizontal_pressure: f32,
    pub vertical_pressure: f32,
    pub wave_frequency_x: f32,
    pub wave_frequency_y: f32,
    pub wave_amplitude: f32,
    pub shadows: f32,
    pub highlights: f32,
    pub color_brightness: f32,
    pub color_saturation: f32,
    pub wireframe: bool,
    pub color_blending: f32,
    pub background_color: &'static str,
    pub background_alpha: f32,
    pub grain_scale: f32,
    pub grain_sparsity: f32,
    pub grain_intensity: f32,
    pub grain_speed: f32,
    pub resolution: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                BackdropColor { color: "#151315", enabled: true },
                BackdropColor { color: "#151213", enabled: true },
                BackdropColor { color: "#400405", enabled: true },
                BackdropColor { color: "#868A8D", enabled: true },
                BackdropColor { color: "#192026", enabled: false },
            ],
            speed: 0.5,
            horizontal_pressure: 2.0,
            vertical_pressure: 2.0,
            wave_frequency_x: 5.0,
            wave_frequency_y: 5.0,
            wave_amplitude: 10.0,
            shadows: 10.0,
            highlights: 0.0,
            color_brightness: 1.1,
            color_saturation: 10.0,
            wireframe: false,
            color_blending: 8.0,
            background_color: "#010615",
            background_alpha: 1.0,
            grain_scale: 100.0,
            grain_sparsity: 0.0,
            grain_intensity: 1.0,
            grain_speed: 3.0,
            resolution: 1.0,
        }
    }
}

/// Lifecycle handle over the backdrop renderer.
pub trait BackdropHandle {
    /// Starts (or restarts) the renderer with the given config.
    fn start(&self, config: &BackdropConfig);
    /// Tears the renderer down.
    fn stop(&self);
}

/// Returns the backdrop handle for the current target.
pub fn backdrop_handle(canvas_id: &'static str) -> Rc<dyn BackdropHandle> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(web::GradientBackdrop::new(canvas_id))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = canvas_id;
        Rc::new(NullBackdrop)
    }
}

#[cfg(not(target_arch = "wasm32"))]
struct NullBackdrop;

#[cfg(not(target_arch = "wasm32"))]
impl BackdropHandle for NullBackdrop {
    fn start(&self, _config: &BackdropConfig) {}

    fn stop(&self) {}
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::{JsCast, JsValue};

    use super::{BackdropConfig, BackdropHandle};

    const RENDERER_GLOBAL: &str = "NeatGradient";

    pub(super) struct GradientBackdrop {
        canvas_id: &'static str,
        instance: RefCell<Option<JsValue>>,
    }

    impl GradientBackdrop {
        pub(super) fn new(canvas_id: &'static str) -> Self {
            Self {
                canvas_id,
                instance: RefCell::new(None),
            }
        }

        fn construct(&self, config: &BackdropConfig) -> Option<JsValue> {
            let window = web_sys::window()?;
            let constructor = js_sys::Reflect::get(&window, &JsValue::from_str(RENDERER_GLOBAL))
                .ok()?
                .dyn_into::<js_sys::Function>()
                .ok()?;
            let canvas = window.document()?.get_element_by_id(self.canvas_id)?;
            let options = serde_wasm_bindgen::to_value(config).ok()?;
            js_sys::Reflect::set(&options, &JsValue::from_str("ref"), canvas.as_ref()).ok()?;
            let args = js_sys::Array::of1(&options);
            js_sys::Reflect::construct(&constructor, &args).ok()
        }
    }

    impl BackdropHandle for GradientBackdrop {
        fn start(&self, config: &BackdropConfig) {
            self.stop();
            *self.instance.borrow_mut() = self.construct(config);
        }

        fn stop(&self) {
            if let Some(instance) = self.instance.borrow_mut().take() {
                if let Ok(destroy) =
                    js_sys::Reflect::get(&instance, &JsValue::from_str("destroy"))
                {
                    if let Ok(destroy) = destroy.dyn_into::<js_sys::Function>() {
                        let _ = destroy.call0(&instance);
                    }
                }
            }
        }
    }
}
