//! Browser viewport queries with a deterministic non-wasm fallback.

/// Viewport reported on targets without a browser window (tests, tooling).
pub const FALLBACK_VIEWPORT: (i32, i32) = (1280, 800);

/// Returns the current inner viewport size in CSS pixels.
pub fn viewport_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(FALLBACK_VIEWPORT.0 as f64);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(FALLBACK_VIEWPORT.1 as f64);
            return (width as i32, height as i32);
        }
        FALLBACK_VIEWPORT
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_VIEWPORT
    }
}
