//! Typed host boundary between the workspace runtime and the browser environment.
//!
//! The runtime only ever talks to the traits in this crate; the wasm32 adapters
//! that drive the real `HtmlAudioElement`, the gradient backdrop renderer, and
//! the window viewport live behind `cfg(target_arch = "wasm32")` so reducer and
//! layout code stays testable on the host toolchain.

mod audio;
mod backdrop;
mod viewport;

pub use audio::{audio_handle, AudioHandle};
pub use backdrop::{
    backdrop_handle, BackdropColor, BackdropConfig, BackdropHandle, BACKDROP_CANVAS_ID,
};
pub use viewport::{viewport_size, FALLBACK_VIEWPORT};
