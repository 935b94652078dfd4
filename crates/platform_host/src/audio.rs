//! Audio playback handle for the single workspace music channel.
//!
//! Playback start is best effort: browsers may reject `play()` under autoplay
//! policy, so the request settles through a callback instead of returning a
//! result. Callers fold a `false` settle into their own "paused" state.

use std::rc::Rc;

/// Control surface over the one logical audio channel owned by the music panel.
pub trait AudioHandle {
    /// Requests playback start and reports whether it actually began.
    fn request_play(&self, on_settled: Box<dyn FnOnce(bool)>);
    /// Pauses playback. No-op when nothing is playing.
    fn pause(&self);
    /// Mutes or unmutes the channel.
    fn set_muted(&self, muted: bool);
    /// Enables or disables looping.
    fn set_looping(&self, looping: bool);
}

/// Returns the audio handle for the current target.
pub fn audio_handle(element_id: &'static str) -> Rc<dyn AudioHandle> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(web::MediaElementAudio { element_id })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(NullAudio { element_id })
    }
}

#[cfg(not(target_arch = "wasm32"))]
struct NullAudio {
    #[allow(dead_code)]
    element_id: &'static str,
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioHandle for NullAudio {
    fn request_play(&self, on_settled: Box<dyn FnOnce(bool)>) {
        // No audio device off-browser; settle as if autoplay was blocked.
        on_settled(false);
    }

    fn pause(&self) {}

    fn set_muted(&self, _muted: bool) {}

    fn set_looping(&self, _looping: bool) {}
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::AudioHandle;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    pub(super) struct MediaElementAudio {
        pub(super) element_id: &'static str,
    }

    impl MediaElementAudio {
        fn element(&self) -> Option<web_sys::HtmlMediaElement> {
            let document = web_sys::window()?.document()?;
            let element = document.get_element_by_id(self.element_id)?;
            element.dyn_into::<web_sys::HtmlMediaElement>().ok()
        }
    }

    impl AudioHandle for MediaElementAudio {
        fn request_play(&self, on_settled: Box<dyn FnOnce(bool)>) {
            let Some(element) = self.element() else {
                on_settled(false);
                return;
            };
            match element.play() {
                Ok(promise) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        let started = JsFuture::from(promise).await.is_ok();
                        on_settled(started);
                    });
                }
                Err(_) => on_settled(false),
            }
        }

        fn pause(&self) {
            if let Some(element) = self.element() {
                let _ = element.pause();
            }
        }

        fn set_muted(&self, muted: bool) {
            if let Some(element) = self.element() {
                element.set_muted(muted);
            }
        }

        fn set_looping(&self, looping: bool) {
            if let Some(element) = self.element() {
                element.set_loop(looping);
            }
        }
    }
}
