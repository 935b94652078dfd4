//! Host-side execution of reducer effects and environment queries.
//!
//! Keeps browser side effects (audio channel, backdrop renderer, viewport)
//! behind one typed bundle so the reducer stays pure and testable.

use std::rc::Rc;

use leptos::{Callable, Callback};
use platform_host::{
    audio_handle, backdrop_handle, AudioHandle, BackdropConfig, BackdropHandle,
    BACKDROP_CANVAS_ID,
};

use crate::catalog::AUDIO_ELEMENT_ID;
use crate::reducer::{RuntimeEffect, WorkspaceAction};

#[derive(Clone)]
/// Host service bundle for workspace side effects.
pub struct WorkspaceHostContext {
    audio: Rc<dyn AudioHandle>,
    backdrop: Rc<dyn BackdropHandle>,
}

impl Default for WorkspaceHostContext {
    fn default() -> Self {
        Self {
            audio: audio_handle(AUDIO_ELEMENT_ID),
            backdrop: backdrop_handle(BACKDROP_CANVAS_ID),
        }
    }
}

impl WorkspaceHostContext {
    /// Current viewport size available to the workspace.
    pub fn viewport(&self) -> (i32, i32) {
        platform_host::viewport_size()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    ///
    /// The playback request is fire-and-forget: its outcome loops back into
    /// the reducer as [`WorkspaceAction::PlaybackSettled`], so a rejected
    /// autoplay simply reads as paused.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect, dispatch: Callback<WorkspaceAction>) {
        match effect {
            RuntimeEffect::StartBackdrop => self.backdrop.start(&BackdropConfig::default()),
            RuntimeEffect::StopBackdrop => self.backdrop.stop(),
            RuntimeEffect::RequestPlayback => {
                self.audio.set_looping(true);
                self.audio.request_play(Box::new(move |started| {
                    dispatch.call(WorkspaceAction::PlaybackSettled { playing: started });
                }));
            }
            RuntimeEffect::PausePlayback => self.audio.pause(),
            RuntimeEffect::SetAudioMuted(muted) => self.audio.set_muted(muted),
        }
    }
}
