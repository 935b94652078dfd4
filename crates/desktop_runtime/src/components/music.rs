use super::*;
use crate::catalog::{AUDIO_ELEMENT_ID, AUDIO_TRACK_SRC};
use system_ui::{FloatingPanel, IconButton};

#[component]
pub(super) fn MusicPanel() -> impl IntoView {
    let runtime = use_workspace_runtime();
    let music = Signal::derive(move || runtime.state.get().music);

    let style = Signal::derive(move || {
        let panel = music.get();
        format!("left:{}px;top:{}px;", panel.position.x, panel.position.y)
    });

    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let (viewport_w, viewport_h) = runtime.viewport();
        runtime.dispatch_action(WorkspaceAction::BeginPanelDrag {
            pointer: pointer_from_pointer_event(&ev),
            viewport_w,
            viewport_h,
        });
    });
    let toggle_playback = Callback::new(move |_| {
        runtime.dispatch_action(WorkspaceAction::TogglePlayback);
    });
    let toggle_mute = Callback::new(move |_| {
        runtime.dispatch_action(WorkspaceAction::ToggleMute);
    });
    let close = Callback::new(move |_| {
        runtime.dispatch_action(WorkspaceAction::CloseMusicPanel);
    });

    let playback_icon = Signal::derive(move || {
        if music.get().playing {
            IconName::Pause
        } else {
            IconName::Play
        }
    });
    let playback_label = Signal::derive(move || {
        if music.get().playing {
            "Pause".to_string()
        } else {
            "Play".to_string()
        }
    });
    let mute_icon = Signal::derive(move || {
        if music.get().muted {
            IconName::SpeakerMute
        } else {
            IconName::SpeakerOn
        }
    });
    let mute_label = Signal::derive(move || {
        if music.get().muted {
            "Unmute".to_string()
        } else {
            "Mute".to_string()
        }
    });

    view! {
        <FloatingPanel
            layout_class="music-panel"
            aria_label="Music player"
            style=style
            on_pointerdown=begin_drag
        >
            <header data-ui-slot="panel-header">
                <span data-ui-slot="panel-title">"RETRO SOUNDS"</span>
                <IconButton
                    icon=IconName::Dismiss
                    size=IconSize::Xs
                    aria_label="Close music player"
                    on_click=close
                />
            </header>

            <div data-ui-slot="disc-window">
                <div
                    data-ui-slot="disc"
                    data-ui-spinning=move || if music.get().playing { "true" } else { "false" }
                    aria-hidden="true"
                >
                    <div data-ui-slot="disc-hub"></div>
                </div>
                <p data-ui-slot="status">
                    {move || if music.get().playing { "\u{25BA} PLAYING" } else { "\u{275A}\u{275A} PAUSED" }}
                </p>
            </div>

            <div data-ui-slot="transport">
                <IconButton icon=playback_icon aria_label=playback_label on_click=toggle_playback />
                <IconButton icon=mute_icon aria_label=mute_label on_click=toggle_mute />
            </div>

            <audio id=AUDIO_ELEMENT_ID src=AUDIO_TRACK_SRC loop=true></audio>
        </FloatingPanel>
    }
}
