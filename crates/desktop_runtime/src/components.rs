//! Desktop shell UI composition and pointer routing.

mod chat;
mod music;
mod taskbar;
mod window;

use leptos::*;

use self::{chat::ChatPanel, music::MusicPanel, taskbar::WorkspaceTaskbar, window::FolderWindow};
use crate::catalog::{self, DESKTOP_WALLPAPER};
use crate::model::{FolderId, PointerPosition};
use crate::reducer::WorkspaceAction;
use crate::runtime_context::use_workspace_runtime;
use system_ui::{
    DesktopBackdrop, DesktopIconLayer, DesktopIconSprite, DesktopRoot, DesktopWindowLayer, Icon,
    IconName, IconSize,
};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[component]
/// Renders the desktop: wallpaper, scattered icons, windows, panels, taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_workspace_runtime();
    let state = runtime.state;

    // Re-layout from scratch on viewport resize; manual icon repositioning
    // does not survive it.
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let (viewport_w, viewport_h) = runtime.viewport();
        runtime.dispatch_action(WorkspaceAction::ScatterIcons {
            viewport_w,
            viewport_h,
        });
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.icon_drag.is_some() {
            runtime.dispatch_action(WorkspaceAction::UpdateIconDrag { pointer });
        }
        if interaction.window_drag.is_some() {
            runtime.dispatch_action(WorkspaceAction::UpdateWindowDrag { pointer });
        }
        if interaction.window_resize.is_some() {
            runtime.dispatch_action(WorkspaceAction::UpdateWindowResize { pointer });
        }
        if interaction.panel_drag.is_some() {
            runtime.dispatch_action(WorkspaceAction::UpdatePanelDrag { pointer });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if interaction.icon_drag.is_some() {
            runtime.dispatch_action(WorkspaceAction::EndIconDrag);
        }
        if interaction.window_drag.is_some() {
            runtime.dispatch_action(WorkspaceAction::EndWindowDrag);
        }
        if interaction.window_resize.is_some() {
            runtime.dispatch_action(WorkspaceAction::EndWindowResize);
        }
        if interaction.panel_drag.is_some() {
            runtime.dispatch_action(WorkspaceAction::EndPanelDrag);
        }
    });

    view! {
        <DesktopRoot
            id="workspace-root"
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(WorkspaceAction::ClearSelection);
            })
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
            on_pointercancel=on_pointer_end
        >
            <DesktopBackdrop style=format!("background-image:url('{}');", DESKTOP_WALLPAPER)>
                <div data-ui-slot="scrim" aria-hidden="true"></div>

                <DesktopIconLayer>
                    <For each=move || state.get().icons key=|icon| icon.folder let:icon>
                        <WorkspaceIcon folder=icon.folder />
                    </For>
                </DesktopIconLayer>

                <DesktopWindowLayer>
                    <For each=move || state.get().windows key=|win| win.folder let:win>
                        <FolderWindow folder=win.folder />
                    </For>
                </DesktopWindowLayer>

                <Show when=move || state.get().chat_open fallback=|| ()>
                    <ChatPanel />
                </Show>
                <Show when=move || state.get().music_open fallback=|| ()>
                    <MusicPanel />
                </Show>
            </DesktopBackdrop>

            <WorkspaceTaskbar />
        </DesktopRoot>
    }
}

#[component]
fn WorkspaceIcon(folder: FolderId) -> impl IntoView {
    let runtime = use_workspace_runtime();
    let icon = Signal::derive(move || {
        runtime
            .state
            .get()
            .icons
            .into_iter()
            .find(|i| i.folder == folder)
    });

    let record = catalog::folder(folder);
    let title = record.map(|r| r.title).unwrap_or("");
    let thumbnail = record.and_then(|r| r.thumbnail());

    let style = Signal::derive(move || {
        icon.get()
            .map(|i| {
                format!(
                    "left:{}px;top:{}px;z-index:{};",
                    i.position.x, i.position.y, i.z_layer
                )
            })
            .unwrap_or_default()
    });
    let selected = Signal::derive(move || icon.get().map(|i| i.selected).unwrap_or(false));

    let on_click = Callback::new(move |ev: ev::MouseEvent| {
        // Selection must not bubble into the background deselect handler.
        ev.stop_propagation();
        runtime.dispatch_action(WorkspaceAction::SelectIcon { folder });
    });
    let on_dblclick = Callback::new(move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(WorkspaceAction::OpenFolder { folder });
    });
    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        runtime.dispatch_action(WorkspaceAction::BeginIconDrag {
            folder,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! {
        <DesktopIconSprite
            style=style
            selected=selected
            title=title.to_string()
            on_click=on_click
            on_dblclick=on_dblclick
            on_pointerdown=on_pointerdown
        >
            <span data-ui-slot="icon-art">
                {match thumbnail {
                    Some(src) => view! { <img src=src alt=title loading="lazy" /> }.into_view(),
                    None => view! { <Icon icon=IconName::FolderClosed size=IconSize::Lg /> }
                        .into_view(),
                }}
            </span>
            <span data-ui-slot="icon-label">{title}</span>
        </DesktopIconSprite>
    }
}
