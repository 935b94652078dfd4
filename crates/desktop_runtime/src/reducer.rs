//! Reducer actions, side-effect intents, and transition logic for the
//! workspace. Every mutation of [`WorkspaceState`] flows through
//! [`reduce_workspace`]; UI components only dispatch actions.

use thiserror::Error;

use crate::boot::BootLink;
use crate::catalog;
use crate::icon_layout::{scatter_layout, z_layer_hint};
use crate::model::{
    FolderId, IconDragSession, IconState, InteractionState, PanelDragSession, PointerPosition,
    Screen, WindowDragSession, WindowResizeSession, WindowState, WorkspaceState,
};
use crate::pointer::DragBounds;
use crate::window_manager;

/// Pointer travel at or below this still counts as a click, not a drag.
pub const ICON_CLICK_DRAG_THRESHOLD_PX: i32 = 4;

/// Music panel footprint used to clamp its drag to the viewport.
pub const MUSIC_PANEL_SIZE: (i32, i32) = (192, 288);

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_workspace`] to mutate [`WorkspaceState`].
pub enum WorkspaceAction {
    /// Leave the hero screen for the desktop, scattering icons for the
    /// given viewport.
    EnterDesktop { viewport_w: i32, viewport_h: i32 },
    /// Return to the hero screen.
    LeaveDesktop,
    /// Recompute the icon layout from scratch (mount and viewport resize).
    ScatterIcons { viewport_w: i32, viewport_h: i32 },
    /// Select exactly this icon, deselecting all others.
    SelectIcon { folder: FolderId },
    /// Deselect every icon (background click).
    ClearSelection,
    /// Open a folder window (double-click or boot link).
    OpenFolder { folder: FolderId },
    /// Close a window, destroying its geometry.
    CloseWindow { folder: FolderId },
    /// Minimize a window, preserving its geometry.
    MinimizeWindow { folder: FolderId },
    /// Restore a minimized window (taskbar token).
    RestoreWindow { folder: FolderId },
    /// Flip a window between normal and maximized.
    ToggleMaximize {
        folder: FolderId,
        viewport_w: i32,
        viewport_h: i32,
    },
    /// Begin dragging a desktop icon (unbounded).
    BeginIconDrag {
        folder: FolderId,
        pointer: PointerPosition,
    },
    /// Update an in-progress icon drag.
    UpdateIconDrag { pointer: PointerPosition },
    /// End the active icon drag.
    EndIconDrag,
    /// Begin dragging a window by its titlebar (viewport-bounded).
    BeginWindowDrag {
        folder: FolderId,
        pointer: PointerPosition,
        viewport_w: i32,
        viewport_h: i32,
    },
    /// Update an in-progress window drag.
    UpdateWindowDrag { pointer: PointerPosition },
    /// End the active window drag.
    EndWindowDrag,
    /// Begin a south-east corner resize.
    BeginWindowResize {
        folder: FolderId,
        pointer: PointerPosition,
    },
    /// Update an in-progress resize.
    UpdateWindowResize { pointer: PointerPosition },
    /// End the active resize.
    EndWindowResize,
    /// Toggle the chat contact popup.
    ToggleChatPanel,
    /// Close the chat contact popup.
    CloseChatPanel,
    /// Toggle the music panel; opening requests playback.
    ToggleMusicPanel,
    /// Close the music panel, pausing playback.
    CloseMusicPanel,
    /// Begin dragging the music panel (viewport-bounded).
    BeginPanelDrag {
        pointer: PointerPosition,
        viewport_w: i32,
        viewport_h: i32,
    },
    /// Update an in-progress panel drag.
    UpdatePanelDrag { pointer: PointerPosition },
    /// End the active panel drag.
    EndPanelDrag,
    /// Toggle play/pause on the music channel.
    TogglePlayback,
    /// Outcome of a playback request; `false` means autoplay was blocked.
    PlaybackSettled { playing: bool },
    /// Toggle the mute flag on the music channel.
    ToggleMute,
    /// Apply a parsed boot link once at startup.
    ApplyBootLink {
        link: BootLink,
        viewport_w: i32,
        viewport_h: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_workspace`] for the host to run.
pub enum RuntimeEffect {
    /// Start the decorative backdrop renderer.
    StartBackdrop,
    /// Tear the backdrop renderer down.
    StopBackdrop,
    /// Best-effort playback start; settles back as
    /// [`WorkspaceAction::PlaybackSettled`].
    RequestPlayback,
    /// Pause the audio channel.
    PausePlayback,
    /// Apply the mute flag to the audio channel.
    SetAudioMuted(bool),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing state that does not exist.
pub enum ReducerError {
    /// The folder id is not in the catalog or not on the desktop.
    #[error("folder not found")]
    UnknownFolder,
    /// The target window has no live state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`WorkspaceAction`] and collects the resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a folder or window that
/// is not present. Callers log and continue; no reducer error is fatal.
pub fn reduce_workspace(
    state: &mut WorkspaceState,
    interaction: &mut InteractionState,
    action: WorkspaceAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        WorkspaceAction::EnterDesktop {
            viewport_w,
            viewport_h,
        } => {
            // The hero screen fires once per keystroke; entering twice is a no-op.
            if state.screen != Screen::Desktop {
                state.screen = Screen::Desktop;
                rebuild_icons(state, viewport_w, viewport_h);
                effects.push(RuntimeEffect::StartBackdrop);
                if state.music_open {
                    effects.push(RuntimeEffect::RequestPlayback);
                }
            }
        }
        WorkspaceAction::LeaveDesktop => {
            if state.screen == Screen::Desktop {
                state.screen = Screen::Hero;
                state.icons.clear();
                state.music.playing = false;
                *interaction = InteractionState::default();
                effects.push(RuntimeEffect::StopBackdrop);
                effects.push(RuntimeEffect::PausePlayback);
            }
        }
        WorkspaceAction::ScatterIcons {
            viewport_w,
            viewport_h,
        } => {
            rebuild_icons(state, viewport_w, viewport_h);
        }
        WorkspaceAction::SelectIcon { folder } => {
            catalog::folder(folder).ok_or(ReducerError::UnknownFolder)?;
            // The click that ends a displacing drag must not re-run selection.
            if interaction.suppress_icon_click.take() != Some(folder) {
                for icon in &mut state.icons {
                    icon.selected = icon.folder == folder;
                }
            }
        }
        WorkspaceAction::ClearSelection => {
            for icon in &mut state.icons {
                icon.selected = false;
            }
        }
        WorkspaceAction::OpenFolder { folder } => {
            catalog::folder(folder).ok_or(ReducerError::UnknownFolder)?;
            for icon in &mut state.icons {
                icon.selected = icon.folder == folder;
            }
            if state.window(folder).is_none() {
                let mut window = WindowState::new(folder);
                window.rect = window
                    .rect
                    .clamped_min(window_manager::MIN_WINDOW_WIDTH, window_manager::MIN_WINDOW_HEIGHT);
                state.windows.push(window);
            }
            state.minimized.retain(|&id| id != folder);
            state.active_window = Some(folder);
        }
        WorkspaceAction::CloseWindow { folder } => {
            let before = state.windows.len();
            state.windows.retain(|w| w.folder != folder);
            if state.windows.len() == before {
                return Err(ReducerError::WindowNotFound);
            }
            if state.active_window == Some(folder) {
                state.active_window = None;
            }
            state.minimized.retain(|&id| id != folder);
        }
        WorkspaceAction::MinimizeWindow { folder } => {
            state.window(folder).ok_or(ReducerError::WindowNotFound)?;
            if !state.minimized.contains(&folder) {
                state.minimized.push(folder);
            }
            if state.active_window == Some(folder) {
                state.active_window = None;
            }
        }
        WorkspaceAction::RestoreWindow { folder } => {
            state.window(folder).ok_or(ReducerError::WindowNotFound)?;
            state.minimized.retain(|&id| id != folder);
            state.active_window = Some(folder);
        }
        WorkspaceAction::ToggleMaximize {
            folder,
            viewport_w,
            viewport_h,
        } => {
            let window = find_window_mut(state, folder)?;
            window_manager::toggle_maximize(window, viewport_w, viewport_h);
        }
        WorkspaceAction::BeginIconDrag { folder, pointer } => {
            let icon = state
                .icons
                .iter()
                .find(|i| i.folder == folder)
                .ok_or(ReducerError::UnknownFolder)?;
            let mut session = IconDragSession {
                folder,
                controller: Default::default(),
                origin: icon.position,
                displaced: false,
            };
            session.controller.begin(pointer, icon.position, None);
            interaction.icon_drag = Some(session);
        }
        WorkspaceAction::UpdateIconDrag { pointer } => {
            if let Some(session) = interaction.icon_drag.as_mut() {
                if let Some(position) = session.controller.update(pointer) {
                    if (position.x - session.origin.x).abs() > ICON_CLICK_DRAG_THRESHOLD_PX
                        || (position.y - session.origin.y).abs() > ICON_CLICK_DRAG_THRESHOLD_PX
                    {
                        session.displaced = true;
                    }
                    if let Some(icon) = state
                        .icons
                        .iter_mut()
                        .find(|i| i.folder == session.folder)
                    {
                        icon.position = position;
                    }
                }
            }
        }
        WorkspaceAction::EndIconDrag => {
            if let Some(session) = interaction.icon_drag.take() {
                if session.displaced {
                    interaction.suppress_icon_click = Some(session.folder);
                }
            }
        }
        WorkspaceAction::BeginWindowDrag {
            folder,
            pointer,
            viewport_w,
            viewport_h,
        } => {
            let window = *find_window_mut(state, folder)?;
            state.active_window = Some(folder);
            // Drag only applies to the normal state.
            if !window.maximized {
                let mut session = WindowDragSession {
                    folder,
                    controller: Default::default(),
                };
                session.controller.begin(
                    pointer,
                    window.rect.origin(),
                    Some(window_manager::move_bounds(
                        window.rect,
                        viewport_w,
                        viewport_h,
                    )),
                );
                interaction.window_drag = Some(session);
            }
        }
        WorkspaceAction::UpdateWindowDrag { pointer } => {
            if let Some(session) = interaction.window_drag.as_ref() {
                if let Some(position) = session.controller.update(pointer) {
                    let window = find_window_mut(state, session.folder)?;
                    if !window.maximized {
                        window.rect.x = position.x;
                        window.rect.y = position.y;
                    }
                }
            }
        }
        WorkspaceAction::EndWindowDrag => {
            interaction.window_drag = None;
        }
        WorkspaceAction::BeginWindowResize { folder, pointer } => {
            let window = *find_window_mut(state, folder)?;
            state.active_window = Some(folder);
            if !window.maximized {
                interaction.window_resize = Some(WindowResizeSession {
                    folder,
                    pointer_start: pointer,
                    rect_start: window.rect,
                });
            }
        }
        WorkspaceAction::UpdateWindowResize { pointer } => {
            if let Some(session) = interaction.window_resize.as_ref().copied() {
                let window = find_window_mut(state, session.folder)?;
                if !window.maximized {
                    window.rect = window_manager::resized_rect(
                        session.rect_start,
                        session.pointer_start,
                        pointer,
                    );
                }
            }
        }
        WorkspaceAction::EndWindowResize => {
            interaction.window_resize = None;
        }
        WorkspaceAction::ToggleChatPanel => {
            state.chat_open = !state.chat_open;
        }
        WorkspaceAction::CloseChatPanel => {
            state.chat_open = false;
        }
        WorkspaceAction::ToggleMusicPanel => {
            state.music_open = !state.music_open;
            if state.music_open {
                effects.push(RuntimeEffect::RequestPlayback);
            } else {
                state.music.playing = false;
                effects.push(RuntimeEffect::PausePlayback);
            }
        }
        WorkspaceAction::CloseMusicPanel => {
            if state.music_open {
                state.music_open = false;
                state.music.playing = false;
                effects.push(RuntimeEffect::PausePlayback);
            }
        }
        WorkspaceAction::BeginPanelDrag {
            pointer,
            viewport_w,
            viewport_h,
        } => {
            let mut session = PanelDragSession {
                controller: Default::default(),
            };
            session.controller.begin(
                pointer,
                state.music.position,
                Some(DragBounds {
                    container: (viewport_w, viewport_h),
                    entity: MUSIC_PANEL_SIZE,
                }),
            );
            interaction.panel_drag = Some(session);
        }
        WorkspaceAction::UpdatePanelDrag { pointer } => {
            if let Some(session) = interaction.panel_drag.as_ref() {
                if let Some(position) = session.controller.update(pointer) {
                    state.music.position = position;
                }
            }
        }
        WorkspaceAction::EndPanelDrag => {
            interaction.panel_drag = None;
        }
        WorkspaceAction::TogglePlayback => {
            if state.music.playing {
                state.music.playing = false;
                effects.push(RuntimeEffect::PausePlayback);
            } else {
                effects.push(RuntimeEffect::RequestPlayback);
            }
        }
        WorkspaceAction::PlaybackSettled { playing } => {
            state.music.playing = playing;
        }
        WorkspaceAction::ToggleMute => {
            state.music.muted = !state.music.muted;
            effects.push(RuntimeEffect::SetAudioMuted(state.music.muted));
        }
        WorkspaceAction::ApplyBootLink {
            link,
            viewport_w,
            viewport_h,
        } => {
            let open_target = link.open.as_deref().and_then(catalog::folder_by_slug);
            if link.wants_desktop() || open_target.is_some() {
                effects.extend(reduce_workspace(
                    state,
                    interaction,
                    WorkspaceAction::EnterDesktop {
                        viewport_w,
                        viewport_h,
                    },
                )?);
            }
            if let Some(record) = open_target {
                effects.extend(reduce_workspace(
                    state,
                    interaction,
                    WorkspaceAction::OpenFolder { folder: record.id },
                )?);
            }
        }
    }

    normalize_workspace(state);
    Ok(effects)
}

fn rebuild_icons(state: &mut WorkspaceState, viewport_w: i32, viewport_h: i32) {
    // Re-layout is from scratch: manual drag positions are discarded, only
    // the selection survives.
    let selected = state.selected_icon();
    state.icons = scatter_layout(viewport_w, viewport_h, &catalog::folder_ids())
        .into_iter()
        .map(|slot| IconState {
            folder: slot.folder,
            position: slot.position,
            z_layer: z_layer_hint(slot.folder),
            selected: selected == Some(slot.folder),
        })
        .collect();
}

fn find_window_mut(
    state: &mut WorkspaceState,
    folder: FolderId,
) -> Result<&mut WindowState, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.folder == folder)
        .ok_or(ReducerError::WindowNotFound)
}

/// Re-establishes workspace invariants after every transition.
fn normalize_workspace(state: &mut WorkspaceState) {
    let mut seen = Vec::with_capacity(state.minimized.len());
    for &id in &state.minimized {
        if !seen.contains(&id) && state.windows.iter().any(|w| w.folder == id) {
            seen.push(id);
        }
    }
    state.minimized = seen;

    if let Some(active) = state.active_window {
        let live = state.windows.iter().any(|w| w.folder == active);
        if !live || state.minimized.contains(&active) {
            state.active_window = None;
        }
    }

    let mut has_selected = false;
    for icon in &mut state.icons {
        if icon.selected {
            if has_selected {
                icon.selected = false;
            } else {
                has_selected = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{
        FolderContent, WindowRect, WindowVisibility, DEFAULT_WINDOW_RECT, TASKBAR_HEIGHT_PX,
    };
    use crate::window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    const VIEWPORT: (i32, i32) = (1024, 768);

    fn id(slug: &'static str) -> FolderId {
        FolderId(slug)
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn desktop() -> (WorkspaceState, InteractionState) {
        let mut state = WorkspaceState::default();
        let mut interaction = InteractionState::default();
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::EnterDesktop {
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("enter desktop");
        (state, interaction)
    }

    fn open(state: &mut WorkspaceState, interaction: &mut InteractionState, slug: &'static str) {
        reduce_workspace(
            state,
            interaction,
            WorkspaceAction::OpenFolder { folder: id(slug) },
        )
        .expect("open folder");
    }

    #[test]
    fn entering_the_desktop_scatters_icons_and_starts_ambience() {
        let mut state = WorkspaceState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::EnterDesktop {
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("enter desktop");

        assert_eq!(state.screen, Screen::Desktop);
        assert_eq!(state.icons.len(), catalog::FOLDERS.len());
        assert!(effects.contains(&RuntimeEffect::StartBackdrop));
        // The music panel defaults open, so entry requests autoplay.
        assert!(effects.contains(&RuntimeEffect::RequestPlayback));
    }

    #[test]
    fn entering_the_desktop_twice_is_a_noop() {
        let (mut state, mut interaction) = desktop();
        let before = state.clone();
        let effects = reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::EnterDesktop {
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("re-enter desktop");
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn leaving_the_desktop_stops_the_backdrop_and_playback() {
        let (mut state, mut interaction) = desktop();
        let effects =
            reduce_workspace(&mut state, &mut interaction, WorkspaceAction::LeaveDesktop)
                .expect("leave desktop");
        assert_eq!(state.screen, Screen::Hero);
        assert!(state.icons.is_empty());
        assert!(effects.contains(&RuntimeEffect::StopBackdrop));
        assert!(effects.contains(&RuntimeEffect::PausePlayback));
    }

    #[test]
    fn opening_a_folder_creates_a_window_with_default_geometry() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about-me");

        let window = state.window(id("about-me")).expect("window");
        assert_eq!(window.rect, DEFAULT_WINDOW_RECT);
        assert!(!window.maximized);
        assert_eq!(state.active_window, Some(id("about-me")));
        assert_eq!(state.selected_icon(), Some(id("about-me")));
    }

    #[test]
    fn double_clicking_about_me_activates_its_text_window() {
        // Pre-minimize so the open also has to clear minimized membership.
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about-me");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::MinimizeWindow {
                folder: id("about-me"),
            },
        )
        .expect("minimize");
        assert!(state.is_minimized(id("about-me")));

        open(&mut state, &mut interaction, "about-me");
        assert_eq!(state.active_window, Some(id("about-me")));
        assert!(!state.is_minimized(id("about-me")));
        let record = catalog::folder(id("about-me")).expect("record");
        assert!(matches!(record.content, FolderContent::Text(_)));
    }

    #[test]
    fn reopening_an_existing_window_keeps_its_geometry() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "showreel");
        find_window_mut(&mut state, id("showreel")).unwrap().rect = WindowRect {
            x: 200,
            y: 120,
            w: 640,
            h: 420,
        };

        open(&mut state, &mut interaction, "showreel");
        assert_eq!(state.windows.len(), 1);
        assert_eq!(
            state.window(id("showreel")).unwrap().rect,
            WindowRect {
                x: 200,
                y: 120,
                w: 640,
                h: 420
            }
        );
    }

    #[test]
    fn closing_a_window_destroys_state_and_clears_membership() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "green-screen");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::CloseWindow {
                folder: id("green-screen"),
            },
        )
        .expect("close");

        assert!(state.window(id("green-screen")).is_none());
        assert_eq!(state.active_window, None);
        assert!(!state.is_minimized(id("green-screen")));
    }

    #[test]
    fn closing_an_unknown_window_errors() {
        let (mut state, mut interaction) = desktop();
        let result = reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::CloseWindow {
                folder: id("about-me"),
            },
        );
        assert_eq!(result, Err(ReducerError::WindowNotFound));
    }

    #[test]
    fn minimize_uses_set_semantics() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about-me");
        for _ in 0..3 {
            reduce_workspace(
                &mut state,
                &mut interaction,
                WorkspaceAction::MinimizeWindow {
                    folder: id("about-me"),
                },
            )
            .expect("minimize");
        }
        assert_eq!(state.minimized, vec![id("about-me")]);
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn minimize_restore_round_trip_preserves_geometry() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "bhootagaanam");
        let moved = WindowRect {
            x: 333,
            y: 77,
            w: 510,
            h: 400,
        };
        find_window_mut(&mut state, id("bhootagaanam")).unwrap().rect = moved;

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::MinimizeWindow {
                folder: id("bhootagaanam"),
            },
        )
        .expect("minimize");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::RestoreWindow {
                folder: id("bhootagaanam"),
            },
        )
        .expect("restore");

        assert_eq!(state.active_window, Some(id("bhootagaanam")));
        assert!(!state.is_minimized(id("bhootagaanam")));
        assert_eq!(state.window(id("bhootagaanam")).unwrap().rect, moved);
    }

    #[test]
    fn maximize_toggle_round_trips_through_the_reducer() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about-me");
        let before = state.window(id("about-me")).unwrap().rect;

        let toggle = WorkspaceAction::ToggleMaximize {
            folder: id("about-me"),
            viewport_w: VIEWPORT.0,
            viewport_h: VIEWPORT.1,
        };
        reduce_workspace(&mut state, &mut interaction, toggle.clone()).expect("maximize");
        let maximized = state.window(id("about-me")).unwrap();
        assert!(maximized.maximized);
        assert_eq!(
            maximized.rect,
            WindowRect {
                x: 0,
                y: 0,
                w: VIEWPORT.0,
                h: VIEWPORT.1 - TASKBAR_HEIGHT_PX
            }
        );

        reduce_workspace(&mut state, &mut interaction, toggle).expect("restore");
        let restored = state.window(id("about-me")).unwrap();
        assert!(!restored.maximized);
        assert_eq!(restored.rect, before);
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn window_drag_clamps_to_the_viewport() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about-me");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginWindowDrag {
                folder: id("about-me"),
                pointer: at(100, 80),
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("begin drag");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateWindowDrag {
                pointer: at(-500, 5000),
            },
        )
        .expect("update drag");

        let rect = state.window(id("about-me")).unwrap().rect;
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, VIEWPORT.1 - rect.h);
    }

    #[test]
    fn dragging_a_maximized_window_is_a_noop() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "about-me");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::ToggleMaximize {
                folder: id("about-me"),
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("maximize");

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginWindowDrag {
                folder: id("about-me"),
                pointer: at(10, 10),
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("begin drag");
        assert_eq!(interaction.window_drag, None);

        let before = state.window(id("about-me")).unwrap().rect;
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateWindowDrag {
                pointer: at(400, 400),
            },
        )
        .expect("update drag");
        assert_eq!(state.window(id("about-me")).unwrap().rect, before);
    }

    #[test]
    fn resize_through_the_reducer_floors_at_the_minimum() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "just-like-that");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginWindowResize {
                folder: id("just-like-that"),
                pointer: at(560, 420),
            },
        )
        .expect("begin resize");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateWindowResize {
                pointer: at(-2000, -2000),
            },
        )
        .expect("update resize");

        let rect = state.window(id("just-like-that")).unwrap().rect;
        assert_eq!((rect.w, rect.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateWindowResize {
                pointer: at(3000, 2500),
            },
        )
        .expect("grow");
        let rect = state.window(id("just-like-that")).unwrap().rect;
        assert!(rect.w > VIEWPORT.0, "resize has no upper clamp");
    }

    #[test]
    fn at_most_one_icon_is_ever_selected() {
        let (mut state, mut interaction) = desktop();
        for slug in ["bhootagaanam", "green-screen", "showreel", "about-me"] {
            reduce_workspace(
                &mut state,
                &mut interaction,
                WorkspaceAction::SelectIcon { folder: id(slug) },
            )
            .expect("select");
            let selected: Vec<FolderId> = state
                .icons
                .iter()
                .filter(|i| i.selected)
                .map(|i| i.folder)
                .collect();
            assert_eq!(selected, vec![id(slug)]);
        }

        reduce_workspace(&mut state, &mut interaction, WorkspaceAction::ClearSelection)
            .expect("clear");
        assert_eq!(state.selected_icon(), None);
    }

    #[test]
    fn icons_drag_unbounded_past_the_viewport() {
        let (mut state, mut interaction) = desktop();
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginIconDrag {
                folder: id("showreel"),
                pointer: at(0, 0),
            },
        )
        .expect("begin");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateIconDrag {
                pointer: at(-900, 4000),
            },
        )
        .expect("update");

        let icon = state
            .icons
            .iter()
            .find(|i| i.folder == id("showreel"))
            .unwrap();
        assert!(icon.position.x < 0);
        assert!(icon.position.y > VIEWPORT.1);
    }

    #[test]
    fn a_displacing_drag_swallows_exactly_one_selection_click() {
        let (mut state, mut interaction) = desktop();
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginIconDrag {
                folder: id("about-me"),
                pointer: at(0, 0),
            },
        )
        .expect("begin");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateIconDrag {
                pointer: at(60, 60),
            },
        )
        .expect("update");
        reduce_workspace(&mut state, &mut interaction, WorkspaceAction::EndIconDrag)
            .expect("end");

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::SelectIcon {
                folder: id("about-me"),
            },
        )
        .expect("suppressed click");
        assert_eq!(state.selected_icon(), None);

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::SelectIcon {
                folder: id("about-me"),
            },
        )
        .expect("real click");
        assert_eq!(state.selected_icon(), Some(id("about-me")));
    }

    #[test]
    fn a_zero_displacement_press_still_selects() {
        let (mut state, mut interaction) = desktop();
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginIconDrag {
                folder: id("about-me"),
                pointer: at(10, 10),
            },
        )
        .expect("begin");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateIconDrag {
                pointer: at(12, 11),
            },
        )
        .expect("wiggle");
        reduce_workspace(&mut state, &mut interaction, WorkspaceAction::EndIconDrag)
            .expect("end");

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::SelectIcon {
                folder: id("about-me"),
            },
        )
        .expect("click");
        assert_eq!(state.selected_icon(), Some(id("about-me")));
    }

    #[test]
    fn rescatter_discards_manual_positions_but_keeps_selection() {
        let (mut state, mut interaction) = desktop();
        let original = state.icons.clone();
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::SelectIcon {
                folder: id("green-screen"),
            },
        )
        .expect("select");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginIconDrag {
                folder: id("green-screen"),
                pointer: at(0, 0),
            },
        )
        .expect("begin");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdateIconDrag {
                pointer: at(500, 500),
            },
        )
        .expect("update");
        reduce_workspace(&mut state, &mut interaction, WorkspaceAction::EndIconDrag)
            .expect("end");

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::ScatterIcons {
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("rescatter");

        let positions: Vec<PointerPosition> = state.icons.iter().map(|i| i.position).collect();
        let original_positions: Vec<PointerPosition> =
            original.iter().map(|i| i.position).collect();
        assert_eq!(positions, original_positions);
        assert_eq!(state.selected_icon(), Some(id("green-screen")));
    }

    #[test]
    fn panel_toggles_never_touch_window_state() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "bhaag-kodaka");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::MinimizeWindow {
                folder: id("bhaag-kodaka"),
            },
        )
        .expect("minimize");
        open(&mut state, &mut interaction, "about-me");

        let windows = state.windows.clone();
        let minimized = state.minimized.clone();
        let active = state.active_window;

        for action in [
            WorkspaceAction::ToggleChatPanel,
            WorkspaceAction::ToggleMusicPanel,
            WorkspaceAction::ToggleMusicPanel,
            WorkspaceAction::CloseChatPanel,
        ] {
            reduce_workspace(&mut state, &mut interaction, action).expect("panel action");
        }

        assert_eq!(state.windows, windows);
        assert_eq!(state.minimized, minimized);
        assert_eq!(state.active_window, active);
    }

    #[test]
    fn music_panel_drag_is_clamped_to_the_viewport() {
        let (mut state, mut interaction) = desktop();
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::BeginPanelDrag {
                pointer: at(100, 100),
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("begin");
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::UpdatePanelDrag {
                pointer: at(9000, 9000),
            },
        )
        .expect("update");

        assert_eq!(state.music.position.x, VIEWPORT.0 - MUSIC_PANEL_SIZE.0);
        assert_eq!(state.music.position.y, VIEWPORT.1 - MUSIC_PANEL_SIZE.1);
    }

    #[test]
    fn blocked_autoplay_settles_as_paused() {
        let (mut state, mut interaction) = desktop();
        let effects = reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::TogglePlayback,
        )
        .expect("toggle playback");
        assert!(effects.contains(&RuntimeEffect::RequestPlayback));
        assert!(!state.music.playing, "playing waits for the settle");

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::PlaybackSettled { playing: false },
        )
        .expect("settle");
        assert!(!state.music.playing);

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::PlaybackSettled { playing: true },
        )
        .expect("settle");
        assert!(state.music.playing);
    }

    #[test]
    fn mute_toggle_emits_the_channel_effect() {
        let (mut state, mut interaction) = desktop();
        let effects =
            reduce_workspace(&mut state, &mut interaction, WorkspaceAction::ToggleMute)
                .expect("mute");
        assert!(state.music.muted);
        assert_eq!(effects, vec![RuntimeEffect::SetAudioMuted(true)]);

        let effects =
            reduce_workspace(&mut state, &mut interaction, WorkspaceAction::ToggleMute)
                .expect("unmute");
        assert!(!state.music.muted);
        assert_eq!(effects, vec![RuntimeEffect::SetAudioMuted(false)]);
    }

    #[test]
    fn closing_the_music_panel_pauses_playback() {
        let (mut state, mut interaction) = desktop();
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::PlaybackSettled { playing: true },
        )
        .expect("settle");

        let effects = reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::CloseMusicPanel,
        )
        .expect("close panel");
        assert!(!state.music_open);
        assert!(!state.music.playing);
        assert_eq!(effects, vec![RuntimeEffect::PausePlayback]);
    }

    #[test]
    fn active_only_policy_shows_just_the_active_window() {
        let (mut state, mut interaction) = desktop();
        open(&mut state, &mut interaction, "bhootagaanam");
        open(&mut state, &mut interaction, "about-me");

        assert!(state.is_window_visible(id("about-me")));
        assert!(!state.is_window_visible(id("bhootagaanam")));

        state.visibility = WindowVisibility::AllOpen;
        assert!(state.is_window_visible(id("about-me")));
        assert!(state.is_window_visible(id("bhootagaanam")));

        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::MinimizeWindow {
                folder: id("bhootagaanam"),
            },
        )
        .expect("minimize");
        assert!(!state.is_window_visible(id("bhootagaanam")));
    }

    #[test]
    fn boot_link_enters_the_desktop_and_opens_the_folder() {
        let mut state = WorkspaceState::default();
        let mut interaction = InteractionState::default();
        let link = BootLink {
            screen: Some(crate::boot::BootScreen::Desktop),
            open: Some("about-me".to_string()),
        };
        let effects = reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::ApplyBootLink {
                link,
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("boot link");

        assert_eq!(state.screen, Screen::Desktop);
        assert_eq!(state.active_window, Some(id("about-me")));
        assert!(effects.contains(&RuntimeEffect::StartBackdrop));
    }

    #[test]
    fn boot_link_with_unknown_slug_stays_on_the_hero_screen() {
        let mut state = WorkspaceState::default();
        let mut interaction = InteractionState::default();
        let link = BootLink {
            screen: None,
            open: Some("no-such-folder".to_string()),
        };
        reduce_workspace(
            &mut state,
            &mut interaction,
            WorkspaceAction::ApplyBootLink {
                link,
                viewport_w: VIEWPORT.0,
                viewport_h: VIEWPORT.1,
            },
        )
        .expect("boot link");
        assert_eq!(state.screen, Screen::Hero);
        assert!(state.windows.is_empty());
    }
}
