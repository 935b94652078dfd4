use super::*;
use crate::catalog::PROFILE_URL;
use system_ui::{Taskbar, TaskbarButton, TaskbarSection, TaskbarTile};

#[component]
pub(super) fn WorkspaceTaskbar() -> impl IntoView {
    let runtime = use_workspace_runtime();
    let state = runtime.state;
    let minimized = Signal::derive(move || state.get().minimized);
    let music_open = Signal::derive(move || state.get().music_open);
    let chat_open = Signal::derive(move || state.get().chat_open);

    view! {
        <Taskbar aria_label="Workspace taskbar">
            <TaskbarSection ui_slot="apps">
                <TaskbarButton
                    aria_label="Toggle music player"
                    title="Music"
                    pressed=music_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(WorkspaceAction::ToggleMusicPanel);
                    })
                >
                    <Icon icon=IconName::MusicNote />
                </TaskbarButton>

                <TaskbarTile title="Netflix">"N"</TaskbarTile>
                <TaskbarTile title="Prime Video">"prime"</TaskbarTile>

                <TaskbarButton
                    aria_label="Toggle chat contact"
                    title="WhatsApp"
                    pressed=chat_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(WorkspaceAction::ToggleChatPanel);
                    })
                >
                    <Icon icon=IconName::ChatBubble />
                    <span>"contact me"</span>
                </TaskbarButton>

                <For each=move || minimized.get() key=|folder| *folder let:folder>
                    <MinimizedToken folder=folder />
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="links">
                <a
                    class="taskbar-profile-link"
                    href=PROFILE_URL
                    target="_blank"
                    rel="noreferrer"
                >
                    <Icon icon=IconName::ExternalLink />
                    <span>"you can definitely follow me on Instagram!"</span>
                </a>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn MinimizedToken(folder: FolderId) -> impl IntoView {
    let runtime = use_workspace_runtime();
    let title = catalog::folder(folder)
        .map(|r| r.title)
        .unwrap_or(folder.as_str());

    view! {
        <TaskbarButton
            ui_slot="minimized-token"
            aria_label=format!("Restore {title}")
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(WorkspaceAction::RestoreWindow { folder });
            })
        >
            {title}
        </TaskbarButton>
    }
}
