use super::*;
use crate::model::FolderContent;
use crate::slideshow::Slideshow;
use crate::window_manager;
use system_ui::{
    IconButton, ResizeGrip, WindowBody, WindowControls, WindowDot, WindowDotKind, WindowFrame,
    WindowTitle, WindowTitleBar,
};

#[component]
pub(super) fn FolderWindow(folder: FolderId) -> impl IntoView {
    let runtime = use_workspace_runtime();
    let state = runtime.state;

    let window = Signal::derive(move || {
        state
            .get()
            .windows
            .into_iter()
            .find(|w| w.folder == folder)
    });
    let visible = Signal::derive(move || state.get().is_window_visible(folder));

    let record = catalog::folder(folder);
    let title = record.map(|r| r.title).unwrap_or("");
    let content = record.map(|r| r.content).unwrap_or(FolderContent::Empty);

    let close = Callback::new(move |_| {
        runtime.dispatch_action(WorkspaceAction::CloseWindow { folder });
    });
    let minimize = Callback::new(move |_| {
        runtime.dispatch_action(WorkspaceAction::MinimizeWindow { folder });
    });
    let toggle_maximize = Callback::new(move |_| {
        let (viewport_w, viewport_h) = runtime.viewport();
        runtime.dispatch_action(WorkspaceAction::ToggleMaximize {
            folder,
            viewport_w,
            viewport_h,
        });
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let (viewport_w, viewport_h) = runtime.viewport();
        runtime.dispatch_action(WorkspaceAction::BeginWindowDrag {
            folder,
            pointer: pointer_from_pointer_event(&ev),
            viewport_w,
            viewport_h,
        });
    });
    let begin_resize = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(WorkspaceAction::BeginWindowResize {
            folder,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! {
        <Show when=move || visible.get() && window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x,
                    win.rect.y,
                    win.rect.w,
                    win.rect.h,
                    window_manager::window_layer(folder)
                );

                view! {
                    <WindowFrame style=style aria_label=title.to_string() maximized=win.maximized>
                        <WindowTitleBar on_pointerdown=begin_move>
                            <WindowControls>
                                <WindowDot
                                    kind=WindowDotKind::Close
                                    aria_label="Close"
                                    on_click=close
                                />
                                <WindowDot
                                    kind=WindowDotKind::Minimize
                                    aria_label="Minimize"
                                    on_click=minimize
                                />
                                <WindowDot
                                    kind=WindowDotKind::Maximize
                                    aria_label="Maximize"
                                    on_click=toggle_maximize
                                />
                            </WindowControls>
                            <WindowTitle>
                                <span>{title}</span>
                            </WindowTitle>
                            <span data-ui-slot="content-kind">{content.kind_label()}</span>
                        </WindowTitleBar>
                        <WindowBody>
                            <ContentPanel content=content />
                        </WindowBody>
                        <Show
                            when=move || window.get().map(|w| !w.maximized).unwrap_or(false)
                            fallback=|| ()
                        >
                            <ResizeGrip on_pointerdown=begin_resize />
                        </Show>
                    </WindowFrame>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn ContentPanel(content: FolderContent) -> impl IntoView {
    match content {
        FolderContent::Video(src) => view! { <VideoPanel src=src /> }.into_view(),
        FolderContent::Text(body) => view! { <TextPanel body=body /> }.into_view(),
        FolderContent::Slideshow(images) => {
            view! { <SlideshowPanel images=images /> }.into_view()
        }
        FolderContent::Empty => view! { <EmptyPanel /> }.into_view(),
    }
}

#[component]
fn VideoPanel(src: &'static str) -> impl IntoView {
    view! {
        <div class="content-panel" data-content="video">
            <video src=src controls=true preload="metadata"></video>
        </div>
    }
}

#[component]
fn TextPanel(body: &'static str) -> impl IntoView {
    view! {
        <div class="content-panel" data-content="text">
            <p>{body}</p>
        </div>
    }
}

#[component]
fn EmptyPanel() -> impl IntoView {
    view! {
        <div class="content-panel" data-content="empty">
            <p>"No content in this folder"</p>
        </div>
    }
}

#[component]
fn SlideshowPanel(images: &'static [&'static str]) -> impl IntoView {
    let slideshow = create_rw_signal(Slideshow::new(images.len()));
    let previous = Callback::new(move |_| slideshow.update(|s| s.previous()));
    let next = Callback::new(move |_| slideshow.update(|s| s.next()));

    view! {
        <div class="content-panel" data-content="slideshow">
            {images
                .iter()
                .enumerate()
                .map(|(index, src)| {
                    view! {
                        <img
                            src=*src
                            alt=""
                            data-ui-current=move || {
                                if slideshow.get().index() == index { "true" } else { "false" }
                            }
                        />
                    }
                })
                .collect_view()}
            <Show when=move || slideshow.get().has_controls() fallback=|| ()>
                <IconButton
                    icon=IconName::ChevronLeft
                    aria_label="Previous image"
                    layout_class="slideshow-previous"
                    on_click=previous
                />
                <IconButton
                    icon=IconName::ChevronRight
                    aria_label="Next image"
                    layout_class="slideshow-next"
                    on_click=next
                />
                <span data-ui-slot="slide-indicator">{move || slideshow.get().indicator()}</span>
            </Show>
        </div>
    }
}
