use desktop_runtime::{catalog, use_workspace_runtime, WorkspaceAction};
use leptos::*;
use system_ui::{Button, ButtonVariant, Icon, IconName, TextField};

#[component]
/// Landing search screen. Any search intent opens the desktop.
pub fn HeroScreen() -> impl IntoView {
    let runtime = use_workspace_runtime();
    let query = create_rw_signal(String::new());
    let focused = create_rw_signal(false);

    let enter_desktop = move || {
        let (viewport_w, viewport_h) = runtime.viewport();
        runtime.dispatch_action(WorkspaceAction::EnterDesktop {
            viewport_w,
            viewport_h,
        });
    };

    let on_input = Callback::new(move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let has_text = !value.trim().is_empty();
        query.set(value);
        // Typing anything at all is enough of a search to open the desktop.
        if has_text {
            enter_desktop();
        }
    });
    let on_keydown = Callback::new(move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            enter_desktop();
        }
    });

    let suggestions_open = Signal::derive(move || focused.get() || !query.get().is_empty());

    view! {
        <section class="hero-screen">
            <h1>"Look it up, open it!"</h1>
            <h2>"I won't stop you..."</h2>

            <div class="hero-search">
                <div data-ui-slot="search-bar">
                    <Icon icon=IconName::Search />
                    <TextField
                        placeholder="Search... scenes, theatre, reels, BTS"
                        aria_label="Search the portfolio"
                        value=query
                        on_input=on_input
                        on_keydown=on_keydown
                        on_focus=Callback::new(move |_| focused.set(true))
                        on_blur=Callback::new(move |_| focused.set(false))
                    />
                    <Button
                        variant=ButtonVariant::Accent
                        on_click=Callback::new(move |_| enter_desktop())
                    >
                        "Search"
                    </Button>
                </div>

                <Show when=move || suggestions_open.get() fallback=|| ()>
                    <div class="hero-suggestions" role="listbox">
                        {catalog::HERO_SUGGESTIONS
                            .iter()
                            .map(|suggestion| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        on_click=Callback::new(move |_| enter_desktop())
                                    >
                                        {*suggestion}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </section>
    }
}
