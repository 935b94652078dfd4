use desktop_runtime::{use_workspace_runtime, DesktopShell, Screen, WorkspaceProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host::BACKDROP_CANVAS_ID;

use crate::hero::HeroScreen;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Shiva Pranav" />
        <Meta
            name="description"
            content="Actor portfolio presented as a retro desktop workspace."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=WorkspaceEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn WorkspaceEntry() -> impl IntoView {
    view! {
        <WorkspaceProvider>
            <BackdropCanvas />
            <ScreenSwitch />
        </WorkspaceProvider>
    }
}

// The canvas must exist before the backdrop renderer starts, so it lives
// outside the screen switch and spans both screens.
#[component]
fn BackdropCanvas() -> impl IntoView {
    view! {
        <div class="site-backdrop" aria-hidden="true">
            <canvas id=BACKDROP_CANVAS_ID></canvas>
        </div>
    }
}

#[component]
fn ScreenSwitch() -> impl IntoView {
    let runtime = use_workspace_runtime();

    view! {
        {move || match runtime.state.get().screen {
            Screen::Hero => view! { <HeroScreen /> }.into_view(),
            Screen::Desktop => view! { <DesktopShell /> }.into_view(),
        }}
    }
}
