use super::*;

#[component]
/// Floating singleton panel surface (chat popup, music player).
pub fn FloatingPanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-floating-panel", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="floating-panel"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
