use super::*;
use crate::catalog::CONTACT_PHONE;
use system_ui::{Button, ButtonVariant, FloatingPanel, IconButton, TextArea, TextField};

#[component]
pub(super) fn ChatPanel() -> impl IntoView {
    let runtime = use_workspace_runtime();
    let close = Callback::new(move |_| {
        runtime.dispatch_action(WorkspaceAction::CloseChatPanel);
    });

    view! {
        <FloatingPanel layout_class="chat-panel" aria_label="Chat contact">
            <header data-ui-slot="panel-header">
                <span data-ui-slot="panel-title">"Contact on WhatsApp"</span>
                <div data-ui-slot="panel-controls">
                    <IconButton
                        icon=IconName::Minimize
                        size=IconSize::Xs
                        aria_label="Minimize chat"
                        on_click=close
                    />
                    <IconButton
                        icon=IconName::Dismiss
                        size=IconSize::Xs
                        aria_label="Close chat"
                        on_click=close
                    />
                </div>
            </header>
            <div data-ui-slot="panel-body">
                <p>
                    "You can reach me at " <strong>{CONTACT_PHONE}</strong>
                    " or just drop a note here"
                </p>
                <form on:submit=|ev| ev.prevent_default()>
                    <TextField placeholder="Your name" aria_label="Your name" />
                    <TextField
                        placeholder="WhatsApp no. / email"
                        aria_label="How to reach you"
                    />
                    <TextArea
                        placeholder="Tell me what you need..."
                        aria_label="Your message"
                    />
                    <Button variant=ButtonVariant::Accent>"Send"</Button>
                </form>
            </div>
        </FloatingPanel>
    }
}
