//! Runtime provider and context wiring for the workspace shell.
//!
//! Owns the long-lived state signals, the dispatch callback, and the effect
//! queue. UI composition stays in [`crate::components`].

use leptos::*;

use crate::boot;
use crate::host::WorkspaceHostContext;
use crate::model::{InteractionState, WorkspaceState};
use crate::reducer::{reduce_workspace, RuntimeEffect, WorkspaceAction};

#[derive(Clone, Copy)]
/// Leptos context for reading workspace state and dispatching actions.
pub struct WorkspaceRuntimeContext {
    /// Host service bundle for side effects and environment queries.
    pub host: StoredValue<WorkspaceHostContext>,
    /// Reactive workspace state signal.
    pub state: RwSignal<WorkspaceState>,
    /// Reactive pointer interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of effects emitted by the reducer, drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<WorkspaceAction>,
}

impl WorkspaceRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: WorkspaceAction) {
        self.dispatch.call(action);
    }

    /// Current viewport size from the host bundle.
    pub fn viewport(&self) -> (i32, i32) {
        self.host.get_value().viewport()
    }
}

fn install_effect_executor(runtime: WorkspaceRuntimeContext) {
    create_effect(move |_| {
        let queue = runtime.effects.get();
        if queue.is_empty() {
            return;
        }
        runtime.effects.set(Vec::new());
        let host = runtime.host.get_value();
        for effect in queue {
            host.run_runtime_effect(effect, runtime.dispatch);
        }
    });
}

fn install_boot_link(runtime: WorkspaceRuntimeContext) {
    if let Some(link) = boot::current_boot_link() {
        let (viewport_w, viewport_h) = runtime.viewport();
        runtime.dispatch_action(WorkspaceAction::ApplyBootLink {
            link,
            viewport_w,
            viewport_h,
        });
    }
}

#[component]
/// Provides [`WorkspaceRuntimeContext`] to descendant components.
pub fn WorkspaceProvider(children: Children) -> impl IntoView {
    let host = store_value(WorkspaceHostContext::default());
    let state = create_rw_signal(WorkspaceState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: WorkspaceAction| {
        let mut workspace = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_workspace = workspace.clone();
        let previous_ui = ui.clone();

        match reduce_workspace(&mut workspace, &mut ui, action) {
            Ok(new_effects) => {
                if workspace != previous_workspace {
                    state.set(workspace);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("workspace reducer error: {err}"),
        }
    });

    let runtime = WorkspaceRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    install_effect_executor(runtime);
    install_boot_link(runtime);

    children().into_view()
}

/// Returns the current [`WorkspaceRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`WorkspaceProvider`].
pub fn use_workspace_runtime() -> WorkspaceRuntimeContext {
    use_context::<WorkspaceRuntimeContext>().expect("WorkspaceRuntimeContext not provided")
}
