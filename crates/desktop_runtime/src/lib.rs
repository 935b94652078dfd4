pub mod boot;
pub mod catalog;
pub mod components;
pub mod host;
pub mod icon_layout;
pub mod model;
pub mod pointer;
pub mod reducer;
pub mod runtime_context;
pub mod slideshow;
pub mod window_manager;

pub use components::DesktopShell;
pub use host::WorkspaceHostContext;
pub use model::*;
pub use reducer::{reduce_workspace, ReducerError, RuntimeEffect, WorkspaceAction};
pub use runtime_context::{use_workspace_runtime, WorkspaceProvider, WorkspaceRuntimeContext};
