//! Shared structural, shell, overlay, and control primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod overlays;
mod shell;

pub use controls::{Button, IconButton, TextArea, TextField};
pub use overlays::FloatingPanel;
pub use shell::{
    DesktopBackdrop, DesktopIconLayer, DesktopIconSprite, DesktopRoot, DesktopWindowLayer,
    ResizeGrip, Taskbar, TaskbarButton, TaskbarSection, TaskbarTile, WindowBody, WindowControls,
    WindowDot, WindowDotKind, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic button emphasis variants.
pub enum ButtonVariant {
    /// Standard raised button.
    #[default]
    Standard,
    /// Low-emphasis button for chrome surfaces.
    Quiet,
    /// High-emphasis call-to-action button.
    Accent,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Standardized button sizes.
pub enum ButtonSize {
    /// Compact button for window chrome.
    Sm,
    /// Default button size.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
