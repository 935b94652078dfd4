//! Centralized icon abstraction for the desktop shell.
//!
//! Semantic icon identifiers and a single SVG renderer keep shell components
//! from embedding raw SVG snippets. All glyphs are simple 24px filled paths.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Playback start glyph.
    Play,
    /// Playback pause glyph.
    Pause,
    /// Speaker with sound waves.
    SpeakerOn,
    /// Speaker struck through.
    SpeakerMute,
    /// Dismiss/close glyph.
    Dismiss,
    /// Minimize-to-taskbar glyph.
    Minimize,
    /// Previous-slide chevron.
    ChevronLeft,
    /// Next-slide chevron.
    ChevronRight,
    /// Music note, used by the taskbar music toggle.
    MusicNote,
    /// Chat bubble, used by the taskbar contact button.
    ChatBubble,
    /// Outbound-link arrow.
    ExternalLink,
    /// Search magnifier.
    Search,
    /// Closed folder, fallback desktop thumbnail.
    FolderClosed,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::SpeakerOn => "speaker-on",
            Self::SpeakerMute => "speaker-mute",
            Self::Dismiss => "dismiss",
            Self::Minimize => "minimize",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::MusicNote => "music-note",
            Self::ChatBubble => "chat-bubble",
            Self::ExternalLink => "external-link",
            Self::Search => "search",
            Self::FolderClosed => "folder-closed",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Play => r#"<path d="M8 5v14l11-7z"/>"#,
            Self::Pause => r#"<path d="M6 4h4v16H6V4zm8 0h4v16h-4V4z"/>"#,
            Self::SpeakerOn => {
                r#"<path d="M3 9v6h4l5 5V4L7 9H3zm13.5 3A4.5 4.5 0 0 0 14 7.97v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z"/>"#
            }
            Self::SpeakerMute => {
                r#"<path d="M3.63 3.63a1 1 0 0 0 0 1.41L7.29 8.7 7 9H4a1 1 0 0 0-1 1v4a1 1 0 0 0 1 1h3l5 5a1 1 0 0 0 1.707-.707V13.41l5.953 5.953a1 1 0 0 0 1.414-1.414l-16-16a1 1 0 0 0-1.414 0zM12 4.293a1 1 0 0 0-1.707-.707L7.707 6.172 12 10.465V4.293zm4.536 2.121-1.414 1.414A4 4 0 0 1 17 11a4.019 4.019 0 0 1-.93 2.56l1.414 1.414A6 6 0 0 0 19 11a5.98 5.98 0 0 0-2.464-4.586z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="M6.22 5.16 12 10.94l5.78-5.78 1.06 1.06L13.06 12l5.78 5.78-1.06 1.06L12 13.06l-5.78 5.78-1.06-1.06L10.94 12 5.16 6.22z"/>"#
            }
            Self::Minimize => r#"<path d="M4 12.25h16v1.5H4z"/>"#,
            Self::ChevronLeft => {
                r#"<path d="M14.7 5.3 8 12l6.7 6.7 1.06-1.06L10.12 12l5.64-5.64z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M9.3 5.3 8.24 6.36 13.88 12l-5.64 5.64L9.3 18.7 16 12z"/>"#
            }
            Self::MusicNote => r#"<path d="M9 3v10.55A4 4 0 1 0 11 17V7h8V3H9z"/>"#,
            Self::ChatBubble => {
                r#"<path d="M4 4h16v12.5H8.12L4 20.62V4zm1.5 1.5v11.5l2-2h11V5.5h-13z"/>"#
            }
            Self::ExternalLink => {
                r#"<path d="M14 4h6v6h-1.5V6.56l-7.22 7.22-1.06-1.06 7.22-7.22H14V4zM5 7h5v1.5H6.5v9h9V13H17v6H5V7z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 4a6 6 0 1 0 3.9 10.62l4.74 4.74 1.06-1.06-4.74-4.74A6 6 0 0 0 10 4zm0 1.5a4.5 4.5 0 1 1 0 9 4.5 4.5 0 0 1 0-9z"/>"#
            }
            Self::FolderClosed => {
                r#"<path d="M4 5h6l2 2h8v12H4V5zm1.5 1.5v9h13V8.5h-7.12l-2-2H5.5z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (buttons, taskbar).
    #[default]
    Sm,
    /// 20px medium icon (transport controls).
    Md,
    /// 24px large icon (desktop thumbnails).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an SVG icon from the centralized shell icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
