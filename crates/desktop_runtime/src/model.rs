use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pointer::DragController;

/// Height reserved for the taskbar at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

/// Geometry assigned to a content window the first time it opens.
pub const DEFAULT_WINDOW_RECT: WindowRect = WindowRect {
    x: 80,
    y: 60,
    w: 480,
    h: 360,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Stable catalog key for one portfolio folder.
pub struct FolderId(pub &'static str);

impl FolderId {
    /// The raw slug.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A pointer sample or an entity origin in viewport coordinates.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Position and size of one managed window.
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Top-left corner as a pointer-space position.
    pub fn origin(self) -> PointerPosition {
        PointerPosition {
            x: self.x,
            y: self.y,
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// Content carried by a catalog folder.
///
/// Exactly one variant is active, decided at catalog construction via
/// [`FolderContent::resolve`], which fixes the video > text > images
/// precedence so a window body is an exhaustive match rather than a chain of
/// presence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderContent {
    /// A single video reference.
    Video(&'static str),
    /// A plain text block.
    Text(&'static str),
    /// A manual slideshow over an ordered image list.
    Slideshow(&'static [&'static str]),
    /// Nothing to show; renders the empty placeholder panel.
    Empty,
}

impl FolderContent {
    /// Collapses optional source fields into one variant.
    ///
    /// Precedence is fixed: video wins over text, text over images. A record
    /// carrying several fields shows only the highest-precedence one.
    pub const fn resolve(
        video: Option<&'static str>,
        text: Option<&'static str>,
        images: &'static [&'static str],
    ) -> Self {
        if let Some(src) = video {
            Self::Video(src)
        } else if let Some(body) = text {
            Self::Text(body)
        } else if !images.is_empty() {
            Self::Slideshow(images)
        } else {
            Self::Empty
        }
    }

    /// Short badge label shown in the window titlebar.
    pub const fn kind_label(self) -> &'static str {
        match self {
            Self::Video(_) => "Video",
            Self::Text(_) => "Notes",
            Self::Slideshow(_) => "Slideshow",
            Self::Empty => "Empty",
        }
    }
}

/// One immutable catalog entry. Created once at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderRecord {
    pub id: FolderId,
    pub title: &'static str,
    /// Placement hint from the catalog; the scatter layout supersedes it.
    pub placement: PointerPosition,
    /// Optional explicit desktop thumbnail.
    pub icon: Option<&'static str>,
    pub content: FolderContent,
}

impl FolderRecord {
    /// Thumbnail for the desktop icon: explicit icon, else the first slide.
    pub fn thumbnail(&self) -> Option<&'static str> {
        self.icon.or(match self.content {
            FolderContent::Slideshow(images) => images.first().copied(),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which top-level screen is mounted.
pub enum Screen {
    /// The landing search screen.
    #[default]
    Hero,
    /// The simulated desktop.
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Render policy for non-minimized content windows.
pub enum WindowVisibility {
    /// Only the window matching the active id renders (source behavior).
    #[default]
    ActiveOnly,
    /// Every non-minimized window renders, stacked in catalog order.
    AllOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Mutable per-icon desktop state, rebuilt from scratch on every scatter.
pub struct IconState {
    pub folder: FolderId,
    pub position: PointerPosition,
    /// Draw-order hint assigned at scatter time; selection never changes it.
    pub z_layer: u32,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Geometry state for one open window. Survives minimize, dies on close.
pub struct WindowState {
    pub folder: FolderId,
    pub rect: WindowRect,
    pub maximized: bool,
    /// Geometry snapshot captured on maximize and consumed on restore.
    /// Populated exactly while `maximized` is true.
    pub restore_rect: Option<WindowRect>,
}

impl WindowState {
    pub fn new(folder: FolderId) -> Self {
        Self {
            folder,
            rect: DEFAULT_WINDOW_RECT,
            maximized: false,
            restore_rect: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Music panel state; the panel owns the single logical audio channel.
pub struct MusicPanelState {
    /// Whether playback actually started. Only flips true once the play
    /// request settles successfully, so a blocked autoplay reads as paused.
    pub playing: bool,
    pub muted: bool,
    pub position: PointerPosition,
}

impl Default for MusicPanelState {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            position: PointerPosition { x: 100, y: 100 },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The single source of truth for everything visible on the workspace.
pub struct WorkspaceState {
    pub screen: Screen,
    pub icons: Vec<IconState>,
    pub windows: Vec<WindowState>,
    /// The one focused window among non-minimized windows, if any.
    pub active_window: Option<FolderId>,
    /// Minimized ids with set semantics, enforced by the reducer.
    pub minimized: Vec<FolderId>,
    pub chat_open: bool,
    pub music_open: bool,
    pub music: MusicPanelState,
    pub visibility: WindowVisibility,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            icons: Vec::new(),
            windows: Vec::new(),
            active_window: None,
            minimized: Vec::new(),
            chat_open: false,
            // The music player greets visitors as soon as the desktop mounts.
            music_open: true,
            music: MusicPanelState::default(),
            visibility: WindowVisibility::default(),
        }
    }
}

impl WorkspaceState {
    pub fn window(&self, folder: FolderId) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.folder == folder)
    }

    pub fn is_minimized(&self, folder: FolderId) -> bool {
        self.minimized.contains(&folder)
    }

    pub fn selected_icon(&self) -> Option<FolderId> {
        self.icons.iter().find(|i| i.selected).map(|i| i.folder)
    }

    /// Whether a window should render under the current visibility policy.
    pub fn is_window_visible(&self, folder: FolderId) -> bool {
        if self.window(folder).is_none() || self.is_minimized(folder) {
            return false;
        }
        match self.visibility {
            WindowVisibility::ActiveOnly => self.active_window == Some(folder),
            WindowVisibility::AllOpen => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-flight desktop icon drag.
pub struct IconDragSession {
    pub folder: FolderId,
    pub controller: DragController,
    /// Icon position at pointer-down, for the click-vs-drag threshold.
    pub origin: PointerPosition,
    /// Set once the drag moves beyond the click threshold.
    pub displaced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-flight window titlebar drag.
pub struct WindowDragSession {
    pub folder: FolderId,
    pub controller: DragController,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-flight corner resize.
pub struct WindowResizeSession {
    pub folder: FolderId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-flight music panel drag.
pub struct PanelDragSession {
    pub controller: DragController,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer interaction state. At most one session is live.
pub struct InteractionState {
    pub icon_drag: Option<IconDragSession>,
    pub window_drag: Option<WindowDragSession>,
    pub window_resize: Option<WindowResizeSession>,
    pub panel_drag: Option<PanelDragSession>,
    /// A displacing icon drag arms this so the click fired on release does
    /// not re-run selection.
    pub suppress_icon_click: Option<FolderId>,
}
