//! Shared window-geometry transition helpers used by the workspace reducer.

use crate::catalog;
use crate::model::{FolderId, PointerPosition, WindowRect, WindowState, TASKBAR_HEIGHT_PX};
use crate::pointer::DragBounds;

/// Minimum managed window width; resizing clamps here, never lower.
pub const MIN_WINDOW_WIDTH: i32 = 320;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 220;
/// Base z-index of the window layer; catalog position stacks on top of it.
pub const WINDOW_LAYER_BASE: i32 = 60;

/// The rect a maximized window occupies: everything above the taskbar.
pub fn maximized_rect(viewport_w: i32, viewport_h: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport_w,
        h: viewport_h - TASKBAR_HEIGHT_PX,
    }
}

/// Flips a window between normal and maximized.
///
/// Maximizing snapshots the current geometry into `restore_rect`; restoring
/// consumes the snapshot. Both halves happen inside one call so the snapshot
/// can never be observed half-applied.
pub fn toggle_maximize(window: &mut WindowState, viewport_w: i32, viewport_h: i32) {
    if window.maximized {
        if let Some(rect) = window.restore_rect.take() {
            window.rect = rect;
        }
        window.maximized = false;
    } else {
        window.restore_rect = Some(window.rect);
        window.rect = maximized_rect(viewport_w, viewport_h);
        window.maximized = true;
    }
}

/// Applies a south-east corner resize to the rect captured at pointer-down.
///
/// Width and height floor at the minimums; there is intentionally no upper
/// clamp, a window may grow past the viewport.
pub fn resized_rect(
    rect_start: WindowRect,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
) -> WindowRect {
    WindowRect {
        w: (rect_start.w + (pointer.x - pointer_start.x)).max(MIN_WINDOW_WIDTH),
        h: (rect_start.h + (pointer.y - pointer_start.y)).max(MIN_WINDOW_HEIGHT),
        ..rect_start
    }
}

/// Drag bounds keeping a window inside the viewport.
pub fn move_bounds(rect: WindowRect, viewport_w: i32, viewport_h: i32) -> DragBounds {
    DragBounds {
        container: (viewport_w, viewport_h),
        entity: (rect.w, rect.h),
    }
}

/// Draw layer for a window: catalog order decides stacking, there is no
/// bring-to-front reordering on focus.
pub fn window_layer(folder: FolderId) -> i32 {
    WINDOW_LAYER_BASE + catalog::position_of(folder).unwrap_or(0) as i32
}
