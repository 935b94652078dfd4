//! Scatter layout for desktop icons.
//!
//! Icons fill a column-major grid sized from the viewport. When the catalog
//! outgrows one screen, the surplus flows onto sequential pages offset one
//! viewport-width to the right, reachable by horizontal pan. A bounded,
//! id-derived jitter roughs up the grid without ever moving an icon out of
//! its cell, so re-running the layout with the same inputs reproduces the
//! same cell assignment.

use crate::model::{FolderId, PointerPosition, TASKBAR_HEIGHT_PX};

/// Horizontal distance between grid cells.
pub const ICON_STEP_W: i32 = 128;
/// Vertical distance between grid cells.
pub const ICON_STEP_H: i32 = 148;
/// Desktop edge margin around the grid.
pub const ICON_MARGIN_PX: i32 = 24;
/// Maximum jitter per axis. Kept well under half a step so jitter cannot
/// push an icon into a neighboring cell.
pub const ICON_JITTER_PX: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Computed placement for one icon.
pub struct IconSlot {
    pub folder: FolderId,
    pub page: usize,
    pub column: i32,
    pub row: i32,
    pub position: PointerPosition,
}

/// Columns and rows that fit on one page of the given viewport.
pub fn grid_capacity(viewport_w: i32, viewport_h: i32) -> (i32, i32) {
    let usable_w = (viewport_w - 2 * ICON_MARGIN_PX).max(ICON_STEP_W);
    let usable_h = (viewport_h - TASKBAR_HEIGHT_PX - 2 * ICON_MARGIN_PX).max(ICON_STEP_H);
    ((usable_w / ICON_STEP_W).max(1), (usable_h / ICON_STEP_H).max(1))
}

/// Assigns every id a jittered grid cell, paging past one screen's capacity.
pub fn scatter_layout(viewport_w: i32, viewport_h: i32, ids: &[FolderId]) -> Vec<IconSlot> {
    let (columns, rows) = grid_capacity(viewport_w, viewport_h);
    let capacity = (columns * rows) as usize;

    ids.iter()
        .enumerate()
        .map(|(index, &folder)| {
            let page = index / capacity;
            let cell = (index % capacity) as i32;
            let row = cell % rows;
            let column = cell / rows;
            let hash = slug_hash(folder);
            let position = PointerPosition {
                x: (page as i32) * viewport_w
                    + ICON_MARGIN_PX
                    + column * ICON_STEP_W
                    + jitter(hash, 0),
                y: ICON_MARGIN_PX + row * ICON_STEP_H + jitter(hash, 16),
            };
            IconSlot {
                folder,
                page,
                column,
                row,
                position,
            }
        })
        .collect()
}

/// Draw-order hint for an icon, fixed for the life of the id.
pub fn z_layer_hint(folder: FolderId) -> u32 {
    ((slug_hash(folder) >> 32) % 16) as u32
}

// FNV-1a over the slug. Gives stable, well-spread jitter without carrying a
// PRNG or a platform random source into layout code.
fn slug_hash(folder: FolderId) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in folder.as_str().bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

fn jitter(hash: u64, shift: u32) -> i32 {
    let span = (2 * ICON_JITTER_PX + 1) as u64;
    ((hash >> shift) % span) as i32 - ICON_JITTER_PX
}
