//! Pointer-drag primitive shared by icons, windows, and floating panels.
//!
//! The controller converts a stream of pointer samples into entity positions.
//! It owns no entity state: callers apply the returned coordinates, which
//! keeps the same math reusable across mouse, touch, and pen input.

use crate::model::PointerPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-axis clamp window for a bounded drag.
pub struct DragBounds {
    /// Containing extents (normally the viewport).
    pub container: (i32, i32),
    /// Dragged entity extents.
    pub entity: (i32, i32),
}

impl DragBounds {
    fn clamp(self, position: PointerPosition) -> PointerPosition {
        let max_x = (self.container.0 - self.entity.0).max(0);
        let max_y = (self.container.1 - self.entity.1).max(0);
        PointerPosition {
            x: position.x.clamp(0, max_x),
            y: position.y.clamp(0, max_y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grip {
    offset_x: i32,
    offset_y: i32,
    bounds: Option<DragBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Converts pointer samples into clamped entity positions for one drag.
pub struct DragController {
    grip: Option<Grip>,
}

impl DragController {
    /// Captures the offset between the pointer and the entity origin.
    ///
    /// Passing `None` for `bounds` leaves the drag unclamped (desktop icons
    /// may leave the viewport by design).
    pub fn begin(
        &mut self,
        pointer: PointerPosition,
        origin: PointerPosition,
        bounds: Option<DragBounds>,
    ) {
        self.grip = Some(Grip {
            offset_x: pointer.x - origin.x,
            offset_y: pointer.y - origin.y,
            bounds,
        });
    }

    /// Computes the entity position for a pointer sample.
    ///
    /// Returns `None` when no drag is active, so stray move events before
    /// `begin` (or after `end`) are no-ops.
    pub fn update(&self, pointer: PointerPosition) -> Option<PointerPosition> {
        let grip = self.grip?;
        let position = PointerPosition {
            x: pointer.x - grip.offset_x,
            y: pointer.y - grip.offset_y,
        };
        Some(match grip.bounds {
            Some(bounds) => bounds.clamp(position),
            None => position,
        })
    }

    /// Ends the drag. Safe to call repeatedly.
    pub fn end(&mut self) {
        self.grip = None;
    }

    pub fn is_active(&self) -> bool {
        self.grip.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn update_before_begin_is_a_noop() {
        let controller = DragController::default();
        assert_eq!(controller.update(at(50, 50)), None);
    }

    #[test]
    fn update_applies_grab_offset() {
        let mut controller = DragController::default();
        controller.begin(at(110, 75), at(100, 60), None);
        assert_eq!(controller.update(at(130, 95)), Some(at(120, 80)));
    }

    #[test]
    fn unbounded_drag_allows_negative_and_overshooting_positions() {
        let mut controller = DragController::default();
        controller.begin(at(10, 10), at(0, 0), None);
        assert_eq!(controller.update(at(-200, 5000)), Some(at(-210, 4990)));
    }

    #[test]
    fn bounded_drag_clamps_each_axis_independently() {
        let mut controller = DragController::default();
        let bounds = DragBounds {
            container: (1000, 700),
            entity: (400, 300),
        };
        controller.begin(at(0, 0), at(0, 0), Some(bounds));
        assert_eq!(controller.update(at(-50, 250)), Some(at(0, 250)));
        assert_eq!(controller.update(at(900, -10)), Some(at(600, 0)));
        assert_eq!(controller.update(at(2000, 2000)), Some(at(600, 400)));
    }

    #[test]
    fn oversized_entity_pins_to_origin() {
        let mut controller = DragController::default();
        let bounds = DragBounds {
            container: (300, 300),
            entity: (500, 500),
        };
        controller.begin(at(0, 0), at(0, 0), Some(bounds));
        assert_eq!(controller.update(at(120, -40)), Some(at(0, 0)));
    }

    #[test]
    fn end_is_idempotent_and_stops_updates() {
        let mut controller = DragController::default();
        controller.begin(at(0, 0), at(0, 0), None);
        controller.end();
        controller.end();
        assert!(!controller.is_active());
        assert_eq!(controller.update(at(10, 10)), None);
    }

    #[test]
    fn begin_replaces_a_previous_grip() {
        let mut controller = DragController::default();
        controller.begin(at(10, 10), at(0, 0), None);
        controller.begin(at(0, 0), at(40, 40), None);
        assert_eq!(controller.update(at(1, 1)), Some(at(41, 41)));
    }
}
