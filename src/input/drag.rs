//! Pointer-driven translation of the tracking rectangle.

use crate::core::geo::LngLat;

/// Drag state of the tracking rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// State machine tracking a drag of the rectangle across the minimap.
///
/// The controller only tracks geographic pointer positions; whether the
/// pointer is over the rectangle fill is decided by the caller via
/// hit-testing and supplied as a boolean. One controller exists per control
/// instance.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    previous: LngLat,
    current: LngLat,
    cursor_over: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            previous: LngLat::default(),
            current: LngLat::default(),
            cursor_over: false,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Whether the pointer currently hovers the rectangle fill
    pub fn cursor_over(&self) -> bool {
        self.cursor_over
    }

    /// Arms the drag when the pointer went down over the rectangle fill.
    /// Returns true when the Dragging state was entered.
    pub fn pointer_down(&mut self, point: LngLat, over_rect: bool) -> bool {
        if self.state == DragState::Dragging || !over_rect {
            return false;
        }

        self.state = DragState::Dragging;
        self.previous = self.current;
        self.current = point;
        log::debug!("drag started at ({:.6}, {:.6})", point.lng, point.lat);
        true
    }

    /// Advances the pointer pair while dragging and returns the translation
    /// offset `previous - current`. Returns None when idle.
    pub fn pointer_move(&mut self, point: LngLat) -> Option<LngLat> {
        if self.state != DragState::Dragging {
            return None;
        }

        self.previous = self.current;
        self.current = point;
        Some(self.previous.subtract(&self.current))
    }

    /// Ends the drag. Idempotent when already idle.
    pub fn pointer_up(&mut self) {
        if self.state == DragState::Dragging {
            log::debug!("drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Edge-triggered hover tracking: returns Some(flag) only when the
    /// over-the-fill state actually changed, so the cursor affordance is
    /// touched once per crossing instead of on every pointer move.
    pub fn update_hover(&mut self, over: bool) -> Option<bool> {
        if self.cursor_over == over {
            return None;
        }
        self.cursor_over = over;
        Some(over)
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_over_rect_starts_drag() {
        let mut drag = DragController::new();
        assert_eq!(drag.state(), DragState::Idle);

        assert!(drag.pointer_down(LngLat::new(1.0, 1.0), true));
        assert_eq!(drag.state(), DragState::Dragging);
    }

    #[test]
    fn test_down_outside_rect_stays_idle() {
        let mut drag = DragController::new();
        assert!(!drag.pointer_down(LngLat::new(1.0, 1.0), false));
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.pointer_move(LngLat::new(2.0, 2.0)), None);
    }

    #[test]
    fn test_one_offset_per_move() {
        let mut drag = DragController::new();
        drag.pointer_down(LngLat::new(5.0, 5.0), true);

        let first = drag.pointer_move(LngLat::new(4.0, 5.0)).unwrap();
        assert_eq!(first, LngLat::new(1.0, 0.0));

        let second = drag.pointer_move(LngLat::new(4.0, 3.0)).unwrap();
        assert_eq!(second, LngLat::new(0.0, 2.0));

        drag.pointer_up();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.pointer_move(LngLat::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_pointer_up_is_idempotent() {
        let mut drag = DragController::new();
        drag.pointer_down(LngLat::new(1.0, 1.0), true);

        drag.pointer_up();
        let after_first = drag.clone();
        drag.pointer_up();

        assert_eq!(drag.state(), after_first.state());
        assert_eq!(drag.pointer_move(LngLat::new(2.0, 2.0)), None);
    }

    #[test]
    fn test_hover_edges_only() {
        let mut drag = DragController::new();

        assert_eq!(drag.update_hover(false), None);
        assert_eq!(drag.update_hover(true), Some(true));
        // lingering inside the fill must not re-trigger
        assert_eq!(drag.update_hover(true), None);
        assert_eq!(drag.update_hover(false), Some(false));
        assert_eq!(drag.update_hover(false), None);
    }

    #[test]
    fn test_previous_point_seeded_from_last_known() {
        let mut drag = DragController::new();
        drag.pointer_down(LngLat::new(3.0, 3.0), true);
        drag.pointer_up();

        // next drag seeds previous from the last known current point
        drag.pointer_down(LngLat::new(7.0, 7.0), true);
        let offset = drag.pointer_move(LngLat::new(6.0, 7.0)).unwrap();
        assert_eq!(offset, LngLat::new(1.0, 0.0));
    }
}
