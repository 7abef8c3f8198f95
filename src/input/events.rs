use crate::core::geo::{LngLat, ScreenPoint};
use crate::view::UpdateOrigin;

/// Notifications the embedding layer forwards from a map view to the control.
///
/// Move and zoom notifications carry the origin of the change so corrective
/// updates issued by the control itself do not re-enter the sync path.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Viewport pan
    Move { origin: UpdateOrigin },
    /// Zoom level change
    Zoom { origin: UpdateOrigin },
    /// Pointer pressed over the view
    PointerDown { lng_lat: LngLat },
    /// Pointer moved over the view
    PointerMove { lng_lat: LngLat, screen: ScreenPoint },
    /// Pointer released
    PointerUp,
}

impl MapEvent {
    /// Checks if this is a viewport change (pan or zoom)
    pub fn is_view_change(&self) -> bool {
        matches!(self, MapEvent::Move { .. } | MapEvent::Zoom { .. })
    }

    /// Checks if this is a pointer event
    pub fn is_pointer_event(&self) -> bool {
        matches!(
            self,
            MapEvent::PointerDown { .. } | MapEvent::PointerMove { .. } | MapEvent::PointerUp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_checks() {
        let pan = MapEvent::Move {
            origin: UpdateOrigin::UserInitiated,
        };
        assert!(pan.is_view_change());
        assert!(!pan.is_pointer_event());

        let down = MapEvent::PointerDown {
            lng_lat: LngLat::new(1.0, 2.0),
        };
        assert!(down.is_pointer_event());
        assert!(!down.is_view_change());
    }
}
