//! Capability contract for the external map views.
//!
//! The control never touches rendering, tiles, or the DOM; everything it
//! needs from the primary map and the minimap goes through [`MapView`]. The
//! embedding layer implements this trait over its actual map engine and
//! forwards that engine's notifications as [`MapEvent`](crate::MapEvent)s.

use crate::core::geo::{LngLat, LngLatBounds, ScreenPoint};
use crate::geometry::Feature;

/// Origin tag carried by view-update commands and notifications.
///
/// Commands issued by the control itself are tagged `Programmatic` so the
/// resulting move/zoom notifications can be told apart from user navigation.
/// The sync handlers ignore programmatic notifications, which is what keeps
/// the two maps from correcting each other forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    UserInitiated,
    Programmatic,
}

/// Cursor affordance shown over the minimap canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Move,
}

/// Options for fitting a view to a bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct FitBoundsOptions {
    /// Padding around the bounds, in pixels
    pub padding: f64,
    /// Transition duration in milliseconds
    pub duration_ms: u64,
    /// Who asked for this fit
    pub origin: UpdateOrigin,
}

impl Default for FitBoundsOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            duration_ms: 0,
            origin: UpdateOrigin::Programmatic,
        }
    }
}

/// Styling for the tracking rectangle's outline layer
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
}

/// Styling for the tracking rectangle's fill layer
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub color: String,
    pub opacity: f64,
}

/// Capabilities the control consumes from a map view instance.
///
/// One implementation serves both roles; the control holds the minimap view
/// and receives the primary view by reference in its event handlers.
pub trait MapView {
    /// Current viewport as a geographic bounding box
    fn bounds(&self) -> LngLatBounds;

    /// Current center of the view
    fn center(&self) -> LngLat;

    /// Current zoom level
    fn zoom(&self) -> f64;

    fn set_center(&mut self, center: LngLat);

    fn set_zoom(&mut self, zoom: f64);

    /// Fits the view to the given bounds
    fn fit_bounds(&mut self, bounds: &LngLatBounds, options: &FitBoundsOptions);

    /// Installs a named vector source holding the given feature
    fn add_source(&mut self, id: &str, data: &Feature);

    /// Adds a line layer rendering the named source
    fn add_line_layer(&mut self, id: &str, source: &str, style: &LineStyle);

    /// Adds a fill layer rendering the named source
    fn add_fill_layer(&mut self, id: &str, source: &str, style: &FillStyle);

    /// Replaces the named source's data wholesale
    fn set_source_data(&mut self, id: &str, data: &Feature);

    fn remove_layer(&mut self, id: &str);

    fn remove_source(&mut self, id: &str);

    /// Returns whether any of the named layers render under the screen point
    fn hit_test(&self, point: ScreenPoint, layer_ids: &[&str]) -> bool;

    /// Sets the cursor shown over the view's canvas
    fn set_cursor(&mut self, cursor: Cursor);

    /// Enables or disables drag-to-pan interaction on the view
    fn set_drag_pan(&mut self, enabled: bool);

    /// Enables or disables scroll-wheel zoom on the view
    fn set_scroll_zoom(&mut self, enabled: bool);
}
