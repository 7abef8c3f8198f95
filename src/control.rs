//! The minimap control: wires primary-map and minimap notifications to the
//! geometry, drag, and zoom components and issues the resulting view-update
//! commands.
//!
//! The control owns the minimap view; the primary view is passed by reference
//! into each handler by the embedding layer, which also forwards both views'
//! notifications as [`MapEvent`]s. All handlers run to completion on the
//! caller's thread; there is no internal queueing or batching.

use crate::core::geo::{LngLat, LngLatBounds, ScreenPoint};
use crate::core::options::{BoundsPolicy, MinimapOptions};
use crate::geometry::{
    TrackingRect, TRACKING_RECT_FILL, TRACKING_RECT_OUTLINE, TRACKING_RECT_SOURCE,
};
use crate::input::{drag::DragController, events::MapEvent};
use crate::view::{Cursor, FitBoundsOptions, MapView, UpdateOrigin};
use crate::zoom::{self, ZoomAction, ZoomAdjustFn, ZoomContext};
use crate::{MinimapError, Result};

/// Padding applied when fitting the minimap to its initial bounds, in pixels
const FIT_BOUNDS_PADDING: f64 = 5.0;

/// Transition duration for corrective fit-bounds calls, in milliseconds
const FIT_BOUNDS_DURATION_MS: u64 = 50;

/// Overview control synchronizing a minimap view with a primary map view.
///
/// Lifecycle: [`attach`](Minimap::attach) once the embedding container
/// exists, [`on_style_ready`](Minimap::on_style_ready) when the minimap's
/// style has loaded, then forward events via
/// [`on_parent_event`](Minimap::on_parent_event) and
/// [`on_minimap_event`](Minimap::on_minimap_event) until
/// [`detach`](Minimap::detach).
pub struct Minimap {
    options: MinimapOptions,
    mini: Box<dyn MapView>,
    drag: DragController,
    tracking_rect: Option<TrackingRect>,
    fallback_bounds: Option<LngLatBounds>,
    zoom_adjust: Option<ZoomAdjustFn>,
    attached: bool,
}

impl Minimap {
    /// Creates the control over an injected minimap view handle.
    /// Malformed configuration is rejected here, before any wiring happens.
    pub fn new(options: MinimapOptions, mini: Box<dyn MapView>) -> Result<Self> {
        options.validate()?;

        let fallback_bounds = match &options.bounds {
            BoundsPolicy::Explicit(bounds) => Some(bounds.clone()),
            BoundsPolicy::Parent => None,
        };

        Ok(Self {
            options,
            mini,
            drag: DragController::new(),
            tracking_rect: None,
            fallback_bounds,
            zoom_adjust: None,
            attached: false,
        })
    }

    /// Replaces the built-in zoom decision table with a custom strategy
    pub fn with_zoom_adjust(mut self, zoom_adjust: ZoomAdjustFn) -> Self {
        self.zoom_adjust = Some(zoom_adjust);
        self
    }

    pub fn options(&self) -> &MinimapOptions {
        &self.options
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Current tracking rectangle, None until the minimap style is ready
    pub fn tracking_rect(&self) -> Option<&TrackingRect> {
        self.tracking_rect.as_ref()
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Read access to the owned minimap view, mainly for the embedding layer
    pub fn mini_view(&self) -> &dyn MapView {
        self.mini.as_ref()
    }

    /// Attaches the control to the primary map. Applies the configured
    /// interaction toggles to the minimap view; source and layer installation
    /// waits for [`on_style_ready`](Minimap::on_style_ready).
    pub fn attach(&mut self, _parent: &mut dyn MapView) -> Result<()> {
        if self.attached {
            return Err(MinimapError::Control(
                "control is already attached".to_string(),
            ));
        }

        if !self.options.drag_pan {
            self.mini.set_drag_pan(false);
        }
        if !self.options.scroll_zoom {
            self.mini.set_scroll_zoom(false);
        }

        self.attached = true;
        log::debug!("minimap control attached");
        Ok(())
    }

    /// Installs the tracking rectangle once the minimap's style has loaded.
    ///
    /// Resolves the bounds policy (the `Parent` policy snapshots the primary
    /// map's current bounds), fits the minimap to the resolved box, installs
    /// the rectangle source with its outline and fill layers, and runs the
    /// first zoom adjustment.
    pub fn on_style_ready(&mut self, parent: &mut dyn MapView) -> Result<()> {
        if !self.attached {
            return Err(MinimapError::Control(
                "style ready received before attach".to_string(),
            ));
        }

        let fallback = match &self.options.bounds {
            BoundsPolicy::Parent => parent.bounds(),
            BoundsPolicy::Explicit(bounds) => bounds.clone(),
        };

        self.mini.fit_bounds(
            &fallback,
            &FitBoundsOptions {
                padding: FIT_BOUNDS_PADDING,
                duration_ms: FIT_BOUNDS_DURATION_MS,
                origin: UpdateOrigin::Programmatic,
            },
        );
        self.fallback_bounds = Some(fallback);

        let rect = TrackingRect::from_bounds(&parent.bounds(), LngLat::default());
        self.mini
            .add_source(TRACKING_RECT_SOURCE, &rect.to_feature());
        self.mini.add_line_layer(
            TRACKING_RECT_OUTLINE,
            TRACKING_RECT_SOURCE,
            &self.options.line_style(),
        );
        self.mini.add_fill_layer(
            TRACKING_RECT_FILL,
            TRACKING_RECT_SOURCE,
            &self.options.fill_style(),
        );
        self.tracking_rect = Some(rect);

        self.adjust_zoom(parent);
        log::debug!("tracking rectangle installed");
        Ok(())
    }

    /// Handles a pan or zoom notification from the primary map.
    ///
    /// Programmatic notifications are the echo of this control's own
    /// corrective fit-bounds calls and are dropped, as is anything arriving
    /// mid-drag; both would otherwise feed the update loop back into itself.
    pub fn on_parent_event(&mut self, parent: &mut dyn MapView, event: &MapEvent) {
        let origin = match event {
            MapEvent::Move { origin } | MapEvent::Zoom { origin } => *origin,
            _ => return,
        };

        if origin == UpdateOrigin::Programmatic || self.drag.is_dragging() {
            return;
        }

        self.sync_from_parent(parent);
    }

    /// Handles a pointer notification from the minimap view
    pub fn on_minimap_event(&mut self, parent: &mut dyn MapView, event: &MapEvent) {
        match event {
            MapEvent::PointerMove { lng_lat, screen } => {
                self.handle_pointer_move(parent, *lng_lat, *screen)
            }
            MapEvent::PointerDown { lng_lat } => {
                // hit state comes from the hover flag maintained on moves
                let over = self.drag.cursor_over();
                self.drag.pointer_down(*lng_lat, over);
            }
            MapEvent::PointerUp => self.drag.pointer_up(),
            _ => {}
        }
    }

    /// Detaches the control, removing the rectangle layers and source from
    /// the minimap view and resetting the drag session
    pub fn detach(&mut self) -> Result<()> {
        if !self.attached {
            return Err(MinimapError::Control(
                "control is not attached".to_string(),
            ));
        }

        if self.tracking_rect.take().is_some() {
            self.mini.remove_layer(TRACKING_RECT_FILL);
            self.mini.remove_layer(TRACKING_RECT_OUTLINE);
            self.mini.remove_source(TRACKING_RECT_SOURCE);
        }

        self.drag = DragController::new();
        self.attached = false;
        log::debug!("minimap control detached");
        Ok(())
    }

    /// Recomputes the rectangle from the primary viewport and runs the zoom
    /// strategy. No-ops before the rectangle is installed.
    fn sync_from_parent(&mut self, parent: &mut dyn MapView) {
        if self.tracking_rect.is_none() {
            return;
        }

        let rect = TrackingRect::from_bounds(&parent.bounds(), LngLat::default());
        self.mini
            .set_source_data(TRACKING_RECT_SOURCE, &rect.to_feature());
        self.tracking_rect = Some(rect);

        self.adjust_zoom(parent);
    }

    fn handle_pointer_move(
        &mut self,
        parent: &mut dyn MapView,
        lng_lat: LngLat,
        screen: ScreenPoint,
    ) {
        let over = self.mini.hit_test(screen, &[TRACKING_RECT_FILL]);
        if let Some(over) = self.drag.update_hover(over) {
            self.mini.set_cursor(if over { Cursor::Move } else { Cursor::Default });
        }

        let offset = match self.drag.pointer_move(lng_lat) {
            Some(offset) => offset,
            None => return,
        };

        let moved = match &self.tracking_rect {
            Some(rect) => rect.translated(offset),
            None => return,
        };

        self.mini
            .set_source_data(TRACKING_RECT_SOURCE, &moved.to_feature());
        let bounds = moved.bounds();
        self.tracking_rect = Some(moved);

        parent.fit_bounds(
            &bounds,
            &FitBoundsOptions {
                padding: 0.0,
                duration_ms: FIT_BOUNDS_DURATION_MS,
                origin: UpdateOrigin::Programmatic,
            },
        );
    }

    fn adjust_zoom(&mut self, parent: &mut dyn MapView) {
        let action = match &mut self.zoom_adjust {
            Some(strategy) => strategy(&ZoomContext {
                parent_zoom: parent.zoom(),
                mini_zoom: self.mini.zoom(),
                parent_center: parent.center(),
            }),
            None => zoom::decide(
                parent.zoom(),
                self.mini.zoom(),
                &self.options.zoom_levels,
                self.options.zoom,
                self.fallback_bounds.as_ref(),
                parent.center(),
            ),
        };

        self.apply_zoom_action(action);
    }

    fn apply_zoom_action(&mut self, action: ZoomAction) {
        match action {
            ZoomAction::SetZoomAndCenter { zoom, center } => {
                self.mini.set_zoom(zoom);
                self.mini.set_center(center);
            }
            ZoomAction::RecenterOnly { center } => {
                self.mini.set_center(center);
            }
            ZoomAction::ResetToFallback { zoom, bounds } => {
                if let Some(bounds) = bounds {
                    self.mini.fit_bounds(
                        &bounds,
                        &FitBoundsOptions {
                            padding: 0.0,
                            duration_ms: FIT_BOUNDS_DURATION_MS,
                            origin: UpdateOrigin::Programmatic,
                        },
                    );
                }
                self.mini.set_zoom(zoom);
            }
            ZoomAction::NoOp => {}
        }
    }
}
