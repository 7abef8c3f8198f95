//! # Minimap
//!
//! An overview ("minimap") control for interactive maps, inspired by the
//! classic Mapbox GL minimap plugin.
//!
//! The crate implements the synchronization engine between a primary,
//! user-navigated map view and a secondary small-scale view: it derives the
//! tracking rectangle shown on the minimap from the primary map's viewport,
//! lets the user drag that rectangle to reposition the primary map, and keeps
//! the minimap's zoom level sensible relative to the primary map's zoom via a
//! configurable decision table.
//!
//! Rendering, tile loading, and container management stay with the embedding
//! application; the control talks to both maps through the [`MapView`] trait.

pub mod control;
pub mod core;
pub mod geometry;
pub mod input;
pub mod view;
pub mod zoom;

// Re-export public API
pub use crate::core::{
    geo::{LngLat, LngLatBounds, ScreenPoint},
    options::{BoundsPolicy, ControlPosition, MinimapOptions},
};

pub use crate::control::Minimap;

pub use crate::geometry::{Feature, TrackingRect};

pub use crate::input::{
    drag::{DragController, DragState},
    events::MapEvent,
};

pub use crate::view::{Cursor, FillStyle, FitBoundsOptions, LineStyle, MapView, UpdateOrigin};

pub use crate::zoom::{ZoomAction, ZoomAdjustFn, ZoomContext, ZoomRule};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MinimapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MinimapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Control error: {0}")]
    Control(String),
}

/// Error type alias for convenience
pub type Error = MinimapError;
