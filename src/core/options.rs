//! Immutable control configuration, resolved once at construction.

use crate::core::geo::{LngLat, LngLatBounds};
use crate::view::{FillStyle, LineStyle};
use crate::zoom::{self, ZoomRule};
use crate::{MinimapError, Result};

/// Corner of the primary map the control is placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Where the minimap's initial (and fallback) bounds come from
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsPolicy {
    /// Snapshot the primary map's bounds when the minimap style is ready
    Parent,
    /// Use an explicitly configured box
    Explicit(LngLatBounds),
}

/// Configuration snapshot consumed at construction.
///
/// Fields are public for struct-literal construction; the `with_*` builders
/// cover the common adjustments. Validation runs once when the control is
/// created, so a malformed table or box fails fast rather than mid-drag.
#[derive(Debug, Clone)]
pub struct MinimapOptions {
    /// Identifier handed to the embedding container
    pub id: String,
    pub position: ControlPosition,
    /// Container size in pixels
    pub width: u32,
    pub height: u32,
    /// Style URL or name for the minimap view
    pub style: String,
    /// Initial center of the minimap view
    pub center: LngLat,
    /// Initial and fallback zoom of the minimap view
    pub zoom: f64,
    /// Ordered zoom decision table, first match wins
    pub zoom_levels: Vec<ZoomRule>,
    pub bounds: BoundsPolicy,
    pub line_color: String,
    pub line_width: f64,
    pub line_opacity: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
    /// Whether drag-to-pan stays enabled on the minimap view
    pub drag_pan: bool,
    /// Whether scroll-wheel zoom stays enabled on the minimap view
    pub scroll_zoom: bool,
}

impl Default for MinimapOptions {
    fn default() -> Self {
        Self {
            id: "minimap".to_string(),
            position: ControlPosition::BottomLeft,
            width: 320,
            height: 181,
            style: "mapbox://styles/mapbox/streets-v8".to_string(),
            center: LngLat::default(),
            zoom: 6.0,
            zoom_levels: zoom::default_zoom_levels(),
            bounds: BoundsPolicy::Parent,
            line_color: "#08F".to_string(),
            line_width: 1.0,
            line_opacity: 1.0,
            fill_color: "#F80".to_string(),
            fill_opacity: 0.25,
            drag_pan: false,
            scroll_zoom: false,
        }
    }
}

impl MinimapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, center: LngLat) -> Self {
        self.center = center;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_zoom_levels(mut self, zoom_levels: Vec<ZoomRule>) -> Self {
        self.zoom_levels = zoom_levels;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_drag_pan(mut self, enabled: bool) -> Self {
        self.drag_pan = enabled;
        self
    }

    pub fn with_scroll_zoom(mut self, enabled: bool) -> Self {
        self.scroll_zoom = enabled;
        self
    }

    /// Outline styling for the tracking rectangle layer
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            color: self.line_color.clone(),
            width: self.line_width,
            opacity: self.line_opacity,
        }
    }

    /// Fill styling for the tracking rectangle layer
    pub fn fill_style(&self) -> FillStyle {
        FillStyle {
            color: self.fill_color.clone(),
            opacity: self.fill_opacity,
        }
    }

    /// Fails fast on malformed configuration
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MinimapError::Config(
                "minimap size must be non-zero".to_string(),
            ));
        }

        if !self.zoom.is_finite() || self.zoom < 0.0 {
            return Err(MinimapError::Config(format!(
                "initial zoom must be a non-negative number, got {}",
                self.zoom
            )));
        }

        if !self.center.is_finite() {
            return Err(MinimapError::Config(
                "initial center must be finite".to_string(),
            ));
        }

        for (index, rule) in self.zoom_levels.iter().enumerate() {
            if !rule.is_valid() {
                return Err(MinimapError::Config(format!(
                    "zoom rule {} contains a non-finite threshold: {:?}",
                    index, rule
                )));
            }
        }

        if let BoundsPolicy::Explicit(bounds) = &self.bounds {
            if !bounds.is_valid() {
                return Err(MinimapError::Config(format!(
                    "explicit bounds are inverted: {:?}",
                    bounds
                )));
            }
        }

        for (name, opacity) in [
            ("line opacity", self.line_opacity),
            ("fill opacity", self.fill_opacity),
        ] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(MinimapError::Config(format!(
                    "{} must be within 0..=1, got {}",
                    name, opacity
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_control() {
        let options = MinimapOptions::default();
        assert_eq!(options.id, "minimap");
        assert_eq!(options.width, 320);
        assert_eq!(options.height, 181);
        assert_eq!(options.zoom, 6.0);
        assert_eq!(options.zoom_levels.len(), 5);
        assert_eq!(options.bounds, BoundsPolicy::Parent);
        assert_eq!(options.line_color, "#08F");
        assert_eq!(options.fill_color, "#F80");
        assert!(!options.drag_pan);
        assert!(!options.scroll_zoom);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let options = MinimapOptions::new()
            .with_zoom(4.0)
            .with_size(200, 150)
            .with_position(ControlPosition::TopRight)
            .with_scroll_zoom(true);

        assert_eq!(options.zoom, 4.0);
        assert_eq!((options.width, options.height), (200, 150));
        assert_eq!(options.position, ControlPosition::TopRight);
        assert!(options.scroll_zoom);
    }

    #[test]
    fn test_validate_rejects_non_finite_rule() {
        let options =
            MinimapOptions::new().with_zoom_levels(vec![ZoomRule::new(f64::NAN, 14.0, 16.0)]);
        assert!(matches!(
            options.validate(),
            Err(MinimapError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let options = MinimapOptions::new().with_bounds(BoundsPolicy::Explicit(
            LngLatBounds::from_coords(10.0, 10.0, 0.0, 0.0),
        ));
        assert!(matches!(
            options.validate(),
            Err(MinimapError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_opacity() {
        let mut options = MinimapOptions::new();
        options.fill_opacity = 1.5;
        assert!(matches!(
            options.validate(),
            Err(MinimapError::Config(_))
        ));
    }

    #[test]
    fn test_styles_built_from_options() {
        let options = MinimapOptions::default();
        let line = options.line_style();
        assert_eq!(line.color, "#08F");
        assert_eq!(line.width, 1.0);
        assert_eq!(options.fill_style().opacity, 0.25);
    }
}
