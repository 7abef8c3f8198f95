//! Tracking rectangle geometry.
//!
//! Pure conversions between a geographic bounding box and the closed polygon
//! feature drawn on the minimap. The rectangle is rebuilt, never mutated in
//! place, whenever the primary viewport or a drag offset changes.

use crate::core::geo::{LngLat, LngLatBounds};
use serde::{Deserialize, Serialize};

/// Name of the vector source (and feature) carrying the viewport rectangle
pub const TRACKING_RECT_SOURCE: &str = "trackingRect";

/// Layer id for the rectangle outline
pub const TRACKING_RECT_OUTLINE: &str = "trackingRectOutline";

/// Layer id for the rectangle fill, the drag target
pub const TRACKING_RECT_FILL: &str = "trackingRectFill";

/// GeoJSON geometry payload for the rectangle feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// Properties block carried by the rectangle feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub name: String,
}

/// GeoJSON feature pushed wholesale to the minimap's vector source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

/// The viewport rectangle shown on the minimap: a closed five-point ring with
/// corners in NE, NW, SW, SE order and the first point repeated as the last
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingRect {
    ring: [LngLat; 5],
}

impl TrackingRect {
    /// Builds the rectangle for the given bounds, shifting every coordinate
    /// by subtracting the offset component-wise
    pub fn from_bounds(bounds: &LngLatBounds, offset: LngLat) -> Self {
        let ne = bounds.north_east;
        let sw = bounds.south_west;

        let corner = |lng: f64, lat: f64| LngLat::new(lng - offset.lng, lat - offset.lat);

        Self {
            ring: [
                corner(ne.lng, ne.lat),
                corner(sw.lng, ne.lat),
                corner(sw.lng, sw.lat),
                corner(ne.lng, sw.lat),
                corner(ne.lng, ne.lat),
            ],
        }
    }

    /// The closed ring, first point equal to the last
    pub fn ring(&self) -> &[LngLat; 5] {
        &self.ring
    }

    /// Exact envelope of the ring: folds over every vertex, extending a
    /// running bounding box. No padding is applied.
    pub fn bounds(&self) -> LngLatBounds {
        let mut bounds = LngLatBounds::new(self.ring[0], self.ring[0]);
        for point in &self.ring[1..] {
            bounds.extend(point);
        }
        bounds
    }

    /// Returns this rectangle translated by subtracting the offset
    pub fn translated(&self, offset: LngLat) -> TrackingRect {
        TrackingRect::from_bounds(&self.bounds(), offset)
    }

    /// Serializable feature payload for the minimap's vector source
    pub fn to_feature(&self) -> Feature {
        let coordinates = vec![self.ring.iter().map(|p| [p.lng, p.lat]).collect()];

        Feature {
            properties: FeatureProperties {
                name: TRACKING_RECT_SOURCE.to_string(),
            },
            geometry: Geometry::Polygon { coordinates },
        }
    }

    /// Rebuilds a rectangle from a feature previously produced by
    /// [`TrackingRect::to_feature`]. A feature without exactly one ring of
    /// five positions is a programming error.
    pub fn from_feature(feature: &Feature) -> TrackingRect {
        let Geometry::Polygon { coordinates } = &feature.geometry;
        assert_eq!(coordinates.len(), 1, "tracking rect must have one ring");
        assert_eq!(coordinates[0].len(), 5, "tracking rect ring must be closed");

        let mut ring = [LngLat::default(); 5];
        for (slot, coord) in ring.iter_mut().zip(&coordinates[0]) {
            *slot = LngLat::new(coord[0], coord[1]);
        }
        TrackingRect { ring }
    }
}
