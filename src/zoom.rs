//! Zoom coordination between the primary map and the minimap.
//!
//! The minimap does not mirror the primary map's zoom directly; instead an
//! ordered rule table decides when the minimap zooms along and when it only
//! recenters. Rules are evaluated top to bottom and the first match wins, so
//! overlaps between rows are resolved purely by declaration order. That is a
//! configuration contract, not an inferred optimum.

use crate::core::geo::{LngLat, LngLatBounds};
use serde::{Deserialize, Serialize};

/// One row of the zoom decision table.
///
/// Reads as: "if the primary map zoom is at least `parent_zoom` and the
/// minimap zoom is at least `mini_zoom`, set the minimap zoom to
/// `target_zoom`".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomRule {
    /// Minimum primary-map zoom for this rule to match
    pub parent_zoom: f64,
    /// Minimum minimap zoom required before the target zoom is applied
    pub mini_zoom: f64,
    /// Zoom applied to the minimap when both thresholds are met
    pub target_zoom: f64,
}

impl ZoomRule {
    pub fn new(parent_zoom: f64, mini_zoom: f64, target_zoom: f64) -> Self {
        Self {
            parent_zoom,
            mini_zoom,
            target_zoom,
        }
    }

    /// Checks that every threshold is a finite number
    pub fn is_valid(&self) -> bool {
        self.parent_zoom.is_finite() && self.mini_zoom.is_finite() && self.target_zoom.is_finite()
    }
}

/// The default rule table, descending by primary-map zoom threshold
pub fn default_zoom_levels() -> Vec<ZoomRule> {
    vec![
        ZoomRule::new(18.0, 14.0, 16.0),
        ZoomRule::new(16.0, 12.0, 14.0),
        ZoomRule::new(14.0, 10.0, 12.0),
        ZoomRule::new(12.0, 8.0, 10.0),
        ZoomRule::new(10.0, 6.0, 8.0),
    ]
}

/// Action the orchestrator applies to the minimap view after a primary-map
/// pan or zoom
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomAction {
    /// A rule matched with both thresholds met: zoom and recenter
    SetZoomAndCenter { zoom: f64, center: LngLat },
    /// A rule matched but the minimap zoom threshold was not met: the minimap
    /// still tracks the primary map's center, zoom is left alone
    RecenterOnly { center: LngLat },
    /// No rule matched and the minimap has drifted off its default zoom:
    /// refit the fallback bounds (when configured) and restore the default
    ResetToFallback {
        zoom: f64,
        bounds: Option<LngLatBounds>,
    },
    /// No rule matched and the minimap already sits at its default zoom
    NoOp,
}

/// Inputs handed to a custom zoom-adjust strategy
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomContext {
    pub parent_zoom: f64,
    pub mini_zoom: f64,
    pub parent_center: LngLat,
}

/// Replaceable zoom-adjust strategy, resolved once at construction
pub type ZoomAdjustFn = Box<dyn FnMut(&ZoomContext) -> ZoomAction + Send>;

/// Decides what the minimap view should do for the given zoom pair.
///
/// Zoom levels are truncated to whole numbers before comparison. Iteration is
/// first-match-wins: within the matching rule the zoom is only overridden when
/// the minimap threshold is met, but centering on the primary map always
/// happens on any match.
pub fn decide(
    parent_zoom: f64,
    mini_zoom: f64,
    rules: &[ZoomRule],
    default_zoom: f64,
    fallback_bounds: Option<&LngLatBounds>,
    parent_center: LngLat,
) -> ZoomAction {
    let parent = parent_zoom.trunc();
    let mini = mini_zoom.trunc();

    for rule in rules {
        if parent >= rule.parent_zoom {
            if mini >= rule.mini_zoom {
                return ZoomAction::SetZoomAndCenter {
                    zoom: rule.target_zoom,
                    center: parent_center,
                };
            }
            return ZoomAction::RecenterOnly {
                center: parent_center,
            };
        }
    }

    if mini != default_zoom {
        return ZoomAction::ResetToFallback {
            zoom: default_zoom,
            bounds: fallback_bounds.cloned(),
        };
    }

    ZoomAction::NoOp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<ZoomRule> {
        vec![
            ZoomRule::new(18.0, 14.0, 16.0),
            ZoomRule::new(16.0, 12.0, 14.0),
        ]
    }

    fn center() -> LngLat {
        LngLat::new(1.0, 2.0)
    }

    #[test]
    fn test_rule_match_with_zoom_override() {
        let action = decide(19.0, 15.0, &rules(), 6.0, None, center());
        assert_eq!(
            action,
            ZoomAction::SetZoomAndCenter {
                zoom: 16.0,
                center: center()
            }
        );
    }

    #[test]
    fn test_rule_match_recenter_only() {
        // First rule matches but the minimap zoom threshold is not met
        let action = decide(19.0, 10.0, &rules(), 6.0, None, center());
        assert_eq!(
            action,
            ZoomAction::RecenterOnly { center: center() }
        );
    }

    #[test]
    fn test_no_match_at_default_zoom() {
        let action = decide(5.0, 6.0, &rules(), 6.0, None, center());
        assert_eq!(action, ZoomAction::NoOp);
    }

    #[test]
    fn test_no_match_off_default_zoom() {
        let fallback = LngLatBounds::from_coords(0.0, 0.0, 10.0, 10.0);
        let action = decide(5.0, 9.0, &rules(), 6.0, Some(&fallback), center());
        assert_eq!(
            action,
            ZoomAction::ResetToFallback {
                zoom: 6.0,
                bounds: Some(fallback)
            }
        );
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // parent 19 satisfies both rows; the first row's thresholds govern
        let action = decide(19.0, 13.0, &rules(), 6.0, None, center());
        assert_eq!(
            action,
            ZoomAction::RecenterOnly { center: center() }
        );
    }

    #[test]
    fn test_zoom_levels_are_truncated() {
        // 17.9 truncates to 17, below the first row's threshold of 18
        let action = decide(17.9, 12.4, &rules(), 6.0, None, center());
        assert_eq!(
            action,
            ZoomAction::SetZoomAndCenter {
                zoom: 14.0,
                center: center()
            }
        );
    }

    #[test]
    fn test_default_table_shape() {
        let levels = default_zoom_levels();
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0], ZoomRule::new(18.0, 14.0, 16.0));
        assert_eq!(levels[4], ZoomRule::new(10.0, 6.0, 8.0));
        assert!(levels.iter().all(|rule| rule.is_valid()));
    }
}
