//! Viewport filtering.
//!
//! Grouping only what the view can show is the main cost lever in this
//! layer: offscreen markers are dropped before the strategy ever sees them.

use super::traits::Marker;
use crate::geo::PixelBounds;
use crate::map::{MapState, Projection};

/// The view's visible bounds in pixel space, extended by `padding` pixels on
/// every side.
pub fn padded_viewport(
    map: &dyn MapState,
    projection: &dyn Projection,
    padding: f64,
) -> PixelBounds {
    let bounds = map.bounds();
    PixelBounds::from_corners(projection.project(bounds.sw), projection.project(bounds.ne))
        .pad(padding)
}

/// Filter `markers` to those whose projected position falls inside the
/// padded viewport, preserving input order.
///
/// Invisible markers are dropped here as well. Exclusion is total for the
/// current pass: a dropped marker ends up in no cluster.
pub fn filter_markers_to_padded_viewport<M: Marker + Clone>(
    map: &dyn MapState,
    projection: &dyn Projection,
    markers: &[M],
    padding: f64,
) -> Vec<M> {
    let view = padded_viewport(map, projection, padding);
    markers
        .iter()
        .filter(|marker| marker.is_visible() && view.contains(projection.project(marker.position())))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{LatLng, LatLngBounds, Point};
    use crate::map::MapView;

    struct FlatProjection;

    impl Projection for FlatProjection {
        fn project(&self, position: LatLng) -> Point {
            Point::new(position.lng, -position.lat)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Pin {
        position: LatLng,
        visible: bool,
    }

    impl Marker for Pin {
        fn position(&self) -> LatLng {
            self.position
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    fn view() -> MapView {
        MapView::new(
            8.0,
            LatLngBounds::new(LatLng::new(-10.0, -10.0), LatLng::new(10.0, 10.0)),
        )
    }

    #[test]
    fn test_padded_viewport_normalizes_and_pads() {
        let bounds = padded_viewport(&view(), &FlatProjection, 5.0);
        // Flat projection flips latitude, so corners arrive y-inverted.
        assert_eq!(bounds.min, Point::new(-15.0, -15.0));
        assert_eq!(bounds.max, Point::new(15.0, 15.0));
    }

    #[test]
    fn test_filter_excludes_outside_exact_bounds() {
        let inside = LatLng::new(5.0, 5.0);
        let outside = LatLng::new(20.0, 20.0);
        let markers = vec![outside, inside];
        let kept = filter_markers_to_padded_viewport(&view(), &FlatProjection, &markers, 0.0);
        assert_eq!(kept, vec![inside]);
    }

    #[test]
    fn test_padding_widens_inclusion() {
        let near_offscreen = LatLng::new(0.0, 12.0);
        let markers = vec![near_offscreen];

        let kept = filter_markers_to_padded_viewport(&view(), &FlatProjection, &markers, 0.0);
        assert!(kept.is_empty());

        let kept = filter_markers_to_padded_viewport(&view(), &FlatProjection, &markers, 3.0);
        assert_eq!(kept, vec![near_offscreen]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let markers = vec![
            LatLng::new(1.0, 1.0),
            LatLng::new(50.0, 50.0),
            LatLng::new(2.0, 2.0),
            LatLng::new(3.0, 3.0),
        ];
        let kept = filter_markers_to_padded_viewport(&view(), &FlatProjection, &markers, 0.0);
        assert_eq!(
            kept,
            vec![
                LatLng::new(1.0, 1.0),
                LatLng::new(2.0, 2.0),
                LatLng::new(3.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_filter_drops_invisible_markers() {
        let markers = vec![
            Pin {
                position: LatLng::new(1.0, 1.0),
                visible: true,
            },
            Pin {
                position: LatLng::new(2.0, 2.0),
                visible: false,
            },
        ];
        let kept = filter_markers_to_padded_viewport(&view(), &FlatProjection, &markers, 0.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].position, LatLng::new(1.0, 1.0));
    }

    #[test]
    fn test_filter_empty_input() {
        let markers: Vec<LatLng> = Vec::new();
        let kept = filter_markers_to_padded_viewport(&view(), &FlatProjection, &markers, 60.0);
        assert!(kept.is_empty());
    }
}
