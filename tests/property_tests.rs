use proptest::prelude::*;
use shoal::cluster::{
    filter_markers_to_padded_viewport, noop, Algorithm, AlgorithmInput, GridAlgorithm,
    OutputChange,
};
use shoal::geo::{LatLng, LatLngBounds};
use shoal::map::{MapView, WebMercator};

fn latlng() -> impl Strategy<Value = LatLng> {
    (-80.0f64..80.0, -170.0f64..170.0).prop_map(|(lat, lng)| LatLng::new(lat, lng))
}

fn world_bounds() -> LatLngBounds {
    LatLngBounds::new(LatLng::new(-85.0, -179.9), LatLng::new(85.0, 179.9))
}

proptest! {
    #[test]
    fn prop_noop_yields_ordered_singletons(
        markers in prop::collection::vec(latlng(), 0..40)
    ) {
        let clusters = noop(&markers);
        prop_assert_eq!(clusters.len(), markers.len());
        for (marker, cluster) in markers.iter().zip(&clusters) {
            prop_assert_eq!(cluster.len(), 1);
            prop_assert_eq!(cluster.position(), *marker);
            prop_assert_eq!(cluster.markers(), &[*marker]);
        }
    }

    #[test]
    fn prop_bypass_at_or_above_max_zoom(
        markers in prop::collection::vec(latlng(), 0..40),
        zoom in 16.0f64..22.0
    ) {
        let view = MapView::new(zoom, world_bounds());
        let projection = WebMercator::new(zoom);

        let mut algorithm = GridAlgorithm::new();
        let output = algorithm.calculate(AlgorithmInput {
            markers: &markers,
            map: &view,
            projection: &projection,
        }).unwrap();

        prop_assert_eq!(output.change, OutputChange::Unchanged);
        prop_assert_eq!(output.clusters.len(), markers.len());
        for (marker, cluster) in markers.iter().zip(&output.clusters) {
            prop_assert_eq!(cluster.markers(), &[*marker]);
        }
    }

    #[test]
    fn prop_grid_partitions_the_visible_set(
        markers in prop::collection::vec(latlng(), 0..40),
        zoom in 3.0f64..15.0
    ) {
        // The world-spanning view keeps every marker visible, so the output
        // clusters must partition the full input.
        let view = MapView::new(zoom, world_bounds());
        let projection = WebMercator::new(zoom);

        let mut algorithm = GridAlgorithm::new();
        let output = algorithm.calculate(AlgorithmInput {
            markers: &markers,
            map: &view,
            projection: &projection,
        }).unwrap();

        let total: usize = output.clusters.iter().map(|c| c.len()).sum();
        prop_assert_eq!(total, markers.len());
        for cluster in &output.clusters {
            prop_assert!(!cluster.is_empty());
        }
    }

    #[test]
    fn prop_grid_is_deterministic(
        markers in prop::collection::vec(latlng(), 0..40),
        zoom in 3.0f64..15.0
    ) {
        let view = MapView::new(zoom, world_bounds());
        let projection = WebMercator::new(zoom);

        let mut algorithm = GridAlgorithm::new();
        let input = AlgorithmInput {
            markers: &markers,
            map: &view,
            projection: &projection,
        };
        let first = algorithm.calculate(input).unwrap();
        let second = algorithm.calculate(input).unwrap();
        prop_assert_eq!(first.clusters, second.clusters);
    }

    #[test]
    fn prop_filter_is_an_ordered_subset(
        markers in prop::collection::vec(latlng(), 0..40),
        padding in 0.0f64..100.0
    ) {
        // A small window so filtering actually bites.
        let view = MapView::new(
            6.0,
            LatLngBounds::new(LatLng::new(-10.0, -10.0), LatLng::new(10.0, 10.0)),
        );
        let projection = WebMercator::new(6.0);

        let kept = filter_markers_to_padded_viewport(&view, &projection, &markers, padding);

        // Every kept marker occurs in the input, in input order.
        let mut cursor = markers.iter();
        for marker in &kept {
            prop_assert!(cursor.any(|m| m == marker));
        }
    }

    #[test]
    fn prop_padding_widens_inclusion_monotonically(
        markers in prop::collection::vec(latlng(), 0..40),
        padding in 0.0f64..100.0,
        extra in 0.0f64..100.0
    ) {
        let view = MapView::new(
            6.0,
            LatLngBounds::new(LatLng::new(-10.0, -10.0), LatLng::new(10.0, 10.0)),
        );
        let projection = WebMercator::new(6.0);

        let narrow = filter_markers_to_padded_viewport(&view, &projection, &markers, padding);
        let wide =
            filter_markers_to_padded_viewport(&view, &projection, &markers, padding + extra);

        prop_assert!(narrow.len() <= wide.len());
        for marker in &narrow {
            prop_assert!(wide.contains(marker));
        }
    }

    #[test]
    fn prop_empty_input_yields_empty_output(zoom in 0.0f64..22.0) {
        let markers: Vec<LatLng> = Vec::new();
        let view = MapView::new(zoom, world_bounds());
        let projection = WebMercator::new(zoom);

        let mut algorithm = GridAlgorithm::new();
        let output = algorithm.calculate(AlgorithmInput {
            markers: &markers,
            map: &view,
            projection: &projection,
        }).unwrap();

        prop_assert!(output.clusters.is_empty());
    }
}
