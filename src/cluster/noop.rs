//! Passthrough strategy: every marker is its own cluster.

use super::core::noop;
use super::traits::{Algorithm, AlgorithmInput, AlgorithmOutput, Marker, OutputChange};
use crate::error::Result;

/// Strategy that never groups: each marker maps onto a singleton cluster,
/// in input order, at any zoom.
///
/// Useful for switching clustering off behind the same [`Algorithm`] seam.
/// The mapping is deterministic per input, so the output is reported
/// [`OutputChange::Unchanged`] and renderers keyed on the flag can skip the
/// associated work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopAlgorithm;

impl NoopAlgorithm {
    /// Create the passthrough strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<M: Marker + Clone> Algorithm<M> for NoopAlgorithm {
    fn calculate(&mut self, input: AlgorithmInput<'_, M>) -> Result<AlgorithmOutput<M>> {
        Ok(AlgorithmOutput {
            clusters: noop(input.markers),
            change: OutputChange::Unchanged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{LatLng, LatLngBounds, Point};
    use crate::map::{MapView, Projection};

    struct FlatProjection;

    impl Projection for FlatProjection {
        fn project(&self, position: LatLng) -> Point {
            Point::new(position.lng, -position.lat)
        }
    }

    #[test]
    fn test_one_cluster_per_marker_at_any_zoom() {
        let markers = vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 0.0), // duplicates stay distinct clusters
            LatLng::new(45.0, 90.0),
        ];
        let bounds = LatLngBounds::new(LatLng::new(-50.0, -50.0), LatLng::new(50.0, 50.0));

        for zoom in [2.0, 16.0, 20.0] {
            let map = MapView::new(zoom, bounds);
            let mut algorithm = NoopAlgorithm::new();
            let output = algorithm
                .calculate(AlgorithmInput {
                    markers: &markers,
                    map: &map,
                    projection: &FlatProjection,
                })
                .unwrap();

            assert_eq!(output.change, OutputChange::Unchanged);
            assert_eq!(output.clusters.len(), markers.len());
            for (marker, cluster) in markers.iter().zip(&output.clusters) {
                assert_eq!(cluster.markers(), &[*marker]);
                assert_eq!(cluster.position(), *marker);
            }
        }
    }
}
