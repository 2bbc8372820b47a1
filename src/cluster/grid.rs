//! Grid clustering: merge each marker into the nearest cluster within a
//! fixed pixel distance.
//!
//! The strategy walks the (viewport-filtered) markers in input order. Each
//! marker joins the nearest existing cluster whose centroid projects within
//! `grid_size` pixels of the marker's own projected position, or seeds a new
//! cluster. Centroids are running means of member positions, so a cluster
//! drifts toward where its markers actually sit.
//!
//! Complexity is O(n·k) over n markers and k live clusters. Pre-filtering to
//! the padded viewport keeps n at what the view can actually show, which is
//! what makes the naive scan acceptable in practice.

use super::core::{calculate_in_viewport, ViewportAlgorithmOptions};
use super::entity::Cluster;
use super::traits::{Algorithm, AlgorithmInput, AlgorithmOutput, Marker};
use crate::error::{Error, Result};
use crate::geo::LatLng;
use crate::map::Projection;

/// Default merge distance in pixels.
pub const DEFAULT_GRID_SIZE: f64 = 40.0;

/// Distance-based grid clustering strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAlgorithm {
    options: ViewportAlgorithmOptions,
    grid_size: f64,
}

impl GridAlgorithm {
    /// Create a grid strategy with default options (grid size 40 px,
    /// max zoom 16, viewport padding 60 px).
    pub fn new() -> Self {
        Self {
            options: ViewportAlgorithmOptions::default(),
            grid_size: DEFAULT_GRID_SIZE,
        }
    }

    /// Set the merge distance in pixels.
    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the bypass zoom threshold.
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.options.max_zoom = max_zoom;
        self
    }

    /// Set the viewport padding in pixels.
    pub fn with_viewport_padding(mut self, viewport_padding: f64) -> Self {
        self.options.viewport_padding = viewport_padding;
        self
    }

    fn group<M: Marker + Clone>(
        &self,
        markers: &[M],
        projection: &dyn Projection,
    ) -> Vec<Cluster<M>> {
        let mut cells: Vec<Cell<M>> = Vec::new();

        for marker in markers {
            let position = projection.project(marker.position());

            // Nearest live cluster within grid_size, by projected centroid.
            let mut best: Option<(usize, f64)> = None;
            for (idx, cell) in cells.iter().enumerate() {
                let distance = position.distance(projection.project(cell.centroid()));
                if distance <= self.grid_size && best.map_or(true, |(_, d)| distance < d) {
                    best = Some((idx, distance));
                }
            }

            match best {
                Some((idx, _)) => cells[idx].push(marker.clone()),
                None => cells.push(Cell::seed(marker.clone())),
            }
        }

        cells.into_iter().map(Cell::into_cluster).collect()
    }
}

impl Default for GridAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Marker + Clone> Algorithm<M> for GridAlgorithm {
    fn calculate(&mut self, input: AlgorithmInput<'_, M>) -> Result<AlgorithmOutput<M>> {
        if self.grid_size <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "grid_size",
                message: "must be positive",
            });
        }

        let projection = input.projection;
        calculate_in_viewport(input, &self.options, |visible| {
            Ok(self.group(visible, projection))
        })
    }
}

/// Working state for one cluster under construction.
struct Cell<M> {
    sum_lat: f64,
    sum_lng: f64,
    members: Vec<M>,
}

impl<M: Marker> Cell<M> {
    fn seed(marker: M) -> Self {
        let position = marker.position();
        Self {
            sum_lat: position.lat,
            sum_lng: position.lng,
            members: vec![marker],
        }
    }

    fn push(&mut self, marker: M) {
        let position = marker.position();
        self.sum_lat += position.lat;
        self.sum_lng += position.lng;
        self.members.push(marker);
    }

    fn centroid(&self) -> LatLng {
        let n = self.members.len() as f64;
        LatLng::new(self.sum_lat / n, self.sum_lng / n)
    }

    fn into_cluster(self) -> Cluster<M> {
        let position = self.centroid();
        Cluster::new(position, self.members)
    }
}
