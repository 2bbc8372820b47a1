//! Shared orchestration for clustering strategies.
//!
//! The split in this layer is between *when* to cluster (zoom gating,
//! viewport filtering) and *how* to group (the strategy). Strategies inject
//! their grouping as a closure into [`calculate_with_zoom_bypass`] or
//! [`calculate_in_viewport`] and share the pre-processing unchanged; any
//! type implementing [`Algorithm`](super::Algorithm) may also run an
//! entirely custom `calculate`.

use super::entity::Cluster;
use super::traits::{AlgorithmInput, AlgorithmOutput, Marker, OutputChange};
use super::viewport::filter_markers_to_padded_viewport;
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zoom level at and above which clustering is bypassed.
pub const DEFAULT_MAX_ZOOM: f64 = 16.0;

/// Pixel margin added around the viewport before filtering.
pub const DEFAULT_VIEWPORT_PADDING: f64 = 60.0;

/// Options shared by every clustering strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgorithmOptions {
    /// Zoom level at and above which grouping is skipped and markers map
    /// 1:1 onto clusters. Default 16.
    pub max_zoom: f64,
}

impl Default for AlgorithmOptions {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl AlgorithmOptions {
    /// Set the bypass zoom threshold.
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }
}

/// Options for strategies that cluster only what the viewport can see.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewportAlgorithmOptions {
    /// Zoom level at and above which grouping is skipped. Default 16.
    pub max_zoom: f64,
    /// Pixels the visible bounds are extended by before filtering, so
    /// near-offscreen markers still cluster. Default 60.
    pub viewport_padding: f64,
}

impl Default for ViewportAlgorithmOptions {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
            viewport_padding: DEFAULT_VIEWPORT_PADDING,
        }
    }
}

impl ViewportAlgorithmOptions {
    /// Set the bypass zoom threshold.
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Set the viewport padding in pixels.
    pub fn with_viewport_padding(mut self, viewport_padding: f64) -> Self {
        self.viewport_padding = viewport_padding;
        self
    }
}

/// Map every marker onto its own singleton cluster, preserving input order.
///
/// This is the passthrough used whenever grouping is bypassed. It is strict:
/// every marker yields a cluster, visibility notwithstanding.
pub fn noop<M: Marker + Clone>(markers: &[M]) -> Vec<Cluster<M>> {
    markers
        .iter()
        .map(|marker| Cluster::singleton(marker.position(), marker.clone()))
        .collect()
}

/// Shared calculate path: zoom gate, then delegate grouping over the full
/// marker set.
///
/// At or above `max_zoom` the passthrough runs instead of `group` and the
/// output is pinned to [`OutputChange::Unchanged`]; below it, `group`
/// receives every input marker and the output change is
/// [`OutputChange::Unspecified`].
///
/// An unresolved zoom fails the call with [`Error::ZoomUnresolved`].
pub fn calculate_with_zoom_bypass<M, F>(
    input: AlgorithmInput<'_, M>,
    options: &AlgorithmOptions,
    group: F,
) -> Result<AlgorithmOutput<M>>
where
    M: Marker + Clone,
    F: FnOnce(&[M]) -> Result<Vec<Cluster<M>>>,
{
    let zoom = input.map.zoom().ok_or(Error::ZoomUnresolved)?;

    if zoom >= options.max_zoom {
        return Ok(AlgorithmOutput {
            clusters: noop(input.markers),
            change: OutputChange::Unchanged,
        });
    }

    let clusters = group(input.markers)?;
    Ok(AlgorithmOutput {
        clusters,
        change: OutputChange::Unspecified,
    })
}

/// Shared calculate path for viewport strategies: zoom gate, then filter to
/// the padded viewport, then delegate grouping over the survivors.
///
/// Markers outside the padded viewport (and invisible markers) are excluded
/// from the call entirely; they end up in no cluster. `group` must return an
/// empty vec for an empty filtered set.
pub fn calculate_in_viewport<M, F>(
    input: AlgorithmInput<'_, M>,
    options: &ViewportAlgorithmOptions,
    group: F,
) -> Result<AlgorithmOutput<M>>
where
    M: Marker + Clone,
    F: FnOnce(&[M]) -> Result<Vec<Cluster<M>>>,
{
    let base = AlgorithmOptions {
        max_zoom: options.max_zoom,
    };
    calculate_with_zoom_bypass(input, &base, |markers| {
        let visible = filter_markers_to_padded_viewport(
            input.map,
            input.projection,
            markers,
            options.viewport_padding,
        );
        group(&visible)
    })
}
