use std::fmt;

use super::entity::Cluster;
use crate::error::Result;
use crate::geo::LatLng;
use crate::map::{MapState, Projection};

/// A point placed on the map.
///
/// The clustering layer only ever reads a marker's position and visibility.
/// Markers stay owned by the caller; clusters hold cloned handles, so
/// implementors should be cheap to clone (an id, an `Rc`, a small struct).
pub trait Marker {
    /// Geographic position of the marker.
    fn position(&self) -> LatLng;

    /// Whether the marker should currently be considered at all.
    ///
    /// The viewport filter drops invisible markers; the no-op passthrough
    /// keeps its strict one-cluster-per-marker mapping regardless.
    fn is_visible(&self) -> bool {
        true
    }
}

/// Bare positions are markers.
impl Marker for LatLng {
    fn position(&self) -> LatLng {
        *self
    }
}

/// Per-call input bundle for [`Algorithm::calculate`].
pub struct AlgorithmInput<'a, M> {
    /// Current marker set. Order is significant: the no-op path maps it 1:1
    /// onto clusters in the same order.
    pub markers: &'a [M],
    /// View-state handle; must resolve a zoom during any clustering pass.
    pub map: &'a dyn MapState,
    /// Geographic-to-pixel conversion for the current view.
    pub projection: &'a dyn Projection,
}

impl<M> Clone for AlgorithmInput<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for AlgorithmInput<'_, M> {}

impl<M> fmt::Debug for AlgorithmInput<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmInput")
            .field("n_markers", &self.markers.len())
            .finish_non_exhaustive()
    }
}

/// Whether an output differs from the previous clustering pass.
///
/// Strategies that do not track prior output report [`Unspecified`];
/// consumers must treat that as changed and redraw.
///
/// [`Unspecified`]: OutputChange::Unspecified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChange {
    /// The clusters differ from the previous pass.
    Changed,
    /// The strategy took a deterministic path whose associated render work
    /// can be skipped. Note this pins to the *decision*, not necessarily to
    /// byte-equality with the previous pass.
    Unchanged,
    /// The strategy made no claim either way.
    Unspecified,
}

impl OutputChange {
    /// Conservative redraw decision: everything except [`Unchanged`] redraws.
    ///
    /// [`Unchanged`]: OutputChange::Unchanged
    pub fn should_redraw(self) -> bool {
        self != Self::Unchanged
    }
}

/// Result of a clustering pass.
#[derive(Debug, Clone)]
pub struct AlgorithmOutput<M> {
    /// The clusters, covering every surviving input marker exactly once.
    pub clusters: Vec<Cluster<M>>,
    /// Whether the output differs from the previous pass.
    pub change: OutputChange,
}

/// Common interface for marker clustering strategies.
///
/// A strategy is a pure function of its input plus whatever internal state
/// it maintains (caches take `&mut self`). It must not mutate the input
/// markers, and it fails only through the view handle's own failure mode
/// (an unresolved zoom).
pub trait Algorithm<M: Marker> {
    /// Run one clustering pass over `input`.
    fn calculate(&mut self, input: AlgorithmInput<'_, M>) -> Result<AlgorithmOutput<M>>;
}
