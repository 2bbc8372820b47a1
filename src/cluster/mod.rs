//! Marker clustering strategies and their shared orchestration.
//!
//! This module decides *when* and *on which markers* clustering runs, and
//! lets strategies plug in *how* markers group.
//!
//! ## The two-phase contract
//!
//! Every strategy implements [`Algorithm::calculate`], which owns the whole
//! pass: pre-processing, grouping, and the output contract. The shared
//! pre-processing lives in two composable functions a strategy can delegate
//! to:
//!
//! - **Zoom gate** — at or above `max_zoom`, grouping is skipped and every
//!   marker maps 1:1 onto a singleton cluster ([`noop`]). Above that zoom
//!   markers are close enough to pixel-distinguishable that grouping buys
//!   nothing visually.
//! - **Viewport filter** — below `max_zoom`, markers are filtered to the
//!   visible bounds padded by `viewport_padding` pixels before the grouping
//!   step sees them. Offscreen markers receive no cluster at all.
//!
//! Grouping itself is injected as a closure (see [`calculate_in_viewport`]),
//! so the gating logic stays a reusable, independently testable unit instead
//! of a fragile base class.
//!
//! ## Strategies (implemented)
//!
//! - [`GridAlgorithm`] — merges each marker into the nearest cluster within
//!   a fixed pixel distance.
//! - [`NoopAlgorithm`] — never groups; switches clustering off behind the
//!   same seam.
//!
//! ## Usage
//!
//! ```rust
//! use shoal::cluster::{Algorithm, AlgorithmInput, GridAlgorithm};
//! use shoal::geo::{LatLng, LatLngBounds};
//! use shoal::map::{MapView, WebMercator};
//!
//! let markers = vec![
//!     LatLng::new(52.520, 13.405), // Berlin
//!     LatLng::new(52.521, 13.406),
//!     LatLng::new(48.857, 2.352),  // Paris
//! ];
//!
//! let view = MapView::new(
//!     5.0,
//!     LatLngBounds::new(LatLng::new(40.0, -10.0), LatLng::new(60.0, 30.0)),
//! );
//! let projection = WebMercator::new(5.0);
//!
//! let mut algorithm = GridAlgorithm::new();
//! let output = algorithm
//!     .calculate(AlgorithmInput {
//!         markers: &markers,
//!         map: &view,
//!         projection: &projection,
//!     })
//!     .unwrap();
//!
//! // The Berlin pair merges; Paris stands alone.
//! assert_eq!(output.clusters.len(), 2);
//! assert!(output.change.should_redraw());
//! ```

mod core;
mod entity;
mod grid;
mod noop;
mod traits;
mod viewport;

pub use self::core::{
    calculate_in_viewport, calculate_with_zoom_bypass, noop, AlgorithmOptions,
    ViewportAlgorithmOptions, DEFAULT_MAX_ZOOM, DEFAULT_VIEWPORT_PADDING,
};
pub use self::entity::Cluster;
pub use self::grid::{GridAlgorithm, DEFAULT_GRID_SIZE};
pub use self::noop::NoopAlgorithm;
pub use self::traits::{Algorithm, AlgorithmInput, AlgorithmOutput, Marker, OutputChange};
pub use self::viewport::{filter_markers_to_padded_viewport, padded_viewport};
