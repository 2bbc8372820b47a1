//! Viewport-aware marker clustering for tiled maps.
//!
//! `shoal` is the orchestration layer of a marker-clustering system: it
//! decides, for a given map view, whether to cluster at all and which
//! markers are even eligible, while concrete strategies supply the actual
//! grouping.
//!
//! The primary public API is under [`cluster`], which provides:
//! - the [`cluster::Algorithm`] contract with its input/output types
//! - shared zoom-gating and viewport-filtering orchestration
//! - two strategies: [`cluster::GridAlgorithm`] and [`cluster::NoopAlgorithm`]
//!
//! [`geo`] holds the coordinate primitives and [`map`] the view-state and
//! projection boundary the host map implements. Rendering, marker lifecycle,
//! and pixel-to-geo conversion stay with the host.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod geo;
pub mod map;

pub use cluster::{
    calculate_in_viewport, calculate_with_zoom_bypass, noop, Algorithm, AlgorithmInput,
    AlgorithmOptions, AlgorithmOutput, Cluster, GridAlgorithm, Marker, NoopAlgorithm,
    OutputChange, ViewportAlgorithmOptions,
};
pub use error::{Error, Result};
pub use geo::{LatLng, LatLngBounds, PixelBounds, Point};
pub use map::{MapState, MapView, Projection, WebMercator};
