//! Map-view boundary contracts.
//!
//! The clustering layer never talks to a concrete map engine. It reads view
//! state through [`MapState`] and converts geographic positions to pixels
//! through [`Projection`]; the host map supplies both. [`MapView`] and
//! [`WebMercator`] are plain implementations for hosts (and tests) that work
//! from a snapshot rather than a live map handle.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geo::{LatLng, LatLngBounds, Point};

/// Read-only handle onto the current map view.
pub trait MapState {
    /// Current zoom level, or `None` while the view cannot resolve one
    /// (e.g. before the first layout pass).
    fn zoom(&self) -> Option<f64>;

    /// Currently visible geographic bounds.
    fn bounds(&self) -> LatLngBounds;
}

/// Converts geographic positions to pixel positions for the current view.
pub trait Projection {
    /// Pixel position of `position` relative to the current view.
    fn project(&self, position: LatLng) -> Point;
}

/// A plain snapshot of view state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapView {
    /// Current zoom level; `None` models a view that has not resolved one.
    pub zoom: Option<f64>,
    /// Visible geographic bounds.
    pub bounds: LatLngBounds,
}

impl MapView {
    /// Create a snapshot with a resolved zoom.
    pub fn new(zoom: f64, bounds: LatLngBounds) -> Self {
        Self {
            zoom: Some(zoom),
            bounds,
        }
    }
}

impl MapState for MapView {
    fn zoom(&self) -> Option<f64> {
        self.zoom
    }

    fn bounds(&self) -> LatLngBounds {
        self.bounds
    }
}

/// Web Mercator projection into world pixel space at a fixed zoom.
///
/// The world is `256 * 2^zoom` pixels square (slippy-map convention), with
/// the origin at the top-left: x grows east, y grows south. An optional
/// origin offset shifts world pixels into view-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    zoom: f64,
    origin: Point,
}

impl WebMercator {
    /// Projection into world pixels at `zoom`.
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom,
            origin: Point::new(0.0, 0.0),
        }
    }

    /// Projection into view-local pixels: `origin` is the world pixel that
    /// maps to `(0, 0)`, typically the view's top-left corner.
    pub fn with_origin(zoom: f64, origin: Point) -> Self {
        Self { zoom, origin }
    }

    fn world_size(&self) -> f64 {
        256.0 * self.zoom.exp2()
    }
}

impl Projection for WebMercator {
    fn project(&self, position: LatLng) -> Point {
        let size = self.world_size();
        let x = (position.lng / 360.0 + 0.5) * size;

        // Clamp the latitude sine so y stays finite at the poles.
        let sin = position.lat.to_radians().sin().clamp(-0.9999, 0.9999);
        let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * size;

        Point::new(x - self.origin.x, y - self.origin.y)
    }
}
