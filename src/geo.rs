//! Geographic and pixel-space primitives.
//!
//! Latitudes and longitudes are degrees. Pixel coordinates are relative to
//! whatever view the active [`Projection`](crate::map::Projection) targets,
//! with y growing downward (screen convention).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lng: f64,
}

impl LatLng {
    /// Create a position from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a pixel position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A geographic rectangle described by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLngBounds {
    /// South-west corner.
    pub sw: LatLng,
    /// North-east corner.
    pub ne: LatLng,
}

impl LatLngBounds {
    /// Create bounds from the south-west and north-east corners.
    pub fn new(sw: LatLng, ne: LatLng) -> Self {
        Self { sw, ne }
    }

    /// Whether `position` lies inside the bounds (inclusive).
    pub fn contains(&self, position: LatLng) -> bool {
        position.lat >= self.sw.lat
            && position.lat <= self.ne.lat
            && position.lng >= self.sw.lng
            && position.lng <= self.ne.lng
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelBounds {
    /// Corner with the smallest coordinates.
    pub min: Point,
    /// Corner with the largest coordinates.
    pub max: Point,
}

impl PixelBounds {
    /// Create bounds from already-ordered min/max corners.
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create bounds from two opposite corners in any order.
    ///
    /// Screen y grows downward, so the projected north-east corner of a
    /// geographic rectangle has a *smaller* y than the south-west one; this
    /// constructor normalizes whichever order the projection produced.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Extend the bounds by `padding` pixels on every side.
    pub fn pad(self, padding: f64) -> Self {
        Self {
            min: Point::new(self.min.x - padding, self.min.y - padding),
            max: Point::new(self.max.x + padding, self.max.y + padding),
        }
    }

    /// Whether `point` lies inside the bounds (inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
