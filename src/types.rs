//! Geographic value types.
//!
//! Both types are validated at construction and immutable afterwards, so a
//! `Coordinate` or `BoundingBox` in hand is always well formed.

use crate::error::{DigipinError, Result};
use geo::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid latitude range in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Valid longitude range in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use digipin::Coordinate;
///
/// let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
/// assert_eq!(delhi.latitude(), 28.6139);
///
/// assert!(Coordinate::new(91.0, 77.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DigipinError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Creates a coordinate, rejecting values outside [-90, 90] / [-180, 180].
    ///
    /// Non-finite values are rejected as out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(DigipinError::InvalidLatitude(format!(
                "Latitude must be between -90 and 90, got {}",
                latitude
            )));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(DigipinError::InvalidLongitude(format!(
                "Longitude must be between -180 and 180, got {}",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts into a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn to_point(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<Coordinate> for Point {
    fn from(coord: Coordinate) -> Self {
        coord.to_point()
    }
}

impl TryFrom<Point> for Coordinate {
    type Error = DigipinError;

    fn try_from(point: Point) -> Result<Self> {
        Self::new(point.y(), point.x())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// An axis-aligned geographic rectangle.
///
/// Wraps a `geo::Rect` whose x axis is longitude and y axis is latitude.
/// Containment is inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundingBoxRepr", into = "BoundingBoxRepr")]
pub struct BoundingBox {
    rect: Rect,
}

#[derive(Serialize, Deserialize)]
struct BoundingBoxRepr {
    southwest: Coordinate,
    northeast: Coordinate,
}

impl TryFrom<BoundingBoxRepr> for BoundingBox {
    type Error = DigipinError;

    fn try_from(repr: BoundingBoxRepr) -> Result<Self> {
        Self::new(repr.southwest, repr.northeast)
    }
}

impl From<BoundingBox> for BoundingBoxRepr {
    fn from(bbox: BoundingBox) -> Self {
        Self {
            southwest: bbox.southwest(),
            northeast: bbox.northeast(),
        }
    }
}

impl BoundingBox {
    /// Creates a bounding box from its southwest and northeast corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use digipin::{BoundingBox, Coordinate};
    ///
    /// let sw = Coordinate::new(2.5, 63.5).unwrap();
    /// let ne = Coordinate::new(38.5, 99.5).unwrap();
    /// let bbox = BoundingBox::new(sw, ne).unwrap();
    /// assert_eq!(bbox.width(), 36.0);
    ///
    /// assert!(BoundingBox::new(ne, sw).is_err());
    /// ```
    pub fn new(southwest: Coordinate, northeast: Coordinate) -> Result<Self> {
        if southwest.latitude > northeast.latitude {
            return Err(DigipinError::InvalidBounds(format!(
                "Southwest latitude must be <= northeast latitude ({} > {})",
                southwest.latitude, northeast.latitude
            )));
        }
        if southwest.longitude > northeast.longitude {
            return Err(DigipinError::InvalidBounds(format!(
                "Southwest longitude must be <= northeast longitude ({} > {})",
                southwest.longitude, northeast.longitude
            )));
        }

        Ok(Self {
            rect: Rect::new(
                geo::coord! { x: southwest.longitude, y: southwest.latitude },
                geo::coord! { x: northeast.longitude, y: northeast.latitude },
            ),
        })
    }

    /// Edges must already be ordered and inside the world range.
    pub(crate) fn from_edges_unchecked(
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    ) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_lon, y: min_lat },
                geo::coord! { x: max_lon, y: max_lat },
            ),
        }
    }

    /// Creates a bounding box from raw edges, validating every corner.
    pub fn from_edges(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Result<Self> {
        Self::new(
            Coordinate::new(min_lat, min_lon)?,
            Coordinate::new(max_lat, max_lon)?,
        )
    }

    pub fn southwest(&self) -> Coordinate {
        Coordinate {
            latitude: self.min_lat(),
            longitude: self.min_lon(),
        }
    }

    pub fn northeast(&self) -> Coordinate {
        Coordinate {
            latitude: self.max_lat(),
            longitude: self.max_lon(),
        }
    }

    #[inline]
    pub fn min_lat(&self) -> f64 {
        self.rect.min().y
    }

    #[inline]
    pub fn max_lat(&self) -> f64 {
        self.rect.max().y
    }

    #[inline]
    pub fn min_lon(&self) -> f64 {
        self.rect.min().x
    }

    #[inline]
    pub fn max_lon(&self) -> f64 {
        self.rect.max().x
    }

    /// Midpoint of both axes.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: (self.min_lat() + self.max_lat()) / 2.0,
            longitude: (self.min_lon() + self.max_lon()) / 2.0,
        }
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon() - self.min_lon()
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat() - self.min_lat()
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.latitude >= self.min_lat()
            && coordinate.latitude <= self.max_lat()
            && coordinate.longitude >= self.min_lon()
            && coordinate.longitude <= self.max_lon()
    }

    /// The underlying `geo::Rect`.
    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Closed polygon ring of the rectangle, counter-clockwise from southwest.
    pub fn to_polygon(&self) -> Polygon {
        self.rect.to_polygon()
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.rect
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingBox(SW={}, NE={})", self.southwest(), self.northeast())
    }
}
