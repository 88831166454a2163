//! Distance and cell measurement utilities.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_METERS`], with the central angle taken as
//! `2·atan2(√a, √(1−a))`. Radius search filters on exactly this value;
//! `geo`'s haversine uses `2·asin(√a)`, which can differ in the last bits.

use crate::types::{BoundingBox, Coordinate};
use std::fmt;

/// Earth radius used by every distance computation, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters.
///
/// # Examples
///
/// ```rust
/// use digipin::{Coordinate, spatial::distance_meters};
///
/// let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
/// let mumbai = Coordinate::new(19.0760, 72.8777).unwrap();
///
/// let dist = distance_meters(&delhi, &mumbai);
/// assert!(dist > 1_100_000.0 && dist < 1_200_000.0); // ~1,148 km
/// ```
pub fn distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine(
        from.latitude(),
        from.longitude(),
        to.latitude(),
        to.longitude(),
    )
}

fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// North-south and east-west extents of a cell in meters.
///
/// The meridional span is measured along the cell's central longitude and the
/// east-west span along its central latitude.
pub fn cell_extent_meters(cell: &BoundingBox) -> (f64, f64) {
    let center = cell.center();
    let (sw, ne) = (cell.southwest(), cell.northeast());

    let north_south = haversine(
        sw.latitude(),
        center.longitude(),
        ne.latitude(),
        center.longitude(),
    );
    let east_west = haversine(
        center.latitude(),
        sw.longitude(),
        center.latitude(),
        ne.longitude(),
    );

    (north_south, east_west)
}

/// Average of a cell's north-south and east-west extents, in meters.
pub fn cell_size_meters(cell: &BoundingBox) -> f64 {
    let (north_south, east_west) = cell_extent_meters(cell);
    (north_south + east_west) / 2.0
}

/// Planar area estimate of a cell in square meters.
///
/// No spherical excess correction; at DIGIPIN cell sizes the error is negligible.
pub fn area_square_meters(cell: &BoundingBox) -> f64 {
    let (north_south, east_west) = cell_extent_meters(cell);
    north_south * east_west
}

/// Coarse classification of a cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrecisionBand {
    /// Under 5 m
    Building,
    /// Under 50 m
    Street,
    /// Under 500 m
    Neighborhood,
    /// Under 5 km
    District,
    Regional,
}

impl PrecisionBand {
    pub fn classify(size_meters: f64) -> Self {
        if size_meters < 5.0 {
            Self::Building
        } else if size_meters < 50.0 {
            Self::Street
        } else if size_meters < 500.0 {
            Self::Neighborhood
        } else if size_meters < 5_000.0 {
            Self::District
        } else {
            Self::Regional
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Street => "Street",
            Self::Neighborhood => "Neighborhood",
            Self::District => "District",
            Self::Regional => "Regional",
        }
    }

    /// Renders `size_meters` with the unit and rounding of this band.
    pub fn describe(&self, size_meters: f64) -> String {
        let size = match self {
            Self::Building => format!("{:.1}m", size_meters),
            Self::Street | Self::Neighborhood => format!("{:.0}m", size_meters),
            Self::District => format!("{:.1}km", size_meters / 1000.0),
            Self::Regional => format!("{:.0}km", size_meters / 1000.0),
        };
        format!("{} level precision (~{})", self.label(), size)
    }
}

impl fmt::Display for PrecisionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human readable precision of a cell, e.g. `"Building level precision (~3.8m)"`.
pub fn precision_description(cell: &BoundingBox) -> String {
    let size = cell_size_meters(cell);
    PrecisionBand::classify(size).describe(size)
}

/// Map URL centered on `coordinate`: `{base}?q={lat},{lon}`.
///
/// ```rust
/// use digipin::{Coordinate, spatial::map_link};
///
/// let coord = Coordinate::new(28.6139, 77.209).unwrap();
/// assert_eq!(
///     map_link("https://www.google.com/maps", &coord),
///     "https://www.google.com/maps?q=28.6139,77.209"
/// );
/// ```
pub fn map_link(base: &str, coordinate: &Coordinate) -> String {
    format!(
        "{}?q={},{}",
        base,
        coordinate.latitude(),
        coordinate.longitude()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine};

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = coord(20.5, 81.5);
        assert_eq!(distance_meters(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let d = distance_meters(&coord(10.0, 80.0), &coord(11.0, 80.0));
        let expected = EARTH_RADIUS_METERS * 1f64.to_radians();
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = coord(28.6139, 77.2090);
        let b = coord(12.9716, 77.5946);
        assert_eq!(distance_meters(&a, &b), distance_meters(&b, &a));
    }

    #[test]
    fn test_distance_close_to_geo_haversine() {
        let a = coord(28.6139, 77.2090);
        let b = coord(19.0760, 72.8777);
        let ours = distance_meters(&a, &b);
        let theirs = Haversine.distance(a.to_point(), b.to_point());
        // Sphere radius and central-angle form differ; agreement is approximate
        assert!((ours - theirs).abs() / theirs < 1e-5);
    }

    #[test]
    fn test_distance_uses_atan2_central_angle() {
        let (lat1, lon1, lat2, lon2) = (28.6139_f64, 77.2090_f64, 28.6140_f64, 77.2091_f64);
        let d_lat = (lat2 - lat1).to_radians();
        let d_lon = (lon2 - lon1).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        let expected = EARTH_RADIUS_METERS * 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        let ours = distance_meters(&coord(lat1, lon1), &coord(lat2, lon2));
        assert_eq!(ours, expected);
    }

    #[test]
    fn test_cell_measurements() {
        let cell = BoundingBox::from_edges(10.0, 80.0, 11.0, 81.0).unwrap();
        let (ns, ew) = cell_extent_meters(&cell);
        assert!(ns > 111_000.0 && ns < 111_300.0);
        // Longitude degrees shrink with cos(latitude)
        assert!(ew < ns && ew > 108_000.0);
        assert_eq!(cell_size_meters(&cell), (ns + ew) / 2.0);
        assert_eq!(area_square_meters(&cell), ns * ew);
    }

    #[test]
    fn test_precision_bands() {
        assert_eq!(PrecisionBand::classify(3.8), PrecisionBand::Building);
        assert_eq!(PrecisionBand::classify(5.0), PrecisionBand::Street);
        assert_eq!(PrecisionBand::classify(120.0), PrecisionBand::Neighborhood);
        assert_eq!(PrecisionBand::classify(4_999.0), PrecisionBand::District);
        assert_eq!(PrecisionBand::classify(60_000.0), PrecisionBand::Regional);
    }

    #[test]
    fn test_precision_band_rendering() {
        assert_eq!(
            PrecisionBand::Building.describe(3.84),
            "Building level precision (~3.8m)"
        );
        assert_eq!(
            PrecisionBand::Street.describe(15.4),
            "Street level precision (~15m)"
        );
        assert_eq!(
            PrecisionBand::District.describe(1_240.0),
            "District level precision (~1.2km)"
        );
        assert_eq!(
            PrecisionBand::Regional.describe(61_700.0),
            "Regional level precision (~62km)"
        );
    }

    #[test]
    fn test_map_link() {
        let url = map_link("https://www.google.com/maps", &coord(20.5, 81.5));
        assert_eq!(url, "https://www.google.com/maps?q=20.5,81.5");
    }
}
