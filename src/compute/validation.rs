//! Validation predicates for codes, coordinates and query parameters.
//!
//! Every function here is pure and never fails: the outcome is a
//! [`Validation`] carrying either an error or nothing, plus an optional
//! advisory warning. A valid result with a warning must not block the caller.

use crate::alphabet::Alphabet;
use crate::config::MAX_PRECISION;
use crate::error::{DigipinError, Result};
use crate::types::{BoundingBox, Coordinate};

/// Precision levels below this produce a coarse-granularity warning.
pub const COARSE_PRECISION_THRESHOLD: usize = 8;

/// Outcome of a validation check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validation {
    pub error: Option<DigipinError>,
    pub warning: Option<String>,
}

impl Validation {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            error: None,
            warning: Some(message.into()),
        }
    }

    pub fn fail(error: DigipinError) -> Self {
        Self {
            error: Some(error),
            warning: None,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message())
    }

    /// Converts into the error channel, keeping the warning on success.
    pub fn into_result(self) -> Result<Option<String>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.warning),
        }
    }
}

/// Validates a code's format: non-blank, exact length, alphabet symbols only.
///
/// # Examples
///
/// ```
/// use digipin::Alphabet;
/// use digipin::compute::validation::validate_code;
///
/// let alphabet = Alphabet::default();
/// assert!(validate_code("39J438P582", &alphabet, 10).is_valid());
///
/// let result = validate_code("ABCDEFGHIJ", &alphabet, 10);
/// assert_eq!(
///     result.error.unwrap().kind(),
///     digipin::ErrorKind::InvalidCharacter
/// );
/// ```
pub fn validate_code(code: &str, alphabet: &Alphabet, length: usize) -> Validation {
    if code.trim().is_empty() {
        return Validation::fail(DigipinError::InvalidFormat(
            "DIGIPIN code cannot be empty".to_string(),
        ));
    }

    let actual = code.chars().count();
    if actual != length {
        return Validation::fail(DigipinError::InvalidLength(format!(
            "DIGIPIN must be exactly {} characters, got {}",
            length, actual
        )));
    }

    let invalid = alphabet.invalid_chars(code);
    if !invalid.is_empty() {
        let listed: Vec<String> = invalid.iter().map(char::to_string).collect();
        return Validation::fail(DigipinError::InvalidCharacter(format!(
            "DIGIPIN contains invalid characters: {}",
            listed.join(", ")
        )));
    }

    Validation::valid()
}

/// Range check of each axis, latitude first.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Validation {
    match Coordinate::new(latitude, longitude) {
        Ok(_) => Validation::valid(),
        Err(err) => Validation::fail(err),
    }
}

/// Checks that a coordinate lies inside `domain`.
///
/// Coordinates within `buffer` degrees of any domain edge are accepted with a
/// warning, since some of their neighbors fall outside the domain.
pub fn validate_domain_bounds(
    coordinate: &Coordinate,
    domain: &BoundingBox,
    buffer: f64,
) -> Validation {
    let range = validate_coordinates(coordinate.latitude(), coordinate.longitude());
    if !range.is_valid() {
        return range;
    }

    if !domain.contains(coordinate) {
        return Validation::fail(DigipinError::OutOfBounds(format!(
            "Coordinate is outside the DIGIPIN domain: {}",
            coordinate
        )));
    }

    let (lat, lon) = (coordinate.latitude(), coordinate.longitude());
    if lat > domain.max_lat() - buffer
        || lat < domain.min_lat() + buffer
        || lon > domain.max_lon() - buffer
        || lon < domain.min_lon() + buffer
    {
        return Validation::warn(
            "Coordinate is near the domain boundary, some nearby DIGIPINs might be unavailable",
        );
    }

    Validation::valid()
}

/// Validates an integer grid radius for neighbor enumeration.
///
/// Radii above `max_radius` are accepted with a warning; callers clamp them.
pub fn validate_neighbor_radius(radius: i64, max_radius: u32) -> Validation {
    if radius <= 0 {
        return Validation::fail(DigipinError::NegativeRadius(format!(
            "Radius must be positive, got {}",
            radius
        )));
    }

    if radius > i64::from(max_radius) {
        return Validation::warn(format!(
            "Radius will be limited to maximum {} grid cells for performance reasons",
            max_radius
        ));
    }

    Validation::valid()
}

/// Validates a search radius in meters.
///
/// Radii above `max_meters` may give incomplete results because the grid
/// radius is capped; radii below `min_cell_meters` may find nothing.
pub fn validate_distance_radius(
    radius_meters: f64,
    max_meters: f64,
    min_cell_meters: f64,
) -> Validation {
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return Validation::fail(DigipinError::NegativeRadius(format!(
            "Radius must be positive in meters, got {}",
            radius_meters
        )));
    }

    if radius_meters > max_meters {
        return Validation::warn(
            "Very large radius may result in incomplete results due to grid cell limits",
        );
    }

    if radius_meters < min_cell_meters {
        return Validation::warn(format!(
            "Radius smaller than grid size ({:.1}m) may not find any results",
            min_cell_meters
        ));
    }

    Validation::valid()
}

/// Validates a code precision level.
pub fn validate_precision_level(precision: usize) -> Validation {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Validation::fail(DigipinError::InvalidPrecision(format!(
            "Precision must be between 1 and {}, got {}",
            MAX_PRECISION, precision
        )));
    }

    if precision < COARSE_PRECISION_THRESHOLD {
        return Validation::warn("Low precision level will result in large grid areas");
    }

    Validation::valid()
}

/// Validates `(latitude, longitude)` pairs, reporting the first bad index.
///
/// # Examples
///
/// ```
/// use digipin::compute::validation::validate_coordinate_list;
///
/// assert!(validate_coordinate_list(&[(28.6, 77.2), (19.0, 72.8)]).is_valid());
///
/// let result = validate_coordinate_list(&[(28.6, 77.2), (95.0, 72.8)]);
/// assert!(result.error_message().unwrap().contains("index 1"));
/// ```
pub fn validate_coordinate_list(coordinates: &[(f64, f64)]) -> Validation {
    if coordinates.is_empty() {
        return Validation::fail(DigipinError::EmptyInput(
            "Coordinate list cannot be empty".to_string(),
        ));
    }

    for (idx, &(lat, lon)) in coordinates.iter().enumerate() {
        if let Err(err) = Coordinate::new(lat, lon) {
            let message = format!("Invalid coordinate at index {}: {}", idx, err.message());
            let err = match err {
                DigipinError::InvalidLatitude(_) => DigipinError::InvalidLatitude(message),
                _ => DigipinError::InvalidLongitude(message),
            };
            return Validation::fail(err);
        }
    }

    Validation::valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn domain() -> BoundingBox {
        BoundingBox::from_edges(2.5, 63.5, 38.5, 99.5).unwrap()
    }

    fn kind(v: &Validation) -> Option<ErrorKind> {
        v.error.as_ref().map(|e| e.kind())
    }

    #[test]
    fn test_validate_code() {
        let alphabet = Alphabet::default();
        assert!(validate_code("FC98J327K4", &alphabet, 10).is_valid());

        assert_eq!(
            kind(&validate_code("   ", &alphabet, 10)),
            Some(ErrorKind::InvalidFormat)
        );
        assert_eq!(
            kind(&validate_code("", &alphabet, 10)),
            Some(ErrorKind::InvalidFormat)
        );

        let short = validate_code("FC98", &alphabet, 10);
        assert_eq!(kind(&short), Some(ErrorKind::InvalidLength));
        assert!(short.error_message().unwrap().contains("got 4"));

        let bad = validate_code("FC98J327KA", &alphabet, 10);
        assert_eq!(kind(&bad), Some(ErrorKind::InvalidCharacter));
        assert!(bad.error_message().unwrap().ends_with(": A"));
    }

    #[test]
    fn test_validate_code_lowercase_rejected() {
        let alphabet = Alphabet::default();
        let result = validate_code("fc98j327k4", &alphabet, 10);
        assert_eq!(kind(&result), Some(ErrorKind::InvalidCharacter));
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(28.6, 77.2).is_valid());
        assert_eq!(
            kind(&validate_coordinates(-91.0, 77.2)),
            Some(ErrorKind::InvalidLatitude)
        );
        assert_eq!(
            kind(&validate_coordinates(28.6, 181.0)),
            Some(ErrorKind::InvalidLongitude)
        );
    }

    #[test]
    fn test_validate_domain_bounds() {
        let domain = domain();
        let inside = Coordinate::new(20.5, 81.5).unwrap();
        let result = validate_domain_bounds(&inside, &domain, 0.1);
        assert!(result.is_valid());
        assert!(result.warning.is_none());

        let outside = Coordinate::new(0.0, 0.0).unwrap();
        assert_eq!(
            kind(&validate_domain_bounds(&outside, &domain, 0.1)),
            Some(ErrorKind::OutOfBounds)
        );
    }

    #[test]
    fn test_validate_domain_bounds_near_edge_warns() {
        let domain = domain();
        for (lat, lon) in [(38.45, 80.0), (2.55, 80.0), (20.0, 99.45), (20.0, 63.55)] {
            let coord = Coordinate::new(lat, lon).unwrap();
            let result = validate_domain_bounds(&coord, &domain, 0.1);
            assert!(result.is_valid());
            assert!(result.warning.is_some(), "expected warning for {}", coord);
        }
    }

    #[test]
    fn test_validate_neighbor_radius() {
        assert!(validate_neighbor_radius(1, 100).is_valid());
        assert!(validate_neighbor_radius(100, 100).warning.is_none());

        let big = validate_neighbor_radius(101, 100);
        assert!(big.is_valid());
        assert!(big.warning.is_some());

        assert_eq!(
            kind(&validate_neighbor_radius(0, 100)),
            Some(ErrorKind::NegativeRadius)
        );
        assert_eq!(
            kind(&validate_neighbor_radius(-3, 100)),
            Some(ErrorKind::NegativeRadius)
        );
    }

    #[test]
    fn test_validate_distance_radius() {
        let ok = validate_distance_radius(500.0, 1_000_000.0, 3.8);
        assert!(ok.is_valid());
        assert!(ok.warning.is_none());

        let huge = validate_distance_radius(2_000_000.0, 1_000_000.0, 3.8);
        assert!(huge.is_valid());
        assert!(huge.warning.unwrap().contains("incomplete"));

        let tiny = validate_distance_radius(1.0, 1_000_000.0, 3.8);
        assert!(tiny.is_valid());
        assert!(tiny.warning.unwrap().contains("3.8m"));

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                kind(&validate_distance_radius(bad, 1_000_000.0, 3.8)),
                Some(ErrorKind::NegativeRadius)
            );
        }
    }

    #[test]
    fn test_validate_precision_level() {
        assert!(validate_precision_level(10).warning.is_none());
        assert!(validate_precision_level(8).warning.is_none());
        let coarse = validate_precision_level(5);
        assert!(coarse.is_valid());
        assert!(coarse.warning.is_some());
        assert_eq!(
            kind(&validate_precision_level(0)),
            Some(ErrorKind::InvalidPrecision)
        );
        assert_eq!(
            kind(&validate_precision_level(11)),
            Some(ErrorKind::InvalidPrecision)
        );
    }

    #[test]
    fn test_validate_coordinate_list() {
        assert_eq!(
            kind(&validate_coordinate_list(&[])),
            Some(ErrorKind::EmptyInput)
        );

        let result = validate_coordinate_list(&[(10.0, 70.0), (10.0, 200.0), (100.0, 70.0)]);
        assert_eq!(kind(&result), Some(ErrorKind::InvalidLongitude));
        assert!(result.error_message().unwrap().contains("index 1"));
    }

    #[test]
    fn test_into_result_keeps_warning() {
        let warned = Validation::warn("careful").into_result().unwrap();
        assert_eq!(warned.as_deref(), Some("careful"));
        assert!(Validation::fail(DigipinError::EmptyInput("x".into()))
            .into_result()
            .is_err());
    }
}
