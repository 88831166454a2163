//! The public entry point tying codec, validation and search together.

use crate::code::Code;
use crate::codec::{self, encode_cell};
use crate::compute::search;
use crate::compute::validation::{
    Validation, validate_code, validate_coordinate_list, validate_domain_bounds,
};
use crate::config::Config;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::spatial;
use crate::types::Coordinate;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Digipin> = Lazy::new(Digipin::default);

/// DIGIPIN encoder, decoder and spatial query engine.
///
/// All operations are pure functions of the configuration and their
/// arguments; a `Digipin` can be shared freely between threads.
///
/// ```rust
/// use digipin::Digipin;
///
/// let digipin = Digipin::default();
/// let code = digipin.encode(28.6139, 77.2090)?.into_inner();
/// assert_eq!(code.formatted(), "39J-438-TJC7");
///
/// let decoded = digipin.decode("39J-438-TJC7")?.into_inner();
/// assert_eq!(decoded.center(), code.center());
/// # Ok::<(), digipin::DigipinError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Digipin {
    config: Config,
}

impl Digipin {
    /// Creates an instance after validating `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shared instance using the default configuration.
    pub fn global() -> &'static Digipin {
        &GLOBAL
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encodes a latitude/longitude pair.
    ///
    /// Warns, without failing, when the coordinate is near the domain edge.
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<Outcome<Code>> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        self.encode_coordinate(&coordinate)
    }

    pub fn encode_coordinate(&self, coordinate: &Coordinate) -> Result<Outcome<Code>> {
        let warning = validate_domain_bounds(
            coordinate,
            &self.config.domain,
            self.config.boundary_buffer,
        )
        .into_result()?;
        if let Some(message) = &warning {
            log::warn!("{}: {}", message, coordinate);
        }

        let code = encode_cell(coordinate, &self.config)?;
        Ok(Outcome::new(code, warning))
    }

    /// Decodes a code, plain or grouped with the configured delimiter.
    pub fn decode(&self, code: &str) -> Result<Outcome<Code>> {
        codec::decode_cell(code, &self.config).map(Outcome::clean)
    }

    pub fn is_in_domain(&self, coordinate: &Coordinate) -> bool {
        self.config.domain.contains(coordinate)
    }

    /// Whether `code` would decode, ignoring delimiters and surrounding whitespace.
    pub fn is_valid_code(&self, code: &str) -> bool {
        let code = codec::normalize(code, self.config.delimiter);
        validate_code(&code, &self.config.alphabet, self.config.precision).is_valid()
    }

    /// Cells around `code` within `radius` grid steps, see [`search::neighbors`].
    pub fn neighbors(&self, code: &str, radius: i64) -> Result<Outcome<Vec<Code>>> {
        search::neighbors(code, radius, &self.config)
    }

    /// Cells whose centers lie within `radius_meters`, see [`search::within_radius`].
    pub fn within_radius(
        &self,
        center: &Coordinate,
        radius_meters: f64,
    ) -> Result<Outcome<Vec<Code>>> {
        search::within_radius(center, radius_meters, &self.config)
    }

    /// Code grouped 3-3-4 with the configured delimiter.
    pub fn format(&self, code: &Code) -> String {
        code.formatted_with(self.config.delimiter)
    }

    pub fn map_link(&self, code: &Code) -> String {
        spatial::map_link(&self.config.map_link_base, &code.center())
    }

    pub fn precision_description(&self, code: &Code) -> String {
        code.precision_description()
    }

    pub fn area_square_meters(&self, code: &Code) -> f64 {
        code.area_square_meters()
    }

    pub fn cell_size_meters(&self, code: &Code) -> f64 {
        code.cell_size_meters()
    }

    pub fn distance_meters(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        spatial::distance_meters(from, to)
    }

    /// GeoJSON Feature for a cell, grouped with the configured delimiter.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self, code: &Code) -> Result<String> {
        crate::compute::geojson::code_to_geojson(code, self.config.delimiter)
    }

    /// GeoJSON FeatureCollection for search results.
    #[cfg(feature = "geojson")]
    pub fn collection_to_geojson(&self, codes: &[Code]) -> Result<String> {
        crate::compute::geojson::codes_to_geojson(codes, self.config.delimiter)
    }

    /// Size of a full-precision cell at the domain center.
    pub fn min_cell_size_meters(&self) -> f64 {
        self.config.min_cell_size_meters()
    }

    /// Validates `(latitude, longitude)` pairs, reporting the first bad index.
    pub fn validate_coordinates(&self, coordinates: &[(f64, f64)]) -> Validation {
        validate_coordinate_list(coordinates)
    }
}
