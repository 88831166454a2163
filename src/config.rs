//! Codec configuration.
//!
//! The alphabet and the domain rectangle are parameters of the algorithm
//! rather than globals, so alternate grids can be used without touching the
//! codec. Defaults reproduce the reference deployment.

use crate::alphabet::Alphabet;
use crate::compute::validation::validate_precision_level;
use crate::error::{DigipinError, Result};
use crate::spatial;
use crate::types::{BoundingBox, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MIN_LAT: f64 = 2.5;
pub const DEFAULT_MAX_LAT: f64 = 38.5;
pub const DEFAULT_MIN_LON: f64 = 63.5;
pub const DEFAULT_MAX_LON: f64 = 99.5;

/// Longest supported code.
pub const MAX_PRECISION: usize = 10;

/// Largest accepted grid radius cap; a search then evaluates at most
/// 2001 × 2001 candidate cells.
pub const MAX_GRID_RADIUS_LIMIT: u32 = 1_000;

/// Codec configuration
///
/// # Example
///
/// ```rust
/// use digipin::Config;
///
/// let config = Config::default();
/// assert_eq!(config.precision, 10);
///
/// let json = r#"{
///     "precision": 8,
///     "boundary_buffer": 0.25
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.precision, 8);
/// assert_eq!(config.alphabet.to_string(), "FC98J327K456LMPT");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Symbol grid shared by encoder and decoder
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Region in which encoding is permitted
    #[serde(default = "Config::default_domain")]
    pub domain: BoundingBox,

    /// Number of symbols per code (1-10)
    #[serde(default = "Config::default_precision")]
    pub precision: usize,

    /// Separator used by the grouped 3-3-4 rendering
    #[serde(default = "Config::default_delimiter")]
    pub delimiter: char,

    /// Width in degrees of the near-edge warning zone inside the domain
    #[serde(default = "Config::default_boundary_buffer")]
    pub boundary_buffer: f64,

    /// Hard cap on the grid radius enumerated by neighbor and radius searches
    #[serde(default = "Config::default_max_grid_radius")]
    pub max_grid_radius: u32,

    /// Radius search distances above this only produce a warning
    #[serde(default = "Config::default_max_distance_radius")]
    pub max_distance_radius_meters: f64,

    #[serde(default = "Config::default_map_link_base")]
    pub map_link_base: String,
}

impl Config {
    fn default_domain() -> BoundingBox {
        BoundingBox::from_edges_unchecked(
            DEFAULT_MIN_LAT,
            DEFAULT_MIN_LON,
            DEFAULT_MAX_LAT,
            DEFAULT_MAX_LON,
        )
    }

    const fn default_precision() -> usize {
        MAX_PRECISION
    }

    const fn default_delimiter() -> char {
        '-'
    }

    const fn default_boundary_buffer() -> f64 {
        0.1
    }

    const fn default_max_grid_radius() -> u32 {
        100
    }

    const fn default_max_distance_radius() -> f64 {
        1_000_000.0
    }

    fn default_map_link_base() -> String {
        "https://www.google.com/maps".to_string()
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_domain(mut self, domain: BoundingBox) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_boundary_buffer(mut self, degrees: f64) -> Self {
        self.boundary_buffer = degrees;
        self
    }

    pub fn with_max_grid_radius(mut self, radius: u32) -> Self {
        if radius > MAX_GRID_RADIUS_LIMIT {
            log::warn!(
                "Grid radius cap of {} exceeds the limit of {} and will fail validation",
                radius,
                MAX_GRID_RADIUS_LIMIT
            );
        }
        self.max_grid_radius = radius;
        self
    }

    pub fn with_map_link_base(mut self, base: impl Into<String>) -> Self {
        self.map_link_base = base.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        let precision = validate_precision_level(self.precision);
        if let Some(err) = precision.error {
            return Err(DigipinError::InvalidConfig(err.message().to_string()));
        }

        let domain = &self.domain;
        if domain.min_lat() < MIN_LATITUDE
            || domain.max_lat() > MAX_LATITUDE
            || domain.min_lon() < MIN_LONGITUDE
            || domain.max_lon() > MAX_LONGITUDE
        {
            return Err(DigipinError::InvalidConfig(format!(
                "Domain {} exceeds the world range",
                domain
            )));
        }
        if domain.width() <= 0.0 || domain.height() <= 0.0 {
            return Err(DigipinError::InvalidConfig(format!(
                "Domain {} must have a positive width and height",
                domain
            )));
        }

        if !self.boundary_buffer.is_finite() || self.boundary_buffer < 0.0 {
            return Err(DigipinError::InvalidConfig(format!(
                "Boundary buffer must be a non-negative number of degrees, got {}",
                self.boundary_buffer
            )));
        }

        if self.max_grid_radius == 0 || self.max_grid_radius > MAX_GRID_RADIUS_LIMIT {
            return Err(DigipinError::InvalidConfig(format!(
                "Maximum grid radius must be between 1 and {}, got {}",
                MAX_GRID_RADIUS_LIMIT, self.max_grid_radius
            )));
        }

        if !self.max_distance_radius_meters.is_finite() || self.max_distance_radius_meters <= 0.0
        {
            return Err(DigipinError::InvalidConfig(format!(
                "Maximum distance radius must be positive, got {}",
                self.max_distance_radius_meters
            )));
        }

        if self.alphabet.contains(self.delimiter) {
            return Err(DigipinError::InvalidConfig(format!(
                "Delimiter '{}' collides with an alphabet symbol",
                self.delimiter
            )));
        }

        Ok(())
    }

    /// Physical size of one full-precision cell at the domain center.
    ///
    /// Smaller search radii cannot be expected to contain any cell center.
    pub fn min_cell_size_meters(&self) -> f64 {
        let divisions = 4f64.powi(self.precision as i32);
        let center = self.domain.center();
        let half_lat = self.domain.height() / divisions / 2.0;
        let half_lon = self.domain.width() / divisions / 2.0;
        let cell = BoundingBox::from_edges_unchecked(
            center.latitude() - half_lat,
            center.longitude() - half_lon,
            center.latitude() + half_lat,
            center.longitude() + half_lon,
        );
        spatial::cell_size_meters(&cell)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads a configuration file, choosing the format from the extension.
    ///
    /// `.toml` files require the `toml` feature; anything else is read as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DigipinError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            #[cfg(feature = "toml")]
            {
                return Self::from_toml(&contents)
                    .map_err(|e| DigipinError::InvalidConfig(e.to_string()));
            }
            #[cfg(not(feature = "toml"))]
            {
                return Err(DigipinError::InvalidConfig(format!(
                    "{} is TOML but the `toml` feature is disabled",
                    path.display()
                )));
            }
        }

        Self::from_json(&contents).map_err(|e| DigipinError::InvalidConfig(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            domain: Self::default_domain(),
            precision: Self::default_precision(),
            delimiter: Self::default_delimiter(),
            boundary_buffer: Self::default_boundary_buffer(),
            max_grid_radius: Self::default_max_grid_radius(),
            max_distance_radius_meters: Self::default_max_distance_radius(),
            map_link_base: Self::default_map_link_base(),
        }
    }
}
