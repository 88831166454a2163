//! Builder for codec instances with custom grids and limits.

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::digipin::Digipin;
use crate::error::Result;
use crate::types::BoundingBox;
use std::path::Path;

/// Builder for [`Digipin`] with a custom alphabet, domain or search limits.
///
/// ```rust
/// use digipin::{BoundingBox, DigipinBuilder};
///
/// let digipin = DigipinBuilder::new()
///     .domain(BoundingBox::from_edges(0.0, 0.0, 16.0, 16.0)?)
///     .precision(4)
///     .build()?;
/// assert_eq!(digipin.encode(8.0, 8.0)?.as_str().len(), 4);
/// # Ok::<(), digipin::DigipinError>(())
/// ```
#[derive(Debug, Default)]
pub struct DigipinBuilder {
    config: Config,
}

impl DigipinBuilder {
    /// Create a new builder with the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Start from a JSON (or, with the `toml` feature, TOML) file.
    pub fn config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        Ok(self.config(Config::from_file(path)?))
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.alphabet = alphabet;
        self
    }

    pub fn domain(mut self, domain: BoundingBox) -> Self {
        self.config.domain = domain;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Width in degrees of the near-edge warning zone.
    pub fn boundary_buffer(mut self, degrees: f64) -> Self {
        self.config.boundary_buffer = degrees;
        self
    }

    pub fn max_grid_radius(mut self, radius: u32) -> Self {
        self.config = self.config.with_max_grid_radius(radius);
        self
    }

    pub fn map_link_base(mut self, base: impl Into<String>) -> Self {
        self.config.map_link_base = base.into();
        self
    }

    /// Validate the configuration and build the instance.
    pub fn build(self) -> Result<Digipin> {
        let warning =
            crate::compute::validation::validate_precision_level(self.config.precision).warning;
        if let Some(message) = warning {
            log::warn!("{} (precision {})", message, self.config.precision);
        }

        let digipin = Digipin::new(self.config)?;
        log::debug!(
            "built codec over {} with precision {}",
            digipin.config().domain,
            digipin.config().precision
        );
        Ok(digipin)
    }
}
