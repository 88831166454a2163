//! Deterministic grid geocoding with 10-symbol DIGIPIN codes.
//!
//! A coordinate inside the configured domain is encoded by recursively
//! splitting the domain into 4×4 sub-cells, one symbol per level. Codes decode
//! back to the cell they denote, and cells can be searched by grid adjacency
//! or by great-circle distance.
//!
//! ```rust
//! use digipin::{Coordinate, Digipin};
//!
//! let digipin = Digipin::default();
//!
//! let code = digipin.encode(28.6139, 77.2090)?.into_inner();
//! assert_eq!(code.as_str(), "39J438TJC7");
//! assert_eq!(code.formatted(), "39J-438-TJC7");
//!
//! let cell = digipin.decode("39J-438-TJC7")?.into_inner();
//! assert!(cell.bounding_box().contains(&Coordinate::new(28.6139, 77.2090)?));
//!
//! let around = digipin.neighbors(code.as_str(), 1)?;
//! assert_eq!(around.len(), 8);
//!
//! let center = Coordinate::new(28.6139, 77.2090)?;
//! let nearby = digipin.within_radius(&center, 25.0)?;
//! assert!(nearby.iter().all(|c| digipin.distance_meters(&center, &c.center()) <= 25.0));
//! # Ok::<(), digipin::DigipinError>(())
//! ```

pub mod alphabet;
pub mod builder;
pub mod code;
pub mod codec;
pub mod compute;
pub mod config;
pub mod digipin;
pub mod error;
pub mod ffi;
pub mod outcome;
pub mod spatial;
pub mod types;

pub use alphabet::Alphabet;
pub use builder::DigipinBuilder;
pub use code::Code;
pub use config::Config;
pub use digipin::Digipin;
pub use error::{DigipinError, ErrorKind, Result};
pub use outcome::Outcome;
pub use types::{BoundingBox, Coordinate};

pub use compute::validation::Validation;
pub use spatial::PrecisionBand;

#[cfg(feature = "geojson")]
pub use compute::geojson::{code_to_geojson, codes_to_geojson};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{
        BoundingBox, Code, Config, Coordinate, Digipin, DigipinBuilder, DigipinError, ErrorKind,
        Outcome, Result,
    };

    pub use crate::spatial::{PrecisionBand, distance_meters};
}
