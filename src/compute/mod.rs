//! Compute layer: validation, grid searches and export.
//!
//! Everything here is a pure function of a [`Config`](crate::Config) and its
//! arguments:
//! - Validation predicates for codes, coordinates and query parameters
//! - Neighbor enumeration and radius search
//! - GeoJSON export of cells (feature `geojson`)

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod search;
pub mod validation;
