//! Neighbor enumeration and radius search over the code grid.
//!
//! Neighbors are found by shifting a cell's center by whole multiples of the
//! cell's own latitude and longitude span and re-encoding. This is a
//! grid-relative approximation: no correction is made for longitude spans
//! shrinking with latitude, so identical inputs always give identical codes.

use crate::code::Code;
use crate::codec::{decode_cell, encode_cell};
use crate::compute::validation::{
    validate_distance_radius, validate_domain_bounds, validate_neighbor_radius,
};
use crate::config::{Config, MAX_GRID_RADIUS_LIMIT};
use crate::error::Result;
use crate::outcome::Outcome;
use crate::spatial::distance_meters;
use crate::types::Coordinate;
use rustc_hash::FxHashSet;

/// Codes of the cells around `code` within `radius` grid steps on each axis.
///
/// Offsets are visited row-major (latitude offset outer, both ascending);
/// the center cell, duplicates and candidates outside the domain are skipped.
/// Radii above `config.max_grid_radius` are clamped with a warning.
///
/// # Examples
///
/// ```
/// use digipin::Config;
/// use digipin::compute::search::neighbors;
///
/// let config = Config::default();
/// let around = neighbors("39J438TJC7", 1, &config).unwrap();
/// assert_eq!(around.len(), 8);
/// assert!(around.iter().all(|c| c.as_str() != "39J438TJC7"));
/// ```
pub fn neighbors(code: &str, radius: i64, config: &Config) -> Result<Outcome<Vec<Code>>> {
    let cap = grid_radius_cap(config);
    let warning = validate_neighbor_radius(radius, cap).into_result()?;
    if let Some(message) = &warning {
        log::warn!("{} (requested {})", message, radius);
    }

    let center = decode_cell(code, config)?;
    let radius = radius.min(i64::from(cap));
    let cells = enumerate(&center, radius, config);

    log::debug!(
        "found {} neighbors of {} within {} cells",
        cells.len(),
        center,
        radius
    );
    Ok(Outcome::new(cells, warning))
}

/// Codes whose cell centers lie within `radius_meters` of `center`.
///
/// The grid radius is `ceil(radius_meters / cell_size)`, capped at
/// `config.max_grid_radius`. Candidates are the neighbors in enumeration
/// order followed by the center's own cell; filtering keeps that order.
pub fn within_radius(
    center: &Coordinate,
    radius_meters: f64,
    config: &Config,
) -> Result<Outcome<Vec<Code>>> {
    let radius_warning = validate_distance_radius(
        radius_meters,
        config.max_distance_radius_meters,
        config.min_cell_size_meters(),
    )
    .into_result()?;
    let edge_warning =
        validate_domain_bounds(center, &config.domain, config.boundary_buffer).into_result()?;
    let mut warning = edge_warning.or(radius_warning);

    let center_cell = encode_cell(center, config)?;
    let cell_size = center_cell.cell_size_meters();
    let cap = f64::from(grid_radius_cap(config));

    let mut grid_radius = (radius_meters / cell_size).ceil();
    if grid_radius > cap {
        grid_radius = cap;
        warning = Some(format!(
            "Search radius limited to {:.0}m for performance",
            cap * cell_size
        ));
    }
    if let Some(message) = &warning {
        log::warn!("{}", message);
    }

    let mut candidates = enumerate(&center_cell, grid_radius.max(1.0) as i64, config);
    candidates.push(center_cell);

    let total = candidates.len();
    candidates.retain(|cell| distance_meters(center, &cell.center()) <= radius_meters);

    log::debug!(
        "radius search around {} kept {} of {} candidates ({} m, grid radius {})",
        center,
        candidates.len(),
        total,
        radius_meters,
        grid_radius
    );
    Ok(Outcome::new(candidates, warning))
}

/// Effective grid radius cap. Configs that skipped `validate()` still get
/// the hard ceiling.
fn grid_radius_cap(config: &Config) -> u32 {
    config.max_grid_radius.min(MAX_GRID_RADIUS_LIMIT)
}

fn enumerate(center: &Code, radius: i64, config: &Config) -> Vec<Code> {
    let origin = center.center();
    let lat_span = center.bounding_box().height();
    let lon_span = center.bounding_box().width();

    let mut cells = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.insert(center.as_str().to_string());

    for d_lat in -radius..=radius {
        for d_lon in -radius..=radius {
            if d_lat == 0 && d_lon == 0 {
                continue;
            }

            let lat = origin.latitude() + d_lat as f64 * lat_span;
            let lon = origin.longitude() + d_lon as f64 * lon_span;
            let Ok(candidate) = Coordinate::new(lat, lon) else {
                continue;
            };
            if !config.domain.contains(&candidate) {
                continue;
            }

            match encode_cell(&candidate, config) {
                Ok(cell) => {
                    if seen.insert(cell.as_str().to_string()) {
                        cells.push(cell);
                    }
                }
                Err(e) => log::debug!("skipping neighbor at {}: {}", candidate, e),
            }
        }
    }

    cells
}
