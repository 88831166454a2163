//! Recursive 4×4 subdivision codec.
//!
//! Each symbol narrows the current rectangle (initially the configured
//! domain) to one of sixteen sub-rectangles. Row 0 of the alphabet is the
//! northern band, column 0 the western one. The decoder applies the exact
//! inverse of the encoder's narrowing step, so for every in-domain coordinate
//! `c`, `decode(encode(c))` contains `c`.

use crate::alphabet::GRID_SIZE;
use crate::code::Code;
use crate::compute::validation::validate_code;
use crate::config::Config;
use crate::error::{DigipinError, Result};
use crate::types::{BoundingBox, Coordinate};

const DIVISIONS: f64 = GRID_SIZE as f64;
const LAST: i64 = GRID_SIZE as i64 - 1;

/// Mutable rectangle narrowed at every level.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl Cursor {
    fn from_domain(domain: &BoundingBox) -> Self {
        Self {
            lat_min: domain.min_lat(),
            lat_max: domain.max_lat(),
            lon_min: domain.min_lon(),
            lon_max: domain.max_lon(),
        }
    }

    fn divisions(&self) -> (f64, f64) {
        (
            (self.lat_max - self.lat_min) / DIVISIONS,
            (self.lon_max - self.lon_min) / DIVISIONS,
        )
    }

    fn is_finite(&self) -> bool {
        self.lat_min.is_finite()
            && self.lat_max.is_finite()
            && self.lon_min.is_finite()
            && self.lon_max.is_finite()
    }

    fn into_bounding_box(self) -> Result<BoundingBox> {
        let southwest = Coordinate::new(self.lat_min, self.lon_min)?;
        let northeast = Coordinate::new(self.lat_max, self.lon_max)?;
        BoundingBox::new(southwest, northeast)
    }
}

/// Encodes a coordinate into `config.precision` symbols.
///
/// Fails with `OutOfBounds` when the coordinate is outside `config.domain`.
///
/// # Examples
///
/// ```
/// use digipin::{Config, Coordinate, codec};
///
/// let config = Config::default();
/// let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
/// assert_eq!(codec::encode(&delhi, &config).unwrap(), "39J438TJC7");
/// ```
pub fn encode(coordinate: &Coordinate, config: &Config) -> Result<String> {
    if !config.domain.contains(coordinate) {
        return Err(DigipinError::OutOfBounds(format!(
            "Coordinate {} is outside the DIGIPIN domain {}",
            coordinate, config.domain
        )));
    }

    let (lat, lon) = (coordinate.latitude(), coordinate.longitude());
    let mut cursor = Cursor::from_domain(&config.domain);
    let mut code = String::with_capacity(config.precision);

    for level in 0..config.precision {
        let (lat_div, lon_div) = cursor.divisions();

        // Rows count down from the north, hence the inversion.
        let row = (LAST - ((lat - cursor.lat_min) / lat_div).floor() as i64).clamp(0, LAST);
        let col = (((lon - cursor.lon_min) / lon_div).floor() as i64).clamp(0, LAST);

        code.push(config.alphabet.symbol(row as usize, col as usize));

        let (row, col) = (row as f64, col as f64);
        cursor.lat_max = cursor.lat_min + lat_div * (DIVISIONS - row);
        cursor.lat_min += lat_div * (DIVISIONS - 1.0 - row);
        cursor.lon_min += lon_div * col;
        cursor.lon_max = cursor.lon_min + lon_div;

        if !cursor.is_finite() {
            return Err(DigipinError::GenerationFailed(format!(
                "non-finite cell bounds at level {}",
                level + 1
            )));
        }
    }

    log::trace!("encoded {} as {}", coordinate, code);
    Ok(code)
}

/// Decodes a code into the cell it denotes.
///
/// The code must consist of exactly `config.precision` alphabet symbols; no
/// delimiters are accepted here (see [`decode_cell`]).
pub fn decode(code: &str, config: &Config) -> Result<BoundingBox> {
    if let Some(err) = validate_code(code, &config.alphabet, config.precision).error {
        return Err(err);
    }

    let mut cursor = Cursor::from_domain(&config.domain);

    for symbol in code.chars() {
        let (row, col) = config.alphabet.position(symbol).ok_or_else(|| {
            DigipinError::InvalidCharacter(format!(
                "Invalid character in DIGIPIN code: {}",
                symbol
            ))
        })?;
        let (row, col) = (row as f64, col as f64);
        let (lat_div, lon_div) = cursor.divisions();

        cursor = Cursor {
            lat_min: cursor.lat_max - lat_div * (row + 1.0),
            lat_max: cursor.lat_max - lat_div * row,
            lon_min: cursor.lon_min + lon_div * col,
            lon_max: cursor.lon_min + lon_div * (col + 1.0),
        };
    }

    cursor
        .into_bounding_box()
        .map_err(|e| DigipinError::DecodeFailed(e.message().to_string()))
}

/// Encodes a coordinate and pairs the code with its decoded cell.
pub fn encode_cell(coordinate: &Coordinate, config: &Config) -> Result<Code> {
    let code = encode(coordinate, config)?;
    let bounding_box = decode(&code, config).map_err(|e| match e {
        DigipinError::GenerationFailed(_) => e,
        other => DigipinError::GenerationFailed(other.message().to_string()),
    })?;
    Ok(Code::new(code, bounding_box.center(), bounding_box))
}

/// Decodes a code, accepting the grouped form (`39J-438-TJC7`) as well.
pub fn decode_cell(code: &str, config: &Config) -> Result<Code> {
    let code = normalize(code, config.delimiter);
    let bounding_box = decode(&code, config)?;
    Ok(Code::new(code, bounding_box.center(), bounding_box))
}

/// Strips `delimiter` and surrounding whitespace from a user supplied code.
pub fn normalize(code: &str, delimiter: char) -> String {
    code.trim().chars().filter(|&c| c != delimiter).collect()
}
