//! The encoded cell: code string paired with the region it denotes.

use crate::spatial;
use crate::types::{BoundingBox, Coordinate};
use serde::Serialize;
use std::fmt;

/// A DIGIPIN code together with its decoded cell.
///
/// Only the codec creates values of this type, so the symbols, center and
/// bounding box always agree with each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Code {
    code: String,
    center: Coordinate,
    bounding_box: BoundingBox,
}

impl Code {
    pub(crate) fn new(code: String, center: Coordinate, bounding_box: BoundingBox) -> Self {
        Self {
            code,
            center,
            bounding_box,
        }
    }

    /// The raw symbols, without delimiters.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn into_string(self) -> String {
        self.code
    }

    /// Number of symbols, i.e. the precision level.
    pub fn len(&self) -> usize {
        self.code.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Midpoint of the cell.
    #[inline]
    pub fn center(&self) -> Coordinate {
        self.center
    }

    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Groups a 10 symbol code as 3-3-4 with `-`, e.g. `39J-438-P582`.
    pub fn formatted(&self) -> String {
        self.formatted_with('-')
    }

    /// Groups a 10 symbol code as 3-3-4 around `delimiter`.
    ///
    /// Codes of any other length are returned ungrouped.
    pub fn formatted_with(&self, delimiter: char) -> String {
        let chars: Vec<char> = self.code.chars().collect();
        if chars.len() != 10 {
            return self.code.clone();
        }

        let mut out = String::with_capacity(12);
        out.extend(&chars[..3]);
        out.push(delimiter);
        out.extend(&chars[3..6]);
        out.push(delimiter);
        out.extend(&chars[6..]);
        out
    }

    pub fn cell_size_meters(&self) -> f64 {
        spatial::cell_size_meters(&self.bounding_box)
    }

    pub fn area_square_meters(&self) -> f64 {
        spatial::area_square_meters(&self.bounding_box)
    }

    pub fn precision_description(&self) -> String {
        spatial::precision_description(&self.bounding_box)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
