//! GeoJSON export of decoded cells.

use crate::code::Code;
use crate::error::{DigipinError, Result};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// Cell outline as a closed GeoJSON polygon ring (`[lon, lat]` positions).
fn cell_geometry(code: &Code) -> Geometry {
    let ring: Vec<Vec<f64>> = code
        .bounding_box()
        .to_polygon()
        .exterior()
        .coords()
        .map(|coord| vec![coord.x, coord.y])
        .collect();

    Geometry::new(Value::Polygon(vec![ring]))
}

/// Converts a cell into a Feature with `digipin`, `formatted`, `center`
/// and `area_m2` properties. `formatted` groups the code around `delimiter`.
pub fn to_feature(code: &Code, delimiter: char) -> Feature {
    let center = code.center();
    let mut properties = JsonObject::new();
    properties.insert("digipin".to_string(), json!(code.as_str()));
    properties.insert("formatted".to_string(), json!(code.formatted_with(delimiter)));
    properties.insert(
        "center".to_string(),
        json!([center.longitude(), center.latitude()]),
    );
    properties.insert("area_m2".to_string(), json!(code.area_square_meters()));

    Feature {
        bbox: Some(vec![
            code.bounding_box().min_lon(),
            code.bounding_box().min_lat(),
            code.bounding_box().max_lon(),
            code.bounding_box().max_lat(),
        ]),
        geometry: Some(cell_geometry(code)),
        id: Some(geojson::feature::Id::String(code.as_str().to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Serializes a single cell as a GeoJSON Feature string.
pub fn code_to_geojson(code: &Code, delimiter: char) -> Result<String> {
    serde_json::to_string(&to_feature(code, delimiter)).map_err(|e| {
        DigipinError::Serialization(format!("Failed to serialize cell {}: {}", code, e))
    })
}

/// Serializes cells, e.g. neighbor or radius search results, as a FeatureCollection.
pub fn codes_to_geojson(codes: &[Code], delimiter: char) -> Result<String> {
    let collection = FeatureCollection {
        bbox: None,
        features: codes.iter().map(|code| to_feature(code, delimiter)).collect(),
        foreign_members: None,
    };

    serde_json::to_string(&collection).map_err(|e| {
        DigipinError::Serialization(format!("Failed to serialize feature collection: {}", e))
    })
}
