//! GeoJSON export of code areas.
//!
//! Enable the `geojson` feature to use this module. Coordinates follow
//! GeoJSON order, `[longitude, latitude]`.
//!
//! # Example
//!
//! ```
//! use olc::geojson::code_to_feature;
//!
//! let feature = code_to_feature("8FVC2222+22")?;
//! assert_eq!(
//!     feature.property("global_code").and_then(|v| v.as_str()),
//!     Some("8FVC2222+22")
//! );
//! # Ok::<(), olc::OlcError>(())
//! ```

use geojson::{Feature, Geometry, Value as GeoJsonValue};

use crate::area::CodeArea;
use crate::codec::decode;
use crate::error::Result;

/// Codes at least this long are split into area and local parts.
const SPLIT_CODE_LENGTH: usize = 10;

/// Number of characters in the area part of a split code.
const AREA_CODE_CHARS: usize = 4;

/// Build a closed polygon ring around an area.
///
/// The ring runs south-west, north-west, north-east, south-east and back to
/// south-west.
pub fn area_to_geometry(area: &CodeArea) -> Geometry {
    let sw = vec![area.longitude_lo(), area.latitude_lo()];
    let nw = vec![area.longitude_lo(), area.latitude_hi()];
    let ne = vec![area.longitude_hi(), area.latitude_hi()];
    let se = vec![area.longitude_hi(), area.latitude_lo()];

    Geometry::new(GeoJsonValue::Polygon(vec![vec![
        sw.clone(),
        nw,
        ne,
        se,
        sw,
    ]]))
}

/// Decode a full code into a polygon feature.
///
/// # Properties
///
/// - `global_code`: the code, uppercased
/// - `code_length`: number of significant digits
/// - `area_code` / `local_code`: for codes of 10 or more digits, the first
///   four characters and the remainder
///
/// # Errors
///
/// Returns [`crate::OlcError::NotFullCode`] if the code is not a full code.
pub fn code_to_feature(code: &str) -> Result<Feature> {
    let area = decode(code)?;
    let code = code.to_ascii_uppercase();

    let mut feature = Feature::from(area_to_geometry(&area));
    feature.set_property("global_code", code.as_str());
    feature.set_property("code_length", area.code_length());
    if area.code_length() >= SPLIT_CODE_LENGTH {
        let (area_code, local_code) = code.split_at(AREA_CODE_CHARS);
        feature.set_property("area_code", area_code);
        feature.set_property("local_code", local_code);
    }

    Ok(feature)
}
