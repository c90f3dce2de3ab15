//! Encoding coordinates into codes and decoding codes into areas.
//!
//! [`encode`] clips and normalizes the point, scales it once to integers at
//! the finest precision, hands the integers to the grid and pair codecs, and
//! assembles the separator and padding. [`decode`] runs the same steps in
//! reverse and returns a [`CodeArea`].

use crate::alphabet::{
    digit_symbol, digit_value, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION,
    GRID_LAT_SCALE, GRID_LNG_SCALE, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT,
    MIN_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
use crate::area::CodeArea;
use crate::error::{OlcError, Result};
use crate::validate::is_full;
use crate::{grid, pair};

/// Encode a location into a code of the given length.
///
/// # Arguments
///
/// * `latitude` - Latitude in decimal degrees, clipped to -90..=90
/// * `longitude` - Longitude in decimal degrees, wrapped into -180..180
/// * `code_length` - Number of significant digits: 2, 4, 6, 8, or 10 and
///   above. Lengths beyond 15 produce a 15-digit code.
///
/// Lengths below 8 are padded with `0` up to the separator.
///
/// # Errors
///
/// - [`OlcError::InvalidLength`] for lengths below 2 or odd lengths below 10
/// - [`OlcError::InvalidCoordinate`] for NaN or infinite coordinates
///
/// # Examples
///
/// ```
/// use olc::encode;
///
/// assert_eq!(encode(47.0, 8.0, 10)?, "8FVC2222+22");
/// assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
/// assert_eq!(encode(90.0, 1.0, 4)?, "CFX30000+");
/// # Ok::<(), olc::OlcError>(())
/// ```
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String> {
    if code_length < MIN_DIGIT_COUNT || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(OlcError::InvalidLength {
            length: code_length,
        });
    }
    check_coordinates(latitude, longitude)?;

    let code_length = code_length.min(MAX_DIGIT_COUNT);
    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    // The north pole itself would decode to an area above it
    if latitude == LATITUDE_MAX {
        latitude -= compute_latitude_precision(code_length);
    }

    // Rounding can carry a point just short of either edge onto it
    let lat_val = to_units(latitude + LATITUDE_MAX, FINAL_LAT_PRECISION)
        .min(LATITUDE_UNITS - 1);
    let lng_val =
        to_units(longitude + LONGITUDE_MAX, FINAL_LNG_PRECISION).rem_euclid(LONGITUDE_UNITS);

    let (grid_digits, lat_val, lng_val) = grid::encode(lat_val, lng_val);
    let pair_digits = pair::encode(lat_val, lng_val);

    let significant = pair_digits
        .iter()
        .chain(grid_digits.iter())
        .take(code_length)
        .map(|&digit| digit_symbol(digit));

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    for (i, symbol) in significant.enumerate() {
        if i == SEPARATOR_POSITION {
            code.push(SEPARATOR);
        }
        code.push(symbol);
    }
    if code_length < SEPARATOR_POSITION {
        code.extend(std::iter::repeat(PADDING_CHARACTER).take(SEPARATOR_POSITION - code_length));
    }
    if code_length <= SEPARATOR_POSITION {
        code.push(SEPARATOR);
    }

    Ok(code)
}

/// Decode a full code into the area it names.
///
/// Separator and padding are ignored, case is ignored, and digits beyond the
/// fifteenth are dropped.
///
/// # Errors
///
/// Returns [`OlcError::NotFullCode`] unless [`is_full`] accepts the code.
///
/// # Examples
///
/// ```
/// use olc::decode;
///
/// let area = decode("7FG49Q00+")?;
/// assert_eq!(area.code_length(), 6);
/// assert!((area.latitude_lo() - 20.35).abs() < 1e-10);
/// assert!((area.longitude_hi() - 2.8).abs() < 1e-10);
/// # Ok::<(), olc::OlcError>(())
/// ```
pub fn decode(code: &str) -> Result<CodeArea> {
    if !is_full(code) {
        return Err(OlcError::NotFullCode {
            code: code.to_string(),
        });
    }

    let digits: Vec<u8> = code
        .bytes()
        .filter_map(digit_value)
        .take(MAX_DIGIT_COUNT)
        .collect();
    let (pair_digits, grid_digits) = digits.split_at(digits.len().min(PAIR_CODE_LENGTH));

    let pair_area = pair::decode(pair_digits);
    let (lat_lo, lng_lo, lat_hi, lng_hi) = if grid_digits.is_empty() {
        (
            pair_area.lat_lo * GRID_LAT_SCALE,
            pair_area.lng_lo * GRID_LNG_SCALE,
            pair_area.lat_hi * GRID_LAT_SCALE,
            pair_area.lng_hi * GRID_LNG_SCALE,
        )
    } else {
        let offset = grid::decode(grid_digits);
        let lat_lo = pair_area.lat_lo * GRID_LAT_SCALE + offset.lat;
        let lng_lo = pair_area.lng_lo * GRID_LNG_SCALE + offset.lng;
        (
            lat_lo,
            lng_lo,
            lat_lo + offset.lat_place,
            lng_lo + offset.lng_place,
        )
    };

    Ok(CodeArea::new(
        from_units(lat_lo, FINAL_LAT_PRECISION) - LATITUDE_MAX,
        from_units(lng_lo, FINAL_LNG_PRECISION) - LONGITUDE_MAX,
        from_units(lat_hi, FINAL_LAT_PRECISION) - LATITUDE_MAX,
        from_units(lng_hi, FINAL_LNG_PRECISION) - LONGITUDE_MAX,
        digits.len(),
    ))
}

/// Clip a latitude into -90..=90.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Wrap a longitude into -180..180 (180 itself becomes -180).
///
/// Values beyond ±540° are first reduced with an exact remainder, so the
/// loops below run at most twice for any finite input.
pub fn normalize_longitude(longitude: f64) -> f64 {
    let full_turn = LONGITUDE_MAX * 2.0;
    let mut longitude = if longitude.abs() > LONGITUDE_MAX * 3.0 {
        longitude % full_turn
    } else {
        longitude
    };
    while longitude < -LONGITUDE_MAX {
        longitude += full_turn;
    }
    while longitude >= LONGITUDE_MAX {
        longitude -= full_turn;
    }
    longitude
}

/// Height in degrees of the cell named by a code of `code_length` digits.
///
/// Up to ten digits latitude and longitude share a resolution; grid digits
/// divide latitude by 5 per digit.
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    let base = ENCODING_BASE as f64;
    if code_length <= PAIR_CODE_LENGTH {
        return base.powi(2 - (code_length as i32 + 1) / 2);
    }
    base.powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}

/// Reject NaN and infinite inputs before clipping and wrapping.
pub(crate) fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if latitude.is_finite() && longitude.is_finite() {
        Ok(())
    } else {
        Err(OlcError::InvalidCoordinate {
            lat: latitude,
            lng: longitude,
        })
    }
}

/// Shifted latitude span, 0..180°, in final units.
const LATITUDE_UNITS: i64 = 180 * FINAL_LAT_PRECISION;

/// Shifted longitude span, 0..360°, in final units.
const LONGITUDE_UNITS: i64 = 360 * FINAL_LNG_PRECISION;

/// Scale shifted degrees to integer units in a single rounding step.
///
/// Rounding to six decimals first absorbs representation error such as
/// `0.29999999999999999 * precision` landing just under an integer.
fn to_units(degrees: f64, precision: i64) -> i64 {
    ((degrees * precision as f64 * 1e6).round() / 1e6).floor() as i64
}

fn from_units(units: i64, precision: i64) -> f64 {
    units as f64 / precision as f64
}
