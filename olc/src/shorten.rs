//! Shortening full codes and recovering them from a reference location.
//!
//! A short code drops leading digits that a reader can infer from where
//! they are. [`shorten`] only drops digits when the reference point is well
//! inside the cell those digits describe, and [`recover_nearest`] borrows
//! the missing digits from the reference point, then picks whichever
//! neighbouring cell puts the result closest to it.

use tracing::debug;

use crate::alphabet::{
    DEFAULT_CODE_LENGTH, ENCODING_BASE, LATITUDE_MAX, MIN_TRIMMABLE_CODE_LENGTH,
    PADDING_CHARACTER, PAIR_RESOLUTIONS, SEPARATOR_POSITION,
};
use crate::codec::{check_coordinates, clip_latitude, decode, encode, normalize_longitude};
use crate::error::{OlcError, Result};
use crate::validate::{is_full, is_short, separator_index};

/// Fraction of a cell the reference may be from the code center and still
/// allow its digits to be dropped.
const SAFETY_FACTOR: f64 = 0.3;

/// Remove as many leading digits as the reference location allows.
///
/// The distance between the code's center and the reference is compared
/// against 30% of the 0.0025°, 0.05° and 1° cells in that order; the first
/// one it fits removes 8, 6 or 4 characters respectively. When the
/// reference is too far away the code is returned unchanged (uppercased).
///
/// # Errors
///
/// - [`OlcError::NotFullCode`] if `code` is not a full code
/// - [`OlcError::PaddedCodeNotShortenable`] if `code` contains padding
/// - [`OlcError::InvalidLength`] if the code has fewer than 6 digits
/// - [`OlcError::InvalidCoordinate`] for a NaN or infinite reference
///
/// # Examples
///
/// ```
/// use olc::shorten;
///
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625)?, "+2VX");
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3708675, -1.217765625)?, "CJ+2VX");
/// # Ok::<(), olc::OlcError>(())
/// ```
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String> {
    if !is_full(code) {
        return Err(OlcError::NotFullCode {
            code: code.to_string(),
        });
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(OlcError::PaddedCodeNotShortenable {
            code: code.to_string(),
        });
    }
    check_coordinates(latitude, longitude)?;

    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length() < MIN_TRIMMABLE_CODE_LENGTH {
        return Err(OlcError::InvalidLength {
            length: area.code_length(),
        });
    }

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    let range = (area.latitude_center() - latitude)
        .abs()
        .max((area.longitude_center() - longitude).abs());

    // Skip the 20° cell (never dropped alone) and the finest one (nothing left)
    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        if range < PAIR_RESOLUTIONS[i] * SAFETY_FACTOR {
            let trimmed = (i + 1) * 2;
            debug!(code = %code, range, trimmed, "Shortened code");
            return Ok(code[trimmed..].to_string());
        }
    }

    debug!(code = %code, range, "Reference too far to shorten");
    Ok(code)
}

/// Recover the full code nearest to a reference location.
///
/// The digits missing in front of `short_code` are taken from the code of
/// the reference point. Because that can land in the wrong neighbouring
/// cell when the reference sits near a cell edge, the decoded center is
/// moved one cell toward the reference whenever it is more than half a cell
/// away in either direction. Latitude moves never leave -90..=90.
///
/// A full code is returned uppercased and otherwise unchanged.
///
/// # Errors
///
/// - [`OlcError::NotShortCode`] if the code is neither short nor full
/// - [`OlcError::InvalidCoordinate`] for a NaN or infinite reference
///
/// # Examples
///
/// ```
/// use olc::recover_nearest;
///
/// assert_eq!(recover_nearest("+2VX", 51.3701125, -1.217765625)?, "9C3W9QCJ+2VX");
/// assert_eq!(recover_nearest("22+", 42.899, 9.012)?, "8FJFW222+");
/// # Ok::<(), olc::OlcError>(())
/// ```
pub fn recover_nearest(short_code: &str, latitude: f64, longitude: f64) -> Result<String> {
    if is_full(short_code) {
        return Ok(short_code.to_ascii_uppercase());
    }
    let separator = match separator_index(short_code) {
        Some(sep) if is_short(short_code) => sep,
        _ => {
            return Err(OlcError::NotShortCode {
                code: short_code.to_string(),
            })
        }
    };
    check_coordinates(latitude, longitude)?;

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let padding_length = SEPARATOR_POSITION - separator;
    let reference = encode(latitude, longitude, DEFAULT_CODE_LENGTH)?;
    let candidate = format!(
        "{}{}",
        &reference[..padding_length],
        short_code.to_ascii_uppercase()
    );
    let area = decode(&candidate)?;

    // Size of the cell named by the borrowed prefix
    let resolution = (ENCODING_BASE as f64).powi(2 - (padding_length / 2) as i32);
    let half_resolution = resolution / 2.0;

    let mut center_lat = area.latitude_center();
    let mut center_lng = area.longitude_center();

    if latitude + half_resolution < center_lat && center_lat - resolution >= -LATITUDE_MAX {
        center_lat -= resolution;
    } else if latitude - half_resolution > center_lat && center_lat + resolution <= LATITUDE_MAX
    {
        center_lat += resolution;
    }
    if longitude + half_resolution < center_lng {
        center_lng -= resolution;
    } else if longitude - half_resolution > center_lng {
        center_lng += resolution;
    }

    debug!(
        short_code = short_code,
        candidate = %candidate,
        resolution,
        lat_shift = center_lat - area.latitude_center(),
        lng_shift = center_lng - area.longitude_center(),
        "Recovered nearest code"
    );

    encode(center_lat, center_lng, area.code_length())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_by_distance() {
        let code = "9C3W9QCJ+2VX";
        assert_eq!(shorten(code, 51.3701125, -1.217765625).unwrap(), "+2VX");
        assert_eq!(shorten(code, 51.3708675, -1.217765625).unwrap(), "CJ+2VX");
        assert_eq!(shorten(code, 51.3854125, -1.217765625).unwrap(), "9QCJ+2VX");
        assert_eq!(shorten(code, 51.4701125, -1.217765625).unwrap(), "9QCJ+2VX");
        assert_eq!(shorten(code, 51.3701125, -1.232865625).unwrap(), "9QCJ+2VX");
        assert_eq!(shorten(code, 55.0, -1.217765625).unwrap(), code);
    }

    #[test]
    fn test_shorten_normalizes_reference() {
        assert_eq!(
            shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625 + 360.0).unwrap(),
            "+2VX"
        );
    }

    #[test]
    fn test_shorten_uppercases() {
        assert_eq!(
            shorten("9c3w9qcj+2vx", 51.3701125, -1.217765625).unwrap(),
            "+2VX"
        );
        assert_eq!(shorten("8fvc2222+22", 0.0, 0.0).unwrap(), "8FVC2222+22");
    }

    #[test]
    fn test_shorten_errors() {
        assert!(matches!(
            shorten("WC2345+G6", 0.0, 0.0),
            Err(OlcError::NotFullCode { .. })
        ));
        assert!(matches!(
            shorten("8FWC0000+", 48.0, 8.0),
            Err(OlcError::PaddedCodeNotShortenable { .. })
        ));
        assert!(matches!(
            shorten("8FVC2222+22", f64::NAN, 0.0),
            Err(OlcError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_recover_known_vectors() {
        assert_eq!(
            recover_nearest("+2VX", 51.3701125, -1.217765625).unwrap(),
            "9C3W9QCJ+2VX"
        );
        assert_eq!(
            recover_nearest("CJ+2VX", 51.3708675, -1.217765625).unwrap(),
            "9C3W9QCJ+2VX"
        );
        assert_eq!(
            recover_nearest("9QCJ+2VX", 51.3854125, -1.217765625).unwrap(),
            "9C3W9QCJ+2VX"
        );
        assert_eq!(recover_nearest("22+", 14.95125, -23.5001).unwrap(), "796RXG22+");
        assert_eq!(
            recover_nearest("XXXXXX+XX", 0.0, 0.0).unwrap(),
            "6CXXXXXX+XX"
        );
    }

    #[test]
    fn test_recover_picks_neighbouring_cell() {
        // Reference just west of the antimeridian, code just east of it
        assert_eq!(recover_nearest("XX5J+", -0.5, -179.5).unwrap(), "62F2XX5J+");
        assert_eq!(
            recover_nearest("qpvv+v2", 0.0, 179.9).unwrap(),
            "6VFXQPVV+V2"
        );
    }

    #[test]
    fn test_recover_stays_inside_latitude_range() {
        assert_eq!(
            recover_nearest("2222+22", 89.6, 0.0).unwrap(),
            "CFX22222+22"
        );
        assert_eq!(
            recover_nearest("2222+22", -89.9, 0.0).unwrap(),
            "2F222222+22"
        );
    }

    #[test]
    fn test_recover_reference_just_below_pole() {
        assert_eq!(
            recover_nearest("2222+22", 89.99999999999999, 0.0).unwrap(),
            "CFX22222+22"
        );
    }

    #[test]
    fn test_recover_and_shorten_huge_reference_longitude() {
        // 1e20 wraps to -80
        assert_eq!(recover_nearest("22+", 0.0, 1e20).unwrap(), "67G22222+");
        assert_eq!(
            shorten("9C3W9QCJ+2VX", 51.3701125, 1e20).unwrap(),
            "9C3W9QCJ+2VX"
        );
    }

    #[test]
    fn test_recover_full_code_unchanged() {
        assert_eq!(
            recover_nearest("9C3W9QCJ+2vx", 0.0, 0.0).unwrap(),
            "9C3W9QCJ+2VX"
        );
    }

    #[test]
    fn test_recover_rejects_invalid() {
        for code in ["8FWC2300+G6", "G+", "WC2300+", "X2222222+22"] {
            assert_eq!(
                recover_nearest(code, 0.0, 0.0),
                Err(OlcError::NotShortCode {
                    code: code.to_string()
                })
            );
        }
    }
}
