//! Pair encoding of the first ten digits.
//!
//! Digits 1-10 alternate latitude and longitude, each a base-20 digit. The
//! five pairs have place values of 20°, 1°, 0.05°, 0.0025° and 0.000125°.
//!
//! Both directions work on integers in `PAIR_PRECISION` units (1/8000°)
//! shifted into the positive domain (latitude + 90°, longitude + 180°), so
//! every digit comes from an exact `divmod` rather than repeated float
//! subtraction.

use crate::alphabet::{ENCODING_BASE, PAIR_CODE_LENGTH, PAIR_FIRST_PLACE_VALUE};

/// Bounds of a pair-decoded area in shifted `PAIR_PRECISION` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PairArea {
    pub lat_lo: i64,
    pub lng_lo: i64,
    pub lat_hi: i64,
    pub lng_hi: i64,
}

/// Extract all ten pair digits, most significant first.
///
/// `lat_val` and `lng_val` are non-negative positions in `PAIR_PRECISION`
/// units. The returned values are digit values `0..20`, latitude first in
/// every pair.
pub(crate) fn encode(lat_val: i64, lng_val: i64) -> [u8; PAIR_CODE_LENGTH] {
    let mut digits = [0u8; PAIR_CODE_LENGTH];
    let (mut lat, mut lng) = (lat_val, lng_val);

    for pair in (0..PAIR_CODE_LENGTH / 2).rev() {
        digits[pair * 2] = (lat % ENCODING_BASE) as u8;
        digits[pair * 2 + 1] = (lng % ENCODING_BASE) as u8;
        lat /= ENCODING_BASE;
        lng /= ENCODING_BASE;
    }

    digits
}

/// Accumulate pair digits back into an area.
///
/// `digits` holds digit values (not symbols), an even count of at most ten.
/// The high bound is the low bound plus the place value of the last pair.
pub(crate) fn decode(digits: &[u8]) -> PairArea {
    let pairs = digits.len() / 2;
    let mut lat = 0;
    let mut lng = 0;
    let mut place_value = PAIR_FIRST_PLACE_VALUE;

    for (i, pair) in digits.chunks_exact(2).enumerate() {
        lat += pair[0] as i64 * place_value;
        lng += pair[1] as i64 * place_value;
        if i + 1 < pairs {
            place_value /= ENCODING_BASE;
        }
    }

    PairArea {
        lat_lo: lat,
        lng_lo: lng,
        lat_hi: lat + place_value,
        lng_hi: lng + place_value,
    }
}
