//! Grid refinement of digits 11-15.
//!
//! Past the tenth digit, each digit splits the current cell into a grid of
//! 5 rows × 4 columns and names one cell, numbered row-major:
//!
//! ```text
//!   row 4 | R  V  W  X
//!   row 3 | J  M  P  Q
//!   row 2 | C  F  G  H
//!   row 1 | 6  7  8  9
//!   row 0 | 2  3  4  5
//!          col0 ... col3
//! ```
//!
//! Latitude steps shrink by 5 and longitude steps by 4 per digit, so cells
//! stop being square.

use crate::alphabet::{
    GRID_CODE_LENGTH, GRID_COLUMNS, GRID_LAT_FIRST_PLACE_VALUE, GRID_LNG_FIRST_PLACE_VALUE,
    GRID_ROWS,
};

/// Offset of a grid-decoded cell from the pair cell's low corner, in final
/// precision units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridOffset {
    pub lat: i64,
    pub lng: i64,
    /// Height of the last cell.
    pub lat_place: i64,
    /// Width of the last cell.
    pub lng_place: i64,
}

/// Extract the five grid digits from full-precision values.
///
/// Digits are computed least significant first and returned most significant
/// first. The remaining quotients are the inputs scaled down to pair
/// precision, ready for [`crate::pair::encode`].
pub(crate) fn encode(lat_val: i64, lng_val: i64) -> ([u8; GRID_CODE_LENGTH], i64, i64) {
    let mut digits = [0u8; GRID_CODE_LENGTH];
    let (mut lat, mut lng) = (lat_val, lng_val);

    for digit in digits.iter_mut().rev() {
        let row = lat % GRID_ROWS;
        let col = lng % GRID_COLUMNS;
        *digit = (row * GRID_COLUMNS + col) as u8;
        lat /= GRID_ROWS;
        lng /= GRID_COLUMNS;
    }

    (digits, lat, lng)
}

/// Accumulate grid digits into an offset within the pair cell.
///
/// `digits` holds digit values (not symbols), at most five.
pub(crate) fn decode(digits: &[u8]) -> GridOffset {
    let mut lat = 0;
    let mut lng = 0;
    let mut row_place = GRID_LAT_FIRST_PLACE_VALUE;
    let mut col_place = GRID_LNG_FIRST_PLACE_VALUE;

    for (i, &digit) in digits.iter().enumerate() {
        let row = digit as i64 / GRID_COLUMNS;
        let col = digit as i64 % GRID_COLUMNS;
        lat += row * row_place;
        lng += col * col_place;
        if i + 1 < digits.len() {
            row_place /= GRID_ROWS;
            col_place /= GRID_COLUMNS;
        }
    }

    GridOffset {
        lat,
        lng,
        lat_place: row_place,
        lng_place: col_place,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{GRID_LAT_SCALE, GRID_LNG_SCALE};

    #[test]
    fn test_encode_splits_row_and_col() {
        // Last digit: row 2 (lat % 5), col 3 (lng % 4) => 2 * 4 + 3
        let (digits, _, _) = encode(2, 3);
        assert_eq!(digits, [0, 0, 0, 0, 11]);
    }

    #[test]
    fn test_encode_returns_pair_quotients() {
        let (digits, lat, lng) = encode(7 * GRID_LAT_SCALE, 9 * GRID_LNG_SCALE);
        assert_eq!(digits, [0; GRID_CODE_LENGTH]);
        assert_eq!(lat, 7);
        assert_eq!(lng, 9);
    }

    #[test]
    fn test_encode_most_significant_first() {
        // Row 4, col 3 in the first grid step only
        let (digits, lat, lng) = encode(4 * 625, 3 * 256);
        assert_eq!(digits, [19, 0, 0, 0, 0]);
        assert_eq!((lat, lng), (0, 0));
    }

    #[test]
    fn test_decode_single_digit() {
        let offset = decode(&[19]);
        assert_eq!(offset.lat, 4 * 625);
        assert_eq!(offset.lng, 3 * 256);
        assert_eq!(offset.lat_place, 625);
        assert_eq!(offset.lng_place, 256);
    }

    #[test]
    fn test_decode_place_values_shrink() {
        let offset = decode(&[0; GRID_CODE_LENGTH]);
        assert_eq!(offset.lat_place, 1);
        assert_eq!(offset.lng_place, 1);

        let offset = decode(&[0, 0]);
        assert_eq!(offset.lat_place, 125);
        assert_eq!(offset.lng_place, 64);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let (digits, lat, lng) = encode(1234, 987);
        assert_eq!((lat, lng), (0, 0));
        let offset = decode(&digits);
        assert_eq!(offset.lat, 1234);
        assert_eq!(offset.lng, 987);
    }
}
