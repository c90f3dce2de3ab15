//! Structural validation of code strings.
//!
//! A code is accepted as one of three shapes:
//!
//! - **full**: separator after the eighth digit (`8FWC2345+G6`, `8FWC0000+`)
//! - **short**: separator earlier, leading digits dropped (`2345+G6`, `+G6`)
//! - **invalid**: anything else
//!
//! Padding (`0`) is only allowed in full codes, as an even-length run that
//! ends exactly at the separator, and nothing may follow the separator.

use crate::alphabet::{
    digit_value, ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR,
    SEPARATOR_POSITION,
};

/// Check whether a string is a valid full or short code.
///
/// # Examples
///
/// ```
/// use olc::is_valid;
///
/// assert!(is_valid("8FWC2345+G6"));
/// assert!(is_valid("2345+G6"));
/// assert!(!is_valid("G+"));
/// assert!(!is_valid("8FWC2345+G"));
/// ```
pub fn is_valid(code: &str) -> bool {
    let bytes = code.as_bytes();
    let separator = SEPARATOR as u8;
    let padding = PADDING_CHARACTER as u8;

    // Exactly one separator, at an even position no later than the eighth digit
    let sep = match bytes.iter().position(|&b| b == separator) {
        Some(sep) => sep,
        None => return false,
    };
    if bytes.iter().rposition(|&b| b == separator) != Some(sep) {
        return false;
    }
    if bytes.len() == 1 {
        return false;
    }
    if sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }

    if let Some(pad) = bytes.iter().position(|&b| b == padding) {
        // Short codes are never padded, and a code cannot start with padding
        if sep < SEPARATOR_POSITION || pad == 0 || pad > sep {
            return false;
        }
        let run = &bytes[pad..sep];
        if run.len() % 2 == 1 || run.iter().any(|&b| b != padding) {
            return false;
        }
        if sep != bytes.len() - 1 {
            return false;
        }
    }

    // A single digit after the separator is never produced by encoding
    if bytes.len() - sep - 1 == 1 {
        return false;
    }

    bytes
        .iter()
        .all(|&b| b == separator || b == padding || digit_value(b).is_some())
}

/// Check whether a string is a valid short code.
///
/// # Examples
///
/// ```
/// use olc::is_short;
///
/// assert!(is_short("WC2345+"));
/// assert!(is_short("+G6X"));
/// assert!(!is_short("8FWC2345+G6"));
/// ```
pub fn is_short(code: &str) -> bool {
    is_valid(code) && separator_index(code).is_some_and(|sep| sep < SEPARATOR_POSITION)
}

/// Check whether a string is a valid full code.
///
/// Beyond the structural rules, the first latitude and longitude digits must
/// keep the decoded area inside ±90° latitude and ±180° longitude.
///
/// # Examples
///
/// ```
/// use olc::is_full;
///
/// assert!(is_full("8FWC2345+G6"));
/// assert!(is_full("8FWC0000+"));
/// assert!(!is_full("WC2345+"));
/// // First latitude digit 'X' would put the area beyond the pole
/// assert!(!is_full("X2222222+22"));
/// ```
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let bytes = code.as_bytes();
    let first_lat = digit_value(bytes[0]).unwrap_or(0) as i64 * ENCODING_BASE;
    if first_lat >= (LATITUDE_MAX as i64) * 2 {
        return false;
    }
    let first_lng = digit_value(bytes[1]).unwrap_or(0) as i64 * ENCODING_BASE;
    first_lng < (LONGITUDE_MAX as i64) * 2
}

/// Check whether a string is a valid code containing padding.
///
/// ```
/// use olc::is_padded;
///
/// assert!(is_padded("8FWC0000+"));
/// assert!(!is_padded("8FWC2345+G6"));
/// ```
pub fn is_padded(code: &str) -> bool {
    is_valid(code) && code.contains(PADDING_CHARACTER)
}

/// Byte index of the separator, if any.
pub(crate) fn separator_index(code: &str) -> Option<usize> {
    code.find(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_full_codes() {
        for code in [
            "8FWC2345+G6",
            "8FWC2345+G6V",
            "8fwc2345+g6",
            "8FWC0000+",
            "8F000000+",
            "8FWC2300+",
            "9C3W9QCJ+2VX",
            "22222222+2222222222",
        ] {
            assert!(is_valid(code), "{} should be valid", code);
            assert!(is_full(code), "{} should be full", code);
            assert!(!is_short(code), "{} should not be short", code);
        }
    }

    #[test]
    fn test_valid_short_codes() {
        for code in ["WC2345+", "WC2345+G6", "2345+G6", "+G6X", "22+", "c2+"] {
            assert!(is_valid(code), "{} should be valid", code);
            assert!(is_short(code), "{} should be short", code);
            assert!(!is_full(code), "{} should not be full", code);
        }
    }

    #[test]
    fn test_invalid_separator() {
        assert!(!is_valid(""));
        assert!(!is_valid("+"));
        assert!(!is_valid("2+"));
        assert!(!is_valid("G+"));
        assert!(!is_valid("8FWC2345G6")); // no separator
        assert!(!is_valid("8FWC2345+G6+")); // two separators
        assert!(!is_valid("8FWC000+")); // odd position
        assert!(!is_valid("8FWC23456+G6")); // beyond position 8
    }

    #[test]
    fn test_single_character_after_separator() {
        assert!(!is_valid("8FWC2345+G"));
        assert!(!is_valid("WC2345+G"));
    }

    #[test]
    fn test_invalid_padding() {
        assert!(!is_valid("80000000+")); // odd run
        assert!(!is_valid("8FW00000+")); // odd run
        assert!(!is_valid("8FWC2300+G6")); // digits after padded separator
        assert!(!is_valid("WC2300+")); // short code with padding
        assert!(!is_valid("WC2300+G6g"));
        assert!(!is_valid("8FWC00+")); // short code with padding
        assert!(!is_valid("8FWC0+00")); // padding after separator
        assert!(!is_valid("8FWC2345+00"));
        assert!(!is_valid("8FW0C000+")); // broken run
        assert!(!is_valid("00000000+")); // padding at start
        assert!(!is_valid("8F0000G2+")); // run does not reach the separator
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!is_valid("8FWC2_45+G6"));
        assert!(!is_valid("8FWC2η45+G6"));
        assert!(!is_valid("8FWC2A45+G6"));
        assert!(!is_valid(" 8FWC2345+G6"));
    }

    #[test]
    fn test_full_rejects_out_of_range_first_digits() {
        assert!(is_valid("X2222222+22"));
        assert!(!is_full("X2222222+22"));
        assert!(!is_full("2X222222+22"));
        assert!(!is_full("W2222222+"));
        assert!(!is_full("VX222222+"));
        // Largest legal first digits: lat 'C' (160°), lng 'V' (340°)
        assert!(is_full("CV222222+"));
    }

    #[test]
    fn test_is_padded() {
        assert!(is_padded("8FWC0000+"));
        assert!(is_padded("8F000000+"));
        assert!(!is_padded("8FWC2345+G6"));
        assert!(!is_padded("WC2345+"));
        assert!(!is_padded("8FW00000+"));
    }
}
