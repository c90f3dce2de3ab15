//! Error types for the OLC library.

use thiserror::Error;

/// Errors that can occur when encoding, decoding or shortening codes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OlcError {
    /// Requested code length cannot be produced (or is too coarse to shorten).
    #[error("Invalid code length: {length} (expected 2, 4, 6, 8 or any length from 10)")]
    InvalidLength { length: usize },

    /// The string is not a structurally valid Open Location Code.
    #[error("Invalid Open Location Code: {code:?}")]
    InvalidCode { code: String },

    /// Operation requires a full code.
    #[error("Not a valid full code: {code:?}")]
    NotFullCode { code: String },

    /// Operation requires a short (or full) code.
    #[error("Not a valid short code: {code:?}")]
    NotShortCode { code: String },

    /// Padded codes carry too little precision to drop leading digits.
    #[error("Cannot shorten padded code: {code:?}")]
    PaddedCodeNotShortenable { code: String },

    /// Latitude or longitude is NaN or infinite.
    #[error("Invalid coordinates: lat={lat}, lng={lng} (must be finite)")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

/// Result type alias using [`OlcError`].
pub type Result<T> = std::result::Result<T, OlcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OlcError::InvalidLength { length: 3 };
        assert!(err.to_string().contains('3'));

        let err = OlcError::NotFullCode {
            code: "WC2345+".to_string(),
        };
        assert!(err.to_string().contains("WC2345+"));

        let err = OlcError::InvalidCoordinate {
            lat: f64::NAN,
            lng: 0.0,
        };
        assert!(err.to_string().contains("NaN"));
    }
}
