//! Validated code values.
//!
//! [`OpenLocationCode`] wraps a string that has already passed [`is_valid`],
//! normalized to uppercase, so callers holding one never re-validate.

use std::fmt;
use std::str::FromStr;

use crate::area::CodeArea;
use crate::codec::{decode, encode};
use crate::error::{OlcError, Result};
use crate::shorten::{recover_nearest, shorten};
use crate::validate::{is_full, is_padded, is_short, is_valid};

/// A structurally valid Open Location Code, full or short.
///
/// # Example
///
/// ```
/// use olc::OpenLocationCode;
///
/// let code: OpenLocationCode = "9c3w9qcj+2vx".parse()?;
/// assert_eq!(code.as_str(), "9C3W9QCJ+2VX");
/// assert!(code.is_full());
///
/// let short = code.shorten(51.3701125, -1.217765625)?;
/// assert_eq!(short.as_str(), "+2VX");
/// assert_eq!(short.recover(51.3701125, -1.217765625)?, code);
/// # Ok::<(), olc::OlcError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpenLocationCode {
    code: String,
}

impl OpenLocationCode {
    /// Parse and normalize a code.
    ///
    /// # Errors
    ///
    /// Returns [`OlcError::InvalidCode`] if the string is not a valid code.
    pub fn new(code: &str) -> Result<Self> {
        if !is_valid(code) {
            return Err(OlcError::InvalidCode {
                code: code.to_string(),
            });
        }
        Ok(Self {
            code: code.to_ascii_uppercase(),
        })
    }

    /// Encode a location (see [`encode`]).
    pub fn from_coordinates(latitude: f64, longitude: f64, code_length: usize) -> Result<Self> {
        Ok(Self {
            code: encode(latitude, longitude, code_length)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn is_full(&self) -> bool {
        is_full(&self.code)
    }

    pub fn is_short(&self) -> bool {
        is_short(&self.code)
    }

    pub fn is_padded(&self) -> bool {
        is_padded(&self.code)
    }

    /// Decode into an area. Fails with [`OlcError::NotFullCode`] for short
    /// codes.
    pub fn decode(&self) -> Result<CodeArea> {
        decode(&self.code)
    }

    /// Shorten relative to a reference location (see [`shorten`]).
    pub fn shorten(&self, latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            code: shorten(&self.code, latitude, longitude)?,
        })
    }

    /// Recover the nearest full code (see [`recover_nearest`]).
    pub fn recover(&self, latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            code: recover_nearest(&self.code, latitude, longitude)?,
        })
    }

    /// Check whether a point lies inside this code's area.
    ///
    /// Always `false` for short codes, which name no area on their own.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.decode()
            .map(|area| area.contains(latitude, longitude))
            .unwrap_or(false)
    }

    /// Consume the value, returning the normalized string.
    pub fn into_string(self) -> String {
        self.code
    }
}

impl FromStr for OpenLocationCode {
    type Err = OlcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for OpenLocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for OpenLocationCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
