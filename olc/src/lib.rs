//! # OLC - Open Location Code Library
//!
//! Encode latitude/longitude pairs into Open Location Codes ("plus codes"),
//! decode codes back into the area they name, and shorten or recover codes
//! relative to a nearby reference location.
//!
//! ## Features
//!
//! - **Exact**: Coordinates are scaled to integers once, so encoding and
//!   decoding never accumulate floating point error digit by digit
//! - **Allocation-light**: Validation and decoding work directly on bytes
//! - **Short codes**: Drop leading digits a reader can infer from context
//! - **GeoJSON**: Optional export of code areas as polygon features
//!
//! ## Quick Start
//!
//! ```
//! use olc::{decode, encode, recover_nearest, shorten};
//!
//! let code = encode(51.3701125, -1.217765625, 11)?;
//! assert_eq!(code, "9C3W9QCJ+2VX");
//!
//! let area = decode(&code)?;
//! assert!(area.contains(51.3701125, -1.217765625));
//!
//! let short = shorten(&code, 51.3708675, -1.217765625)?;
//! assert_eq!(short, "CJ+2VX");
//! assert_eq!(recover_nearest(&short, 51.3708675, -1.217765625)?, code);
//! # Ok::<(), olc::OlcError>(())
//! ```
//!
//! ## Code Format
//!
//! A code is a run of digits from the 20-symbol alphabet
//! `23456789CFGHJMPQRVWX` with a `+` after the eighth digit:
//!
//! - **Digits 1-10**: five latitude/longitude pairs, each pair dividing the
//!   previous cell into 20×20 (20°, 1°, 0.05°, 0.0025°, 0.000125°)
//! - **Digits 11-15**: each digit splits the cell into a 5×4 grid
//! - **Padding**: codes shorter than eight digits are filled with `0` up to
//!   the separator, e.g. `8FWC0000+`
//! - **Short codes**: the separator comes earlier because leading digits
//!   were removed, e.g. `9QCJ+2VX`
//!
//! Case is ignored on input; output is always uppercase.

pub mod alphabet;
pub mod area;
pub mod code;
pub mod codec;
pub mod error;
#[cfg(feature = "geojson")]
pub mod geojson;
mod grid;
mod pair;
pub mod shorten;
pub mod validate;

// Re-export main types at crate root for convenience
pub use alphabet::DEFAULT_CODE_LENGTH;
pub use area::CodeArea;
pub use code::OpenLocationCode;
pub use codec::{clip_latitude, compute_latitude_precision, decode, encode, normalize_longitude};
pub use error::{OlcError, Result};
pub use shorten::{recover_nearest, shorten};
pub use validate::{is_full, is_padded, is_short, is_valid};
