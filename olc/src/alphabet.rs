//! Code alphabet and place-value tables.
//!
//! Open Location Codes are written with a 20-symbol alphabet chosen to avoid
//! vowels and easily confused glyphs. Each symbol stands for a digit value
//! `0..20`; in grid refinement digits the value is split as
//! `row * GRID_COLUMNS + col`.
//!
//! # Place Values
//!
//! | Digits | Step | Latitude | Longitude |
//! |--------|------|----------|-----------|
//! | 1-2    | pair | 20°      | 20°       |
//! | 3-4    | pair | 1°       | 1°        |
//! | 5-6    | pair | 0.05°    | 0.05°     |
//! | 7-8    | pair | 0.0025°  | 0.0025°   |
//! | 9-10   | pair | 0.000125°| 0.000125° |
//! | 11-15  | grid | ÷5 each  | ÷4 each   |
//!
//! All digit arithmetic happens on integers scaled to the finest precision
//! (`FINAL_LAT_PRECISION` / `FINAL_LNG_PRECISION` units per degree).

/// The 20 code symbols, ordered by digit value.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Separates the first eight digits from the rest.
pub const SEPARATOR: char = '+';

/// Number of digits before the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Fills the digits between a short requested length and the separator.
pub const PADDING_CHARACTER: char = '0';

/// Number base of pair digits.
pub const ENCODING_BASE: i64 = CODE_ALPHABET.len() as i64;

/// Maximum latitude in degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Maximum longitude in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Shortest code length that can be produced.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Longest code length; extra digits are ignored.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Code length used when callers have no preference (~14m × 14m).
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Number of digits produced by pair encoding.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Number of digits produced by grid refinement.
pub const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// Columns in each grid refinement step.
pub const GRID_COLUMNS: i64 = 4;

/// Rows in each grid refinement step.
pub const GRID_ROWS: i64 = 5;

/// Degrees covered by one step of each pair position.
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Codes shorter than this carry too little precision to be shortened.
pub const MIN_TRIMMABLE_CODE_LENGTH: usize = 6;

/// Integer units per degree at the last pair digit (20^3).
pub(crate) const PAIR_PRECISION: i64 = ENCODING_BASE.pow(3);

/// Place value of the first pair digit in `PAIR_PRECISION` units (20° ⇒ 20^4).
pub(crate) const PAIR_FIRST_PLACE_VALUE: i64 = ENCODING_BASE.pow(4);

/// Latitude scale of the whole grid section (5^5).
pub(crate) const GRID_LAT_SCALE: i64 = GRID_ROWS.pow(GRID_CODE_LENGTH as u32);

/// Longitude scale of the whole grid section (4^5).
pub(crate) const GRID_LNG_SCALE: i64 = GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);

/// Place value of the first grid row in final latitude units.
pub(crate) const GRID_LAT_FIRST_PLACE_VALUE: i64 = GRID_ROWS.pow(GRID_CODE_LENGTH as u32 - 1);

/// Place value of the first grid column in final longitude units.
pub(crate) const GRID_LNG_FIRST_PLACE_VALUE: i64 = GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32 - 1);

/// Integer latitude units per degree at full 15-digit precision.
pub(crate) const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * GRID_LAT_SCALE;

/// Integer longitude units per degree at full 15-digit precision.
pub(crate) const FINAL_LNG_PRECISION: i64 = PAIR_PRECISION * GRID_LNG_SCALE;

/// ASCII byte -> digit value, `-1` for bytes outside the alphabet.
const DECODE_TABLE: [i8; 128] = build_decode_table();

const fn build_decode_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < CODE_ALPHABET.len() {
        let symbol = CODE_ALPHABET[i];
        table[symbol as usize] = i as i8;
        table[symbol.to_ascii_lowercase() as usize] = i as i8;
        i += 1;
    }
    table
}

/// Digit value of a code symbol (case-insensitive).
///
/// Returns `None` for the separator, the padding character and anything
/// outside the alphabet.
///
/// # Examples
///
/// ```
/// use olc::alphabet::digit_value;
///
/// assert_eq!(digit_value(b'2'), Some(0));
/// assert_eq!(digit_value(b'x'), Some(19));
/// assert_eq!(digit_value(b'0'), None);
/// ```
pub fn digit_value(symbol: u8) -> Option<u8> {
    match DECODE_TABLE.get(symbol as usize) {
        Some(&value) if value >= 0 => Some(value as u8),
        _ => None,
    }
}

/// Code symbol for a digit value in `0..20`.
pub fn digit_symbol(value: u8) -> char {
    CODE_ALPHABET[value as usize] as char
}
