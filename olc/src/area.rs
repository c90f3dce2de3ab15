//! Decoded code areas.

use std::fmt;

use crate::alphabet::{LATITUDE_MAX, LONGITUDE_MAX};

/// The rectangle of ground named by a full code.
///
/// The center is computed once at construction and clamped so it never
/// exceeds +90° latitude or +180° longitude. Instances are immutable.
///
/// # Example
///
/// ```
/// use olc::decode;
///
/// let area = decode("8FVC2222+22")?;
/// assert_eq!(area.code_length(), 10);
/// assert!(area.contains(47.00006, 8.00006));
/// # Ok::<(), olc::OlcError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeArea {
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
    code_length: usize,
}

impl CodeArea {
    /// Create an area from its south-west and north-east corners.
    pub fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        let latitude_center = (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX);
        let longitude_center =
            (longitude_lo + (longitude_hi - longitude_lo) / 2.0).min(LONGITUDE_MAX);

        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            latitude_center,
            longitude_center,
            code_length,
        }
    }

    /// Latitude of the southern edge.
    pub fn latitude_lo(&self) -> f64 {
        self.latitude_lo
    }

    /// Longitude of the western edge.
    pub fn longitude_lo(&self) -> f64 {
        self.longitude_lo
    }

    /// Latitude of the northern edge.
    pub fn latitude_hi(&self) -> f64 {
        self.latitude_hi
    }

    /// Longitude of the eastern edge.
    pub fn longitude_hi(&self) -> f64 {
        self.longitude_hi
    }

    /// Latitude of the center, at most 90°.
    pub fn latitude_center(&self) -> f64 {
        self.latitude_center
    }

    /// Longitude of the center, at most 180°.
    pub fn longitude_center(&self) -> f64 {
        self.longitude_center
    }

    /// Center as a `(latitude, longitude)` pair.
    pub fn center(&self) -> (f64, f64) {
        (self.latitude_center, self.longitude_center)
    }

    /// Number of significant digits in the decoded code (at most 15).
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Height in degrees.
    pub fn latitude_height(&self) -> f64 {
        self.latitude_hi - self.latitude_lo
    }

    /// Width in degrees.
    pub fn longitude_width(&self) -> f64 {
        self.longitude_hi - self.longitude_lo
    }

    /// Check whether a point lies inside the area.
    ///
    /// The south and west edges are inclusive, the north and east edges
    /// exclusive, matching how neighbouring codes tile the globe.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.latitude_lo..self.latitude_hi).contains(&latitude)
            && (self.longitude_lo..self.longitude_hi).contains(&longitude)
    }
}

impl fmt::Display for CodeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] - [{}, {}] (center {}, {}; {} digits)",
            self.latitude_lo,
            self.longitude_lo,
            self.latitude_hi,
            self.longitude_hi,
            self.latitude_center,
            self.longitude_center,
            self.code_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_midpoint() {
        let area = CodeArea::new(20.35, 2.75, 20.4, 2.8, 6);
        assert!((area.latitude_center() - 20.375).abs() < 1e-12);
        assert!((area.longitude_center() - 2.775).abs() < 1e-12);
        assert_eq!(area.code_length(), 6);
    }

    #[test]
    fn test_center_is_clamped() {
        // An area reaching past the pole still reports a legal center
        let area = CodeArea::new(80.0, 170.0, 120.0, 210.0, 2);
        assert_eq!(area.latitude_center(), LATITUDE_MAX);
        assert_eq!(area.longitude_center(), LONGITUDE_MAX);
    }

    #[test]
    fn test_dimensions() {
        let area = CodeArea::new(89.0, 1.0, 90.0, 2.0, 4);
        assert_eq!(area.latitude_height(), 1.0);
        assert_eq!(area.longitude_width(), 1.0);
        assert_eq!(area.center(), (89.5, 1.5));
    }

    #[test]
    fn test_contains_edges() {
        let area = CodeArea::new(47.0, 8.0, 48.0, 9.0, 4);
        assert!(area.contains(47.0, 8.0));
        assert!(area.contains(47.5, 8.5));
        assert!(!area.contains(48.0, 8.5));
        assert!(!area.contains(47.5, 9.0));
        assert!(!area.contains(46.99, 8.5));
    }

    #[test]
    fn test_display() {
        let area = CodeArea::new(89.0, 1.0, 90.0, 2.0, 4);
        let text = area.to_string();
        assert!(text.contains("89.5"));
        assert!(text.contains("4 digits"));
    }
}
