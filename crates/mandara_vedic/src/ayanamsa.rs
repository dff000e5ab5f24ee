//! Lahiri ayanamsa, linear approximation.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed
//! stars). This engine uses a linear fit to the Lahiri (Chitrapaksha)
//! precession drift, anchored at 23.85 deg for the year 2000 with a rate of
//! 0.01396 deg/year — adequate at the arc-minute level for birth charts of
//! the surrounding centuries.

/// Lahiri ayanamsa in degrees for a calendar year (as seen in UTC).
///
/// `offset = 23.85 + 0.01396 × (year − 2000)`
pub fn lahiri_ayanamsa_deg(year: i32) -> f64 {
    23.85 + 0.01396 * (year - 2000) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_year_2000_is_exact() {
        assert_eq!(lahiri_ayanamsa_deg(2000), 23.85);
    }

    #[test]
    fn year_2100_golden() {
        assert!((lahiri_ayanamsa_deg(2100) - 25.246).abs() < 1e-12);
    }

    #[test]
    fn year_1990() {
        assert!((lahiri_ayanamsa_deg(1990) - 23.7104).abs() < 1e-12);
    }

    #[test]
    fn rate_is_precession_scale() {
        // ~1.396 deg per century, the general precession rate.
        let per_century = lahiri_ayanamsa_deg(2100) - lahiri_ayanamsa_deg(2000);
        assert!((per_century - 1.396).abs() < 1e-9);
    }

    #[test]
    fn monotonically_increasing() {
        for y in 1900..2100 {
            assert!(lahiri_ayanamsa_deg(y + 1) > lahiri_ayanamsa_deg(y));
        }
    }
}
