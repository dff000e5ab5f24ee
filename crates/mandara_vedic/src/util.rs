//! Small angle and display helpers shared across the crate.

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest angular separation between two longitudes, in `[0, 180]`.
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).abs() % 360.0;
    d.min(360.0 - d)
}

/// Render a longitude as whole signs plus degrees and minutes within the
/// sign, e.g. `"9s 26°7'"`. Values at or above 360 keep their raw sign
/// count so intermediate sums stay legible.
pub fn format_sign_notation(deg: f64) -> String {
    let signs = (deg / 30.0).floor() as i64;
    let in_sign = deg % 30.0;
    let d = in_sign.floor() as i64;
    let m = ((in_sign % 1.0) * 60.0).floor() as i64;
    format!("{signs}s {d}\u{b0}{m}'")
}

/// Render the degrees-and-minutes part within a sign, e.g. `"6° 57'"`.
pub fn format_degrees_in_sign(deg: f64) -> String {
    let in_sign = deg % 30.0;
    let d = in_sign.floor() as i64;
    let m = ((in_sign % 1.0) * 60.0).floor() as i64;
    format!("{d}\u{b0} {m}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_in_range_is_identity() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(359.9), 359.9);
    }

    #[test]
    fn normalize_wraps_high_and_low() {
        assert!((normalize_360(360.0)).abs() < 1e-12);
        assert!((normalize_360(725.5) - 5.5).abs() < 1e-9);
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-9);
        assert!((normalize_360(-0.25) - 359.75).abs() < 1e-9);
    }

    #[test]
    fn separation_is_symmetric() {
        assert_eq!(
            angular_separation(10.0, 350.0),
            angular_separation(350.0, 10.0)
        );
    }

    #[test]
    fn separation_takes_short_arc() {
        assert!((angular_separation(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((angular_separation(45.0, 45.0)).abs() < 1e-12);
    }

    #[test]
    fn separation_never_exceeds_half_circle() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let d = angular_separation(lon, 123.456);
            assert!((0.0..=180.0).contains(&d));
            lon += 7.3;
        }
    }

    #[test]
    fn sign_notation_basic() {
        assert_eq!(format_sign_notation(296.1234), "9s 26\u{b0}7'");
        assert_eq!(format_sign_notation(163.5), "5s 13\u{b0}30'");
        assert_eq!(format_sign_notation(0.0), "0s 0\u{b0}0'");
    }

    #[test]
    fn sign_notation_keeps_overflow_signs() {
        assert_eq!(format_sign_notation(459.6234), "15s 9\u{b0}37'");
        assert_eq!(format_sign_notation(99.6234), "3s 9\u{b0}37'");
    }

    #[test]
    fn degrees_in_sign_truncates_minutes() {
        assert_eq!(format_degrees_in_sign(216.95000000000002), "6\u{b0} 57'");
        assert_eq!(format_degrees_in_sign(0.0), "0\u{b0} 0'");
        assert_eq!(format_degrees_in_sign(29.999), "29\u{b0} 59'");
    }
}
