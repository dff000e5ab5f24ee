//! Julian Date ↔ Gregorian calendar conversion.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! Valid for the Gregorian calendar (all birth dates this engine handles).

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day_frac` is the day of month plus the time-of-day fraction
/// (e.g. 1.5 for the 1st at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let mut y = year;
    let mut m = month as i32;
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac
        + b as f64
        - 1524.5
}

/// Julian centuries since J2000.0 for a given Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_midnight() {
        // 2000-Jan-01 00:00 = JD 2451544.5
        let jd = calendar_to_jd(2000, 1, 1.0);
        assert!((jd - 2_451_544.5).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn meeus_example_1957() {
        // Meeus example 7.a: 1957-Oct-4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd={jd}");
    }

    #[test]
    fn january_february_rollback() {
        // Months 1 and 2 are counted as 13/14 of the previous year.
        let jd_jan = calendar_to_jd(1990, 1, 15.0);
        let jd_feb = calendar_to_jd(1990, 2, 15.0);
        assert!((jd_feb - jd_jan - 31.0).abs() < 1e-9);
    }

    #[test]
    fn day_fraction_advances_jd() {
        let jd0 = calendar_to_jd(2024, 6, 10.0);
        let jd_half = calendar_to_jd(2024, 6, 10.5);
        assert!((jd_half - jd0 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert!(jd_to_centuries(J2000_JD).abs() < 1e-15);
    }

    #[test]
    fn centuries_one_century_later() {
        let t = jd_to_centuries(J2000_JD + 36_525.0);
        assert!((t - 1.0).abs() < 1e-15);
    }
}
