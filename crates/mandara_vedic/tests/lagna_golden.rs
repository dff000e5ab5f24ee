//! Golden ascendant values chained through the full time + angle stack.

use mandara_time::{UtcTime, gmst_hours};
use mandara_vedic::{
    lahiri_ayanamsa_deg, obliquity_deg, sidereal_lagna_deg, tropical_lagna_deg,
};

const DELHI_LAT: f64 = 28.6139;
const DELHI_LON: f64 = 77.2090;

const MUMBAI_LAT: f64 = 19.0760;
const MUMBAI_LON: f64 = 72.8777;

#[test]
fn delhi_j2000_tropical_ascendant() {
    let jd = UtcTime::new(2000, 1, 1, 0, 0, 0.0).to_jd_utc();
    assert_eq!(jd, 2451544.5);

    let gast = gmst_hours(jd);
    let lst = (gast * 15.0 + DELHI_LON).rem_euclid(360.0);
    assert!((lst - 177.17679872239015).abs() < 1e-9);

    let eps = obliquity_deg(jd);
    assert!((eps - 23.43929127801734).abs() < 1e-12);

    let asc = tropical_lagna_deg(lst, eps, DELHI_LAT);
    assert!((asc - 255.2912228506914).abs() < 1e-9);
}

#[test]
fn delhi_j2000_sidereal_ascendant() {
    let jd = UtcTime::new(2000, 1, 1, 0, 0, 0.0).to_jd_utc();
    let aya = lahiri_ayanamsa_deg(2000);
    assert_eq!(aya, 23.85);

    let asc = sidereal_lagna_deg(gmst_hours(jd), jd, DELHI_LAT, DELHI_LON, aya);
    assert!((asc - 231.44122285069142).abs() < 1e-9);

    // Scorpio (sign index 7).
    assert_eq!((asc / 30.0).floor() as usize, 7);
}

#[test]
fn mumbai_1990_sidereal_ascendant() {
    let t = UtcTime::parse("1990-05-15T17:30:00Z").unwrap();
    let jd = t.to_jd_utc();
    assert!((jd - 2448027.2291666665).abs() < 1e-9);

    let aya = lahiri_ayanamsa_deg(1990);
    assert!((aya - 23.7104).abs() < 1e-12);

    let asc = sidereal_lagna_deg(gmst_hours(jd), jd, MUMBAI_LAT, MUMBAI_LON, aya);
    assert!((asc - 265.20663868527237).abs() < 1e-8);
}
