//! Lagna (Ascendant) computation.
//!
//! Standard spherical astronomy for the ecliptic longitude of the rising
//! point: local sidereal angle + obliquity + geographic latitude in, one
//! `atan2` out.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use mandara_time::{jd_to_centuries, local_sidereal_deg};

use crate::util::normalize_360;

/// Mean obliquity of the ecliptic in degrees at a given JD.
///
/// Linear term of the IAU series: `eps = 23.4392911 − 46.8150 × T / 3600`
/// with T in Julian centuries from J2000.0.
pub fn obliquity_deg(jd_utc: f64) -> f64 {
    let t = jd_to_centuries(jd_utc);
    23.4392911 - 46.8150 * t / 3600.0
}

/// Tropical ascendant in degrees, range [0, 360).
///
/// `Asc = atan2(cos LST, −(sin LST · cos eps + tan phi · sin eps))`
pub fn tropical_lagna_deg(lst_deg: f64, eps_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = eps_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let y = lst.cos();
    let x = -(lst.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(f64::atan2(y, x).to_degrees())
}

/// Sidereal ascendant in degrees, range [0, 360).
///
/// Chains the full derivation: Greenwich sidereal hours → local sidereal
/// angle → tropical ascendant → minus ayanamsa.
pub fn sidereal_lagna_deg(
    gast_hours: f64,
    jd_utc: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    ayanamsa_deg: f64,
) -> f64 {
    let lst_deg = local_sidereal_deg(gast_hours, longitude_deg);
    let eps_deg = obliquity_deg(jd_utc);
    let tropical = tropical_lagna_deg(lst_deg, eps_deg, latitude_deg);
    normalize_360(tropical - ayanamsa_deg)
}
