//! Greenwich sidereal time and Earth Rotation Angle.
//!
//! Provides the Greenwich sidereal time needed to turn a UTC instant and an
//! observer longitude into a local sidereal angle for ascendant computation.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given UT Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du)
/// where Du = JD − 2451545.0.
///
/// Returns radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT Julian Date.
///
/// GMST = ERA + polynomial(T), where T = Julian centuries from J2000.0.
///
/// Polynomial (arcseconds):
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
///
/// Returns radians in [0, 2π).
pub fn gmst_rad(jd: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd);
    let t = (jd - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    let gmst = era + poly_arcsec * ARCSEC_TO_RAD;
    gmst.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in hours, range [0, 24).
///
/// This is the shape the sidereal-time provider contract uses: hours,
/// multiplied by 15 downstream to get degrees.
pub fn gmst_hours(jd: f64) -> f64 {
    gmst_rad(jd) * 24.0 / TAU
}

/// Local sidereal angle in degrees from Greenwich sidereal hours and
/// observer east longitude in degrees.
///
/// LST = (GST × 15 + longitude) mod 360. Returns degrees in [0, 360).
pub fn local_sidereal_deg(gst_hours: f64, longitude_east_deg: f64) -> f64 {
    (gst_hours * 15.0 + longitude_east_deg).rem_euclid(360.0)
}
