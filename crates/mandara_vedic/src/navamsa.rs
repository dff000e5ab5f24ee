//! Navamsa (D9) placement.
//!
//! Each 30-degree rashi is divided into 9 segments of 3 deg 20'. The
//! segment maps onward to a rashi: the starting rashi of the cycle depends
//! on the element group of the natal rashi (fire/earth/air/water), then the
//! segments count forward through the zodiac.

use crate::rashi::{ALL_RASHIS, Rashi, rashi_index};
use crate::util::normalize_360;

/// Starting navamsa rashi index per element group, indexed by
/// `rashi_index % 4`: fire signs start at Aries (0), earth at Capricorn
/// (9), air at Libra (6), water at Cancer (3).
pub const NAVAMSA_START: [u8; 4] = [0, 9, 6, 3];

/// Span of one navamsa segment: 30/9 = 3 deg 20'.
pub const NAVAMSA_SPAN: f64 = 30.0 / 9.0;

/// Navamsa rashi from a sidereal longitude.
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = rashi_index(lon);
    let deg_in_rashi = lon % 30.0;
    let segment = ((deg_in_rashi / NAVAMSA_SPAN).floor() as u8).min(8);
    let start = NAVAMSA_START[(idx % 4) as usize];
    ALL_RASHIS[((start + segment) % 12) as usize]
}
