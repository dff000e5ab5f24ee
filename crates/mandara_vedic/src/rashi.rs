//! Rashi (zodiac sign) placement.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg sidereal.

use serde::Serialize;

use crate::util::normalize_360;

/// The 12 rashis, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 rashis in order (0 = Aries, 11 = Pisces).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

impl Rashi {
    /// Display name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }
}

/// 0-based rashi index from a sidereal longitude.
///
/// Normalizes the input, then `floor(lon / 30)`, clamped to 11 for the
/// floating-point edge at exactly 360.0.
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / 30.0).floor() as u8).min(11)
}

/// Rashi from a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    ALL_RASHIS[rashi_index(sidereal_lon_deg) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
    }

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
        }
    }

    #[test]
    fn rashi_boundary_0() {
        assert_eq!(rashi_from_longitude(0.0), Rashi::Aries);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            assert_eq!(rashi_index(lon), i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn rashi_mid_sign() {
        assert_eq!(rashi_from_longitude(45.5), Rashi::Taurus);
    }

    #[test]
    fn rashi_wrap_around() {
        assert_eq!(rashi_from_longitude(365.0), Rashi::Aries);
    }

    #[test]
    fn rashi_negative() {
        // −10 deg normalizes to 350 deg.
        assert_eq!(rashi_from_longitude(-10.0), Rashi::Pisces);
    }

    #[test]
    fn rashi_last_sign() {
        assert_eq!(rashi_from_longitude(350.0), Rashi::Pisces);
    }
}
