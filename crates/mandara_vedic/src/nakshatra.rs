//! Nakshatra (lunar mansion) placement.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! each, every nakshatra into 4 padas of 3 deg 20' — 108 subdivisions in
//! total.

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 360/108 = 3.3333... degrees.
pub const PADA_SPAN: f64 = 360.0 / 108.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Moola,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Moola,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Display name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Moola => "Moola",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Nakshatra and pada (1-4) from a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> (Nakshatra, u8) {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let pada = (((lon % NAKSHATRA_SPAN) / PADA_SPAN).floor() as u8).min(3) + 1;
    (ALL_NAKSHATRAS[idx as usize], pada)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatra_names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn span_times_27_is_circle() {
        assert!((NAKSHATRA_SPAN * 27.0 - 360.0).abs() < 1e-12);
        assert!((PADA_SPAN * 4.0 - NAKSHATRA_SPAN).abs() < 1e-12);
    }

    #[test]
    fn first_nakshatra_first_pada() {
        let (n, p) = nakshatra_from_longitude(0.0);
        assert_eq!(n, Nakshatra::Ashwini);
        assert_eq!(p, 1);
    }

    #[test]
    fn pushya_at_100_deg() {
        // floor(100 / 13.333) = 7 → Pushya, second pada
        let (n, p) = nakshatra_from_longitude(100.0);
        assert_eq!(n, Nakshatra::Pushya);
        assert_eq!(p, 2);
    }

    #[test]
    fn moola_at_sagittarius_start() {
        let (n, p) = nakshatra_from_longitude(241.6667);
        assert_eq!(n, Nakshatra::Moola);
        assert_eq!(p, 1);
    }

    #[test]
    fn last_nakshatra_last_pada() {
        let (n, p) = nakshatra_from_longitude(359.9);
        assert_eq!(n, Nakshatra::Revati);
        assert_eq!(p, 4);
    }

    #[test]
    fn pada_in_range_across_circle() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let (_, p) = nakshatra_from_longitude(lon);
            assert!((1..=4).contains(&p), "pada {p} at {lon}");
            lon += 0.37;
        }
    }
}
