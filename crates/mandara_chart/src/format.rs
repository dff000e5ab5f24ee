//! Derivation of a [`ChartBody`] from a longitude.

use mandara_vedic::{
    dignity, format_degrees_in_sign, nakshatra_from_longitude, navamsa_rashi, normalize_360,
    rashi_from_longitude,
};

use crate::body::{BodyId, ChartBody};

/// Build a chart entry from a tropical longitude by first subtracting
/// the ayanamsa, then deriving every sidereal attribute.
///
/// Retrograde motion is only meaningful for grahas; the flag is dropped
/// for the lagna and for composite points.
pub fn format_body(
    id: BodyId,
    tropical_deg: f64,
    retrograde: bool,
    ayanamsa_deg: f64,
    lagna_deg: f64,
) -> ChartBody {
    body_from_sidereal(
        id,
        normalize_360(tropical_deg - ayanamsa_deg),
        retrograde,
        lagna_deg,
    )
}

/// Build a chart entry from an already-sidereal longitude.
pub fn body_from_sidereal(
    id: BodyId,
    sidereal_deg: f64,
    retrograde: bool,
    lagna_deg: f64,
) -> ChartBody {
    let rashi = rashi_from_longitude(sidereal_deg);
    let rashi_index = rashi.index();
    let lagna_sign = rashi_from_longitude(lagna_deg).index();
    let house = (rashi_index + 12 - lagna_sign) % 12 + 1;
    let (nakshatra, pada) = nakshatra_from_longitude(sidereal_deg);

    let dignity = match id {
        BodyId::Graha(g) => dignity(g, rashi_index + 1),
        _ => None,
    };

    ChartBody {
        id,
        name: id.name(),
        sidereal_deg,
        rashi,
        rashi_index,
        navamsa_rashi: navamsa_rashi(sidereal_deg),
        house,
        retrograde: matches!(id, BodyId::Graha(_)) && retrograde,
        nakshatra,
        pada,
        deg_str: format_degrees_in_sign(sidereal_deg),
        dignity,
        mandara: None,
    }
}
