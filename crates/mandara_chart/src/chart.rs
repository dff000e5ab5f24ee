//! Whole-chart assembly.

use mandara_time::UtcTime;
use mandara_vedic::{ALL_GRAHAS, lahiri_ayanamsa_deg, sidereal_lagna_deg};

use crate::body::{BodyId, ChartBody};
use crate::error::ChartError;
use crate::format::{body_from_sidereal, format_body};
use crate::mandara::synthesize_all;
use crate::providers::{PositionSource, SiderealTimeSource};

/// Compute the full sidereal chart for a moment and place.
///
/// The result always holds thirteen bodies in a fixed order: the lagna,
/// the nine grahas in chart order, then the three Mandāra points. Every
/// graha must appear in the position source's output or the chart is
/// refused.
pub fn compute_chart(
    time: &UtcTime,
    latitude_deg: f64,
    longitude_deg: f64,
    positions: &impl PositionSource,
    sidereal: &impl SiderealTimeSource,
) -> Result<Vec<ChartBody>, ChartError> {
    let ayanamsa = lahiri_ayanamsa_deg(time.year);
    let jd = time.to_jd_utc();
    let gast = sidereal.gast_hours(jd);
    let lagna_deg = sidereal_lagna_deg(gast, jd, latitude_deg, longitude_deg, ayanamsa);

    let supplied = positions.positions(time)?;

    let mut bodies = Vec::with_capacity(13);
    bodies.push(body_from_sidereal(BodyId::Lagna, lagna_deg, false, lagna_deg));

    for graha in ALL_GRAHAS {
        let pos = supplied
            .iter()
            .find(|p| p.graha == graha)
            .ok_or(ChartError::MissingGraha(graha))?;
        bodies.push(format_body(
            BodyId::Graha(graha),
            pos.longitude_deg,
            pos.retrograde,
            ayanamsa,
            lagna_deg,
        ));
    }

    let points = synthesize_all(&bodies[1..], lagna_deg)?;
    bodies.extend(points);
    Ok(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FixedPositions, IauSiderealTime, TropicalPosition};
    use mandara_vedic::Graha;

    fn fixture_positions() -> FixedPositions {
        let raw = [
            (Graha::Sun, 280.0),
            (Graha::Moon, 217.3),
            (Graha::Mercury, 271.9),
            (Graha::Venus, 240.8),
            (Graha::Mars, 327.6),
            (Graha::Jupiter, 25.2),
            (Graha::Saturn, 40.4),
            (Graha::Rahu, 125.0),
            (Graha::Ketu, 305.0),
        ];
        FixedPositions(
            raw.iter()
                .map(|&(graha, longitude_deg)| TropicalPosition {
                    graha,
                    longitude_deg,
                    retrograde: false,
                })
                .collect(),
        )
    }

    #[test]
    fn fixture_chart_shape() {
        let time = UtcTime::new(2000, 1, 1, 0, 0, 0.0);
        let chart = compute_chart(
            &time,
            28.6139,
            77.2090,
            &fixture_positions(),
            &IauSiderealTime,
        )
        .unwrap();
        assert_eq!(chart.len(), 13);
        assert!(chart[0].id.is_ascendant());
        assert_eq!(chart[1].id, BodyId::Graha(Graha::Sun));
        assert!(chart[10].id.is_mandara());
        assert!(chart.iter().all(|b| b.sidereal_deg.is_finite()));
    }

    #[test]
    fn missing_graha_is_refused() {
        let mut src = fixture_positions();
        src.0.retain(|p| p.graha != Graha::Ketu);
        let time = UtcTime::new(2000, 1, 1, 0, 0, 0.0);
        let err = compute_chart(&time, 28.6139, 77.2090, &src, &IauSiderealTime).unwrap_err();
        assert_eq!(err, ChartError::MissingGraha(Graha::Ketu));
    }

    #[test]
    fn duplicate_positions_use_first_entry() {
        let mut src = fixture_positions();
        src.0.push(TropicalPosition {
            graha: Graha::Sun,
            longitude_deg: 0.0,
            retrograde: false,
        });
        let time = UtcTime::new(2000, 1, 1, 0, 0, 0.0);
        let chart =
            compute_chart(&time, 28.6139, 77.2090, &src, &IauSiderealTime).unwrap();
        let sun = &chart[1];
        assert!((sun.sidereal_deg - (280.0 - 23.85)).abs() < 1e-9);
    }
}
