//! Mandāra composite points.
//!
//! Each point is the longitude sum of a fixed graha pair, reduced to
//! one circle. The pair's combined daśā years select a managing graha,
//! and any natal graha within the trigger orb of the point activates
//! it.

use serde::Serialize;

use mandara_vedic::{
    Graha, angular_separation, format_sign_notation, manager_for_years, normalize_360,
};

use crate::body::{BodyId, ChartBody};
use crate::error::ChartError;
use crate::format::body_from_sidereal;

/// Maximum separation, in degrees, for a natal graha to activate a
/// composite point. Strictly less-than.
pub const TRIGGER_ORB_DEG: f64 = 5.0;

/// The three guṇa-aligned composite points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MandaraKind {
    /// Saturn + Mars.
    Yama,
    /// Mercury + Venus.
    Bhoga,
    /// Sun + Jupiter.
    Dharma,
}

/// All kinds in chart order.
pub const ALL_MANDARA_KINDS: [MandaraKind; 3] =
    [MandaraKind::Yama, MandaraKind::Bhoga, MandaraKind::Dharma];

impl MandaraKind {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Yama => "Mand\u{101}ra (Tamas/Yama)",
            Self::Bhoga => "Mand\u{101}ra (Rajas/Bhoga)",
            Self::Dharma => "Mand\u{101}ra (Sattva/Dharma)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Yama => "Crime & Punishment (Debt)",
            Self::Bhoga => "Worldly Enjoyment (Party)",
            Self::Dharma => "Wisdom & Spiritual Light",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Yama => "\u{2696}\u{fe0f}",
            Self::Bhoga => "\u{1f389}",
            Self::Dharma => "\u{1fa94}",
        }
    }

    /// The graha pair summed to form this point.
    pub const fn pair(self) -> (Graha, Graha) {
        match self {
            Self::Yama => (Graha::Saturn, Graha::Mars),
            Self::Bhoga => (Graha::Mercury, Graha::Venus),
            Self::Dharma => (Graha::Sun, Graha::Jupiter),
        }
    }
}

/// Derivation record attached to a synthesized point.
#[derive(Debug, Clone, Serialize)]
pub struct MandaraDetails {
    pub kind: MandaraKind,
    pub description: &'static str,
    pub icon: &'static str,
    /// Sign-notation arithmetic showing how the point was formed.
    pub trace: String,
    /// Graha whose daśā span equals the pair's combined years, if any.
    pub manager: Option<Graha>,
    /// Natal grahas within [`TRIGGER_ORB_DEG`] of the point, in chart
    /// order.
    pub triggers: Vec<Graha>,
}

fn find_graha(natal: &[ChartBody], graha: Graha) -> Result<&ChartBody, ChartError> {
    natal
        .iter()
        .find(|b| b.id == BodyId::Graha(graha))
        .ok_or(ChartError::MissingGraha(graha))
}

/// Synthesize one composite point from the natal grahas.
pub fn synthesize_point(
    kind: MandaraKind,
    natal: &[ChartBody],
    lagna_deg: f64,
) -> Result<ChartBody, ChartError> {
    let (first, second) = kind.pair();
    let a = find_graha(natal, first)?;
    let b = find_graha(natal, second)?;

    let raw_sum = a.sidereal_deg + b.sidereal_deg;
    let point = normalize_360(raw_sum);

    let mut trace = format!(
        "{} + {} = {}",
        format_sign_notation(a.sidereal_deg),
        format_sign_notation(b.sidereal_deg),
        format_sign_notation(raw_sum),
    );
    if raw_sum >= 360.0 {
        trace.push_str(&format!(
            " (Sub 12s) \u{2192} {}",
            format_sign_notation(point)
        ));
    }

    let years = first.dasha_years() + second.dasha_years();
    let manager = manager_for_years(years);

    let triggers: Vec<Graha> = natal
        .iter()
        .filter(|b| angular_separation(point, b.sidereal_deg) < TRIGGER_ORB_DEG)
        .filter_map(ChartBody::graha)
        .collect();

    let mut body = body_from_sidereal(BodyId::Mandara(kind), point, false, lagna_deg);
    body.mandara = Some(MandaraDetails {
        kind,
        description: kind.description(),
        icon: kind.icon(),
        trace,
        manager,
        triggers,
    });
    Ok(body)
}

/// Synthesize all three points in chart order.
pub fn synthesize_all(natal: &[ChartBody], lagna_deg: f64) -> Result<Vec<ChartBody>, ChartError> {
    ALL_MANDARA_KINDS
        .iter()
        .map(|&kind| synthesize_point(kind, natal, lagna_deg))
        .collect()
}
