//! Chart body identity and the fully derived per-body record.

use serde::Serialize;

use mandara_vedic::{Dignity, Graha, Nakshatra, Rashi};

use crate::mandara::{MandaraDetails, MandaraKind};

/// Identity of a chart entry. Bodies are matched by this id, never by
/// display-name inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyId {
    /// The ascendant.
    Lagna,
    /// A natal graha.
    Graha(Graha),
    /// A synthesized Mandāra composite point.
    Mandara(MandaraKind),
}

impl BodyId {
    /// Display name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lagna => "Lagna",
            Self::Graha(g) => g.name(),
            Self::Mandara(k) => k.display_name(),
        }
    }

    pub const fn is_ascendant(self) -> bool {
        matches!(self, Self::Lagna)
    }

    pub const fn is_mandara(self) -> bool {
        matches!(self, Self::Mandara(_))
    }
}

/// One fully derived chart entry: a sidereal longitude plus every
/// attribute the analysis and display layers read from it.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBody {
    pub id: BodyId,
    pub name: &'static str,
    /// Sidereal ecliptic longitude in `[0, 360)`.
    pub sidereal_deg: f64,
    pub rashi: Rashi,
    /// 0-based sign index, `floor(sidereal_deg / 30)`.
    pub rashi_index: u8,
    pub navamsa_rashi: Rashi,
    /// Whole-sign house counted from the lagna sign, 1 through 12.
    pub house: u8,
    pub retrograde: bool,
    pub nakshatra: Nakshatra,
    /// Quarter of the nakshatra, 1 through 4.
    pub pada: u8,
    /// Degrees and minutes within the sign, e.g. `"6° 57'"`.
    pub deg_str: String,
    pub dignity: Option<Dignity>,
    /// Present only on Mandāra composite points.
    pub mandara: Option<MandaraDetails>,
}

impl ChartBody {
    /// The natal graha behind this entry, if it is one.
    pub const fn graha(&self) -> Option<Graha> {
        match self.id {
            BodyId::Graha(g) => Some(g),
            _ => None,
        }
    }
}
