//! The 9 grahas (planets) and their dasha-year weights.
//!
//! The dasha-year table is the fixed Vimshottari year count per graha. In
//! this engine it is used only to assign a managing graha to each Mandara
//! composite point: the pair's summed weights are matched back against the
//! table.

use serde::{Deserialize, Serialize};

/// The 9 grahas in traditional chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order (Sun first, nodes last).
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

/// Canonical dasha order, used for manager lookup. This is the traditional
/// Vimshottari sequence and fixes the tie-break: the first graha in this
/// order whose weight matches wins.
pub const DASHA_ORDER: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Rahu,
    Graha::Jupiter,
    Graha::Saturn,
    Graha::Mercury,
    Graha::Ketu,
    Graha::Venus,
];

impl Graha {
    /// Display name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Vimshottari dasha years for this graha.
    pub const fn dasha_years(self) -> u16 {
        match self {
            Self::Sun => 6,
            Self::Moon => 10,
            Self::Mars => 7,
            Self::Rahu => 18,
            Self::Jupiter => 16,
            Self::Saturn => 19,
            Self::Mercury => 17,
            Self::Ketu => 7,
            Self::Venus => 20,
        }
    }
}

/// Find the graha whose dasha-year weight equals `years`.
///
/// Used to assign a managing graha to a composite point from the summed
/// weights of its pair. Returns the first match in [`DASHA_ORDER`]; `None`
/// when no weight matches (rendered as "N/A" downstream).
///
/// Mars and Ketu both weigh 7, so a lookup of 7 resolves to Mars. The
/// mapping is a coincidence of the fixed table, not a bijection.
pub fn manager_for_years(years: u16) -> Option<Graha> {
    DASHA_ORDER.into_iter().find(|g| g.dasha_years() == years)
}
