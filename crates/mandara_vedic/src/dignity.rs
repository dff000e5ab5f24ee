//! Dignity (exaltation / debilitation / own-sign) tables.
//!
//! Fixed classical assignments per graha, keyed by 1-based sign number
//! (Aries = 1). Rahu and Ketu carry no dignity in this scheme.
//! Precedence when classifying: exaltation, then debilitation, then
//! own-sign.

use serde::Serialize;

use crate::graha::Graha;

/// A graha's strength classification by occupied sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
}

impl Dignity {
    /// Display tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::OwnSign => "Own Sign",
        }
    }
}

/// Exaltation sign (1-based) per graha, None for the nodes.
const fn exaltation_sign(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Sun => Some(1),
        Graha::Moon => Some(2),
        Graha::Mars => Some(10),
        Graha::Mercury => Some(6),
        Graha::Jupiter => Some(4),
        Graha::Venus => Some(12),
        Graha::Saturn => Some(7),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation sign (1-based) per graha, None for the nodes.
const fn debilitation_sign(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Sun => Some(7),
        Graha::Moon => Some(8),
        Graha::Mars => Some(4),
        Graha::Mercury => Some(12),
        Graha::Jupiter => Some(10),
        Graha::Venus => Some(6),
        Graha::Saturn => Some(1),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Whether the graha owns the given 1-based sign.
const fn owns_sign(graha: Graha, sign_num: u8) -> bool {
    match graha {
        Graha::Sun => sign_num == 5,
        Graha::Moon => sign_num == 4,
        Graha::Mars => sign_num == 1 || sign_num == 8,
        Graha::Mercury => sign_num == 3 || sign_num == 6,
        Graha::Jupiter => sign_num == 9 || sign_num == 12,
        Graha::Venus => sign_num == 2 || sign_num == 7,
        Graha::Saturn => sign_num == 10 || sign_num == 11,
        Graha::Rahu | Graha::Ketu => false,
    }
}

/// Classify a graha's dignity in a 1-based sign number.
///
/// Exaltation wins over debilitation wins over own-sign; `None` when the
/// sign carries no special status for this graha.
pub fn dignity(graha: Graha, sign_num: u8) -> Option<Dignity> {
    if exaltation_sign(graha) == Some(sign_num) {
        Some(Dignity::Exalted)
    } else if debilitation_sign(graha) == Some(sign_num) {
        Some(Dignity::Debilitated)
    } else if owns_sign(graha, sign_num) {
        Some(Dignity::OwnSign)
    } else {
        None
    }
}
