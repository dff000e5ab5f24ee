//! Pure sidereal zodiac math for the Mandara engine.
//!
//! This crate provides:
//! - The 9 grahas with their dasha-year weights
//! - Rashi (sign), nakshatra (lunar mansion) and navamsa placement
//! - The linear Lahiri ayanamsa approximation
//! - Ascendant (lagna) spherical astronomy
//! - Dignity (exaltation/debilitation/own-sign) tables
//!
//! Every function is a deterministic pure function of its inputs; all
//! lookup tables are `const` data.

pub mod ayanamsa;
pub mod dignity;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod navamsa;
pub mod rashi;
pub mod util;

pub use ayanamsa::lahiri_ayanamsa_deg;
pub use dignity::{Dignity, dignity};
pub use graha::{ALL_GRAHAS, DASHA_ORDER, Graha, manager_for_years};
pub use lagna::{obliquity_deg, sidereal_lagna_deg, tropical_lagna_deg};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, PADA_SPAN, nakshatra_from_longitude};
pub use navamsa::{NAVAMSA_START, navamsa_rashi};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude, rashi_index};
pub use util::{angular_separation, format_degrees_in_sign, format_sign_notation, normalize_360};
