//! Time primitives for sidereal chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Gregorian, UTC)
//! - Earth Rotation Angle and Greenwich Mean Sidereal Time
//! - A `UtcTime` calendar type with ISO-8601 parsing
//!
//! All functions are pure math. The birth instants handled here are civil
//! UTC timestamps; no leap-second or UT1 correction is applied, matching
//! the precision class of the linear ayanamsa model layered on top.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_centuries};
pub use sidereal::{earth_rotation_angle_rad, gmst_hours, gmst_rad, local_sidereal_deg};
pub use utc_time::UtcTime;
