//! Input seams: where tropical positions and sidereal time come from.

use serde::{Deserialize, Serialize};

use mandara_time::{UtcTime, gmst_hours};
use mandara_vedic::Graha;

use crate::error::ChartError;

/// Source of Greenwich sidereal time, in hours, for a UTC Julian date.
pub trait SiderealTimeSource {
    fn gast_hours(&self, jd_utc: f64) -> f64;
}

/// IAU mean sidereal time. Ignores the equation of the equinoxes; the
/// few-arcsecond difference from apparent sidereal time is well under
/// the trigger orb.
#[derive(Debug, Clone, Copy, Default)]
pub struct IauSiderealTime;

impl SiderealTimeSource for IauSiderealTime {
    fn gast_hours(&self, jd_utc: f64) -> f64 {
        gmst_hours(jd_utc)
    }
}

/// One tropical longitude as delivered by a position source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TropicalPosition {
    pub graha: Graha,
    /// Tropical ecliptic longitude in degrees.
    pub longitude_deg: f64,
    #[serde(default)]
    pub retrograde: bool,
}

/// Source of tropical graha longitudes for a moment in time.
pub trait PositionSource {
    fn positions(&self, time: &UtcTime) -> Result<Vec<TropicalPosition>, ChartError>;
}

/// A fixed set of positions, independent of the requested time. Used
/// for file-fed charts and in tests.
#[derive(Debug, Clone)]
pub struct FixedPositions(pub Vec<TropicalPosition>);

impl PositionSource for FixedPositions {
    fn positions(&self, _time: &UtcTime) -> Result<Vec<TropicalPosition>, ChartError> {
        Ok(self.0.clone())
    }
}
