//! Sidereal chart assembly.
//!
//! Takes tropical longitudes from a pluggable position source, converts
//! them to the sidereal zodiac, derives per-body attributes (sign,
//! navāṁśa, whole-sign house, nakshatra, dignity) and synthesizes the
//! three Mandāra composite points.

pub mod body;
pub mod chart;
pub mod error;
pub mod format;
pub mod mandara;
pub mod providers;

pub use body::{BodyId, ChartBody};
pub use chart::compute_chart;
pub use error::ChartError;
pub use format::{body_from_sidereal, format_body};
pub use mandara::{
    ALL_MANDARA_KINDS, MandaraDetails, MandaraKind, TRIGGER_ORB_DEG, synthesize_all,
    synthesize_point,
};
pub use providers::{
    FixedPositions, IauSiderealTime, PositionSource, SiderealTimeSource, TropicalPosition,
};
