//! Marriage-compatibility diagnostics.
//!
//! Walks a computed sidereal chart through the Mandāra affliction
//! rules and produces a step-by-step report with an overall verdict
//! and, when warranted, a remedy.

pub mod analyze;
pub mod report;

pub use analyze::analyze;
pub use report::{
    CompatibilityReport, Conclusion, DiagnosticStep, NILAKANTHA_REMEDY, Remedy, StepResult,
    Verdict,
};
