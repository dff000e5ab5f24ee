//! Report types produced by the compatibility analysis.

use serde::Serialize;

/// Outcome of one diagnostic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepResult {
    Clear,
    Weakened,
    Critical,
    Active,
    Latent,
    Enjoyment,
}

impl StepResult {
    /// Display tag, matching the traditional report wording.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Weakened => "Weakened",
            Self::Critical => "CRITICAL",
            Self::Active => "Active",
            Self::Latent => "Latent",
            Self::Enjoyment => "Enjoyment",
        }
    }
}

/// Overall verdict, selected from accumulated severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Favorable,
    Challenged,
    KarmicDebt,
}

impl Verdict {
    /// Severity thresholds: 15 and above is karmic debt, 7 and above is
    /// challenged.
    pub const fn from_severity(severity: u32) -> Self {
        if severity >= 15 {
            Self::KarmicDebt
        } else if severity >= 7 {
            Self::Challenged
        } else {
            Self::Favorable
        }
    }

    pub const fn status(self) -> &'static str {
        match self {
            Self::Favorable => "Favorable",
            Self::Challenged => "Challenged",
            Self::KarmicDebt => "Karmic Debt",
        }
    }

    /// Report accent color, as a CSS hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Favorable => "#16a34a",
            Self::Challenged => "#d97706",
            Self::KarmicDebt => "#dc2626",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Favorable => {
                "No major Mand\u{101}ra afflictions. Natural flow of Viv\u{101}ha Sukha (Marital Joy)."
            }
            Self::Challenged => {
                "Obstructions in marital happiness; Venus requires strengthening or remedy."
            }
            Self::KarmicDebt => {
                "Severe 'Crime and Punishment' yoga detected. Venus is enduring high pressure."
            }
        }
    }
}

/// One line of the diagnostic walk-through.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticStep {
    pub label: &'static str,
    /// What was examined, when the step inspects a concrete placement.
    pub check: Option<String>,
    pub result: StepResult,
    pub impact: String,
}

/// Final verdict with the severity score that produced it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Conclusion {
    pub verdict: Verdict,
    pub severity: u32,
}

/// A prescribed remedial practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remedy {
    pub title: &'static str,
    pub mantra: &'static str,
    pub action: &'static str,
}

/// Prescribed when the Yama point falls directly on Venus.
pub const NILAKANTHA_REMEDY: Remedy = Remedy {
    title: "N\u{12b}laka\u{1e47}\u{1e6d}ha Remedy",
    mantra: "O\u{1e43} Namah \u{15a}iv\u{101}ya Namo N\u{12b}laka\u{1e47}\u{1e6d}h\u{101}ya",
    action: "The 'poison' of Saturn+Mars is affecting your Venus. Offer one Mand\u{101}ra flower to Shiva to neutralize the suffering.",
};

/// Complete analysis output.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    pub steps: Vec<DiagnosticStep>,
    pub conclusion: Conclusion,
    pub remedy: Option<Remedy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_severity(0), Verdict::Favorable);
        assert_eq!(Verdict::from_severity(6), Verdict::Favorable);
        assert_eq!(Verdict::from_severity(7), Verdict::Challenged);
        assert_eq!(Verdict::from_severity(14), Verdict::Challenged);
        assert_eq!(Verdict::from_severity(15), Verdict::KarmicDebt);
        assert_eq!(Verdict::from_severity(28), Verdict::KarmicDebt);
    }

    #[test]
    fn verdict_colors() {
        assert_eq!(Verdict::Favorable.color(), "#16a34a");
        assert_eq!(Verdict::Challenged.color(), "#d97706");
        assert_eq!(Verdict::KarmicDebt.color(), "#dc2626");
    }

    #[test]
    fn critical_label_is_upper_case() {
        assert_eq!(StepResult::Critical.label(), "CRITICAL");
        assert_eq!(StepResult::Clear.label(), "Clear");
    }
}
