//! The four-step marriage-compatibility walk.
//!
//! 1. Venus placement: dusthāna houses (6, 8, 12) weaken Venus, with
//!    retrograde motion in one escalating to critical.
//! 2. Yama point: landing within the trigger orb of Venus is the direct
//!    affliction and prescribes the remedy; other grahas triggering it
//!    mark the debt as active; neither leaves it latent. The step runs
//!    whenever the Yama point exists; Venus only decides the affliction
//!    branch.
//! 3. Bhoga point: any triggers are noted as enjoyment.
//! 4. Severity accumulated along the way selects the verdict.
//!
//! Steps whose bodies are absent from the chart are skipped rather
//! than refused, so partial charts still yield a verdict.

use mandara_chart::{BodyId, ChartBody, MandaraKind, TRIGGER_ORB_DEG};
use mandara_vedic::{Graha, angular_separation};

use crate::report::{
    CompatibilityReport, Conclusion, DiagnosticStep, NILAKANTHA_REMEDY, StepResult, Verdict,
};

const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

fn find(chart: &[ChartBody], id: BodyId) -> Option<&ChartBody> {
    chart.iter().find(|b| b.id == id)
}

fn graha_names(grahas: &[Graha]) -> String {
    grahas
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run the compatibility analysis over a computed chart.
pub fn analyze(chart: &[ChartBody]) -> CompatibilityReport {
    let venus = find(chart, BodyId::Graha(Graha::Venus));
    let yama = find(chart, BodyId::Mandara(MandaraKind::Yama));
    let bhoga = find(chart, BodyId::Mandara(MandaraKind::Bhoga));

    let mut steps = Vec::new();
    let mut severity: u32 = 0;
    let mut remedy = None;

    if let Some(venus) = venus {
        let mut step = DiagnosticStep {
            label: "Placement",
            check: Some(format!("Venus in House {}", venus.house)),
            result: StepResult::Clear,
            impact: "Favorable".into(),
        };
        if DUSTHANA_HOUSES.contains(&venus.house) {
            if venus.retrograde {
                step.result = StepResult::Critical;
                step.impact = "Severe relationship debt (Retro in Dusthana)".into();
                severity += 10;
            } else {
                step.result = StepResult::Weakened;
                step.impact = "Basic marital karma unstable".into();
                severity += 3;
            }
        }
        steps.push(step);
    }

    if let Some(yama) = yama {
        let on_venus = venus.is_some_and(|v| {
            angular_separation(v.sidereal_deg, yama.sidereal_deg) < TRIGGER_ORB_DEG
        });
        let triggers: Vec<Graha> = yama
            .mandara
            .as_ref()
            .map(|d| {
                d.triggers
                    .iter()
                    .copied()
                    .filter(|&g| g != Graha::Venus)
                    .collect()
            })
            .unwrap_or_default();

        if on_venus {
            severity += 15;
            steps.push(DiagnosticStep {
                label: "Mand\u{101}ra Yama",
                check: None,
                result: StepResult::Critical,
                impact: "Yama point on Venus: Severe suffering/Punishment yoga active.".into(),
            });
            remedy = Some(NILAKANTHA_REMEDY);
        } else if !triggers.is_empty() {
            severity += 5;
            steps.push(DiagnosticStep {
                label: "Yama Trigger",
                check: None,
                result: StepResult::Active,
                impact: format!(
                    "Debt point activated by {}. Punishment through these energies.",
                    graha_names(&triggers)
                ),
            });
        } else {
            steps.push(DiagnosticStep {
                label: "Mand\u{101}ra Debt",
                check: None,
                result: StepResult::Latent,
                impact: "No direct activation of Yama point found.".into(),
            });
        }
    }

    if let Some(bhoga) = bhoga {
        if let Some(details) = &bhoga.mandara {
            if !details.triggers.is_empty() {
                steps.push(DiagnosticStep {
                    label: "Bhoga Yoga",
                    check: None,
                    result: StepResult::Enjoyment,
                    impact: format!(
                        "Party point triggered by {}. Happiness indicated here.",
                        graha_names(&details.triggers)
                    ),
                });
            }
        }
    }

    CompatibilityReport {
        steps,
        conclusion: Conclusion {
            verdict: Verdict::from_severity(severity),
            severity,
        },
        remedy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_name_list_joins_with_comma() {
        assert_eq!(graha_names(&[Graha::Rahu, Graha::Moon]), "Rahu, Moon");
        assert_eq!(graha_names(&[]), "");
    }
}
