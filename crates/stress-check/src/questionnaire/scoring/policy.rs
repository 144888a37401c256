use super::config::VerdictThresholds;
use super::rules::DomainScores;
use serde::{Deserialize, Serialize};

/// Overall stress classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Stable,
    Caution,
    HighStress,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Caution => "Caution",
            Self::HighStress => "High stress",
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Stable => "Generally stable. Try to maintain your current condition.",
            Self::Caution => {
                "Caution: stress reactions or workplace factors are somewhat elevated."
            }
            Self::HighStress => {
                "High stress. Consulting a physician or other professional is recommended."
            }
        }
    }
}

/// Ordered rules, first match wins. Satisfaction does not participate.
pub(crate) fn decide_verdict(scores: &DomainScores, thresholds: &VerdictThresholds) -> Verdict {
    classify(
        scores.workload.score,
        scores.reaction.score,
        scores.support.score,
        thresholds,
    )
}

pub fn classify(
    workload: f64,
    reaction: f64,
    support: f64,
    thresholds: &VerdictThresholds,
) -> Verdict {
    let amplified =
        workload >= thresholds.amplifying_workload || support <= thresholds.amplifying_support;

    if reaction >= thresholds.high_reaction
        || (reaction >= thresholds.elevated_reaction && amplified)
    {
        return Verdict::HighStress;
    }

    if reaction >= thresholds.elevated_reaction
        || workload >= thresholds.caution_workload
        || support <= thresholds.caution_support
    {
        return Verdict::Caution;
    }

    Verdict::Stable
}
