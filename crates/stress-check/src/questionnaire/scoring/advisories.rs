use super::super::domain::Domain;
use super::config::AdvisoryThresholds;
use super::rules::DomainScores;
use serde::{Deserialize, Serialize};

/// Position of a score relative to the advisory thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryBand {
    High,
    Middle,
    Low,
}

impl AdvisoryBand {
    pub fn of(score: f64, thresholds: &AdvisoryThresholds) -> Self {
        if score >= thresholds.high {
            Self::High
        } else if score < thresholds.low {
            Self::Low
        } else {
            Self::Middle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub domain: Domain,
    pub band: AdvisoryBand,
    pub message: &'static str,
}

pub fn advisory_for(domain: Domain, score: f64, thresholds: &AdvisoryThresholds) -> Advisory {
    let band = AdvisoryBand::of(score, thresholds);
    Advisory {
        domain,
        band,
        message: message(domain, band),
    }
}

/// One advisory per domain, in `Domain::ordered()` order.
pub(crate) fn advise_all(scores: &DomainScores, thresholds: &AdvisoryThresholds) -> [Advisory; 4] {
    Domain::ordered().map(|domain| advisory_for(domain, scores.score(domain), thresholds))
}

const fn message(domain: Domain, band: AdvisoryBand) -> &'static str {
    match (domain, band) {
        (Domain::Workload, AdvisoryBand::High) => {
            "Your sense of workload is heavy. Consider reviewing priorities or reducing the amount of work."
        }
        (Domain::Workload, AdvisoryBand::Middle) => {
            "Your workload is about average. Keep an eye on how it changes."
        }
        (Domain::Workload, AdvisoryBand::Low) => {
            "Your workload feels manageable."
        }
        (Domain::Reaction, AdvisoryBand::High) => {
            "Strong stress reactions are showing. Make time to rest, and consider talking to a professional."
        }
        (Domain::Reaction, AdvisoryBand::Middle) => {
            "Some fatigue is showing. Try to get enough sleep and take breaks."
        }
        (Domain::Reaction, AdvisoryBand::Low) => {
            "Your stress reactions are mild. You appear to be in good condition."
        }
        (Domain::Support, AdvisoryBand::High) => {
            "You have good support from the people around you."
        }
        (Domain::Support, AdvisoryBand::Middle) => {
            "You have some support. Keep those relationships going."
        }
        (Domain::Support, AdvisoryBand::Low) => {
            "Support may be lacking. Consider reaching out to a supervisor, co-worker, or someone close to you."
        }
        (Domain::Satisfaction, AdvisoryBand::High) => {
            "You are satisfied with your work and life."
        }
        (Domain::Satisfaction, AdvisoryBand::Middle) => {
            "Your satisfaction is about average."
        }
        (Domain::Satisfaction, AdvisoryBand::Low) => {
            "Satisfaction may be lacking. Consider talking with someone about what could change."
        }
    }
}
