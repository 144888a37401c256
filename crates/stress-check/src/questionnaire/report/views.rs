use super::super::domain::{AnswerScale, Domain, Item};
use super::super::scoring::{AdvisoryBand, Verdict};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DomainScoreView {
    pub domain: Domain,
    pub key: char,
    pub label: &'static str,
    pub score: f64,
    pub national_average: f64,
    pub meaning: &'static str,
    pub description: &'static str,
    /// Chart direction: true when a score above the national average is unfavorable.
    pub higher_is_worse: bool,
    pub advisory_band: AdvisoryBand,
    pub advisory: &'static str,
}

impl DomainScoreView {
    /// Reading of the score against the national average, respecting direction.
    pub fn standing(&self) -> &'static str {
        let above = self.score > self.national_average;
        if self.score == self.national_average {
            "at the national average"
        } else if above == self.higher_is_worse {
            "less favorable than average"
        } else {
            "more favorable than average"
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerdictView {
    pub level: Verdict,
    pub label: &'static str,
    pub guidance: &'static str,
}

impl From<Verdict> for VerdictView {
    fn from(level: Verdict) -> Self {
        Self {
            level,
            label: level.label(),
            guidance: level.guidance(),
        }
    }
}

/// Item as presented to a respondent, without any scoring details.
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub number: usize,
    pub domain: Domain,
    pub prompt: &'static str,
    pub scale: AnswerScale,
    pub choices: [&'static str; 5],
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        let scale = item.answer_scale();
        Self {
            number: item.index + 1,
            domain: item.domain,
            prompt: item.prompt,
            scale,
            choices: scale.choices(),
        }
    }
}
