use super::super::answers::AnswerValue;
use super::super::catalog::ItemCatalog;
use super::super::domain::Domain;
use serde::{Deserialize, Serialize};

/// Min-max normalization of a domain sum over `n` items on the 1-5 scale,
/// rescaled to 0-100 and rounded to one decimal.
pub fn normalize(sum: u32, n: usize) -> f64 {
    let n = n as f64;
    let min = n;
    let max = 5.0 * n;
    round_one_decimal((f64::from(sum) - min) / (max - min) * 100.0)
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Normalized score for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: f64,
    pub items: usize,
    pub effective_sum: u32,
}

/// The four domain scores, always in `Domain::ordered()` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScores {
    pub workload: DomainScore,
    pub reaction: DomainScore,
    pub support: DomainScore,
    pub satisfaction: DomainScore,
}

impl DomainScores {
    pub fn get(&self, domain: Domain) -> &DomainScore {
        match domain {
            Domain::Workload => &self.workload,
            Domain::Reaction => &self.reaction,
            Domain::Support => &self.support,
            Domain::Satisfaction => &self.satisfaction,
        }
    }

    pub fn score(&self, domain: Domain) -> f64 {
        self.get(domain).score
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainScore> {
        [
            &self.workload,
            &self.reaction,
            &self.support,
            &self.satisfaction,
        ]
        .into_iter()
    }
}

/// Applies the reversal table to complete answers and reduces each domain to a score.
/// Callers guarantee `answers.len() == catalog.len()`.
pub(crate) fn aggregate(catalog: &ItemCatalog, answers: &[AnswerValue]) -> DomainScores {
    let score_domain = |domain: Domain| {
        let range = catalog.domain_range(domain);
        let effective_sum: u32 = catalog.items()[range.clone()]
            .iter()
            .zip(&answers[range.clone()])
            .map(|(item, answer)| u32::from(answer.effective(item.reversed).get()))
            .sum();
        let items = range.len();

        DomainScore {
            domain,
            score: normalize(effective_sum, items),
            items,
            effective_sum,
        }
    };

    DomainScores {
        workload: score_domain(Domain::Workload),
        reaction: score_domain(Domain::Reaction),
        support: score_domain(Domain::Support),
        satisfaction: score_domain(Domain::Satisfaction),
    }
}
