use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Sub-scale of the questionnaire. Items are grouped into these four domains by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Workload,
    Reaction,
    Support,
    Satisfaction,
}

impl Domain {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Workload,
            Self::Reaction,
            Self::Support,
            Self::Satisfaction,
        ]
    }

    /// Position in `ordered()`.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Workload => 0,
            Self::Reaction => 1,
            Self::Support => 2,
            Self::Satisfaction => 3,
        }
    }

    /// Single-letter key used on the printed report and the radar axes.
    pub const fn key(self) -> char {
        match self {
            Self::Workload => 'A',
            Self::Reaction => 'B',
            Self::Support => 'C',
            Self::Satisfaction => 'D',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Workload => "Workload",
            Self::Reaction => "Stress reaction",
            Self::Support => "Support",
            Self::Satisfaction => "Satisfaction",
        }
    }

    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Workload => "higher means a heavier sense of burden (unfavorable)",
            Self::Reaction => "higher means stronger stress reactions (unfavorable)",
            Self::Support => "higher means more support around you (favorable)",
            Self::Satisfaction => "higher means greater satisfaction (favorable)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Workload => "Load at the workplace: volume, discretion, and role clarity.",
            Self::Reaction => "Fatigue, emotional, and physical reactions.",
            Self::Support => "Support from supervisors, co-workers, family, and friends.",
            Self::Satisfaction => "Satisfaction with your current work and life.",
        }
    }

    /// Reference score printed next to the respondent's own score.
    pub const fn national_average(self) -> f64 {
        match self {
            Self::Workload => 45.0,
            Self::Reaction => 40.0,
            Self::Support => 35.0,
            Self::Satisfaction => 30.0,
        }
    }

    pub const fn higher_is_worse(self) -> bool {
        matches!(self, Self::Workload | Self::Reaction)
    }

    pub const fn answer_scale(self) -> AnswerScale {
        match self {
            Self::Reaction => AnswerScale::Frequency,
            _ => AnswerScale::Agreement,
        }
    }

    /// Item positions the standard 57-item questionnaire assigns to this domain.
    pub const fn standard_range(self) -> Range<usize> {
        match self {
            Self::Workload => 0..17,
            Self::Reaction => 17..46,
            Self::Support => 46..55,
            Self::Satisfaction => 55..57,
        }
    }
}

/// Wording of the five answer options presented for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerScale {
    Agreement,
    Frequency,
}

impl AnswerScale {
    /// Option labels in answer order; position `i` corresponds to raw value `i + 1`.
    pub const fn choices(self) -> [&'static str; 5] {
        match self {
            Self::Agreement => [
                "1: Not at all",
                "2: Not really",
                "3: Neither",
                "4: Somewhat",
                "5: Very much so",
            ],
            Self::Frequency => [
                "1: Almost never",
                "2: Rarely",
                "3: Neither",
                "4: Sometimes",
                "5: Often",
            ],
        }
    }
}

/// Static questionnaire item. `index` is the zero-based presentation position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub index: usize,
    pub domain: Domain,
    pub reversed: bool,
    pub prompt: &'static str,
}

impl Item {
    pub fn answer_scale(&self) -> AnswerScale {
        self.domain.answer_scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_ranges_tile_all_items() {
        let mut next = 0;
        for domain in Domain::ordered() {
            let range = domain.standard_range();
            assert_eq!(range.start, next, "{domain:?} starts where the previous ends");
            assert!(!range.is_empty());
            next = range.end;
        }
        assert_eq!(next, 57);
    }

    #[test]
    fn only_reaction_uses_frequency_scale() {
        for domain in Domain::ordered() {
            let expected = if domain == Domain::Reaction {
                AnswerScale::Frequency
            } else {
                AnswerScale::Agreement
            };
            assert_eq!(domain.answer_scale(), expected);
        }
    }
}
