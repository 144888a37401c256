use serde::{Deserialize, Serialize};

/// Threshold set for the verdict and the per-domain advisories. Questionnaire
/// variants are expressed as different instances of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub verdict: VerdictThresholds,
    #[serde(default)]
    pub advisories: AdvisoryThresholds,
}

/// Cut-offs for the three-level verdict. Comparisons are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerdictThresholds {
    /// Reaction at or above this is high stress on its own.
    pub high_reaction: f64,
    /// Reaction at or above this is high stress when amplified, otherwise caution.
    pub elevated_reaction: f64,
    /// Workload that amplifies an elevated reaction.
    pub amplifying_workload: f64,
    /// Support at or below this amplifies an elevated reaction.
    pub amplifying_support: f64,
    pub caution_workload: f64,
    pub caution_support: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            high_reaction: 60.0,
            elevated_reaction: 50.0,
            amplifying_workload: 60.0,
            amplifying_support: 40.0,
            caution_workload: 55.0,
            caution_support: 45.0,
        }
    }
}

/// Bands for per-domain advisories: `>= high` and `< low`, neutral in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisoryThresholds {
    pub high: f64,
    pub low: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            high: 60.0,
            low: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("threshold {name} = {value} must lie within 0-100")]
    OutOfScale { name: &'static str, value: f64 },
    #[error("threshold {lower_name} ({lower}) must not exceed {upper_name} ({upper})")]
    Inverted {
        lower_name: &'static str,
        lower: f64,
        upper_name: &'static str,
        upper: f64,
    },
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self {
            verdict: VerdictThresholds::default(),
            advisories: AdvisoryThresholds::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let verdict = &self.verdict;
        let named = [
            ("verdict.high_reaction", verdict.high_reaction),
            ("verdict.elevated_reaction", verdict.elevated_reaction),
            ("verdict.amplifying_workload", verdict.amplifying_workload),
            ("verdict.amplifying_support", verdict.amplifying_support),
            ("verdict.caution_workload", verdict.caution_workload),
            ("verdict.caution_support", verdict.caution_support),
            ("advisories.high", self.advisories.high),
            ("advisories.low", self.advisories.low),
        ];
        for (name, value) in named {
            if !(0.0..=100.0).contains(&value) {
                return Err(ScoringConfigError::OutOfScale { name, value });
            }
        }

        let ordered = [
            (
                ("verdict.elevated_reaction", verdict.elevated_reaction),
                ("verdict.high_reaction", verdict.high_reaction),
            ),
            (
                ("verdict.caution_workload", verdict.caution_workload),
                ("verdict.amplifying_workload", verdict.amplifying_workload),
            ),
            (
                ("verdict.amplifying_support", verdict.amplifying_support),
                ("verdict.caution_support", verdict.caution_support),
            ),
            (
                ("advisories.low", self.advisories.low),
                ("advisories.high", self.advisories.high),
            ),
        ];
        for ((lower_name, lower), (upper_name, upper)) in ordered {
            if lower > upper {
                return Err(ScoringConfigError::Inverted {
                    lower_name,
                    lower,
                    upper_name,
                    upper,
                });
            }
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}
