use super::super::domain::Domain;
use super::super::scoring::StressAssessment;
use super::views::{DomainScoreView, VerdictView};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::io::{self, Write};

pub const REPORT_TITLE: &str = "Workplace Stress Self-Check";

pub const PRIVACY_NOTE: &str =
    "Answers are processed in memory only. Nothing is saved or sent anywhere.";

pub const NOTICE: [&str; 4] = [
    "This self-check is based on the 57-item Brief Job Stress Questionnaire.",
    "Results are a guide to your own stress tendencies, not a medical diagnosis.",
    "If physical or mental discomfort continues, or the results worry you,",
    "please consult a physician, public health nurse, or counselor.",
];

/// Presentation-ready result: everything a chart or document exporter needs.
#[derive(Debug, Clone, Serialize)]
pub struct StressReport {
    pub title: &'static str,
    pub generated_at: NaiveDateTime,
    pub verdict: VerdictView,
    pub domains: Vec<DomainScoreView>,
    pub notice: Vec<&'static str>,
}

impl StressReport {
    pub fn new(assessment: &StressAssessment, generated_at: NaiveDateTime) -> Self {
        let domains = Domain::ordered()
            .into_iter()
            .map(|domain| {
                let advisory = assessment.advisory(domain);
                DomainScoreView {
                    domain,
                    key: domain.key(),
                    label: domain.label(),
                    score: assessment.scores.score(domain),
                    national_average: domain.national_average(),
                    meaning: domain.meaning(),
                    description: domain.description(),
                    higher_is_worse: domain.higher_is_worse(),
                    advisory_band: advisory.band,
                    advisory: advisory.message,
                }
            })
            .collect();

        Self {
            title: REPORT_TITLE,
            generated_at,
            verdict: assessment.verdict.into(),
            domains,
            notice: NOTICE.to_vec(),
        }
    }

    /// Writes the report as plain text.
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        writeln!(
            out,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out)?;
        writeln!(out, "Overall: {}", self.verdict.label)?;
        writeln!(out, "  {}", self.verdict.guidance)?;

        for view in &self.domains {
            writeln!(out)?;
            writeln!(
                out,
                "{}. {}  you: {:.1}  national average: {:.1}  ({})",
                view.key, view.label, view.score, view.national_average, view.meaning
            )?;
            writeln!(out, "   {}", view.description)?;
            writeln!(out, "   {}", view.standing())?;
            writeln!(out, "   -> {}", view.advisory)?;
        }

        writeln!(out)?;
        writeln!(out, "Notice")?;
        for line in &self.notice {
            writeln!(out, "  {line}")?;
        }
        writeln!(out, "  {PRIVACY_NOTE}")?;
        Ok(())
    }
}
