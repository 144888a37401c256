use crate::infra::bootstrap;
use crate::report::write_report;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stress_check::error::AppError;
use stress_check::questionnaire::{
    QuestionnaireSession, ScoringEngine, SessionPhase, StressAssessment,
};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct TakeArgs {
    /// JSON file with verdict/advisory thresholds (overrides APP_SCORING_RULES)
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the final report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let (_, engine) = bootstrap(args.rules.as_deref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_session(&engine, &mut stdin.lock(), &mut out)? {
        Some(assessment) => {
            info!(verdict = assessment.verdict.label(), "self-check completed");
            writeln!(out)?;
            write_report(&assessment, args.json, &mut out)?;
        }
        None => {
            info!("self-check abandoned before completion");
            writeln!(out, "Stopped. Your answers were discarded.")?;
        }
    }
    Ok(())
}

/// Drives one session over a line-based terminal. Returns `None` when the
/// respondent quits or input ends before every question is answered.
pub(crate) fn run_session<R: BufRead, W: Write>(
    engine: &ScoringEngine,
    input: &mut R,
    out: &mut W,
) -> Result<Option<StressAssessment>, AppError> {
    let catalog = engine.catalog();
    let mut session = QuestionnaireSession::for_engine(engine);
    let mut line = String::new();

    writeln!(
        out,
        "Enter 1-5 to answer, Enter to keep a previous answer, b to go back, r to restart, q to quit."
    )?;

    while let SessionPhase::Collecting { current } = session.phase() {
        let Some(item) = catalog.item(current) else {
            break;
        };

        writeln!(out, "\nQ{} / {}", current + 1, catalog.len())?;
        writeln!(out, "{}", item.prompt)?;
        for choice in item.answer_scale().choices() {
            writeln!(out, "  {choice}")?;
        }
        if let Some(previous) = session.current_answer() {
            writeln!(out, "(current answer: {previous})")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        session = match line.trim() {
            "q" | "Q" => return Ok(None),
            "b" | "B" => session.back(),
            "r" | "R" => session.restart(),
            "" => match session.clone().advance() {
                Ok(next) => next,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    session
                }
            },
            raw => match raw.parse::<u8>() {
                Ok(value) => match session.clone().submit(value) {
                    Ok(next) => next,
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        session
                    }
                },
                Err(_) => {
                    writeln!(out, "Please enter a number from 1 to 5.")?;
                    session
                }
            },
        };
    }

    Ok(Some(session.finish(engine)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stress_check::questionnaire::{standard_engine, ScoringConfig, Verdict, STANDARD_ITEM_COUNT};

    fn engine() -> ScoringEngine {
        standard_engine(ScoringConfig::standard()).expect("engine")
    }

    fn drive(script: &str) -> (Option<StressAssessment>, String) {
        let engine = engine();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_session(&engine, &mut input, &mut output).expect("session runs");
        (result, String::from_utf8(output).expect("utf-8"))
    }

    #[test]
    fn answering_every_question_yields_an_assessment() {
        let script = "3\n".repeat(STANDARD_ITEM_COUNT);

        let (result, output) = drive(&script);

        let assessment = result.expect("completed");
        assert_eq!(assessment.verdict, Verdict::Caution);
        assert!(output.contains("Q57 / 57"));
    }

    #[test]
    fn invalid_input_repeats_the_question() {
        let mut script = String::from("7\nabc\n\n");
        script.push_str(&"1\n".repeat(STANDARD_ITEM_COUNT));

        let (result, output) = drive(&script);

        assert!(result.is_some());
        assert!(output.contains("outside the 1-5 scale"));
        assert!(output.contains("Please enter a number from 1 to 5."));
        assert!(output.contains("must be answered before moving on"));
    }

    #[test]
    fn back_shows_previous_answer_and_enter_keeps_it() {
        let mut script = String::from("4\nb\n\n");
        script.push_str(&"2\n".repeat(STANDARD_ITEM_COUNT - 1));

        let (result, output) = drive(&script);

        assert!(result.is_some());
        assert!(output.contains("(current answer: 4)"));
    }

    #[test]
    fn quitting_or_running_out_of_input_discards_answers() {
        let (result, _) = drive("3\n3\nq\n");
        assert!(result.is_none());

        let (result, _) = drive("3\n3\n");
        assert!(result.is_none());
    }
}
