use crate::infra::{bootstrap, parse_answers, AnswerList};
use chrono::Local;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use stress_check::error::AppError;
use stress_check::questionnaire::report::views::ItemView;
use stress_check::questionnaire::{ItemCatalog, StressAssessment, StressReport};

#[derive(Args, Debug)]
pub(crate) struct ItemsArgs {
    /// Print the items as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// All answers in question order, e.g. "3,4,2,..."; use "-" for an unanswered item
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: AnswerList,
    /// JSON file with verdict/advisory thresholds (overrides APP_SCORING_RULES)
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_items(args: ItemsArgs) -> Result<(), AppError> {
    let catalog = ItemCatalog::standard()?;
    let stdout = io::stdout();
    write_items(&catalog, args.json, &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers: AnswerList(answers),
        rules,
        json,
    } = args;

    let (_, engine) = bootstrap(rules.as_deref())?;
    let assessment = engine.score_raw(&answers)?;

    let stdout = io::stdout();
    write_report(&assessment, json, &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn write_report<W: Write>(
    assessment: &StressAssessment,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    let report = StressReport::new(assessment, Local::now().naive_local());
    if json {
        serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::from)?;
        writeln!(out)
    } else {
        report.render_text(out)
    }
}

pub(crate) fn write_items<W: Write>(
    catalog: &ItemCatalog,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    let items: Vec<ItemView> = catalog.items().iter().map(ItemView::from).collect();
    if json {
        serde_json::to_writer_pretty(&mut *out, &items).map_err(io::Error::from)?;
        return writeln!(out);
    }

    let mut current_domain = None;
    for item in &items {
        if current_domain != Some(item.domain) {
            current_domain = Some(item.domain);
            writeln!(out, "\n{}. {}", item.domain.key(), item.domain.label())?;
            writeln!(out, "   choices: {}", item.choices.join(" / "))?;
        }
        writeln!(out, "  Q{:>2} {}", item.number, item.prompt)?;
    }
    Ok(())
}
