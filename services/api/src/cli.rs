use crate::report::{run_items, run_score, ItemsArgs, ScoreArgs};
use crate::server;
use crate::take::{run_take, TakeArgs};
use clap::{Args, Parser, Subcommand};
use stress_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Workplace Stress Self-Check",
    about = "Answer the 57-item stress self-check, score answer sheets, or serve the scoring API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the questionnaire items and answer choices
    Items(ItemsArgs),
    /// Score a complete answer sheet given on the command line
    Score(ScoreArgs),
    /// Take the questionnaire interactively in the terminal
    Take(TakeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Items(args) => run_items(args),
        Command::Score(args) => run_score(args),
        Command::Take(args) => run_take(args),
    }
}
