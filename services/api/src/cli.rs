use crate::quiz::{run_quiz, run_score, QuizArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use longevity::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Longevity Assessment",
    about = "Serve the longevity assessment backend or take the quiz from a terminal",
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
    /// Take the assessment interactively and print the results page
    Quiz(QuizArgs),
    /// Score a saved submission or answer map
    Score(ScoreArgs),
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
        Command::Quiz(args) => run_quiz(args).await,
        Command::Score(args) => run_score(args),
    }
}
