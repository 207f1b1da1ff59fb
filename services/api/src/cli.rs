use crate::report::{run_assess, run_patterns, run_timeline, AssessArgs, PatternsArgs, TimelineArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use travel_ready::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Travel Readiness",
    about = "Score trip readiness and plan document preparation from the command line",
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
    /// Score a single trip and print recommended actions
    Assess(AssessArgs),
    /// Print the preparation milestones for a departure date
    Timeline(TimelineArgs),
    /// Summarize a CSV export of previous trips
    Patterns(PatternsArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Timeline(args) => run_timeline(args),
        Command::Patterns(args) => run_patterns(args),
    }
}
