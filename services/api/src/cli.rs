use crate::demo::{
    run_demo, run_leadership_analyze, run_leadership_metrics, DemoArgs, LeadershipAnalyzeArgs,
    LeadershipMetricsArgs, RosterSource, DEMO_CHURCH,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use flock_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Flock Leadership Pipeline",
    about = "Score leadership potential and plan development for a congregation",
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
    /// Analyze a roster export from the command line
    Leadership {
        #[command(subcommand)]
        command: LeadershipCommand,
    },
    /// Run the leadership analysis against the bundled demo congregation
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LeadershipCommand {
    /// Score members and print profiles, openings and development insights
    Analyze(LeadershipAnalyzeArgs),
    /// Print pipeline headcounts for the whole roster
    Metrics(LeadershipMetricsArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) source: RosterSource,
    /// Church identifier the served roster belongs to
    #[arg(long, default_value = DEMO_CHURCH)]
    pub(crate) church: String,
    /// Override the self-assessed score a member needs before being analyzed
    #[arg(long)]
    pub(crate) prefilter_score: Option<f64>,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            source: RosterSource::default(),
            church: DEMO_CHURCH.to_string(),
            prefilter_score: None,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leadership {
            command: LeadershipCommand::Analyze(args),
        } => run_leadership_analyze(args),
        Command::Leadership {
            command: LeadershipCommand::Metrics(args),
        } => run_leadership_metrics(args),
        Command::Demo(args) => run_demo(args),
    }
}
