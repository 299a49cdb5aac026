use crate::demo::{run_demo, run_outline, DemoArgs, OutlineArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use triage_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Diagnostic Triage Orchestrator",
    about = "Run and demonstrate the interactive bleeding-disorder triage engine",
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
    /// Inspect the standard questionnaire content
    Questionnaire {
        #[command(subcommand)]
        command: QuestionnaireCommand,
    },
    /// Run an end-to-end CLI demo of a triage interview
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuestionnaireCommand {
    /// Print the question bank and, optionally, the diagnosis catalog
    Outline(OutlineArgs),
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
        Command::Questionnaire {
            command: QuestionnaireCommand::Outline(args),
        } => run_outline(args),
        Command::Demo(args) => run_demo(args),
    }
}
