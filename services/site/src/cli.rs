use crate::export::{run_content_list, run_export, ContentListArgs, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use portfolio::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Research Portfolio",
    about = "Serve, inspect, and export the research portfolio site",
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
    /// Inspect the compiled-in content collections
    Content {
        #[command(subcommand)]
        command: ContentCommand,
    },
    /// Render every page to static HTML files
    Export(ExportArgs),
}

#[derive(Subcommand, Debug)]
enum ContentCommand {
    /// List the records of one collection, optionally narrowed by category
    List(ContentListArgs),
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
        Command::Content {
            command: ContentCommand::List(args),
        } => run_content_list(args),
        Command::Export(args) => run_export(args),
    }
}
