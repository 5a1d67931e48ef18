use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use flowview::client::OrchestratorClient;
use tracing_subscriber::EnvFilter;

mod commands;
mod configuration;
mod error;
mod render;

use commands::Output;
use configuration::Settings;
use render::Renderer;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orchestrator base URL (can also be set via FLOWVIEW_ORCHESTRATOR__HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Print the workflow as JSON instead of rendering it
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a saved transcript
    Parse {
        /// Transcript file, or `-` for stdin
        #[arg(default_value = "-")]
        path: PathBuf,
    },

    /// Send a request to the supervisor agent and render its workflow
    Supervisor {
        /// Request text
        content: String,

        /// File to upload with the request
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Send feedback to the sentiment review agent
    Review {
        /// Feedback text
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::new()?;
    if let Some(host) = cli.host {
        settings.orchestrator.host = host;
    }

    let output = Output {
        renderer: Renderer::new(settings.display.max_chars),
        json: cli.json,
    };

    match cli.command {
        Command::Parse { path } => commands::parse::execute(&path, &output),
        Command::Supervisor { content, file } => {
            let client = OrchestratorClient::new(settings.orchestrator.into_config())?;
            commands::supervisor::execute(&client, content, file, &output).await
        }
        Command::Review { text } => {
            let client = OrchestratorClient::new(settings.orchestrator.into_config())?;
            commands::review::execute(&client, text, &output).await
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
