//! studentgen CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "studentgen",
    version,
    about = "Generate synthetic student records with an LLM and ask questions about them"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file (overrides `database_path` from the config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate student profiles and store them
    Generate {
        /// Number of profiles to generate
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,
    },

    /// Show stored student records
    Records {
        /// Show at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Ask a question about the stored students
    Ask {
        /// The question, e.g. "What is the average age?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the questions studentgen understands
    Questions,

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("studentgen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context {
        config_path: cli.config,
        db_override: cli.db,
    };

    let result = match cli.command {
        Commands::Generate { count } => commands::generate::execute(&ctx, count).await,
        Commands::Records { limit } => commands::records::execute(&ctx, limit).await,
        Commands::Ask { question, json } => {
            commands::ask::execute(&ctx, &question.join(" "), json).await
        }
        Commands::Questions => commands::questions::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
