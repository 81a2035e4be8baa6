mod cli;
mod config;
mod display;
mod error;
mod models;
mod stats;
mod store;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::Context;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Track daily tasks with time estimates", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    Add {
        /// Task description
        text: String,

        /// Estimated minutes (defaults to 0)
        minutes: Option<String>,
    },
    /// List today's tasks
    List {
        /// Show tasks from every day
        #[arg(long)]
        all: bool,
    },
    /// Mark a task as done
    Done {
        /// Task id
        id: String,
    },
    /// Show a per-day summary of the last days
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daybook=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = Context::initialize().and_then(|ctx| match cli.command {
        Commands::Add { text, minutes } => cli::add::run(&ctx, text, minutes),
        Commands::List { all } => cli::list::run(&ctx, all),
        Commands::Done { id } => cli::done::run(&ctx, &id),
        Commands::Stats => cli::stats::run(&ctx),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
