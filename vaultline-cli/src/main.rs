//! Vaultline CLI - a banking sandbox in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{demo, session};

/// Vaultline - a banking sandbox in your terminal
#[derive(Parser)]
#[command(name = "vl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive banking session (the default)
    Session {
        /// Seed the demonstration accounts regardless of settings
        #[arg(long)]
        demo: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: demo::DemoCommands,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Session { demo }) => session::run(demo),
        Some(Commands::Demo { command }) => demo::run(command),
        None => session::run(false),
    }
}

/// Initialize tracing for the process
///
/// Quiet by default so the interactive session stays clean; opt in with
/// RUST_LOG (e.g. RUST_LOG=vaultline_core=info).
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
