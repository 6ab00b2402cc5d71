//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::{get_config, get_vaultline_dir};

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    On,
    /// Disable demo mode
    Off,
    /// Show whether demo mode is enabled
    Status,
}

pub fn run(command: DemoCommands) -> Result<()> {
    let mut config = get_config()?;

    match command {
        DemoCommands::On => {
            config.enable_demo_mode();
            config.save(&get_vaultline_dir())?;
            println!("{}", "Demo mode enabled".green());
            println!(
                "{}",
                "The next session starts with sample accounts.".dimmed()
            );
        }
        DemoCommands::Off => {
            config.disable_demo_mode();
            config.save(&get_vaultline_dir())?;
            println!("{}", "Demo mode disabled".green());
        }
        DemoCommands::Status => {
            if config.demo_mode {
                println!("Demo mode is {}", "on".green());
            } else {
                println!("Demo mode is {}", "off".yellow());
            }
        }
    }

    Ok(())
}
