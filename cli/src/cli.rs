//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::infra::config::YamlConfigStore;

/// Container development on a managed virtual machine
#[derive(Parser)]
#[command(
    name = "finch",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print debug log lines
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage the virtual machine
    #[command(subcommand, name = "vm")]
    Vm(commands::vm::VmCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            debug,
            quiet,
            no_color,
            command,
        } = self;
        let flags = OutputFlags {
            no_color,
            quiet,
            debug,
        };
        match command {
            Command::Vm(cmd) => {
                let app = AppContext::new(&flags, &YamlConfigStore)?;
                commands::vm::run(&app, cmd).await
            }
        }
    }
}
