//! `finch vm ...`: virtual machine maintenance commands.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::services::vm::disk_prune::{DiskPruneAction, DiskPruneTarget};
use crate::application::services::vm::status::get_vm_status;
use crate::domain::VM_ROOT_CMD;
use crate::infra::prompt::StdinPrompt;
use crate::output::TerminalLogger;

/// Virtual machine subcommands.
#[derive(Subcommand)]
pub enum VmCommand {
    /// Prune unused disk space in the virtual machine
    DiskPrune,

    /// Show the status of the virtual machine
    Status,
}

/// Run a `finch vm` subcommand.
///
/// # Errors
///
/// Returns an error if the subcommand fails.
pub async fn run(app: &AppContext, cmd: VmCommand) -> Result<()> {
    match cmd {
        VmCommand::DiskPrune => disk_prune(app).await,
        VmCommand::Status => status(app).await,
    }
}

/// Run `finch vm disk-prune`.
///
/// # Errors
///
/// Returns an error if the VM is not running, its status cannot be read, or
/// the prune or trim command fails.
pub async fn disk_prune(app: &AppContext) -> Result<()> {
    let logger = TerminalLogger::new(&app.output);
    let status = app.status_provider(&logger);
    let target = DiskPruneTarget {
        instance: app.instance.clone(),
        root_cmd: VM_ROOT_CMD.to_string(),
    };
    DiskPruneAction::new(target, &status, &app.lima, &logger, &StdinPrompt)
        .run()
        .await?;
    Ok(())
}

/// Run `finch vm status`: print the instance state on its own line.
///
/// # Errors
///
/// Returns an error if the status cannot be determined.
pub async fn status(app: &AppContext) -> Result<()> {
    let logger = TerminalLogger::new(&app.output);
    let status = get_vm_status(&app.lima, &logger, &app.instance).await?;
    println!("{status}");
    Ok(())
}
