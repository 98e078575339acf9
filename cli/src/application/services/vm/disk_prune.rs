//! Disk maintenance: prune unused container runtime objects, then trim the
//! VM's filesystems once the operator confirms.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{
    CommandCreator, ConfirmationPrompt, Logger, RemoteCommand, VmStatusProvider,
};
use crate::domain::vm::{fstrim_args, is_affirmative, system_prune_args};
use crate::domain::{DiskPruneError, InstanceName, MaintenanceStep};

const TRIM_NOTICE: &str = "\nDisk Cleanup: Reclaim unused space from the VM's disk using fstrim.\n\
⚠️ Warning: Running fstrim frequently, or using the discard mount option,\n\
might negatively affect the lifespan of some SSDs.";

const TRIM_QUESTION: &str = "Proceed with disk trim? (y/N): ";

/// Fixed identity of the VM a disk-prune run operates on.
#[derive(Debug, Clone)]
pub struct DiskPruneTarget {
    /// VM instance to maintain.
    pub instance: InstanceName,
    /// Command group shown in the "start the instance" hint.
    pub root_cmd: String,
}

/// One run of `finch vm disk-prune`.
///
/// Issues at most one status query, one prune, one prompt and one trim.
/// Any failure ends the run; nothing is retried.
pub struct DiskPruneAction<'a, S, C, L, P> {
    target: DiskPruneTarget,
    status: &'a S,
    creator: &'a C,
    logger: &'a L,
    prompt: &'a P,
}

impl<'a, S, C, L, P> DiskPruneAction<'a, S, C, L, P>
where
    S: VmStatusProvider,
    C: CommandCreator,
    L: Logger,
    P: ConfirmationPrompt,
{
    #[must_use]
    pub fn new(
        target: DiskPruneTarget,
        status: &'a S,
        creator: &'a C,
        logger: &'a L,
        prompt: &'a P,
    ) -> Self {
        Self {
            target,
            status,
            creator,
            logger,
            prompt,
        }
    }

    /// Run the maintenance sequence.
    ///
    /// A declined trim still counts as success: the prune has completed.
    ///
    /// # Errors
    ///
    /// Returns the status-query failure verbatim, [`DiskPruneError::PreconditionNotMet`]
    /// if the VM is not running, or the first failed remote command.
    pub async fn run(&self) -> Result<(), DiskPruneError> {
        let instance = &self.target.instance;

        let status = self.status.status(instance).await?;
        if !status.is_running() {
            return Err(DiskPruneError::PreconditionNotMet {
                instance: instance.to_string(),
                group: self.target.root_cmd.clone(),
            });
        }

        self.logger
            .info("Running system prune to remove unused containers, images, volumes, and networks...");
        self.execute(MaintenanceStep::Prune, &system_prune_args(instance))
            .await?;
        self.logger.info("System prune completed successfully");

        if !self.confirm_trim().await {
            self.logger.info("Skipped disk trim. System prune completed.");
            return Ok(());
        }

        self.logger.info("Running fstrim to reclaim disk space...");
        self.execute(MaintenanceStep::Trim, &fstrim_args(instance))
            .await?;
        self.logger.info("Disk space reclaimed successfully");

        Ok(())
    }

    async fn execute(&self, step: MaintenanceStep, args: &[&str]) -> Result<(), DiskPruneError> {
        match self.creator.create_without_stdio(args).combined_output().await {
            Ok(_) => Ok(()),
            Err(failure) => {
                let label = match step {
                    MaintenanceStep::Prune => "System prune",
                    MaintenanceStep::Trim => "Fstrim",
                };
                self.logger
                    .error(&format!("{label} failed: {failure}\n{}", failure.output_lossy()));
                Err(DiskPruneError::RemoteCommandFailed { step, failure })
            }
        }
    }

    /// A read error or closed input is a decline.
    async fn confirm_trim(&self) -> bool {
        match self.prompt.ask(TRIM_NOTICE, TRIM_QUESTION).await {
            Ok(Some(response)) => is_affirmative(&response),
            Ok(None) | Err(_) => false,
        }
    }
}
