//! VM status query over the remote executor.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{CommandCreator, Logger, RemoteCommand, VmStatusProvider};
use crate::domain::vm::{parse_status, status_query_args};
use crate::domain::{InstanceName, StatusError, VmStatus};

/// Get current VM state by running `ls -f {{.Status}} <instance>`.
///
/// # Errors
///
/// Returns the command failure verbatim if the query cannot run.
pub async fn get_vm_status(
    creator: &impl CommandCreator,
    logger: &impl Logger,
    instance: &InstanceName,
) -> Result<VmStatus, StatusError> {
    let stdout = creator
        .create_without_stdio(&status_query_args(instance))
        .output()
        .await?;
    let report = String::from_utf8_lossy(&stdout);
    let report = report.trim();
    logger.debug(&format!("Status of virtual machine: {report}"));
    Ok(parse_status(report))
}

/// [`VmStatusProvider`] backed by a [`CommandCreator`].
pub struct LimaStatusProvider<'a, C, L> {
    creator: &'a C,
    logger: &'a L,
}

impl<'a, C: CommandCreator, L: Logger> LimaStatusProvider<'a, C, L> {
    #[must_use]
    pub fn new(creator: &'a C, logger: &'a L) -> Self {
        Self { creator, logger }
    }
}

impl<C: CommandCreator, L: Logger> VmStatusProvider for LimaStatusProvider<'_, C, L> {
    async fn status(&self, instance: &InstanceName) -> Result<VmStatus, StatusError> {
        get_vm_status(self.creator, self.logger, instance).await
    }
}
