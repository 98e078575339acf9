//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::{CommandFailure, FinchConfig, InstanceName, StatusError, VmStatus};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Exit status plus stdout and stderr interleaved in the order written.
#[derive(Debug, Clone)]
pub struct CombinedOutput {
    pub status: ExitStatus,
    pub output: Vec<u8>,
}

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture stdout and stderr separately.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout, the child process must be killed (not
    /// left orphaned).
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with stdout and stderr sharing a single sink.
    ///
    /// # Errors
    ///
    /// As for [`CommandRunner::run`]. A timeout error should still carry the
    /// output written before the child was killed.
    async fn run_combined(&self, program: &str, args: &[&str]) -> Result<CombinedOutput>;
}

// ── Remote Executor Ports ─────────────────────────────────────────────────────

/// A command bound to the VM, ready to run once.
#[allow(async_fn_in_trait)]
pub trait RemoteCommand {
    /// Run to completion and return stdout.
    async fn output(self) -> Result<Vec<u8>, CommandFailure>;
    /// Run to completion and return stdout and stderr interleaved.
    ///
    /// On failure the returned [`CommandFailure`] carries whatever was
    /// captured before the command failed.
    async fn combined_output(self) -> Result<Vec<u8>, CommandFailure>;
}

/// Builds remote commands addressed to the VM manager.
pub trait CommandCreator {
    type Command<'a>: RemoteCommand
    where
        Self: 'a;

    /// Create a command without interactive stdio wiring (stdin is null).
    fn create_without_stdio<'a>(&'a self, args: &[&str]) -> Self::Command<'a>;
}

// ── VM Status Port ────────────────────────────────────────────────────────────

/// Reports the current state of a VM instance. Never cached.
#[allow(async_fn_in_trait)]
pub trait VmStatusProvider {
    async fn status(&self, instance: &InstanceName) -> Result<VmStatus, StatusError>;
}

// ── Logging Port ──────────────────────────────────────────────────────────────

/// Logging sink used by application services.
pub trait Logger {
    /// Informational progress message.
    fn info(&self, message: &str);
    /// Error message, never suppressed.
    fn error(&self, message: &str);
    /// Diagnostic message, shown only when debugging is enabled.
    fn debug(&self, message: &str);
}

// ── Terminal Prompt Port ──────────────────────────────────────────────────────

/// A single blocking-style question on the operator's terminal.
#[allow(async_fn_in_trait)]
pub trait ConfirmationPrompt {
    /// Write `notice` and then `question` (without a trailing newline) to
    /// standard output and await one line of input.
    ///
    /// Returns `Ok(None)` when input is closed or the wait is interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written or read.
    async fn ask(&self, notice: &str, question: &str) -> std::io::Result<Option<String>>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<FinchConfig>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
