//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Remote command errors ─────────────────────────────────────────────────────

/// Why a remote command did not complete successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandErrorKind {
    #[error("exit status {0}")]
    Exit(i32),

    #[error("terminated by signal")]
    Signal,

    #[error("{0}")]
    Launch(String),
}

/// A failed remote command together with whatever output it produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct CommandFailure {
    pub kind: CommandErrorKind,
    pub output: Vec<u8>,
}

impl CommandFailure {
    #[must_use]
    pub fn new(kind: CommandErrorKind, output: Vec<u8>) -> Self {
        Self { kind, output }
    }

    /// Captured output decoded lossily for log lines.
    #[must_use]
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

// ── VM status errors ──────────────────────────────────────────────────────────

/// Errors raised while determining the state of the virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error(transparent)]
    Command(#[from] CommandFailure),
}

// ── Disk maintenance errors ───────────────────────────────────────────────────

/// The remote maintenance step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStep {
    Prune,
    Trim,
}

/// Terminal failure of `finch vm disk-prune`.
///
/// Display output is the underlying failure verbatim for status and command
/// failures; only the precondition error synthesizes its own message. None of
/// the variants chain a source, so `{:#}` prints each message once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiskPruneError {
    #[error(transparent)]
    StatusQueryFailed(#[from] StatusError),

    #[error("the instance {instance:?} is not running, run `finch {group} start` to start the instance")]
    PreconditionNotMet { instance: String, group: String },

    #[error("{failure}")]
    RemoteCommandFailed {
        step: MaintenanceStep,
        failure: CommandFailure,
    },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Invalid instance name '{0}': must start with a letter or digit and contain only letters, digits, '.', '_' or '-' (max 64)"
    )]
    InvalidInstanceName(String),

    #[error("Invalid timeout for {key}: must be greater than zero")]
    ZeroTimeout { key: &'static str },
}
