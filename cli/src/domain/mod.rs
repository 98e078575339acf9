//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod vm;

pub use config::FinchConfig;
pub use error::{
    CommandErrorKind, CommandFailure, ConfigError, DiskPruneError, MaintenanceStep, StatusError,
};
pub use vm::{InstanceName, VM_ROOT_CMD, VmStatus};
