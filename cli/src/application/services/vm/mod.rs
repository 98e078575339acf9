//! Application services for VM status and disk maintenance.
//!
//! Each module imports only from `crate::domain` and
//! `crate::application::ports`.

pub mod disk_prune;
pub mod status;
