//! Domain types and validators for Finch configuration.
//!
//! Pure functions only. No I/O, no async, no filesystem access.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::vm::{DEFAULT_INSTANCE, InstanceName};

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.finch/finch.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FinchConfig {
    /// Virtual machine settings.
    pub vm: VmConfig,
    /// Remote command timeouts.
    pub timeouts: TimeoutConfig,
}

/// Virtual machine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VmConfig {
    /// Name of the Lima instance hosting the container runtime.
    pub instance: String,
    /// Program used to reach the VM manager.
    pub limactl: String,
    /// Exported as `LIMA_HOME` for every `limactl` invocation when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lima_home: Option<PathBuf>,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            instance: DEFAULT_INSTANCE.to_string(),
            limactl: "limactl".to_string(),
            lima_home: None,
        }
    }
}

/// Remote command timeouts, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// `limactl ls` and other short queries.
    pub status_secs: u64,
    /// Prune and trim, which may run for a long time on large disks.
    pub maintenance_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            status_secs: 30,
            maintenance_secs: 1800,
        }
    }
}

impl TimeoutConfig {
    #[must_use]
    pub fn status(&self) -> Duration {
        Duration::from_secs(self.status_secs)
    }

    #[must_use]
    pub fn maintenance(&self) -> Duration {
        Duration::from_secs(self.maintenance_secs)
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

impl FinchConfig {
    /// Validate the loaded values and return the VM identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance name is invalid or a timeout is zero.
    pub fn validate(&self) -> Result<InstanceName, ConfigError> {
        if self.timeouts.status_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                key: "timeouts.status_secs",
            });
        }
        if self.timeouts.maintenance_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                key: "timeouts.maintenance_secs",
            });
        }
        InstanceName::parse(&self.vm.instance)
    }
}
