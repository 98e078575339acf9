//! Virtual machine identity, status, and the fixed remote command lines.
//!
//! Pure functions only. No I/O, no async, no process spawning.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ConfigError;

/// Command group that owns VM subcommands (`finch vm ...`).
pub const VM_ROOT_CMD: &str = "vm";

/// Instance name used when the config file does not override it.
pub const DEFAULT_INSTANCE: &str = "finch";

/// Lima instance names are used verbatim as argv segments; restrict them so
/// they can never be read as flags or contain path separators.
pub static INSTANCE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,63}$").expect("valid regex")
});

/// Validated name of the target virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceName(String);

impl InstanceName {
    /// Validate and wrap an instance name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInstanceName`] if `name` is empty, too
    /// long, or contains characters outside `[A-Za-z0-9._-]`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        if INSTANCE_NAME_RE.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(ConfigError::InvalidInstanceName(name.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InstanceName {
    fn default() -> Self {
        Self(DEFAULT_INSTANCE.to_string())
    }
}

impl fmt::Display for InstanceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// VM state as reported by `limactl ls -f {{.Status}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmStatus {
    Nonexistent,
    Stopped,
    Running,
    Broken,
    /// Any other reported state, e.g. `Starting`. Never counts as running.
    Other(String),
}

impl VmStatus {
    #[must_use]
    pub fn is_running(&self) -> bool {
        *self == Self::Running
    }
}

impl fmt::Display for VmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Nonexistent => "Nonexistent",
            Self::Stopped => "Stopped",
            Self::Running => "Running",
            Self::Broken => "Broken",
            Self::Other(state) => state,
        };
        f.write_str(s)
    }
}

/// Map the (already trimmed) status report to a [`VmStatus`].
///
/// An empty report means the instance does not exist. Matching is
/// case-sensitive.
#[must_use]
pub fn parse_status(report: &str) -> VmStatus {
    match report {
        "" => VmStatus::Nonexistent,
        "Running" => VmStatus::Running,
        "Stopped" => VmStatus::Stopped,
        "Broken" => VmStatus::Broken,
        other => VmStatus::Other(other.to_string()),
    }
}

// ── Remote command lines ──────────────────────────────────────────────────────
//
// Argument vectors handed to the VM manager. The instance name is the only
// variable segment.

/// `ls -f {{.Status}} <instance>`
#[must_use]
pub fn status_query_args(instance: &InstanceName) -> [&str; 4] {
    ["ls", "-f", "{{.Status}}", instance.as_str()]
}

/// `shell <instance> sudo -E nerdctl system prune -a -f`
#[must_use]
pub fn system_prune_args(instance: &InstanceName) -> [&str; 9] {
    [
        "shell",
        instance.as_str(),
        "sudo",
        "-E",
        "nerdctl",
        "system",
        "prune",
        "-a",
        "-f",
    ]
}

/// `shell <instance> sudo fstrim -a`
#[must_use]
pub fn fstrim_args(instance: &InstanceName) -> [&str; 5] {
    ["shell", instance.as_str(), "sudo", "fstrim", "-a"]
}

/// Only a bare `y` or `Y` confirms; the line terminator and surrounding
/// blanks are ignored.
#[must_use]
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.trim(), "y" | "Y")
}
