//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()`; holds the loaded configuration, the validated
//! VM identity, the terminal output context and the `limactl` executor.

use anyhow::{Context, Result};

use crate::application::ports::{ConfigStore, Logger};
use crate::application::services::vm::status::LimaStatusProvider;
use crate::domain::{FinchConfig, InstanceName};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::lima::LimaCmdCreator;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Print debug log lines.
    pub debug: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet and debug modes).
    pub output: OutputContext,
    /// Loaded configuration.
    pub config: FinchConfig,
    /// Validated VM identity taken from `config.vm.instance`.
    pub instance: InstanceName,
    /// Remote executor reaching the VM through `limactl`.
    pub lima: LimaCmdCreator<TokioCommandRunner>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and a config store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or holds an
    /// invalid value.
    pub fn new(flags: &OutputFlags, store: &impl ConfigStore) -> Result<Self> {
        let config = store.load()?;
        let instance = config.validate().with_context(|| match store.path() {
            Ok(path) => format!("invalid configuration in {}", path.display()),
            Err(_) => "invalid configuration".to_string(),
        })?;

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet).with_debug(flags.debug),
            lima: LimaCmdCreator::from_config(&config),
            config,
            instance,
        })
    }

    /// Status provider bound to this context's executor.
    #[must_use]
    pub fn status_provider<'a, L: Logger>(
        &'a self,
        logger: &'a L,
    ) -> LimaStatusProvider<'a, LimaCmdCreator<TokioCommandRunner>, L> {
        LimaStatusProvider::new(&self.lima, logger)
    }
}
