//! Remote executor that reaches the VM through `limactl`.
//!
//! Generic over `R: CommandRunner` so that tests can inject a mock runner
//! without spawning real processes.

use std::process::ExitStatus;

use crate::application::ports::{CommandCreator, CommandRunner, RemoteCommand};
use crate::domain::{CommandErrorKind, CommandFailure, FinchConfig};
use crate::infra::command_runner::{CommandTimedOut, TokioCommandRunner};

/// Builds `limactl` invocations.
///
/// Two runners are held:
/// - `cmd_runner`: short queries such as `limactl ls`
/// - `exec_runner`: `limactl shell` maintenance commands (longer timeout)
pub struct LimaCmdCreator<R: CommandRunner> {
    limactl: String,
    cmd_runner: R,
    exec_runner: R,
}

impl<R: CommandRunner> LimaCmdCreator<R> {
    #[must_use]
    pub fn new(limactl: impl Into<String>, cmd_runner: R, exec_runner: R) -> Self {
        Self {
            limactl: limactl.into(),
            cmd_runner,
            exec_runner,
        }
    }
}

impl LimaCmdCreator<TokioCommandRunner> {
    /// Production creator backed by `TokioCommandRunner` with configured
    /// timeouts and `LIMA_HOME`.
    #[must_use]
    pub fn from_config(config: &FinchConfig) -> Self {
        let runner = |timeout| {
            let runner = TokioCommandRunner::new(timeout);
            match &config.vm.lima_home {
                Some(home) => runner.with_env("LIMA_HOME", home.to_string_lossy()),
                None => runner,
            }
        };
        Self::new(
            config.vm.limactl.clone(),
            runner(config.timeouts.status()),
            runner(config.timeouts.maintenance()),
        )
    }
}

impl<R: CommandRunner> CommandCreator for LimaCmdCreator<R> {
    type Command<'a>
        = LimaCommand<'a, R>
    where
        Self: 'a;

    fn create_without_stdio<'a>(&'a self, args: &[&str]) -> LimaCommand<'a, R> {
        LimaCommand {
            creator: self,
            args: args.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One `limactl` invocation, consumed when run.
pub struct LimaCommand<'a, R: CommandRunner> {
    creator: &'a LimaCmdCreator<R>,
    args: Vec<String>,
}

impl<R: CommandRunner> LimaCommand<'_, R> {
    fn argv(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl<R: CommandRunner> RemoteCommand for LimaCommand<'_, R> {
    async fn output(self) -> Result<Vec<u8>, CommandFailure> {
        let out = self
            .creator
            .cmd_runner
            .run(&self.creator.limactl, &self.argv())
            .await
            .map_err(launch_failure)?;
        match exit_failure(out.status) {
            None => Ok(out.stdout),
            Some(kind) => Err(CommandFailure::new(kind, out.stderr)),
        }
    }

    async fn combined_output(self) -> Result<Vec<u8>, CommandFailure> {
        let out = self
            .creator
            .exec_runner
            .run_combined(&self.creator.limactl, &self.argv())
            .await
            .map_err(launch_failure)?;
        match exit_failure(out.status) {
            None => Ok(out.output),
            Some(kind) => Err(CommandFailure::new(kind, out.output)),
        }
    }
}

/// A runner error as a failure; a timeout keeps the output captured so far.
fn launch_failure(err: anyhow::Error) -> CommandFailure {
    match err.downcast::<CommandTimedOut>() {
        Ok(timed_out) => CommandFailure::new(
            CommandErrorKind::Launch(timed_out.to_string()),
            timed_out.output,
        ),
        Err(err) => CommandFailure::new(CommandErrorKind::Launch(format!("{err:#}")), Vec::new()),
    }
}

fn exit_failure(status: ExitStatus) -> Option<CommandErrorKind> {
    if status.success() {
        return None;
    }
    Some(match status.code() {
        Some(code) => CommandErrorKind::Exit(code),
        None => CommandErrorKind::Signal,
    })
}
