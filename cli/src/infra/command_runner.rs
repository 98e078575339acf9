//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill on all platforms.

use std::io::SeekFrom;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::application::ports::{CombinedOutput, CommandRunner};

/// A child killed for exceeding its timeout, with the output it had written
/// by then (empty for piped runs).
#[derive(Debug, Error)]
#[error("{program} timed out after {}s", .after.as_secs())]
pub struct CommandTimedOut {
    pub program: String,
    pub after: Duration,
    pub output: Vec<u8>,
}

/// Production `CommandRunner`. Uses tokio for async process execution
/// with guaranteed timeout and kill on all platforms.
///
/// On Windows, `tokio::time::timeout` around `.output().await` does NOT kill
/// the child process when the timeout fires: the future is dropped but the
/// OS process keeps running. This implementation uses `tokio::select!` with
/// explicit `child.kill()` to guarantee the process is terminated.
pub struct TokioCommandRunner {
    timeout: Duration,
    envs: Vec<(String, String)>,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            envs: Vec::new(),
        }
    }

    /// Export `key=value` to every child this runner spawns.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    fn command(&self, program: &str, args: &[&str]) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }

    fn timed_out(&self, program: &str, output: Vec<u8>) -> anyhow::Error {
        CommandTimedOut {
            program: program.to_string(),
            after: self.timeout,
            output,
        }
        .into()
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = self
            .command(program, args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        // Read stdout/stderr CONCURRENTLY with wait() to avoid pipe deadlock.
        // If the child writes more than the OS pipe buffer it blocks on write,
        // and wait() alone would never resolve.
        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                Ok(Output {
                    status: status.with_context(|| format!("waiting for {program}"))?,
                    stdout,
                    stderr,
                })
            } => result,
            () = tokio::time::sleep(self.timeout) => {
                let _ = child.kill().await;
                Err(self.timed_out(program, Vec::new()))
            }
        }
    }

    async fn run_combined(&self, program: &str, args: &[&str]) -> Result<CombinedOutput> {
        // Both streams share one file description, so writes keep the order
        // the child produced them in. A file never blocks the writer, so
        // there is nothing to drain while waiting.
        let sink = tempfile::tempfile().context("creating output buffer")?;
        let stdout = sink.try_clone().context("duplicating output buffer")?;
        let stderr = sink.try_clone().context("duplicating output buffer")?;

        let mut child = self
            .command(program, args)
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let status = tokio::select! {
            status = child.wait() => Some(status.with_context(|| format!("waiting for {program}"))?),
            () = tokio::time::sleep(self.timeout) => {
                let _ = child.kill().await;
                None
            }
        };

        let output = read_back(sink).await?;
        match status {
            Some(status) => Ok(CombinedOutput { status, output }),
            None => Err(self.timed_out(program, output)),
        }
    }
}

/// Everything written to `sink` so far.
async fn read_back(sink: std::fs::File) -> Result<Vec<u8>> {
    let mut sink = tokio::fs::File::from_std(sink);
    sink.seek(SeekFrom::Start(0))
        .await
        .context("rewinding output buffer")?;
    let mut output = Vec::new();
    sink.read_to_end(&mut output)
        .await
        .context("reading output buffer")?;
    Ok(output)
}
