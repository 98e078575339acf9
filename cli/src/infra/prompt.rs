//! Terminal implementation of the `ConfirmationPrompt` port.

use std::io::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::application::ports::ConfirmationPrompt;

/// Prompts on stdout and reads the answer from stdin.
///
/// The read has no timeout. Ctrl-C while waiting ends the wait with
/// `Ok(None)`, which callers treat like closed input. The pending stdin read
/// keeps a blocking thread parked, so the runtime must be shut down without
/// waiting for it.
pub struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    async fn ask(&self, notice: &str, question: &str) -> std::io::Result<Option<String>> {
        let mut stdin = BufReader::new(tokio::io::stdin());
        // `biased` polls the interrupt listener first, so it is installed
        // before the question becomes visible.
        tokio::select! {
            biased;
            Ok(()) = tokio::signal::ctrl_c() => {
                writeln!(std::io::stdout())?;
                Ok(None)
            }
            line = async {
                write_question(&mut std::io::stdout().lock(), notice, question)?;
                read_answer(&mut stdin).await
            } => line,
        }
    }
}

fn write_question(out: &mut impl std::io::Write, notice: &str, question: &str) -> std::io::Result<()> {
    writeln!(out, "{notice}")?;
    write!(out, "{question}")?;
    out.flush()
}

/// One line without its terminator, or `None` at end of input.
async fn read_answer(reader: &mut (impl AsyncBufRead + Unpin)) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
