//! Shared test helpers: scripted `limactl` responses and recording ports.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use finch_cli::application::ports::{CommandCreator, ConfirmationPrompt, Logger, RemoteCommand};
use finch_cli::domain::{CommandErrorKind, CommandFailure};

pub fn exit_failure(code: i32, output: &[u8]) -> CommandFailure {
    CommandFailure::new(CommandErrorKind::Exit(code), output.to_vec())
}

// ── Remote executor ──────────────────────────────────────────────────────────

type Response = Result<Vec<u8>, CommandFailure>;

/// Plays back one response per created command, recording each argv.
///
/// Serves the status query as well as the maintenance commands, the same way
/// a single `limactl` would.
pub struct FakeLima {
    calls: RefCell<Vec<Vec<String>>>,
    responses: RefCell<VecDeque<Response>>,
}

impl FakeLima {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            responses: RefCell::new(responses.into()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

pub struct FakeCommand(Response);

impl RemoteCommand for FakeCommand {
    async fn output(self) -> Result<Vec<u8>, CommandFailure> {
        self.0
    }
    async fn combined_output(self) -> Result<Vec<u8>, CommandFailure> {
        self.0
    }
}

impl CommandCreator for FakeLima {
    type Command<'a>
        = FakeCommand
    where
        Self: 'a;

    fn create_without_stdio<'a>(&'a self, args: &[&str]) -> FakeCommand {
        self.calls
            .borrow_mut()
            .push(args.iter().map(ToString::to_string).collect());
        let response = self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(CommandFailure::new(
                CommandErrorKind::Launch("command not expected in this test".to_string()),
                Vec::new(),
            ))
        });
        FakeCommand(response)
    }
}

// ── Logger ───────────────────────────────────────────────────────────────────

/// Every log line, prefixed with its level.
#[derive(Default)]
pub struct LogSpy(RefCell<Vec<String>>);

impl LogSpy {
    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.0.borrow().iter().any(|l| l == line)
    }
}

impl Logger for LogSpy {
    fn info(&self, message: &str) {
        self.0.borrow_mut().push(format!("INFO {message}"));
    }
    fn error(&self, message: &str) {
        self.0.borrow_mut().push(format!("ERROR {message}"));
    }
    fn debug(&self, message: &str) {
        self.0.borrow_mut().push(format!("DEBUG {message}"));
    }
}

// ── Prompt ───────────────────────────────────────────────────────────────────

/// Answers the confirmation with a fixed line (or closed input for `None`).
pub struct Operator {
    answer: Option<String>,
    asked: RefCell<usize>,
}

impl Operator {
    pub fn says(line: &str) -> Self {
        Self {
            answer: Some(line.to_string()),
            asked: RefCell::new(0),
        }
    }

    pub fn hangs_up() -> Self {
        Self {
            answer: None,
            asked: RefCell::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        *self.asked.borrow()
    }
}

impl ConfirmationPrompt for Operator {
    async fn ask(&self, _: &str, _: &str) -> std::io::Result<Option<String>> {
        *self.asked.borrow_mut() += 1;
        Ok(self.answer.clone())
    }
}
