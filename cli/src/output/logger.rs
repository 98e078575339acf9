//! `TerminalLogger`: Presentation-layer implementation of `Logger`.
//!
//! Wraps `&OutputContext` so application services can narrate progress
//! without depending on any presentation type directly.

use crate::application::ports::Logger;
use crate::output::OutputContext;

/// Terminal logger that wraps an `OutputContext`.
///
/// - `info()` prints `"  ℹ {message}"` (suppressed when `ctx.quiet`)
/// - `error()` prints `"  ✗ {message}"` to stderr (never suppressed)
/// - `debug()` prints `"  · {message}"` to stderr (only when `ctx.debug`)
pub struct TerminalLogger<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalLogger<'a> {
    /// Create a new `TerminalLogger` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl Logger for TerminalLogger<'_> {
    fn info(&self, message: &str) {
        self.ctx.info(message);
    }

    fn error(&self, message: &str) {
        self.ctx.error(message.trim_end());
    }

    fn debug(&self, message: &str) {
        self.ctx.debug(message);
    }
}
