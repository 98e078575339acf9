//! Unit tests for finch CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod architecture;
mod helpers;
