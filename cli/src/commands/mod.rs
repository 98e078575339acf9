//! Command implementations

pub mod vm;
