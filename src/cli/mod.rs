//! Command implementations behind the `reach` binary.

pub mod commands;
