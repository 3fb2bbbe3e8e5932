//! Waypath CLI library.
//!
//! This crate provides the subcommand handlers, report formatting and
//! terminal progress output behind the `waypath-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
