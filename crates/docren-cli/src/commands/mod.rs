//! CLI subcommands.

pub mod config;
pub mod plan;
pub mod suggest;
