//! Tooling
//!
//! Command-line front end over [`Session`](crate::session::Session).

pub mod cli;

pub use cli::{Cli, CliContext, Commands, InputArgs};
