//! Building blocks of the `redwire` command line client.

pub mod args;
pub mod config;
pub mod render;
pub mod repl;
