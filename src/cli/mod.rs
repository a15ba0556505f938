//! Command-line interface for the mnk engine.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::Mnk;
