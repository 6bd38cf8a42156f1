//! # CLI Module
//!
//! Implementations of the `spotcsv` subcommands.
//!
//! - [`serve`] - runs the HTTP export service
//! - [`export`] - exports a single playlist to a file or stdout
//!
//! Both commands take an already loaded [`Config`](crate::config::Config)
//! and terminate the process with a non-zero exit code on fatal errors.

mod export;
mod serve;

pub use export::{export, write_csv};
pub use serve::serve;
