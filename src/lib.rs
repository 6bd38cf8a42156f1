//! Spotify Playlist CSV Export Library
//!
//! This library turns a public Spotify playlist URL into a CSV report of its
//! tracks. It authenticates with the Spotify Web API using the client
//! credentials grant, fetches the playlist and flattens the track listing
//! into rows. The same pipeline backs the HTTP service and the command line.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served by the export service
//! - `cli` - Command-line subcommand implementations
//! - `config` - Configuration loaded once from environment variables
//! - `error` - Export error taxonomy and its HTTP mapping
//! - `export` - The extract, authenticate, fetch and transform pipeline
//! - `report` - CSV rendering of playlist tracks
//! - `server` - Router construction and the listening loop
//! - `spotify` - Spotify Web API client calls
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotcsv::{config, export};
//!
//! #[tokio::main]
//! async fn main() -> spotcsv::Res<()> {
//!     config::load_env().await?;
//!     let ctx = export::ExportContext::new(config::Config::from_env())?;
//!     let csv = export::export_playlist(&ctx, "https://open.spotify.com/playlist/abc").await?;
//!     println!("{csv}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by startup and command-line glue where the concrete error type does
/// not matter. Request handling uses [`error::ExportError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// All status macros write to stderr so that `spotcsv export` can stream the
/// CSV report to stdout untouched.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Exported {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for unrecoverable startup errors. Request failures are logged
/// with [`warning!`] and answered with an error response instead.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
