//! Playback Queue Controller Library
//!
//! This library keeps the playback queue of a listening session: it turns
//! playlists, single tracks and search results into one canonical playlist,
//! derives the URI and cover-image lists a playback engine plays from, tracks
//! the current track and reports plays once a track kept playing past the
//! dwell threshold.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local queue surface
//! - `backend` - HTTP implementations of the default loader and usage reporter
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Session cache
//! - `queue` - Queue controller, projection cache and report scheduling
//! - `server` - Local HTTP server wiring
//! - `source` - Normalization of selections into the canonical playlist
//! - `types` - Data structures and type definitions
//! - `utils` - Table and formatting helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tunequeue::{
//!     queue::{NoopReporter, QueueController, QueueSettings},
//!     types::PlayList,
//! };
//!
//! let playlist = PlayList::new(
//!     "37i9dQZF1DX4sWSpwq3LiO".to_string(),
//!     "Peaceful Piano".to_string(),
//!     "Relax and indulge with beautiful piano pieces".to_string(),
//!     Vec::new(),
//! );
//!
//! let mut queue = QueueController::new(Arc::new(NoopReporter), QueueSettings::default());
//! queue.change_playlist(playlist, 3);
//! assert!(queue.uris().is_empty());
//! ```

pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod management;
pub mod queue;
pub mod server;
pub mod source;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error so CLI commands can bubble up any error while
/// keeping Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Loading default playlist...");
/// info!("Queue holds {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for conditions the program cannot continue from, such as a selection
/// file whose shape is neither playlist, track nor track list. Code after the
/// invocation does not run.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
