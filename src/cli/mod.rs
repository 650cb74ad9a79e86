//! # CLI Module
//!
//! User-facing commands of tunequeue. Each command wires configuration, the
//! stored session and the queue controller together and reports progress
//! through the crate's `info!`, `success!`, `warning!` and `error!` macros.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the local queue surface for selection surfaces and the
//!   playback engine, seeding the queue with the default playlist.
//! - [`queue`] - Normalizes a selection file offline and prints the queue.
//! - [`default_playlist`] - Fetches and prints the default playlist.
//! - [`session`] - Stores the listener session used by the backend requests.
//!
//! ## Usage Patterns
//!
//! ```bash
//! tunequeue session --user-id 1f3c... --token eyJh...
//! tunequeue default
//! tunequeue queue search-results.json --start 2
//! tunequeue serve
//! ```
//!
//! ## Error Handling
//!
//! Missing configuration or session data degrades the command where possible
//! (a server without session still serves the queue, it just counts no
//! plays). Input the command cannot work with, like a selection file of
//! unknown shape, ends the program through `error!`.

mod default;
mod queue;
mod serve;
mod session;

pub use default::default_playlist;
pub use queue::queue;
pub use serve::serve;
pub use session::session;

use crate::{backend::BackendClient, config, management::SessionManager, warning};

/// Backend client for the stored session, if both session and API URL exist.
async fn backend_client() -> Option<BackendClient> {
    let api_url = match config::api_url() {
        Ok(url) => url,
        Err(e) => {
            warning!("{}", e);
            return None;
        }
    };

    match SessionManager::load().await {
        Ok(manager) => {
            if manager.is_expired() {
                warning!(
                    "Session of {} has expired. Run tunequeue session again.",
                    manager.user_id()
                );
            }
            Some(BackendClient::new(
                api_url,
                manager.current_session().clone(),
            ))
        }
        Err(e) => {
            warning!(
                "No stored session. Please run tunequeue session\n Error: {}",
                e
            );
            None
        }
    }
}
