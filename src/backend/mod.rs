//! # Backend Module
//!
//! HTTP implementations of the queue collaborators, talking to the music
//! backend configured through `TUNEQUEUE_API_URL`.
//!
//! ```text
//! Queue Controller
//!     ├── DefaultQueueLoader  ── GET  /music/playlists/representative
//!     └── UsageReporter       ── POST /music/individual/count
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Both requests authenticate with the bearer token of the stored session.
//! A session that has expired is reported as [`CollaboratorError::Session`]
//! without touching the network; renewing it is the login flow's business.

pub mod playlist;
pub mod usage;

use reqwest::Client;

use crate::{queue::CollaboratorError, types::Session};

pub use playlist::HttpDefaultQueueLoader;
pub use usage::HttpUsageReporter;

/// Shared connection data of the backend collaborators.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    api_url: String,
    session: Session,
}

impl BackendClient {
    pub fn new(api_url: String, session: Session) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    pub fn user_id(&self) -> &str {
        &self.session.user_id
    }

    /// Access token of the session, if it is still valid.
    pub fn token(&self) -> Result<&str, CollaboratorError> {
        if self.session.is_expired() {
            return Err(CollaboratorError::Session(format!(
                "session of {} expired, log in again",
                self.session.user_id
            )));
        }
        Ok(&self.session.access_token)
    }

    pub fn http(&self) -> &Client {
        &self.client
    }
}
