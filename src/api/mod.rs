//! # API Module
//!
//! HTTP endpoints of the local queue surface. Selection surfaces replace the
//! queue through it and the playback engine reads the queue and reports the
//! tracks it starts.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version.
//! - [`get_queue`] - `GET /queue`, the current [`QueueSnapshot`].
//! - [`change_queue`] - `POST /queue?start=N`, replaces the queue with the
//!   selection in the body. A body that is neither playlist, track nor track
//!   list is answered with `422 Unprocessable Entity`.
//! - [`player_callback`] - `POST /player/callback`, `{ "track": ... }` sent by
//!   the playback engine when a track starts.
//!
//! All handlers reach the controller through an [`Extension`] holding the
//! [`SharedQueue`](crate::queue::SharedQueue).
//!
//! [`QueueSnapshot`]: crate::queue::QueueSnapshot
//! [`Extension`]: axum::Extension

mod health;
mod player;
mod queue;

pub use health::health;
pub use player::player_callback;
pub use queue::StartParams;
pub use queue::change_queue;
pub use queue::get_queue;
