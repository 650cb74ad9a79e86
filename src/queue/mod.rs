//! # Queue Module
//!
//! The queue controller holds the one live playlist of a session together with
//! the playback state reported by the playback engine.
//!
//! ## State
//!
//! - **Playlist**: absent until either the default loader seeds it or a user
//!   selection replaces it. Replaced wholesale, never edited in place.
//! - **Projection**: the URI and image lists derived from the playlist. Computed
//!   on first read and cached until the playlist changes.
//! - **Playback state**: `is_playing` and the current track. Only playback
//!   engine events touch it; there is no transition back to idle here.
//!
//! ## Collaborators
//!
//! - [`DefaultQueueLoader`] supplies the playlist offered before any selection.
//! - [`UsageReporter`] counts a play once a track kept playing past the dwell
//!   threshold.
//!
//! ## Sharing
//!
//! The controller itself is a plain `&mut self` state machine. Surfaces that
//! need it concurrently go through [`SharedQueue`], which swaps playlist and
//! playback state as one unit.

mod loader;
mod projection;
mod report;

use std::{fmt, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    source::{self, Selection},
    types::{PlayList, PlaybackEvent, PlaybackState, Track},
    utils,
};

pub use loader::DefaultQueueLoader;
pub use loader::StaticLoader;
pub use projection::ProjectionCache;
pub use projection::QueueProjection;
pub use report::DEFAULT_DWELL;
pub use report::NoopReporter;
pub use report::ReportPolicy;
pub use report::ReportScheduler;
pub use report::UsageReporter;

pub type SharedQueue = Arc<Mutex<QueueController>>;

/// Failure of an external collaborator. Never surfaced by the controller.
#[derive(Debug)]
pub enum CollaboratorError {
    Http(reqwest::Error),
    Status(u16),
    Session(String),
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Http(e) => write!(f, "request failed: {}", e),
            CollaboratorError::Status(code) => write!(f, "unexpected status {}", code),
            CollaboratorError::Session(e) => write!(f, "no usable session: {}", e),
        }
    }
}

impl std::error::Error for CollaboratorError {}

impl From<reqwest::Error> for CollaboratorError {
    fn from(err: reqwest::Error) -> Self {
        CollaboratorError::Http(err)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QueueSettings {
    pub dwell: Duration,
    pub policy: ReportPolicy,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            dwell: DEFAULT_DWELL,
            policy: ReportPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub length: usize,
}

/// Serializable view of the controller, as handed to the playback engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub playlist: Option<PlaylistSummary>,
    pub uris: Vec<String>,
    pub images: Vec<String>,
    pub is_playing: bool,
    pub current_track: Option<Track>,
    /// Index of the current track in `uris`, if it is queued.
    pub current_position: Option<usize>,
}

pub struct QueueController {
    playlist: Option<Arc<PlayList>>,
    projection: ProjectionCache,
    playback: PlaybackState,
    reports: ReportScheduler,
}

impl QueueController {
    pub fn new(reporter: Arc<dyn UsageReporter>, settings: QueueSettings) -> Self {
        Self {
            playlist: None,
            projection: ProjectionCache::default(),
            playback: PlaybackState::default(),
            reports: ReportScheduler::new(reporter, settings.dwell, settings.policy),
        }
    }

    pub fn shared(self) -> SharedQueue {
        Arc::new(Mutex::new(self))
    }

    /// Normalizes the selection, starting playback order at `idx`, and makes
    /// it the live playlist.
    pub fn change_playlist(&mut self, selection: impl Into<Selection>, idx: usize) -> Arc<PlayList> {
        let selection = selection.into();
        let kind = selection.kind();
        let playlist = source::normalize(selection, idx);
        log::debug!(
            "queue replaced by {} {} ({} entries, start {})",
            kind,
            playlist.id,
            playlist.len(),
            idx
        );
        self.replace(playlist)
    }

    /// Adopts the default playlist if nothing has been selected yet.
    pub fn seed_default(&mut self, playlist: PlayList) -> bool {
        if self.playlist.is_some() {
            log::debug!("default playlist {} ignored, queue already set", playlist.id);
            return false;
        }

        log::debug!("queue seeded with default playlist {}", playlist.id);
        self.replace(playlist);
        true
    }

    fn replace(&mut self, playlist: PlayList) -> Arc<PlayList> {
        let playlist = Arc::new(playlist);
        self.playlist = Some(Arc::clone(&playlist));
        self.projection.invalidate();
        playlist
    }

    /// Called by the playback engine whenever it starts a track.
    pub fn player_callback(&mut self, event: PlaybackEvent) {
        log::debug!("playback started: {}", event.track.uri);
        self.playback.current_track = Some(event.track);
        self.playback.is_playing = true;
        self.reports.schedule();
    }

    pub fn playlist(&self) -> Option<&Arc<PlayList>> {
        self.playlist.as_ref()
    }

    /// Increases by one on every playlist replacement.
    pub fn playlist_version(&self) -> u64 {
        self.projection.version()
    }

    pub fn projection(&self) -> Arc<QueueProjection> {
        Arc::clone(self.projection.get(self.playlist.as_deref()))
    }

    pub fn uris(&self) -> &[String] {
        &self.projection.get(self.playlist.as_deref()).uris
    }

    pub fn images(&self) -> &[String] {
        &self.projection.get(self.playlist.as_deref()).images
    }

    pub fn playback_state(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playback.current_track.as_ref()
    }

    pub fn pending_reports(&self) -> usize {
        self.reports.pending()
    }

    pub fn cancel_pending_reports(&mut self) {
        self.reports.cancel_pending();
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        let projection = self.projection();
        QueueSnapshot {
            playlist: self.playlist.as_ref().map(|p| PlaylistSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                description: p.description.clone(),
                length: p.len(),
            }),
            uris: projection.uris.clone(),
            images: projection.images.clone(),
            is_playing: self.playback.is_playing,
            current_track: self.playback.current_track.clone(),
            current_position: self
                .playback
                .current_track
                .as_ref()
                .and_then(|track| utils::position_of(&projection, &track.uri)),
        }
    }
}

/// Fetches the default playlist and seeds the shared queue with it.
///
/// The loader runs without holding the lock; whether the queue is still
/// empty is decided under the lock once the answer is there. Loader failures
/// leave the queue untouched.
pub async fn seed_from_loader(shared: &SharedQueue, loader: &dyn DefaultQueueLoader) -> bool {
    let playlist = match loader.load_default().await {
        Ok(Some(playlist)) => playlist,
        Ok(None) => {
            log::debug!("no default playlist available");
            return false;
        }
        Err(e) => {
            log::warn!("failed to load default playlist: {}", e);
            return false;
        }
    };

    shared.lock().await.seed_default(playlist)
}
