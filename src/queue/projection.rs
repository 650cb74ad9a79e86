use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::types::PlayList;

/// What the playback engine renders from: one URI and one cover image per
/// queue entry, in queue order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueProjection {
    pub uris: Vec<String>,
    pub images: Vec<String>,
}

impl QueueProjection {
    pub fn from_playlist(playlist: Option<&PlayList>) -> Self {
        let Some(playlist) = playlist else {
            return Self::default();
        };

        let uris = playlist
            .entries()
            .iter()
            .map(|item| item.track.uri.clone())
            .collect();

        // entries without cover art keep their slot so both lists stay aligned
        let images = playlist
            .entries()
            .iter()
            .map(|item| match item.track.preferred_image() {
                Some(url) => url.to_string(),
                None => {
                    log::warn!("track {} has no cover image", item.track.uri);
                    String::new()
                }
            })
            .collect();

        Self { uris, images }
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

/// Lazily computed projection, valid for exactly one playlist version.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    version: u64,
    cached: OnceLock<Arc<QueueProjection>>,
}

impl ProjectionCache {
    pub fn get(&self, playlist: Option<&PlayList>) -> &Arc<QueueProjection> {
        self.cached.get_or_init(|| {
            log::debug!("computing queue projection for version {}", self.version);
            Arc::new(QueueProjection::from_playlist(playlist))
        })
    }

    /// Drops the cached projection and moves on to the next playlist version.
    pub fn invalidate(&mut self) -> u64 {
        self.version += 1;
        self.cached = OnceLock::new();
        self.version
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_computed(&self) -> bool {
        self.cached.get().is_some()
    }
}
