use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

impl Image {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            height: None,
            width: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Cover art, largest first.
    #[serde(default)]
    pub images: Vec<Image>,
}

/// One playable unit, in the Spotify Web API track shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Album,
    #[serde(default)]
    pub duration_ms: u64,
}

impl Track {
    /// URL of the preferred cover image, the first one of the album.
    pub fn preferred_image(&self) -> Option<&str> {
        self.album.images.first().map(|image| image.url.as_str())
    }

    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Lightweight track descriptor as returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    #[serde(default)]
    pub id: String,
    pub uri: String,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub album_title: String,
    #[serde(default)]
    pub cover_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub items: Vec<PlaylistItem>,
}

/// The canonical queue. Item order is playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayList {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tracks: PlaylistTracks,
}

impl PlayList {
    pub fn new(id: String, name: String, description: String, tracks: Vec<Track>) -> Self {
        Self {
            id,
            name,
            description,
            tracks: PlaylistTracks {
                items: tracks
                    .into_iter()
                    .map(|track| PlaylistItem { track })
                    .collect(),
            },
        }
    }

    pub fn entries(&self) -> &[PlaylistItem] {
        &self.tracks.items
    }

    pub fn len(&self) -> usize {
        self.tracks.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.items.is_empty()
    }
}

/// Event sent by the playback engine when it starts playing a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackEvent {
    pub track: Track,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_track: Option<Track>,
}

/// Ambient identity of the listener, used by the HTTP collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Session {
    pub fn new(user_id: String, access_token: String, expires_in: u64) -> Self {
        Self {
            user_id,
            access_token,
            expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    /// Sessions without an expiry (`expires_in == 0`) never expire.
    pub fn is_expired(&self) -> bool {
        if self.expires_in == 0 {
            return false;
        }
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at.saturating_add(self.expires_in)
    }
}

#[derive(Tabled)]
pub struct QueueTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artists: String,
    pub uri: String,
    pub image: String,
}
