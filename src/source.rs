//! Source normalization.
//!
//! Every selection a user can make (a playlist, a single track or a list of
//! search results) is turned into one canonical [`PlayList`]. The conversion is
//! pure: inputs are never mutated and the same input always yields the same
//! playlist.
//!
//! After conversion the playlist is rotated so that playback starts at the
//! requested index. Rotation keeps every entry: the entries before the start
//! index are moved behind the last one.

use std::fmt;

use serde_json::Value;

use crate::types::{Album, Artist, Image, PlayList, Track, TrackInfo};

pub const SEARCH_RESULTS_ID: &str = "search-results";
pub const SEARCH_RESULTS_NAME: &str = "Search results";

/// A selection made on one of the selection surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Playlist(PlayList),
    Track(Track),
    TrackInfos(Vec<TrackInfo>),
}

impl From<PlayList> for Selection {
    fn from(playlist: PlayList) -> Self {
        Selection::Playlist(playlist)
    }
}

impl From<Track> for Selection {
    fn from(track: Track) -> Self {
        Selection::Track(track)
    }
}

impl From<Vec<TrackInfo>> for Selection {
    fn from(infos: Vec<TrackInfo>) -> Self {
        Selection::TrackInfos(infos)
    }
}

enum Shape {
    Playlist,
    Track,
    TrackInfos,
}

#[derive(Debug)]
pub enum SelectionError {
    /// The payload is none of playlist, track or track list.
    UnrecognizedShape,
    /// The payload has a known shape but could not be decoded.
    Malformed(serde_json::Error),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnrecognizedShape => write!(
                f,
                "selection is neither a playlist, a track nor a list of tracks"
            ),
            SelectionError::Malformed(e) => write!(f, "malformed selection: {}", e),
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<serde_json::Error> for SelectionError {
    fn from(err: serde_json::Error) -> Self {
        SelectionError::Malformed(err)
    }
}

impl Selection {
    /// Resolves an untyped JSON payload into a selection.
    ///
    /// Objects carrying a `description` are playlists, objects carrying an
    /// `album` are tracks and arrays are lists of track descriptors.
    pub fn from_json(value: Value) -> Result<Self, SelectionError> {
        let shape = match &value {
            Value::Array(_) => Shape::TrackInfos,
            Value::Object(map) if map.contains_key("description") => Shape::Playlist,
            Value::Object(map) if map.contains_key("album") => Shape::Track,
            _ => return Err(SelectionError::UnrecognizedShape),
        };

        Ok(match shape {
            Shape::Playlist => Selection::Playlist(serde_json::from_value(value)?),
            Shape::Track => Selection::Track(serde_json::from_value(value)?),
            Shape::TrackInfos => Selection::TrackInfos(serde_json::from_value(value)?),
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SelectionError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(value)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Playlist(_) => "playlist",
            Selection::Track(_) => "track",
            Selection::TrackInfos(_) => "track list",
        }
    }
}

/// Wraps a single track into a one-entry playlist.
pub fn track_to_playlist(track: Track) -> PlayList {
    let description = if track.artists.is_empty() {
        track.name.clone()
    } else {
        format!("{} - {}", track.name, track.artist_names())
    };

    PlayList::new(
        track.id.clone(),
        track.name.clone(),
        description,
        vec![track],
    )
}

pub fn track_info_to_track(info: TrackInfo) -> Track {
    Track {
        id: info.id,
        uri: info.uri,
        name: info.title,
        artists: info
            .artists
            .into_iter()
            .map(|name| Artist {
                id: String::new(),
                name,
            })
            .collect(),
        album: Album {
            id: String::new(),
            name: info.album_title,
            images: info.cover_urls.into_iter().map(Image::from_url).collect(),
        },
        duration_ms: 0,
    }
}

/// Converts search results into a playlist, keeping their order.
pub fn track_infos_to_playlist(infos: Vec<TrackInfo>) -> PlayList {
    let description = format!("{} tracks", infos.len());
    let tracks = infos.into_iter().map(track_info_to_track).collect();

    PlayList::new(
        SEARCH_RESULTS_ID.to_string(),
        SEARCH_RESULTS_NAME.to_string(),
        description,
        tracks,
    )
}

/// Rotates the playlist so the entry at `idx` comes first.
///
/// An index past the end leaves the order untouched.
pub fn reorder(playlist: &PlayList, idx: usize) -> PlayList {
    rotate(playlist.clone(), idx)
}

fn rotate(mut playlist: PlayList, idx: usize) -> PlayList {
    if idx < playlist.len() {
        playlist.tracks.items.rotate_left(idx);
    } else if idx > 0 {
        log::debug!(
            "start index {} out of range for playlist {} ({} entries), keeping order",
            idx,
            playlist.id,
            playlist.len()
        );
    }
    playlist
}

/// Converts any selection into the canonical playlist starting at `idx`.
pub fn normalize(selection: Selection, idx: usize) -> PlayList {
    let playlist = match selection {
        Selection::Playlist(playlist) => playlist,
        Selection::Track(track) => track_to_playlist(track),
        Selection::TrackInfos(infos) => track_infos_to_playlist(infos),
    };

    rotate(playlist, idx)
}
