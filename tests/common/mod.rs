#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tunequeue::{
    queue::{CollaboratorError, QueueController, QueueSettings, UsageReporter},
    types::{Album, Artist, Image, PlayList, Track, TrackInfo},
};

// Helper function to create a test track with one cover image
pub fn track(n: usize) -> Track {
    track_with_images(
        &format!("spotify:track:{}", n),
        &[&format!("https://covers.test/{}-640.jpg", n)],
    )
}

pub fn track_with_images(uri: &str, urls: &[&str]) -> Track {
    Track {
        id: uri.rsplit(':').next().unwrap_or(uri).to_string(),
        uri: uri.to_string(),
        name: format!("Title {}", uri),
        artists: vec![Artist {
            id: "artist".to_string(),
            name: "Some Artist".to_string(),
        }],
        album: Album {
            id: "album".to_string(),
            name: "Some Album".to_string(),
            images: urls.iter().map(|url| Image::from_url(*url)).collect(),
        },
        duration_ms: 180_000,
    }
}

// Helper function to create a playlist of `n` tracks numbered from 0
pub fn playlist(id: &str, n: usize) -> PlayList {
    PlayList::new(
        id.to_string(),
        format!("Playlist {}", id),
        format!("{} curated tracks", n),
        (0..n).map(track).collect(),
    )
}

pub fn track_info(n: usize) -> TrackInfo {
    TrackInfo {
        id: n.to_string(),
        uri: format!("spotify:track:info{}", n),
        title: format!("Found {}", n),
        artists: vec!["Searcher".to_string(), "Guest".to_string()],
        album_title: "Search Album".to_string(),
        cover_urls: vec![
            format!("https://covers.test/info{}-640.jpg", n),
            format!("https://covers.test/info{}-300.jpg", n),
        ],
    }
}

pub fn uris_of(playlist: &PlayList) -> Vec<String> {
    playlist
        .entries()
        .iter()
        .map(|item| item.track.uri.clone())
        .collect()
}

#[derive(Default)]
pub struct CountingReporter {
    count: AtomicUsize,
}

impl CountingReporter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UsageReporter for CountingReporter {
    async fn report_play(&self) -> Result<(), CollaboratorError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct FailingReporter {
    attempts: AtomicUsize,
}

impl FailingReporter {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UsageReporter for FailingReporter {
    async fn report_play(&self) -> Result<(), CollaboratorError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CollaboratorError::Status(503))
    }
}

pub fn controller(reporter: Arc<dyn UsageReporter>) -> QueueController {
    QueueController::new(reporter, QueueSettings::default())
}
