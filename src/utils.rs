use crate::{
    queue::QueueProjection,
    types::{PlayList, QueueTableRow, Track},
};

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
pub fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut short: String = text.chars().take(max - 1).collect();
    short.push('…');
    short
}

pub fn format_artists(track: &Track, limit: usize) -> String {
    track
        .artists
        .iter()
        .take(limit)
        .map(|artist| artist.name.clone())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds one table row per queue entry, numbered from 1 in playback order.
pub fn queue_table_rows(playlist: &PlayList, projection: &QueueProjection) -> Vec<QueueTableRow> {
    playlist
        .entries()
        .iter()
        .zip(projection.images.iter())
        .enumerate()
        .map(|(i, (item, image))| QueueTableRow {
            position: i + 1,
            title: shorten(&item.track.name, 40),
            artists: format_artists(&item.track, 3),
            uri: item.track.uri.clone(),
            image: if image.is_empty() {
                "-".to_string()
            } else {
                shorten(image, 48)
            },
        })
        .collect()
}

/// Position of the track with `uri` in the queue, if it is queued.
pub fn position_of(projection: &QueueProjection, uri: &str) -> Option<usize> {
    projection.uris.iter().position(|queued| queued == uri)
}
