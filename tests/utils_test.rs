mod common;

use common::{playlist, track, track_with_images};
use tunequeue::queue::QueueProjection;
use tunequeue::types::PlayList;
use tunequeue::utils::*;

#[test]
fn test_shorten() {
    assert_eq!(shorten("short", 10), "short");
    assert_eq!(shorten("exactly10!", 10), "exactly10!");
    assert_eq!(shorten("a bit too long", 6), "a bit…");
    assert_eq!(shorten("anything", 0), "");

    // counts characters, not bytes
    assert_eq!(shorten("ñandú ñandú", 5), "ñand…");
}

#[test]
fn test_format_artists() {
    let mut t = track(1);
    assert_eq!(format_artists(&t, 3), "Some Artist");

    t.artists.push(t.artists[0].clone());
    t.artists[1].name = "Second".to_string();
    t.artists.push(t.artists[0].clone());
    t.artists[2].name = "Third".to_string();
    t.artists.push(t.artists[0].clone());
    t.artists[3].name = "Fourth".to_string();

    assert_eq!(format_artists(&t, 3), "Some Artist,Second,Third");

    t.artists.clear();
    assert_eq!(format_artists(&t, 3), "");
}

#[test]
fn test_queue_table_rows_follow_playback_order() {
    let p = playlist("p", 3);
    let projection = QueueProjection::from_playlist(Some(&p));
    let rows = queue_table_rows(&p, &projection);

    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.position, i + 1);
        assert_eq!(row.uri, format!("spotify:track:{}", i));
        assert_eq!(row.image, format!("https://covers.test/{}-640.jpg", i));
        assert_eq!(row.artists, "Some Artist");
    }
}

#[test]
fn test_queue_table_rows_mark_missing_cover() {
    let p = PlayList::new(
        "p".to_string(),
        "P".to_string(),
        "one bare track".to_string(),
        vec![track_with_images("spotify:track:bare", &[])],
    );
    let projection = QueueProjection::from_playlist(Some(&p));
    let rows = queue_table_rows(&p, &projection);

    assert_eq!(rows[0].image, "-");
}

#[test]
fn test_position_of() {
    let p = playlist("p", 4);
    let projection = QueueProjection::from_playlist(Some(&p));

    assert_eq!(position_of(&projection, "spotify:track:0"), Some(0));
    assert_eq!(position_of(&projection, "spotify:track:3"), Some(3));
    assert_eq!(position_of(&projection, "spotify:track:99"), None);
    assert_eq!(
        position_of(&QueueProjection::from_playlist(None), "spotify:track:0"),
        None
    );
}

#[test]
fn test_projection_of_absent_playlist_is_empty() {
    let projection = QueueProjection::from_playlist(None);

    assert!(projection.is_empty());
    assert!(projection.images.is_empty());
}
