mod common;

use common::{playlist, track, track_info, track_with_images, uris_of};
use serde_json::json;
use tunequeue::source::*;

#[test]
fn test_reorder_moves_selected_entry_first() {
    let p = playlist("p", 5);

    for idx in 0..5 {
        let rotated = reorder(&p, idx);
        assert_eq!(rotated.entries()[0], p.entries()[idx]);
        assert_eq!(rotated.len(), 5);
    }
}

#[test]
fn test_reorder_is_a_rotation() {
    let p = playlist("p", 7);
    let n = p.len();

    for idx in 1..n {
        let back = reorder(&reorder(&p, idx), n - idx);
        assert_eq!(back, p);
    }
}

#[test]
fn test_reorder_wraps_prefix_behind_the_end() {
    let p = playlist("p", 5);
    let rotated = reorder(&p, 3);

    assert_eq!(
        uris_of(&rotated),
        vec![
            "spotify:track:3",
            "spotify:track:4",
            "spotify:track:0",
            "spotify:track:1",
            "spotify:track:2",
        ]
    );
}

#[test]
fn test_reorder_at_zero_is_idempotent() {
    let p = playlist("p", 6);

    for idx in 0..6 {
        let once = reorder(&p, idx);
        assert_eq!(reorder(&once, 0), once);
    }
}

#[test]
fn test_reorder_out_of_range_keeps_order() {
    let p = playlist("p", 3);

    assert_eq!(reorder(&p, 3), p);
    assert_eq!(reorder(&p, 42), p);
    assert_eq!(reorder(&playlist("empty", 0), 1), playlist("empty", 0));
}

#[test]
fn test_reorder_keeps_identity_and_input() {
    let p = playlist("p", 4);
    let before = p.clone();
    let rotated = reorder(&p, 2);

    assert_eq!(p, before);
    assert_eq!(rotated.id, p.id);
    assert_eq!(rotated.name, p.name);
    assert_eq!(rotated.description, p.description);
}

#[test]
fn test_track_to_playlist() {
    let t = track_with_images(
        "spotify:track:solo",
        &[
            "https://covers.test/solo-640.jpg",
            "https://covers.test/solo-300.jpg",
            "https://covers.test/solo-64.jpg",
        ],
    );
    let p = track_to_playlist(t.clone());

    assert_eq!(p.len(), 1);
    assert_eq!(p.entries()[0].track, t);
    assert_eq!(p.id, t.id);
    assert_eq!(p.description, format!("{} - Some Artist", t.name));
}

#[test]
fn test_track_info_conversion_preserves_fields() {
    let info = track_info(1);
    let t = track_info_to_track(info.clone());

    assert_eq!(t.uri, info.uri);
    assert_eq!(t.name, info.title);
    assert_eq!(t.artist_names(), "Searcher, Guest");
    assert_eq!(t.album.name, info.album_title);
    assert_eq!(t.preferred_image(), Some("https://covers.test/info1-640.jpg"));
    assert_eq!(t.album.images.len(), 2);
}

#[test]
fn test_track_infos_to_playlist_keeps_order() {
    let infos: Vec<_> = (0..4).map(track_info).collect();
    let p = track_infos_to_playlist(infos.clone());

    assert_eq!(p.id, SEARCH_RESULTS_ID);
    assert_eq!(p.name, SEARCH_RESULTS_NAME);
    assert_eq!(p.description, "4 tracks");
    let expected: Vec<String> = infos.iter().map(|i| i.uri.clone()).collect();
    assert_eq!(uris_of(&p), expected);
}

#[test]
fn test_normalize_dispatches_every_selection() {
    let p = playlist("p", 3);
    assert_eq!(normalize(p.clone().into(), 0), p);

    let t = track(9);
    let single = normalize(t.clone().into(), 0);
    assert_eq!(single.len(), 1);
    assert_eq!(single.entries()[0].track, t);

    let infos: Vec<_> = (0..3).map(track_info).collect();
    let searched = normalize(infos.into(), 1);
    assert_eq!(
        uris_of(&searched),
        vec![
            "spotify:track:info1",
            "spotify:track:info2",
            "spotify:track:info0",
        ]
    );
}

#[test]
fn test_normalize_single_track_ignores_start_past_end() {
    let single = normalize(Selection::Track(track(1)), 4);
    assert_eq!(single.len(), 1);
    assert_eq!(single.entries()[0].track.uri, "spotify:track:1");
}

#[test]
fn test_selection_from_json_recognizes_shapes() {
    let p = playlist("p", 2);
    let as_playlist = Selection::from_json(serde_json::to_value(&p).unwrap()).unwrap();
    assert_eq!(as_playlist, Selection::Playlist(p));

    let t = track(3);
    let as_track = Selection::from_json(serde_json::to_value(&t).unwrap()).unwrap();
    assert_eq!(as_track, Selection::Track(t));

    let infos = vec![track_info(0), track_info(1)];
    let as_infos = Selection::from_json(serde_json::to_value(&infos).unwrap()).unwrap();
    assert_eq!(as_infos, Selection::TrackInfos(infos));
}

#[test]
fn test_selection_from_json_accepts_spotify_payload() {
    let raw = r#"{
        "uri": "spotify:track:6rqhFgbbKwnb9MLmUQDhG6",
        "name": "Speak to Me",
        "artists": [{ "id": "0k17h0D3J5VfsdmQ1iZtE9", "name": "Pink Floyd" }],
        "album": {
            "name": "The Dark Side of the Moon",
            "images": [
                { "url": "https://i.scdn.co/image/large", "height": 640, "width": 640 },
                { "url": "https://i.scdn.co/image/small", "height": 64, "width": 64 }
            ]
        }
    }"#;

    match Selection::from_json_str(raw).unwrap() {
        Selection::Track(t) => {
            assert_eq!(t.uri, "spotify:track:6rqhFgbbKwnb9MLmUQDhG6");
            assert_eq!(t.preferred_image(), Some("https://i.scdn.co/image/large"));
            assert_eq!(t.duration_ms, 0);
        }
        other => panic!("expected a track, got {}", other.kind()),
    }
}

#[test]
fn test_selection_from_json_rejects_unknown_shapes() {
    for value in [
        json!({ "name": "neither" }),
        json!("spotify:track:1"),
        json!(42),
        json!(null),
    ] {
        assert!(matches!(
            Selection::from_json(value),
            Err(SelectionError::UnrecognizedShape)
        ));
    }
}

#[test]
fn test_selection_from_json_reports_malformed_payloads() {
    let broken_track = json!({ "album": { "images": [] } });
    assert!(matches!(
        Selection::from_json(broken_track),
        Err(SelectionError::Malformed(_))
    ));

    let broken_list = json!([{ "title": "no uri" }]);
    assert!(matches!(
        Selection::from_json(broken_list),
        Err(SelectionError::Malformed(_))
    ));

    assert!(matches!(
        Selection::from_json_str("{ not json"),
        Err(SelectionError::Malformed(_))
    ));
}
