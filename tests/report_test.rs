use serde_json::json;
use spotcsv::report::{FIELDNAMES, playlist_rows, playlist_to_csv, write_rows};
use spotcsv::types::{Playlist, TrackRow};

const HEADER: &str = "Track Name,Artist(s),Album,Duration (ms),URL\r\n";

// Helper function to build a playlist item the way Spotify returns it
fn track_json(name: &str, artists: &[&str], album: &str, duration_ms: u64, url: &str) -> serde_json::Value {
    json!({
        "added_at": "2024-01-01T00:00:00Z",
        "track": {
            "id": "ignored",
            "name": name,
            "artists": artists.iter().map(|a| json!({ "name": a, "id": "x" })).collect::<Vec<_>>(),
            "album": { "name": album, "album_type": "album" },
            "duration_ms": duration_ms,
            "external_urls": { "spotify": url },
            "popularity": 42
        }
    })
}

fn playlist(items: Vec<serde_json::Value>) -> Playlist {
    serde_json::from_value(json!({
        "id": "pl",
        "name": "Test playlist",
        "tracks": { "items": items, "total": 0 }
    }))
    .expect("playlist json")
}

#[test]
fn test_fieldnames_order() {
    assert_eq!(
        FIELDNAMES,
        ["Track Name", "Artist(s)", "Album", "Duration (ms)", "URL"]
    );
}

#[test]
fn test_empty_playlist_has_only_header() {
    let csv = playlist_to_csv(&playlist(vec![])).expect("csv");
    assert_eq!(csv, HEADER);
}

#[test]
fn test_two_tracks_give_three_lines() {
    let csv = playlist_to_csv(&playlist(vec![
        track_json("Song One", &["Alice", "Bob"], "First Album", 201000, "https://open.spotify.com/track/1"),
        track_json("Song Two", &["Carol"], "Second", 185500, "https://open.spotify.com/track/2"),
    ]))
    .expect("csv");

    let lines: Vec<&str> = csv.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Track Name,Artist(s),Album,Duration (ms),URL");
    assert_eq!(
        lines[1],
        "Song One,\"Alice, Bob\",First Album,201000,https://open.spotify.com/track/1"
    );
    assert_eq!(
        lines[2],
        "Song Two,Carol,Second,185500,https://open.spotify.com/track/2"
    );
    assert!(csv.ends_with("\r\n"));
}

#[test]
fn test_order_is_preserved() {
    let rows = playlist_rows(&playlist(vec![
        track_json("Zeta", &["A"], "X", 1, "u1"),
        track_json("Alpha", &["B"], "Y", 2, "u2"),
        track_json("Mid", &["C"], "Z", 3, "u3"),
    ]));
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_fields_are_quoted_when_needed() {
    let csv = write_rows(&[TrackRow {
        name: "Say \"Hi\", now".to_string(),
        artists: "Solo".to_string(),
        album: "Line\nBreak".to_string(),
        duration_ms: 1000,
        url: "https://open.spotify.com/track/q".to_string(),
    }])
    .expect("csv");

    assert_eq!(
        csv,
        format!(
            "{HEADER}\"Say \"\"Hi\"\", now\",Solo,\"Line\nBreak\",1000,https://open.spotify.com/track/q\r\n"
        )
    );
}

#[test]
fn test_missing_track_is_skipped() {
    let csv = playlist_to_csv(&playlist(vec![
        json!({ "track": null }),
        track_json("Kept", &["A"], "B", 10, "u"),
    ]))
    .expect("csv");
    assert_eq!(csv, format!("{HEADER}Kept,A,B,10,u\r\n"));
}

#[test]
fn test_track_without_artists_has_empty_cell() {
    let rows = playlist_rows(&playlist(vec![track_json("Lonely", &[], "B", 10, "u")]));
    assert_eq!(rows[0].artists, "");
}

#[test]
fn test_track_without_album_does_not_parse() {
    let result = serde_json::from_value::<Playlist>(json!({
        "tracks": { "items": [ {
            "track": {
                "name": "No album",
                "artists": [],
                "duration_ms": 1,
                "external_urls": { "spotify": "u" }
            }
        } ] }
    }));
    assert!(result.is_err());
}

#[test]
fn test_output_is_deterministic() {
    let pl = playlist(vec![
        track_json("One", &["A", "B", "C"], "X", 1, "u1"),
        track_json("Two", &["D"], "Y", 2, "u2"),
    ]);
    assert_eq!(playlist_to_csv(&pl).expect("csv"), playlist_to_csv(&pl).expect("csv"));
}

#[test]
fn test_local_file_has_empty_url_cell() {
    let pl: Playlist = serde_json::from_value(json!({
        "tracks": { "items": [
            {
                "is_local": true,
                "track": {
                    "name": "Demo",
                    "artists": [{ "name": "Me" }],
                    "album": { "name": "Home" },
                    "duration_ms": 1000,
                    "external_urls": {}
                }
            },
            {
                "is_local": true,
                "track": {
                    "name": "Bare",
                    "artists": [],
                    "album": { "name": "Home" },
                    "duration_ms": 2000
                }
            }
        ] }
    }))
    .expect("playlist json");

    let csv = playlist_to_csv(&pl).expect("csv");
    assert_eq!(csv, format!("{HEADER}Demo,Me,Home,1000,\r\nBare,,Home,2000,\r\n"));
}
