//! CSV rendering of playlist tracks.
//!
//! One row per track in the order the provider returned them, preceded by a
//! fixed header row. Rows are comma separated, CRLF terminated and quoted only
//! where needed.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{
    error::ExportError,
    types::{Playlist, TrackRow},
    warning,
};

pub const FIELDNAMES: [&str; 5] = ["Track Name", "Artist(s)", "Album", "Duration (ms)", "URL"];

/// Flattens the playlist items into rows, skipping items without a track.
pub fn playlist_rows(playlist: &Playlist) -> Vec<TrackRow> {
    let mut skipped = 0usize;
    let rows: Vec<TrackRow> = playlist
        .tracks
        .items
        .iter()
        .filter_map(|item| match &item.track {
            Some(track) => Some(TrackRow::from(track)),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warning!("Skipped {} playlist items without track data", skipped);
    }
    rows
}

/// Serializes rows to CSV text. The header is written even for no rows.
pub fn write_rows(rows: &[TrackRow]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(FIELDNAMES)?;
    for row in rows {
        let duration = row.duration_ms.to_string();
        writer.write_record([
            row.name.as_str(),
            row.artists.as_str(),
            row.album.as_str(),
            duration.as_str(),
            row.url.as_str(),
        ])?;
    }
    writer.flush().map_err(|e| ExportError::Report(e.to_string()))?;

    let buffer = writer
        .into_inner()
        .map_err(|e| ExportError::Report(e.into_error().to_string()))?;
    String::from_utf8(buffer).map_err(|e| ExportError::Report(e.to_string()))
}

/// Renders a whole playlist as CSV text.
pub fn playlist_to_csv(playlist: &Playlist) -> Result<String, ExportError> {
    write_rows(&playlist_rows(playlist))
}
