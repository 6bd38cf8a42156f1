//! # API Module
//!
//! HTTP endpoints of the playlist export service.
//!
//! ## Endpoints
//!
//! - [`playlist`] - `GET /api/playlist?url=<playlist-url>` answers
//!   `{"csv": "<CSV text>"}` or `{"error": "<message>"}`
//! - [`playlist_download`] - `GET /api/playlist/download?url=<playlist-url>`
//!   answers the CSV as a `text/csv` attachment
//! - [`health`] - `GET /health` answers the status and crate version
//!
//! | Status | Body                                                     |
//! |--------|----------------------------------------------------------|
//! | 400    | `{"error": "Missing 'url' parameter"}`                   |
//! | 400    | `{"error": "Invalid Spotify playlist URL"}`              |
//! | 500    | `{"error": "Failed to authenticate with Spotify"}`       |
//! | 500    | `{"error": "Failed to fetch playlist from Spotify"}`     |
//!
//! Handlers receive the shared [`ExportContext`](crate::export::ExportContext)
//! through an `axum::Extension` layer. CORS headers are added by the router
//! in [`crate::server`].

mod health;
mod playlist;

pub use health::health;
pub use playlist::{DOWNLOAD_FILENAME, playlist, playlist_download};
