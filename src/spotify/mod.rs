//! # Spotify Integration Module
//!
//! Thin client for the two Spotify Web API calls an export needs:
//!
//! ```text
//! Export pipeline
//!      ↓
//! auth::request_token      POST {token_url}              (client credentials grant)
//!      ↓ AccessToken
//! playlist::get_playlist   GET  {api_url}/playlists/{id} (bearer token)
//! ```
//!
//! Both calls share one `reqwest::Client` that carries the configured
//! timeout. Neither call retries. Any non-success status, network error or
//! unexpected body is turned into an [`ExportError`](crate::error::ExportError)
//! whose cause is only ever logged.

pub mod auth;
pub mod playlist;
