//! # Mix Service Module
//!
//! All API endpoints of the mix player live under `/api/mix`. Each endpoint
//! has its own sub-module holding the handler:
//! - `sources`: lists the full source catalog.
//! - `random`: draws a random audio/video pairing from the catalog.
//! - `custom`: validates and echoes a pairing chosen by the client.

mod custom;
mod random;
mod sources;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all mix-related API endpoints.
const API_PATH: &str = "/api/mix";

/// Configures and returns the Actix `Scope` for all mix-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /sources`**: every catalog entry as a JSON array
///     (`id`, `youtubeLink`, `title`, `artist`, `isVideo`).
///
/// *   **`GET /random`**: `{ "audioId", "videoId" }` where the audio link is
///     drawn from the whole catalog and the video link from the sources that
///     have a clip. `404` when either pool is empty.
///
/// *   **`POST /custom`**: takes `{ "audioId", "videoId" }` and returns it
///     unchanged. `400` when a field is `null` or missing.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/sources", get().to(sources::process))
        .route("/random", get().to(random::process))
        .route("/custom", post().to(custom::process))
}
