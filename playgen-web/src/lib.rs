//! Playgen Web - HTTP API and player page server
//!
//! Exposes the generation API (`POST /api/player-config`), record lookup
//! (`GET /api/player-config/{id}`), and the direct-link playback page
//! (`GET /player/{id}`).

pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};
