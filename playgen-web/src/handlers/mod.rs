//! HTTP request handlers organized by functionality

pub mod api;
pub mod pages;

// Re-export handler functions
pub use api::{create_player_config, player_config_json};
pub use pages::player_page;
