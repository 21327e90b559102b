//! Playgen Core - Player document generation and record storage
//!
//! This crate provides the building blocks for the embed generator:
//! player and provider types, input validation, the per-variant HTML
//! document renderer, data-URI iframe encoding, identifier generation,
//! and the configuration record store.

pub mod config;
pub mod embed;
pub mod ids;
pub mod player;
pub mod render;
pub mod store;

// Re-export main types for convenient access
pub use config::{AssetConfig, DeploymentConfig, PlaygenConfig, ServerConfig};
pub use embed::EmbedError;
pub use player::{PlayerConfig, PlayerRequest, PlayerType, Provider, ValidationError};
pub use render::RenderContext;
pub use store::{ConfigStore, MemoryConfigStore, StoreError};

/// Core errors that can bubble up from any Playgen subsystem.
#[derive(Debug, thiserror::Error)]
pub enum PlaygenError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Embed error: {0}")]
    Embed(#[from] EmbedError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlaygenError {
    /// Checks if this error is due to user input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, PlaygenError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, PlaygenError>;
