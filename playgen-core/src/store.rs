//! Record store for generated player configurations.
//!
//! Defines the store interface and the in-memory implementation. `create`
//! is the only write path: it renders the document, wraps it into the
//! iframe snippet, assembles the full record, and inserts it under a
//! freshly generated key. Records are immutable once stored.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::{AssetConfig, DeploymentConfig};
use crate::embed;
use crate::ids;
use crate::player::{PlayerConfig, PlayerRequest};
use crate::render::{RenderContext, render_document};

/// Storage operations for player configuration records.
///
/// Validation of the request is the caller's responsibility; `create`
/// treats a well-formed request as a precondition.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Generates and stores a new player configuration.
    ///
    /// Renders the document, encodes the iframe snippet, and inserts the
    /// assembled record. Either the record is fully assembled and
    /// inserted, or nothing is stored.
    ///
    /// # Errors
    ///
    /// - `StoreError::DuplicateId` - If the generated key already exists
    async fn create(&self, request: PlayerRequest) -> Result<PlayerConfig, StoreError>;

    /// Looks up a record by id. Absent ids yield `None`, never an error.
    async fn player_config(&self, id: &str) -> Option<PlayerConfig>;
}

/// Errors that occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Freshly generated key collided with an existing record
    #[error("record id {id} already exists")]
    DuplicateId {
        /// The colliding record key
        id: String,
    },
}

/// In-memory store keyed by record id.
///
/// Process-lifetime storage with no eviction and no persistence across
/// restarts; durability is out of scope.
pub struct MemoryConfigStore {
    configs: RwLock<HashMap<String, PlayerConfig>>,
    deployment: DeploymentConfig,
    assets: AssetConfig,
}

impl MemoryConfigStore {
    /// Creates an empty store using the given deployment and asset
    /// configuration.
    pub fn new(deployment: DeploymentConfig, assets: AssetConfig) -> Self {
        Self {
            configs: RwLock::new(HashMap::new()),
            deployment,
            assets,
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.configs.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.configs.read().await.is_empty()
    }
}

impl Default for MemoryConfigStore {
    fn default() -> Self {
        Self::new(DeploymentConfig::default(), AssetConfig::default())
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn create(&self, request: PlayerRequest) -> Result<PlayerConfig, StoreError> {
        let id = ids::record_id();
        let element_id = ids::element_id();

        let document = render_document(&RenderContext {
            player_type: request.player_type,
            video_url: &request.video_url,
            autoplay: request.autoplay,
            controls: request.controls,
            element_id: &element_id,
            assets: &self.assets,
        });

        let iframe_code = embed::iframe_snippet(&document);
        let direct_link = ids::direct_link(&self.deployment.base_url, &id);
        let format = request
            .format
            .clone()
            .unwrap_or_else(|| request.player_type.supported_formats().to_string());

        let config = PlayerConfig {
            id: id.clone(),
            player_type: request.player_type,
            provider: request.provider,
            video_url: request.video_url,
            autoplay: request.autoplay,
            controls: request.controls,
            format: Some(format),
            iframe_code,
            direct_link,
            created_at: Utc::now(),
        };

        let mut configs = self.configs.write().await;
        if configs.contains_key(&id) {
            return Err(StoreError::DuplicateId { id });
        }
        configs.insert(id.clone(), config.clone());
        debug!(id = %id, player_type = %config.player_type, "stored player configuration");

        Ok(config)
    }

    async fn player_config(&self, id: &str) -> Option<PlayerConfig> {
        self.configs.read().await.get(id).cloned()
    }
}
