//! Identifier and link generation.
//!
//! Two distinct identifiers serve two purposes: the record key (UUID v4)
//! is the store's primary key and the share-link path segment, while the
//! element id (millisecond stamp) is embedded into generated markup so
//! that concurrently open players never collide on DOM ids.

use chrono::Utc;
use uuid::Uuid;

/// Generates a fresh record primary key.
pub fn record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates the DOM element id embedded into generated markup.
pub fn element_id() -> String {
    format!("player_{}", Utc::now().timestamp_millis())
}

/// Builds the stable share link for a record.
pub fn direct_link(base_url: &str, id: &str) -> String {
    format!("{}/player/{id}", base_url.trim_end_matches('/'))
}
