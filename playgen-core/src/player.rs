//! Player configuration types and input validation.
//!
//! Defines the wire-level request shape, the persisted record, and the
//! enumerations of supported playback libraries and video providers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported playback libraries.
///
/// Each variant selects a distinct generated HTML document. Unknown wire
/// values are a deserialization failure, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    /// Fluid Player (open-source HTML5 player with VAST support)
    #[serde(rename = "fluidplayer")]
    FluidPlayer,
    /// JW Player (commercial player, cloud-hosted library)
    #[serde(rename = "jwpl", alias = "jwplayer")]
    JwPlayer,
    /// Plyr (lightweight accessible HTML5 player)
    #[serde(rename = "plyr")]
    Plyr,
    /// Native `<video>` element, no external library
    #[serde(rename = "video", alias = "html5video")]
    Html5Video,
}

impl PlayerType {
    /// Canonical wire name for this player type.
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerType::FluidPlayer => "fluidplayer",
            PlayerType::JwPlayer => "jwpl",
            PlayerType::Plyr => "plyr",
            PlayerType::Html5Video => "video",
        }
    }

    /// Human-readable hint listing the formats this player handles.
    ///
    /// Informational only, used to fill the optional `format` field when
    /// the caller omits it.
    pub fn supported_formats(self) -> &'static str {
        match self {
            PlayerType::FluidPlayer => "MP4, WebM, HLS",
            PlayerType::JwPlayer => "MP4, HLS, DASH",
            PlayerType::Plyr => "MP4, WebM, YouTube, Vimeo",
            PlayerType::Html5Video => "MP4, WebM, OGV",
        }
    }
}

impl std::str::FromStr for PlayerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fluidplayer" => Ok(PlayerType::FluidPlayer),
            "jwpl" | "jwplayer" => Ok(PlayerType::JwPlayer),
            "plyr" => Ok(PlayerType::Plyr),
            "video" | "html5video" => Ok(PlayerType::Html5Video),
            _ => Err(format!("unknown player type: {s}")),
        }
    }
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared source category of the video.
///
/// Captured and stored for bookkeeping; it does not transform the video
/// URL, which every renderer treats as an opaque direct media source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Google Drive hosted file
    #[serde(rename = "gdrive", alias = "google-drive")]
    GoogleDrive,
    /// Random sample asset
    #[serde(rename = "rand", alias = "random-sample")]
    RandomSample,
    /// YouTube video
    #[serde(rename = "yt", alias = "youtube")]
    YouTube,
}

impl Provider {
    /// Canonical wire name for this provider.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::GoogleDrive => "gdrive",
            Provider::RandomSample => "rand",
            Provider::YouTube => "yt",
        }
    }
}

/// Generation request as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    /// Playback library to generate a document for
    pub player_type: PlayerType,
    /// Declared video source category
    pub provider: Provider,
    /// Direct media URL embedded into the generated document
    pub video_url: String,
    /// Start playback automatically
    #[serde(default)]
    pub autoplay: bool,
    /// Show playback controls
    #[serde(default = "default_controls")]
    pub controls: bool,
    /// Optional supported-formats hint; computed from the player type
    /// when absent
    #[serde(default)]
    pub format: Option<String>,
}

fn default_controls() -> bool {
    true
}

impl PlayerRequest {
    /// Checks field-level constraints not already enforced by the types.
    ///
    /// # Errors
    ///
    /// - `ValidationError` - If `video_url` is empty or whitespace
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.video_url.trim().is_empty() {
            return Err(ValidationError {
                field: "videoUrl",
                message: "Please enter a video URL".to_string(),
            });
        }
        Ok(())
    }
}

/// Field-level input validation failure.
#[derive(Debug, Clone, thiserror::Error, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Wire name of the offending field
    pub field: &'static str,
    /// Human-readable description of the constraint
    pub message: String,
}

/// Persisted player configuration record.
///
/// Assembled once at creation and immutable afterwards: `iframe_code` and
/// `direct_link` stay consistent with the input fields for the lifetime
/// of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Primary key, assigned exactly once at creation
    pub id: String,
    /// Playback library the document was generated for
    pub player_type: PlayerType,
    /// Declared video source category
    pub provider: Provider,
    /// Direct media URL embedded into the document
    pub video_url: String,
    /// Start playback automatically
    pub autoplay: bool,
    /// Show playback controls
    pub controls: bool,
    /// Supported-formats hint
    pub format: Option<String>,
    /// Data-URI iframe snippet wrapping the generated document
    pub iframe_code: String,
    /// Stable share link serving the decoded document
    pub direct_link: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
