//! Core types for playlist management

use crate::error::{PlaylistError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default window (seconds) during which `previous()` goes back instead of restarting
pub const DEFAULT_PREVIOUS_NAVIGATION_THRESHOLD: f64 = 3.0;

/// Playable source descriptor
///
/// Opaque to the engine: handed to the playback host exactly as received.
/// Keys other than `src` and `type` (key systems, vendor fields, ...) are
/// preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSource {
    /// Media URL
    pub src: String,

    /// MIME type (`type` on the wire)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Remaining keys, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediaSource {
    /// Create a source from its URL and optional MIME type
    pub fn new(src: impl Into<String>, mime_type: Option<&str>) -> Self {
        Self {
            src: src.into(),
            mime_type: mime_type.map(str::to_string),
            extra: Map::new(),
        }
    }
}

/// One playable entry of a playlist
///
/// Items are plain values: equality is structural and duplicates are allowed.
/// Nothing here is validated; an item without sources only fails once the
/// host tries to load it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    /// Ordered source descriptors
    #[serde(default)]
    pub sources: Vec<MediaSource>,

    /// Poster image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    /// Seek target (seconds) applied once the host reports data loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,

    /// Free-form metadata (title, duration, ...), carried but never read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl PlaylistItem {
    /// Create an item from its sources
    pub fn new(sources: Vec<MediaSource>) -> Self {
        Self {
            sources,
            ..Default::default()
        }
    }

    /// Set the poster image reference
    #[must_use]
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    /// Set the seek target (seconds) applied once data is loaded
    #[must_use]
    pub fn with_start_time(mut self, seconds: f64) -> Self {
        self.start_time = Some(seconds);
        self
    }

    /// Attach free-form metadata
    #[must_use]
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepeatMode {
    /// Stop at either end of the playlist
    #[default]
    NoRepeat,

    /// Wrap around at both ends
    RepeatAll,

    /// Replay the current item when it ends
    RepeatOne,
}

impl RepeatMode {
    /// Next mode in toggle order: `NoRepeat -> RepeatAll -> RepeatOne -> NoRepeat`
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::NoRepeat => RepeatMode::RepeatAll,
            RepeatMode::RepeatAll => RepeatMode::RepeatOne,
            RepeatMode::RepeatOne => RepeatMode::NoRepeat,
        }
    }
}

/// Configuration for a playlist engine
///
/// Mirrors the options object web embeds pass to the plugin, hence the
/// camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistConfig {
    /// Items loaded at construction (default: none)
    #[serde(default)]
    pub playlist: Vec<PlaylistItem>,

    /// Initial repeat mode (default: `NO_REPEAT`)
    #[serde(default)]
    pub repeat: RepeatMode,

    /// Advance to the next item when the current one ends (default: false)
    #[serde(default)]
    pub autoadvance: bool,

    /// Seconds after which `previous()` restarts the current item (default: 3)
    #[serde(default = "default_previous_navigation_threshold")]
    pub previous_navigation_threshold: f64,
}

fn default_previous_navigation_threshold() -> f64 {
    DEFAULT_PREVIOUS_NAVIGATION_THRESHOLD
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            playlist: Vec::new(),
            repeat: RepeatMode::NoRepeat,
            autoadvance: false,
            previous_navigation_threshold: DEFAULT_PREVIOUS_NAVIGATION_THRESHOLD,
        }
    }
}

impl PlaylistConfig {
    /// Parse and validate a JSON options object
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        validate_previous_navigation_threshold(self.previous_navigation_threshold)
    }
}

/// A navigation threshold must be a finite, non-negative number of seconds
pub(crate) fn validate_previous_navigation_threshold(seconds: f64) -> Result<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(PlaylistError::InvalidConfig(format!(
            "previousNavigationThreshold must be a non-negative number, got {seconds}"
        )));
    }
    Ok(())
}
