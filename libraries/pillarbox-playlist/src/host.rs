//! Playback host abstraction
//!
//! The playlist never renders or decodes anything itself. It instructs a
//! host (a video element, a native player, a test double) and reacts to the
//! host's `ended` and `loadeddata` notifications.

use crate::types::MediaSource;
use serde::{Deserialize, Serialize};

/// Media runtime driven by the playlist
///
/// Calls are fire-and-forget: a failing load surfaces through the host's
/// own error reporting, never through the playlist.
pub trait PlaybackHost {
    /// Load the given sources
    fn set_source(&mut self, sources: Vec<MediaSource>);

    /// Display a poster (or clear it with `None`)
    fn set_poster(&mut self, poster: Option<String>);

    /// Seek to a position in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Whether the loaded content is a live stream
    fn is_live(&self) -> bool;

    /// Start or resume playback
    fn play(&mut self);
}

/// Notifications forwarded from the host to the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Current item played to its end
    Ended,

    /// First frame of the current item is available
    DataLoaded,
}

/// Minimal host double: remembers the first source URL of each load
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StubHost {
    pub loaded: Vec<String>,
    pub poster: Option<String>,
    pub seeks: Vec<f64>,
    pub plays: usize,
    pub position: f64,
    pub live: bool,
}

#[cfg(test)]
impl PlaybackHost for StubHost {
    fn set_source(&mut self, sources: Vec<MediaSource>) {
        self.loaded
            .push(sources.first().map(|source| source.src.clone()).unwrap_or_default());
    }

    fn set_poster(&mut self, poster: Option<String>) {
        self.poster = poster;
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.seeks.push(seconds);
        self.position = seconds;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn is_live(&self) -> bool {
        self.live
    }

    fn play(&mut self) {
        self.plays += 1;
    }
}
