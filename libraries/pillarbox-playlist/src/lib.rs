//! Pillarbox - Playlist Engine
//!
//! Platform-agnostic playlist management for Pillarbox media players.
//!
//! This crate provides:
//! - Ordered playlist with a current-item cursor
//! - Navigation (select, next, previous with restart threshold)
//! - Index-stable mutations (load, push, splice, clear, reverse, sort, shuffle)
//! - Repeat modes (No repeat, All, One) and autoadvance
//! - Change notifications for views (callbacks or drained queue)
//!
//! # Architecture
//!
//! `pillarbox-playlist` never renders or decodes media. The media runtime is
//! injected through the [`PlaybackHost`] trait and its `ended` / `loadeddata`
//! notifications are fed back with [`Playlist::handle_host_event`].
//!
//! # Example: Basic Navigation
//!
//! ```rust
//! use pillarbox_playlist::{
//!     MediaSource, PlaybackHost, Playlist, PlaylistConfig, PlaylistItem, RepeatMode,
//! };
//!
//! // Implement PlaybackHost for your platform
//! #[derive(Default)]
//! struct VideoElement {
//!     src: Vec<MediaSource>,
//!     time: f64,
//! }
//!
//! impl PlaybackHost for VideoElement {
//!     fn set_source(&mut self, sources: Vec<MediaSource>) {
//!         self.src = sources;
//!     }
//!     fn set_poster(&mut self, _poster: Option<String>) {}
//!     fn set_current_time(&mut self, seconds: f64) {
//!         self.time = seconds;
//!     }
//!     fn current_time(&self) -> f64 {
//!         self.time
//!     }
//!     fn is_live(&self) -> bool {
//!         false
//!     }
//!     fn play(&mut self) {}
//! }
//!
//! let items = vec![
//!     PlaylistItem::new(vec![MediaSource::new("https://example.com/a.m3u8", None)]),
//!     PlaylistItem::new(vec![MediaSource::new("https://example.com/b.m3u8", None)]),
//! ];
//!
//! let mut playlist = Playlist::new(VideoElement::default(), PlaylistConfig::default());
//! playlist.load(items).unwrap();
//! assert_eq!(playlist.current_index(), Some(0));
//!
//! playlist.next().unwrap();
//! assert_eq!(playlist.host().src[0].src, "https://example.com/b.m3u8");
//!
//! // At the end: wraps only with RepeatAll
//! playlist.next().unwrap();
//! assert_eq!(playlist.current_index(), Some(1));
//! playlist.toggle_repeat(Some(RepeatMode::RepeatAll));
//! playlist.next().unwrap();
//! assert_eq!(playlist.current_index(), Some(0));
//! ```
//!
//! # Example: Observing Changes
//!
//! ```rust,no_run
//! # use pillarbox_playlist::{PlaybackHost, Playlist, PlaylistEvent, StateField};
//! # fn render<H: PlaybackHost>(playlist: &mut Playlist<H>) {
//! playlist.subscribe(|event: &PlaylistEvent| {
//!     if event.touches(StateField::Items) {
//!         // re-render the item list
//!     } else if event.touches(StateField::CurrentIndex) {
//!         // move the selection highlight
//!     }
//! });
//! # }
//! ```

mod error;
mod events;
mod host;
mod playlist;
mod shuffle;
pub mod types;

// Public exports
pub use error::{PlaylistError, Result};
pub use events::{PlaylistEvent, StateField, SubscriptionId};
pub use host::{HostEvent, PlaybackHost};
pub use playlist::Playlist;
pub use types::{MediaSource, PlaylistConfig, PlaylistItem, RepeatMode};
