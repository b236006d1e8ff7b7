//! Shared helpers for integration tests

#![allow(dead_code)]

use pillarbox_playlist::{
    MediaSource, PlaybackHost, Playlist, PlaylistConfig, PlaylistItem, RepeatMode,
};

/// Host double recording every instruction it receives
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub sources: Vec<Vec<MediaSource>>,
    pub posters: Vec<Option<String>>,
    pub seeks: Vec<f64>,
    pub plays: usize,
    pub position: f64,
    pub live: bool,
}

impl PlaybackHost for RecordingHost {
    fn set_source(&mut self, sources: Vec<MediaSource>) {
        self.sources.push(sources);
    }

    fn set_poster(&mut self, poster: Option<String>) {
        self.posters.push(poster);
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

pub fn create_item(id: &str) -> PlaylistItem {
    let mut data = serde_json::Map::new();
    data.insert("title".to_string(), serde_json::Value::from(format!("Item {}", id)));

    PlaylistItem::new(vec![MediaSource::new(
        format!("urn:swi:video:{}", id),
        Some("srgssr/urn"),
    )])
    .with_poster(format!("https://example.com/{}.jpg", id))
    .with_data(data)
}

pub fn create_items(count: usize) -> Vec<PlaylistItem> {
    (0..count).map(|i| create_item(&i.to_string())).collect()
}

/// Playlist loaded with `count` items, events drained
pub fn loaded_playlist(count: usize) -> Playlist<RecordingHost> {
    let config = PlaylistConfig {
        playlist: create_items(count),
        repeat: RepeatMode::NoRepeat,
        ..Default::default()
    };
    let mut playlist = Playlist::new(RecordingHost::default(), config);
    playlist.drain_events();
    playlist
}

/// Title stored in an item's metadata
pub fn title(item: &PlaylistItem) -> &str {
    item.data
        .as_ref()
        .and_then(|data| data.get("title"))
        .and_then(|title| title.as_str())
        .unwrap_or_default()
}
