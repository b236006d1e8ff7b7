//! Playlist engine - core orchestration
//!
//! Owns the ordered items and the current-index cursor, drives the playback
//! host and notifies observers.

use crate::{
    error::{PlaylistError, Result},
    events::{Observers, PlaylistEvent, StateField, SubscriptionId},
    host::{HostEvent, PlaybackHost},
    shuffle::shuffle_tracking,
    types::{
        validate_previous_navigation_threshold, PlaylistConfig, PlaylistItem, RepeatMode,
        DEFAULT_PREVIOUS_NAVIGATION_THRESHOLD,
    },
};
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Ordered playlist with a current-item cursor
///
/// The cursor tracks the item whose sources are loaded at the host, not the
/// item a user happens to look at. It only moves through navigation
/// (`select`, `load`, `next`, `previous`) and is rebased by structural
/// mutations so it keeps designating the same logical item. When that item
/// is removed the cursor becomes `None`.
///
/// Every call that changes the items or the cursor emits exactly one
/// [`PlaylistEvent::StateChanged`].
#[derive(Debug)]
pub struct Playlist<H: PlaybackHost> {
    host: H,

    // State
    items: Vec<PlaylistItem>,
    current_index: Option<usize>,

    // Settings
    repeat: RepeatMode,
    autoadvance: bool,
    previous_navigation_threshold: f64,

    observers: Observers,
}

impl<H: PlaybackHost> Playlist<H> {
    /// Create a playlist driving `host`
    ///
    /// When the config carries items they are loaded right away, so the host
    /// receives the first item's sources. An invalid navigation threshold
    /// (negative or not finite) is replaced by the default.
    pub fn new(host: H, config: PlaylistConfig) -> Self {
        let PlaylistConfig {
            playlist,
            repeat,
            autoadvance,
            previous_navigation_threshold,
        } = config;

        let previous_navigation_threshold =
            match validate_previous_navigation_threshold(previous_navigation_threshold) {
                Ok(()) => previous_navigation_threshold,
                Err(err) => {
                    warn!(
                        %err,
                        fallback = DEFAULT_PREVIOUS_NAVIGATION_THRESHOLD,
                        "Ignoring navigation threshold"
                    );
                    DEFAULT_PREVIOUS_NAVIGATION_THRESHOLD
                }
            };

        let mut engine = Self {
            host,
            items: Vec::new(),
            current_index: None,
            repeat,
            autoadvance,
            previous_navigation_threshold,
            observers: Observers::default(),
        };

        if !playlist.is_empty() {
            // Selecting index 0 of a non-empty list cannot fail.
            let _ = engine.load(playlist);
        }

        engine
    }

    /// Tear the playlist down and hand the host back
    ///
    /// Observers and pending events are dropped.
    pub fn into_host(self) -> H {
        debug!(
            listeners = self.observers.listener_count(),
            "Tearing down playlist"
        );
        self.host
    }

    // ===== Navigation =====

    /// Load the item at `index` into the host
    ///
    /// Fails without touching any state when `index` is out of range or
    /// already selected.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.activate(index)?;
        self.emit_state_changed(vec![StateField::CurrentIndex]);
        Ok(())
    }

    /// Go to the next item
    ///
    /// Wraps to the first item in `RepeatAll`, does nothing at the end
    /// otherwise.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let next = self.current_index.map_or(0, |index| index + 1);

        if next < self.items.len() {
            self.select(next)
        } else if self.repeat == RepeatMode::RepeatAll {
            self.select(0)
        } else {
            debug!("End of playlist reached");
            Ok(())
        }
    }

    /// Go to the previous item
    ///
    /// Live content, or content played past the navigation threshold, is
    /// restarted instead. Wraps to the last item in `RepeatAll`.
    pub fn previous(&mut self) -> Result<()> {
        let past_threshold = self.host.current_time() > self.previous_navigation_threshold;
        if self.host.is_live() || past_threshold {
            debug!("Restarting current item instead of going back");
            self.host.set_current_time(0.0);
            return Ok(());
        }

        match self.current_index {
            Some(index) if index > 0 => self.select(index - 1),
            _ if self.repeat == RepeatMode::RepeatAll => match self.items.len().checked_sub(1) {
                Some(last) => self.select(last),
                None => Ok(()),
            },
            _ => {
                debug!("Start of playlist reached");
                Ok(())
            }
        }
    }

    /// Whether an item follows the current one (wrap-around not included)
    pub fn has_next(&self) -> bool {
        self.current_index.map_or(0, |index| index + 1) < self.items.len()
    }

    /// Whether an item precedes the current one (wrap-around not included)
    pub fn has_previous(&self) -> bool {
        matches!(self.current_index, Some(index) if index > 0)
    }

    // ===== Mutation =====

    /// Replace the items and load the first one
    ///
    /// An empty list is accepted but reports `IndexOutOfRange`; the cursor
    /// is then cleared. Prefer [`Playlist::clear`] for an explicit reset.
    pub fn load(&mut self, items: impl IntoIterator<Item = PlaylistItem>) -> Result<()> {
        let previous_index = self.current_index;

        self.items = items.into_iter().collect();
        self.current_index = None;
        let result = self.activate(0);

        self.emit_items_changed(previous_index);
        result
    }

    /// Append items without changing the selection
    pub fn push(&mut self, items: impl IntoIterator<Item = PlaylistItem>) {
        self.items.extend(items);
        self.emit_state_changed(vec![StateField::Items]);
    }

    /// Remove `delete_count` items at `start` and insert `items` there
    ///
    /// Out-of-range bounds are clamped to the list. Returns the removed items
    /// in their original order. The cursor is cleared when the current item
    /// is removed and shifted when it sits after the edited range. The host
    /// is never touched.
    pub fn splice(
        &mut self,
        start: usize,
        delete_count: usize,
        items: impl IntoIterator<Item = PlaylistItem>,
    ) -> Vec<PlaylistItem> {
        let len = self.items.len();
        let start = start.min(len);
        let delete_count = delete_count.min(len - start);
        let deleted = start..start + delete_count;

        let removed: Vec<PlaylistItem> = self.items.splice(deleted.clone(), items).collect();
        let inserted = self.items.len() + delete_count - len;

        let previous_index = self.current_index;
        self.current_index = match previous_index {
            Some(index) if deleted.contains(&index) => None,
            Some(index) if index >= start => Some(index - delete_count + inserted),
            other => other,
        };

        debug!(
            start,
            removed = removed.len(),
            inserted,
            from = ?previous_index,
            to = ?self.current_index,
            "Spliced playlist"
        );
        self.emit_items_changed(previous_index);
        removed
    }

    /// Remove every item
    ///
    /// Host playback is left alone.
    pub fn clear(&mut self) {
        let previous_index = self.current_index;
        self.items.clear();
        self.current_index = None;
        self.emit_items_changed(previous_index);
    }

    /// Reverse the items, keeping the cursor on the same item
    pub fn reverse(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let previous_index = self.current_index;
        let last = self.items.len() - 1;

        self.items.reverse();
        self.current_index = previous_index.map(|index| last - index);
        self.emit_items_changed(previous_index);
    }

    /// Sort the items, keeping the cursor on the same item
    ///
    /// The current item is found again by value. When the list holds
    /// duplicates of it the cursor lands on the first equal item.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&PlaylistItem, &PlaylistItem) -> Ordering,
    {
        if self.items.is_empty() {
            return;
        }

        let previous_index = self.current_index;
        let current = self.current_item().cloned();

        self.items.sort_by(compare);
        self.current_index =
            current.and_then(|current| self.items.iter().position(|item| *item == current));
        self.emit_items_changed(previous_index);
    }

    /// Shuffle the items, keeping the cursor on the same item
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle with a caller-provided random source
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        if self.items.is_empty() {
            return;
        }

        let previous_index = self.current_index;
        self.current_index = shuffle_tracking(&mut self.items, previous_index, rng);

        debug!(from = ?previous_index, to = ?self.current_index, "Shuffled playlist");
        self.emit_items_changed(previous_index);
    }

    // ===== Modes =====

    /// Set the repeat mode, or cycle it when `mode` is `None`
    pub fn toggle_repeat(&mut self, mode: Option<RepeatMode>) {
        self.repeat = mode.unwrap_or_else(|| self.repeat.cycle());
        debug!(mode = ?self.repeat, "Repeat mode changed");
        self.observers.emit(PlaylistEvent::RepeatChanged { mode: self.repeat });
    }

    /// Set autoadvance, or flip it when `enabled` is `None`
    pub fn toggle_autoadvance(&mut self, enabled: Option<bool>) {
        self.autoadvance = enabled.unwrap_or(!self.autoadvance);
        debug!(enabled = self.autoadvance, "Autoadvance changed");
        self.observers.emit(PlaylistEvent::AutoadvanceChanged {
            enabled: self.autoadvance,
        });
    }

    // ===== Host reactions =====

    /// React to a host notification
    ///
    /// - `Ended`: replay in `RepeatOne`, otherwise advance when autoadvance
    ///   is on.
    /// - `DataLoaded`: seek to the current item's start time.
    ///
    /// A start time of exactly `0` is treated like no start time at all, no
    /// seek is issued.
    pub fn handle_host_event(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::Ended => {
                if self.repeat == RepeatMode::RepeatOne {
                    debug!("Replaying current item");
                    self.host.set_current_time(0.0);
                    self.host.play();
                    Ok(())
                } else if self.autoadvance {
                    self.next()
                } else {
                    Ok(())
                }
            }
            HostEvent::DataLoaded => {
                let start_time = self.current_item().and_then(|item| item.start_time);

                if let Some(start_time) = start_time {
                    if start_time != 0.0 && !start_time.is_nan() {
                        debug!(start_time, "Seeking to item start time");
                        self.host.set_current_time(start_time);
                    }
                }
                Ok(())
            }
        }
    }

    // ===== Observers =====

    /// Register a callback invoked on every event
    ///
    /// While at least one callback is registered, events are not queued for
    /// [`Playlist::drain_events`].
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlaylistEvent) + 'static,
    {
        self.observers.subscribe(Box::new(listener))
    }

    /// Remove a callback; returns false when it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Take every event queued since the last drain
    ///
    /// Only events emitted while nobody was subscribed are queued.
    pub fn drain_events(&mut self) -> Vec<PlaylistEvent> {
        self.observers.drain()
    }

    /// Check whether events are waiting to be drained
    pub fn has_pending_events(&self) -> bool {
        self.observers.has_pending()
    }

    // ===== State Queries =====

    /// Snapshot of the items
    ///
    /// The returned vector is detached: changing it never affects the
    /// playlist.
    pub fn items(&self) -> Vec<PlaylistItem> {
        self.items.clone()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the playlist has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item loaded at the host, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Item loaded at the host, if any
    pub fn current_item(&self) -> Option<&PlaylistItem> {
        self.current_index.and_then(|index| self.items.get(index))
    }

    /// Current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether navigation wraps around at both ends
    pub fn is_repeat_all(&self) -> bool {
        self.repeat == RepeatMode::RepeatAll
    }

    /// Whether the current item replays when it ends
    pub fn is_repeat_one(&self) -> bool {
        self.repeat == RepeatMode::RepeatOne
    }

    /// Whether the next item starts when the current one ends
    pub fn is_autoadvance(&self) -> bool {
        self.autoadvance
    }

    /// Seconds after which `previous()` restarts the current item
    pub fn previous_navigation_threshold(&self) -> f64 {
        self.previous_navigation_threshold
    }

    /// Change the window (seconds) in which `previous()` goes back
    ///
    /// Negative or non-finite values are rejected and the current threshold
    /// is kept.
    pub fn set_previous_navigation_threshold(&mut self, seconds: f64) -> Result<()> {
        if let Err(err) = validate_previous_navigation_threshold(seconds) {
            warn!(%err, "Cannot change navigation threshold");
            return Err(err);
        }
        self.previous_navigation_threshold = seconds;
        Ok(())
    }

    /// The playback host driven by this playlist
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the playback host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ===== Internals =====

    /// Instruct the host to load `index` and move the cursor, without emitting
    fn activate(&mut self, index: usize) -> Result<()> {
        let len = self.items.len();
        if index >= len {
            warn!(index, len, "Cannot select playlist item: index out of range");
            return Err(PlaylistError::IndexOutOfRange { index, len });
        }

        if self.current_index == Some(index) {
            warn!(index, "Playlist item is already selected");
            return Err(PlaylistError::AlreadySelected(index));
        }

        let item = &self.items[index];
        self.host.set_source(item.sources.clone());
        self.host.set_poster(item.poster.clone());
        self.current_index = Some(index);

        debug!(index, "Selected playlist item");
        Ok(())
    }

    /// Emit a state change for a call that modified the items
    fn emit_items_changed(&mut self, previous_index: Option<usize>) {
        let mut changed = vec![StateField::Items];
        if previous_index != self.current_index {
            changed.push(StateField::CurrentIndex);
        }
        self.emit_state_changed(changed);
    }

    fn emit_state_changed(&mut self, changed: Vec<StateField>) {
        self.observers.emit(PlaylistEvent::StateChanged {
            changed,
            items: self.items.clone(),
            current_index: self.current_index,
        });
    }
}
