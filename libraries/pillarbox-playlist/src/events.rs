//! Playlist Events
//!
//! Event-based communication for keeping views in sync with the playlist.
//! Events are emitted at key points:
//! - Structural changes (load/push/splice/clear/reverse/sort/shuffle)
//! - Selection changes (select/next/previous)
//! - Mode toggles (repeat, autoadvance)
//!
//! Consumers either subscribe a callback or drain the pending queue. The
//! queue only collects events while nobody is subscribed.

use crate::types::{PlaylistItem, RepeatMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by the playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    /// Items and/or the current index changed
    ///
    /// Both new values are always carried; `changed` tells which of them
    /// actually moved so a view can skip re-rendering the item list when
    /// only the selection changed.
    StateChanged {
        /// Fields modified by the call
        changed: Vec<StateField>,
        /// Snapshot of the items after the call
        items: Vec<PlaylistItem>,
        /// Current index after the call
        current_index: Option<usize>,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// The new mode
        mode: RepeatMode,
    },

    /// Autoadvance toggled
    AutoadvanceChanged {
        /// Whether autoadvance is now enabled
        enabled: bool,
    },
}

impl PlaylistEvent {
    /// Whether this event reports a change of `field`
    pub fn touches(&self, field: StateField) -> bool {
        match self {
            PlaylistEvent::StateChanged { changed, .. } => changed.contains(&field),
            _ => false,
        }
    }
}

/// Playlist state fields reported by [`PlaylistEvent::StateChanged`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateField {
    Items,
    CurrentIndex,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PlaylistEvent)>;

/// Observer registry plus pending queue for pull-style consumers
///
/// Events go to the listeners when there are any, to the queue otherwise.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    pending: Vec<PlaylistEvent>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Observers {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false when `id` was not registered
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: PlaylistEvent) {
        if self.listeners.is_empty() {
            self.pending.push(event);
            return;
        }

        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    pub(crate) fn drain(&mut self) -> Vec<PlaylistEvent> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
