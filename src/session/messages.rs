//! Bounded status message queue.
//!
//! Interaction and traversal outcomes ("You found a key!", "The door is
//! locked!") surface to the player as short messages. The log keeps a
//! bounded window of recent messages and expires them a fixed number of
//! ticks after they were pushed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One status message with its expiry tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    expires_at: u64,
}

/// Bounded, tick-expiring message log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MessageLog {
    messages: VecDeque<StatusMessage>,
}

impl MessageLog {
    /// Most messages kept at once; pushing beyond this evicts the oldest.
    pub const MAX_MESSAGES: usize = 5;

    /// Ticks a message stays visible after being pushed.
    pub const MESSAGE_LIFETIME: u64 = 16;

    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a message at the given tick.
    pub fn push(&mut self, text: impl Into<String>, now: u64) {
        if self.messages.len() == Self::MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(StatusMessage {
            text: text.into(),
            expires_at: now + Self::MESSAGE_LIFETIME,
        });
    }

    /// Drop every message whose lifetime has elapsed at `now`.
    pub fn expire(&mut self, now: u64) {
        self.messages.retain(|m| m.expires_at > now);
    }

    /// Current messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.text.as_str())
    }

    /// Number of live messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
