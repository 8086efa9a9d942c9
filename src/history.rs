//! Recently viewed channel history: a bounded, deduplicated,
//! most-recent-first list persisted in local storage.

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
use crate::storage::CHANNEL_HISTORY_KEY;

/// Maximum number of channels kept in the history list.
pub const HISTORY_LIMIT: usize = 10;

/// Record a channel as most recently viewed.
///
/// If the channel is already present it moves to the front; the list never
/// exceeds [`HISTORY_LIMIT`], evicting the oldest entry beyond capacity.
pub fn push_recent(history: &mut Vec<String>, channel: &str) {
    history.retain(|c| c != channel);
    history.insert(0, channel.to_string());
    history.truncate(HISTORY_LIMIT);
}

/// Load the history list from local storage, empty on any error.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Vec<String> {
    LocalStorage::get(CHANNEL_HISTORY_KEY).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Vec<String> {
    Vec::new()
}

/// Persist the history list. Write failures are logged and dropped.
#[cfg(target_arch = "wasm32")]
pub fn save(history: &[String]) {
    if let Err(err) = LocalStorage::set(CHANNEL_HISTORY_KEY, history) {
        tracing::warn!("failed to persist channel history: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_history: &[String]) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(channels: &[&str]) -> Vec<String> {
        channels.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn push_inserts_most_recent_first() {
        let mut history = Vec::new();
        push_recent(&mut history, "shroud");
        push_recent(&mut history, "lirik");
        assert_eq!(history, history_of(&["lirik", "shroud"]));
    }

    #[test]
    fn push_moves_existing_channel_to_front_without_growing() {
        let mut history = history_of(&["a", "b", "c"]);
        push_recent(&mut history, "c");
        assert_eq!(history, history_of(&["c", "a", "b"]));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn push_never_duplicates() {
        let mut history = Vec::new();
        for channel in ["a", "b", "a", "c", "a"] {
            push_recent(&mut history, channel);
        }
        assert_eq!(history, history_of(&["a", "c", "b"]));
    }

    #[test]
    fn push_evicts_oldest_beyond_capacity() {
        let mut history = history_of(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        push_recent(&mut history, "k");
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], "k");
        assert_eq!(
            history,
            history_of(&["k", "a", "b", "c", "d", "e", "f", "g", "h", "i"])
        );
        assert!(!history.contains(&"j".to_string()));
    }
}
