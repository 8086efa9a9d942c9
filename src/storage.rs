//! Local-storage persistence for player state, the last played channel, and
//! the dark-mode flag.
//!
//! Every load falls back to defaults on a missing key, a storage failure, or
//! malformed JSON; a corrupt value must never stop the app from starting.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

pub const CHANNEL_HISTORY_KEY: &str = "twaudio_channel_history";
pub const LAST_CHANNEL_KEY: &str = "twaudio_last_channel";
pub const DARK_MODE_KEY: &str = "twaudio_dark_mode";
pub const PLAYER_STATE_KEY: &str = "twaudio_player_state";

/// Snapshot of the player written on every play/pause/mute transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerState {
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub playing: bool,
}

/// Decode a persisted player state, defaulting on malformed JSON.
pub fn decode_player_state(raw: &str) -> PlayerState {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn load_player_state() -> Option<PlayerState> {
    let raw: Option<String> = LocalStorage::raw().get_item(PLAYER_STATE_KEY).ok().flatten();
    raw.map(|raw| decode_player_state(&raw))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_player_state() -> Option<PlayerState> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn save_player_state(state: &PlayerState) {
    if let Err(err) = LocalStorage::set(PLAYER_STATE_KEY, state) {
        tracing::warn!("failed to persist player state: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_player_state(_state: &PlayerState) {}

// The last-channel and dark-mode keys hold raw strings, not JSON, so they go
// through the raw storage handle.

#[cfg(target_arch = "wasm32")]
pub fn load_last_channel() -> Option<String> {
    LocalStorage::raw()
        .get_item(LAST_CHANNEL_KEY)
        .ok()
        .flatten()
        .filter(|c| !c.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_last_channel() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn save_last_channel(channel: &str) {
    let _ = LocalStorage::raw().set_item(LAST_CHANNEL_KEY, channel);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_last_channel(_channel: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn load_dark_mode() -> bool {
    LocalStorage::raw()
        .get_item(DARK_MODE_KEY)
        .ok()
        .flatten()
        .map(|v| v == "true")
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dark_mode() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
pub fn save_dark_mode(enabled: bool) {
    let value = if enabled { "true" } else { "false" };
    let _ = LocalStorage::raw().set_item(DARK_MODE_KEY, value);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_dark_mode(_enabled: bool) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_state_round_trips_through_json() {
        let state = PlayerState {
            channel: "foo".to_string(),
            muted: true,
            playing: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(decode_player_state(&json), state);
    }

    #[test]
    fn malformed_state_falls_back_to_defaults() {
        assert_eq!(decode_player_state("{not json"), PlayerState::default());
        assert_eq!(decode_player_state(""), PlayerState::default());
        assert_eq!(decode_player_state("[1,2,3]"), PlayerState::default());
    }

    #[test]
    fn missing_fields_default_individually() {
        let state = decode_player_state(r#"{"channel":"foo"}"#);
        assert_eq!(state.channel, "foo");
        assert!(!state.muted);
        assert!(!state.playing);
    }

    #[test]
    fn default_state_is_stopped_and_unmuted() {
        let state = PlayerState::default();
        assert!(state.channel.is_empty());
        assert!(!state.muted);
        assert!(!state.playing);
    }
}
