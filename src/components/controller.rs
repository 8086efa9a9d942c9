use dioxus::prelude::*;

use crate::embed;
use crate::history;
use crate::storage::{self, PlayerState};

/// Owns all player state and is the single writer of the persisted keys.
/// One instance exists per page, shared with the component tree via context.
///
/// Methods are commands fired from event handlers, so state reads go through
/// `peek()` and never subscribe the caller.
#[derive(Clone)]
pub struct PlayerController {
    pub channel_input: Signal<String>,
    pub embed_src: Signal<Option<String>>,
    pub now_playing: Signal<Option<String>>,
    pub is_playing: Signal<bool>,
    pub is_muted: Signal<bool>,
    pub is_loading: Signal<bool>,
    pub history: Signal<Vec<String>>,
}

impl PlayerController {
    pub fn new(
        channel_input: Signal<String>,
        embed_src: Signal<Option<String>>,
        now_playing: Signal<Option<String>>,
        is_playing: Signal<bool>,
        is_muted: Signal<bool>,
        is_loading: Signal<bool>,
        history: Signal<Vec<String>>,
    ) -> Self {
        Self {
            channel_input,
            embed_src,
            now_playing,
            is_playing,
            is_muted,
            is_loading,
            history,
        }
    }

    /// Start playing a channel. Empty or whitespace input is a no-op; the
    /// name is lowercased before it touches the embed URL or any storage key.
    ///
    /// The "now playing" state is not committed here: it lands in
    /// [`Self::handle_embed_loaded`] once the iframe fires its load event.
    /// Reassigning the src while a load is in flight supersedes that load.
    pub fn play_channel(&self, raw: &str) {
        let Some(channel) = embed::normalize_channel(raw) else {
            return;
        };

        let mut channel_input = self.channel_input.clone();
        channel_input.set(channel.clone());

        let mut now_playing = self.now_playing.clone();
        now_playing.set(None);
        let mut is_loading = self.is_loading.clone();
        is_loading.set(true);

        let muted = *self.is_muted.peek();
        let url = embed::embed_url(&channel, &embed::page_hostname(), muted);
        tracing::debug!("loading embed for {channel}");
        let mut embed_src = self.embed_src.clone();
        embed_src.set(Some(url));

        storage::save_last_channel(&channel);
    }

    /// Commit point: the embed finished loading. Reveals the now-playing
    /// label, persists the snapshot, and records the channel as recent.
    pub fn handle_embed_loaded(&self) {
        if self.embed_src.peek().is_none() {
            // Load event from a frame we already tore down.
            return;
        }

        let channel = self.channel_input.peek().clone();

        let mut is_loading = self.is_loading.clone();
        is_loading.set(false);
        let mut now_playing = self.now_playing.clone();
        now_playing.set(Some(channel.clone()));
        let mut is_playing = self.is_playing.clone();
        is_playing.set(true);

        self.persist_state(&channel, true);

        let mut history_signal = self.history.clone();
        let mut list = history_signal.peek().clone();
        history::push_recent(&mut list, &channel);
        history::save(&list);
        history_signal.set(list);
    }

    /// Stop playback by tearing down the iframe. Idempotent.
    pub fn pause_channel(&self) {
        let mut embed_src = self.embed_src.clone();
        embed_src.set(None);
        let mut now_playing = self.now_playing.clone();
        now_playing.set(None);
        let mut is_loading = self.is_loading.clone();
        is_loading.set(false);
        let mut is_playing = self.is_playing.clone();
        is_playing.set(false);

        let channel = self.channel_input.peek().clone();
        self.persist_state(&channel, false);
    }

    /// Flip the mute flag. The embed has no live mute control, so while
    /// playing this reloads the iframe with the new `muted` parameter.
    pub fn toggle_mute(&self) {
        let muted = !*self.is_muted.peek();
        let mut is_muted = self.is_muted.clone();
        is_muted.set(muted);

        if *self.is_playing.peek() {
            let channel = self.channel_input.peek().clone();
            self.play_channel(&channel);
        }
    }

    /// Reload the current channel, e.g. after the stream stalled.
    pub fn replay(&self) {
        if *self.is_playing.peek() {
            let channel = self.channel_input.peek().clone();
            self.play_channel(&channel);
        }
    }

    fn persist_state(&self, channel: &str, playing: bool) {
        storage::save_player_state(&PlayerState {
            channel: channel.to_string(),
            muted: *self.is_muted.peek(),
            playing,
        });
    }
}
