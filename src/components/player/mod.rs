use dioxus::prelude::*;

mod controls;

use controls::{MuteButton, PauseButton, PlayButton, ReplayButton};

use crate::components::{PlayerController, SleepTimerPanel, Visualizer};

/// The main player panel: channel input, transport controls, the embed
/// iframe, and the now-playing / loading indicators.
#[component]
pub fn Player() -> Element {
    let controller = use_context::<PlayerController>();
    let mut channel_input = controller.channel_input.clone();
    let embed_src = controller.embed_src.clone();
    let now_playing = controller.now_playing.clone();
    let is_loading = controller.is_loading.clone();

    let on_input_keydown = {
        let controller = controller.clone();
        move |evt: Event<KeyboardData>| {
            if evt.key() == Key::Enter {
                let channel_input = controller.channel_input.clone();
                controller.play_channel(&channel_input());
            }
        }
    };

    rsx! {
        section { class: "player",
            div { class: "channel-form",
                input {
                    id: "channel-input",
                    r#type: "text",
                    placeholder: "Channel name",
                    aria_label: "Channel name",
                    value: "{channel_input}",
                    oninput: move |e| channel_input.set(e.value()),
                    onkeydown: on_input_keydown,
                }
            }

            div { class: "controls",
                PlayButton {}
                PauseButton {}
                MuteButton {}
                ReplayButton {}
            }

            if is_loading() {
                div { class: "loading", "Loading channel…" }
            }

            if let Some(channel) = now_playing() {
                p { class: "now-playing",
                    "Now playing: "
                    strong { "{channel}" }
                }
            }

            if let Some(src) = embed_src() {
                iframe {
                    id: "player-frame",
                    class: "player-frame",
                    src: "{src}",
                    allowfullscreen: true,
                    onload: {
                        let controller = controller.clone();
                        move |_| controller.handle_embed_loaded()
                    },
                }
            }

            Visualizer {}
            SleepTimerPanel {}
        }
    }
}
