use dioxus::prelude::*;

use crate::components::{Icon, PlayerController};

#[component]
pub(super) fn PlayButton() -> Element {
    let controller = use_context::<PlayerController>();
    let is_playing = controller.is_playing.clone();

    rsx! {
        button {
            id: "play-btn",
            r#type: "button",
            class: "control-btn primary",
            disabled: is_playing(),
            onclick: {
                let controller = controller.clone();
                move |_| {
                    let channel_input = controller.channel_input.clone();
                    controller.play_channel(&channel_input());
                }
            },
            Icon { name: "play".to_string(), class: "icon".to_string() }
            "Play"
        }
    }
}

#[component]
pub(super) fn PauseButton() -> Element {
    let controller = use_context::<PlayerController>();
    let is_playing = controller.is_playing.clone();

    rsx! {
        button {
            id: "pause-btn",
            r#type: "button",
            class: "control-btn",
            disabled: !is_playing(),
            onclick: {
                let controller = controller.clone();
                move |_| controller.pause_channel()
            },
            Icon { name: "pause".to_string(), class: "icon".to_string() }
            "Pause"
        }
    }
}

#[component]
pub(super) fn MuteButton() -> Element {
    let controller = use_context::<PlayerController>();
    let is_muted = controller.is_muted.clone();
    let muted = is_muted();

    rsx! {
        button {
            id: "mute-btn",
            r#type: "button",
            class: "control-btn",
            aria_label: if muted { "Unmute" } else { "Mute" },
            onclick: {
                let controller = controller.clone();
                move |_| controller.toggle_mute()
            },
            Icon {
                name: if muted { "volume-x".to_string() } else { "volume".to_string() },
                class: "icon".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn ReplayButton() -> Element {
    let controller = use_context::<PlayerController>();
    let is_playing = controller.is_playing.clone();

    rsx! {
        button {
            id: "replay-btn",
            r#type: "button",
            class: "control-btn",
            disabled: !is_playing(),
            aria_label: "Reload stream",
            onclick: {
                let controller = controller.clone();
                move |_| controller.replay()
            },
            Icon { name: "replay".to_string(), class: "icon".to_string() }
        }
    }
}
