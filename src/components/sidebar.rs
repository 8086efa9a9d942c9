use dioxus::prelude::*;

use crate::components::{Icon, PlayerController};
use crate::embed;

/// Slide-in panel listing recently viewed channels, most recent first.
#[component]
pub fn Sidebar(sidebar_open: Signal<bool>) -> Element {
    let controller = use_context::<PlayerController>();
    let history = controller.history.clone();
    let entries = history();

    let class = if sidebar_open() {
        "sidebar open"
    } else {
        "sidebar"
    };

    rsx! {
        aside { class: "{class}", aria_label: "Recent channels",
            div { class: "sidebar-header",
                h2 { "Recent channels" }
                button {
                    class: "icon-btn",
                    aria_label: "Close recent channels",
                    onclick: {
                        let mut sidebar_open = sidebar_open.clone();
                        move |_| sidebar_open.set(false)
                    },
                    Icon { name: "x".to_string(), class: "icon".to_string() }
                }
            }
            ul { class: "history-list",
                if entries.is_empty() {
                    li { class: "placeholder", "No recent channels" }
                } else {
                    for channel in entries {
                        HistoryEntry {
                            key: "{channel}",
                            channel: channel.clone(),
                            sidebar_open,
                        }
                    }
                }
            }
        }
    }
}

/// One history row: live preview thumbnail plus channel name. Activating the
/// row (click, Enter, or Space) plays the channel and closes the sidebar.
#[component]
fn HistoryEntry(channel: String, sidebar_open: Signal<bool>) -> Element {
    let controller = use_context::<PlayerController>();
    // Offline channels have no preview; hide the image rather than swap it.
    let mut thumbnail_broken = use_signal(|| false);

    let play = {
        let controller = controller.clone();
        let channel = channel.clone();
        let mut sidebar_open = sidebar_open.clone();
        move || {
            controller.play_channel(&channel);
            sidebar_open.set(false);
        }
    };

    let on_click = {
        let mut play = play.clone();
        move |_| play()
    };

    let mut play_on_key = play;
    let on_keydown = move |evt: Event<KeyboardData>| match evt.key() {
        Key::Enter => play_on_key(),
        Key::Character(ref c) if c == " " => play_on_key(),
        _ => {}
    };

    rsx! {
        li {
            tabindex: "0",
            onclick: on_click,
            onkeydown: on_keydown,
            if !thumbnail_broken() {
                img {
                    src: embed::thumbnail_url(&channel),
                    alt: "{channel} thumbnail",
                    loading: "lazy",
                    onerror: move |_| thumbnail_broken.set(true),
                }
            }
            span { "{channel}" }
        }
    }
}
