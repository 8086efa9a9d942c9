use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, KeyboardEvent};

use crate::components::{Icon, Player, PlayerController, Sidebar, SleepTimer};
use crate::history;
use crate::offline_shell;
use crate::storage;

#[cfg(target_arch = "wasm32")]
thread_local! {
    // Stashed `beforeinstallprompt` event, replayed when the user clicks install.
    static DEFERRED_INSTALL_PROMPT: RefCell<Option<web_sys::Event>> = RefCell::new(None);
}

#[component]
pub fn AppShell() -> Element {
    let channel_input = use_signal(String::new);
    let embed_src = use_signal(|| None::<String>);
    let now_playing = use_signal(|| None::<String>);
    let is_playing = use_signal(|| false);
    let is_muted = use_signal(|| false);
    let is_loading = use_signal(|| false);
    let history_signal = use_signal(Vec::<String>::new);
    let dark_mode = use_signal(storage::load_dark_mode);
    let mut sidebar_open = use_signal(|| false);

    let sleep_end = use_signal(|| None::<f64>);
    let sleep_countdown = use_signal(|| None::<String>);
    let sleep_generation = use_signal(|| 0u32);

    let controller = PlayerController::new(
        channel_input,
        embed_src,
        now_playing,
        is_playing,
        is_muted,
        is_loading,
        history_signal,
    );
    let sleep_timer = SleepTimer::new(sleep_end, sleep_countdown, sleep_generation);

    use_context_provider(|| controller.clone());
    use_context_provider(|| sleep_timer.clone());

    // Startup: restore persisted player state (or fall back to the last
    // played channel), load the history list, and bring up the offline shell.
    {
        let controller = controller.clone();
        use_effect(move || {
            if let Some(state) = storage::load_player_state() {
                let mut channel_input = controller.channel_input.clone();
                channel_input.set(state.channel.clone());
                let mut is_muted = controller.is_muted.clone();
                is_muted.set(state.muted);
                if state.playing && !state.channel.is_empty() {
                    controller.play_channel(&state.channel);
                }
            } else if let Some(last) = storage::load_last_channel() {
                let mut channel_input = controller.channel_input.clone();
                channel_input.set(last.clone());
                controller.play_channel(&last);
            }

            let mut history_signal = controller.history.clone();
            history_signal.set(history::load());

            offline_shell::register();
        });
    }

    // Apply and persist the theme whenever the flag flips.
    use_effect(move || {
        let enabled = dark_mode();
        #[cfg(target_arch = "wasm32")]
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            let _ = if enabled {
                class_list.add_1("light")
            } else {
                class_list.remove_1("light")
            };
        }
        storage::save_dark_mode(enabled);
    });

    // Global keyboard shortcuts: Space toggles play/pause, M toggles mute.
    // Dispatched by clicking the control buttons so the behavior stays
    // identical to a pointer press.
    #[cfg(target_arch = "wasm32")]
    {
        let controller = controller.clone();
        use_effect(move || {
            let Some(doc) = window().and_then(|w| w.document()) else {
                return;
            };

            let runtime = Runtime::current();
            let controller = controller.clone();
            let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if is_editable_shortcut_target(&event) {
                    return;
                }
                let _guard = RuntimeGuard::new(runtime.clone());
                match event.key().as_str() {
                    " " | "Spacebar" => {
                        event.prevent_default();
                        let playing = *controller.is_playing.peek();
                        click_control_button(if playing { "pause-btn" } else { "play-btn" });
                    }
                    "m" | "M" => click_control_button("mute-btn"),
                    _ => {}
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            key_cb.forget();
        });
    }

    rsx! {
        div { class: "app-container",
            header { class: "app-header",
                h1 {
                    Icon { name: "tv".to_string(), class: "icon".to_string() }
                    "TwAudio"
                }
                div { class: "header-actions",
                    InstallButton {}
                    DarkModeToggle { dark_mode }
                    button {
                        class: "icon-btn",
                        aria_label: "Open recent channels",
                        onclick: move |_| sidebar_open.set(true),
                        Icon { name: "menu".to_string(), class: "icon".to_string() }
                    }
                }
            }

            Player {}
        }

        if sidebar_open() {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| sidebar_open.set(false),
            }
        }

        Sidebar { sidebar_open }
    }
}

/// Theme toggle. The flag lightens the theme when set; the stored key name
/// is kept for compatibility with existing persisted state.
#[component]
fn DarkModeToggle(dark_mode: Signal<bool>) -> Element {
    let enabled = dark_mode();

    rsx! {
        button {
            id: "dark-mode-btn",
            class: "icon-btn",
            aria_label: if enabled { "Switch to dark theme" } else { "Switch to light theme" },
            onclick: {
                let mut dark_mode = dark_mode.clone();
                move |_| {
                    let current = *dark_mode.peek();
                    dark_mode.set(!current);
                }
            },
            Icon {
                name: if enabled { "sun".to_string() } else { "moon".to_string() },
                class: "icon".to_string(),
            }
        }
    }
}

/// Shown once the browser offers installation; clicking replays the stashed
/// prompt event.
#[component]
fn InstallButton() -> Element {
    let mut install_available = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };

        let runtime = Runtime::current();
        let mut install_available = install_available.clone();
        let prompt_cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            DEFERRED_INSTALL_PROMPT.with(|slot| *slot.borrow_mut() = Some(event));
            let _guard = RuntimeGuard::new(runtime.clone());
            install_available.set(true);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = win.add_event_listener_with_callback(
            "beforeinstallprompt",
            prompt_cb.as_ref().unchecked_ref(),
        );
        prompt_cb.forget();
    });

    let on_install = move |_| {
        #[cfg(target_arch = "wasm32")]
        if let Some(event) = DEFERRED_INSTALL_PROMPT.with(|slot| slot.borrow_mut().take()) {
            let event_js: JsValue = event.into();
            if let Ok(prompt) = js_sys::Reflect::get(&event_js, &"prompt".into()) {
                if let Some(func) = prompt.dyn_ref::<js_sys::Function>() {
                    let _ = func.call0(&event_js);
                }
            }
        }
        install_available.set(false);
    };

    rsx! {
        if install_available() {
            button {
                id: "install-btn",
                class: "icon-btn",
                aria_label: "Install app",
                onclick: on_install,
                Icon { name: "download".to_string(), class: "icon".to_string() }
            }
        }
    }
}

/// Shortcuts must not fire while the user is typing a channel name.
#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn click_control_button(id: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(element) = doc.get_element_by_id(id) {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                html.click();
            }
        }
    }
}
