use dioxus::prelude::*;

use crate::components::PlayerController;

const BAR_COUNT: usize = 16;

/// Decorative audio bars shown while a channel is playing. The embed's audio
/// lives in a cross-origin iframe, so the bars are time-driven rather than
/// fed by an analyser.
#[component]
pub fn Visualizer() -> Element {
    let controller = use_context::<PlayerController>();
    let is_playing = controller.is_playing.clone();

    let class = if is_playing() {
        "visualizer active"
    } else {
        "visualizer"
    };

    // Stagger the bars so they don't pulse in lockstep.
    let bars = (0..BAR_COUNT).map(|i| {
        let delay = i * 137 % 900;
        let duration = 700 + i * 53 % 400;
        rsx! {
            div {
                class: "bar",
                style: "animation-delay: -{delay}ms; animation-duration: {duration}ms;",
            }
        }
    });

    rsx! {
        div { class: "{class}", aria_hidden: "true", {bars} }
    }
}
