use dioxus::prelude::*;

use crate::components::{Icon, PlayerController};

/// Seconds left until `end_ms`, clamped at zero. Partial seconds round up so
/// the countdown never shows 00:00 while the timer is still pending.
pub fn remaining_secs(end_ms: f64, now_ms: f64) -> u64 {
    if end_ms <= now_ms {
        0
    } else {
        ((end_ms - now_ms) / 1000.0).ceil() as u64
    }
}

/// End timestamp for a timer of `minutes` starting at `now_ms`.
pub fn end_timestamp(now_ms: f64, minutes: u32) -> f64 {
    now_ms + f64::from(minutes) * 60_000.0
}

/// `MM:SS` countdown display.
pub fn format_countdown(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// A single deferred pause. At most one timer is live; starting a new one
/// supersedes the old, and cancellation works by bumping the generation
/// counter the tick loop checks on every iteration.
#[derive(Clone)]
pub struct SleepTimer {
    end_ms: Signal<Option<f64>>,
    countdown: Signal<Option<String>>,
    generation: Signal<u32>,
}

impl SleepTimer {
    pub fn new(
        end_ms: Signal<Option<f64>>,
        countdown: Signal<Option<String>>,
        generation: Signal<u32>,
    ) -> Self {
        Self {
            end_ms,
            countdown,
            generation,
        }
    }

    pub fn is_active(&self) -> bool {
        let end_ms = self.end_ms.clone();
        end_ms().is_some()
    }

    pub fn countdown(&self) -> Option<String> {
        let countdown = self.countdown.clone();
        countdown()
    }

    /// Schedule `pause_channel` to run `minutes` from now and start ticking
    /// the countdown once a second.
    pub fn start(&self, minutes: u32, controller: PlayerController) {
        if minutes == 0 {
            return;
        }

        let mut generation = self.generation.clone();
        let my_generation = *generation.peek() + 1;
        generation.set(my_generation);

        let end = end_timestamp(now_ms(), minutes);
        let mut end_ms = self.end_ms.clone();
        end_ms.set(Some(end));
        let mut countdown = self.countdown.clone();
        countdown.set(Some(format_countdown(remaining_secs(end, now_ms()))));
        tracing::debug!("sleep timer armed for {minutes} min");

        #[cfg(target_arch = "wasm32")]
        {
            let timer = self.clone();
            spawn(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(1_000).await;

                    if *timer.generation.peek() != my_generation {
                        // Cancelled or superseded by a newer timer.
                        break;
                    }

                    let remaining = remaining_secs(end, now_ms());
                    if remaining == 0 {
                        controller.pause_channel();
                        timer.clear();
                        break;
                    }

                    let mut countdown = timer.countdown.clone();
                    countdown.set(Some(format_countdown(remaining)));
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = controller;
    }

    /// Cancel the pending pause and clear the countdown display.
    pub fn cancel(&self) {
        let next = *self.generation.peek() + 1;
        let mut generation = self.generation.clone();
        generation.set(next);
        self.clear();
    }

    fn clear(&self) {
        let mut end_ms = self.end_ms.clone();
        end_ms.set(None);
        let mut countdown = self.countdown.clone();
        countdown.set(None);
    }
}

#[component]
pub fn SleepTimerPanel() -> Element {
    let controller = use_context::<PlayerController>();
    let timer = use_context::<SleepTimer>();
    let mut minutes_input = use_signal(|| "30".to_string());

    let active = timer.is_active();
    let countdown = timer.countdown();

    let on_start = {
        let timer = timer.clone();
        let controller = controller.clone();
        move |_| {
            if let Ok(minutes) = minutes_input().trim().parse::<u32>() {
                timer.start(minutes, controller.clone());
            }
        }
    };

    let on_cancel = {
        let timer = timer.clone();
        move |_| timer.cancel()
    };

    rsx! {
        div { class: "sleep-timer",
            Icon { name: "clock".to_string(), class: "icon".to_string() }
            input {
                r#type: "number",
                min: "1",
                max: "720",
                value: "{minutes_input}",
                aria_label: "Sleep timer minutes",
                oninput: move |e| minutes_input.set(e.value()),
            }
            span { "min" }
            button {
                id: "sleep-start-btn",
                class: "control-btn",
                onclick: on_start,
                "Start"
            }
            if active {
                button {
                    id: "sleep-cancel-btn",
                    class: "control-btn",
                    onclick: on_cancel,
                    "Cancel"
                }
            }
            if let Some(countdown) = countdown {
                span { class: "countdown", "{countdown}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_minute_timer_elapses_after_sixty_seconds() {
        let start = 1_000_000.0;
        let end = end_timestamp(start, 1);
        assert_eq!(remaining_secs(end, start), 60);
        assert_eq!(remaining_secs(end, start + 59_000.0), 1);
        assert_eq!(remaining_secs(end, start + 60_000.0), 0);
    }

    #[test]
    fn remaining_clamps_past_deadlines_to_zero() {
        assert_eq!(remaining_secs(1_000.0, 5_000.0), 0);
        assert_eq!(remaining_secs(1_000.0, 1_000.0), 0);
    }

    #[test]
    fn partial_seconds_round_up() {
        assert_eq!(remaining_secs(1_500.0, 1_000.0), 1);
        assert_eq!(remaining_secs(61_200.0, 1_000.0), 61);
    }

    #[test]
    fn countdown_formats_as_minutes_and_seconds() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(3600), "60:00");
    }
}
