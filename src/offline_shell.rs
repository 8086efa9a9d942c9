//! Registration for the offline cache shell.
//!
//! The shell itself runs as a service worker (`assets/sw.js`, its own
//! execution context): on install it populates a named cache bucket with the
//! fixed shell-asset manifest, all-or-nothing, and afterwards answers every
//! fetch cache-first with a network fallback. There is no invalidation;
//! bumping [`CACHE_NAME`] is the only way to force a refresh. The constants
//! here mirror the worker source and are pinned to it by test.

/// Cache bucket the shell assets live under.
pub const CACHE_NAME: &str = "twaudio-cache-v1";

/// Assets pre-cached on install. Root document, web app manifest, icons and
/// favicon: the minimum needed to render the app offline.
pub const SHELL_ASSETS: &[&str] = &[
    "./",
    "./index.html",
    "./manifest.json",
    "./icons/icon-192.svg",
    "./icons/icon-512.svg",
    "./favicon.svg",
];

/// Register the service worker. Registration failure (unsupported browser,
/// non-secure context) leaves the app fully functional, just not offline.
#[cfg(target_arch = "wasm32")]
pub fn register() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register("./sw.js");
    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => tracing::info!("offline shell registered"),
            Err(err) => tracing::warn!("offline shell registration failed: {err:?}"),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn register() {}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKER_SOURCE: &str = include_str!("../assets/sw.js");

    #[test]
    fn worker_uses_the_declared_cache_bucket() {
        assert!(WORKER_SOURCE.contains(CACHE_NAME));
    }

    #[test]
    fn worker_precaches_every_shell_asset() {
        for asset in SHELL_ASSETS {
            assert!(
                WORKER_SOURCE.contains(&format!("'{asset}'")),
                "worker manifest is missing {asset}"
            );
        }
    }

    #[test]
    fn shell_manifest_covers_the_offline_minimum() {
        assert!(SHELL_ASSETS.contains(&"./"));
        assert!(SHELL_ASSETS.contains(&"./manifest.json"));
        assert_eq!(
            SHELL_ASSETS.iter().filter(|a| a.contains("icon")).count(),
            2
        );
    }
}
