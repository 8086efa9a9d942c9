//! URL construction for the Twitch embed player and channel preview images.

/// Host serving the embeddable player iframe.
pub const EMBED_HOST: &str = "player.twitch.tv";

/// CDN serving live channel preview thumbnails.
pub const THUMBNAIL_HOST: &str = "static-cdn.jtvnw.net";

/// Normalize raw channel input: trim whitespace and lowercase.
/// Returns `None` for empty input so callers can treat it as a no-op.
pub fn normalize_channel(raw: &str) -> Option<String> {
    let channel = raw.trim().to_lowercase();
    if channel.is_empty() {
        None
    } else {
        Some(channel)
    }
}

/// Build the embed player URL for a channel.
///
/// The `parent` parameter must be the hostname serving this page or the embed
/// refuses to load. Mute has no live API on the embed, so the flag is baked
/// into the URL and mute changes require a reload.
pub fn embed_url(channel: &str, parent: &str, muted: bool) -> String {
    format!(
        "https://{EMBED_HOST}/?channel={}&parent={}&muted={}",
        urlencoding::encode(channel),
        urlencoding::encode(parent),
        if muted { "true" } else { "false" },
    )
}

/// Live preview thumbnail for a channel. Returns 404 while the channel is
/// offline; the history list hides the image in that case.
pub fn thumbnail_url(channel: &str) -> String {
    format!("https://{THUMBNAIL_HOST}/previews-ttv/live_user_{channel}-440x248.jpg")
}

/// Hostname of the page currently hosting the app, for the embed `parent`
/// parameter.
#[cfg(target_arch = "wasm32")]
pub fn page_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_hostname() -> String {
    "localhost".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_channel("  Shroud "), Some("shroud".to_string()));
        assert_eq!(normalize_channel("ESL_CSGO"), Some("esl_csgo".to_string()));
    }

    #[test]
    fn normalize_rejects_empty_input() {
        assert_eq!(normalize_channel(""), None);
        assert_eq!(normalize_channel("   "), None);
    }

    #[test]
    fn embed_url_carries_channel_parent_and_mute_flag() {
        let url = embed_url("shroud", "example.com", false);
        assert_eq!(
            url,
            "https://player.twitch.tv/?channel=shroud&parent=example.com&muted=false"
        );

        let muted = embed_url("shroud", "example.com", true);
        assert!(muted.ends_with("&muted=true"));
    }

    #[test]
    fn embed_url_percent_encodes_parameters() {
        let url = embed_url("a b&c", "example.com", false);
        assert!(url.contains("channel=a%20b%26c"));
    }

    #[test]
    fn thumbnail_url_uses_preview_naming_scheme() {
        assert_eq!(
            thumbnail_url("shroud"),
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_shroud-440x248.jpg"
        );
    }
}
