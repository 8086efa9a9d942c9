use dioxus::prelude::*;

mod components;
mod embed;
mod history;
mod offline_shell;
mod storage;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        // Web app manifest for installability
        document::Link { rel: "manifest", href: "/manifest.json" }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#18181b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "TwAudio" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
