//! Pulse Dashboard - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use pulse_client::{ApiClient, ClientConfig};
use pulse_dashboard::Route;

// Assets
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("pulse_dashboard=debug,pulse_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| {
        let config = ClientConfig::from_env();
        pulse_client::log_info!("using API at {}", config.api_base_url);
        config
    });
    use_context_provider(|| ApiClient::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
