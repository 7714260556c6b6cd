use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use image_form::{use_query_cache, use_toaster, ToastHost};

mod components;
mod config;
mod error;
mod i18n;

use components::HomeScreen;
use config::AppConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{} {}, falling back to defaults", e.user_message(), e);
            AppConfig::default()
        }
    };

    let form_context = match config.form_context() {
        Ok(context) => context,
        Err(e) => {
            log::error!("{} Failed to set up HTTP clients: {}", e.user_message(), e);
            std::process::exit(1);
        }
    };

    log::info!("Starting UpFi against {}", config.api_base_url);
    dioxus::LaunchBuilder::new()
        .with_context(form_context)
        .launch(App);
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    use_query_cache();
    use_toaster();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "min-height: 100vh; font-family: sans-serif;",
            HomeScreen {}
        }

        ToastHost {}
    }
}
