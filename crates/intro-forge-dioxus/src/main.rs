use dioxus::prelude::*;

mod ui;

use intro_forge_config::Config;
use ui::App;
use ui::components::ErrorScreen;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("intro-forge starting up!");
    log::info!("Config path: {}", Config::config_path().display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    match Config::load_or_default(None) {
        Ok(config) => rsx! {
            App { config: config }
        },
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            rsx! {
                ErrorScreen {
                    title: "Config Error".to_string(),
                    message: format!("Failed to load {}", Config::config_path().display()),
                    details: Some(e.to_string()),
                }
            }
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("intro-forge")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
