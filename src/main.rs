//! TaskFlow Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controllers;
mod error;
mod filter;
mod logging;
mod models;
mod pages;
mod router;
mod session;
mod storage;
mod store;
mod theme;
mod toast;
mod view_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] Starting TaskFlow against {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
