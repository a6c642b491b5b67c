mod components;
pub mod config;
pub mod content;
mod pages;
pub mod payment;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use state::notifications::{Notification, NotificationKind, Notifier};

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// Browser entry point: logging, runtime config, then the app.
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting Polyglot frontend (wasm)");

    // The subscription widget reads the cached config when it mounts, so the
    // app is mounted only after config.json has been consulted.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
        router::mount_app();
    });
}
