use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};
use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "seller_admin_";

/// Application settings, read once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base URL every API endpoint is appended to, without a trailing slash.
    pub api_base_url: String,

    pub log_level: Level,

    /// How long a notification toast stays on screen.
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            log_level: Level::Info,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Defaults, adjusted for the page's host and any overrides the
    /// operator put in localStorage (`seller_admin_*` keys).
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                if hostname == "localhost" || hostname == "127.0.0.1" {
                    settings.log_level = Level::Debug;
                }
            }
        }

        let storage = LocalStorage::raw();
        settings.apply_overrides(|key| {
            storage
                .get_item(&format!("{STORAGE_PREFIX}{key}"))
                .ok()
                .flatten()
        });
        settings
    }

    /// Overwrite fields from `lookup`. Values that do not parse are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("api_base_url") {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.api_base_url = url.to_string();
            }
        }

        if let Some(level) = lookup("log_level").as_deref().and_then(parse_level) {
            self.log_level = level;
        }

        if let Some(duration) = lookup("toast_duration_ms").and_then(|v| v.trim().parse().ok()) {
            self.toast_duration_ms = duration;
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Call once at start-up, before anything reads the settings.
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
