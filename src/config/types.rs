use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::storage::DEFAULT_CART_KEY;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the cart is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file. Defaults to `<data_dir>/shopcart/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/timer tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Prefix for every price label (default: "$").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Capture mouse events so clicks reach the app (default: true).
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
}

/// Timeline of the "added to cart" toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Delay before a toast appears (default: 10).
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,
    /// Time from push until the toast starts fading (default: 2000).
    #[serde(default = "default_visible_ms")]
    pub visible_ms: u64,
    /// Fade duration before removal (default: 300).
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,
}

/// Log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<data_dir>/shopcart/shopcart.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

fn default_fade_in_ms() -> u64 {
    10
}

fn default_visible_ms() -> u64 {
    2000
}

fn default_fade_out_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shopcart")
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| data_dir().join("storage.json"))
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl LoggingConfig {
    pub fn resolved_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| data_dir().join("shopcart.log"))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_storage_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            currency: default_currency(),
            mouse_capture: true,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: default_fade_in_ms(),
            visible_ms: default_visible_ms(),
            fade_out_ms: default_fade_out_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
