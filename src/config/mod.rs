//! Configuration management.
//!
//! Configuration is read from `~/.config/noor/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! written there. Every field is optional.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::domain::Language;
use crate::fetcher::http_fetcher::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Language the supplication screen opens in.
    pub language: Language,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            api_base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneralConfig {
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_base_url.clone(),
            source: e,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file is created with the commented defaults. An invalid
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            tracing::info!("Writing default config to {}", config_path.display());
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.clone(),
            source: e,
        })?;
        config.general.api_base()?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// `~/.config/noor/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("noor").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn default_config_content() -> &'static str {
        r##"# Noor Configuration
#
# Colors can be named (Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
# DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
# LightCyan, White, Reset) or hex ("#RRGGBB" / "#RGB").
#
# Keys can be single characters ("j", "/"), special keys (Enter, Tab,
# Backspace, Esc, Up, Down, Left, Right, PageUp, PageDown, Space, F1-F12),
# or combinations ("Ctrl+c", "Shift+Tab").

[general]
# One of: bengali, english, hindi, urdu
language = "bengali"
api_base_url = "https://api.alquran.cloud/v1/"
request_timeout_secs = 10

[colors]
border = "DarkGray"
focused_border = "Green"
selection_bg = "Green"
selection_fg = "Black"
heading = "LightGreen"
active_tab = "Yellow"
arabic_text = "White"
transliteration = "Gray"
meccan_badge = "Yellow"
medinan_badge = "Green"
search_active = "Yellow"
error = "Red"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]
select = ["Enter"]
back = ["Esc", "Backspace", "h", "Left"]
search = ["/"]
next_language = ["l"]
# Duas: switch focus between categories and records. Quran: next tab.
next_pane = ["Tab"]
"##
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid api_base_url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}
