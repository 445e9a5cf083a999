use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Scroll thresholds, in logical pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Offset past which the header switches to its scrolled chrome
    #[serde(default = "default_header_threshold")]
    pub header_threshold_px: f64,
    /// Distance ahead of a section at which its reveal fires
    #[serde(default = "default_lookahead")]
    pub lookahead_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: default_header_threshold(),
            lookahead_px: default_lookahead(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds (0 = autoplay disabled)
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Caption entrance duration in milliseconds
    #[serde(default = "default_transition")]
    pub transition_ms: u64,
    /// Caption entrance easing
    #[serde(default = "default_carousel_easing")]
    pub easing: EasingType,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
            transition_ms: default_transition(),
            easing: default_carousel_easing(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while reveals, the carousel or the page scroll are animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Animate page scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    /// Page scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u64,
    /// Page scroll easing
    #[serde(default)]
    pub scroll_easing: EasingType,
    /// Rows moved per scroll key press
    #[serde(default = "default_scroll_step")]
    pub scroll_step_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            smooth_scroll: default_true(),
            scroll_duration_ms: default_scroll_duration(),
            scroll_easing: EasingType::default(),
            scroll_step_rows: default_scroll_step(),
        }
    }
}

/// Easing curve for animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Constant speed
    Linear,
    /// Ease-out cubic, 1 - (1-t)^3; every page entrance uses it
    #[default]
    Cubic,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vista")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_header_threshold() -> f64 {
    40.0
}

fn default_lookahead() -> f64 {
    300.0
}

fn default_autoplay_interval() -> u64 {
    13_000
}

fn default_transition() -> u64 {
    650
}

fn default_carousel_easing() -> EasingType {
    EasingType::Cubic
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_duration() -> u64 {
    220
}

fn default_scroll_step() -> u16 {
    2
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when the file is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Render the configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vista/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vista")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the terminal UI owns stderr
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("vista.log")
    }
}
