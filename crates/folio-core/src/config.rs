use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Portfolio content file; built-in content is used when unset
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            content_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name ("portfolio", "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub header: HeaderConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme_name(),
            scroll: ScrollConfig::default(),
            header: HeaderConfig::default(),
        }
    }
}

/// Easing curve used by page scrolling and the header slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Cubic ease-in-out
    EaseInOut,
}

/// Smooth scrolling of the page viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Rows moved per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Fixed header slide-away behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Vertical offset (rows, negative) applied while the header is hidden
    #[serde(default = "default_hide_offset")]
    pub hide_offset: i16,
    #[serde(default = "default_header_transition")]
    pub transition_ms: u64,
    #[serde(default = "default_header_easing")]
    pub easing: EasingType,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            hide_offset: default_hide_offset(),
            transition_ms: default_header_transition(),
            easing: default_header_easing(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Endpoint the contact form is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Minimum number of characters in the message field
    #[serde(default = "default_comment_min_length")]
    pub comment_min_length: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_timeout(),
            comment_min_length: default_comment_min_length(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Page scrolling
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Focus ring (header links, form fields)
    #[serde(default = "default_key_next_focus")]
    pub next_focus: String,
    #[serde(default = "default_key_prev_focus")]
    pub prev_focus: String,
    /// Follow the focused link or start editing the focused field
    #[serde(default = "default_key_activate")]
    pub activate: String,

    // Section shortcuts
    #[serde(default = "default_key_goto_projects")]
    pub goto_projects: String,
    #[serde(default = "default_key_goto_contact")]
    pub goto_contact: String,

    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_focus: default_key_next_focus(),
            prev_focus: default_key_prev_focus(),
            activate: default_key_activate(),
            goto_projects: default_key_goto_projects(),
            goto_contact: default_key_goto_contact(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_focus() -> String { "<Tab>".to_string() }
fn default_key_prev_focus() -> String { "<S-Tab>".to_string() }
fn default_key_activate() -> String { "<CR>".to_string() }
fn default_key_goto_projects() -> String { "p".to_string() }
fn default_key_goto_contact() -> String { "c".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "portfolio".to_string()
}

fn default_scroll_duration() -> u64 {
    300
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_hide_offset() -> i16 {
    -3 // header height in rows
}

fn default_header_transition() -> u64 {
    300
}

fn default_header_easing() -> EasingType {
    EasingType::EaseInOut
}

fn default_endpoint() -> String {
    "https://example.com/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_comment_min_length() -> usize {
    25
}

/// Expand tilde (~) in path to user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
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
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit file, defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Content file with tilde expansion, if one is configured
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme, "portfolio");
        assert_eq!(config.ui.header.hide_offset, -3);
        assert_eq!(config.ui.header.easing, EasingType::EaseInOut);
        assert_eq!(config.contact.comment_min_length, 25);
        assert_eq!(config.keymap.jump_to_top, "gg");
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [ui]
            theme = "nord"

            [ui.scroll]
            smooth_enabled = false
            easing = "ease_out"

            [contact]
            comment_min_length = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, "nord");
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.ui.scroll.animation_duration_ms, 300);
        assert_eq!(config.contact.comment_min_length, 10);
        assert_eq!(config.contact.endpoint, "https://example.com/api");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\ntheme = ").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        let path = Path::new("/tmp/folio");
        assert_eq!(expand_tilde(path), PathBuf::from("/tmp/folio"));
    }
}
