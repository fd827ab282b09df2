use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::animation::Easing;
use crate::geometry::Point;
use crate::scene::SceneKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub cards: CardsConfig,
    #[serde(default)]
    pub fire: FireConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame pacing in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Scene shown at startup
    #[serde(default)]
    pub start_scene: SceneKind,
    /// Theme name (e.g., "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            start_scene: SceneKind::default(),
            theme: default_theme_name(),
        }
    }
}

/// Card shuffling scene ("Ace of Shadows")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsConfig {
    /// Number of cards dealt into the first stack
    #[serde(default = "default_cards_amount")]
    pub cards_amount: usize,
    /// Number of stacks, including the source stack
    #[serde(default = "default_stacks_amount")]
    pub stacks_amount: usize,
    /// Vertical position of every stack origin
    #[serde(default = "default_stacks_top")]
    pub stacks_top: f64,
    /// Minimum horizontal gap between stacks
    #[serde(default = "default_min_stack_spacing")]
    pub min_stack_spacing: f64,
    /// Vertical overlap step of cards in the source stack
    #[serde(default = "default_source_offset")]
    pub source_offset: f64,
    /// Vertical overlap step of cards in target stacks
    #[serde(default = "default_target_offset")]
    pub target_offset: f64,
    /// Delay between two top-card moves
    #[serde(default = "default_card_interval")]
    pub interval_ms: u64,
    /// Fastest allowed move interval
    #[serde(default = "default_min_card_interval")]
    pub min_interval_ms: u64,
    /// Slowest allowed move interval
    #[serde(default = "default_max_card_interval")]
    pub max_interval_ms: u64,
    /// Interval change per speed key press
    #[serde(default = "default_speed_step")]
    pub speed_step_ms: u64,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            cards_amount: default_cards_amount(),
            stacks_amount: default_stacks_amount(),
            stacks_top: default_stacks_top(),
            min_stack_spacing: default_min_stack_spacing(),
            source_offset: default_source_offset(),
            target_offset: default_target_offset(),
            interval_ms: default_card_interval(),
            min_interval_ms: default_min_card_interval(),
            max_interval_ms: default_max_card_interval(),
            speed_step_ms: default_speed_step(),
        }
    }
}

/// Particle fire scene ("Phoenix Flame")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireConfig {
    /// Maximum number of live particles
    #[serde(default = "default_fire_capacity")]
    pub capacity: usize,
    /// Delay between spawn attempts
    #[serde(default = "default_spawn_interval")]
    pub spawn_interval_ms: u64,
    /// Base particle lifetime in seconds
    #[serde(default = "default_base_life")]
    pub base_life: f64,
    /// Lower bound of the lifetime multiplier
    #[serde(default = "default_life_min_factor")]
    pub life_min_factor: f64,
    /// Upper bound of the lifetime multiplier
    #[serde(default = "default_life_max_factor")]
    pub life_max_factor: f64,
    /// Campfire position in scene space
    #[serde(default = "default_fire_position")]
    pub position: Point,
    /// Particles start this far above the campfire
    #[serde(default = "default_spawn_lift")]
    pub spawn_lift: f64,
    /// Horizontal spawn jitter around the campfire
    #[serde(default = "default_jitter_radius")]
    pub jitter_radius: f64,
    /// Upward drift in units per second
    #[serde(default = "default_rise_speed")]
    pub rise_speed: f64,
    /// Maximum horizontal sway in units per second
    #[serde(default = "default_sway")]
    pub sway: f64,
    /// Smallest initial particle scale
    #[serde(default = "default_scale_min")]
    pub scale_min: f64,
    /// Largest initial particle scale
    #[serde(default = "default_scale_max")]
    pub scale_max: f64,
    /// Fraction of the initial scale left when a particle dies
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    /// Random seed for reproducible fire
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            capacity: default_fire_capacity(),
            spawn_interval_ms: default_spawn_interval(),
            base_life: default_base_life(),
            life_min_factor: default_life_min_factor(),
            life_max_factor: default_life_max_factor(),
            position: default_fire_position(),
            spawn_lift: default_spawn_lift(),
            jitter_radius: default_jitter_radius(),
            rise_speed: default_rise_speed(),
            sway: default_sway(),
            scale_min: default_scale_min(),
            scale_max: default_scale_max(),
            min_scale: default_min_scale(),
            seed: None,
        }
    }
}

/// Dialogue feed scene ("Magic Words")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Where the dialogue JSON is fetched from
    #[serde(default = "default_chat_uri")]
    pub data_uri: String,
    /// Request timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    /// Delay between two messages
    #[serde(default = "default_message_interval")]
    pub message_interval_ms: u64,
    /// Maximum width of a laid-out message line
    #[serde(default = "default_max_line_width")]
    pub max_line_width: f64,
    /// Width of one text column
    #[serde(default = "default_char_width")]
    pub char_width: f64,
    /// Height of one laid-out line
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    /// Square footprint of an inline emoji
    #[serde(default = "default_image_size")]
    pub image_size: f64,
    /// Gap between consecutive messages
    #[serde(default = "default_message_spacing")]
    pub spacing: f64,
    /// Duration of the scroll-up animation
    #[serde(default = "default_shift_duration")]
    pub shift_duration_ms: u64,
    /// Curve of the scroll-up animation: linear, cubic, quintic or ease_out
    #[serde(default)]
    pub shift_easing: Easing,
    /// Vertical position of the newest message
    #[serde(default = "default_baseline")]
    pub baseline: f64,
    /// Horizontal position of left-side messages
    #[serde(default = "default_left_x")]
    pub left_x: f64,
    /// Horizontal position of right-side messages
    #[serde(default = "default_right_x")]
    pub right_x: f64,
    /// Maximum number of messages kept in the feed (0 = unbounded)
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
    /// Speaker whose messages are drawn on the left
    #[serde(default = "default_local_speaker")]
    pub local_speaker: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            data_uri: default_chat_uri(),
            fetch_timeout_secs: default_fetch_timeout(),
            message_interval_ms: default_message_interval(),
            max_line_width: default_max_line_width(),
            char_width: default_char_width(),
            line_height: default_line_height(),
            image_size: default_image_size(),
            spacing: default_message_spacing(),
            shift_duration_ms: default_shift_duration(),
            shift_easing: Easing::default(),
            baseline: default_baseline(),
            left_x: default_left_x(),
            right_x: default_right_x(),
            max_messages: default_max_messages(),
            local_speaker: default_local_speaker(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "q", "<C-c>" (Ctrl+c), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Switch to the cards scene
    #[serde(default = "default_key_cards")]
    pub cards: String,
    /// Switch to the chat scene
    #[serde(default = "default_key_chat")]
    pub chat: String,
    /// Switch to the fire scene
    #[serde(default = "default_key_fire")]
    pub fire: String,
    /// Shorten the card move interval
    #[serde(default = "default_key_faster")]
    pub faster: String,
    /// Lengthen the card move interval
    #[serde(default = "default_key_slower")]
    pub slower: String,
    /// Cycle to the next scene
    #[serde(default = "default_key_next_scene")]
    pub next_scene: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            cards: default_key_cards(),
            chat: default_key_chat(),
            fire: default_key_fire(),
            faster: default_key_faster(),
            slower: default_key_slower(),
            next_scene: default_key_next_scene(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_cards() -> String { "1".to_string() }
fn default_key_chat() -> String { "2".to_string() }
fn default_key_fire() -> String { "3".to_string() }
fn default_key_faster() -> String { "+".to_string() }
fn default_key_slower() -> String { "-".to_string() }
fn default_key_next_scene() -> String { "<Tab>".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vignette")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    16 // ~60fps
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_cards_amount() -> usize {
    144
}

fn default_stacks_amount() -> usize {
    4
}

fn default_stacks_top() -> f64 {
    400.0
}

fn default_min_stack_spacing() -> f64 {
    100.0
}

fn default_source_offset() -> f64 {
    1.0
}

fn default_target_offset() -> f64 {
    2.0
}

fn default_card_interval() -> u64 {
    1000
}

fn default_min_card_interval() -> u64 {
    200
}

fn default_max_card_interval() -> u64 {
    2000
}

fn default_speed_step() -> u64 {
    200
}

fn default_fire_capacity() -> usize {
    10
}

fn default_spawn_interval() -> u64 {
    50
}

fn default_base_life() -> f64 {
    0.667 // 40 frames at 60fps
}

fn default_life_min_factor() -> f64 {
    0.7
}

fn default_life_max_factor() -> f64 {
    1.2
}

fn default_fire_position() -> Point {
    Point::new(600.0, 400.0)
}

fn default_spawn_lift() -> f64 {
    20.0
}

fn default_jitter_radius() -> f64 {
    15.0
}

fn default_rise_speed() -> f64 {
    120.0 // 2 units per frame at 60fps
}

fn default_sway() -> f64 {
    60.0
}

fn default_scale_min() -> f64 {
    0.3
}

fn default_scale_max() -> f64 {
    0.5
}

fn default_min_scale() -> f64 {
    0.3
}

fn default_chat_uri() -> String {
    "https://private-624120-softgamesassignment.apiary-mock.com/v2/magicwords".to_string()
}

fn default_fetch_timeout() -> u64 {
    3
}

fn default_message_interval() -> u64 {
    2000
}

fn default_max_line_width() -> f64 {
    300.0
}

fn default_char_width() -> f64 {
    10.0
}

fn default_line_height() -> f64 {
    24.0
}

fn default_image_size() -> f64 {
    24.0
}

fn default_message_spacing() -> f64 {
    5.0
}

fn default_shift_duration() -> u64 {
    300
}

fn default_baseline() -> f64 {
    580.0
}

fn default_left_x() -> f64 {
    40.0
}

fn default_right_x() -> f64 {
    640.0
}

fn default_max_messages() -> usize {
    50
}

fn default_local_speaker() -> String {
    "Sheldon".to_string()
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
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vignette/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vignette")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("vignette.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
