use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod keybind_validator;

// Embed default configuration
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "GUESS_NUMBER_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub keybinds: Keybinds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Whether new rounds start with hints visible
    #[serde(default)]
    pub hints_enabled: bool,
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameConfig {
    /// Fixed RNG seed (random from the OS when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Hex colors (`#rrggbb`) used by the terminal frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_background_color")]
    pub background: String,
    #[serde(default = "default_text_color")]
    pub text: String,
    #[serde(default = "default_highlight_color")]
    pub highlight: String,
    #[serde(default = "default_win_color")]
    pub win: String,
    #[serde(default = "default_lose_color")]
    pub lose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybinds {
    // Navigation
    #[serde(default = "default_navigate_up")]
    pub navigate_up: String,
    #[serde(default = "default_navigate_down")]
    pub navigate_down: String,
    #[serde(default = "default_navigate_left")]
    pub navigate_left: String,
    #[serde(default = "default_navigate_right")]
    pub navigate_right: String,

    // Actions
    #[serde(default = "default_select")]
    pub select: String,
    #[serde(default = "default_submit")]
    pub submit: String,
    #[serde(default = "default_toggle_hints")]
    pub toggle_hints: String,

    // Game options
    #[serde(default = "default_new_game")]
    pub new_game: String,
    #[serde(default = "default_quit")]
    pub quit: String,
}

fn default_poll_timeout_ms() -> u64 {
    16 // ~60 FPS
}

fn default_background_color() -> String {
    "#8442f5".to_string()
}
fn default_text_color() -> String {
    "#ffffff".to_string()
}
fn default_highlight_color() -> String {
    "#ffd700".to_string()
}
fn default_win_color() -> String {
    "#5beb34".to_string()
}
fn default_lose_color() -> String {
    "#c71818".to_string()
}

pub(crate) fn default_navigate_up() -> String {
    "Up".to_string()
}
pub(crate) fn default_navigate_down() -> String {
    "Down".to_string()
}
fn default_navigate_left() -> String {
    "Left".to_string()
}
fn default_navigate_right() -> String {
    "Right".to_string()
}
pub(crate) fn default_select() -> String {
    "Enter".to_string()
}
pub(crate) fn default_submit() -> String {
    "Enter".to_string()
}
fn default_toggle_hints() -> String {
    "Tab".to_string()
}
fn default_new_game() -> String {
    "Ctrl+n".to_string()
}
pub(crate) fn default_quit() -> String {
    "Ctrl+q".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hints_enabled: false,
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

impl ColorConfig {
    /// `(field, value)` for every color, in config order
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("highlight", self.highlight.as_str()),
            ("win", self.win.as_str()),
            ("lose", self.lose.as_str()),
        ]
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: default_background_color(),
            text: default_text_color(),
            highlight: default_highlight_color(),
            win: default_win_color(),
            lose: default_lose_color(),
        }
    }
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            navigate_up: default_navigate_up(),
            navigate_down: default_navigate_down(),
            navigate_left: default_navigate_left(),
            navigate_right: default_navigate_right(),
            select: default_select(),
            submit: default_submit(),
            toggle_hints: default_toggle_hints(),
            new_game: default_new_game(),
            quit: default_quit(),
        }
    }
}

impl Keybinds {
    /// Resolve a key press to an action for the given screen context.
    ///
    /// Context-specific bindings are checked first, so `select` and `submit`
    /// may share a key.
    pub fn resolve_action(
        &self,
        key: crossterm::event::KeyEvent,
        context: crate::core::menu_actions::ActionContext,
    ) -> crate::core::menu_actions::MenuAction {
        use crate::core::menu_actions::{keybind_matches, ActionContext, MenuAction};

        match context {
            ActionContext::Guessing => {
                if keybind_matches(key, &self.submit) {
                    return MenuAction::Submit;
                }
            }
            ActionContext::Menu | ActionContext::RoundOver => {
                if keybind_matches(key, &self.select) {
                    return MenuAction::Select;
                }
                if keybind_matches(key, &self.navigate_up) {
                    return MenuAction::NavigateUp;
                }
                if keybind_matches(key, &self.navigate_down) {
                    return MenuAction::NavigateDown;
                }
                if keybind_matches(key, &self.navigate_left) {
                    return MenuAction::NavigateLeft;
                }
                if keybind_matches(key, &self.navigate_right) {
                    return MenuAction::NavigateRight;
                }
            }
        }

        // Bindings valid everywhere
        if keybind_matches(key, &self.quit) {
            return MenuAction::Quit;
        }
        if keybind_matches(key, &self.new_game) {
            return MenuAction::NewGame;
        }
        if context != ActionContext::Menu && keybind_matches(key, &self.toggle_hints) {
            return MenuAction::ToggleHints;
        }

        MenuAction::None
    }
}

impl Config {
    /// Data directory: `$GUESS_NUMBER_DIR`, else `~/.guess-number`
    pub fn base_dir() -> Result<PathBuf> {
        // Check for custom directory from environment variable
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".guess-number"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Write the embedded default config on first run (never overwrites)
    fn extract_defaults() -> Result<()> {
        let dir = Self::base_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {:?}", dir))?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write {:?}", config_path))?;
            tracing::info!("Extracted default config to {:?}", config_path);
        }
        Ok(())
    }

    /// Load the config from the data directory, creating it if missing
    pub fn load() -> Result<Self> {
        Self::extract_defaults()?;
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let mut config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.fix_keybinds();
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse TOML text; missing keys take their defaults
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Validate keybinds, logging issues and restoring any missing critical binding
    fn fix_keybinds(&mut self) {
        let report = keybind_validator::validate_keybinds(&self.keybinds);
        if report.has_errors() {
            tracing::warn!("Keybind validation found {} errors", report.errors().count());
            for error in report.errors() {
                tracing::warn!("  {}", error.message());
            }

            let fixed = keybind_validator::auto_fix_keybinds(&mut self.keybinds, &report.issues);
            if fixed > 0 {
                tracing::info!("Auto-fixed {} keybind issues", fixed);
            }
        }
        for warning in report.warnings() {
            tracing::warn!("Keybind warning: {}", warning.message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu_actions::{ActionContext, MenuAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let parsed = Config::parse(DEFAULT_CONFIG).expect("default config parses");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[ui]\nhints_enabled = true\n[game]\nseed = 42\n")
            .expect("partial config parses");
        assert!(config.ui.hints_enabled);
        assert_eq!(config.ui.poll_timeout_ms, 16);
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.colors, ColorConfig::default());
        assert_eq!(config.keybinds, Keybinds::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").expect("empty parses"), Config::default());
    }

    #[test]
    fn test_invalid_config_errors() {
        assert!(Config::parse("[ui]\nhints_enabled = \"maybe\"").is_err());
    }

    #[test]
    fn test_fix_keybinds_restores_quit() {
        let mut config = Config::parse("[keybinds]\nquit = \"\"\n").expect("parses");
        config.fix_keybinds();
        assert_eq!(config.keybinds.quit, "Ctrl+q");
    }

    #[test]
    fn test_enter_resolves_by_context() {
        let keybinds = Keybinds::default();
        assert_eq!(
            keybinds.resolve_action(key(KeyCode::Enter), ActionContext::Guessing),
            MenuAction::Submit
        );
        assert_eq!(
            keybinds.resolve_action(key(KeyCode::Enter), ActionContext::Menu),
            MenuAction::Select
        );
        assert_eq!(
            keybinds.resolve_action(key(KeyCode::Enter), ActionContext::RoundOver),
            MenuAction::Select
        );
    }

    #[test]
    fn test_global_bindings() {
        let keybinds = Keybinds::default();
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let new_game = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        for context in [ActionContext::Menu, ActionContext::Guessing, ActionContext::RoundOver] {
            assert_eq!(keybinds.resolve_action(quit, context), MenuAction::Quit);
            assert_eq!(keybinds.resolve_action(new_game, context), MenuAction::NewGame);
        }
        assert_eq!(
            keybinds.resolve_action(key(KeyCode::Tab), ActionContext::Guessing),
            MenuAction::ToggleHints
        );
        assert_eq!(
            keybinds.resolve_action(key(KeyCode::Tab), ActionContext::Menu),
            MenuAction::None
        );
    }

    #[test]
    fn test_digits_are_unbound_while_guessing() {
        let keybinds = Keybinds::default();
        assert_eq!(
            keybinds.resolve_action(key(KeyCode::Char('7')), ActionContext::Guessing),
            MenuAction::None
        );
    }
}
