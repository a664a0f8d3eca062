use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SlothParkError};

/// Top-level configuration for the Sloth Park application.
///
/// Loaded from `~/.slothpark/config.toml` by default. Every section and field
/// falls back to its default when missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlothParkConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl SlothParkConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SlothParkConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SlothParkError::Config(e.to_string()))
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Log file used while the terminal UI owns the screen. Empty disables it.
    pub log_file: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: "~/.slothpark/slothpark.log".to_string(),
        }
    }
}

/// What happens to the conversation when the chat panel is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReopenPolicy {
    /// Keep the conversation; reopening does not greet again.
    #[default]
    Resume,
    /// Clear the conversation on close; the next open greets again.
    Restart,
}

/// Chat widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Display name of the mascot.
    pub mascot_name: String,
    /// Milliseconds between revealed characters.
    pub tick_ms: u64,
    /// Conversation handling across close/open.
    pub reopen_policy: ReopenPolicy,
    /// Maximum accepted input length, in characters.
    pub max_input_chars: usize,
    /// Placeholder shown in the empty input field.
    pub placeholder: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            mascot_name: "Sammy the Sloth".to_string(),
            tick_ms: 100,
            reopen_policy: ReopenPolicy::Resume,
            max_input_chars: 500,
            placeholder: "Ask about Sloth Park...".to_string(),
        }
    }
}

impl ChatConfig {
    /// Reveal tick period. Never zero.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// First word of the mascot name ("Sammy" for "Sammy the Sloth").
    pub fn mascot_short_name(&self) -> &str {
        self.mascot_name
            .split_whitespace()
            .next()
            .unwrap_or(self.mascot_name.as_str())
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = SlothParkConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.log_file, "~/.slothpark/slothpark.log");
        assert_eq!(config.chat.mascot_name, "Sammy the Sloth");
        assert_eq!(config.chat.tick_ms, 100);
        assert_eq!(config.chat.reopen_policy, ReopenPolicy::Resume);
        assert_eq!(config.chat.max_input_chars, 500);
        assert_eq!(config.chat.placeholder, "Ask about Sloth Park...");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"
log_file = ""

[chat]
mascot_name = "Sid the Sloth"
tick_ms = 40
reopen_policy = "restart"
max_input_chars = 80
placeholder = "Say something"
"#;
        let file = create_temp_config(content);
        let config = SlothParkConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert!(config.general.log_file.is_empty());
        assert_eq!(config.chat.mascot_name, "Sid the Sloth");
        assert_eq!(config.chat.tick_ms, 40);
        assert_eq!(config.chat.reopen_policy, ReopenPolicy::Restart);
        assert_eq!(config.chat.max_input_chars, 80);
        assert_eq!(config.chat.placeholder, "Say something");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[chat]
tick_ms = 250
"#;
        let file = create_temp_config(content);
        let config = SlothParkConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.tick_ms, 250);
        assert_eq!(config.chat.mascot_name, "Sammy the Sloth");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = SlothParkConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.tick_ms, 100);
        assert_eq!(config.chat.reopen_policy, ReopenPolicy::Resume);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = SlothParkConfig::load(file.path());
        assert!(matches!(result, Err(SlothParkError::Config(_))));
    }

    #[test]
    fn test_unknown_reopen_policy_is_rejected() {
        let file = create_temp_config("[chat]\nreopen_policy = \"sometimes\"\n");
        assert!(SlothParkConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SlothParkConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.chat.tick_ms, 100);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = SlothParkConfig::default();
        config.chat.reopen_policy = ReopenPolicy::Restart;
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = SlothParkConfig::load(&path).unwrap();
        assert_eq!(reloaded.chat.reopen_policy, ReopenPolicy::Restart);
        assert_eq!(reloaded.chat.mascot_name, config.chat.mascot_name);
    }

    #[test]
    fn test_toml_string_mentions_sections() {
        let rendered = SlothParkConfig::default().to_toml_string().unwrap();
        assert!(rendered.contains("[general]"));
        assert!(rendered.contains("[chat]"));
        assert!(rendered.contains("reopen_policy = \"resume\""));
    }

    #[test]
    fn test_tick_is_never_zero() {
        let mut chat = ChatConfig::default();
        assert_eq!(chat.tick(), Duration::from_millis(100));
        chat.tick_ms = 0;
        assert_eq!(chat.tick(), Duration::from_millis(1));
    }

    #[test]
    fn test_mascot_short_name() {
        let mut chat = ChatConfig::default();
        assert_eq!(chat.mascot_short_name(), "Sammy");
        chat.mascot_name = String::new();
        assert_eq!(chat.mascot_short_name(), "");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/x.log"), PathBuf::from("/var/log/x.log"));
        let expanded = expand_home("~/.slothpark/slothpark.log");
        assert!(expanded.ends_with(".slothpark/slothpark.log"));
        assert!(!expanded.starts_with("~"));
    }
}
