//! CLI argument definitions for the `slothpark` binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use slothpark_core::{expand_home, SlothParkConfig};

/// Sloth Park: the marketing page and Sammy the Sloth, in your terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "slothpark", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Milliseconds between revealed characters.
    #[arg(long = "tick-ms")]
    pub tick_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Log file used while the terminal UI is running.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Line-oriented chat on stdin/stdout instead of the terminal UI.
    #[arg(long = "plain")]
    pub plain: bool,

    /// Print the default configuration as TOML and exit.
    #[arg(long = "print-default-config")]
    pub print_default_config: bool,

    /// Write the configuration (defaults plus overrides) to the config path
    /// if no file exists there, then exit.
    #[arg(long = "init-config")]
    pub init_config: bool,

    /// Print the page content as JSON and exit.
    #[arg(long = "dump-content")]
    pub dump_content: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SLOTHPARK_CONFIG env var > ~/.slothpark/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SLOTHPARK_CONFIG") {
            return PathBuf::from(p);
        }
        expand_home("~/.slothpark/config.toml")
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &SlothParkConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }

    /// Resolve the log file path, expanding `~`.
    pub fn resolve_log_file(&self, config: &SlothParkConfig) -> PathBuf {
        match self.log_file {
            Some(ref p) => p.clone(),
            None => expand_home(&config.general.log_file),
        }
    }

    /// Fold command-line overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut SlothParkConfig) {
        if let Some(ms) = self.tick_ms {
            config.chat.tick_ms = ms;
        }
        config.general.log_level = self.resolve_log_level(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "slothpark",
            "-c",
            "/tmp/park.toml",
            "--tick-ms",
            "5",
            "-l",
            "debug",
            "--plain",
            "--init-config",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/park.toml")));
        assert_eq!(args.tick_ms, Some(5));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.plain);
        assert!(args.init_config);
        assert!(!args.print_default_config);
        assert!(!args.dump_content);
    }

    #[test]
    fn test_config_flag_wins() {
        let args = CliArgs {
            config: Some(PathBuf::from("custom.toml")),
            ..Default::default()
        };
        assert_eq!(args.resolve_config_path(), PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_overrides_fold_into_config() {
        let args = CliArgs {
            tick_ms: Some(7),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        let mut config = SlothParkConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.chat.tick_ms, 7);
        assert_eq!(config.general.log_level, "trace");
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let args = CliArgs::default();
        let mut config = SlothParkConfig::default();
        config.general.log_level = "warn".to_string();
        config.general.log_file = "/var/log/slothpark.log".to_string();

        assert_eq!(args.resolve_log_level(&config), "warn");
        assert_eq!(
            args.resolve_log_file(&config),
            PathBuf::from("/var/log/slothpark.log")
        );
        args.apply_overrides(&mut config);
        assert_eq!(config.chat.tick_ms, 100);
    }
}
