//! Sloth Park application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Initialize tracing (log file for the terminal UI, stderr for plain mode)
//! 3. Run the terminal UI, or the line-oriented chat with `--plain`

mod app;
mod cli;
mod keys;
mod plain;
mod tui;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use slothpark_core::SlothParkConfig;
use slothpark_site::SiteContent;

use crate::cli::CliArgs;

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn stderr_subscriber(level: &str) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .finish()
}

/// Log to stderr. Used when the terminal is not taken over by the UI.
fn init_stderr_tracing(level: &str) {
    stderr_subscriber(level).init();
}

/// Log to a file so the terminal UI is not drawn over.
fn init_file_tracing(level: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Write `config` to `path` unless a file is already there. Returns whether
/// the file was written.
fn init_config_file(path: &Path, config: &SlothParkConfig) -> slothpark_core::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    config.save(path)?;
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    if args.print_default_config {
        print!("{}", SlothParkConfig::default().to_toml_string()?);
        return Ok(());
    }
    if args.dump_content {
        println!("{}", serde_json::to_string_pretty(&SiteContent::sloth_park())?);
        return Ok(());
    }

    // Config. Loaded under a short-lived stderr subscriber so a broken file
    // is reported before the terminal UI takes over.
    let config_file = args.resolve_config_path();
    let startup_level = args.log_level.as_deref().unwrap_or("info");
    let mut config = tracing::subscriber::with_default(stderr_subscriber(startup_level), || {
        if config_file.exists() {
            SlothParkConfig::load_or_default(&config_file)
        } else {
            SlothParkConfig::default()
        }
    });
    args.apply_overrides(&mut config);

    if args.init_config {
        if init_config_file(&config_file, &config)? {
            println!("Wrote {}", config_file.display());
        } else {
            println!("{} already exists, left unchanged", config_file.display());
        }
        return Ok(());
    }

    // Tracing.
    let level = config.general.log_level.clone();
    if args.plain {
        init_stderr_tracing(&level);
    } else {
        let log_file = args.resolve_log_file(&config);
        if let Err(e) = init_file_tracing(&level, &log_file) {
            eprintln!("Cannot open log file {}: {}", log_file.display(), e);
            return Err(e.into());
        }
    }

    tracing::info!("Starting Sloth Park v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");
    tracing::debug!(
        tick_ms = config.chat.tick_ms,
        policy = ?config.chat.reopen_policy,
        "Chat settings"
    );

    let site = SiteContent::sloth_park();
    if args.plain {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        plain::run_plain(&site, config.chat, stdin, tokio::io::stdout()).await?;
    } else {
        tui::run_tui(site, config.chat).await?;
    }

    Ok(())
}
