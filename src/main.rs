use anyhow::{Context, Result};
use async_trait::async_trait;
use chatwrap::config::Config;
use chatwrap::dispatch::{ChatDispatcher, ChatSink};
use chatwrap::types::{OutgoingMessage, Recipient};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Prints every chunk on its own line
struct StdoutSink;

#[async_trait]
impl ChatSink for StdoutSink {
    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", message.text)?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the chunks
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config_path = "config.toml".to_string();
    let mut rich = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--rich" => rich = Some(true),
            "--plain" => rich = Some(false),
            _ => config_path = arg,
        }
    }

    let mut config = if Path::new(&config_path).exists() {
        match Config::from_file(&config_path) {
            Ok(cfg) => {
                info!("Configuration loaded from {}", config_path);
                cfg
            }
            Err(e) => {
                error!("Failed to load config from {}: {:#}", config_path, e);
                return Err(e);
            }
        }
    } else {
        warn!("No config at {}, using defaults (see config.toml.example)", config_path);
        Config::default()
    };
    if let Some(rich) = rich {
        config.dispatch.rich = rich;
    }

    let dispatcher = ChatDispatcher::new(StdoutSink, config.wrap, config.dispatch);

    // One message per input line
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read message from stdin")?;
        dispatcher.say_default(Recipient::Broadcast, &line).await?;
    }

    Ok(())
}
