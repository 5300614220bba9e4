//! Chat dispatch
//!
//! Wraps a message and hands every chunk, in order, to a transport sink.

use crate::config::{DispatchConfig, WrapConfig};
use crate::plain_wrap::wrap_message;
use crate::rich_wrap::rich_wrap_message;
use crate::types::{ChatMode, OutgoingMessage, Recipient};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Transport that delivers one chunk
#[async_trait]
pub trait ChatSink: Send + Sync {
    async fn send(&self, message: OutgoingMessage) -> Result<()>;
}

pub struct ChatDispatcher<S> {
    sink: S,
    wrap: WrapConfig,
    config: DispatchConfig,
}

impl<S: ChatSink> ChatDispatcher<S> {
    pub fn new(sink: S, wrap: WrapConfig, config: DispatchConfig) -> Self {
        Self { sink, wrap, config }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Split `text` into chunks for this dispatcher's limits
    pub fn wrap(&self, text: &str, rich: bool) -> Vec<String> {
        if rich {
            rich_wrap_message(text)
        } else {
            wrap_message(text, self.wrap.max_line_length)
        }
    }

    /// Send with the configured default colour and rich flag
    pub async fn say_default(&self, recipient: Recipient, text: &str) -> Result<usize> {
        self.say(recipient, text, &self.config.default_color, self.config.rich)
            .await
    }

    /// Wrap `text` and send every chunk to `recipient`.
    ///
    /// Console recipients (including player id 0) are logged instead of sent.
    /// Returns the number of chunks sent. A failed send stops the remaining
    /// chunks.
    pub async fn say(&self, recipient: Recipient, text: &str, color: &str, rich: bool) -> Result<usize> {
        let mode = match recipient {
            Recipient::Console => {
                info!("{}", text);
                return Ok(0);
            }
            Recipient::Player(id) if id.is_console() => {
                info!("{}", text);
                return Ok(0);
            }
            Recipient::Player(_) => ChatMode::Say,
            Recipient::Broadcast => {
                info!("Broadcast: {}", text);
                ChatMode::Global
            }
        };

        let chunks = self.wrap(text, rich);
        let total = chunks.len();
        debug!("Sending {} chunk(s) to {}", total, recipient);

        let delay = Duration::from_millis(self.config.send_delay_ms);
        for (index, chunk) in chunks.into_iter().enumerate() {
            if index > 0 && !delay.is_zero() {
                // Small delay to avoid flooding
                tokio::time::sleep(delay).await;
            }

            let message = OutgoingMessage {
                text: chunk,
                recipient,
                mode,
                color: color.to_string(),
                rich,
            };
            self.sink
                .send(message)
                .await
                .with_context(|| format!("Failed to send chunk {}/{} to {}", index + 1, total, recipient))?;
        }

        Ok(total)
    }
}
