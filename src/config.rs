use crate::plain_wrap::DEFAULT_MAX_LINE_LENGTH;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub wrap: WrapConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WrapConfig {
    /// Character budget for plain messages. Rich messages use fixed limits.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Pause between consecutive chunks of one message, to avoid flooding
    #[serde(default)]
    pub send_delay_ms: u64,
    /// Whether messages are treated as rich text unless the caller says otherwise
    #[serde(default)]
    pub rich: bool,
    /// Colour passed through to the sink when the caller gives none
    #[serde(default = "default_color")]
    pub default_color: String,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_color() -> String {
    "server".to_string()
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 0,
            rich: false,
            default_color: default_color(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.wrap.max_line_length, 90);
        assert_eq!(config.dispatch.send_delay_ms, 0);
        assert!(!config.dispatch.rich);
        assert_eq!(config.dispatch.default_color, "server");
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [wrap]
            max_line_length = 40

            [dispatch]
            rich = true
            "#,
        )
        .unwrap();

        assert_eq!(config.wrap.max_line_length, 40);
        assert!(config.dispatch.rich);
        assert_eq!(config.dispatch.send_delay_ms, 0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Config::from_file("/nonexistent/chatwrap.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
