// src/collect/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "NEWS_HARVESTER_CONFIG";

/// One config-driven RSS source. Both fields are required; a file entry
/// missing either is a configuration error surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    pub enabled: bool,
    pub token: Option<String>,
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    pub spreadsheet_id: Option<String>,
    pub worksheet: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            worksheet: "Sheet1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feeds: Vec<FeedConfig>,
    pub slack: SlackConfig,
    pub sheets: SheetsConfig,
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, ext.as_str())
}

/// Load config using env var + fallbacks:
/// 1) $NEWS_HARVESTER_CONFIG
/// 2) config/collector.toml
/// 3) config/collector.json
///
/// Slack credentials from the environment (`SLACK_TOKEN`, `SLACK_CHANNEL`)
/// override whatever the file carries.
pub fn load_default() -> Result<AppConfig> {
    let mut cfg = if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!("NEWS_HARVESTER_CONFIG points to non-existent path"));
        }
        load_from(&pb)?
    } else {
        let toml_p = PathBuf::from("config/collector.toml");
        let json_p = PathBuf::from("config/collector.json");
        if toml_p.exists() {
            load_from(&toml_p)?
        } else if json_p.exists() {
            load_from(&json_p)?
        } else {
            AppConfig::default()
        }
    };
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn parse_config(s: &str, hint_ext: &str) -> Result<AppConfig> {
    match hint_ext {
        "toml" => toml::from_str(s).context("parsing TOML config"),
        "json" => serde_json::from_str(s).context("parsing JSON config"),
        _ => {
            if let Ok(v) = toml::from_str(s) {
                return Ok(v);
            }
            serde_json::from_str(s).context("unsupported config format")
        }
    }
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(token) = std::env::var("SLACK_TOKEN") {
        cfg.slack.token = Some(token);
    }
    if let Ok(channel) = std::env::var("SLACK_CHANNEL") {
        cfg.slack.channel = Some(channel);
    }
}
