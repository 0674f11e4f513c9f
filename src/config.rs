use crate::bluesky::auth::Credentials;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_FILE: &str = ".env";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub bluesky: BlueskyConfig,
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BlueskyConfig {
    pub api_base: String,
}

impl Default for BlueskyConfig {
    fn default() -> Self {
        Self {
            api_base: "https://bsky.social".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedsConfig {
    pub urls: Vec<String>,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            urls: vec![
                "https://www.sciencedaily.com/rss/computers_math/artificial_intelligence.xml".to_string(),
                "https://feeds.a.dj.com/rss/RSSWSJD.xml".to_string(),
                "https://www.engadget.com/rss.xml".to_string(),
                "https://rss.nytimes.com/services/xml/rss/nyt/Technology.xml".to_string(),
                "https://www.reutersagency.com/feed/?best-topics=tech&post_type=best".to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    pub dir: PathBuf,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("images"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub default_port: u16,
}

fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_port: default_port(),
        }
    }
}

/// Where credentials come from. Anything other than `ENVIRONMENT=production`
/// is treated as a local development checkout with a `.env` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Development,
    Production,
}

impl Deployment {
    pub fn from_env() -> Self {
        Self::parse(std::env::var("ENVIRONMENT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") => Deployment::Production,
            _ => Deployment::Development,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }
        Self::load(path)
    }

    /// Load .env file into process environment. Real env vars take precedence.
    /// In development the file is required; production reads the process env only.
    pub fn load_env_file(deployment: Deployment) -> Result<()> {
        load_env_from(Path::new(ENV_FILE), deployment)
    }

    /// Bluesky login comes from BLUESKY_USERNAME / BLUESKY_PASSWORD.
    pub fn credentials() -> Result<Credentials> {
        credentials_from(|key| std::env::var(key).ok())
    }

    /// Listening port: `PORT` if set, otherwise the configured default.
    pub fn port(&self) -> Result<u16> {
        resolve_port(std::env::var("PORT").ok().as_deref(), self.server.default_port)
    }
}

fn load_env_from(path: &Path, deployment: Deployment) -> Result<()> {
    if deployment == Deployment::Production {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Error loading {} file", path.display()))?;
    for (key, value) in parse_env_file(&content) {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}

fn parse_env_file(content: &str) -> Vec<(String, String)> {
    // Strip BOM if present (common on Windows-created files)
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut vars = Vec::new();
    for line in content.lines() {
        let line = line.trim().trim_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            vars.push((key.to_string(), value.to_string()));
        }
    }
    vars
}

fn credentials_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
    let required = |key: &str| -> Result<String> {
        match lookup(key) {
            Some(value) if !sanitize_key(&value).is_empty() => Ok(sanitize_key(&value)),
            _ => anyhow::bail!("{} environment variable not set", key),
        }
    };
    Ok(Credentials {
        identifier: required("BLUESKY_USERNAME")?,
        password: required("BLUESKY_PASSWORD")?,
    })
}

fn resolve_port(value: Option<&str>, default: u16) -> Result<u16> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("invalid PORT value: {}", raw)),
    }
}

/// Strip carriage returns, BOM, and other invisible chars from a key/path value.
fn sanitize_key(raw: &str) -> String {
    raw.replace(['\r', '\u{feff}', '\u{200b}'], "")
        .trim()
        .to_string()
}
