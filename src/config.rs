use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Site copy rendered into the pages. A config file only needs to list the
/// fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub about: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blicker".to_string(),
            tagline: "Watch the tickers, read the notes.".to_string(),
            about: "a site to collect and monitor stock symbols while I blog about them"
                .to_string(),
        }
    }
}

pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("BLICKER_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("config/site.json")
}

/// A missing file yields the defaults; an unreadable or unparsable file is
/// logged and yields the defaults too.
pub async fn load_config(path: &Path) -> SiteConfig {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(config) => config,
            Err(err) => {
                error!("failed to parse config file: {err}");
                SiteConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => SiteConfig::default(),
        Err(err) => {
            error!("failed to read config file: {err}");
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_site_copy() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Blicker");
        assert_eq!(
            config.about,
            "a site to collect and monitor stock symbols while I blog about them"
        );
        assert!(!config.tagline.is_empty());
    }

    #[test]
    fn partial_config_file_keeps_remaining_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{ "title": "Ticker Tape" }"#).unwrap();
        assert_eq!(config.title, "Ticker Tape");
        assert_eq!(config.tagline, SiteConfig::default().tagline);
        assert_eq!(config.about, SiteConfig::default().about);
    }
}
