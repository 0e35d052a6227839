//! User configuration: who you are and whom you follow.
//!
//! The file is TOML and is always given explicitly; nothing here searches
//! the filesystem for it.
//!
//! ```toml
//! nick = "alice"
//! twturl = "https://a.example/twtxt.txt"
//! twtfile = "/home/alice/twtxt.txt"
//!
//! [following]
//! bob = "https://b.example/twtxt.txt"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::FeedSource;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub nick: String,
    pub twturl: String,
    /// Local copy of your own feed.
    pub twtfile: Option<PathBuf>,
    /// Followed feeds, nick to URL.
    pub following: BTreeMap<String, String>,
    /// Log feed lines that could not be parsed.
    pub verbose: bool,
}

impl Config {
    /// Load and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.nick.is_empty() || self.twturl.is_empty() {
            return Err(ConfigError::Incomplete);
        }

        Url::parse(&self.twturl).map_err(|e| ConfigError::InvalidUrl {
            name: "twturl".into(),
            source: e,
        })?;

        for (nick, url) in &self.following {
            Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
                name: format!("following.{}", nick),
                source: e,
            })?;
        }

        Ok(())
    }

    /// Identity of your own feed.
    pub fn feed_source(&self) -> FeedSource {
        FeedSource::new(self.nick.clone(), self.twturl.clone())
    }

    /// One identity per followed feed, ordered by nick.
    pub fn following_sources(&self) -> Vec<FeedSource> {
        self.following
            .iter()
            .map(|(nick, url)| FeedSource::new(nick.clone(), url.clone()))
            .collect()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse config: {0}")]
    Syntax(#[from] toml::de::Error),

    #[error("both nick and twturl must be set")]
    Incomplete,

    #[error("Invalid URL for {name}: {source}")]
    InvalidUrl {
        name: String,
        source: url::ParseError,
    },
}
