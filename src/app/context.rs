use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use url::Url;

use crate::app::error::{Result, TwetError};
use crate::config::Config;
use crate::domain::{FeedSource, RecordSet};
use crate::parser::{parse_feed, ParseOptions};

pub struct AppContext {
    pub config: Option<Config>,
    pub options: ParseOptions,
}

impl AppContext {
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = config_path.map(Config::load).transpose()?;
        Ok(Self::with_config(config, verbose))
    }

    pub fn with_config(config: Option<Config>, verbose: bool) -> Self {
        let verbose = verbose || config.as_ref().is_some_and(|c| c.verbose);
        Self {
            config,
            options: ParseOptions { verbose },
        }
    }

    /// Identity for a local feed file.
    ///
    /// Your own `twtfile` gets the configured nick and URL. A file named after
    /// a followed nick (`bob.txt`) is a local copy of that feed and gets its
    /// URL, so its hashes match the ones other clients compute. Any other file
    /// is named after its stem and identified by its `file://` URL.
    pub fn source_for(&self, path: &Path) -> Result<FeedSource> {
        let path = fs::canonicalize(path)?;
        let nick = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(config) = &self.config {
            if let Some(twtfile) = &config.twtfile {
                if fs::canonicalize(twtfile).is_ok_and(|own| own == path) {
                    return Ok(config.feed_source());
                }
            }

            if let Some(followed) = config
                .following_sources()
                .into_iter()
                .find(|source| source.nick == nick)
            {
                return Ok(followed);
            }
        }

        let url = Url::from_file_path(&path)
            .map_err(|_| TwetError::Other(format!("Not a file path: {}", path.display())))?;

        Ok(FeedSource::new(nick, url.to_string()))
    }

    /// Parse every file in order into one record set.
    pub fn load_feeds<P: AsRef<Path>>(&self, files: &[P]) -> Result<RecordSet> {
        let mut records = RecordSet::new();
        for path in files {
            let path = path.as_ref();
            let source = self.source_for(path)?;
            let reader = BufReader::new(File::open(path)?);
            records.extend(parse_feed(reader, source, &self.options)?);
        }
        Ok(records)
    }
}
