/// Metadata a feed declares about itself through `# key = value` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedMeta {
    pub nick: Option<String>,
    pub urls: Vec<String>,
}

/// Identity of the feed a record was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSource {
    pub nick: String,
    pub url: String,
    pub meta: FeedMeta,
}

impl FeedSource {
    pub fn new(nick: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            url: url.into(),
            meta: FeedMeta::default(),
        }
    }

    pub fn display_nick(&self) -> &str {
        self.meta.nick.as_deref().unwrap_or(&self.nick)
    }

    /// URL used when hashing records of this feed.
    ///
    /// The first declared `# url =` wins over the URL the feed was fetched
    /// from, so a feed can move without changing the hashes of its records.
    pub fn authoritative_url(&self) -> &str {
        self.meta.urls.first().map(String::as_str).unwrap_or(&self.url)
    }
}
