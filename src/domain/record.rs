use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use super::hash::twt_hash;
use super::FeedSource;

/// A single timestamped post read from a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Snapshot of the feed identity at the time the record was parsed.
    pub source: Arc<FeedSource>,
    pub created: DateTime<FixedOffset>,
    pub text: String,
}

impl Record {
    pub fn new(source: Arc<FeedSource>, created: DateTime<FixedOffset>, text: String) -> Self {
        Self {
            source,
            created,
            text,
        }
    }

    /// Short content hash, recomputed on every call.
    pub fn hash(&self) -> String {
        twt_hash(self.source.authoritative_url(), &self.created, &self.text)
    }

    /// Whether the text opens with the `(#<hash>)` reply marker.
    pub fn replies_to(&self, hash: &str) -> bool {
        self.text
            .strip_prefix("(#")
            .and_then(|rest| rest.strip_prefix(hash))
            .is_some_and(|rest| rest.starts_with(')'))
    }
}
