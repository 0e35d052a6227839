use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Record, Thread};

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[-0-9A-Za-z_]+").expect("tag regex"));

/// Records in file order, possibly merged from several feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Oldest first. Records with equal timestamps keep their relative order.
    pub fn sort_chronological(&mut self) {
        self.records.sort_by(|a, b| a.created.cmp(&b.created));
    }

    /// Count hashtag occurrences across all records, keyed without the `#`.
    pub fn tags(&self) -> HashMap<String, usize> {
        let mut tags = HashMap::new();
        for record in &self.records {
            for tag in TAG_RE.find_iter(&record.text) {
                *tags.entry(tag.as_str()[1..].to_string()).or_insert(0) += 1;
            }
        }
        tags
    }

    /// Collect the record with the given hash and every reply to it.
    ///
    /// A leading `#` on `hash` is ignored. If several records share the hash
    /// the last one becomes the root.
    pub fn thread(&self, hash: &str) -> Thread {
        let mut thread = Thread::default();
        let hash = hash.trim();
        let hash = hash.strip_prefix('#').unwrap_or(hash);

        if hash.is_empty() {
            return thread;
        }

        for record in &self.records {
            if record.hash() == hash {
                thread.root = Some(record.clone());
            } else if record.replies_to(hash) {
                thread.replies.push(record.clone());
            }
        }

        thread
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Extend<Record> for RecordSet {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}
