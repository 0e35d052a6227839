use super::Record;

/// A conversation: the record a hash points at plus every reply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thread {
    /// `None` when no record in the set carries the requested hash.
    pub root: Option<Record>,
    /// Replies in the order they appear in the record set.
    pub replies: Vec<Record>,
}

impl Thread {
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.replies.is_empty()
    }
}
