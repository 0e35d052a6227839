pub mod hash;
pub mod record;
pub mod record_set;
pub mod source;
pub mod thread;

pub use hash::twt_hash;
pub use record::Record;
pub use record_set::RecordSet;
pub use source::{FeedMeta, FeedSource};
pub use thread::Thread;
