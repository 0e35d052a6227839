//! # twet
//!
//! The twtxt record model: parse feeds, hash records, rebuild reply threads
//! and count hashtags.
//!
//! ## Architecture
//!
//! ```text
//! lines + FeedSource → parser → RecordSet → {hash, thread, tags}
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # All records from a few local feeds, oldest first
//! twet records alice.txt bob.txt
//!
//! # A conversation
//! twet thread '#ydxxmnq' alice.txt bob.txt
//!
//! # Hashtag counts
//! twet tags alice.txt bob.txt
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) holds the optional configuration and the
/// parse options, and maps local files to feed identities.
pub mod app;

/// Command-line interface using clap.
///
/// - `records <files>` - List records, oldest first
/// - `thread <hash> <files>` - Show a record and its replies
/// - `tags <files>` - Count hashtags
pub mod cli;

/// User configuration, loaded from an explicit TOML path.
pub mod config;

/// Core domain models.
///
/// - [`FeedSource`](domain::FeedSource): Feed identity and declared metadata
/// - [`Record`](domain::Record): One timestamped post with its content hash
/// - [`RecordSet`](domain::RecordSet): Ordered records with thread and tag views
/// - [`Thread`](domain::Thread): Root record plus replies
pub mod domain;

/// Feed parsing: timestamps, directives and record lines.
pub mod parser;

pub use app::{Result, TwetError};
pub use domain::{FeedMeta, FeedSource, Record, RecordSet, Thread};
pub use parser::{parse_feed, parse_lines, ParseOptions};
