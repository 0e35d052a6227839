//! Turns the lines of a twtxt feed into [`Record`]s.
//!
//! A record line is `<timestamp><whitespace><text>`. Lines starting with `#`
//! are comments; those shaped like `# key = value` update the feed identity
//! instead of producing a record.

pub mod meta;
pub mod time;

use std::io::BufRead;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::Result;
use crate::domain::{FeedSource, Record, RecordSet};

pub use meta::{parse_directive, Directive};
pub use time::parse_time;

// `.+?` is lazy, so the first token ends at the first whitespace run.
static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)([\t\n\x0C\r ]+)(.+)$").expect("record line regex"));

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Log lines that could not be split into timestamp and text.
    pub verbose: bool,
}

/// Incremental parser for the lines of one feed.
///
/// Every record holds a snapshot of the feed identity as it was when the
/// record's line was read. Directives further down the feed never alter
/// records already produced.
pub struct FeedParser<'a> {
    source: FeedSource,
    snapshot: Arc<FeedSource>,
    options: &'a ParseOptions,
    records: RecordSet,
}

impl<'a> FeedParser<'a> {
    pub fn new(source: FeedSource, options: &'a ParseOptions) -> Self {
        let snapshot = Arc::new(source.clone());
        Self {
            source,
            snapshot,
            options,
            records: RecordSet::new(),
        }
    }

    /// Current identity of the feed, including directives seen so far.
    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn feed_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        if line.starts_with('#') {
            if let Some(directive) = parse_directive(line) {
                if directive.apply(&mut self.source) {
                    tracing::debug!(
                        "Applied '{}' directive for {}",
                        directive.key,
                        self.source.url
                    );
                    self.snapshot = Arc::new(self.source.clone());
                }
                return;
            }
        }

        let Some(caps) = LINE_RE.captures(line) else {
            if self.options.verbose {
                tracing::warn!("could not parse: '{}' (source: {})", line, self.source.url);
            }
            return;
        };

        self.records.push(Record::new(
            self.snapshot.clone(),
            parse_time(&caps[1]),
            caps[3].to_string(),
        ));
    }

    pub fn finish(self) -> RecordSet {
        tracing::debug!("Parsed {} records from {}", self.records.len(), self.source.url);
        self.records
    }
}

/// Parse a feed from a line source. Fails only if reading from it fails.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so one
/// badly encoded line does not cost the rest of the feed.
pub fn parse_feed<R: BufRead>(
    mut reader: R,
    source: FeedSource,
    options: &ParseOptions,
) -> Result<RecordSet> {
    let mut parser = FeedParser::new(source, options);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = trim_line_end(&buf);
        parser.feed_line(&String::from_utf8_lossy(line));
    }
    Ok(parser.finish())
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse a feed whose lines are already in memory.
pub fn parse_lines<I, S>(lines: I, source: FeedSource, options: &ParseOptions) -> RecordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = FeedParser::new(source, options);
    for line in lines {
        parser.feed_line(line.as_ref());
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use chrono::DateTime;

    use super::*;
    use crate::app::TwetError;

    const FEED: &str = "\
# nick = alice
# url = https://b.example/twtxt.txt
# this is a plain comment

2023-01-01T00:00:00Z\thello world
2023-01-02T10:00:00+01:00 (#abc1234) a reply with #rust
not-a-timestamp some text
lonelytoken
";

    fn source() -> FeedSource {
        FeedSource::new("a", "https://a.example/twtxt.txt")
    }

    fn parse(text: &str) -> RecordSet {
        parse_lines(text.lines(), source(), &ParseOptions::default())
    }

    #[test]
    fn test_parse_feed_records() {
        let records = parse(FEED);
        let texts: Vec<_> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "this is a plain comment",
                "hello world",
                "(#abc1234) a reply with #rust",
                "some text",
            ]
        );
    }

    #[test]
    fn test_directives_update_source() {
        let records = parse(FEED);
        let last = records.iter().last().unwrap();
        assert_eq!(last.source.display_nick(), "alice");
        assert_eq!(last.source.authoritative_url(), "https://b.example/twtxt.txt");
        assert_eq!(last.source.url, "https://a.example/twtxt.txt");
    }

    #[test]
    fn test_declared_url_drives_hash() {
        let records = parse(FEED);
        let hello = records.iter().find(|r| r.text == "hello world").unwrap();
        assert_eq!(hello.hash(), "kl73hiq");
    }

    #[test]
    fn test_timestamps() {
        let records = parse(FEED);
        let created: Vec<_> = records.iter().map(|r| r.created).collect();
        assert_eq!(created[0], time::epoch());
        assert_eq!(
            created[1],
            DateTime::parse_from_rfc3339("2023-01-01T00:00:00Z").unwrap()
        );
        assert_eq!(
            created[2],
            DateTime::parse_from_rfc3339("2023-01-02T10:00:00+01:00").unwrap()
        );
        assert_eq!(created[3], time::epoch());
    }

    #[test]
    fn test_text_after_whitespace_run_is_verbatim() {
        let records = parse("2023-01-01T00:00:00Z  \t hello  world \n2023-01-01T00:00:00Z #go");
        assert_eq!(records.as_slice()[0].text, "hello  world ");
        assert_eq!(records.as_slice()[1].text, "#go");
    }

    #[test]
    fn test_records_snapshot_source() {
        let records = parse(
            "2023-01-01T00:00:00Z before\n# nick = bob\n2023-01-02T00:00:00Z after",
        );
        let [before, after] = records.as_slice() else {
            panic!("expected two records");
        };
        assert_eq!(before.source.display_nick(), "a");
        assert_eq!(after.source.display_nick(), "bob");
    }

    #[test]
    fn test_loose_directive_is_a_record() {
        let records = parse("# nick  = bob\n2023-01-01T00:00:00Z hi");
        let [comment, hi] = records.as_slice() else {
            panic!("expected two records");
        };
        assert_eq!(comment.text, "nick  = bob");
        assert_eq!(hi.source.display_nick(), "a");
    }

    #[test]
    fn test_declared_url_keeps_extra_whitespace() {
        let records =
            parse("# url =  https://b.example/twtxt.txt\n2023-01-01T00:00:00Z hello world");
        let record = &records.as_slice()[0];
        assert_eq!(record.source.authoritative_url(), " https://b.example/twtxt.txt");
        assert_ne!(record.hash(), "kl73hiq");
    }

    #[test]
    fn test_records_share_unchanged_source() {
        let records = parse("2023-01-01T00:00:00Z one\n2023-01-02T00:00:00Z two");
        let [one, two] = records.as_slice() else {
            panic!("expected two records");
        };
        assert!(Arc::ptr_eq(&one.source, &two.source));
    }

    #[test]
    fn test_verbose_does_not_change_result() {
        let quiet = parse(FEED);
        let verbose = parse_lines(FEED.lines(), source(), &ParseOptions { verbose: true });
        assert_eq!(quiet, verbose);
    }

    #[test]
    fn test_parse_feed_from_reader() {
        let records = parse_feed(FEED.as_bytes(), source(), &ParseOptions::default()).unwrap();
        assert_eq!(records, parse(FEED));
    }

    #[test]
    fn test_parse_feed_crlf() {
        let records = parse_feed(
            "2023-01-01T00:00:00Z hello\r\n".as_bytes(),
            source(),
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(records.as_slice()[0].text, "hello");
    }

    #[test]
    fn test_invalid_utf8_line_keeps_feed() {
        let feed: &[u8] = b"2023-01-01T00:00:00Z good one\n\
2023-01-02T00:00:00Z caf\xe9 latin1\n\
2023-01-03T00:00:00Z good two\n";
        let records = parse_feed(feed, source(), &ParseOptions::default()).unwrap();
        let texts: Vec<_> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["good one", "caf\u{FFFD} latin1", "good two"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let records = parse_feed(
            "2023-01-01T00:00:00Z one\n2023-01-02T00:00:00Z two".as_bytes(),
            source(),
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.as_slice()[1].text, "two");
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream broke"))
        }
    }

    #[test]
    fn test_read_failure_is_fatal() {
        let result = parse_feed(BufReader::new(Broken), source(), &ParseOptions::default());
        assert!(matches!(result, Err(TwetError::Io(_))));
    }

    #[test]
    fn test_empty_feed() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n").is_empty());
    }
}
