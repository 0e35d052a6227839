use std::path::PathBuf;

use chrono::SecondsFormat;

use crate::app::{AppContext, Result};
use crate::domain::Record;

pub fn list_records(ctx: &AppContext, files: &[PathBuf]) -> Result<()> {
    let mut records = ctx.load_feeds(files)?;

    if records.is_empty() {
        println!("No records");
        return Ok(());
    }

    records.sort_chronological();
    for record in &records {
        println!("{}", format_record(record));
    }
    Ok(())
}

pub fn show_thread(ctx: &AppContext, hash: &str, files: &[PathBuf]) -> Result<()> {
    let records = ctx.load_feeds(files)?;
    let thread = records.thread(hash);

    if thread.is_empty() {
        println!("No thread found for {}", hash);
        return Ok(());
    }

    match &thread.root {
        Some(root) => println!("{}", format_record(root)),
        None => println!("(root not found)"),
    }
    for reply in &thread.replies {
        println!("  {}", format_record(reply));
    }
    println!("{} replies", thread.replies.len());
    Ok(())
}

pub fn list_tags(ctx: &AppContext, files: &[PathBuf]) -> Result<()> {
    let records = ctx.load_feeds(files)?;
    let tags = sorted_tags(records.tags());

    if tags.is_empty() {
        println!("No tags");
        return Ok(());
    }

    for (tag, count) in tags {
        println!("{:>5}  #{}", count, tag);
    }
    Ok(())
}

/// `hash  timestamp  nick  text` on one line.
pub fn format_record(record: &Record) -> String {
    format!(
        "{}  {}  {}  {}",
        record.hash(),
        record.created.to_rfc3339_opts(SecondsFormat::Secs, true),
        record.source.display_nick(),
        record.text
    )
}

/// Most frequent first, ties by name.
fn sorted_tags(tags: std::collections::HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut tags: Vec<_> = tags.into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::DateTime;

    use super::*;
    use crate::domain::FeedSource;

    #[test]
    fn test_format_record() {
        let mut source = FeedSource::new("a", "https://a.example/twtxt.txt");
        source.meta.nick = Some("alice".into());
        let record = Record::new(
            Arc::new(source),
            DateTime::parse_from_rfc3339("2023-01-01T00:00:00Z").unwrap(),
            "hello world".into(),
        );
        assert_eq!(
            format_record(&record),
            "ydxxmnq  2023-01-01T00:00:00Z  alice  hello world"
        );
    }

    #[test]
    fn test_sorted_tags() {
        let tags = HashMap::from([
            ("rust".to_string(), 1),
            ("go".to_string(), 2),
            ("c".to_string(), 1),
        ]);
        assert_eq!(
            sorted_tags(tags),
            vec![
                ("go".to_string(), 2),
                ("c".to_string(), 1),
                ("rust".to_string(), 1),
            ]
        );
    }
}
