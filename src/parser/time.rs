//! Timestamp parsing for the formats found in the wild.
//!
//! Most clients write RFC 3339 with fractional seconds, but some put a colon
//! in the offset and some don't, some leave the offset out entirely and a
//! few drop the seconds.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// Every numeric field has a fixed width; chrono alone would accept `1:2:3`.
static SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(:[0-9]{2})?(\.[0-9]+)?(Z|[+-][0-9]{2}:?[0-9]{2})?$",
    )
    .expect("timestamp shape regex")
});

/// Length of `YYYY-MM-DDTHH:MM`.
const HOUR_MINUTE_LEN: usize = 16;

#[derive(Clone, Copy)]
enum Zone {
    Colon,
    NoColon,
    Absent,
}

struct Layout {
    zone: Zone,
    seconds: bool,
}

const LAYOUTS: [Layout; 6] = [
    Layout { zone: Zone::Colon, seconds: true },
    Layout { zone: Zone::NoColon, seconds: true },
    Layout { zone: Zone::Absent, seconds: true },
    Layout { zone: Zone::Colon, seconds: false },
    Layout { zone: Zone::NoColon, seconds: false },
    Layout { zone: Zone::Absent, seconds: false },
];

impl Layout {
    fn parse(&self, upper: &str) -> Option<DateTime<FixedOffset>> {
        // A fraction after the minutes counts as fractional seconds, so the
        // minute-only forms are parsed as if the seconds were `:00`.
        let input = if self.seconds {
            upper.to_string()
        } else {
            let hour_minute = upper.get(..HOUR_MINUTE_LEN)?;
            let rest = upper.get(HOUR_MINUTE_LEN..)?;
            format!("{}:00{}", hour_minute, rest)
        };

        match self.zone {
            Zone::Colon => parse_zoned(&input, "%Y-%m-%dT%H:%M:%S%.f%:z", "+00:00"),
            Zone::NoColon => parse_zoned(&input, "%Y-%m-%dT%H:%M:%S%.f%z", "+0000"),
            Zone::Absent => NaiveDateTime::parse_from_str(&input, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset()),
        }
    }
}

/// `utc` is what a trailing `Z` stands for in `fmt`.
fn parse_zoned(input: &str, fmt: &str, utc: &str) -> Option<DateTime<FixedOffset>> {
    match input.strip_suffix('Z') {
        Some(prefix) => DateTime::parse_from_str(&format!("{}{}", prefix, utc), fmt).ok(),
        None => DateTime::parse_from_str(input, fmt).ok(),
    }
}

/// The instant records fall back to when their timestamp is unreadable.
pub fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

/// Parse a timestamp token, returning the Unix epoch if no layout matches.
///
/// Timestamps without an offset keep their wall-clock reading at offset zero.
pub fn parse_time(token: &str) -> DateTime<FixedOffset> {
    try_parse_time(token).unwrap_or_else(epoch)
}

/// Like [`parse_time`], but reports a miss as `None`.
pub fn try_parse_time(token: &str) -> Option<DateTime<FixedOffset>> {
    let upper = token.to_uppercase();
    if !SHAPE_RE.is_match(&upper) {
        return None;
    }

    LAYOUTS.iter().find_map(|layout| layout.parse(&upper))
}
