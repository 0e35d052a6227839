//! Content hashes used to link replies to the record they answer.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use data_encoding::BASE32_NOPAD;

type Blake2b256 = Blake2b<U32>;

/// Number of trailing base32 characters kept from the encoded digest.
pub const HASH_LEN: usize = 7;

/// Hash a record from its authoritative feed URL, creation time and text.
///
/// The digest input is the three fields joined by `\n`, with the timestamp
/// rendered as RFC 3339 at second precision (`Z` for a zero offset). Other
/// twtxt clients hash the same bytes, so this layout must not change.
pub fn twt_hash(url: &str, created: &DateTime<FixedOffset>, text: &str) -> String {
    let payload = format!(
        "{}\n{}\n{}",
        url,
        created.to_rfc3339_opts(SecondsFormat::Secs, true),
        text
    );
    let sum = Blake2b256::digest(payload.as_bytes());
    let encoded = BASE32_NOPAD.encode(sum.as_slice()).to_lowercase();
    encoded[encoded.len() - HASH_LEN..].to_string()
}
