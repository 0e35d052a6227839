//! In-feed metadata: comment lines of the form `# key = value`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::FeedSource;

static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[\t\n\x0C\r ]?([0-9A-Za-z_]+)[\t\n\x0C\r ]?=[\t\n\x0C\r ]?(.+)$")
        .expect("directive regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub value: String,
}

/// Parse a directive line. Plain comments and non-comment lines give `None`.
///
/// At most one whitespace character is allowed before the key and on either
/// side of `=`; any further whitespace belongs to the value.
pub fn parse_directive(line: &str) -> Option<Directive> {
    let caps = DIRECTIVE_RE.captures(line)?;
    Some(Directive {
        key: caps[1].to_string(),
        value: caps[2].to_string(),
    })
}

impl Directive {
    /// Apply to `source`. Returns `false` for keys that carry no identity.
    pub fn apply(&self, source: &mut FeedSource) -> bool {
        match self.key.as_str() {
            "nick" => {
                source.meta.nick = Some(self.value.clone());
                true
            }
            "url" => {
                source.meta.urls.push(self.value.clone());
                true
            }
            _ => false,
        }
    }
}
