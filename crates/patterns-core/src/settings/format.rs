//! Text codec for the flat settings file.
//!
//! Read format:
//! ```text
//! <key> <ws> <value> <ws> <key> <ws> <value> ...
//! ```
//! Write format:
//! ```text
//! <key> SP <value> LF
//! ```
//!
//! Both directions are pure functions over strings; the file system is handled
//! by [`crate::settings::store::SettingsStore`].

/// Result of tokenising a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSettings {
    /// Key/value pairs in file order.  A key may appear more than once; later
    /// entries win when applied to a store.
    pub pairs: Vec<(String, String)>,
    /// A final token with no value after it.  Parsing stops there and the token
    /// is not applied.
    pub dropped_token: Option<String>,
}

/// Splits `text` on ASCII whitespace and pairs consecutive tokens as
/// `(key, value)`.
///
/// Only space, `\t`, `\n`, `\v`, `\f` and `\r` separate tokens.  Other
/// Unicode spaces such as U+00A0 stay inside the token.
///
/// A trailing token without a partner is reported in
/// [`ParsedSettings::dropped_token`] and otherwise ignored.
///
/// # Examples
///
/// ```rust
/// use patterns_core::settings::format::parse_pairs;
///
/// let parsed = parse_pairs("username user1\ntheme dark orphan");
/// assert_eq!(parsed.pairs.len(), 2);
/// assert_eq!(parsed.dropped_token.as_deref(), Some("orphan"));
/// ```
pub fn parse_pairs(text: &str) -> ParsedSettings {
    let mut parsed = ParsedSettings::default();
    let mut tokens = text.split(is_separator).filter(|t| !t.is_empty());

    while let Some(key) = tokens.next() {
        match tokens.next() {
            Some(value) => parsed.pairs.push((key.to_string(), value.to_string())),
            None => parsed.dropped_token = Some(key.to_string()),
        }
    }

    parsed
}

/// Token separators.  `char::is_ascii_whitespace` does not include `\v`.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Renders pairs as `key value` lines, each terminated by `\n`.
///
/// Pairs are written in the order the iterator yields them.  Callers that
/// need sorted output pass an ordered map's iterator.
pub fn render_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(key);
        out.push(' ');
        out.push_str(value);
        out.push('\n');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
