//! Line-oriented `key=value` parsing shared by strategy configs.
//!
//! The format is deliberately forgiving: `#` starts a comment, blank lines
//! and lines without a `=` are skipped, and it is up to each strategy to
//! recognize its own keys and ignore the rest. Malformed values are never
//! fatal.

/// Iterate the `(key, value)` pairs of a config source, skipping comments
/// and malformed lines.
pub fn key_values(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.split('#').next().unwrap_or("");
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key, value.trim()))
    })
}
