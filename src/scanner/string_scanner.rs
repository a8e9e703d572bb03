// string_scanner.rs
// ──────────────────────────────────────────────────────────────────────────────
// Sequential reader over an immutable string.  The cursor is a byte offset
// that always sits on a char boundary and only moves forward, except through
// `reset`.
// ──────────────────────────────────────────────────────────────────────────────
use regex::Regex;

use super::error::ScanError;

/// Characters shown by [`StringScanner::preview`] from the cursor onwards.
const PREVIEW_AHEAD: usize = 10;

#[derive(Clone, Debug, Default)]
pub struct StringScanner {
    source: String,
    cursor: usize,
}

impl StringScanner {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            cursor: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current byte offset into the source.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The unread tail of the source.
    pub fn remaining(&self) -> &str {
        &self.source[self.cursor..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Small window around the cursor for diagnostics.
    ///
    /// Starts one character before the cursor (when there is one) and runs
    /// up to ten characters past it, clamped to the source.
    pub fn preview(&self) -> &str {
        let start = self.source[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(offset, _)| offset);
        let span = if start < self.cursor {
            PREVIEW_AHEAD + 1
        } else {
            PREVIEW_AHEAD
        };
        let tail = &self.source[start..];
        let end = tail
            .char_indices()
            .nth(span)
            .map_or(tail.len(), |(offset, _)| offset);
        &tail[..end]
    }

    /// Moves the cursor back to the start of the source.
    pub fn reset(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }

    /// Searches `pattern` in the unread tail.
    ///
    /// On a match the cursor moves to the end of the match and the matched
    /// text is returned. Otherwise the cursor stays put and `Ok(None)` is
    /// returned.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidPattern`] when `pattern` does not compile.
    pub fn find(&mut self, pattern: &str) -> Result<Option<&str>, ScanError> {
        let regex = Regex::new(pattern).map_err(|source| ScanError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.find_regex(&regex))
    }

    /// [`find`](Self::find) with an already compiled pattern.
    pub fn find_regex(&mut self, regex: &Regex) -> Option<&str> {
        let base = self.cursor;
        let found = regex.find(&self.source[base..])?;
        let range = base + found.start()..base + found.end();
        self.cursor = range.end;
        Some(&self.source[range])
    }
}

/// Yields one character at a time; `None` marks the end of input.
impl Iterator for StringScanner {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.source[self.cursor..].chars().next()?;
        self.cursor += c.len_utf8();
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_every_char() {
        let mut scanner = StringScanner::new("ab");
        assert_eq!(scanner.next(), Some('a'));
        assert_eq!(scanner.next(), Some('b'));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
        assert!(scanner.is_exhausted());
    }

    #[test]
    fn test_find_digits_then_end_of_input() {
        let mut scanner = StringScanner::new("hello world 123");
        assert_eq!(scanner.find(r"\d+").unwrap(), Some("123"));
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_find_no_match_keeps_cursor() {
        let mut scanner = StringScanner::new("hello world");
        scanner.next();
        assert_eq!(scanner.find(r"\d").unwrap(), None);
        assert_eq!(scanner.cursor(), 1);
        assert_eq!(scanner.next(), Some('e'));
    }

    #[test]
    fn test_find_only_looks_past_cursor() {
        let mut scanner = StringScanner::new("a1 b2 c3");
        assert_eq!(scanner.find(r"[a-z]\d").unwrap(), Some("a1"));
        assert_eq!(scanner.find(r"[a-z]\d").unwrap(), Some("b2"));
        assert_eq!(scanner.remaining(), " c3");
        assert_eq!(scanner.find("a1").unwrap(), None);
    }

    #[test]
    fn test_empty_match_does_not_move() {
        let mut scanner = StringScanner::new("xyz");
        assert_eq!(scanner.find("").unwrap(), Some(""));
        assert_eq!(scanner.cursor(), 0);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let mut scanner = StringScanner::new("abc");
        let err = scanner.find("(unclosed").unwrap_err();
        assert!(matches!(err, ScanError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
        assert_eq!(scanner.cursor(), 0);
    }

    #[test]
    fn test_reset_chains() {
        let mut scanner = StringScanner::new("abc");
        scanner.by_ref().for_each(drop);
        assert_eq!(scanner.reset().next(), Some('a'));
    }

    #[test]
    fn test_preview_window() {
        let mut scanner = StringScanner::new("0123456789abcdefghij");
        assert_eq!(scanner.preview(), "0123456789");
        scanner.next();
        scanner.next();
        assert_eq!(scanner.preview(), "123456789ab");
        assert_eq!(scanner.cursor(), 2);
        scanner.find("h").unwrap();
        assert_eq!(scanner.preview(), "hij");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut scanner = StringScanner::new("héllo wörld");
        assert_eq!(scanner.next(), Some('h'));
        assert_eq!(scanner.next(), Some('é'));
        assert_eq!(scanner.preview(), "éllo wörld");
        assert_eq!(scanner.find("ö").unwrap(), Some("ö"));
        assert_eq!(scanner.collect::<String>(), "rld");
    }
}
