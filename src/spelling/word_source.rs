//! Word extraction from text streams.
//!
//! A word is a maximal run of ASCII letters, digits and apostrophes. Everything
//! else separates words, including bytes that are not valid UTF-8.

use std::collections::VecDeque;
use std::io::BufRead;

use regex::bytes::Regex;

use crate::error::{Result, SpellmapError};

/// Pattern matching a single word.
pub const WORD_PATTERN: &str = r"[A-Za-z0-9']+";

/// A lazy, finite sequence of words.
///
/// Once exhausted a source keeps returning `Ok(None)`.
pub trait WordSource {
    /// Produce the next word, or `None` when the source is exhausted.
    fn next_word(&mut self) -> Result<Option<String>>;
}

/// Lowercase a word. Only ASCII `A-Z` are mapped.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Reads words line by line from any buffered reader.
pub struct ReaderWordSource<R> {
    reader: R,
    pattern: Regex,
    pending: VecDeque<String>,
    line: Vec<u8>,
    exhausted: bool,
}

impl<R: BufRead> ReaderWordSource<R> {
    /// Create a word source over `reader`.
    pub fn new(reader: R) -> Result<Self> {
        let pattern = Regex::new(WORD_PATTERN)
            .map_err(|e| SpellmapError::analysis(format!("Invalid word pattern: {e}")))?;

        Ok(ReaderWordSource {
            reader,
            pattern,
            pending: VecDeque::new(),
            line: Vec::new(),
            exhausted: false,
        })
    }

    fn fill(&mut self) -> Result<()> {
        while self.pending.is_empty() && !self.exhausted {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                self.exhausted = true;
                break;
            }
            // Matches are ASCII, so the conversion is lossless.
            self.pending.extend(
                self.pattern
                    .find_iter(&self.line)
                    .map(|mat| String::from_utf8_lossy(mat.as_bytes()).into_owned()),
            );
        }
        Ok(())
    }
}

impl<R: BufRead> WordSource for ReaderWordSource<R> {
    fn next_word(&mut self) -> Result<Option<String>> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: WordSource>(source: &mut S) -> Vec<String> {
        let mut words = Vec::new();
        while let Some(word) = source.next_word().unwrap() {
            words.push(word);
        }
        words
    }

    #[test]
    fn test_splits_on_non_word_characters() {
        let text = "Hello, world! It's 2019...\n\n  don't-stop\tme";
        let mut source = ReaderWordSource::new(text.as_bytes()).unwrap();

        assert_eq!(
            collect(&mut source),
            vec!["Hello", "world", "It's", "2019", "don't", "stop", "me"]
        );
    }

    #[test]
    fn test_exhausted_source_stays_exhausted() {
        let mut source = ReaderWordSource::new("one".as_bytes()).unwrap();
        assert_eq!(source.next_word().unwrap(), Some("one".to_string()));
        assert_eq!(source.next_word().unwrap(), None);
        assert_eq!(source.next_word().unwrap(), None);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        let mut source = ReaderWordSource::new("".as_bytes()).unwrap();
        assert!(collect(&mut source).is_empty());

        let mut source = ReaderWordSource::new(" ,.;\n-- \n".as_bytes()).unwrap();
        assert!(collect(&mut source).is_empty());
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        let mut source = ReaderWordSource::new("café naïve".as_bytes()).unwrap();
        assert_eq!(collect(&mut source), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_invalid_utf8_is_a_separator() {
        let mut source = ReaderWordSource::new(&b"hello caf\xe9 world\n\xff\xfeend"[..]).unwrap();
        assert_eq!(collect(&mut source), vec!["hello", "caf", "world", "end"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("HeLLo"), "hello");
        assert_eq!(normalize("It's"), "it's");
        assert_eq!(normalize("ÀB"), "Àb");
    }
}
