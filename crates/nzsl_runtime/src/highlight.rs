//! Input highlighting for the REPL.
//!
//! Colors the words the reorderer will move: time phrases (yellow) and
//! negation markers (red). REPL commands are cyan.

use std::borrow::Cow;
use std::ops::Range;

use nzsl_foundation::{Lexicon, WordPattern};

const TIME: &str = "\x1b[33m";
const NEGATIVE: &str = "\x1b[31m";
const COMMAND: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Highlighter for English input.
pub struct GlossHighlighter {
    time_words: WordPattern,
    negatives: WordPattern,
}

impl GlossHighlighter {
    /// Creates a highlighter for the given lexicon.
    #[must_use]
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            time_words: lexicon.time_words().clone(),
            negatives: lexicon.negatives().clone(),
        }
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut rest = line;
        let mut result = String::with_capacity(line.len() * 2);

        if line.trim_start().starts_with(':') {
            let start = line.len() - line.trim_start().len();
            let end = line[start..]
                .find(char::is_whitespace)
                .map_or(line.len(), |i| start + i);
            result.push_str(COMMAND);
            result.push_str(&line[..end]);
            result.push_str(RESET);
            rest = &line[end..];
        }

        let marks = self.marks(rest);
        if marks.is_empty() && rest.len() == line.len() {
            return Cow::Borrowed(line);
        }

        let mut cursor = 0;
        for (range, color) in marks {
            result.push_str(&rest[cursor..range.start]);
            result.push_str(color);
            result.push_str(&rest[range.clone()]);
            result.push_str(RESET);
            cursor = range.end;
        }
        result.push_str(&rest[cursor..]);
        Cow::Owned(result)
    }

    /// Byte ranges of time phrases and negation markers, in order.
    fn marks(&self, text: &str) -> Vec<(Range<usize>, &'static str)> {
        let words = word_ranges(text);
        let surface: Vec<&str> = words.iter().map(|r| &text[r.clone()]).collect();

        let mut marks: Vec<(Range<usize>, &'static str)> = Vec::new();
        for (pattern, color) in [(&self.time_words, TIME), (&self.negatives, NEGATIVE)] {
            for span in pattern.spans(&surface) {
                let bytes = words[span.start].start..words[span.end - 1].end;
                if !marks.iter().any(|(r, _)| r.start < bytes.end && bytes.start < r.end) {
                    marks.push((bytes, color));
                }
            }
        }
        marks.sort_by_key(|(r, _)| r.start);
        marks
    }
}

/// Byte ranges of whitespace-separated words.
fn word_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                ranges.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push(s..text.len());
    }
    ranges
}

impl Default for GlossHighlighter {
    fn default() -> Self {
        Self::new(&Lexicon::nzsl())
    }
}
