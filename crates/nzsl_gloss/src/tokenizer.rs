//! Sentence tokenization.
//!
//! Splits raw English input into surface words for tagging.

/// Contraction endings split off into their own word.
///
/// `n't`, `'s` and `'d` stay attached: the first is matched as a negative
/// and the others are ambiguous.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("m", "am"),
    ("re", "are"),
    ("ll", "will"),
    ("ve", "have"),
];

/// Splits sentences into words.
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Tokenizes a sentence into surface words.
    ///
    /// - Preserves case (taggers may use it)
    /// - Splits on whitespace and on punctuation other than apostrophes and
    ///   hyphens (`tomorrow—I`, `and/or`)
    /// - Strips punctuation around a word, keeping inner apostrophes and
    ///   hyphens (`didn't`, `well-known`)
    /// - Expands `'m`, `'re`, `'ll` and `'ve` (`I'm` becomes `I am`)
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            if Self::is_separator(ch) {
                Self::flush(&mut current_word, &mut words);
            } else {
                current_word.push(ch);
            }
        }

        Self::flush(&mut current_word, &mut words);
        words
    }

    fn flush(current_word: &mut String, words: &mut Vec<String>) {
        let trimmed = current_word.trim_matches(|c: char| !Self::is_word_char(c));
        if !trimmed.is_empty() {
            match Self::expand_contraction(trimmed) {
                Some((stem, expansion)) => {
                    words.push(stem.to_string());
                    words.push(expansion.to_string());
                }
                None => words.push(trimmed.to_string()),
            }
        }
        current_word.clear();
    }

    fn expand_contraction(word: &str) -> Option<(&str, &str)> {
        let (stem, ending) = word.rsplit_once(Self::is_apostrophe)?;
        if stem.is_empty() {
            return None;
        }
        let ending = ending.to_lowercase();
        CONTRACTIONS
            .iter()
            .find(|(suffix, _)| *suffix == ending)
            .map(|(_, expansion)| (stem, *expansion))
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || !(Self::is_word_char(c) || Self::is_apostrophe(c) || c == '-')
    }

    fn is_apostrophe(c: char) -> bool {
        c == '\'' || c == '\u{2019}'
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}
