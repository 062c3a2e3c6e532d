//! Translator state shared by the REPL and batch mode.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use nzsl_foundation::{Error, Result};
use nzsl_gloss::{GlossAnalysis, GlossReorderer};
use nzsl_signs::{MediaLinks, SignId, SignIndex, SignMatch, SignRecord};
use tracing::debug;

/// A gloss reorderer plus an optional sign dictionary.
#[derive(Clone, Debug)]
pub struct Translator {
    reorderer: GlossReorderer,
    index: Option<SignIndex>,
}

/// One translated sentence.
#[derive(Debug)]
pub struct Translation<'a> {
    /// Reordered gloss words.
    pub gloss: Vec<String>,
    /// Sign lookups, present when a sign index is loaded.
    pub signs: Option<Vec<SignMatch<'a>>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(GlossReorderer::default())
    }
}

impl Translator {
    /// Creates a translator without a sign index.
    #[must_use]
    pub fn new(reorderer: GlossReorderer) -> Self {
        Self {
            reorderer,
            index: None,
        }
    }

    /// Builder method to attach a sign index.
    #[must_use]
    pub fn with_index(mut self, index: SignIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// The reorderer.
    #[must_use]
    pub fn reorderer(&self) -> &GlossReorderer {
        &self.reorderer
    }

    /// The sign index, if loaded.
    #[must_use]
    pub fn index(&self) -> Option<&SignIndex> {
        self.index.as_ref()
    }

    /// Reorders a sentence into gloss words.
    #[must_use]
    pub fn gloss(&self, text: &str) -> Vec<String> {
        self.reorderer.gloss(text)
    }

    /// Reorders a sentence and reports how the result was produced.
    #[must_use]
    pub fn analyze(&self, text: &str) -> GlossAnalysis {
        self.reorderer.analyze(text)
    }

    /// Splits a sentence with the basic splitter only.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        self.reorderer.splitter().split(text)
    }

    /// Reorders a sentence and looks up each gloss word.
    #[must_use]
    pub fn translate(&self, text: &str) -> Translation<'_> {
        let gloss = self.gloss(text);
        let signs = self.index.as_ref().map(|index| index.resolve(&gloss));
        debug!(?gloss, "translated");
        Translation { gloss, signs }
    }

    /// Looks up a sign record by id.
    ///
    /// # Errors
    ///
    /// Returns `SignNotFound` if there is no index or the id is not in it.
    pub fn sign(&self, id: SignId) -> Result<&SignRecord> {
        self.index
            .as_ref()
            .and_then(|index| index.sign(id))
            .ok_or_else(|| Error::sign_not_found(id.0))
    }

    /// Glosses each line of `input`, writing one space-separated gloss line
    /// per input line. Returns the number of lines processed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn gloss_lines<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<usize> {
        let mut count = 0;
        for line in input.lines() {
            let line = line.map_err(|e| Error::io(format!("failed to read input: {e}")))?;
            writeln!(output, "{}", self.gloss(&line).join(" "))
                .map_err(|e| Error::io(format!("failed to write output: {e}")))?;
            count += 1;
        }
        output
            .flush()
            .map_err(|e| Error::io(format!("failed to flush output: {e}")))?;
        Ok(count)
    }
}

impl Translation<'_> {
    /// Renders the translation: the sign order, then one line per word when
    /// signs were looked up.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format_structure(&self.gloss);
        if let Some(signs) = &self.signs {
            out.push('\n');
            out.push_str(&format_matches(signs));
        }
        out
    }
}

/// Formats gloss words as the NZSL sign order, e.g. `TOMORROW → ME → GOING`.
#[must_use]
pub fn format_structure<S: AsRef<str>>(gloss: &[S]) -> String {
    if gloss.is_empty() {
        return "(no signs)".to_string();
    }
    gloss
        .iter()
        .map(|w| w.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Formats sign lookups, one line per word.
#[must_use]
pub fn format_matches(matches: &[SignMatch<'_>]) -> String {
    let mut out = String::new();
    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match m {
            SignMatch::Found { word, sign_id, sign } => {
                let _ = write!(out, "  ✓ {word} #{sign_id}");
                if let Some(head) = sign.headword() {
                    if !head.eq_ignore_ascii_case(word) {
                        let _ = write!(out, " ({head})");
                    }
                }
            }
            SignMatch::Missing { word } => {
                let _ = write!(out, "  ✗ {word}");
            }
        }
    }
    out
}

/// Formats a sign record with its glosses and media.
#[must_use]
pub fn format_sign(record: &SignRecord) -> String {
    let mut out = format!("#{}", record.nzsl_id);
    let gloss = &record.gloss;
    if !gloss.english.is_empty() {
        let _ = write!(out, " {}", gloss.english.join(", "));
    }
    if !gloss.english_secondary.is_empty() {
        let _ = write!(out, " [{}]", gloss.english_secondary.join(", "));
    }
    if !gloss.maori.is_empty() {
        let _ = write!(out, "\n    māori: {}", gloss.maori.join(", "));
    }
    let links = MediaLinks::for_record(record);
    if let Some(video) = links.remote_video {
        let _ = write!(out, "\n    video: {video}");
    }
    if let Some(image) = links.image {
        let _ = write!(out, "\n    image: {image}");
    }
    out
}
