//! The interactive translator.

use std::fmt::Write as _;
use std::io::{self, Write};

use nzsl_foundation::{Error, Result};
use nzsl_gloss::GlossAnalysis;
use nzsl_signs::{MIN_SEARCH_LEN, SEARCH_LIMIT, SignIndex};
use tracing::warn;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Translator, format_sign, format_structure};

/// REPL commands, for completion and help.
pub const COMMANDS: &[&str] = &[":help", ":quit", ":analyze", ":split", ":signs", ":search"];

/// One line of REPL input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Translate a sentence.
    Translate(&'a str),
    /// Show each pipeline stage for a sentence.
    Analyze(&'a str),
    /// Show the basic splitter output for a sentence.
    Split(&'a str),
    /// Look up signs for a word.
    Signs(&'a str),
    /// Search the dictionary for words containing the text.
    Search(&'a str),
    /// Print help.
    Help,
    /// Leave the REPL.
    Quit,
}

impl<'a> Command<'a> {
    /// Parses a line of input. Lines not starting with `:` are sentences.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or a missing argument.
    pub fn parse(input: &'a str) -> Result<Self> {
        let input = input.trim();
        let Some(command) = input.strip_prefix(':') else {
            return Ok(Self::Translate(input));
        };
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));

        let needs_arg = |make: fn(&'a str) -> Self| {
            if arg.is_empty() {
                Err(Error::invalid_command(format!(":{name} needs an argument")))
            } else {
                Ok(make(arg))
            }
        };

        match name {
            "h" | "help" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            "a" | "analyze" => needs_arg(Self::Analyze),
            "split" => needs_arg(Self::Split),
            "s" | "signs" => needs_arg(Self::Signs),
            "search" => needs_arg(Self::Search),
            _ => Err(Error::invalid_command(format!(
                "unknown command ':{name}' (try :help)"
            ))),
        }
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Reorderer and sign index.
    translator: Translator,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(translator: Translator) -> Result<Self> {
        let editor = RustylineEditor::new(translator.reorderer().lexicon())?;
        Ok(Self::with_editor(editor, translator))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    ///
    /// Dictionary headwords, if a sign index is loaded, are offered for
    /// completion.
    pub fn with_editor(mut editor: E, translator: Translator) -> Self {
        if let Some(index) = translator.index() {
            editor.set_keywords(index.words().keys().cloned().collect());
        }
        Self {
            editor,
            translator,
            show_banner: true,
            prompt: "nzsl> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the translator.
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Runs the REPL loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => return Ok(false),
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one line of input, returning the text to print, or `None`
    /// for `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error for bad commands or a failed sign lookup.
    pub fn eval(&self, input: &str) -> Result<Option<String>> {
        let output = match Command::parse(input)? {
            Command::Quit => return Ok(None),
            Command::Help => help_text(),
            Command::Translate(text) => self.translator.translate(text).render(),
            Command::Analyze(text) => format_analysis(&self.translator.analyze(text)),
            Command::Split(text) => format_structure(&self.translator.split(text)),
            Command::Signs(word) => self.format_signs(word)?,
            Command::Search(query) => self.format_search(query)?,
        };
        Ok(Some(output))
    }

    fn loaded_index(&self) -> Result<&SignIndex> {
        self.translator.index().ok_or_else(|| {
            Error::invalid_command("no sign index loaded (start with --index PATH)")
        })
    }

    fn format_signs(&self, word: &str) -> Result<String> {
        let index = self.loaded_index()?;
        let ids = index.find_signs(word);
        if ids.is_empty() {
            return Ok(format!("no signs for '{word}'"));
        }

        let mut lines = Vec::with_capacity(ids.len());
        for &id in ids {
            match self.translator.sign(id) {
                Ok(sign) => lines.push(format_sign(sign)),
                Err(e) => {
                    warn!(%id, word, error = %e, "sign id in index but not in sign data");
                    lines.push(format!("#{id} (no record)"));
                }
            }
        }
        Ok(lines.join("\n"))
    }

    fn format_search(&self, query: &str) -> Result<String> {
        let index = self.loaded_index()?;
        if query.trim().chars().count() < MIN_SEARCH_LEN {
            return Err(Error::invalid_command(format!(
                ":search needs at least {MIN_SEARCH_LEN} characters"
            )));
        }

        let results = index.search(query, SEARCH_LIMIT);
        if results.is_empty() {
            return Ok(format!("no signs matching '{query}'"));
        }

        let lines: Vec<String> = results
            .iter()
            .filter_map(|(_, id)| index.sign(*id))
            .map(format_sign)
            .collect();
        Ok(lines.join("\n"))
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mNZSL gloss translator v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        match self.translator.index() {
            Some(index) => println!(
                "{} signs, {} words indexed",
                index.sign_count(),
                index.word_count()
            ),
            None => println!("No sign index loaded."),
        }
        if !self.translator.reorderer().has_tagger() {
            println!("Tagger disabled: using the basic splitter.");
        }
        println!("Type an English sentence, or :help. Use Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

/// Renders each stage of an analysis.
#[must_use]
pub fn format_analysis(analysis: &GlossAnalysis) -> String {
    let mut out = format!("path:     {}", analysis.path);
    if let Some(extraction) = &analysis.extraction {
        let _ = write!(
            out,
            "\ntime:     [{}]\nnegative: {}\ncore:     [{}]",
            extraction.time_tokens.join(", "),
            if extraction.negative_found { "yes" } else { "no" },
            extraction.core_tokens.join(", "),
        );
    }
    for fault in &analysis.faults {
        let _ = write!(out, "\nfault:    {fault}");
    }
    let _ = write!(out, "\ngloss:    {}", format_structure(&analysis.gloss));
    out
}

fn help_text() -> String {
    "\x1b[1mCOMMANDS:\x1b[0m
    <sentence>         Translate an English sentence
    :analyze <text>    Show each stage of the translation
    :split <text>      Show the basic splitter output
    :signs <word>      Look up signs for a word
    :search <text>     Find dictionary words containing the text
    :help              Show this help
    :quit              Exit (or Ctrl+D)"
        .to_string()
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
