//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so tests can feed it scripted input;
//! [`RustylineEditor`] is the terminal implementation.

use std::borrow::Cow;

use pvars_foundation::{Error, Result};
use pvars_host::NATIVES;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::highlight::CommandHighlighter;

/// Meta commands offered for completion.
pub const META_COMMANDS: &[&str] = &[":disconnect", ":dump", ":natives", ":help", ":quit"];

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct PvarsHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: CommandHighlighter,
}

impl Highlighter for PvarsHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes native names and meta commands in head position.
struct CommandCompleter {
    words: Vec<&'static str>,
}

impl CommandCompleter {
    fn new() -> Self {
        let words = NATIVES
            .iter()
            .map(|native| native.name)
            .chain(META_COMMANDS.iter().copied())
            .collect();
        Self { words }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];
        let start = before.len() - before.trim_start().len();
        let word = &before[start..];

        // Arguments are free-form; only the head word completes.
        if word.contains(char::is_whitespace) {
            return (pos, Vec::new());
        }

        let candidates = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: (*w).to_string(),
                replacement: (*w).to_string(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<PvarsHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline editor keeping up to `history_size` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the history size is rejected or rustyline fails
    /// to initialize.
    pub fn new(history_size: usize) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(history_size)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = PvarsHelper {
            completer: CommandCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: CommandHighlighter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
