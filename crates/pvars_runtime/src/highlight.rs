//! Syntax highlighting for command lines.

use std::borrow::Cow;

use pvars_host::natives;

const RESET: &str = "\x1b[0m";
const NATIVE: &str = "\x1b[1;32m";
const META: &str = "\x1b[36m";
const UNKNOWN: &str = "\x1b[31m";
const STRING: &str = "\x1b[33m";
const NUMBER: &str = "\x1b[35m";
const BUFFER: &str = "\x1b[32m";
const COMMENT: &str = "\x1b[2;3m";

/// Highlighter for the command language.
#[derive(Debug, Default)]
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlights a line of input.
    ///
    /// The head word is green for a known native, cyan for a meta command,
    /// and red otherwise.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }
        if line.trim_start().starts_with('#') {
            return Cow::Owned(format!("{COMMENT}{line}{RESET}"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut word = String::new();
        let mut head = true;
        let mut in_string = false;
        let mut escape_next = false;

        for c in line.chars() {
            if in_string {
                result.push(c);
                if escape_next {
                    escape_next = false;
                } else if c == '\\' {
                    escape_next = true;
                } else if c == '"' {
                    result.push_str(RESET);
                    in_string = false;
                }
                continue;
            }

            match c {
                '"' => {
                    flush_word(&mut result, &mut word, &mut head);
                    head = false;
                    result.push_str(STRING);
                    result.push(c);
                    in_string = true;
                }
                c if c.is_whitespace() => {
                    flush_word(&mut result, &mut word, &mut head);
                    result.push(c);
                }
                c => word.push(c),
            }
        }

        flush_word(&mut result, &mut word, &mut head);
        if in_string {
            result.push_str(RESET);
        }

        Cow::Owned(result)
    }
}

fn flush_word(result: &mut String, word: &mut String, head: &mut bool) {
    if word.is_empty() {
        return;
    }

    let color = if *head {
        if natives::find(word).is_some() {
            NATIVE
        } else if word.starts_with(':') {
            META
        } else {
            UNKNOWN
        }
    } else if word == "@" {
        BUFFER
    } else if word.parse::<i32>().is_ok() || (word.contains('.') && word.parse::<f32>().is_ok())
    {
        NUMBER
    } else {
        ""
    };

    if color.is_empty() {
        result.push_str(word);
    } else {
        result.push_str(color);
        result.push_str(word);
        result.push_str(RESET);
    }
    word.clear();
    *head = false;
}
