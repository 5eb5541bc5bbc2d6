//! The line-oriented command language.
//!
//! A line is either a native call, `PVarSetInt 5 score 10`, or a meta
//! command starting with `:`. Blank lines and lines starting with `#` are
//! ignored.

use pvars_foundation::{Error, OwnerId, Result};
use pvars_host::Arg;

/// A raw token of a command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// An unquoted word.
    Word(String),
    /// A double-quoted string with escapes resolved.
    Quoted(String),
}

impl Token {
    /// Converts the token into a call argument.
    ///
    /// Integers become `Int`, words with a decimal point that parse as a
    /// float become `Float`, `@` becomes an empty output buffer, and
    /// everything else is a string.
    #[must_use]
    pub fn into_arg(self) -> Arg {
        match self {
            Self::Quoted(text) => Arg::Str(text),
            Self::Word(word) => {
                if word == "@" {
                    return Arg::buffer();
                }
                if let Ok(n) = word.parse::<i32>() {
                    return Arg::Int(n);
                }
                match word.parse::<f32>() {
                    Ok(f) if word.contains('.') => Arg::Float(f),
                    _ => Arg::Str(word),
                }
            }
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Call a native.
    Call {
        /// Native name, matched exactly.
        native: String,
        /// Arguments in order.
        args: Vec<Arg>,
    },
    /// Raise the owner-departure event.
    Disconnect(OwnerId),
    /// Print one owner's variables, or every owner's.
    Dump(Option<OwnerId>),
    /// List the natives.
    Natives,
    /// Print help.
    Help,
    /// Leave the REPL or stop a script.
    Quit,
}

/// Splits a line into tokens.
///
/// # Errors
///
/// Returns an error on an unterminated string or an unknown escape.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if !word.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut word)));
                }
                tokens.push(Token::Quoted(read_quoted(&mut chars)?));
            }
            c if c.is_whitespace() => {
                if !word.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut word)));
                }
            }
            c => word.push(c),
        }
    }

    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }
    Ok(tokens)
}

fn read_quoted(chars: &mut std::str::Chars<'_>) -> Result<String> {
    let mut text = String::new();
    loop {
        match chars.next() {
            Some('"') => return Ok(text),
            Some('\\') => match chars.next() {
                Some(c @ ('"' | '\\')) => text.push(c),
                Some(other) => {
                    return Err(Error::command(format!("unknown escape: \\{other}")));
                }
                None => return Err(Error::command("unterminated string")),
            },
            Some(c) => text.push(c),
            None => return Err(Error::command("unterminated string")),
        }
    }
}

/// Parses a line. Returns `None` for blank lines and comments.
///
/// # Errors
///
/// Returns an error for malformed tokens, unknown meta commands, or a bad
/// owner argument to a meta command.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = tokenize(trimmed)?.into_iter();
    let head = match tokens.next() {
        Some(Token::Word(word)) => word,
        Some(Token::Quoted(_)) => return Err(Error::command("expected a native name")),
        None => return Ok(None),
    };
    let rest: Vec<Token> = tokens.collect();

    if let Some(meta) = head.strip_prefix(':') {
        return parse_meta(meta, &rest).map(Some);
    }

    Ok(Some(Command::Call {
        native: head,
        args: rest.into_iter().map(Token::into_arg).collect(),
    }))
}

fn parse_meta(name: &str, rest: &[Token]) -> Result<Command> {
    let command = match name {
        "disconnect" => match rest {
            [owner] => Command::Disconnect(parse_owner(owner)?),
            _ => return Err(Error::command("usage: :disconnect <owner>")),
        },
        "dump" => match rest {
            [] => Command::Dump(None),
            [owner] => Command::Dump(Some(parse_owner(owner)?)),
            _ => return Err(Error::command("usage: :dump [owner]")),
        },
        "natives" => Command::Natives,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(Error::command(format!("unknown command: :{other}"))),
    };
    Ok(command)
}

fn parse_owner(token: &Token) -> Result<OwnerId> {
    let Token::Word(word) = token else {
        return Err(Error::command("owner must be a number"));
    };
    let cell: i32 = word
        .parse()
        .map_err(|_| Error::command(format!("owner must be a number, got {word}")))?;
    OwnerId::try_from(cell)
}
