//! The REPL and script runner.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use pvars_foundation::{Error, OwnerId, Result, VarType};
use pvars_host::{Arg, CellKind, Plugin, PluginConfig, natives};

use crate::command::{Command, parse_line};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Text to show the user.
    Output(String),
    /// Nothing to show.
    Silent,
    /// The line asked to stop.
    Quit,
}

/// The interactive REPL, hosting a [`Plugin`].
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    plugin: Plugin,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: PluginConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor. The plugin is loaded.
    pub fn with_editor(editor: E, config: PluginConfig) -> Self {
        let show_banner = config.show_banner;
        let mut plugin = Plugin::new(config);
        plugin.load();
        Self {
            editor,
            plugin,
            show_banner,
            prompt: "pvars> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the hosted plugin.
    #[must_use]
    pub const fn plugin(&self) -> &Plugin {
        &self.plugin
    }

    /// Returns the hosted plugin mutably.
    pub fn plugin_mut(&mut self) -> &mut Plugin {
        &mut self.plugin
    }

    /// Runs the interactive loop until EOF or `:quit`, then unloads the
    /// plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Evaluation::Output(text)) => println!("{text}"),
                Ok(Evaluation::Silent) => {}
                Ok(Evaluation::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        self.plugin.unload();
        Ok(())
    }

    /// Evaluates one line.
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable lines and unknown natives. A known
    /// native called with bad arguments is not an error: it is logged and
    /// yields 0, as the host would see it.
    pub fn eval(&mut self, line: &str) -> Result<Evaluation> {
        let Some(command) = parse_line(line)? else {
            return Ok(Evaluation::Silent);
        };

        let output = match command {
            Command::Call { native, mut args } => self.call(&native, &mut args)?,
            Command::Disconnect(owner) => {
                self.plugin.on_owner_disconnect(owner);
                format!("{owner} disconnected")
            }
            Command::Dump(owner) => self.dump(owner),
            Command::Natives => self.natives_listing(),
            Command::Help => help_text(),
            Command::Quit => return Ok(Evaluation::Quit),
        };
        Ok(Evaluation::Output(output))
    }

    fn call(&mut self, name: &str, args: &mut [Arg]) -> Result<String> {
        let native = natives::find(name).ok_or_else(|| Error::unknown_native(name))?;
        let cell = self.plugin.invoke(native.name, args);

        let mut output = match native.returns {
            CellKind::Int => cell.get().to_string(),
            CellKind::Float => cell.as_f32().to_string(),
            CellKind::TypeCode => VarType::from_code(cell.get())
                .map_or_else(|| cell.get().to_string(), |ty| format!("{} ({ty})", cell.get())),
        };
        for buffer in args.iter().filter_map(Arg::as_buffer) {
            if buffer.is_written() {
                let _ = write!(output, " {:?}", buffer.as_str());
            }
        }
        Ok(output)
    }

    /// Evaluates a script, line by line.
    ///
    /// Returns the output of every line that produced some. Stops at
    /// `:quit`.
    ///
    /// # Errors
    ///
    /// Returns the first failing line's error, prefixed with its line
    /// number.
    pub fn exec_script(&mut self, source: &str) -> Result<Vec<String>> {
        let mut outputs = Vec::new();
        for (number, line) in source.lines().enumerate() {
            let evaluation = self
                .eval(line)
                .map_err(|e| Error::command(format!("line {}: {e}", number + 1)))?;
            match evaluation {
                Evaluation::Output(text) => outputs.push(text),
                Evaluation::Silent => {}
                Evaluation::Quit => break,
            }
        }
        Ok(outputs)
    }

    /// Reads and evaluates a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let source = fs::read_to_string(path)?;
        self.exec_script(&source)
            .map_err(|e| Error::command(format!("{}: {e}", path.display())))
    }

    /// Renders the variables of one owner, or of every owner, by index.
    #[must_use]
    pub fn dump(&self, owner: Option<OwnerId>) -> String {
        let store = self.plugin.store();
        let mut owners: Vec<OwnerId> = match owner {
            Some(owner) => vec![owner],
            None => store.owners().collect(),
        };
        owners.sort_unstable();

        if owners.is_empty() {
            return "no variables".to_string();
        }

        let mut out = String::new();
        for owner in owners {
            let _ = writeln!(
                out,
                "{owner}: {} variable(s), upper index {}",
                store.len(owner),
                store.upper_index_bound(owner)
            );
            let mut vars: Vec<_> = store.variables(owner).collect();
            vars.sort_unstable_by_key(|(_, var)| var.index);
            for (name, var) in vars {
                let _ = writeln!(
                    out,
                    "  [{}] {name}: {} = {:?}",
                    var.index,
                    var.value.var_type(),
                    var.value
                );
            }
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn natives_listing(&self) -> String {
        self.plugin
            .natives()
            .map(|native| native.usage())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mpvars {}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type :help for commands. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn help_text() -> String {
    "Call a native:  <Native> <args>...   e.g. PVarSetInt 5 score 10
  integers and decimals are cells, \"quoted\" or bare words are strings,
  @ is an output buffer
Commands:
  :disconnect <owner>   drop every variable of an owner
  :dump [owner]         show variables by index
  :natives              list natives and their parameters
  :help                 show this help
  :quit                 exit"
        .to_string()
}
