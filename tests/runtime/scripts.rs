//! Integration tests for script execution
//!
//! Tests batch scripts run through the REPL, file loading, and the
//! interactive loop driven by a scripted editor.

use std::fs;
use std::path::PathBuf;

use pvars_foundation::{ErrorKind, OwnerId, Result, VarType};
use pvars_host::PluginConfig;
use pvars_runtime::{Evaluation, LineEditor, ReadResult, Repl};

struct ScriptedEditor {
    lines: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().rev().map(|l| (*l).to_string()).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}

fn repl() -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(&[]), PluginConfig::quiet())
}

const WALKTHROUGH: &str = r#"
# owner 5 walkthrough
PVarSetInt 5 score 10
PVarSetInt 5 score 20
PVarSetString 5 name "Bob"
PVarDelete 5 score
PVarSetFloat 5 ratio 1.5

PVarsGetUpperIndex 5
PVarGetNameAtIndex 5 0 @ 32
PVarGetNameAtIndex 5 1 @ 32
"#;

#[test]
fn batch_script_builds_expected_state() {
    let mut repl = repl();
    let outputs = repl.exec_script(WALKTHROUGH).unwrap();

    assert_eq!(
        outputs,
        vec!["1", "1", "1", "1", "1", "2", r#"1 "ratio""#, r#"1 "name""#]
    );

    let store = repl.plugin().store();
    assert_eq!(store.type_of(OwnerId(5), "score"), VarType::None);
    assert_eq!(store.get_string(OwnerId(5), "name"), Some("Bob"));
    assert_eq!(store.get_float(OwnerId(5), "ratio"), Some(1.5));
    assert_eq!(store.index_of(OwnerId(5), "ratio"), Some(0));
}

#[test]
fn script_disconnect_and_dump() {
    let mut repl = repl();
    repl.exec_script("PVarSetInt 1 a 1\nPVarSetInt 2 b 2\n:disconnect 1\n")
        .unwrap();

    let dump = repl.dump(None);
    assert!(!dump.contains("Owner(1)"));
    assert!(dump.contains("Owner(2): 1 variable(s), upper index 1"));
    assert!(dump.contains("[0] b: int = 2"));
}

#[test]
fn script_errors_name_the_line() {
    let mut repl = repl();
    let err = repl
        .exec_script("PVarSetInt 1 a 1\nNotANative 1\n")
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Command(_)));
    assert!(err.to_string().contains("line 2"));
    assert!(err.to_string().contains("NotANative"));
}

#[test]
fn eval_file_runs_script() {
    let path: PathBuf =
        std::env::temp_dir().join(format!("pvars-eval-file-{}.pv", std::process::id()));
    fs::write(&path, "PVarSetInt 9 hp 50\nPVarGetInt 9 HP\n").unwrap();

    let mut repl = repl();
    let outputs = repl.eval_file(&path);
    let _ = fs::remove_file(&path);

    assert_eq!(outputs.unwrap(), vec!["1".to_string(), "50".to_string()]);
}

#[test]
fn eval_file_missing_is_io_error() {
    let mut repl = repl();
    let err = repl
        .eval_file(&PathBuf::from("/nonexistent/pvars/script.pv"))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn interactive_loop_until_eof() {
    let editor = ScriptedEditor::new(&["PVarSetInt 3 a 1", "PVarSetInt 3 b 2", "PVarDelete 3 a"]);
    let mut repl = Repl::with_editor(editor, PluginConfig::quiet());

    repl.run().unwrap();

    let store = repl.plugin().store();
    assert_eq!(store.len(OwnerId(3)), 1);
    assert_eq!(store.free_count(OwnerId(3)), 1);
    assert!(!repl.plugin().is_loaded());
}

#[test]
fn quit_evaluation() {
    let mut repl = repl();
    assert_eq!(repl.eval(":quit").unwrap(), Evaluation::Quit);
}
