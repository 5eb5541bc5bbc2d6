//! pvars CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use pvars_host::PluginConfig;
use pvars_runtime::{Repl, logging};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    quiet: bool,
    show_help: bool,
    show_version: bool,
    dump: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-q" | "--quiet" => config.quiet = true,
            "--dump" => config.dump = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => config.files.push(PathBuf::from(arg)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("pvars {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = PluginConfig::from_env();
    if cli.quiet {
        config = config.with_banner(false);
    }
    logging::init(&config.log_filter)?;

    let mut repl = Repl::new(config)?;

    for file in &cli.files {
        for line in repl.eval_file(file)? {
            println!("{line}");
        }
    }

    if cli.dump {
        println!("{}", repl.dump(None));
    }

    if cli.batch_mode {
        repl.plugin_mut().unload();
        return Ok(());
    }

    if !cli.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mpvars\x1b[0m - Per-owner typed variable store

\x1b[1mUSAGE:\x1b[0m
    pvars [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Scripts to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run scripts and exit (no REPL)
    -q, --quiet        Do not print the banner
        --dump         Dump every owner's variables after the scripts

\x1b[1mENVIRONMENT:\x1b[0m
    PVARS_LOG          Log filter (default: pvars=info)
    PVARS_BANNER       Set to 0 or false to hide the banner

\x1b[1mEXAMPLES:\x1b[0m
    pvars                          Start interactive REPL
    pvars setup.pv                 Run setup.pv, then start REPL
    pvars -b --dump test.pv        Run test.pv, dump the store, and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    PVarSetInt 5 score 10          Call a native
    PVarGetString 5 name @ 32      @ is an output buffer
    :disconnect 5                  Drop every variable of owner 5
    :dump [owner]                  Show variables by index
    :natives                       List natives
    :help                          Show help
    Ctrl+D                         Exit REPL"
    );
}
