//! NZSL gloss translator CLI entry point.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use nzsl_runtime::{Repl, RuntimeConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI options that are not translator settings.
#[derive(Default)]
struct CliFlags {
    show_help: bool,
    show_version: bool,
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

fn parse_args(args: Vec<String>) -> Result<(RuntimeConfig, CliFlags), Box<dyn std::error::Error>> {
    let mut config = RuntimeConfig::new();
    let mut flags = CliFlags::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.show_help = true,
            "-V" | "--version" => flags.show_version = true,
            "-b" | "--batch" => config.batch = true,
            "-v" | "--verbose" => config.verbose = true,
            "--no-tagger" => config.use_tagger = false,
            "--index" => {
                let path = args.next().ok_or("--index requires a path")?;
                config.index_path = Some(PathBuf::from(path));
            }
            "--lexicon" => {
                let path = args.next().ok_or("--lexicon requires a path")?;
                config.lexicon_path = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.inputs.push(PathBuf::from(path)),
        }
    }

    if !config.inputs.is_empty() && !config.batch {
        return Err("input files are only read in batch mode (-b)".into());
    }

    Ok((config, flags))
}

fn init_logging(config: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (config, flags) = parse_args(args)?;

    if flags.show_help {
        print_help();
        return Ok(());
    }

    if flags.show_version {
        println!("nzsl {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&config);

    let translator = config.build_translator()?;

    if config.batch {
        let mut stdout = io::stdout().lock();
        let mut lines = 0;
        if config.inputs.is_empty() {
            lines += translator.gloss_lines(io::stdin().lock(), &mut stdout)?;
        }
        for path in &config.inputs {
            if path.as_os_str() == "-" {
                lines += translator.gloss_lines(io::stdin().lock(), &mut stdout)?;
            } else {
                let file = File::open(path)
                    .map_err(|e| format!("failed to open file '{}': {e}", path.display()))?;
                lines += translator.gloss_lines(BufReader::new(file), &mut stdout)?;
            }
        }
        info!(lines, "batch complete");
        return Ok(());
    }

    Repl::new(translator)?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mnzsl\x1b[0m - English to NZSL gloss translator

\x1b[1mUSAGE:\x1b[0m
    nzsl [OPTIONS]
    nzsl -b [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to translate in batch mode, one sentence per line
                  (stdin if none, or '-')

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Translate lines and exit (no REPL)
    -v, --verbose       Log pipeline stages (debug level)
    --index PATH        Load a sign index (.json or MessagePack)
    --lexicon PATH      Load lexicon overrides (.json)
    --no-tagger         Use the basic splitter only

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG            Log filter, overrides --verbose (e.g. nzsl_gloss=debug)

\x1b[1mEXAMPLES:\x1b[0m
    nzsl                              Start interactive translator
    nzsl --index signs.json           Translate and look up signs
    echo \"I am not going\" | nzsl -b   Print: me going not
    nzsl -b sentences.txt             Translate a file

\x1b[1mREPL COMMANDS:\x1b[0m
    <sentence>          Translate an English sentence
    :analyze <text>     Show each stage of the translation
    :split <text>       Show the basic splitter output
    :signs <word>       Look up signs for a word
    :search <text>      Find dictionary words containing the text
    :help               Show help
    :quit               Exit (or Ctrl+D)"
    );
}
