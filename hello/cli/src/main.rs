//! CLI for printing world-count greetings.
//!
//! ## Usage
//!
//! ```bash
//! # Greet a single count
//! hello 42
//!
//! # Several counts, one greeting per line
//! hello 1 2 -3
//!
//! # Counts from stdin, one per line
//! seq 1 5 | hello
//! printf '7\n8\n' | hello -
//!
//! # Generate shell completions
//! source <(COMPLETE=bash hello)
//! ```

use std::io::{self, BufRead, IsTerminal, Write};

use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use hello_worlds::{ParseWorldCountError, WorldCount};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Print a greeting for each world count
#[derive(Debug, Parser)]
#[command(name = "hello", version, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// World counts to greet (use "-" to read them from stdin, one per line)
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    counts: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Enable tab completions by adding one line to your shell config:

  Bash (~/.bashrc):
    source <(COMPLETE=bash hello)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh hello)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish hello | source

EXAMPLES:
  hello 42                # Hello, there are 42worlds
  hello 1 2 -3            # one greeting per count
  seq 1 3 | hello         # counts from piped stdin
  printf '7\\n' | hello -  # explicit stdin
";

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read from stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write to stdout: {0}")]
    Stdout(io::Error),

    #[error("no world counts provided on stdin")]
    EmptyStdin,

    #[error(transparent)]
    Count(#[from] ParseWorldCountError),

    #[error("unknown shell: {0}. Supported: bash, zsh, fish, powershell, elvish")]
    UnknownShell(String),
}

fn main() {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        if let Err(e) = generate_completions(&shell_name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Show help if no input provided and stdin is a terminal
    if cli.counts.is_empty() && io::stdin().is_terminal() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber so log lines never mix with greetings.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Greets every count in order, stopping at the first invalid one.
fn run(cli: &Cli) -> Result<(), CliError> {
    let inputs = collect_inputs(cli)?;
    info!(count = inputs.len(), "greeting world counts");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for raw in &inputs {
        let count: WorldCount = raw.parse()?;
        debug!(%count, "formatting greeting");
        writeln!(out, "{}", count.greeting()).map_err(CliError::Stdout)?;
    }

    out.flush().map_err(CliError::Stdout)
}

/// Get counts from positional args, or stdin when asked for or piped.
fn collect_inputs(cli: &Cli) -> Result<Vec<String>, CliError> {
    match cli.counts.as_slice() {
        [only] if only == "-" => read_from_stdin(),
        [] => read_from_stdin(),
        counts => Ok(counts.to_vec()),
    }
}

/// Read counts from stdin, one per line, skipping blank lines.
fn read_from_stdin() -> Result<Vec<String>, CliError> {
    debug!("reading world counts from stdin");
    let stdin = io::stdin();
    let mut counts = Vec::new();

    for line in stdin.lock().lines() {
        let line = line.map_err(CliError::Stdin)?;
        if line.trim().is_empty() {
            continue;
        }
        counts.push(line);
    }

    if counts.is_empty() {
        return Err(CliError::EmptyStdin);
    }

    Ok(counts)
}

/// Generate shell completions.
fn generate_completions(shell_name: &str) -> Result<(), CliError> {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => return Err(CliError::UnknownShell(shell_name.to_string())),
    };

    clap_complete::generate(shell, &mut Cli::command(), "hello", &mut io::stdout());
    Ok(())
}
