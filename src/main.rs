// Sprig: token dump and parser front end

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};
use crossterm::tty::IsTty;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sprig::parser::Parser;
use sprig::repl::{self, Mode, ReplConfig, PROMPT};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Print each token of a line
    Tokens,
    /// Parse each line and print the canonical program
    Ast,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Tokens => Mode::Tokens,
            ModeArg::Ast => Mode::Ast,
        }
    }
}

/// Tokenize and parse Sprig source.
#[derive(ClapParser, Debug)]
#[command(name = "sprig", version, about)]
struct Args {
    /// Source file to parse once; starts the interactive loop when omitted.
    file: Option<PathBuf>,

    /// What the interactive loop prints for each line.
    #[arg(short, long, value_enum, default_value_t = ModeArg::Tokens)]
    mode: ModeArg,

    /// Prompt written before each line is read.
    #[arg(long, default_value = PROMPT)]
    prompt: String,

    /// Never colour the output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout belongs to the loop
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sprig=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.file {
        return parse_file(path);
    }

    let stdout = io::stdout();
    let config = ReplConfig {
        prompt: args.prompt,
        mode: args.mode.into(),
        color: !args.no_color && stdout.is_tty(),
    };

    if io::stdin().is_tty() {
        println!("Sprig {} ({} mode)", env!("CARGO_PKG_VERSION"), config.mode);
    }

    let mut out = stdout.lock();
    repl::start(io::stdin().lock(), &mut out, &config)?;
    Ok(ExitCode::SUCCESS)
}

/// Parse a whole file, print the program, and fail if anything was reported.
fn parse_file(path: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)?;
    info!(path = %path.display(), bytes = source.len(), "parsing file");

    let mut parser = Parser::new(&source);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("Parser errors in {}:", path.display());
        for error in parser.errors() {
            eprintln!("\t{}", error);
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", program);
    Ok(ExitCode::SUCCESS)
}
