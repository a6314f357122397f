use std::fs;
use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser as ClapParser;
use log::{debug, error, LevelFilter};

use jeff::environment::Environment;

/// Run a `.jeff` file, or drop into the REPL when no file is given.
#[derive(ClapParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to a `.jeff` source file. Omit to start the REPL instead.
    file: Option<std::path::PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(level_for(args.verbosity))
        .init()
        .context("failed to initialise logger")?;

    match args.file {
        Some(path) => run_file(&path),
        None => {
            jeff::repl::start(io::stdin().lock(), io::stdout().lock())
                .context("REPL session failed")?;
            Ok(())
        }
    }
}

fn run_file(path: &std::path::Path) -> Result<()> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("jeff") {
        bail!("expected a '.jeff' file, got '{}'", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("could not read file: '{}'", path.display()))?;

    let (program, errors) = jeff::parse(&source);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        std::process::exit(1);
    }

    debug!("parsed {} top-level statement(s)", program.statements.len());

    let env = Environment::new_root();
    let result = jeff::eval(&program, &env);

    if result.is_error() {
        error!("{}", result.inspect());
    }

    print!("{}", result.inspect());
    Ok(())
}
