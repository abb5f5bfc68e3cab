//! doctex CLI - Convert JSON document trees into compilable LaTeX

#[cfg(feature = "cli")]
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

#[cfg(feature = "cli")]
use doctex::{
    encode_document,
    images::write_bundle,
    model::from_json,
    service::{compile_encoded, report::render_page, HttpCompiler},
    utils::config::{Config, ConfigError, CONFIG_FILE_NAME},
    EncodeOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "d2l")]
#[command(version)]
#[command(about = "doctex - Convert structured rich-text documents into LaTeX", long_about = None)]
struct Cli {
    /// Input JSON document tree (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write src.tex and the decoded images into this directory
    #[arg(long)]
    bundle: Option<PathBuf>,

    /// Compile service base URL (overrides the config file)
    #[arg(long)]
    server: Option<String>,

    /// Configuration file (defaults to ./doctex.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write an HTML report of the compile attempt to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Emit the body only, without preamble and closer
    #[arg(long)]
    fragment: bool,

    /// Strict mode: fail on unknown directives
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.quiet);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => fail(&err),
    };

    let mut options = if cli.fragment {
        EncodeOptions::fragment()
    } else {
        EncodeOptions::default()
    };
    config.apply(&mut options);
    if cli.strict {
        options.strict_directives = true;
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let root = match from_json(&input) {
        Ok(root) => root,
        Err(err) => fail(&format!("invalid document tree: {}", err)),
    };
    let encoded = match encode_document(&root, &options) {
        Ok(encoded) => encoded,
        Err(err) => fail(&err),
    };
    let warning_count = encoded.warnings.len();

    if let Some(ref dir) = cli.bundle {
        write_bundle(dir, &encoded.latex, &encoded.images)?;
        eprintln!("✓ Bundle written to: {}", dir.display());
    }

    let latex = encoded.latex.clone();
    let mut compile_failed = false;
    match cli.server.or(config.server) {
        Some(server) => {
            let compiler = match HttpCompiler::new(server) {
                Ok(compiler) => compiler,
                Err(err) => fail(&err),
            };
            log::info!("compiling with {}", compiler.server());
            let outcome = compile_encoded(encoded, &compiler);
            match &outcome.result {
                Ok(document) => eprintln!("✓ PDF available at: {}", document.url),
                Err(err) => {
                    eprintln!("Error: {}", err);
                    compile_failed = true;
                }
            }
            if let Some(ref path) = cli.report {
                fs::write(path, render_page(&outcome))?;
            }
        }
        None if cli.report.is_some() => {
            log::warn!("no compile server configured, skipping report");
        }
        None => {}
    }

    // Output
    match cli.output {
        Some(path) => {
            fs::write(&path, &latex)?;
            if warning_count == 0 {
                eprintln!("✓ Output written to: {}", path.display());
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path.display(),
                    warning_count
                );
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(latex.as_bytes())?;
            stdout.flush()?;
        }
    }

    if compile_failed {
        process::exit(1);
    }
    Ok(())
}

/// Library warnings go through `log`; `-q` keeps only errors.
#[cfg(feature = "cli")]
fn init_logger(quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::builder()
        .filter_module("doctex", level)
        .filter_module("d2l", level)
        .parse_default_env()
        .try_init();
}

/// Explicit `--config` must exist; otherwise `./doctex.toml` is optional.
#[cfg(feature = "cli")]
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let found = Config::discover(Path::new("."))?;
            if found.is_some() {
                log::debug!("using ./{}", CONFIG_FILE_NAME);
            }
            Ok(found.unwrap_or_default())
        }
    }
}

#[cfg(feature = "cli")]
fn fail(err: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install doctex --features cli");
    eprintln!("  d2l [OPTIONS] [INPUT_FILE]");
}
