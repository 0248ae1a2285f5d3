//! Metrify command-line front end.
//!
//! Reads text from stdin or from files and writes it back with every
//! recognized imperial quantity followed by its bracketed metric
//! equivalent. Annotated text passes through unchanged, so the tool can
//! be re-run on its own output.
//!
//! Modes:
//! - no FILE: stdin to stdout filter
//! - FILE arguments: each file annotated to stdout, in order
//! - -i/--in-place: rewrite FILEs instead, touching only files that change
//! - --units: dump the conversion rule table as JSON and exit

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use metrify::Metrify;
use metrify_units::{RuleInfo, RULES};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "metrify")]
#[command(version, about = "Annotates imperial quantities in text with metric equivalents", long_about = None)]
struct Cli {
    /// Files to annotate; reads stdin when none are given, '-' also reads stdin
    file: Vec<String>,

    /// Rewrite each FILE instead of printing to stdout
    #[arg(short, long)]
    in_place: bool,

    /// Print the conversion rule table as JSON and exit
    #[arg(long)]
    units: bool,
}

fn render_units() -> Result<String, String> {
    let rules: Vec<RuleInfo> = RULES.rules().iter().map(|r| r.info()).collect();
    let json = serde_json::to_string_pretty(&rules)
        .map_err(|e| format!("Failed to serialize rule table: {}", e))?;
    Ok(format!("{}\n", json))
}

fn write_out(writer: &mut impl Write, text: &str) -> Result<(), String> {
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| format!("Failed to write stdout: {}", e))
}

fn write_stdout(text: &str) -> Result<(), String> {
    write_out(&mut io::stdout().lock(), text)
}

fn annotate_stdin(engine: &Metrify) -> Result<(), String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    write_stdout(&engine.transform(&input))
}

fn annotate_file(engine: &Metrify, path: &str, in_place: bool) -> Result<(), String> {
    let original =
        fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    let annotated = engine.transform(&original);
    if !in_place {
        return write_stdout(&annotated);
    }
    if annotated == original {
        debug!("'{}' unchanged, not rewritten", path);
        return Ok(());
    }
    fs::write(path, &annotated).map_err(|e| format!("Failed to write '{}': {}", path, e))?;
    debug!("rewrote '{}'", path);
    Ok(())
}

fn run(cli: &Cli) -> Result<(), String> {
    if cli.units {
        return write_stdout(&render_units()?);
    }
    if cli.in_place && cli.file.is_empty() {
        return Err("--in-place requires at least one FILE".to_string());
    }
    let engine = Metrify::default();
    if cli.file.is_empty() {
        return annotate_stdin(&engine);
    }
    for path in &cli.file {
        if path == "-" {
            annotate_stdin(&engine)?;
        } else {
            annotate_file(&engine, path, cli.in_place)?;
        }
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unit_listing_survives_a_closed_pipe() {
        let listing = render_units().unwrap();
        let err = write_out(&mut ClosedPipe, &listing).unwrap_err();
        assert!(err.starts_with("Failed to write stdout"), "got: {}", err);
    }

    #[test]
    fn test_unit_listing_is_valid_json() {
        let listing = render_units().unwrap();
        let rules: Vec<serde_json::Value> = serde_json::from_str(&listing).unwrap();
        assert_eq!(rules.len(), RULES.len());
        assert!(rules[0].get("category").is_some());
    }
}
