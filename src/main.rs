use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use jqxpath::config::Config;
use jqxpath::file::loader::{load_selector_file, load_selectors_from_stdin};
use jqxpath::report::{convert_all, write_conversions, Explanation, OutputFormat};
use jqxpath::RootMode;

/// jqxpath - Convert jQuery-style selectors into XPath expressions
#[derive(Parser)]
#[command(name = "jqxpath")]
#[command(version)]
#[command(about = "Convert jQuery-style CSS selectors into XPath 1.0 expressions", long_about = None)]
struct Cli {
    /// Selectors to convert (omit to read one selector per line from --file or stdin)
    selectors: Vec<String>,

    /// Read selectors from a file, one per line (.gz files are decompressed)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Leading path marker: relative (""), root ("/") or anywhere ("//")
    #[arg(short, long, value_enum)]
    root: Option<RootMode>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print "selector => xpath" instead of the bare XPath
    #[arg(short, long)]
    echo: bool,

    /// Keep converting after a selector fails
    #[arg(short, long)]
    keep_going: bool,

    /// Print the scanned fragments and path tree as JSON
    #[arg(long)]
    explain: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns Ok(false) when at least one selector failed to convert.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    // CLI flags override config values
    let config = Config::load();
    let root_mode = cli.root.unwrap_or(config.root_mode);
    let format = cli.format.unwrap_or(config.output_format);
    let keep_going = cli.keep_going || config.keep_going;
    let echo = cli.echo || config.echo_selector;

    let selectors = collect_selectors(&cli)?;
    log::debug!(
        "converting {} selector(s) with root mode {:?}",
        selectors.len(),
        root_mode
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.explain {
        return explain(&mut out, &selectors, root_mode, keep_going);
    }

    let conversions = convert_all(&selectors, root_mode, keep_going);
    write_conversions(&mut out, &conversions, format, echo)?;
    out.flush()?;

    let mut all_ok = true;
    for conversion in conversions.iter().filter(|c| !c.is_ok()) {
        all_ok = false;
        if format == OutputFormat::Plain {
            eprintln!(
                "{}: {}",
                conversion.selector,
                conversion.error.as_deref().unwrap_or_default()
            );
        }
    }
    Ok(all_ok)
}

fn collect_selectors(cli: &Cli) -> Result<Vec<String>> {
    let mut selectors = cli.selectors.clone();

    if let Some(path) = &cli.file {
        let from_file = load_selector_file(path)
            .with_context(|| format!("Failed to load selectors from {}", path.display()))?;
        selectors.extend(from_file);
    } else if selectors.is_empty() {
        if io::stdin().is_terminal() {
            anyhow::bail!("No selectors given; pass them as arguments, with --file, or on stdin");
        }
        selectors = load_selectors_from_stdin()?;
    }

    Ok(selectors)
}

fn explain<W: Write>(
    out: &mut W,
    selectors: &[String],
    root_mode: RootMode,
    keep_going: bool,
) -> Result<bool> {
    let mut all_ok = true;
    for selector in selectors {
        match Explanation::new(selector, root_mode) {
            Ok(explanation) => {
                serde_json::to_writer_pretty(&mut *out, &explanation)?;
                writeln!(out)?;
            }
            Err(e) => {
                all_ok = false;
                eprintln!("{}: {}", selector, e);
                if !keep_going {
                    break;
                }
            }
        }
    }
    out.flush()?;
    Ok(all_ok)
}
