use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use swagger_downlevel_core::{extract_spec, normalize};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "swagger-downlevel")]
#[command(about = "Normalize a converted OpenAPI 3 document into Swagger 2-compatible form")]
#[command(version)]
struct Cli {
    /// Input file: the converter's output, bare or inside its `spec` envelope
    input: PathBuf,

    /// Output normalized document file (defaults to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output rewrite-report file (JSON Pointers of every rewrite)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing — logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let file = File::open(&cli.input)
        .with_context(|| format!("Failed to open input file: {}", cli.input.display()))?;
    let reader = BufReader::new(file);
    let converted: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse document from: {}", cli.input.display()))?;

    let mut document = extract_spec(converted);
    let report = normalize(&mut document);

    tracing::debug!(
        stripped = report.stripped_fields.len(),
        collapsed = report.collapsed_unions.len(),
        "document normalized"
    );

    // Write normalized document
    write_json(&document, cli.output.as_ref(), cli.format)?;

    // Write rewrite-report sidecar
    if let Some(path) = cli.report {
        write_json(&report, Some(&path), cli.format)?;
    }

    if let Some(path) = &cli.output {
        eprintln!("Normalized document written to {}", path.display());
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;

    Ok(())
}
