//! Input Masking CLI Application.
//!
//! This binary provides a command-line interface for the masker library,
//! formatting values given as arguments or read line by line from stdin.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use masker::{apply_custom_mask, MaskAlternative, MaskOutput, MaskSpec, NumericConfig};

/// Input Masking Tool
///
/// Format phone numbers, documents, dates, plates and amounts with
/// declarative mask templates. Values are read from stdin when none
/// are given on the command line.
#[derive(Parser)]
#[command(name = "masker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Mask template (repeat to select between alternatives by length)
    #[arg(short, long, value_name = "TEMPLATE")]
    mask: Vec<String>,

    /// Alternative selected when REGEX matches the cleaned input
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["TEMPLATE", "REGEX"],
        conflicts_with = "spec"
    )]
    regex_mask: Vec<String>,

    /// JSON mask specification file
    #[arg(short, long, value_name = "FILE", conflicts_with = "mask")]
    spec: Option<PathBuf>,

    /// Values to mask
    #[arg(value_name = "VALUE")]
    values: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct OutputArgs {
    /// Print the unmasked value instead of the masked one
    #[arg(short, long, global = true, conflicts_with = "json")]
    unmasked: bool,

    /// Print each result as a JSON object
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format values as numbers (currency, percentages)
    Numeric {
        /// Text placed before the number
        #[arg(long, default_value = "")]
        prefix: String,

        /// Text placed after the number
        #[arg(long, default_value = "")]
        suffix: String,

        /// Thousands delimiter
        #[arg(long, default_value = ".")]
        delimiter: String,

        /// Decimal separator
        #[arg(long, default_value = ",")]
        separator: String,

        /// Number of decimal digits
        #[arg(long, default_value_t = 0)]
        decimal: usize,

        /// Maximum number of digits kept
        #[arg(long, value_name = "DIGITS")]
        max_length: Option<usize>,

        /// Values to format
        #[arg(value_name = "VALUE")]
        values: Vec<String>,
    },
}

/// How each result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Masked,
    Unmasked,
    Json,
}

impl From<OutputArgs> for OutputFormat {
    fn from(args: OutputArgs) -> Self {
        if args.json {
            Self::Json
        } else if args.unmasked {
            Self::Unmasked
        } else {
            Self::Masked
        }
    }
}

/// Mask command handler.
struct MaskHandler {
    spec: MaskSpec,
    format: OutputFormat,
}

impl MaskHandler {
    fn new(spec: MaskSpec, format: OutputFormat) -> Self {
        Self { spec, format }
    }

    /// Masks every value, or every stdin line when `values` is empty.
    fn run(&self, values: &[String]) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if values.is_empty() {
            tracing::debug!("reading values from stdin");
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read from stdin")?;
                self.write_one(&mut out, &line)?;
            }
        } else {
            for value in values {
                self.write_one(&mut out, value)?;
            }
        }

        out.flush().context("Failed to flush stdout")
    }

    fn write_one(&self, out: &mut impl Write, value: &str) -> Result<()> {
        let result = apply_custom_mask(value, &self.spec);
        tracing::debug!(value, masked = %result.masked, unmasked = %result.unmasked, "masked value");
        writeln!(out, "{}", render(&result, self.format)?).context("Failed to write output")
    }
}

fn render(result: &MaskOutput, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Masked => result.masked.clone(),
        OutputFormat::Unmasked => result.unmasked.clone(),
        OutputFormat::Json => serde_json::to_string(result).context("Failed to encode result")?,
    })
}

/// Builds a pattern specification from command-line options.
fn build_spec(masks: &[String], regex_masks: &[String], spec: Option<&Path>) -> Result<MaskSpec> {
    if let Some(path) = spec {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read spec file {}", path.display()))?;
        return MaskSpec::from_json(&json)
            .with_context(|| format!("Invalid spec file {}", path.display()));
    }

    let mut alternatives = Vec::with_capacity(masks.len() + regex_masks.len() / 2);
    for pair in regex_masks.chunks(2) {
        if let [template, regex] = pair {
            alternatives.push(
                MaskAlternative::pattern(template.as_str(), regex)
                    .with_context(|| format!("Invalid --regex-mask for '{}'", template))?,
            );
        }
    }
    alternatives.extend(masks.iter().map(|m| MaskAlternative::literal(m.as_str())));

    match alternatives.len() {
        0 => anyhow::bail!("No mask specified. Use --mask, --regex-mask, --spec, or 'numeric'."),
        1 if regex_masks.is_empty() => Ok(MaskSpec::Single(alternatives.remove(0))),
        _ => Ok(MaskSpec::Alternatives(alternatives)),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = OutputFormat::from(cli.output);

    match cli.command {
        Some(Commands::Numeric {
            prefix,
            suffix,
            delimiter,
            separator,
            decimal,
            max_length,
            values,
        }) => {
            let config = NumericConfig {
                prefix,
                suffix,
                delimiter,
                separator,
                decimal,
                max_length,
            };
            MaskHandler::new(MaskSpec::Numeric(config), format).run(&values)?;
        }
        None => {
            let spec = build_spec(&cli.mask, &cli.regex_mask, cli.spec.as_deref())?;
            MaskHandler::new(spec, format).run(&cli.values)?;
        }
    }

    Ok(())
}
