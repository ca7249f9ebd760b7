use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use idgen_lib::{
    CandidateDeclaration, GeneratedUnit, GeneratorConfig, GeneratorError, MarkerPolicy, generate,
    qualify, scan, write_units,
};
use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "idgen",
    version,
    about = "Generates strongly typed identifiers for marked i64 newtypes"
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors (plain text output)
    #[arg(long, global = true)]
    plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Returns the output format based on flags.
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.plain {
            OutputFormat::Plain
        } else {
            OutputFormat::Pretty
        }
    }
}

/// Common arguments for all subcommands
#[derive(clap::Args, Debug, Clone)]
struct InputArgs {
    /// Rust source files or directories to scan
    #[arg(value_name = "PATH", num_args = 1.., required = true)]
    inputs: Vec<PathBuf>,

    /// Source root used to derive module paths (defaults to each input)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Only accept the marker written as, or imported from, `idgen_macros::identifier`
    #[arg(long)]
    strict_marker: bool,
}

impl InputArgs {
    fn config(&self) -> GeneratorConfig {
        let policy = if self.strict_marker {
            MarkerPolicy::Strict
        } else {
            MarkerPolicy::Permissive
        };

        let config = GeneratorConfig::new().with_policy(policy);
        match &self.root {
            Some(root) => config.with_root(root),
            None => config,
        }
    }
}

/// Arguments for the generate command
#[derive(clap::Args, Debug, Clone)]
struct GenerateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Directory the generated units are written under
    #[arg(long, short = 'o', value_name = "DIR", default_value = "generated")]
    out_dir: PathBuf,

    /// Print the units instead of writing them
    #[arg(long)]
    dry_run: bool,
}

#[derive(clap::Subcommand, Debug, Clone)]
enum Command {
    /// List extensible struct declarations and whether they qualify
    Scan(InputArgs),
    /// Generate identifier units for marked declarations
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    /// Colored output (default when TTY)
    Pretty,
    /// Plain text without colors
    Plain,
    /// JSON output
    Json,
}

/// Configuration for output styling.
struct OutputConfig {
    use_colors: bool,
}

impl OutputConfig {
    fn new(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => {
                let no_color = std::env::var("NO_COLOR").is_ok();
                let is_tty = std::io::stdout().is_terminal();
                Self {
                    use_colors: !no_color && is_tty,
                }
            }
            OutputFormat::Plain | OutputFormat::Json => Self { use_colors: false },
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_colors {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// One scanned declaration with its qualification outcome.
#[derive(Debug, Serialize)]
struct CandidateReport<'a> {
    #[serde(flatten)]
    candidate: &'a CandidateDeclaration,
    qualified: bool,
    /// Unit key, present only when the declaration qualifies
    unit: Option<String>,
}

/// One generated unit and where it was (or would be) written.
#[derive(Debug, Serialize)]
struct UnitReport<'a> {
    #[serde(flatten)]
    unit: &'a GeneratedUnit,
    path: &'a Path,
    written: bool,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output_format = cli.output_format();
    let output_config = OutputConfig::new(output_format);

    match &cli.command {
        Command::Scan(args) => run_scan(args, output_format, &output_config),
        Command::Generate(args) => run_generate(args, output_format, &output_config),
    }
}

/// Logs go to stderr so JSON on stdout stays parseable. `RUST_LOG` wins
/// over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_scan(
    args: &InputArgs,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), GeneratorError> {
    let generator_config = args.config();
    let marker = generator_config.marker();
    let candidates = scan(&args.inputs, &generator_config)?;
    debug!(count = candidates.len(), "scan finished");

    let reports: Vec<CandidateReport<'_>> = candidates
        .iter()
        .map(|candidate| {
            let unit = qualify(candidate, &marker).map(|ty| ty.unit_key());
            CandidateReport {
                candidate,
                qualified: unit.is_some(),
                unit,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&reports),
        OutputFormat::Pretty | OutputFormat::Plain => {
            render_candidates(&reports, config);
            Ok(())
        }
    }
}

fn run_generate(
    args: &GenerateArgs,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), GeneratorError> {
    let generator_config = args.input.config();
    let candidates = scan(&args.input.inputs, &generator_config)?;
    let units = generate(&candidates, &generator_config)?;
    let paths = write_units(&units, &args.out_dir, args.dry_run)?;

    match format {
        OutputFormat::Json => {
            let reports: Vec<UnitReport<'_>> = units
                .iter()
                .zip(&paths)
                .map(|(unit, path)| UnitReport {
                    unit,
                    path,
                    written: !args.dry_run,
                })
                .collect();
            print_json(&reports)
        }
        OutputFormat::Pretty | OutputFormat::Plain => {
            render_units(&units, &paths, args.dry_run, config);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), GeneratorError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| GeneratorError::Io {
        path: PathBuf::from("<stdout>"),
        source: std::io::Error::other(source),
    })?;
    println!("{json}");
    Ok(())
}

fn render_candidates(reports: &[CandidateReport<'_>], config: &OutputConfig) {
    if reports.is_empty() {
        println!("{}", config.paint("(no extensible declarations)", Style::new().dimmed()));
        return;
    }

    for report in reports {
        let candidate = report.candidate;
        let location = format!("[{}]", candidate.source.display());

        match &report.unit {
            Some(key) => println!(
                "{} {} {} {}",
                config.paint("+", Style::new().green().bold()),
                config.paint(&candidate.qualified_name(), Style::new().magenta()),
                config.paint(&format!("-> {key}"), Style::new().cyan()),
                config.paint(&location, Style::new().dimmed()),
            ),
            None => println!(
                "{} {} {}",
                config.paint("-", Style::new().dimmed()),
                candidate.qualified_name(),
                config.paint(&location, Style::new().dimmed()),
            ),
        }
    }

    let qualified = reports.iter().filter(|report| report.qualified).count();
    println!();
    println!("{} of {} declarations qualify", qualified, reports.len());
}

fn render_units(units: &[GeneratedUnit], paths: &[PathBuf], dry_run: bool, config: &OutputConfig) {
    if units.is_empty() {
        println!("{}", config.paint("(no identifiers to generate)", Style::new().dimmed()));
        return;
    }

    for (unit, path) in units.iter().zip(paths) {
        if dry_run {
            println!("{}", config.paint(&format!("==> {}", path.display()), Style::new().bold()));
            println!("{}", unit.content);
        } else {
            println!(
                "{} {}",
                config.paint("wrote", Style::new().green()),
                path.display()
            );
        }
    }

    let verb = if dry_run { "would write" } else { "wrote" };
    println!();
    println!("{} {} identifier unit(s)", verb, units.len());
}
