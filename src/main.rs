use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use x12path::config::Config;
use x12path::path::Parser as PathParser;
use x12path::report::{check_reader, render, CheckSummary, OutputFormat, PathReport};

/// x12path - Parse, format and check X12 document paths
#[derive(Parser)]
#[command(name = "x12path")]
#[command(version)]
#[command(about = "Parse, format and check X12 document paths", long_about = None)]
struct Cli {
    /// Reject paths whose last token is not a segment reference
    #[arg(long, global = true)]
    strict: bool,

    /// Report format (default: from config, else text)
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse paths and print their fields
    Parse {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the canonical form of each path
    Format {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Check one path per line from a file or stdin
    Check {
        /// File to read (omit to read stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write the default config file
        #[arg(long)]
        init: bool,
    },
}

/// Logs go to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    // CLI flags override config
    let mut config = Config::load();
    if cli.strict {
        config.strict = true;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    let parser = PathParser::with_options(config.parse_options());

    match cli.command {
        Command::Parse { paths } => {
            let reports: Vec<PathReport> = paths
                .iter()
                .map(|text| PathReport::new(text, parser.parse(text)))
                .collect();
            println!("{}", render(&reports, config.output)?);
            Ok(exit_code(reports.iter().all(PathReport::is_ok)))
        }
        Command::Format { paths } => {
            let mut ok = true;
            for text in &paths {
                match parser.parse(text) {
                    Ok(path) => println!("{}", path),
                    Err(e) => {
                        eprintln!("error: {}", e);
                        ok = false;
                    }
                }
            }
            Ok(exit_code(ok))
        }
        Command::Check { file } => {
            let summary = match file {
                Some(file_path) => {
                    let file = File::open(&file_path).with_context(|| {
                        format!("Failed to open {}", file_path.display())
                    })?;
                    check_reader(BufReader::new(file), &parser)
                        .context("Failed to read paths")?
                }
                None => check_reader(io::stdin().lock(), &parser)
                    .context("Failed to read paths from stdin")?,
            };
            print_summary(&summary, config.output)?;
            Ok(exit_code(summary.is_ok()))
        }
        Command::Config { init } => {
            if init {
                let written = Config::default().save()?;
                println!("Wrote {}", written.display());
            }
            match Config::config_path() {
                Some(path) => println!("# {}", path.display()),
                None => println!("# no config directory"),
            }
            println!("# trailing tokens: {:?}", parser.options().trailing_token);
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_summary(summary: &CheckSummary, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for (line, report) in &summary.failures {
                println!("line {}: {}", line, report.to_line());
            }
            println!(
                "{} checked, {} failed",
                summary.checked,
                summary.failures.len()
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(summary)?),
    }
    Ok(())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
