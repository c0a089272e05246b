use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

use fsio_gen::config::ConfigFile;
use fsio_gen::fsio_settings::domain::{EmitterConfig, LineEnding, DEFAULT_GENERATION_MESSAGE};
use fsio_gen::shared::error::FsioError;
use fsio_gen::shared::Result;

/// Generate FSIO settings enum and getter files
#[derive(Parser, Debug)]
#[command(name = "fsio-gen")]
#[command(version)]
#[command(about = "Generate FSIO settings enum and getter files", long_about = None)]
pub struct Args {
    /// Settings manifest (YAML, or JSON when the extension is .json)
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Destination of the generated enum file
    #[arg(short, long)]
    pub enum_output: Option<PathBuf>,

    /// Destination of the generated getters file
    #[arg(short, long)]
    pub getters_output: Option<PathBuf>,

    /// Path to a config file (defaults to ./fsio-gen.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Line ending of generated files: lf, crlf or cr
    #[arg(short, long)]
    pub line_ending: Option<LineEnding>,

    /// Text following "// this file " in the generated header
    #[arg(long)]
    pub message: Option<String>,

    /// Append the generation date to the header message
    #[arg(short, long)]
    pub timestamp: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Options after merging CLI flags over the config file
#[derive(Debug)]
pub struct ResolvedOptions {
    pub manifest: PathBuf,
    pub enum_output: PathBuf,
    pub getters_output: PathBuf,
    pub emitter_config: EmitterConfig,
    pub quiet: bool,
}

impl ResolvedOptions {
    /// CLI flag > config file > built-in default
    pub fn merge(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let enum_output = args
            .enum_output
            .or(config.enum_output)
            .ok_or_else(|| missing_output("enum output", "--enum-output"))?;
        let getters_output = args
            .getters_output
            .or(config.getters_output)
            .ok_or_else(|| missing_output("getters output", "--getters-output"))?;

        let mut message = args
            .message
            .or(config.generation_message)
            .unwrap_or_else(|| DEFAULT_GENERATION_MESSAGE.to_string());
        if args.timestamp || config.timestamp.unwrap_or(false) {
            message = stamp_message(&message, Utc::now());
        }
        let line_ending = args.line_ending.or(config.line_ending).unwrap_or_default();

        Ok(Self {
            manifest: args.manifest,
            enum_output,
            getters_output,
            emitter_config: EmitterConfig::with_line_ending(message, line_ending)?,
            quiet: args.quiet,
        })
    }
}

/// Appends the date the way the firmware's older generators did, e.g. `Sun Oct 18 21:04:05 UTC 2026`
fn stamp_message(message: &str, now: DateTime<Utc>) -> String {
    format!("{} {}", message, now.format("%a %b %d %H:%M:%S UTC %Y"))
}

fn missing_output(what: &str, flag: &str) -> anyhow::Error {
    FsioError::Validation {
        message: format!(
            "no {} path given. Pass {} or set it in the config file",
            what, flag
        ),
    }
    .into()
}
