mod cli;

use cli::{Args, ResolvedOptions};
use fsio_gen::adapters::outbound::console::{NullProgressReporter, StderrProgressReporter};
use fsio_gen::adapters::outbound::filesystem::{FileSettingsEmitter, FileSystemReader};
use fsio_gen::application::dto::GenerateRequest;
use fsio_gen::application::use_cases::GenerateFsioFilesUseCase;
use fsio_gen::config::{discover_config, load_config_from_path};
use fsio_gen::ports::outbound::ProgressReporter;
use fsio_gen::shared::error::ExitCode;
use fsio_gen::shared::security::{validate_distinct_outputs, validate_output_path};
use fsio_gen::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let options = ResolvedOptions::merge(args, config)?;

    validate_output_path(&options.enum_output)?;
    validate_output_path(&options.getters_output)?;
    validate_distinct_outputs(&options.enum_output, &options.getters_output)?;

    if options.quiet {
        generate(options, NullProgressReporter::new())
    } else {
        generate(options, StderrProgressReporter::new())
    }
}

fn generate<PR: ProgressReporter>(options: ResolvedOptions, progress_reporter: PR) -> Result<()> {
    let request = GenerateRequest::new(options.manifest);
    let emitter = FileSettingsEmitter::new(
        options.enum_output,
        options.getters_output,
        options.emitter_config,
    );

    let mut use_case =
        GenerateFsioFilesUseCase::new(FileSystemReader::new(), emitter, progress_reporter);
    use_case.execute(request)?;

    Ok(())
}
