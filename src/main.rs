mod cli;

use bean_depend::adapters::outbound::console::StderrProgressReporter;
use bean_depend::adapters::outbound::filesystem::FileSystemReader;
use bean_depend::adapters::outbound::manifest::TomlManifestContainer;
use bean_depend::application::dto::AnalysisRequest;
use bean_depend::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use bean_depend::application::use_cases::AnalyzeDependenciesUseCase;
use bean_depend::config::{discover_config, load_config_from_path};
use bean_depend::ports::outbound::ManifestReader;
use bean_depend::shared::error::ExitCode;
use bean_depend::shared::Result;
use cli::{Args, Options};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments; clap exits with code 2 on its own errors
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(args.config_search_dir())?,
    };
    let options = args.resolve(config)?;

    // Read and parse the container manifest
    eprintln!("📖 Loading bean container manifest: {}", options.manifest.display());
    let content = FileSystemReader::new().read_manifest(&options.manifest)?;
    let container = TomlManifestContainer::parse(&content, &options.manifest)?;
    eprintln!(
        "✅ Loaded {} bean(s) and {} configuration class(es)",
        container.bean_count(),
        container.configuration_count()
    );

    let request = build_request(&options)?;
    let use_case = AnalyzeDependenciesUseCase::new(container, StderrProgressReporter::new());
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let formatter = FormatterFactory::create(options.format);
    let report = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from(options.output.clone()));
    presenter.present(&report)?;

    if options.fail_on_cycles && response.has_cycles() {
        return Ok(ExitCode::CyclesDetected);
    }
    Ok(ExitCode::Success)
}

fn build_request(options: &Options) -> Result<AnalysisRequest> {
    let mut builder = AnalysisRequest::builder()
        .max_depth(options.max_depth)
        .exclude_patterns(options.exclude.clone());
    if let Some(root) = &options.root {
        builder = builder.configuration_root(root.as_str());
    }
    builder.build()
}
