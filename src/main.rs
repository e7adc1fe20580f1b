mod cli;
mod config;

use anyhow::Context;
use cli::Args;
use config::{discover_config, load_config_from_path, Settings, CONFIG_FILENAME};
use std::process;
use vexid::adapters::outbound::console::StderrProgressReporter;
use vexid::adapters::outbound::filesystem::FileSystemReader;
use vexid::application::dto::IdentifyResponse;
use vexid::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use vexid::application::use_cases::IdentifyDocumentsUseCase;
use vexid::ports::outbound::DocumentFormatter;
use vexid::shared::error::ExitCode;
use vexid::shared::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();

    let (config, config_note) = match args.config.as_deref() {
        Some(path) => {
            let config = load_config_from_path(path)?;
            let note = format!("📄 Loaded config from: {}", path.display());
            (Some(config), Some(note))
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            let config = discover_config(&cwd)?;
            let note = config.as_ref().map(|_| {
                format!(
                    "📄 Auto-discovered config file: {}",
                    cwd.join(CONFIG_FILENAME).display()
                )
            });
            (config, note)
        }
    };
    let settings = Settings::resolve(args, config)?;
    if let Some(note) = config_note.filter(|_| !settings.quiet) {
        eprintln!("{}", note);
    }

    // Create adapters (Dependency Injection)
    let document_reader = FileSystemReader::new();
    let progress_reporter = if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = IdentifyDocumentsUseCase::new(document_reader, progress_reporter);
    let response = use_case.execute(settings.to_request())?;

    if !settings.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create(settings.format);
    let output = render(formatter.as_ref(), &response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&output)?;

    Ok(())
}

/// Formats every identified document, one after another, newline separated.
fn render(formatter: &dyn DocumentFormatter, response: &IdentifyResponse) -> Result<String> {
    let mut rendered = response
        .documents
        .iter()
        .map(|identified| formatter.format(&identified.document))
        .collect::<Result<Vec<_>>>()?
        .join("\n");
    rendered.push('\n');
    Ok(rendered)
}
