use anyhow::Context;
use clap::Parser;
use detachment_search::utils::{logger, validation::Validate};
use detachment_search::{CliConfig, CsvFileSource, SearchConfig, SearchPipeline};

fn main() {
    let cli = CliConfig::parse();
    logger::init_cli_logger();

    tracing::info!("Starting detachment-search");
    tracing::debug!("Roster path: {}", cli.input.display());

    let config = SearchConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {e}");
        eprintln!("❌ {e}");
        std::process::exit(2);
    }

    let source = CsvFileSource::new(cli.input.clone());
    let pipeline = SearchPipeline::new(source, config);

    let report = pipeline
        .run()
        .with_context(|| format!("failed to search roster {}", cli.input.display()));
    match report {
        Ok(report) => {
            if !report.is_empty() {
                println!("{report}");
            }
        }
        Err(e) => {
            tracing::error!("Search failed: {e:#}");
            eprintln!("❌ {e:#}");
            std::process::exit(1);
        }
    }
}
