use clap::Parser;
use schemock::adapters::render::render_document;
use schemock::cli::{Cli, Command};
use schemock::config::Settings;
use schemock::{Annotator, AnnotatorOptions, DocumentLoader, RefResolver, SampleGenerator};
use tokio::io::AsyncWriteExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the document
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::new_with_cli(&cli)?;
    let loader = DocumentLoader::new(&settings.fetch)?;
    let mut document = loader.load(cli.source()).await?;

    let text = match &cli.command {
        Command::Annotate { .. } => {
            let annotator = Annotator::new(AnnotatorOptions::from(&settings.sample));
            let report = annotator.annotate(&mut document)?;
            info!(
                "Wrote {} examples ({} without sample)",
                report.responses + report.parameters,
                report.without_sample
            );
            render_document(&document, settings.output.format)?
        }
        Command::Sample { .. } => {
            let generator = if settings.sample.expand_placeholders {
                SampleGenerator::new().with_placeholder_expansion()
            } else {
                SampleGenerator::new()
            };
            let schema = RefResolver::new(&document).resolve(&document);
            generator
                .sample_json(&schema)?
                .unwrap_or_else(|| "null".to_string())
        }
    };

    match &settings.output.path {
        Some(path) => {
            tokio::fs::write(path, text.as_bytes()).await?;
            info!("Output written to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
