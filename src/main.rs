use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkedin_finder::input::read_company_list;
use linkedin_finder::{
    BatchRunner, BingClient, ProfileResolver, SearchEngine, Settings, export_all, parse_formats,
};

#[derive(Debug, Parser)]
#[command(name = "linkedin-finder")]
#[command(about = "Find LinkedIn company profile URLs for a list of company names")]
struct Cli {
    /// JSON settings file
    #[arg(long, env = "LINKEDIN_FINDER_CONFIG", default_value = "config/settings.json")]
    config: PathBuf,

    /// Company names, one per line (overrides the settings file)
    #[arg(long, env = "LINKEDIN_FINDER_INPUT")]
    input: Option<PathBuf>,

    /// Directory to write output files to (overrides the settings file)
    #[arg(long, env = "LINKEDIN_FINDER_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Comma-separated output formats: json,csv,excel,xml,rss
    #[arg(long, env = "LINKEDIN_FINDER_FORMATS", value_delimiter = ',')]
    formats: Vec<String>,

    /// Log filter, e.g. `info`, `debug`, `linkedin_finder=trace`
    #[arg(long, env = "LINKEDIN_FINDER_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Companies resolved at the same time
    #[arg(long, env = "LINKEDIN_FINDER_CONCURRENCY", default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let settings = Settings::load(&cli.config)?;
    let input_file = cli.input.unwrap_or_else(|| settings.input_file.clone());
    let output_dir = cli.output_dir.unwrap_or_else(|| settings.output_dir.clone());

    let requested = if cli.formats.is_empty() {
        settings.output_formats.clone()
    } else {
        cli.formats
    };
    let formats = parse_formats(&requested);
    if formats.is_empty() {
        bail!("no valid output formats specified");
    }

    let companies = read_company_list(&input_file)?;
    if companies.is_empty() {
        bail!("no company names to process in {}", input_file.display());
    }

    let finder_config = settings.finder_config();
    let client = match finder_config.search_engine {
        SearchEngine::Bing => BingClient::new(&finder_config)?,
    };
    let runner = BatchRunner::new(ProfileResolver::new(client), cli.concurrency);

    tracing::info!("starting lookup for {} companies", companies.len());
    let records = runner.run(&companies).await;
    tracing::info!("lookup finished, {} records collected", records.len());

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output dir {}", output_dir.display()))?;

    let failed: Vec<_> = export_all(&records, &output_dir, &formats)
        .into_iter()
        .filter_map(|(format, result)| result.err().map(|e| format!("{format}: {e}")))
        .collect();
    if !failed.is_empty() {
        bail!("{} export(s) failed: {}", failed.len(), failed.join("; "));
    }

    let shown = fs::canonicalize(&output_dir).unwrap_or(output_dir);
    tracing::info!("all done, outputs written to {}", shown.display());
    Ok(())
}
