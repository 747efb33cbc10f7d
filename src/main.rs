use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use benefit_eligibility::api::{AppState, create_router};
use benefit_eligibility::config::ConfigLoader;
use benefit_eligibility::eligibility::classify_batch;
use benefit_eligibility::logging;
use benefit_eligibility::tabular::{read_table, write_csv, write_csv_file};

#[derive(Parser)]
#[command(name = "benefit-eligibility")]
#[command(about = "Classify employee rosters for benefit point payouts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the service configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a roster file and export the retained rows as CSV
    Classify {
        /// Roster to read (.csv, .xlsx or .xls)
        #[arg(short, long)]
        input: PathBuf,

        /// Reference date (YYYY-MM-DD); defaults to the configured date
        #[arg(short, long)]
        reference_date: Option<NaiveDate>,

        /// Where to write the CSV; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to bind; overrides the configured address
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    match cli.command {
        Commands::Classify {
            input,
            reference_date,
            output,
        } => classify(&config, input, reference_date, output),
        Commands::Serve { bind } => serve(config, bind).await,
    }
}

fn classify(
    config: &ConfigLoader,
    input: PathBuf,
    reference_date: Option<NaiveDate>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let Some(reference_date) = config.resolve_reference_date(reference_date) else {
        bail!("no reference date: pass --reference-date or set default_reference_date");
    };

    let table = read_table(&input)?;
    let report = classify_batch(table, reference_date)?;

    match &output {
        Some(path) => {
            write_csv_file(&report.records, path)?;
            info!(path = %path.display(), rows = report.records.len(), "Results written");
        }
        None => write_csv(&report.records, io::stdout().lock())?,
    }

    info!(
        eligible = report.summary.eligible,
        needs_review = report.summary.needs_review,
        excluded = report.summary.excluded,
        "Roster classified"
    );
    Ok(())
}

async fn serve(config: ConfigLoader, bind: Option<String>) -> anyhow::Result<()> {
    let address = bind.unwrap_or_else(|| config.config().bind_address.clone());
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;

    info!(address = %address, "Benefit eligibility API listening");
    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
