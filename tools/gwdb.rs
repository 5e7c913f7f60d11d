use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use geneweaver_db::aio;
use geneweaver_db::infrastructure::persistence::{connect, PgCursor};
use geneweaver_db::infrastructure::query::geneset_search::{GenesetSearch, DEFAULT_LIMIT};
use geneweaver_db::value_objects::{GenesetTier, Species};
use geneweaver_db::Config;

#[derive(Parser)]
#[command(name = "gwdb", about = "Query the GeneWeaver database")]
struct Cli {
    /// Overrides GWDB_URI and the GWDB_SERVER/USER/PASSWORD/NAME parts
    #[arg(long)]
    database_url: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Row counts and the last gene identifier update
    Health,

    /// Full text geneset search
    Genesets {
        #[arg(long)]
        search: String,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i64,

        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Species name, e.g. "Mus musculus"; repeatable
        #[arg(long)]
        species: Vec<Species>,

        /// Curation tier, e.g. "tier1"; repeatable
        #[arg(long)]
        tier: Vec<GenesetTier>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = match cli.database_url {
        Some(url) => Config::with_uri(url),
        None => Config::from_env(),
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    let pool = connect(&config)
        .await
        .context("failed to connect to database")?;
    let mut cursor = PgCursor::new(pool);

    let output = match cli.command {
        Command::Health => {
            let report = aio::monitor::health_check(&mut cursor).await?;
            serde_json::to_value(report)?
        }
        Command::Genesets {
            search,
            limit,
            offset,
            species,
            tier,
        } => {
            let query = GenesetSearch {
                search_text: Some(search),
                species: (!species.is_empty()).then(|| species.into()),
                tier: (!tier.is_empty()).then(|| tier.into()),
                limit: Some(limit),
                offset: Some(offset),
                ..GenesetSearch::default()
            };
            let rows = aio::search::genesets(&mut cursor, &query).await?;
            info!("Found {} genesets", rows.len());
            serde_json::to_value(rows)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
