mod browse;
mod commands;
mod terminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vitrine")]
#[command(about = "Browse the boutique catalog and prepare an order email")]
struct Cli {
    /// Catalog URL; overrides `VITRINE_CATALOG_URL`.
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the catalog once and exit.
    List {
        /// Only products whose name or description contains this text.
        #[arg(long)]
        search: Option<String>,
        /// `all`, `nouveautes`, or a category.
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Interactive session (default).
    Browse,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = vitrine_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let url = cli.url.unwrap_or_else(|| config.catalog_url.clone());
    tracing::debug!(env = %config.env, url = %url, "starting");

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::List { search, filter } => {
            browse::run_list(&config, &url, search.as_deref(), &filter).await?;
        }
        Commands::Browse => browse::run_browse(&config, &url).await?,
    }

    Ok(())
}
