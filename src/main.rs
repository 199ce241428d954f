use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use blogreader::api::{ArticleId, HttpApiClient};
use blogreader::config::Config;
use blogreader::hooks::{ArticleListLoader, ArticleLoader, GoodCountHook};
use blogreader::logging::init_tracing;
use blogreader::store::AppStore;

#[derive(Debug, Parser)]
#[command(name = "blogreader", version, about = "Read and like blog articles")]
struct Cli {
    /// Path to the config file (default: platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override `api.base_url` from the config file.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List article summaries with their good counts.
    List,
    /// Show one article.
    Show { id: ArticleId },
    /// Like an article and print the confirmed count.
    Like { id: ArticleId },
}

#[derive(Debug, Serialize)]
struct LikeOutput {
    id: ArticleId,
    good: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let client = Arc::new(HttpApiClient::new(&config.api).context("Failed to create API client")?);
    let store = AppStore::new();
    let good = GoodCountHook::new(store.clone(), Arc::clone(&client));

    match cli.command {
        Command::List => {
            let list = ArticleListLoader::new(good.clone());
            list.load().await.context("Failed to load articles")?;
            print_json(&list.current().into_ready().unwrap_or_default())?;
        }
        Command::Show { id } => {
            let loader = ArticleLoader::new(client);
            loader
                .load(id)
                .await
                .with_context(|| format!("Failed to load article {}", id))?;
            if let Some(article) = loader.current().into_ready() {
                print_json(&article)?;
            }
        }
        Command::Like { id } => {
            ArticleListLoader::new(good.clone())
                .load()
                .await
                .context("Failed to load articles")?;
            let count = good
                .increment_good_count(id)
                .await
                .with_context(|| format!("Failed to like article {}", id))?;
            print_json(&LikeOutput { id, good: count })?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate().context("Invalid --base-url")?;
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
