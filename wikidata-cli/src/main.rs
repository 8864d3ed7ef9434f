//! Wikidata search demo.
//!
//! Searches for a term, then fetches the first hit with its claims and
//! prints both as JSON.
//!
//! Usage:
//!   wikidata "New York Mets" --limit 3

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use wikidata_search::{EntityType, WikidataClient, WikidataConfig};

#[derive(Parser, Debug)]
#[command(name = "wikidata")]
#[command(about = "Search Wikidata and show the top hit with its claims")]
struct Args {
    /// Text to search for
    term: String,

    /// Language for search, labels and descriptions
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Maximum number of search results (1-50)
    #[arg(short = 'n', long, default_value_t = 7)]
    limit: u32,

    /// Entity type to search (item or property)
    #[arg(long = "type", default_value = "item")]
    entity_type: EntityType,

    /// Allow the API's language fallback
    #[arg(long)]
    no_strict_language: bool,

    /// Keep raw property and item ids in claims
    #[arg(long)]
    no_resolve: bool,

    /// API host, e.g. https://test.wikidata.org
    #[arg(long)]
    api_url: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> WikidataConfig {
        let mut config = WikidataConfig {
            language: self.language.clone(),
            strict_language: !self.no_strict_language,
            entity_type: self.entity_type,
            limit: self.limit,
            ..Default::default()
        };
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let client = WikidataClient::new(args.config()).context("failed to build client")?;

    let found = client
        .search(&client.search_options(args.term.as_str()))
        .await
        .context("search failed")?;
    info!("{} results for {:?}", found.results.len(), args.term);

    let Some(top) = found.results.first() else {
        warn!("Nothing found");
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    };

    let details = client
        .get_entities(&[top.id.as_str()], !args.no_resolve)
        .await
        .with_context(|| format!("lookup of {} failed", top.id))?;

    let output = json!({
        "search": found.results,
        "entity": details.entities.first(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
