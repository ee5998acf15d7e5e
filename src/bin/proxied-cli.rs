use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use proxied_entities::config::{
    read_config, validate_config, ConfigError, ConfigOverrides, ToolkitConfig,
};
use proxied_entities::encoding::tokenize_chain;
use proxied_entities::observability::init_logging;
use proxied_entities::request::{merge_headers, RequestConfig};
use proxied_entities::ToolkitClient;

#[derive(Parser)]
#[command(name = "proxied-cli")]
#[command(about = "Issue requests on behalf of a chain of proxied entities", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the target service (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Identity to assert; repeat for a chain, end user first
    #[arg(short = 'p', long = "proxied-entity")]
    proxied_entities: Vec<String>,

    /// Bearer token (overrides any configured credentials)
    #[arg(long)]
    bearer_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the headers that would be sent
    Headers,
    /// GET a path and print the JSON response
    Get { path: String },
    /// Split an X-ProxiedEntitiesChain value into identities
    Decode { chain: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Validate only once command-line values are in place.
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ToolkitConfig::default(),
    };
    config.apply_overrides(&ConfigOverrides {
        base_url: cli.url.clone(),
        proxied_entities: cli.proxied_entities.clone(),
        bearer_token: cli.bearer_token.clone(),
    });
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.logging.filter);
    tracing::debug!(
        config = ?cli.config,
        base_url = %config.client.base_url,
        proxied_entities = config.auth.proxied_entities.len(),
        "configuration resolved"
    );

    let configs = config.request_configs();
    let configs: Vec<&dyn RequestConfig> = configs.iter().map(|c| c.as_ref()).collect();

    match cli.command {
        Commands::Headers => {
            let mut headers = merge_headers(&configs)?;
            for (name, value) in headers.iter_mut() {
                if name.eq_ignore_ascii_case("authorization") {
                    *value = "<redacted>".to_string();
                }
            }
            println!("{}", serde_json::to_string_pretty(&headers)?);
        }
        Commands::Get { path } => {
            let client = ToolkitClient::new(&config.client)?;
            let json: Value = client.get_json(&path, &configs).await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Commands::Decode { chain } => {
            let identities = tokenize_chain(&chain)?;
            println!("{}", serde_json::to_string_pretty(&identities)?);
        }
    }

    Ok(())
}
