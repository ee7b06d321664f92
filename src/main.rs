//! MCP search tools backed by a self-hosted SearXNG instance.
//!
//! Exposes web, news, image, video, repository and quick-answer search as MCP tools over stdio,
//! or runs a single search from the command line.
mod config;
mod searxng_mcp;

use clap::{Args, Parser, Subcommand};
use config::{PluginConfig, SearchConfig};
use dotenv::dotenv;
use rmcp::{transport::stdio, ServiceExt};
use searxng_mcp::{tools, SearXNGClient, SearXNGServer, SearchRequest};
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host configuration file (JSON). Settings are read from `plugins.entries.claw-search.config`
    #[arg(long, env = "CLAW_SEARCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    search: SearchArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for values from the configuration file
#[derive(Args, Debug)]
struct SearchArgs {
    /// Base URL of the SearXNG instance
    #[arg(long, env = "SEARXNG_URL")]
    base_url: Option<String>,

    /// Default number of results per search (1-100)
    #[arg(long, env = "SEARXNG_MAX_RESULTS")]
    max_results: Option<i64>,

    /// Search language code
    #[arg(long, env = "SEARXNG_LANGUAGE")]
    language: Option<String>,

    /// Safe search level for web and news searches (0, 1 or 2)
    #[arg(long, env = "SEARXNG_SAFESEARCH")]
    safesearch: Option<i64>,

    /// Request timeout in seconds
    #[arg(long, env = "SEARXNG_TIMEOUT")]
    timeout: Option<f64>,
}

impl From<SearchArgs> for PluginConfig {
    fn from(args: SearchArgs) -> Self {
        Self {
            base_url: args.base_url,
            max_results: args.max_results,
            language: args.language,
            safesearch: args.safesearch,
            timeout: args.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Starts an MCP server exposing all search tools over stdio
    Mcp,
    /// Runs a single search tool and prints the formatted results
    Search {
        /// Tool to run (see the `tools` command)
        #[arg(long, default_value = "search")]
        tool: String,
        /// Number of results (1-100)
        #[arg(long)]
        count: Option<i64>,
        /// The search query
        query: String,
    },
    /// Lists the registered search tools
    Tools,
}

fn init_logging(command: &Commands) {
    match command {
        Commands::Mcp => {
            // stdout carries the protocol, so only log to a file and only when asked to
            use std::fs::OpenOptions;

            if std::env::var("RUST_LOG").is_ok() {
                if let Ok(log_file) = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open("claw-search.log")
                {
                    env_logger::Builder::from_env("RUST_LOG")
                        .target(env_logger::Target::Pipe(Box::new(log_file)))
                        .init();
                }
            }
        }
        _ => env_logger::init(),
    }
}

fn load_config(
    path: Option<&PathBuf>,
    args: SearchArgs,
) -> Result<SearchConfig, Box<dyn std::error::Error>> {
    let from_file = match path {
        Some(path) => PluginConfig::from_file(path)?,
        None => PluginConfig::default(),
    };
    Ok(SearchConfig::from_plugin_config(from_file.merge(args.into())))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let args = Cli::parse();

    init_logging(&args.command);

    let config = Arc::new(load_config(args.config.as_ref(), args.search)?);
    log::info!(
        "Using SearXNG at {} (language {}, {} results, {}s timeout)",
        config.base_url,
        config.language,
        config.max_results,
        config.timeout_secs
    );

    match args.command {
        Commands::Mcp => {
            let service = SearXNGServer::new(config)
                .serve(stdio())
                .await
                .inspect_err(|e| {
                    log::error!("Failed to start MCP server: {}", e);
                })?;
            service.waiting().await?;
        }
        Commands::Search { tool, count, query } => {
            let Some(tool) = tools::find_tool(&tool) else {
                eprintln!("Unknown tool '{}'. Run the `tools` command to list them.", tool);
                exit(2);
            };

            let output = SearXNGClient::new(config)
                .execute(
                    SearchRequest {
                        query,
                        count,
                        category: tool.category,
                    },
                    tool.style,
                )
                .await;

            if output.is_error {
                eprintln!("{}", output.text);
                exit(1);
            }
            println!("{}", output.text);
        }
        Commands::Tools => {
            for tool in tools::SEARCH_TOOLS.iter() {
                println!("{:<14} [{}] {}", tool.name, tool.category, tool.description);
            }
        }
    }

    Ok(())
}
