use crate::api::Pipeline;
use crate::config::ScraperConfig;
use crate::services::ActivityLogger;
use crate::tools::extract::extract_description_match;
use crate::tools::fetch::fetch_page;
use crate::types::*;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pumpscrape",
    version,
    about = "Ranked token lists enriched with scraped descriptions (JSON only)"
)]
pub struct Cli {
    /// JSON config file (defaults to the user config dir, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the ranked list and fill in missing descriptions
    List,
    /// Scrape descriptions for one or more token addresses
    Describe {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Raw upstream detail record for a token
    Detail { address: String },
    /// Extract a description from HTML (file path, URL, or '-' for stdin)
    Extract { input: String },
    /// Fetch a page with browser headers and print its HTML
    Fetch { url: String },
    /// Show the activity log, newest first
    Logs(LogsArgs),
}

#[derive(Args)]
struct LogsArgs {
    /// Only error entries
    #[arg(long)]
    errors: bool,
    /// Only entries mentioning this token address
    #[arg(long)]
    token: Option<String>,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ScraperConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.cmd {
        Command::List => {
            let pipeline = Pipeline::new(config)?;
            print_json(&ApiResponse::ok(pipeline.enriched_list().await));
        }
        Command::Describe { ids } => {
            let pipeline = Pipeline::new(config)?;
            print_json(&ApiResponse::ok(pipeline.describe(&ids).await));
        }
        Command::Detail { address } => {
            let pipeline = Pipeline::new(config)?;
            finish(pipeline.token_detail(&address).await);
        }
        Command::Extract { input } => {
            let html = read_input(&input, &config).await?;
            let found = extract_description_match(&html, &config.description_filter());
            print_json(&ApiResponse::ok(found));
        }
        Command::Fetch { url } => {
            let result = fetch_page(&url, config.request_timeout())
                .await
                .map_err(PumpscrapeError::from);
            finish(result);
        }
        Command::Logs(LogsArgs { errors, token }) => {
            let result = ActivityLogger::new().and_then(|l| l.read_logs(token.as_deref(), errors));
            finish(result);
        }
    }
    Ok(())
}

async fn read_input(input: &str, config: &ScraperConfig) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading HTML from stdin")?;
        Ok(buffer)
    } else if input.starts_with("http://") || input.starts_with("https://") {
        Ok(fetch_page(input, config.request_timeout()).await?)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading file '{input}'"))
    }
}

fn finish<T: serde::Serialize>(res: Result<T>) {
    match res {
        Ok(v) => print_json(&ApiResponse::ok(v)),
        Err(e) => print_json(&ApiResponse::<()>::err(e.to_string())),
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing to JSON: {e}"),
    }
}
