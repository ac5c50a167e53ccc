//! Command line front end for locator resolution
//!
//! Opens a page and runs a single query against it, printing the result as JSON.
//! Handy for checking what a locator resolves to before using it in a test.

use anyhow::Context;
use clap::{Parser, Subcommand};
use element_locator::{BrowserSession, ConnectionOptions, ElementFinder, LaunchOptions, LocatorParser, ParserConfig,
                      QueryContext};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "locate", version, about = "Resolve locators against a live page")]
struct Cli {
    /// Page to open before running the query
    #[arg(long)]
    url: String,

    /// Attach to a running browser instead of launching one
    #[arg(long)]
    ws_url: Option<String>,

    /// Launch with a visible window
    #[arg(long)]
    headed: bool,

    /// JSON file with a custom locator vocabulary
    #[arg(long)]
    parser_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the first matching element
    Find {
        locator: String,
        #[arg(long)]
        tag: Option<String>,
        /// Report absence instead of failing
        #[arg(long)]
        optional: bool,
    },
    /// Find every matching element
    FindAll {
        locator: String,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Check whether some element contains the text
    TextPresent { text: String },
    /// Check whether the element is enabled and not read-only
    Enabled {
        locator: String,
        #[arg(long)]
        tag: Option<String>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let finder = match &cli.parser_config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read parser config {}", path.display()))?;
            ElementFinder::with_parser(LocatorParser::with_config(ParserConfig::from_json(&raw)?))
        }
        None => ElementFinder::new(),
    };

    let session = match cli.ws_url {
        Some(ws_url) => BrowserSession::connect(ConnectionOptions::new(ws_url))?,
        None => BrowserSession::launch(LaunchOptions::new().headless(!cli.headed))?,
    }
    .with_element_finder(finder);

    session.navigate(&cli.url)?;
    session.wait_for_navigation()?;

    let driver = session.driver()?;
    let ctx = QueryContext::new(&driver, session.element_finder());

    let output = match cli.command {
        Command::Find { locator, tag, optional } => {
            let element = ctx.find_element(&locator, tag.as_deref(), !optional, None)?;
            json!({ "locator": locator, "element": element })
        }
        Command::FindAll { locator, tag } => {
            let elements = ctx.find_elements(&locator, tag.as_deref(), None)?;
            json!({ "locator": locator, "count": elements.len(), "elements": elements })
        }
        Command::TextPresent { text } => {
            json!({ "text": text, "present": ctx.is_text_present(&text)? })
        }
        Command::Enabled { locator, tag } => {
            json!({ "locator": locator, "enabled": ctx.is_element_enabled(&locator, tag.as_deref())? })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
