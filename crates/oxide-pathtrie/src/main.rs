//! oxide-pathtrie CLI
//!
//! Loads a JSON route table and resolves paths against it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_pathtrie::{LookupMode, Match, RouteTable, TrieConfig};

/// Resolve paths against a route table.
#[derive(Parser)]
#[command(name = "oxide-pathtrie")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route table file (JSON).
    #[arg(short, long, env = "OXIDE_PATHTRIE_ROUTES", default_value = "routes.json")]
    routes: PathBuf,

    /// Match the longest registered prefix when a path runs past the trie.
    #[arg(long)]
    partial: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one or more paths and print each result as JSON.
    Lookup {
        /// Paths to resolve.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List every handler name in the table.
    Handlers,

    /// Load the table and report how many routes it defines.
    Check,
}

fn match_json(path: &str, matched: Option<&Match<'_, String>>) -> Value {
    match matched {
        Some(m) => json!({
            "path": path,
            "handler": m.handler(),
            "values": m.values(),
            "variables": m.variables(),
            "remainder": m.remainder(),
        }),
        None => json!({ "path": path, "handler": null }),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mode = if cli.partial {
        LookupMode::AllowPartial
    } else {
        LookupMode::Standard
    };
    let table = RouteTable::load(&cli.routes)?;
    let trie = table.build(TrieConfig::new().mode(mode));

    match cli.command {
        Commands::Lookup { paths } => {
            for path in &paths {
                let matched = trie.lookup(path);
                println!("{}", match_json(path, matched.as_ref()));
            }
        }

        Commands::Handlers => {
            let mut handlers: Vec<&String> = trie.handlers().into_iter().collect();
            handlers.sort();
            for handler in handlers {
                println!("{handler}");
            }
        }

        Commands::Check => {
            info!(
                "{} routes, {} distinct templates, {} handlers",
                table.len(),
                trie.len(),
                trie.handlers().len()
            );
        }
    }

    Ok(())
}
