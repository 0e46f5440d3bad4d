pub mod add;
pub mod categories;
pub mod export;
pub mod filter;
pub mod import;
pub mod list;
pub mod show;
pub mod status;
pub mod sync;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotedeck", about = "Local quote collection with server reconciliation.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a random quote
    Show {
        /// Narrow to one category for this draw (overrides the saved filter)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a quote to the collection
    Add {
        /// The quote text
        text: String,

        /// Category label
        category: String,
    },

    /// List every quote in insertion order
    List,

    /// List category labels ("all" first, then first-seen order)
    Categories,

    /// Save the active category filter ("all" matches everything)
    Filter {
        category: String,
    },

    /// Export all quotes to a JSON file
    Export {
        /// Output path (default: quotes.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import quotes from a JSON file
    Import {
        file: PathBuf,
    },

    /// Reconcile with the server once (server state replaces local)
    Sync,

    /// Run the reconciliation loop in the foreground
    Watch,

    /// Stop a running watch loop
    Stop,

    /// Show collection size, active filter, server and watch-loop state
    Status,
}
