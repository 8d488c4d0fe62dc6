use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexus-mcp")]
#[command(about = "Personal knowledge base: fuzzy search and knowledge graph over markdown notes", long_about = None)]
pub struct Cli {
    /// Content directory containing trails/ and field-notes/
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the knowledge base over MCP on stdio (default)
    Serve,
    /// Search the knowledge base from the command line
    Find {
        query: String,
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
    /// Print the knowledge graph as JSON
    Graph,
    /// Log a new field note
    Log {
        title: String,
        body: String,
        #[arg(short, long, default_value = "success")]
        status: String,
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
}
