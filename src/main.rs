use anyhow::Context;
use clap::Parser;
use nexus_mcp::cli::{Cli, Commands};
use nexus_mcp::content::{ContentStore, NewFieldNote, write_field_note};
use nexus_mcp::graph::build_graph;
use nexus_mcp::search::SearchIndex;
use nexus_mcp::server::NexusServer;
use nexus_mcp::tools::search::format_results;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nexus_mcp::tracing::init();

    let cli = Cli::parse();
    let root = resolve_root(cli.root);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(root).await,
        Commands::Find { query, limit } => find(root, &query, limit).await,
        Commands::Graph => graph(root).await,
        Commands::Log {
            title,
            body,
            status,
            tags,
        } => log(root, title, body, status, tags).await,
    }
}

/// Resolve the content root: explicit flag, then a `content/` directory
/// under the current working directory, then the cwd itself.
fn resolve_root(flag: Option<PathBuf>) -> Option<PathBuf> {
    if flag.is_some() {
        return flag;
    }
    let cwd = std::env::current_dir().ok()?;
    let content = cwd.join("content");
    if content.is_dir() {
        tracing::info!("Auto-detected content root at {}", content.display());
        return Some(content);
    }
    if cwd.join("trails").is_dir() || cwd.join("field-notes").is_dir() {
        return Some(cwd);
    }
    None
}

async fn serve(root: Option<PathBuf>) -> anyhow::Result<()> {
    tracing::info!("Starting nexus-mcp MCP server");

    let server = NexusServer::new(root);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}

async fn load(root: Option<PathBuf>) -> anyhow::Result<Vec<nexus_mcp::Document>> {
    let root = root.context("no content root found; pass --root")?;
    let store = ContentStore::with_root(root);
    Ok(store.load().await?)
}

async fn find(root: Option<PathBuf>, query: &str, limit: usize) -> anyhow::Result<()> {
    let documents = load(root).await?;
    let index = SearchIndex::build(&documents);
    let mut results = index.search(query);
    results.truncate(limit);

    if results.is_empty() {
        println!("No results for '{}'", query);
    } else {
        print!("{}", format_results(query, &results));
    }
    Ok(())
}

async fn graph(root: Option<PathBuf>) -> anyhow::Result<()> {
    let documents = load(root).await?;
    let graph = build_graph(&documents);
    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}

async fn log(
    root: Option<PathBuf>,
    title: String,
    body: String,
    status: String,
    tags: Vec<String>,
) -> anyhow::Result<()> {
    let root = root.context("no content root found; pass --root")?;
    let mut note = NewFieldNote::new(title, body);
    note.status = status;
    note.tags = tags;

    let path = write_field_note(&root, note).await?;
    println!("Logged field note at {}", path.display());
    Ok(())
}
