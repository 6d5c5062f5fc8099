//! CLI commands module

pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::api::request::{RequestDescriptor, Resource, Verb};
use crate::api::response::RawResponse;
use crate::api::status::ComponentStatus;
use crate::api::StatuspageClient;
use crate::error::StatuspageError;

/// Statuspage CLI
#[derive(Parser, Debug)]
#[command(name = "statuspage")]
#[command(version)]
#[command(about = "Manage Statuspage pages, components and incidents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get one or more resources
    Get(get::GetArgs),

    /// Create a resource
    Create(create::CreateArgs),

    /// Update a resource
    Update(update::UpdateArgs),

    /// Delete a resource
    Delete(delete::DeleteArgs),
}

/// Credential flag shared by every resource command
#[derive(Args, Debug, Clone)]
pub struct AuthArgs {
    /// API key to authenticate against the status page API (falls back to API_KEY)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page identifier
    #[arg(short, long)]
    pub page_id: String,
}

pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Get(args) => get::execute(args).await,
        Commands::Create(args) => create::execute(args).await,
        Commands::Update(args) => update::execute(args).await,
        Commands::Delete(args) => delete::execute(args).await,
    }
}

/// Send a built request with a fresh client
pub(crate) async fn send(request: RequestDescriptor) -> Result<RawResponse> {
    let client = StatuspageClient::new()?;
    Ok(client.execute(request).await?)
}

/// Print the `<verb> <resource>` help before surfacing a status value that is not allowed.
pub(crate) fn help_on_invalid_status<T>(
    verb: Verb,
    resource: Resource,
    result: crate::error::Result<T>,
) -> Result<T> {
    result.map_err(|err| {
        if matches!(err, StatuspageError::InvalidEnumValue { .. }) {
            print_help(verb, resource);
        }
        err.into()
    })
}

/// Validate `--components` entries into a component ID to status map.
pub(crate) fn parse_components(
    entries: Vec<(String, String)>,
) -> crate::error::Result<BTreeMap<String, ComponentStatus>> {
    let mut components = BTreeMap::new();
    for (id, status) in entries {
        components.insert(id, status.parse()?);
    }
    Ok(components)
}

/// clap value parser for a single `id=status` entry
pub(crate) fn parse_component_entry(
    entry: &str,
) -> std::result::Result<(String, String), StatuspageError> {
    match entry.split_once('=') {
        Some((id, status)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), status.trim().to_string()))
        }
        _ => Err(StatuspageError::InvalidComponentEntry(entry.to_string())),
    }
}

fn print_help(verb: Verb, resource: Resource) {
    let mut cmd = Cli::command();
    cmd.build();

    if let Some(sub) = cmd
        .find_subcommand_mut(verb.name())
        .and_then(|c| c.find_subcommand_mut(resource.name()))
    {
        let _ = sub.print_help();
    }
}
