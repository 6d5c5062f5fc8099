//! Get command

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::request::{self, Resource, Target, Verb};
use crate::cli::{send, AuthArgs, PageArgs};
use crate::config::Config;
use crate::error::StatuspageError;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(subcommand)]
    pub resource: Option<GetResource>,
}

#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get a list of pages
    Page(GetPageArgs),

    /// Get a list of components or a component with a specified component identifier
    Component(GetItemArgs),

    /// Get a list of incidents or an incident with a specified incident identifier
    Incident(GetItemArgs),
}

#[derive(Args, Debug)]
pub struct GetPageArgs {
    #[command(flatten)]
    pub auth: AuthArgs,
}

#[derive(Args, Debug)]
pub struct GetItemArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub page: PageArgs,

    /// Resource identifier; lists all when omitted
    #[arg(short, long)]
    pub id: Option<String>,
}

impl GetResource {
    fn auth(&self) -> &AuthArgs {
        match self {
            Self::Page(args) => &args.auth,
            Self::Component(args) | Self::Incident(args) => &args.auth,
        }
    }
}

pub async fn execute(args: GetArgs) -> Result<()> {
    let resource = args
        .resource
        .ok_or(StatuspageError::MissingResource { verb: "get" })?;
    let config = Config::load(resource.auth().api_key.as_deref())?;

    let (kind, target) = match &resource {
        GetResource::Page(_) => (Resource::Page, Target::default()),
        GetResource::Component(args) => (
            Resource::Component,
            Target::new(&args.page.page_id, args.id.as_deref()),
        ),
        GetResource::Incident(args) => (
            Resource::Incident,
            Target::new(&args.page.page_id, args.id.as_deref()),
        ),
    };
    let request = request::build(&config, kind, Verb::Get, target, None)?;

    let response = send(request).await?;
    output::print_body(&response);

    Ok(())
}
