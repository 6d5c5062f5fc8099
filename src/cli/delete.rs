//! Delete command

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::request::{self, Resource, Target, Verb};
use crate::cli::{send, AuthArgs, PageArgs};
use crate::config::Config;
use crate::error::StatuspageError;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(subcommand)]
    pub resource: Option<DeleteResource>,
}

#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a component with a specified component identifier
    Component(DeleteItemArgs),

    /// Delete an incident with a specified incident identifier
    Incident(DeleteItemArgs),
}

#[derive(Args, Debug)]
pub struct DeleteItemArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub page: PageArgs,

    /// Resource identifier
    #[arg(short, long)]
    pub id: String,
}

impl DeleteResource {
    fn item(&self) -> (Resource, &DeleteItemArgs) {
        match self {
            Self::Component(args) => (Resource::Component, args),
            Self::Incident(args) => (Resource::Incident, args),
        }
    }
}

pub async fn execute(args: DeleteArgs) -> Result<()> {
    let resource = args
        .resource
        .ok_or(StatuspageError::MissingResource { verb: "delete" })?;
    let (kind, item) = resource.item();
    let config = Config::load(item.auth.api_key.as_deref())?;

    let target = Target::new(&item.page.page_id, Some(item.id.as_str()));
    let request = request::build(&config, kind, Verb::Delete, target, None)?;

    let response = send(request).await?;
    output::print_status_and_body(&response);

    Ok(())
}
