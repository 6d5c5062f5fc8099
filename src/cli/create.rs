//! Create command

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::request::{self, ComponentFields, IncidentFields, Payload, Resource, Target, Verb};
use crate::api::status::{ComponentStatus, IncidentStatus};
use crate::cli::{
    help_on_invalid_status, parse_component_entry, parse_components, send, AuthArgs, PageArgs,
};
use crate::config::Config;
use crate::error::StatuspageError;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(subcommand)]
    pub resource: Option<CreateResource>,
}

#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a component
    Component(CreateComponentArgs),

    /// Create an incident
    Incident(CreateIncidentArgs),
}

#[derive(Args, Debug)]
pub struct CreateComponentArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub page: PageArgs,

    /// Display name for component
    #[arg(short, long)]
    pub name: String,

    /// More detailed description for component
    #[arg(short, long)]
    pub description: String,

    /// Status of the component. Valid choices are: operational, under_maintenance,
    /// degraded_performance, partial_outage, major_outage
    #[arg(short, long)]
    pub status: String,

    /// Should this component be showcased
    #[arg(short = 'c', long)]
    pub showcase: bool,
}

#[derive(Args, Debug)]
pub struct CreateIncidentArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub page: PageArgs,

    /// Incident name
    #[arg(short, long)]
    pub name: String,

    /// The incident status. Valid choices are: investigating, identified, monitoring,
    /// resolved, scheduled, in_progress, verifying, completed
    #[arg(short, long)]
    pub status: Option<String>,

    /// The initial message, created as the first incident update
    #[arg(short, long)]
    pub body: Option<String>,

    /// Status changes to apply to affected components, as <id>=<status>[,<id>=<status>...]
    #[arg(
        short = 'c',
        long,
        value_name = "ID=STATUS",
        value_delimiter = ',',
        value_parser = parse_component_entry
    )]
    pub components: Vec<(String, String)>,
}

impl CreateResource {
    fn auth(&self) -> &AuthArgs {
        match self {
            Self::Component(args) => &args.auth,
            Self::Incident(args) => &args.auth,
        }
    }
}

pub async fn execute(args: CreateArgs) -> Result<()> {
    let resource = args
        .resource
        .ok_or(StatuspageError::MissingResource { verb: "create" })?;
    let config = Config::load(resource.auth().api_key.as_deref())?;

    let request = match resource {
        CreateResource::Component(args) => {
            let status = help_on_invalid_status(
                Verb::Create,
                Resource::Component,
                args.status.parse::<ComponentStatus>(),
            )?;
            let fields = ComponentFields {
                name: Some(args.name),
                description: Some(args.description),
                status,
                showcase: args.showcase,
            };
            request::build(
                &config,
                Resource::Component,
                Verb::Create,
                Target::new(&args.page.page_id, None),
                Some(Payload::Component(fields)),
            )?
        }
        CreateResource::Incident(args) => {
            let status = help_on_invalid_status(
                Verb::Create,
                Resource::Incident,
                args.status.as_deref().map(str::parse::<IncidentStatus>).transpose(),
            )?;
            let components = help_on_invalid_status(
                Verb::Create,
                Resource::Incident,
                parse_components(args.components),
            )?;
            let fields = IncidentFields {
                name: Some(args.name),
                status,
                body: args.body,
                components,
            };
            request::build(
                &config,
                Resource::Incident,
                Verb::Create,
                Target::new(&args.page.page_id, None),
                Some(Payload::Incident(fields)),
            )?
        }
    };

    let response = send(request).await?;
    output::print_body(&response);

    Ok(())
}
