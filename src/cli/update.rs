//! Update command

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
pub struct UpdateArgs {
    #[command(subcommand)]
    pub resource: Option<UpdateResource>,
}

#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update a component
    Component(UpdateComponentArgs),

    /// Update an incident
    Incident(UpdateIncidentArgs),
}

#[derive(Args, Debug)]
pub struct UpdateComponentArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub page: PageArgs,

    /// Component identifier
    #[arg(short, long)]
    pub id: String,

    /// Status of the component. Valid choices are: operational, under_maintenance,
    /// degraded_performance, partial_outage, major_outage
    #[arg(short, long)]
    pub status: String,

    /// More detailed description for component
    #[arg(short, long)]
    pub description: Option<String>,

    /// Should this component be showcased
    #[arg(short = 'c', long)]
    pub showcase: bool,
}

#[derive(Args, Debug)]
pub struct UpdateIncidentArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub page: PageArgs,

    /// Incident identifier
    #[arg(short, long)]
    pub id: String,

    /// The incident status. Valid choices are: investigating, identified, monitoring,
    /// resolved, scheduled, in_progress, verifying, completed
    #[arg(short, long)]
    pub status: Option<String>,

    /// Message posted as a new incident update
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

impl UpdateResource {
    fn auth(&self) -> &AuthArgs {
        match self {
            Self::Component(args) => &args.auth,
            Self::Incident(args) => &args.auth,
        }
    }
}

pub async fn execute(args: UpdateArgs) -> Result<()> {
    let resource = args
        .resource
        .ok_or(StatuspageError::MissingResource { verb: "update" })?;
    let config = Config::load(resource.auth().api_key.as_deref())?;

    let request = match resource {
        UpdateResource::Component(args) => {
            let status = help_on_invalid_status(
                Verb::Update,
                Resource::Component,
                args.status.parse::<ComponentStatus>(),
            )?;
            let fields = ComponentFields {
                name: None,
                description: args.description,
                status,
                showcase: args.showcase,
            };
            request::build(
                &config,
                Resource::Component,
                Verb::Update,
                Target::new(&args.page.page_id, Some(args.id.as_str())),
                Some(Payload::Component(fields)),
            )?
        }
        UpdateResource::Incident(args) => {
            let status = help_on_invalid_status(
                Verb::Update,
                Resource::Incident,
                args.status.as_deref().map(str::parse::<IncidentStatus>).transpose(),
            )?;
            let components = help_on_invalid_status(
                Verb::Update,
                Resource::Incident,
                parse_components(args.components),
            )?;
            let fields = IncidentFields {
                name: None,
                status,
                body: args.body,
                components,
            };
            request::build(
                &config,
                Resource::Incident,
                Verb::Update,
                Target::new(&args.page.page_id, Some(args.id.as_str())),
                Some(Payload::Incident(fields)),
            )?
        }
    };

    let response = send(request).await?;
    output::print_body(&response);

    Ok(())
}
