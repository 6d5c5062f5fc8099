//! Request construction: URL, method, headers and JSON body per (resource, verb)

use std::collections::BTreeMap;

use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::api::status::{ComponentStatus, IncidentStatus};
use crate::config::Config;
use crate::error::{Result, StatuspageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Page,
    Component,
    Incident,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Component => "component",
            Self::Incident => "incident",
        }
    }

    fn collection(&self) -> &'static str {
        match self {
            Self::Page => "pages",
            Self::Component => "components",
            Self::Incident => "incidents",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Create,
    Update,
    Delete,
}

impl Verb {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Create => Method::POST,
            Self::Update => Method::PATCH,
            Self::Delete => Method::DELETE,
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

/// Identifiers addressing a resource. Empty strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Target<'a> {
    pub page_id: Option<&'a str>,
    pub id: Option<&'a str>,
}

impl<'a> Target<'a> {
    pub fn new(page_id: &'a str, id: Option<&'a str>) -> Self {
        Self {
            page_id: Some(page_id),
            id,
        }
    }

    fn page_id(&self) -> Option<&'a str> {
        self.page_id.filter(|s| !s.is_empty())
    }

    fn id(&self) -> Option<&'a str> {
        self.id.filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct ComponentFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: ComponentStatus,
    pub showcase: bool,
}

#[derive(Debug, Clone, Default)]
pub struct IncidentFields {
    pub name: Option<String>,
    pub status: Option<IncidentStatus>,
    pub body: Option<String>,
    /// Component ID to desired component status
    pub components: BTreeMap<String, ComponentStatus>,
}

/// Validated body fields for a mutating request
#[derive(Debug, Clone)]
pub enum Payload {
    Component(ComponentFields),
    Incident(IncidentFields),
}

/// Everything needed to issue one HTTP request
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

/// Build the request for `verb` on `resource`.
///
/// `payload` is required for create/update and ignored otherwise.
pub fn build(
    config: &Config,
    resource: Resource,
    verb: Verb,
    target: Target<'_>,
    payload: Option<Payload>,
) -> Result<RequestDescriptor> {
    let url = build_url(&config.api_url, resource, verb, target)?;

    let body = if verb.is_mutating() {
        let payload = payload.ok_or(StatuspageError::UnsupportedOperation {
            verb: verb.name(),
            resource: resource.name(),
        })?;
        Some(build_body(resource, verb, payload)?)
    } else {
        None
    };

    let mut headers = vec![("Authorization", format!("OAuth {}", config.api_key))];
    if verb.is_mutating() {
        headers.push(("Content-Type", "application/json".to_string()));
    }

    Ok(RequestDescriptor {
        method: verb.method(),
        url,
        headers,
        body,
    })
}

fn build_url(base: &str, resource: Resource, verb: Verb, target: Target<'_>) -> Result<String> {
    if resource == Resource::Page {
        if verb != Verb::Get {
            return Err(StatuspageError::UnsupportedOperation {
                verb: verb.name(),
                resource: resource.name(),
            });
        }
        return Ok(format!("{}/pages", base));
    }

    let page_id = target
        .page_id()
        .ok_or(StatuspageError::MissingRequiredFlag("page-id"))?;
    let collection = format!("{}/pages/{}/{}", base, page_id, resource.collection());

    match (verb, target.id()) {
        (Verb::Create, _) | (Verb::Get, None) => Ok(collection),
        (_, Some(id)) => Ok(format!("{}/{}", collection, id)),
        (Verb::Update | Verb::Delete, None) => Err(StatuspageError::MissingRequiredFlag("id")),
    }
}

fn build_body(resource: Resource, verb: Verb, payload: Payload) -> Result<Value> {
    match (resource, payload) {
        (Resource::Component, Payload::Component(fields)) => component_body(verb, fields),
        (Resource::Incident, Payload::Incident(fields)) => incident_body(verb, fields),
        _ => Err(StatuspageError::UnsupportedOperation {
            verb: verb.name(),
            resource: resource.name(),
        }),
    }
}

fn required(value: Option<String>, flag: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(StatuspageError::MissingRequiredFlag(flag))
}

fn component_body(verb: Verb, fields: ComponentFields) -> Result<Value> {
    let mut component = Map::new();

    if verb == Verb::Create {
        component.insert("name".into(), json!(required(fields.name, "name")?));
        component.insert(
            "description".into(),
            json!(required(fields.description, "description")?),
        );
    } else if let Some(description) = fields.description {
        component.insert("description".into(), json!(description));
    }

    component.insert("status".into(), json!(fields.status));
    component.insert("showcase".into(), json!(fields.showcase));

    Ok(json!({ "component": component }))
}

fn incident_body(verb: Verb, fields: IncidentFields) -> Result<Value> {
    let mut incident = Map::new();

    if verb == Verb::Create {
        incident.insert("name".into(), json!(required(fields.name, "name")?));
    }
    if let Some(status) = fields.status {
        incident.insert("status".into(), json!(status));
    }
    if let Some(body) = fields.body {
        incident.insert("body".into(), json!(body));
    }

    // The API wants the affected IDs both as a list and as keys of the status map
    if !fields.components.is_empty() {
        let ids: Vec<&String> = fields.components.keys().collect();
        incident.insert("component_ids".into(), json!(ids));
        incident.insert("components".into(), json!(fields.components));
    }

    Ok(json!({ "incident": incident }))
}
