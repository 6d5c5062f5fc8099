//! Error types shared by the config, validation and request layers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatuspageError {
    #[error("Set API_KEY as environment variable or specify --api-key flag or -k flag.")]
    MissingCredential,

    #[error("missing required flag: --{0}")]
    MissingRequiredFlag(&'static str),

    #[error("invalid {kind} status '{value}'. Valid choices are: {}", .allowed.join(", "))]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("invalid component entry '{0}', expected <component-id>=<status>")]
    InvalidComponentEntry(String),

    #[error("{verb} is not supported for {resource}")]
    UnsupportedOperation {
        verb: &'static str,
        resource: &'static str,
    },

    #[error("statuspage {verb} error: missing required argument. See 'statuspage {verb} -h' for help.")]
    MissingResource { verb: &'static str },

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body")]
    BodyRead(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, StatuspageError>;
