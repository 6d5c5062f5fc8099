//! API response types

use reqwest::StatusCode;

/// Response as received from the API: status plus the untouched body text
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}
