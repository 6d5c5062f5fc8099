//! HTTP client for the Statuspage API

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, trace};

use crate::api::request::RequestDescriptor;
use crate::api::response::RawResponse;
use crate::error::{Result, StatuspageError};

/// Hard deadline for a single request, connect through body read
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Statuspage API client
pub struct StatuspageClient {
    client: Client,
}

impl StatuspageClient {
    /// Create a new Statuspage API client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("statuspage/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(StatuspageError::Transport)?;

        Ok(Self { client })
    }

    /// Send the request and read the body, whatever the status code
    pub async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse> {
        debug!("{} {}", request.method, request.url);

        let mut req = self.client.request(request.method, &request.url);

        for (key, value) in request.headers {
            req = req.header(key, value);
        }

        if let Some(body) = request.body {
            debug!("Request body: {}", body);
            req = req.json(&body);
        }

        let response = req.send().await.map_err(StatuspageError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(StatuspageError::BodyRead)?;
        trace!("Response ({}): {}", status, body);

        Ok(RawResponse { status, body })
    }
}
