//! Backend client for the `/bfhl` endpoint
//!
//! The [`BackendClient`] trait is the seam between the form and the network:
//! the TUI and headless mode use [`HttpBackend`], tests can plug in their own.

use serde_json::Value;
use url::Url;

use crate::config::BackendConfig;
use jproc_core::prelude::*;
use jproc_core::ServerResponse;

/// Posts a JSON body and decodes the response
#[trait_variant::make(BackendClient: Send)]
pub trait LocalBackendClient {
    /// POST `body` verbatim and decode the reply.
    ///
    /// Any transport error, non-2xx status or malformed payload is an error.
    async fn submit(&self, body: &Value) -> Result<ServerResponse>;
}

/// reqwest-backed client for a single endpoint
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl BackendClient for HttpBackend {
    async fn submit(&self, body: &Value) -> Result<ServerResponse> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::malformed_response(e.to_string()))?;

        ServerResponse::from_value(payload)
    }
}
