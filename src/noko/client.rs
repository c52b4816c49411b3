//! Upstream HTTP client for the Noko API.
//!
//! The wire work sits behind the [`HttpTransport`] trait so dispatch logic
//! can be tested against a recorded transport; [`ReqwestTransport`] is the
//! production implementation.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{CredentialProvider, EnvCredentials, NokoConfig};
use crate::noko::error::{CallError, TransportError};
use crate::noko::request::{expand_period, query_params, HttpMethod, ToolRoute};
use crate::noko::response::{error_message, map_success, ApiSuccess};

/// Header carrying the API token on every upstream request.
pub const TOKEN_HEADER: &str = "X-NokoToken";

/// Client identifier sent as the User-Agent.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A fully marshaled outbound request, one per tool invocation.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    pub token: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// The raw upstream response, before outcome mapping.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Header names lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Black-box capability to exchange one HTTP request for a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, TransportError>;
}

/// Production transport backed by a shared `reqwest` client.
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(request_timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .pool_idle_timeout(Duration::from_secs(900))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create reqwest client");
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };

        builder = builder
            .header(TOKEN_HEADER, &request.token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError(err.to_string()))?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}

/// The request translator: credential check, argument marshaling, one
/// upstream exchange, outcome mapping. Stateless across calls.
pub struct NokoClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialProvider>,
}

impl NokoClient {
    /// Production client reading the token from the environment.
    pub fn new(config: &NokoConfig) -> Self {
        Self::with_parts(
            config.base_url.clone(),
            Arc::new(ReqwestTransport::new(config.request_timeout)),
            Arc::new(EnvCredentials),
        )
    }

    /// Assemble a client from explicit collaborators (used by tests to
    /// inject a mock transport and a fixed credential).
    pub fn with_parts(
        base_url: String,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            base_url,
            transport,
            credentials,
        }
    }

    /// Perform one tool invocation against its fixed route.
    ///
    /// Exactly one upstream call per invocation; no retries. Every failure
    /// mode maps onto a [`CallError`] variant.
    pub async fn call(
        &self,
        route: &ToolRoute,
        arguments: Option<Value>,
    ) -> Result<ApiSuccess, CallError> {
        let token = self
            .credentials
            .api_token()
            .ok_or(CallError::MissingCredential)?;

        let mut args = match arguments {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let (query, body) = match route.method {
            HttpMethod::Get => {
                expand_period(&mut args);
                (query_params(&args), None)
            }
            HttpMethod::Post => (Vec::new(), Some(Value::Object(args))),
        };

        let url = format!("{}{}", self.base_url, route.path);
        log::debug!("forwarding {} {}", route.method, url);

        let response = self
            .transport
            .execute(OutboundRequest {
                method: route.method,
                url,
                token,
                query,
                body,
            })
            .await?;

        log::debug!("Noko responded with status {}", response.status);

        if response.status >= 400 {
            return Err(CallError::UpstreamRejected {
                status: response.status,
                message: error_message(&response.body),
            });
        }

        Ok(map_success(response.status, &response.headers, &response.body))
    }
}
