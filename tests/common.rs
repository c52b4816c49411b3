//! Shared test doubles: a recording HTTP transport and fixed credential
//! providers, so dispatch behavior is tested without any network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use noko_mcp_server::config::CredentialProvider;
use noko_mcp_server::mcp::tools::ToolRegistry;
use noko_mcp_server::noko::{
    HttpTransport, NokoClient, OutboundRequest, TransportError, UpstreamResponse,
};

pub const TEST_BASE_URL: &str = "https://noko.test/v2";
pub const TEST_TOKEN: &str = "test_token";

/// Always returns a token.
pub struct FixedToken;

impl CredentialProvider for FixedToken {
    fn api_token(&self) -> Option<String> {
        Some(TEST_TOKEN.to_string())
    }
}

/// Never returns a token.
pub struct NoToken;

impl CredentialProvider for NoToken {
    fn api_token(&self) -> Option<String> {
        None
    }
}

enum MockReply {
    Respond(UpstreamResponse),
    Fail(String),
}

/// Records every outbound request and replies with a canned response.
pub struct MockTransport {
    requests: Mutex<Vec<OutboundRequest>>,
    reply: MockReply,
}

impl MockTransport {
    pub fn respond(status: u16, body: &str) -> Arc<Self> {
        Self::respond_with_headers(status, &[], body)
    }

    pub fn respond_with_headers(status: u16, headers: &[(&str, &str)], body: &str) -> Arc<Self> {
        let headers: HashMap<String, String> = headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: MockReply::Respond(UpstreamResponse {
                status,
                headers,
                body: body.to_string(),
            }),
        })
    }

    pub fn fail(message: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: MockReply::Fail(message.to_string()),
        })
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            MockReply::Respond(response) => Ok(response.clone()),
            MockReply::Fail(message) => Err(TransportError(message.clone())),
        }
    }
}

/// Registry wired to the mock transport with a valid token.
pub fn registry_with(transport: Arc<MockTransport>) -> ToolRegistry {
    let client = NokoClient::with_parts(TEST_BASE_URL.to_string(), transport, Arc::new(FixedToken));
    ToolRegistry::new(client).expect("registry should be consistent")
}

/// Registry wired to the mock transport with no token configured.
pub fn registry_without_token(transport: Arc<MockTransport>) -> ToolRegistry {
    let client = NokoClient::with_parts(TEST_BASE_URL.to_string(), transport, Arc::new(NoToken));
    ToolRegistry::new(client).expect("registry should be consistent")
}
